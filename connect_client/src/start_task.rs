use anyhow::Context;
use aws_sdk_connect::Client;
use aws_sdk_connect::types::{Reference, ReferenceType};
use std::collections::{BTreeMap, HashMap};

/// The parameters of a task contact
#[derive(serde::Serialize, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct StartTask {
    pub instance_id: String,
    pub contact_flow_id: String,
    pub name: String,
    /// the contact this task is a follow up for
    pub related_contact_id: String,
    /// reference name -> url
    pub url_references: BTreeMap<String, String>,
    pub attributes: BTreeMap<String, String>,
}

fn url_references(refs: &BTreeMap<String, String>) -> anyhow::Result<HashMap<String, Reference>> {
    refs.iter()
        .map(|(name, url)| -> anyhow::Result<(String, Reference)> {
            let reference = Reference::builder()
                .r#type(ReferenceType::Url)
                .value(url)
                .build()
                .context(format!("invalid url reference {name}"))?;
            Ok((name.clone(), reference))
        })
        .collect()
}

pub async fn start_task_contact(client: &Client, task: StartTask) -> anyhow::Result<String> {
    let references = url_references(&task.url_references)?;

    let resp = client
        .start_task_contact()
        .instance_id(task.instance_id)
        .contact_flow_id(task.contact_flow_id)
        .name(task.name)
        .related_contact_id(&task.related_contact_id)
        .set_references(Some(references))
        .set_attributes(Some(task.attributes.into_iter().collect()))
        .send()
        .await
        .context(format!(
            "could not start task for contact {}",
            task.related_contact_id
        ))?;

    resp.contact_id()
        .map(str::to_string)
        .ok_or_else(|| anyhow::anyhow!("start task response did not include a contact id"))
}
