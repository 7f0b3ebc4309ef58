use anyhow::Context;
use aws_sdk_connect::Client;
use std::collections::HashMap;

pub async fn get_contact_attributes(
    client: &Client,
    instance_id: &str,
    contact_id: &str,
) -> anyhow::Result<HashMap<String, String>> {
    let resp = client
        .get_contact_attributes()
        .instance_id(instance_id)
        .initial_contact_id(contact_id)
        .send()
        .await
        .context(format!("could not get attributes for contact {contact_id}"))?;

    Ok(resp.attributes.unwrap_or_default())
}
