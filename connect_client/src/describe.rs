use anyhow::Context;
use aws_sdk_connect::Client;
use aws_sdk_connect::types::Contact;

/// The parts of a described contact that are worth logging
#[derive(serde::Serialize, Debug, Clone, Default, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct ContactSummary {
    pub id: String,
    pub channel: Option<String>,
    pub initiation_method: Option<String>,
    /// seconds since the unix epoch
    pub initiation_timestamp: Option<i64>,
    pub previous_contact_id: Option<String>,
    pub queue_id: Option<String>,
    pub agent_id: Option<String>,
}

impl From<&Contact> for ContactSummary {
    fn from(contact: &Contact) -> Self {
        ContactSummary {
            id: contact.id().unwrap_or_default().to_string(),
            channel: contact.channel().map(|c| c.as_str().to_string()),
            initiation_method: contact.initiation_method().map(|m| m.as_str().to_string()),
            initiation_timestamp: contact.initiation_timestamp().map(|t| t.secs()),
            previous_contact_id: contact.previous_contact_id().map(str::to_string),
            queue_id: contact
                .queue_info()
                .and_then(|q| q.id())
                .map(str::to_string),
            agent_id: contact
                .agent_info()
                .and_then(|a| a.id())
                .map(str::to_string),
        }
    }
}

pub async fn describe_contact(
    client: &Client,
    instance_id: &str,
    contact_id: &str,
) -> anyhow::Result<ContactSummary> {
    let resp = client
        .describe_contact()
        .instance_id(instance_id)
        .contact_id(contact_id)
        .send()
        .await
        .context(format!("could not describe contact {contact_id}"))?;

    let contact = resp
        .contact()
        .ok_or_else(|| anyhow::anyhow!("contact {contact_id} missing from describe response"))?;

    Ok(ContactSummary::from(contact))
}

#[cfg(test)]
mod tests {
    use super::*;
    use aws_sdk_connect::primitives::DateTime;
    use aws_sdk_connect::types::{AgentInfo, Channel, ContactInitiationMethod, QueueInfo};

    #[test]
    fn it_summarizes_a_voice_contact() {
        let contact = Contact::builder()
            .id("a1b2c3d4-e5f6-47a8-89b0-c1d2e3f4a5b6")
            .channel(Channel::Voice)
            .initiation_method(ContactInitiationMethod::Inbound)
            .initiation_timestamp(DateTime::from_secs(1_700_000_000))
            .queue_info(QueueInfo::builder().id("queue-1").build())
            .agent_info(AgentInfo::builder().id("agent-1").build())
            .build();

        let summary = ContactSummary::from(&contact);

        assert_eq!(
            summary,
            ContactSummary {
                id: "a1b2c3d4-e5f6-47a8-89b0-c1d2e3f4a5b6".to_string(),
                channel: Some("VOICE".to_string()),
                initiation_method: Some("INBOUND".to_string()),
                initiation_timestamp: Some(1_700_000_000),
                previous_contact_id: None,
                queue_id: Some("queue-1".to_string()),
                agent_id: Some("agent-1".to_string()),
            }
        );
    }

    #[test]
    fn it_serializes_camel_case() {
        let summary = ContactSummary {
            id: "abc".to_string(),
            queue_id: Some("queue-1".to_string()),
            ..Default::default()
        };

        let json = serde_json::to_value(&summary).unwrap();

        assert_eq!(json["id"], "abc");
        assert_eq!(json["queueId"], "queue-1");
        assert!(json["agentId"].is_null());
    }
}
