use crate::domain::{
    models::{ContactDetails, ContactId, TaskRequest},
    ports::ContactCenter,
};
use connect_client::{Connect, ContactSummary, StartTask};
use std::collections::HashMap;

impl From<ContactSummary> for ContactDetails {
    fn from(summary: ContactSummary) -> Self {
        ContactDetails {
            channel: summary.channel,
            initiation_method: summary.initiation_method,
            initiation_timestamp: summary.initiation_timestamp,
            previous_contact_id: summary.previous_contact_id,
            queue_id: summary.queue_id,
            agent_id: summary.agent_id,
        }
    }
}

impl From<TaskRequest> for StartTask {
    fn from(task: TaskRequest) -> Self {
        StartTask {
            url_references: task.references(),
            attributes: task.attributes(),
            instance_id: task.instance_id,
            contact_flow_id: task.contact_flow_id,
            name: task.name,
            related_contact_id: task.related_contact_id.to_string(),
        }
    }
}

impl ContactCenter for Connect {
    type Err = anyhow::Error;

    async fn contact_attributes(
        &self,
        instance_id: &str,
        contact_id: &ContactId,
    ) -> anyhow::Result<HashMap<String, String>> {
        self.get_contact_attributes(instance_id, contact_id.as_ref())
            .await
    }

    async fn contact_details(
        &self,
        instance_id: &str,
        contact_id: &ContactId,
    ) -> anyhow::Result<ContactDetails> {
        let summary = self
            .describe_contact(instance_id, contact_id.as_ref())
            .await?;
        Ok(summary.into())
    }

    async fn start_task(&self, task: TaskRequest) -> anyhow::Result<String> {
        self.start_task_contact(task.into()).await
    }
}
