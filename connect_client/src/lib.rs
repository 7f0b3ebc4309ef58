use std::collections::HashMap;

mod attributes;
mod describe;
mod start_task;

pub use describe::ContactSummary;
pub use start_task::StartTask;

#[derive(Clone, Debug)]
pub struct Connect {
    inner: aws_sdk_connect::Client,
}

impl Connect {
    pub fn new(inner: aws_sdk_connect::Client) -> Self {
        Self { inner }
    }

    /// Retrieves the user defined attributes of the contact.
    #[tracing::instrument(skip(self))]
    pub async fn get_contact_attributes(
        &self,
        instance_id: &str,
        contact_id: &str,
    ) -> anyhow::Result<HashMap<String, String>> {
        attributes::get_contact_attributes(&self.inner, instance_id, contact_id).await
    }

    /// Describes the contact.
    #[tracing::instrument(skip(self))]
    pub async fn describe_contact(
        &self,
        instance_id: &str,
        contact_id: &str,
    ) -> anyhow::Result<ContactSummary> {
        describe::describe_contact(&self.inner, instance_id, contact_id).await
    }

    /// Starts a new task contact and returns its contact id.
    #[tracing::instrument(skip(self))]
    pub async fn start_task_contact(&self, task: StartTask) -> anyhow::Result<String> {
        start_task::start_task_contact(&self.inner, task).await
    }
}
