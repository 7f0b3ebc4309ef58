//! The ports the voicemail pipeline requires from the outside world, and the
//! service interface it exposes to the inbound adapter

use crate::domain::models::{
    AccessLink, BatchReport, ContactDetails, ContactId, RecordOutcome, TaskRequest, UploadRecord,
};
use std::{collections::HashMap, time::Duration};

/// The contact center platform contacts and tasks live in
#[cfg_attr(test, mockall::automock(type Err = anyhow::Error;))]
pub trait ContactCenter: Send + Sync + 'static {
    /// the error type that can occur
    type Err: Send;

    /// fetch the user defined attributes of a contact
    fn contact_attributes(
        &self,
        instance_id: &str,
        contact_id: &ContactId,
    ) -> impl Future<Output = Result<HashMap<String, String>, Self::Err>> + Send;

    /// describe a contact
    fn contact_details(
        &self,
        instance_id: &str,
        contact_id: &ContactId,
    ) -> impl Future<Output = Result<ContactDetails, Self::Err>> + Send;

    /// create a task, returning the id of the new task contact
    fn start_task(
        &self,
        task: TaskRequest,
    ) -> impl Future<Output = Result<String, Self::Err>> + Send;
}

/// The object store recordings are uploaded to
#[cfg_attr(test, mockall::automock(type Err = anyhow::Error;))]
pub trait RecordingStore: Send + Sync + 'static {
    /// the error type that can occur
    type Err: Send;

    /// issue a read only link to exactly this object. `key` must already be decoded.
    fn presigned_link(
        &self,
        bucket: &str,
        key: &str,
        expires_in: Duration,
    ) -> impl Future<Output = Result<AccessLink, Self::Err>> + Send;
}

/// The interface the inbound adapter drives
pub trait VoicemailTaskService: Send + Sync + 'static {
    /// run the pipeline for a single record
    fn process_record(
        &self,
        record: &UploadRecord,
    ) -> impl Future<Output = RecordOutcome> + Send;

    /// run the pipeline for every record, in order, one at a time
    fn process_batch(
        &self,
        records: Vec<UploadRecord>,
    ) -> impl Future<Output = BatchReport> + Send;
}
