//! The voicemail pipeline.
//!
//! Every record walks the same gates in order: event kind, contact id, eligibility
//! (with enrichment when no destination is known), recording link, task. Each gate
//! either hands its output to the next one or ends the record with a [SkipReason].

use crate::domain::{
    models::{
        AccessLink, BatchReport, ContactId, RECORDING_LINK_TTL, RecordOutcome, SkipReason,
        TaskRequest, TaskSettings, UploadRecord, VoicemailEligibility,
    },
    ports::{ContactCenter, RecordingStore, VoicemailTaskService},
};


/// concrete struct which implements [VoicemailTaskService]
pub struct VoicemailTaskServiceImpl<C, S> {
    contact_center: C,
    recordings: S,
    settings: TaskSettings,
}

impl<C, S> VoicemailTaskServiceImpl<C, S>
where
    C: ContactCenter,
    anyhow::Error: From<C::Err>,
    S: RecordingStore,
    anyhow::Error: From<S::Err>,
{
    pub fn new(contact_center: C, recordings: S, settings: TaskSettings) -> Self {
        VoicemailTaskServiceImpl {
            contact_center,
            recordings,
            settings,
        }
    }

    /// Looks up whether the contact left a voicemail.
    /// A failed lookup is treated the same as a contact that did not.
    #[tracing::instrument(skip(self))]
    async fn resolve_eligibility(
        &self,
        contact_id: &ContactId,
    ) -> Result<VoicemailEligibility, SkipReason> {
        let attributes = self
            .contact_center
            .contact_attributes(&self.settings.instance_id, contact_id)
            .await
            .map_err(anyhow::Error::from)
            .map_err(|e| {
                tracing::warn!(error=?e, "unable to get contact attributes");
                SkipReason::AttributeLookupFailed(format!("{e:#}"))
            })?;

        tracing::info!(attributes=?attributes, "retrieved contact attributes");

        let eligibility = VoicemailEligibility::from_attributes(&attributes);
        if !eligibility.is_voicemail {
            return Err(SkipReason::NotVoicemail);
        }

        if eligibility.destination.is_none() {
            self.enrich_contact(contact_id).await?;
        }

        Ok(eligibility)
    }

    /// Describes a contact which has no voicemail destination.
    /// The details are only logged, a failed lookup skips the record.
    #[tracing::instrument(skip(self))]
    async fn enrich_contact(&self, contact_id: &ContactId) -> Result<(), SkipReason> {
        let details = self
            .contact_center
            .contact_details(&self.settings.instance_id, contact_id)
            .await
            .map_err(anyhow::Error::from)
            .map_err(|e| {
                tracing::error!(error=?e, "unable to get contact details");
                SkipReason::EnrichmentFailed(format!("{e:#}"))
            })?;

        tracing::info!(details=?details, "retrieved contact details");

        Ok(())
    }

    #[tracing::instrument(skip(self, record), fields(bucket=%record.bucket))]
    async fn issue_link(&self, record: &UploadRecord) -> Result<AccessLink, SkipReason> {
        let key = record.decoded_key().map_err(|e| {
            tracing::warn!(error=?e, key=%record.key, "unable to decode key");
            SkipReason::UndecodableKey(e.to_string())
        })?;

        self.recordings
            .presigned_link(&record.bucket, &key, RECORDING_LINK_TTL)
            .await
            .map_err(anyhow::Error::from)
            .map_err(|e| {
                tracing::error!(error=?e, key=%key, "unable to create presigned url");
                SkipReason::LinkIssueFailed(format!("{e:#}"))
            })
    }

    /// Walks every gate up to the point where a task can be created
    async fn prepare_task(&self, record: &UploadRecord) -> Result<TaskRequest, SkipReason> {
        if record.kind().is_none() {
            return Err(SkipReason::UnsupportedEvent(record.event_name.clone()));
        }

        let contact_id = ContactId::extract(&record.key).ok_or(SkipReason::NoContactId)?;
        tracing::debug!(contact_id=%contact_id, "found contact id");

        let eligibility = self.resolve_eligibility(&contact_id).await?;
        let link = self.issue_link(record).await?;

        Ok(TaskRequest::new(
            &self.settings,
            contact_id,
            link,
            eligibility.destination,
        ))
    }

    #[tracing::instrument(skip(self, task), fields(contact_id=%task.related_contact_id))]
    async fn dispatch_task(&self, task: TaskRequest) -> anyhow::Result<String> {
        tracing::info!(task=?task, "creating task");
        let task_id = self.contact_center.start_task(task).await?;
        Ok(task_id)
    }
}

impl<C, S> VoicemailTaskService for VoicemailTaskServiceImpl<C, S>
where
    C: ContactCenter,
    anyhow::Error: From<C::Err>,
    S: RecordingStore,
    anyhow::Error: From<S::Err>,
{
    #[tracing::instrument(skip(self, record), fields(event_name=%record.event_name, key=%record.key))]
    async fn process_record(&self, record: &UploadRecord) -> RecordOutcome {
        let task = match self.prepare_task(record).await {
            Ok(task) => task,
            Err(reason) if reason.is_expected() => {
                tracing::debug!(reason=%reason, "skipping record");
                return RecordOutcome::Skipped(reason);
            }
            Err(reason) => {
                tracing::warn!(reason=%reason, "skipping record");
                return RecordOutcome::Skipped(reason);
            }
        };

        let contact_id = task.related_contact_id.clone();
        match self.dispatch_task(task).await {
            Ok(task_id) => {
                tracing::info!(contact_id=%contact_id, task_id=%task_id, "created voicemail task");
                RecordOutcome::Dispatched {
                    contact_id,
                    task_id,
                }
            }
            Err(e) => {
                tracing::error!(error=?e, contact_id=%contact_id, "unable to create task");
                RecordOutcome::Failed {
                    contact_id,
                    cause: format!("{e:#}"),
                }
            }
        }
    }

    #[tracing::instrument(skip(self, records), fields(record_count=records.len()))]
    async fn process_batch(&self, records: Vec<UploadRecord>) -> BatchReport {
        let mut outcomes = Vec::with_capacity(records.len());
        for record in records.iter() {
            outcomes.push(self.process_record(record).await);
        }

        BatchReport { outcomes }
    }
}
