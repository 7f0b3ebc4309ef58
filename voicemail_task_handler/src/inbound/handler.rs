use crate::domain::{
    models::{Acknowledgement, UploadRecord},
    ports::VoicemailTaskService,
};
use aws_lambda_events::event::s3::S3Event;
use lambda_runtime::{Error, LambdaEvent};

#[cfg(test)]
mod tests;

/// Processes the s3 event.
/// Outcomes are only reported through logs, the invoker always gets `{}` back.
#[tracing::instrument(skip(service, event), fields(request_id=%event.context.request_id))]
pub async fn handler<S>(service: &S, event: LambdaEvent<S3Event>) -> Result<Acknowledgement, Error>
where
    S: VoicemailTaskService,
{
    tracing::info!(
        record_count = event.payload.records.len(),
        "processing s3 records"
    );
    tracing::debug!(event=?event.payload, "received event");

    let records: Vec<UploadRecord> = event
        .payload
        .records
        .iter()
        .map(UploadRecord::from)
        .inspect(|record| {
            let key = record.decoded_key().unwrap_or_else(|_| record.key.as_str().into());
            tracing::info!(key=%key, event_name=%record.event_name, "processing s3 key");
        })
        .collect();

    let report = service.process_batch(records).await;

    tracing::info!(
        dispatched = report.dispatched(),
        skipped = report.skipped(),
        failed = report.failed(),
        "processing complete"
    );

    Ok(Acknowledgement::default())
}
