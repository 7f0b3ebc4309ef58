use super::*;
use crate::domain::{
    models::{AccessLink, TaskSettings},
    ports::{MockContactCenter, MockRecordingStore},
    service::VoicemailTaskServiceImpl,
};
use lambda_runtime::Context;
use std::collections::HashMap;

const RECORDING_EVENT: &str = include_str!("../../../fixtures/s3_recording_event.json");

fn event(raw: &str) -> LambdaEvent<S3Event> {
    LambdaEvent::new(serde_json::from_str(raw).unwrap(), Context::default())
}

fn service(
    contact_center: MockContactCenter,
    recordings: MockRecordingStore,
) -> VoicemailTaskServiceImpl<MockContactCenter, MockRecordingStore> {
    VoicemailTaskServiceImpl::new(
        contact_center,
        recordings,
        TaskSettings {
            instance_id: "instance-1".to_string(),
            contact_flow_id: "flow-1".to_string(),
        },
    )
}

#[tokio::test]
async fn it_creates_a_task_for_the_voicemail_record_only() {
    let mut contact_center = MockContactCenter::new();
    contact_center
        .expect_contact_attributes()
        .withf(|_, contact_id| contact_id.as_ref() == "a1b2c3d4-e5f6-47a8-89b0-c1d2e3f4a5b6")
        .times(1)
        .returning(|_, _| {
            Box::pin(async {
                Ok(HashMap::from([
                    ("voicemail".to_string(), "true".to_string()),
                    (
                        "voicemail-destination".to_string(),
                        "+15551234567".to_string(),
                    ),
                ]))
            })
        });
    contact_center
        .expect_start_task()
        .withf(|task| {
            task.recording_link.as_ref() == "https://example.com/recording.wav"
                && task.destination.as_deref() == Some("+15551234567")
        })
        .times(1)
        .returning(|_| Box::pin(async { Ok("task-1".to_string()) }));

    let mut recordings = MockRecordingStore::new();
    recordings
        .expect_presigned_link()
        .withf(|bucket, key, _| {
            bucket == "connect-voicemail-recordings"
                && key
                    == "voicemail/2024/01/15/a1b2c3d4-e5f6-47a8-89b0-c1d2e3f4a5b6_20240115T10:00_UTC.wav"
        })
        .times(1)
        .returning(|_, _, _| {
            Box::pin(async { Ok(AccessLink("https://example.com/recording.wav".to_string())) })
        });

    let ack = handler(&service(contact_center, recordings), event(RECORDING_EVENT))
        .await
        .unwrap();

    assert_eq!(serde_json::to_value(ack).unwrap(), serde_json::json!({}));
}

#[tokio::test]
async fn it_acknowledges_even_when_every_record_fails() {
    let mut contact_center = MockContactCenter::new();
    contact_center
        .expect_contact_attributes()
        .times(1)
        .returning(|_, _| Box::pin(async { Err(anyhow::anyhow!("access denied")) }));

    let ack = handler(
        &service(contact_center, MockRecordingStore::new()),
        event(RECORDING_EVENT),
    )
    .await
    .unwrap();

    assert_eq!(serde_json::to_value(ack).unwrap(), serde_json::json!({}));
}

#[tokio::test]
async fn it_acknowledges_empty_events() {
    let ack = handler(
        &service(MockContactCenter::new(), MockRecordingStore::new()),
        event(r#"{"Records": []}"#),
    )
    .await
    .unwrap();

    assert_eq!(serde_json::to_value(ack).unwrap(), serde_json::json!({}));
}
