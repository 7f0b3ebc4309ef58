use aws_lambda_events::event::s3::S3EventRecord;
use regex::Regex;
use std::{
    borrow::Cow,
    collections::{BTreeMap, HashMap},
    fmt::Display,
    str::FromStr,
    string::FromUtf8Error,
    sync::LazyLock,
    time::Duration,
};
use thiserror::Error;


/// How long an issued recording link stays valid
pub const RECORDING_LINK_TTL: Duration = Duration::from_secs(48 * 60 * 60);

/// The name every voicemail task is created with
pub const TASK_NAME: &str = "New voicemail";

/// The name of the url reference which points at the recording
pub const RECORDING_REFERENCE: &str = "Recording";

/// Contact attribute which marks the contact as having left a voicemail
pub const VOICEMAIL_ATTRIBUTE: &str = "voicemail";

/// Contact attribute which holds where the voicemail should be routed
pub const DESTINATION_ATTRIBUTE: &str = "voicemail-destination";

static CONTACT_ID_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)[0-9a-f]{8}-[0-9a-f]{4}-[0-9a-f]{4}-[0-9a-f]{4}-[0-9a-f]{12}").unwrap()
});

/// The id of a contact in Amazon Connect.
/// This is always taken verbatim from an object key, never generated.
#[derive(serde::Serialize, Debug, Clone, PartialEq, Eq, Hash)]
#[serde(transparent)]
pub struct ContactId(String);

impl ContactId {
    /// Finds the first uuid shaped substring of the key, case is preserved
    pub fn extract(key: &str) -> Option<Self> {
        CONTACT_ID_REGEX
            .find(key)
            .map(|m| ContactId(m.as_str().to_string()))
    }
}

impl AsRef<str> for ContactId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl Display for ContactId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// The s3 event names which can carry a new recording
#[derive(Debug, Clone, Copy, PartialEq, Eq, strum::EnumString, strum::Display)]
pub enum UploadEventKind {
    #[strum(serialize = "ObjectCreated:Put")]
    Put,
    #[strum(serialize = "ObjectCreated:CompleteMultipartUpload")]
    CompleteMultipartUpload,
}

/// The parts of an s3 event record the pipeline cares about
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UploadRecord {
    pub event_name: String,
    pub bucket: String,
    /// url encoded, exactly as it arrived in the event
    pub key: String,
}

impl UploadRecord {
    /// the [UploadEventKind] of this record, [None] for any other event
    pub fn kind(&self) -> Option<UploadEventKind> {
        UploadEventKind::from_str(&self.event_name).ok()
    }

    /// the object key with percent encoding removed
    pub fn decoded_key(&self) -> Result<Cow<'_, str>, FromUtf8Error> {
        urlencoding::decode(&self.key)
    }
}

impl From<&S3EventRecord> for UploadRecord {
    fn from(record: &S3EventRecord) -> Self {
        UploadRecord {
            event_name: record.event_name.clone().unwrap_or_default(),
            bucket: record.s3.bucket.name.clone().unwrap_or_default(),
            key: record.s3.object.key.clone().unwrap_or_default(),
        }
    }
}

/// Whether a contact left a voicemail and where it should go
#[derive(serde::Serialize, Debug, Clone, Default, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct VoicemailEligibility {
    pub is_voicemail: bool,
    pub destination: Option<String>,
}

impl VoicemailEligibility {
    /// Reads the eligibility out of the user defined contact attributes.
    /// Missing attributes leave the fail closed defaults in place.
    pub fn from_attributes(attributes: &HashMap<String, String>) -> Self {
        let is_voicemail = attributes
            .get(VOICEMAIL_ATTRIBUTE)
            .map(String::as_str)
            .is_some_and(is_truthy);

        let destination = attributes
            .get(DESTINATION_ATTRIBUTE)
            .map(|d| d.trim())
            .filter(|d| !d.is_empty())
            .map(str::to_string);

        VoicemailEligibility {
            is_voicemail,
            destination,
        }
    }
}

fn is_truthy(value: &str) -> bool {
    matches!(
        value.trim().to_ascii_lowercase().as_str(),
        "true" | "yes" | "1"
    )
}

/// Snapshot of a described contact. Only ever logged.
#[derive(serde::Serialize, Debug, Clone, Default, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct ContactDetails {
    pub channel: Option<String>,
    pub initiation_method: Option<String>,
    pub initiation_timestamp: Option<i64>,
    pub previous_contact_id: Option<String>,
    pub queue_id: Option<String>,
    pub agent_id: Option<String>,
}

/// A time limited read link for a recording
#[derive(serde::Serialize, Debug, Clone, PartialEq, Eq)]
#[serde(transparent)]
pub struct AccessLink(pub String);

impl AsRef<str> for AccessLink {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// The fixed parts of every task, resolved once at startup
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaskSettings {
    /// the Amazon Connect instance every lookup and task is scoped to
    pub instance_id: String,
    /// the contact flow new tasks are routed into
    pub contact_flow_id: String,
}

/// Everything needed to create a voicemail follow up task
#[derive(serde::Serialize, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct TaskRequest {
    pub related_contact_id: ContactId,
    pub contact_flow_id: String,
    pub instance_id: String,
    pub name: String,
    pub recording_link: AccessLink,
    pub destination: Option<String>,
}

impl TaskRequest {
    pub fn new(
        settings: &TaskSettings,
        related_contact_id: ContactId,
        recording_link: AccessLink,
        destination: Option<String>,
    ) -> Self {
        TaskRequest {
            related_contact_id,
            contact_flow_id: settings.contact_flow_id.clone(),
            instance_id: settings.instance_id.clone(),
            name: TASK_NAME.to_string(),
            recording_link,
            destination,
        }
    }

    /// url references attached to the task, by name
    pub fn references(&self) -> BTreeMap<String, String> {
        BTreeMap::from([(
            RECORDING_REFERENCE.to_string(),
            self.recording_link.0.clone(),
        )])
    }

    /// custom attributes attached to the task. An unresolved destination is left out.
    pub fn attributes(&self) -> BTreeMap<String, String> {
        self.destination
            .iter()
            .map(|d| (DESTINATION_ATTRIBUTE.to_string(), d.clone()))
            .collect()
    }
}

/// Why a record did not produce a task
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SkipReason {
    #[error("event {0} does not create an object")]
    UnsupportedEvent(String),
    #[error("no contact id in object key")]
    NoContactId,
    #[error("contact is not a voicemail")]
    NotVoicemail,
    #[error("contact attribute lookup failed: {0}")]
    AttributeLookupFailed(String),
    #[error("contact detail lookup failed: {0}")]
    EnrichmentFailed(String),
    #[error("object key is not valid utf-8 once decoded: {0}")]
    UndecodableKey(String),
    #[error("could not issue recording link: {0}")]
    LinkIssueFailed(String),
}

impl SkipReason {
    /// true for records that were never meant for this pipeline
    pub fn is_expected(&self) -> bool {
        matches!(
            self,
            SkipReason::UnsupportedEvent(_) | SkipReason::NoContactId | SkipReason::NotVoicemail
        )
    }
}

/// The terminal state of a single record
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RecordOutcome {
    Dispatched {
        contact_id: ContactId,
        task_id: String,
    },
    Skipped(SkipReason),
    /// the task could not be created. Reported like a skip.
    Failed { contact_id: ContactId, cause: String },
}

/// The outcomes of a batch, in record order
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BatchReport {
    pub outcomes: Vec<RecordOutcome>,
}

impl BatchReport {
    pub fn dispatched(&self) -> usize {
        self.count(|o| matches!(o, RecordOutcome::Dispatched { .. }))
    }

    pub fn skipped(&self) -> usize {
        self.count(|o| matches!(o, RecordOutcome::Skipped(_)))
    }

    pub fn failed(&self) -> usize {
        self.count(|o| matches!(o, RecordOutcome::Failed { .. }))
    }

    fn count(&self, f: impl Fn(&RecordOutcome) -> bool) -> usize {
        self.outcomes.iter().filter(|o| f(o)).count()
    }
}

/// What the lambda hands back to its invoker, always `{}`
#[derive(serde::Serialize, Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Acknowledgement {}
