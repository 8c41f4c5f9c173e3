use crate::category::{EvidenceName, IssueTitle, OccurrenceType};
use crate::frame::StackTrace;
use crate::platform::Platform;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use serde_json::Value as JsonValue;
use std::collections::BTreeMap;
use std::fmt;
use time::OffsetDateTime;

/// Locally generated record identity. Never derived from content.
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(transparent)]
pub struct OccurrenceId(String);

impl OccurrenceId {
    pub fn new<S: Into<String>>(s: S) -> Self {
        Self(s.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for OccurrenceId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// A human-readable fact about a detection.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct Evidence {
    pub name: EvidenceName,
    pub value: String,
    pub important: bool,
}

/// Snapshot of the profiling session an occurrence was detected in.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct Event {
    pub environment: String,
    #[serde(rename = "event_id")]
    pub id: String,
    pub platform: Platform,
    pub project_id: u64,
    #[schemars(with = "String")]
    #[serde(with = "time::serde::rfc3339")]
    pub received: OffsetDateTime,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub release: String,
    #[serde(rename = "stacktrace")]
    pub stack_trace: StackTrace,
    pub tags: BTreeMap<String, String>,
    #[schemars(with = "String")]
    #[serde(with = "time::serde::rfc3339")]
    pub timestamp: OffsetDateTime,
    /// Correlation id of the transaction the profile belongs to.
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub transaction: String,
}

/// A normalized record of one detected issue instance.
///
/// `fingerprint` groups occurrences into issues downstream; `id` is unique per record.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct Occurrence {
    #[schemars(with = "String")]
    #[serde(with = "time::serde::rfc3339")]
    pub detection_time: OffsetDateTime,
    pub event: Event,

    /// Machine-consumable facts (kept open-ended for forward compatibility).
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub evidence_data: BTreeMap<String, JsonValue>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub evidence_display: Vec<Evidence>,

    pub fingerprint: String,
    pub id: OccurrenceId,
    pub issue_title: IssueTitle,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub level: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub resource_id: Option<String>,

    pub subtitle: String,
    #[schemars(with = "u32")]
    #[serde(rename = "type")]
    pub kind: OccurrenceType,
}
