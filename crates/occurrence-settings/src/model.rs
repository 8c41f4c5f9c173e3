use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

pub const SCHEMA_CONFIG_V1: &str = "occurrence.config.v1";

/// `occurrence.toml` schema v1.
///
/// This is a *user-facing* config model: it is intentionally permissive so forward-compat is easy.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct OccurrenceConfigV1 {
    /// Optional schema string for tooling (`occurrence.config.v1`).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub schema: Option<String>,

    /// Catalog key of the issue category to emit (`blocking_main_thread`).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub issue: Option<String>,

    /// Pretty-print emitted JSON.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pretty: Option<bool>,
}
