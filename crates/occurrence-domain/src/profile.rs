use occurrence_types::{Frame, Platform};
use time::OffsetDateTime;

/// The transaction a profile was recorded during.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Transaction {
    /// Correlation id.
    pub id: String,
    /// Display name, e.g. a screen or route.
    pub name: String,
}

/// Device and OS descriptors reported with a profile. Empty string means unknown.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ProfileMetadata {
    pub device_classification: String,
    pub device_locale: String,
    pub device_manufacturer: String,
    pub device_model: String,
    pub device_os_name: String,
    pub device_os_version: String,
    pub device_os_build_number: String,
}

/// Read-only view of a finished profiling session.
///
/// Assembly needs nothing else from a profile, so any session representation can
/// implement this.
///
/// Timestamps may carry any offset; assembly stores them in UTC. They must fall in
/// years 0 through 9999, the range RFC 3339 can represent, or the assembled record
/// will fail to serialize.
pub trait Profile {
    fn id(&self) -> &str;
    fn project_id(&self) -> u64;
    fn environment(&self) -> &str;
    fn platform(&self) -> Platform;
    /// When the backend received the profile.
    fn received(&self) -> OffsetDateTime;
    /// Release identifier; empty when unknown.
    fn release(&self) -> &str;
    /// When the session itself started.
    fn timestamp(&self) -> OffsetDateTime;
    fn transaction(&self) -> Transaction;
    fn metadata(&self) -> ProfileMetadata;
}

/// Call-tree location blamed by analysis.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct CallTreeNode {
    pub package: String,
    pub name: String,
}

/// The suspect node and the frames leading to it.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct NodeInfo {
    pub node: CallTreeNode,
    /// In the order analysis produced them; assembly never reorders.
    pub stack_trace: Vec<Frame>,
}
