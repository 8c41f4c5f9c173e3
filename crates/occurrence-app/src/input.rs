//! JSON input documents: a finished profile and the suspect node found in it.

use occurrence_domain::{CallTreeNode, NodeInfo, Profile, ProfileMetadata, Transaction};
use occurrence_types::{Frame, Platform};
use serde::{Deserialize, Serialize};
use time::OffsetDateTime;

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TransactionDoc {
    #[serde(default)]
    pub id: String,
    #[serde(default)]
    pub name: String,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MetadataDoc {
    #[serde(default)]
    pub device_classification: String,
    #[serde(default)]
    pub device_locale: String,
    #[serde(default)]
    pub device_manufacturer: String,
    #[serde(default)]
    pub device_model: String,
    #[serde(default)]
    pub device_os_name: String,
    #[serde(default)]
    pub device_os_version: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub device_os_build_number: String,
}

/// Profile session metadata as exported by the profiling backend.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProfileSnapshot {
    pub event_id: String,
    pub project_id: u64,
    #[serde(default)]
    pub environment: String,
    pub platform: Platform,
    #[serde(with = "time::serde::rfc3339")]
    pub received: OffsetDateTime,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub release: String,
    #[serde(with = "time::serde::rfc3339")]
    pub timestamp: OffsetDateTime,
    #[serde(default)]
    pub transaction: TransactionDoc,
    #[serde(default)]
    pub metadata: MetadataDoc,
}

impl Profile for ProfileSnapshot {
    fn id(&self) -> &str {
        &self.event_id
    }

    fn project_id(&self) -> u64 {
        self.project_id
    }

    fn environment(&self) -> &str {
        &self.environment
    }

    fn platform(&self) -> Platform {
        self.platform
    }

    fn received(&self) -> OffsetDateTime {
        self.received
    }

    fn release(&self) -> &str {
        &self.release
    }

    fn timestamp(&self) -> OffsetDateTime {
        self.timestamp
    }

    fn transaction(&self) -> Transaction {
        Transaction {
            id: self.transaction.id.clone(),
            name: self.transaction.name.clone(),
        }
    }

    fn metadata(&self) -> ProfileMetadata {
        let m = &self.metadata;
        ProfileMetadata {
            device_classification: m.device_classification.clone(),
            device_locale: m.device_locale.clone(),
            device_manufacturer: m.device_manufacturer.clone(),
            device_model: m.device_model.clone(),
            device_os_name: m.device_os_name.clone(),
            device_os_version: m.device_os_version.clone(),
            device_os_build_number: m.device_os_build_number.clone(),
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NodeDoc {
    #[serde(default)]
    pub package: String,
    #[serde(default)]
    pub name: String,
}

/// Suspect node plus the frames leading to it.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NodeInfoDoc {
    pub node: NodeDoc,
    #[serde(default)]
    pub stack_trace: Vec<Frame>,
}

impl From<NodeInfoDoc> for NodeInfo {
    fn from(doc: NodeInfoDoc) -> Self {
        NodeInfo {
            node: CallTreeNode {
                package: doc.node.package,
                name: doc.node.name,
            },
            stack_trace: doc.stack_trace,
        }
    }
}
