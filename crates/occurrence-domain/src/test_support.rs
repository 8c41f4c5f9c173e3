use crate::profile::{CallTreeNode, NodeInfo, Profile, ProfileMetadata, Transaction};
use occurrence_types::{Frame, Platform};
use time::OffsetDateTime;
use time::macros::datetime;

#[derive(Clone, Debug)]
pub struct TestProfile {
    pub id: String,
    pub project_id: u64,
    pub environment: String,
    pub platform: Platform,
    pub received: OffsetDateTime,
    pub release: String,
    pub timestamp: OffsetDateTime,
    pub transaction: Transaction,
    pub metadata: ProfileMetadata,
}

impl Default for TestProfile {
    fn default() -> Self {
        Self {
            id: String::new(),
            project_id: 0,
            environment: String::new(),
            platform: Platform::Cocoa,
            received: OffsetDateTime::UNIX_EPOCH,
            release: String::new(),
            timestamp: OffsetDateTime::UNIX_EPOCH,
            transaction: Transaction::default(),
            metadata: ProfileMetadata::default(),
        }
    }
}

impl Profile for TestProfile {
    fn id(&self) -> &str {
        &self.id
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
        self.transaction.clone()
    }
    fn metadata(&self) -> ProfileMetadata {
        self.metadata.clone()
    }
}

pub fn android_metadata() -> ProfileMetadata {
    ProfileMetadata {
        device_classification: "high".to_string(),
        device_locale: "en_US".to_string(),
        device_manufacturer: "Google".to_string(),
        device_model: "Pixel 7".to_string(),
        device_os_name: "android".to_string(),
        device_os_version: "14".to_string(),
        device_os_build_number: "UQ1A.240205.004".to_string(),
    }
}

pub fn checkout_profile() -> TestProfile {
    TestProfile {
        id: "4d6f2a0b9c1e4f7a8b3c5d2e1f0a9b8c".to_string(),
        project_id: 42,
        environment: "production".to_string(),
        platform: Platform::Android,
        received: datetime!(2024-05-01 11:59:30 UTC),
        release: "1.4.0 (120)".to_string(),
        timestamp: datetime!(2024-05-01 11:59:00 UTC),
        transaction: Transaction {
            id: "9f8e7d6c5b4a39281706f5e4d3c2b1a0".to_string(),
            name: "checkout".to_string(),
        },
        metadata: android_metadata(),
    }
}

pub fn suspect(package: &str, name: &str) -> NodeInfo {
    NodeInfo {
        node: CallTreeNode {
            package: package.to_string(),
            name: name.to_string(),
        },
        stack_trace: vec![
            frame("android.os", "Looper.loop"),
            frame("com.app.payments", "CheckoutActivity.onPay"),
            frame(package, name),
        ],
    }
}

fn frame(package: &str, function: &str) -> Frame {
    Frame {
        function: Some(function.to_string()),
        package: Some(package.to_string()),
        in_app: Some(package.starts_with("com.app")),
        ..Frame::default()
    }
}
