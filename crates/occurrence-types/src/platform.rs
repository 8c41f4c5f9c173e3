use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Runtime platform a profile was recorded on.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "lowercase")]
pub enum Platform {
    Android,
    Cocoa,
    Java,
    JavaScript,
    Node,
    Php,
    Python,
    Rust,
}

impl Platform {
    pub fn as_str(self) -> &'static str {
        match self {
            Platform::Android => "android",
            Platform::Cocoa => "cocoa",
            Platform::Java => "java",
            Platform::JavaScript => "javascript",
            Platform::Node => "node",
            Platform::Php => "php",
            Platform::Python => "python",
            Platform::Rust => "rust",
        }
    }
}

impl fmt::Display for Platform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
