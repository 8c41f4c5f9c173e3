//! Closed category sets: issue titles, their numeric type codes, and evidence names.
//!
//! Adding a category means adding a variant here and an entry to the catalog; every
//! `match` over these enums is exhaustive, so the compiler finds the rest.

use schemars::JsonSchema;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Human-facing label of an issue category.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
pub enum IssueTitle {
    #[serde(rename = "Blocking function called on the main thread")]
    BlockingFunctionOnMainThread,
}

impl IssueTitle {
    pub const ALL: [IssueTitle; 1] = [IssueTitle::BlockingFunctionOnMainThread];

    pub fn as_str(self) -> &'static str {
        match self {
            IssueTitle::BlockingFunctionOnMainThread => "Blocking function called on the main thread",
        }
    }

    /// The numeric category code paired with this title.
    pub fn occurrence_type(self) -> OccurrenceType {
        match self {
            IssueTitle::BlockingFunctionOnMainThread => OccurrenceType::ProfileBlockedThread,
        }
    }
}

impl fmt::Display for IssueTitle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Error)]
#[error("unknown issue title: {0:?}")]
pub struct UnknownIssueTitle(pub String);

impl FromStr for IssueTitle {
    type Err = UnknownIssueTitle;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        IssueTitle::ALL
            .into_iter()
            .find(|t| t.as_str() == s)
            .ok_or_else(|| UnknownIssueTitle(s.to_string()))
    }
}

/// Numeric issue category code understood by the issue tracker.
///
/// Serialized as a bare number.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum OccurrenceType {
    ProfileBlockedThread,
}

impl OccurrenceType {
    pub const ALL: [OccurrenceType; 1] = [OccurrenceType::ProfileBlockedThread];

    pub fn code(self) -> u32 {
        match self {
            OccurrenceType::ProfileBlockedThread => 2000,
        }
    }
}

impl fmt::Display for OccurrenceType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
#[error("unknown occurrence type code: {0}")]
pub struct UnknownOccurrenceType(pub u32);

impl TryFrom<u32> for OccurrenceType {
    type Error = UnknownOccurrenceType;

    fn try_from(code: u32) -> Result<Self, Self::Error> {
        OccurrenceType::ALL
            .into_iter()
            .find(|t| t.code() == code)
            .ok_or(UnknownOccurrenceType(code))
    }
}

impl Serialize for OccurrenceType {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_u32(self.code())
    }
}

impl<'de> Deserialize<'de> for OccurrenceType {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let code = u32::deserialize(deserializer)?;
        OccurrenceType::try_from(code).map_err(serde::de::Error::custom)
    }
}

/// Name of a human-readable evidence entry.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
pub enum EvidenceName {
    #[serde(rename = "Package")]
    Package,
    #[serde(rename = "Suspect function")]
    SuspectFunction,
}

impl EvidenceName {
    pub fn as_str(self) -> &'static str {
        match self {
            EvidenceName::Package => "Package",
            EvidenceName::SuspectFunction => "Suspect function",
        }
    }
}
