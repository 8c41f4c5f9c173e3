//! Stable DTOs and identifiers used across the occurrence workspace.
//!
//! This crate is intentionally boring:
//! - data types for the emitted occurrence record
//! - closed issue categories and their numeric codes
//! - stable tag keys
//! - the issue category catalog

#![forbid(unsafe_code)]

pub mod catalog;
pub mod category;
pub mod frame;
pub mod ids;
pub mod occurrence;
pub mod platform;

pub use catalog::{IssueCategory, all_categories, lookup_category};
pub use category::{
    EvidenceName, IssueTitle, OccurrenceType, UnknownIssueTitle, UnknownOccurrenceType,
};
pub use frame::{Frame, StackTrace};
pub use occurrence::{Event, Evidence, Occurrence, OccurrenceId};
pub use platform::Platform;
