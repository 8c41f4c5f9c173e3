//! Use case orchestration for occurrence.
//!
//! This crate provides the application layer: decoding input documents, resolving settings,
//! and handing off to the domain. It is intentionally thin.
//!
//! The CLI crate depends on this; it only handles argument parsing and I/O.

#![forbid(unsafe_code)]

mod build;
mod fingerprint;
mod input;
mod render;

pub use build::{BuildInput, BuildOutput, run_build, run_build_with};
pub use fingerprint::{FingerprintInput, run_fingerprint};
pub use input::{MetadataDoc, NodeDoc, NodeInfoDoc, ProfileSnapshot, TransactionDoc};
pub use render::{format_categories, occurrence_schema, serialize_occurrence, write_text};
