//! Pure occurrence assembly (no IO).
//!
//! Input: a finished profile (through the [`Profile`] capability trait) and the suspect
//! node found by analysis.
//! Output: one [`Occurrence`](occurrence_types::Occurrence) with a stable fingerprint.

#![forbid(unsafe_code)]

pub mod fingerprint;
pub mod profile;
pub mod source;

mod assemble;
mod tags;

#[cfg(test)]
mod proptest;
#[cfg(test)]
mod test_support;

pub use assemble::{Assembler, build_evidence, new_occurrence};
pub use fingerprint::fingerprint_for_occurrence;
pub use profile::{CallTreeNode, NodeInfo, Profile, ProfileMetadata, Transaction};
pub use source::{Clock, FixedClock, IdGenerator, SequentialIds, SystemClock, UuidV4};
pub use tags::build_occurrence_tags;
