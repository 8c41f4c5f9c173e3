//! Time and identity sources.
//!
//! Assembly reads the clock and draws a fresh id exactly once per occurrence. Both are
//! injected so tests can pin them.

use occurrence_types::OccurrenceId;
use std::sync::atomic::{AtomicU64, Ordering};
use time::{OffsetDateTime, UtcOffset};
use uuid::Uuid;

pub trait Clock {
    fn now_utc(&self) -> OffsetDateTime;
}

pub trait IdGenerator {
    fn next_id(&self) -> OccurrenceId;
}

/// Wall clock.
#[derive(Clone, Copy, Debug, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now_utc(&self) -> OffsetDateTime {
        OffsetDateTime::now_utc()
    }
}

/// Random v4 UUIDs, hyphenated lowercase.
#[derive(Clone, Copy, Debug, Default)]
pub struct UuidV4;

impl IdGenerator for UuidV4 {
    fn next_id(&self) -> OccurrenceId {
        OccurrenceId::new(Uuid::new_v4().to_string())
    }
}

/// Shift `at` to UTC. RFC 3339 cannot carry an offset with a seconds component.
///
/// An instant too close to the representable range to convert is returned unchanged.
pub(crate) fn to_utc(at: OffsetDateTime) -> OffsetDateTime {
    at.checked_to_offset(UtcOffset::UTC).unwrap_or(at)
}

/// Always returns the same instant (normalized to UTC).
#[derive(Clone, Copy, Debug)]
pub struct FixedClock(pub OffsetDateTime);

impl Clock for FixedClock {
    fn now_utc(&self) -> OffsetDateTime {
        to_utc(self.0)
    }
}

/// Deterministic ids `<prefix>-1`, `<prefix>-2`, ...
#[derive(Debug)]
pub struct SequentialIds {
    prefix: String,
    next: AtomicU64,
}

impl SequentialIds {
    pub fn new(prefix: impl Into<String>) -> Self {
        Self {
            prefix: prefix.into(),
            next: AtomicU64::new(1),
        }
    }
}

impl IdGenerator for SequentialIds {
    fn next_id(&self) -> OccurrenceId {
        let n = self.next.fetch_add(1, Ordering::Relaxed);
        OccurrenceId::new(format!("{}-{}", self.prefix, n))
    }
}
