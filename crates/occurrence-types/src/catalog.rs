//! Issue category catalog.
//!
//! Maps stable category keys to the title/type pair emitted on the wire, plus a short
//! description for humans listing what the tool can report.

use crate::category::{IssueTitle, OccurrenceType};
use crate::ids;

/// One entry of the catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IssueCategory {
    /// Stable snake_case key used in config files and on the command line.
    pub key: &'static str,
    pub title: IssueTitle,
    pub kind: OccurrenceType,
    /// What the detection means and how to act on it.
    pub description: &'static str,
}

const CATALOG: &[IssueCategory] = &[IssueCategory {
    key: ids::ISSUE_BLOCKING_MAIN_THREAD,
    title: IssueTitle::BlockingFunctionOnMainThread,
    kind: OccurrenceType::ProfileBlockedThread,
    description: "\
A function known to block (disk or network I/O, locks, heavy decoding) ran on the \
application's main thread while a profile was recorded. Move the call to a background \
thread or an async API.",
}];

/// List every known category.
pub fn all_categories() -> &'static [IssueCategory] {
    CATALOG
}

/// Look up a category by key, wire title, or numeric code.
///
/// Returns `None` if the identifier is not recognized.
pub fn lookup_category(identifier: &str) -> Option<&'static IssueCategory> {
    CATALOG.iter().find(|c| {
        c.key == identifier
            || c.title.as_str() == identifier
            || c.kind.code().to_string() == identifier
    })
}

impl IssueTitle {
    /// The catalog entry for this title.
    pub fn category(self) -> &'static IssueCategory {
        match self {
            IssueTitle::BlockingFunctionOnMainThread => &CATALOG[0],
        }
    }
}
