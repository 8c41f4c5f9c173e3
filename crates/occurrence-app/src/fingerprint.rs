//! The `fingerprint` use case: compute the grouping key without assembling a record.

use occurrence_domain::fingerprint_for_occurrence;
use occurrence_types::IssueTitle;

#[derive(Clone, Debug)]
pub struct FingerprintInput<'a> {
    pub project_id: u64,
    pub title: IssueTitle,
    pub transaction_name: &'a str,
    pub package: &'a str,
    pub function: &'a str,
}

pub fn run_fingerprint(input: FingerprintInput<'_>) -> String {
    fingerprint_for_occurrence(
        input.project_id,
        input.title.as_str(),
        input.transaction_name,
        input.title.occurrence_type().code(),
        input.package,
        input.function,
    )
}
