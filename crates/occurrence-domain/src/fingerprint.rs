use md5::{Digest, Md5};

/// Compute the stable MD5 fingerprint that groups occurrences into one issue.
///
/// Identity fields, hashed in this exact order with no separators:
/// - project_id (decimal)
/// - issue_title (raw label)
/// - transaction_name
/// - type_code (decimal)
/// - package of the suspect node
/// - function name of the suspect node
///
/// The digest and order are a cross-service contract: changing either re-keys every
/// stored issue.
///
/// Because fields are not delimited, `("ab", "c")` and `("a", "bc")` for package/function
/// hash the same. Fixing that needs a migration of existing fingerprints.
pub fn fingerprint_for_occurrence(
    project_id: u64,
    issue_title: &str,
    transaction_name: &str,
    type_code: u32,
    package: &str,
    function: &str,
) -> String {
    let project_id = project_id.to_string();
    let type_code = type_code.to_string();

    let mut hasher = Md5::new();
    for part in [
        project_id.as_str(),
        issue_title,
        transaction_name,
        type_code.as_str(),
        package,
        function,
    ] {
        hasher.update(part.as_bytes());
    }
    let digest = hasher.finalize();
    hex::encode(digest)
}
