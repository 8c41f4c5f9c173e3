//! Fuzz target for the fingerprint builder.
//!
//! Goal: any field values hash to 32 lowercase hex chars, deterministically.
//!
//! Run with:
//! ```bash
//! cargo +nightly fuzz run fuzz_fingerprint
//! ```

#![no_main]

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;
use occurrence_domain::fingerprint_for_occurrence;

#[derive(Arbitrary, Debug)]
struct Fields<'a> {
    project_id: u64,
    title: &'a str,
    transaction: &'a str,
    type_code: u32,
    package: &'a str,
    function: &'a str,
}

fuzz_target!(|f: Fields<'_>| {
    let a = fingerprint_for_occurrence(
        f.project_id,
        f.title,
        f.transaction,
        f.type_code,
        f.package,
        f.function,
    );
    let b = fingerprint_for_occurrence(
        f.project_id,
        f.title,
        f.transaction,
        f.type_code,
        f.package,
        f.function,
    );
    assert_eq!(a, b);
    assert_eq!(a.len(), 32);
    assert!(a.bytes().all(|c| c.is_ascii_hexdigit() && !c.is_ascii_uppercase()));
});
