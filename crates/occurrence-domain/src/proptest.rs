//! Property-based tests for the domain crate.
//!
//! These tests use proptest to verify invariants around:
//! - Fingerprint determinism and sensitivity to each identity field
//! - Record identity independent of fingerprint
//! - Tag completeness and the conditional build-number tag
//! - Evidence shape

use crate::assemble::Assembler;
use crate::fingerprint::fingerprint_for_occurrence;
use crate::profile::{CallTreeNode, NodeInfo, ProfileMetadata, Transaction};
use crate::source::{FixedClock, SequentialIds};
use crate::tags::build_occurrence_tags;
use crate::test_support::TestProfile;
use occurrence_types::{EvidenceName, IssueTitle, ids};
use proptest::prelude::*;
use time::OffsetDateTime;

// ============================================================================
// Strategies for generating arbitrary values
// ============================================================================

/// Identity fields as they feed the fingerprint.
#[derive(Clone, Debug)]
struct Identity {
    project_id: u64,
    title: String,
    transaction: String,
    type_code: u32,
    package: String,
    function: String,
}

impl Identity {
    fn fingerprint(&self) -> String {
        fingerprint_for_occurrence(
            self.project_id,
            &self.title,
            &self.transaction,
            self.type_code,
            &self.package,
            &self.function,
        )
    }
}

fn arb_identity() -> impl Strategy<Value = Identity> {
    (
        any::<u64>(),
        ".{0,24}",
        ".{0,24}",
        any::<u32>(),
        "[a-z][a-z0-9.]{0,24}",
        "[A-Za-z_][A-Za-z0-9_]{0,24}",
    )
        .prop_map(
            |(project_id, title, transaction, type_code, package, function)| Identity {
                project_id,
                title,
                transaction,
                type_code,
                package,
                function,
            },
        )
}

/// Metadata with any subset of fields empty.
fn arb_metadata() -> impl Strategy<Value = ProfileMetadata> {
    let field = || prop_oneof![Just(String::new()), "[A-Za-z0-9 ._-]{1,16}"];
    (
        field(),
        field(),
        field(),
        field(),
        field(),
        field(),
        field(),
    )
        .prop_map(
            |(classification, locale, manufacturer, model, os_name, os_version, build)| {
                ProfileMetadata {
                    device_classification: classification,
                    device_locale: locale,
                    device_manufacturer: manufacturer,
                    device_model: model,
                    device_os_name: os_name,
                    device_os_version: os_version,
                    device_os_build_number: build,
                }
            },
        )
}

fn arb_timestamp() -> impl Strategy<Value = OffsetDateTime> {
    (0i64..4_000_000_000).prop_map(|s| {
        OffsetDateTime::from_unix_timestamp(s).unwrap_or(OffsetDateTime::UNIX_EPOCH)
    })
}

fn profile_for(project_id: u64, transaction: &str, metadata: ProfileMetadata) -> TestProfile {
    TestProfile {
        project_id,
        transaction: Transaction {
            id: "txn".to_string(),
            name: transaction.to_string(),
        },
        metadata,
        ..TestProfile::default()
    }
}

fn node(package: &str, name: &str) -> NodeInfo {
    NodeInfo {
        node: CallTreeNode {
            package: package.to_string(),
            name: name.to_string(),
        },
        stack_trace: Vec::new(),
    }
}

// ============================================================================
// Fingerprint properties
// ============================================================================

proptest! {
    #[test]
    fn fingerprint_is_deterministic(id in arb_identity()) {
        prop_assert_eq!(id.fingerprint(), id.fingerprint());
    }

    #[test]
    fn fingerprint_is_32_lowercase_hex(id in arb_identity()) {
        let fp = id.fingerprint();
        prop_assert_eq!(fp.len(), 32);
        prop_assert!(fp.bytes().all(|b| b.is_ascii_digit() || (b'a'..=b'f').contains(&b)));
    }

    #[test]
    fn project_id_change_changes_fingerprint(id in arb_identity(), delta in 1u64..1000) {
        let mut other = id.clone();
        other.project_id = id.project_id.wrapping_add(delta);
        prop_assert_ne!(id.fingerprint(), other.fingerprint());
    }

    #[test]
    fn function_change_changes_fingerprint(id in arb_identity(), suffix in "[a-z]{1,4}") {
        let mut other = id.clone();
        other.function.push_str(&suffix);
        prop_assert_ne!(id.fingerprint(), other.fingerprint());
    }

    #[test]
    fn transaction_change_changes_fingerprint(id in arb_identity(), suffix in "[a-z]{1,4}") {
        let mut other = id.clone();
        other.transaction.push_str(&suffix);
        prop_assert_ne!(id.fingerprint(), other.fingerprint());
    }

    #[test]
    fn package_change_changes_fingerprint(id in arb_identity(), prefix in "[a-z]{1,4}") {
        let mut other = id.clone();
        other.package.insert_str(0, &prefix);
        prop_assert_ne!(id.fingerprint(), other.fingerprint());
    }

    // ========================================================================
    // Assembly properties
    // ========================================================================

    #[test]
    fn identical_inputs_share_fingerprint_not_id(
        project_id in any::<u64>(),
        transaction in "[a-z/]{0,16}",
        metadata in arb_metadata(),
        now in arb_timestamp(),
    ) {
        let assembler = Assembler::new(FixedClock(now), SequentialIds::new("occ"));
        let profile = profile_for(project_id, &transaction, metadata);
        let a = assembler.assemble(&profile, IssueTitle::BlockingFunctionOnMainThread, node("pkg", "fn"));
        let b = assembler.assemble(&profile, IssueTitle::BlockingFunctionOnMainThread, node("pkg", "fn"));
        prop_assert_eq!(&a.fingerprint, &b.fingerprint);
        prop_assert_ne!(&a.id, &b.id);
        prop_assert_eq!(a.detection_time, now);
    }

    #[test]
    fn required_tags_always_present(metadata in arb_metadata()) {
        let tags = build_occurrence_tags(&metadata);
        for key in ids::REQUIRED_DEVICE_TAGS {
            prop_assert!(tags.contains_key(key), "missing {}", key);
        }
        prop_assert_eq!(
            tags.contains_key(ids::TAG_DEVICE_OS_BUILD_NUMBER),
            !metadata.device_os_build_number.is_empty()
        );
        let optional_empty = tags
            .get(ids::TAG_DEVICE_OS_BUILD_NUMBER)
            .is_some_and(|v| v.is_empty());
        prop_assert!(!optional_empty);
    }

    #[test]
    fn evidence_has_two_entries_function_first(
        package in "[a-z.]{0,16}",
        name in "[A-Za-z_]{0,16}",
    ) {
        let assembler = Assembler::new(FixedClock(OffsetDateTime::UNIX_EPOCH), SequentialIds::new("occ"));
        let occ = assembler.assemble(
            &TestProfile::default(),
            IssueTitle::BlockingFunctionOnMainThread,
            node(&package, &name),
        );
        prop_assert_eq!(occ.evidence_display.len(), 2);
        prop_assert_eq!(occ.evidence_display.iter().filter(|e| e.important).count(), 1);
        let function = &occ.evidence_display[0];
        prop_assert_eq!(function.name, EvidenceName::SuspectFunction);
        prop_assert!(function.important);
        prop_assert_eq!(&function.value, &name);
        let pkg = &occ.evidence_display[1];
        prop_assert_eq!(pkg.name, EvidenceName::Package);
        prop_assert!(!pkg.important);
        prop_assert_eq!(&pkg.value, &package);
    }
}
