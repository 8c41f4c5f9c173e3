use crate::fingerprint::fingerprint_for_occurrence;
use crate::profile::{CallTreeNode, NodeInfo, Profile};
use crate::source::{Clock, IdGenerator, SystemClock, UuidV4, to_utc};
use crate::tags::build_occurrence_tags;
use occurrence_types::{Event, Evidence, EvidenceName, IssueTitle, Occurrence, StackTrace};
use std::collections::BTreeMap;

/// Builds occurrences with an injected clock and id source.
#[derive(Clone, Debug, Default)]
pub struct Assembler<C = SystemClock, G = UuidV4> {
    clock: C,
    ids: G,
}

impl Assembler {
    /// Wall clock and random UUIDs.
    pub fn system() -> Self {
        Self::default()
    }
}

impl<C: Clock, G: IdGenerator> Assembler<C, G> {
    pub fn new(clock: C, ids: G) -> Self {
        Self { clock, ids }
    }

    /// Assemble one occurrence for `node_info` found in `profile`.
    pub fn assemble<P: Profile + ?Sized>(
        &self,
        profile: &P,
        title: IssueTitle,
        node_info: NodeInfo,
    ) -> Occurrence {
        let transaction = profile.transaction();
        let kind = title.occurrence_type();
        let NodeInfo { node, stack_trace } = node_info;

        let fingerprint = fingerprint_for_occurrence(
            profile.project_id(),
            title.as_str(),
            &transaction.name,
            kind.code(),
            &node.package,
            &node.name,
        );
        let tags = build_occurrence_tags(&profile.metadata());

        let occurrence = Occurrence {
            detection_time: self.clock.now_utc(),
            event: Event {
                environment: profile.environment().to_string(),
                id: profile.id().to_string(),
                platform: profile.platform(),
                project_id: profile.project_id(),
                received: to_utc(profile.received()),
                release: profile.release().to_string(),
                stack_trace: StackTrace::from(stack_trace),
                tags,
                timestamp: to_utc(profile.timestamp()),
                transaction: transaction.id,
            },
            evidence_data: BTreeMap::new(),
            evidence_display: build_evidence(&node),
            fingerprint,
            id: self.ids.next_id(),
            issue_title: title,
            level: None,
            resource_id: None,
            subtitle: transaction.name,
            kind,
        };

        tracing::debug!(
            project_id = occurrence.event.project_id,
            fingerprint = %occurrence.fingerprint,
            occurrence_id = %occurrence.id,
            tags = occurrence.event.tags.len(),
            "assembled occurrence"
        );

        occurrence
    }
}

/// Assemble with the wall clock and a random UUID.
pub fn new_occurrence<P: Profile + ?Sized>(
    profile: &P,
    title: IssueTitle,
    node_info: NodeInfo,
) -> Occurrence {
    Assembler::system().assemble(profile, title, node_info)
}

/// Evidence shown to a human triaging the issue: the suspect function (important),
/// then its package.
pub fn build_evidence(node: &CallTreeNode) -> Vec<Evidence> {
    vec![
        Evidence {
            name: EvidenceName::SuspectFunction,
            value: node.name.clone(),
            important: true,
        },
        Evidence {
            name: EvidenceName::Package,
            value: node.package.clone(),
            important: false,
        },
    ]
}
