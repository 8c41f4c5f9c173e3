//! The `build` use case: decode inputs, resolve settings, assemble one occurrence.

use crate::input::{NodeInfoDoc, ProfileSnapshot};
use anyhow::Context;
use occurrence_domain::{Assembler, Clock, IdGenerator, NodeInfo};
use occurrence_settings::{Overrides, ResolvedConfig};
use occurrence_types::Occurrence;

/// Input for the build use case.
#[derive(Clone, Debug)]
pub struct BuildInput<'a> {
    /// Profile snapshot JSON.
    pub profile_json: &'a str,
    /// Suspect node JSON.
    pub node_json: &'a str,
    /// Config file contents (empty string if not found).
    pub config_text: &'a str,
    /// CLI overrides.
    pub overrides: Overrides,
}

/// Output from the build use case.
#[derive(Clone, Debug)]
pub struct BuildOutput {
    pub occurrence: Occurrence,
    /// The resolved configuration used.
    pub resolved_config: ResolvedConfig,
}

/// Run the build use case with the wall clock and random ids.
pub fn run_build(input: BuildInput<'_>) -> anyhow::Result<BuildOutput> {
    run_build_with(&Assembler::system(), input)
}

/// Run the build use case with a caller-supplied assembler.
pub fn run_build_with<C: Clock, G: IdGenerator>(
    assembler: &Assembler<C, G>,
    input: BuildInput<'_>,
) -> anyhow::Result<BuildOutput> {
    // Parse config (empty is allowed, defaults apply).
    let cfg = if input.config_text.trim().is_empty() {
        occurrence_settings::OccurrenceConfigV1::default()
    } else {
        occurrence_settings::parse_config_toml(input.config_text).context("parse config")?
    };
    let resolved = occurrence_settings::resolve_config(cfg, input.overrides.clone())
        .context("resolve config")?;

    let profile: ProfileSnapshot =
        serde_json::from_str(input.profile_json).context("decode profile snapshot")?;
    let node: NodeInfoDoc = serde_json::from_str(input.node_json).context("decode node info")?;

    tracing::debug!(
        event_id = %profile.event_id,
        project_id = profile.project_id,
        issue = %resolved.title,
        frames = node.stack_trace.len(),
        "decoded inputs"
    );

    let occurrence = assembler.assemble(&profile, resolved.title, NodeInfo::from(node));

    Ok(BuildOutput {
        occurrence,
        resolved_config: resolved,
    })
}
