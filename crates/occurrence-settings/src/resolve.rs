use crate::model::{OccurrenceConfigV1, SCHEMA_CONFIG_V1};
use anyhow::Context;
use occurrence_types::{IssueTitle, ids, lookup_category};

#[derive(Clone, Debug, Default)]
pub struct Overrides {
    pub issue: Option<String>,
    pub pretty: Option<bool>,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ResolvedConfig {
    pub title: IssueTitle,
    pub pretty: bool,
}

impl Default for ResolvedConfig {
    fn default() -> Self {
        Self {
            title: IssueTitle::BlockingFunctionOnMainThread,
            pretty: false,
        }
    }
}

pub fn resolve_config(
    cfg: OccurrenceConfigV1,
    overrides: Overrides,
) -> anyhow::Result<ResolvedConfig> {
    if let Some(schema) = cfg.schema.as_deref()
        && schema != SCHEMA_CONFIG_V1
    {
        anyhow::bail!("unsupported config schema: {schema} (expected {SCHEMA_CONFIG_V1})");
    }

    let mut resolved = ResolvedConfig::default();

    let issue = overrides
        .issue
        .or(cfg.issue)
        .unwrap_or_else(|| ids::ISSUE_BLOCKING_MAIN_THREAD.to_string());
    resolved.title = parse_issue(&issue).with_context(|| format!("invalid issue: {issue}"))?;

    if let Some(pretty) = overrides.pretty.or(cfg.pretty) {
        resolved.pretty = pretty;
    }

    Ok(resolved)
}

fn parse_issue(v: &str) -> anyhow::Result<IssueTitle> {
    match lookup_category(v) {
        Some(category) => Ok(category.title),
        None => anyhow::bail!("unknown issue category: {v}"),
    }
}
