//! Output use cases: serialize occurrences, describe the schema, list categories.

use anyhow::Context;
use camino::Utf8Path;
use occurrence_types::{Occurrence, all_categories};

/// Serialize an occurrence to JSON (with trailing newline).
pub fn serialize_occurrence(occurrence: &Occurrence, pretty: bool) -> anyhow::Result<String> {
    let mut json = if pretty {
        serde_json::to_string_pretty(occurrence)
    } else {
        serde_json::to_string(occurrence)
    }
    .context("serialize occurrence")?;
    json.push('\n');
    Ok(json)
}

/// JSON schema of the occurrence record.
pub fn occurrence_schema() -> anyhow::Result<serde_json::Value> {
    let schema = schemars::schema_for!(Occurrence);
    serde_json::to_value(&schema).context("serialize schema")
}

/// One line per catalog entry: `key<TAB>code<TAB>title`.
pub fn format_categories() -> String {
    let mut out = String::new();
    for c in all_categories() {
        out.push_str(&format!("{}\t{}\t{}\n", c.key, c.kind.code(), c.title));
    }
    out
}

/// Write text to a file, creating parent directories.
pub fn write_text(path: &Utf8Path, text: &str) -> anyhow::Result<()> {
    if let Some(parent) = path.parent()
        && !parent.as_str().is_empty()
    {
        std::fs::create_dir_all(parent).with_context(|| format!("create dir {parent}"))?;
    }
    std::fs::write(path, text).with_context(|| format!("write {path}"))?;
    tracing::debug!(%path, bytes = text.len(), "wrote output");
    Ok(())
}
