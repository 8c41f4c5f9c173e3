//! Developer tasks (schema generation, golden fixture updates, conformance).
//!
//! Keeping this separate avoids bloating the end-user CLI.

use anyhow::{Context, bail};
use occurrence_app::{BuildInput, run_build};
use occurrence_settings::Overrides;
use occurrence_test_util::normalize_nondeterministic;
use schemars::schema_for;
use std::fs;
use std::path::{Path, PathBuf};

/// Get the project root (parent of xtask directory).
fn project_root() -> PathBuf {
    let manifest_dir = std::env::var("CARGO_MANIFEST_DIR")
        .map(PathBuf::from)
        .unwrap_or_else(|_| PathBuf::from("."));

    if manifest_dir.ends_with("xtask") {
        manifest_dir
            .parent()
            .map(Path::to_path_buf)
            .unwrap_or(manifest_dir)
    } else {
        manifest_dir
    }
}

fn schemas_dir() -> PathBuf {
    project_root().join("schemas")
}

fn fixtures_dir() -> PathBuf {
    project_root().join("tests").join("occurrence-fixtures")
}

/// Schema definition with its target filename.
struct SchemaSpec {
    filename: &'static str,
    generate: fn() -> schemars::Schema,
}

fn generate_occurrence_schema() -> schemars::Schema {
    schema_for!(occurrence_types::Occurrence)
}

fn generate_config_schema() -> schemars::Schema {
    schema_for!(occurrence_settings::OccurrenceConfigV1)
}

fn schema_specs() -> Vec<SchemaSpec> {
    vec![
        SchemaSpec {
            filename: "occurrence.v1.json",
            generate: generate_occurrence_schema,
        },
        SchemaSpec {
            filename: "occurrence.config.v1.json",
            generate: generate_config_schema,
        },
    ]
}

/// Serialize a schema to pretty-printed JSON with trailing newline.
fn serialize_schema(schema: &schemars::Schema) -> anyhow::Result<String> {
    let mut json = serde_json::to_string_pretty(schema).context("Failed to serialize schema")?;
    json.push('\n');
    Ok(json)
}

fn emit_schemas() -> anyhow::Result<()> {
    let dir = schemas_dir();
    fs::create_dir_all(&dir).context("Failed to create schemas directory")?;

    for entry in schema_specs() {
        let json = serialize_schema(&(entry.generate)())?;
        let path = dir.join(entry.filename);
        fs::write(&path, &json)
            .with_context(|| format!("Failed to write schema to {}", path.display()))?;
        println!("Wrote {}", path.display());
    }
    Ok(())
}

/// Check that schemas/ matches what would be generated.
fn validate_schemas() -> anyhow::Result<()> {
    let dir = schemas_dir();
    let mut stale = Vec::new();

    for entry in schema_specs() {
        let path = dir.join(entry.filename);
        let expected = serialize_schema(&(entry.generate)())?;
        match fs::read_to_string(&path) {
            Ok(actual) if actual == expected => {}
            _ => stale.push(entry.filename),
        }
    }

    if stale.is_empty() {
        println!("All schemas are up to date.");
        return Ok(());
    }
    eprintln!("Schemas missing or out of date:");
    for name in &stale {
        eprintln!("  - {name}");
    }
    eprintln!("\nRun `cargo xtask emit-schemas` to regenerate.");
    bail!("Schema validation failed")
}

/// Fixture case directories (each holds profile.json, node.json, expected.json).
fn fixture_cases() -> anyhow::Result<Vec<PathBuf>> {
    let mut cases = Vec::new();
    for entry in fs::read_dir(fixtures_dir()).context("Failed to read fixtures directory")? {
        let path = entry?.path();
        if path.is_dir() {
            cases.push(path);
        }
    }
    cases.sort();
    Ok(cases)
}

/// Build the normalized occurrence for one fixture case.
fn build_fixture(case: &Path) -> anyhow::Result<serde_json::Value> {
    let read = |name: &str| {
        let path = case.join(name);
        fs::read_to_string(&path).with_context(|| format!("Failed to read {}", path.display()))
    };
    let profile_json = read("profile.json")?;
    let node_json = read("node.json")?;

    let output = run_build(BuildInput {
        profile_json: &profile_json,
        node_json: &node_json,
        config_text: "",
        overrides: Overrides::default(),
    })
    .with_context(|| format!("build fixture {}", case.display()))?;

    let value = serde_json::to_value(&output.occurrence).context("serialize occurrence")?;
    Ok(normalize_nondeterministic(value))
}

fn update_fixtures() -> anyhow::Result<()> {
    for case in fixture_cases()? {
        let value = build_fixture(&case)?;
        let mut json = serde_json::to_string_pretty(&value)?;
        json.push('\n');
        let path = case.join("expected.json");
        fs::write(&path, json).with_context(|| format!("Failed to write {}", path.display()))?;
        println!("Wrote {}", path.display());
    }
    Ok(())
}

/// Golden fixtures match a fresh build and validate against the occurrence schema.
fn conform() -> anyhow::Result<()> {
    let schema = serde_json::to_value(generate_occurrence_schema())?;
    let validator = jsonschema::validator_for(&schema)
        .map_err(|e| anyhow::anyhow!("Failed to compile schema: {e}"))?;

    let mut errors = Vec::new();
    for case in fixture_cases()? {
        let name = case
            .file_name()
            .map(|n| n.to_string_lossy().to_string())
            .unwrap_or_default();

        let before = errors.len();
        let actual = build_fixture(&case)?;
        let expected_path = case.join("expected.json");
        let expected: serde_json::Value = serde_json::from_str(
            &fs::read_to_string(&expected_path)
                .with_context(|| format!("Failed to read {}", expected_path.display()))?,
        )
        .with_context(|| format!("Failed to parse {}", expected_path.display()))?;

        if actual != expected {
            errors.push(format!("{name}: output differs from expected.json"));
        }
        if !validator.is_valid(&actual) {
            errors.push(format!("{name}: output does not match occurrence schema"));
        }
        if errors.len() == before {
            println!("✓ fixture '{name}'");
        }
    }

    if errors.is_empty() {
        return Ok(());
    }
    for e in &errors {
        eprintln!("  ✗ {e}");
    }
    eprintln!("\nRun `cargo xtask update-fixtures` if the change is intended.");
    bail!("Conformance failed")
}

/// Every issue title has a catalog entry that round-trips.
fn catalog_coverage() -> anyhow::Result<()> {
    let mut missing = Vec::new();
    for title in occurrence_types::IssueTitle::ALL {
        let category = title.category();
        match occurrence_types::lookup_category(category.key) {
            Some(found) if found.title == title && found.kind == title.occurrence_type() => {
                println!("✓ {} -> {} ({})", category.key, category.kind, title);
            }
            _ => missing.push(title.to_string()),
        }
    }
    if missing.is_empty() {
        return Ok(());
    }
    bail!("Catalog entries missing or inconsistent: {}", missing.join(", "))
}

fn print_help() {
    eprintln!("xtask commands:");
    eprintln!("  help              Show this message");
    eprintln!("  emit-schemas      Generate JSON schemas from Rust types to schemas/");
    eprintln!("  validate-schemas  Check if schemas/ matches generated output (for CI)");
    eprintln!("  conform           Check golden fixtures against a fresh build and the schema");
    eprintln!("  update-fixtures   Rewrite expected.json for every fixture");
    eprintln!("  catalog-coverage  Check every issue title has a consistent catalog entry");
}

fn main() -> anyhow::Result<()> {
    let args: Vec<String> = std::env::args().skip(1).collect();
    let cmd = args.first().map(String::as_str).unwrap_or("help");

    match cmd {
        "help" | "--help" | "-h" => {
            print_help();
            Ok(())
        }
        "emit-schemas" => emit_schemas(),
        "validate-schemas" => validate_schemas(),
        "conform" => conform(),
        "update-fixtures" => update_fixtures(),
        "catalog-coverage" => catalog_coverage(),
        other => bail!("unknown xtask command: {other}\n\nRun `cargo xtask help` for usage."),
    }
}
