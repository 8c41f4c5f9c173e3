//! CLI entry point for occurrence.
//!
//! This module is intentionally thin: it handles argument parsing, I/O, and exit codes.
//! All business logic lives in the `occurrence-app` crate.

use anyhow::Context;
use camino::{Utf8Path, Utf8PathBuf};
use clap::{Parser, Subcommand};
use occurrence_app::{
    BuildInput, FingerprintInput, format_categories, occurrence_schema, run_build,
    run_fingerprint, serialize_occurrence, write_text,
};
use occurrence_settings::Overrides;
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(
    name = "occurrence",
    version,
    about = "Build deduplicable issue occurrences from profile detections"
)]
struct Cli {
    /// Path to occurrence config TOML (missing file means defaults).
    #[arg(long, global = true, default_value = "occurrence.toml")]
    config: Utf8PathBuf,

    /// Override the issue category (catalog key, e.g. blocking_main_thread).
    #[arg(long, global = true)]
    issue: Option<String>,

    #[command(subcommand)]
    cmd: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Assemble one occurrence from a profile snapshot and a suspect node.
    Build {
        /// Profile snapshot JSON.
        #[arg(long)]
        profile: Utf8PathBuf,

        /// Suspect node JSON (node + stack_trace).
        #[arg(long)]
        node: Utf8PathBuf,

        /// Pretty-print the JSON output.
        #[arg(long)]
        pretty: bool,

        /// Where to write the occurrence (stdout if not specified).
        #[arg(long, short)]
        out: Option<Utf8PathBuf>,
    },

    /// Print the fingerprint for a detection without building a record.
    Fingerprint {
        #[arg(long)]
        project_id: u64,
        #[arg(long)]
        transaction: String,
        #[arg(long)]
        package: String,
        #[arg(long)]
        function: String,
    },

    /// Print the JSON schema of the occurrence record.
    Schema,

    /// List known issue categories.
    Categories,
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.cmd {
        Commands::Build {
            ref profile,
            ref node,
            pretty,
            ref out,
        } => cmd_build(&cli, profile, node, pretty, out.as_deref()),
        Commands::Fingerprint {
            project_id,
            ref transaction,
            ref package,
            ref function,
        } => cmd_fingerprint(&cli, project_id, transaction, package, function),
        Commands::Schema => cmd_schema(),
        Commands::Categories => {
            print!("{}", format_categories());
            Ok(())
        }
    }
}

/// Load config if present; a missing file is allowed (defaults apply).
fn read_config(cli: &Cli) -> String {
    match std::fs::read_to_string(&cli.config) {
        Ok(text) => text,
        Err(err) => {
            tracing::debug!(path = %cli.config, %err, "config not loaded, using defaults");
            String::new()
        }
    }
}

fn cmd_build(
    cli: &Cli,
    profile: &Utf8Path,
    node: &Utf8Path,
    pretty: bool,
    out: Option<&Utf8Path>,
) -> anyhow::Result<()> {
    let cfg_text = read_config(cli);
    let profile_json =
        std::fs::read_to_string(profile).with_context(|| format!("read profile: {profile}"))?;
    let node_json = std::fs::read_to_string(node).with_context(|| format!("read node: {node}"))?;

    let output = run_build(BuildInput {
        profile_json: &profile_json,
        node_json: &node_json,
        config_text: &cfg_text,
        overrides: Overrides {
            issue: cli.issue.clone(),
            pretty: pretty.then_some(true),
        },
    })?;

    let json = serialize_occurrence(&output.occurrence, output.resolved_config.pretty)?;
    match out {
        Some(path) => write_text(path, &json).context("write occurrence")?,
        None => print!("{json}"),
    }
    Ok(())
}

fn cmd_fingerprint(
    cli: &Cli,
    project_id: u64,
    transaction: &str,
    package: &str,
    function: &str,
) -> anyhow::Result<()> {
    let cfg_text = read_config(cli);
    let cfg = if cfg_text.trim().is_empty() {
        occurrence_settings::OccurrenceConfigV1::default()
    } else {
        occurrence_settings::parse_config_toml(&cfg_text).context("parse config")?
    };
    let resolved = occurrence_settings::resolve_config(
        cfg,
        Overrides {
            issue: cli.issue.clone(),
            pretty: None,
        },
    )
    .context("resolve config")?;

    let fp = run_fingerprint(FingerprintInput {
        project_id,
        title: resolved.title,
        transaction_name: transaction,
        package,
        function,
    });
    println!("{fp}");
    Ok(())
}

fn cmd_schema() -> anyhow::Result<()> {
    let schema = occurrence_schema()?;
    let json = serde_json::to_string_pretty(&schema).context("serialize schema")?;
    println!("{json}");
    Ok(())
}
