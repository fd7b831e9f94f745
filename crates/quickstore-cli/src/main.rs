//! QuickStore command-line harness.
//!
//! Opens a YAML-backed nested store and runs a single operation against it.
//!
//! # Usage
//!
//! ```text
//! qstore [OPTIONS] <COMMAND>
//!
//! Commands:
//!   get <KEY>            Print the value at KEY (nothing if unset)
//!   set <KEY> <VALUE>    Store VALUE (parsed as YAML) at KEY
//!   delete <KEY>         Delete the value at KEY
//!   keys                 List the top-level keys
//!   file                 Print the store file path
//!
//! Options:
//!   --config <PATH>      TOML config file with file_path / key_separator
//!   --file <PATH>        Store file (overrides the config file)
//!   --separator <CHAR>   Key separator (overrides the config file) [default: /]
//!   --format <FORMAT>    Output format: yaml | json [default: yaml]
//! ```
//!
//! # Environment variable overrides
//!
//! | Variable           | Flag          |
//! |--------------------|---------------|
//! | `QSTORE_CONFIG`    | `--config`    |
//! | `QSTORE_FILE`      | `--file`      |
//! | `QSTORE_SEPARATOR` | `--separator` |
//!
//! Logs go to stderr; the level is controlled by `RUST_LOG` (default `warn`).

use std::io::Write;
use std::path::PathBuf;

use anyhow::Context;
use clap::{Parser, Subcommand, ValueEnum};
use quickstore_core::{NestedStore, StoreConfig, Value};
use tracing::debug;
use tracing_subscriber::EnvFilter;

// ── CLI argument definitions ──────────────────────────────────────────────────

/// Path-addressed key-value store persisted to a single YAML file.
#[derive(Debug, Parser)]
#[command(name = "qstore", version)]
struct Cli {
    /// TOML configuration file providing `file_path` and `key_separator`.
    #[arg(long, env = "QSTORE_CONFIG")]
    config: Option<PathBuf>,

    /// Store file; takes precedence over `file_path` from `--config`.
    #[arg(long, env = "QSTORE_FILE")]
    file: Option<PathBuf>,

    /// Key separator; takes precedence over `key_separator` from `--config`.
    #[arg(long, env = "QSTORE_SEPARATOR")]
    separator: Option<char>,

    /// Output format for printed values.
    #[arg(long, value_enum, default_value_t = OutputFormat::Yaml)]
    format: OutputFormat,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand, PartialEq)]
enum Command {
    /// Print the value at KEY; prints nothing when the key is unset.
    Get { key: String },
    /// Store VALUE at KEY and print the resulting top-level value.
    Set {
        key: String,
        /// Parsed as YAML (`42`, `true`, `{a: 1}`); anything unparsable is stored as a string.
        value: String,
    },
    /// Delete the value at KEY.
    Delete { key: String },
    /// List the top-level keys, one per line.
    Keys,
    /// Print the path of the store file.
    File,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum OutputFormat {
    Yaml,
    Json,
}

impl Cli {
    /// Builds the store configuration from `--config` plus flag overrides.
    ///
    /// # Errors
    ///
    /// Returns an error if the config file cannot be read or parsed.
    fn store_config(&self) -> anyhow::Result<StoreConfig> {
        let mut config = match &self.config {
            Some(path) => StoreConfig::load(path)
                .with_context(|| format!("failed to load config from {}", path.display()))?,
            None => StoreConfig::default(),
        };
        if let Some(file) = &self.file {
            config = config.with_file_path(file);
        }
        if let Some(separator) = self.separator {
            config = config.with_key_separator(separator);
        }
        Ok(config)
    }
}

// ── Command execution ─────────────────────────────────────────────────────────

/// Runs the parsed command, writing results to `out`.
fn run(cli: Cli, out: &mut impl Write) -> anyhow::Result<()> {
    let config = cli.store_config()?;
    let store = NestedStore::open(&config).context("failed to open store")?;
    debug!("running {:?} against {}", cli.command, store.file().display());

    match cli.command {
        Command::Get { key } => {
            if let Some(value) = store.get(&key).with_context(|| format!("get {key}"))? {
                out.write_all(render(&value, cli.format)?.as_bytes())?;
            }
        }
        Command::Set { key, value } => {
            let stored = store
                .set(&key, parse_value(&value))
                .with_context(|| format!("set {key}"))?;
            out.write_all(render(&stored, cli.format)?.as_bytes())?;
        }
        Command::Delete { key } => {
            store.delete(&key).with_context(|| format!("delete {key}"))?;
        }
        Command::Keys => {
            for key in store.keys()? {
                writeln!(out, "{key}")?;
            }
        }
        Command::File => {
            writeln!(out, "{}", store.file().display())?;
        }
    }
    Ok(())
}

/// Interprets a command-line value as YAML, falling back to a plain string.
fn parse_value(raw: &str) -> Value {
    if raw.is_empty() {
        return Value::from(raw);
    }
    serde_yaml::from_str(raw).unwrap_or_else(|_| Value::from(raw))
}

/// Formats a value for printing, always ending in a newline.
fn render(value: &Value, format: OutputFormat) -> anyhow::Result<String> {
    let text = match format {
        OutputFormat::Yaml => serde_yaml::to_string(value)?,
        OutputFormat::Json => {
            let mut json = serde_json::to_string_pretty(value)?;
            json.push('\n');
            json
        }
    };
    Ok(text)
}

// ── Entry point ───────────────────────────────────────────────────────────────

fn main() -> anyhow::Result<()> {
    // `RUST_LOG` overrides the level; stdout is reserved for command output.
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .init();

    let cli = Cli::parse();
    let stdout = std::io::stdout();
    run(cli, &mut stdout.lock())
}

// ── Tests ─────────────────────────────────────────────────────────────────────
