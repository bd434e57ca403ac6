//! prefs-host: command-line front end for the preference boundary.
//!
//! Useful for checking what the frontend will see for a given backend
//! response, and for driving the command bridge without a webview.
//!
//! # Usage
//!
//! ```text
//! prefs-host [OPTIONS] <COMMAND>
//!
//! Commands:
//!   hydrate  [FILE]            Hydrate a configuration snapshot (stdin if omitted)
//!   envelope [FILE]            Parse a response envelope (stdin if omitted)
//!   defaults                   Print the RestorePreferences envelope
//!   invoke <NAME> [ARGS_JSON]  Run a bridge command on a fresh service
//!
//! Options:
//!   --config <PATH>   Settings file [env: PREFS_CONFIG]
//!   --compact         Single-line JSON output [env: PREFS_COMPACT]
//! ```
//!
//! Log output goes to stderr.  The level comes from `RUST_LOG`, then the
//! settings file, then `info`.

use std::io::Read;
use std::path::{Path, PathBuf};

use anyhow::Context;
use clap::{Parser, Subcommand};
use serde::Serialize;
use serde_json::Value;
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

use prefs_core::{hydrate_configuration, parse_envelope};
use prefs_host::infrastructure::settings::{load_settings, settings_file_path, HostSettings};
use prefs_host::infrastructure::ui_bridge::{invoke, AppState, COMMANDS};

// ── CLI argument definitions ──────────────────────────────────────────────────

#[derive(Debug, Parser)]
#[command(
    name = "prefs-host",
    about = "Inspect preference snapshots and response envelopes, or run bridge commands",
    version
)]
struct Cli {
    /// Path to the TOML settings file.
    ///
    /// Defaults to `prefs-host.toml` in the platform config directory.  A
    /// missing file is not an error.
    #[arg(long, env = "PREFS_CONFIG")]
    config: Option<PathBuf>,

    /// Print single-line JSON instead of pretty-printing.
    #[arg(long, env = "PREFS_COMPACT")]
    compact: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Hydrate a configuration snapshot and print the typed result.
    Hydrate {
        /// JSON file to read; stdin when omitted.
        file: Option<PathBuf>,
    },
    /// Parse a response envelope and print it.
    Envelope {
        /// JSON file to read; stdin when omitted.
        file: Option<PathBuf>,
    },
    /// Print the envelope returned by `RestorePreferences`.
    Defaults,
    /// Run one bridge command against a fresh in-memory service.
    Invoke {
        /// Command name, e.g. `GetPreferences`.
        name: String,
        /// Arguments as JSON text.
        args: Option<String>,
    },
}

// ── Helpers ───────────────────────────────────────────────────────────────────

fn resolve_settings(path: Option<&Path>) -> anyhow::Result<HostSettings> {
    let path = match path {
        Some(p) => p.to_path_buf(),
        None => match settings_file_path() {
            Ok(p) => p,
            // No platform config dir (e.g. stripped container): run on defaults.
            Err(_) => return Ok(HostSettings::default()),
        },
    };
    load_settings(&path).with_context(|| format!("failed to load settings from {}", path.display()))
}

fn read_input(file: Option<&Path>) -> anyhow::Result<String> {
    match file {
        Some(path) => std::fs::read_to_string(path)
            .with_context(|| format!("failed to read {}", path.display())),
        None => {
            let mut text = String::new();
            std::io::stdin()
                .read_to_string(&mut text)
                .context("failed to read stdin")?;
            Ok(text)
        }
    }
}

fn print_json<T: Serialize>(value: &T, pretty: bool) -> anyhow::Result<()> {
    let text = if pretty {
        serde_json::to_string_pretty(value)?
    } else {
        serde_json::to_string(value)?
    };
    println!("{text}");
    Ok(())
}

// ── Entry point ───────────────────────────────────────────────────────────────

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Settings are read before logging starts because they carry the
    // fallback log level.  Errors are reported after initialisation.
    let settings = resolve_settings(cli.config.as_deref());
    let level = settings
        .as_ref()
        .map(|s| s.logging.level.clone())
        .unwrap_or_else(|_| "info".to_string());

    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level)))
        .init();

    let settings = settings?;
    let pretty = settings.app.pretty && !cli.compact;
    debug!(?settings, "settings loaded");

    match cli.command {
        Command::Hydrate { file } => {
            let text = read_input(file.as_deref())?;
            let prefs = hydrate_configuration(text.as_str())
                .context("failed to hydrate configuration snapshot")?;
            print_json(&prefs, pretty)?;
        }
        Command::Envelope { file } => {
            let text = read_input(file.as_deref())?;
            let env = parse_envelope(text.as_str()).context("failed to parse envelope")?;
            print_json(&env, pretty)?;
        }
        Command::Defaults => {
            let state = AppState::from_settings(&settings).await;
            print_json(&state.preferences.restore_preferences().await, pretty)?;
        }
        Command::Invoke { name, args } => {
            if !COMMANDS.contains(&name.as_str()) {
                info!(command = %name, known = ?COMMANDS, "command is not in the bridge table");
            }
            let args: Value = match args {
                Some(text) => serde_json::from_str(&text)
                    .with_context(|| format!("arguments for {name} are not valid JSON"))?,
                None => Value::Null,
            };
            let state = AppState::from_settings(&settings).await;
            let env = invoke(&state, &name, args).await;
            print_json(&env, pretty)?;
        }
    }

    Ok(())
}
