//! tglogin - Verify Telegram Login Widget payloads
//!
//! Reads the JSON object Telegram passes to a login callback and checks its
//! `hash` against the bot token.

mod config;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use owo_colors::{OwoColorize, Stream::Stdout};
use std::io::Read;
use std::path::{Path, PathBuf};
use std::process::ExitCode;
use tglogin_auth::{canonicalize, IdentityClaim, Verifier};

use crate::config::Config;

/// Process exit codes
mod exit_codes {
    pub const SUCCESS: u8 = 0;
    pub const REJECTED: u8 = 1;
    pub const INPUT_ERROR: u8 = 2;
    pub const CONFIG_ERROR: u8 = 3;
}

#[derive(Parser)]
#[command(name = "tglogin")]
#[command(about = "Verify Telegram Login Widget payloads")]
#[command(version)]
struct Cli {
    /// Path to tglogin.toml
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Bot token (overrides environment and config file)
    ///
    /// Arguments are visible in the process list; prefer TELEGRAM_BOT_TOKEN
    /// or bot.token in tglogin.toml outside of local testing.
    #[arg(long, global = true)]
    token: Option<String>,

    /// Enable debug logging
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Check the payload signature
    Verify {
        /// JSON payload file (stdin when omitted or "-")
        file: Option<PathBuf>,
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
    /// Print the data-check string for a payload
    Canonical {
        /// JSON payload file (stdin when omitted or "-")
        file: Option<PathBuf>,
    },
    /// Print the signature Telegram would attach to a payload
    Sign {
        /// JSON payload file (stdin when omitted or "-")
        file: Option<PathBuf>,
    },
}

/// Failure classes that map to distinct exit codes
enum Failure {
    Config(anyhow::Error),
    Input(anyhow::Error),
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    match run(cli) {
        Ok(code) => ExitCode::from(code),
        Err(Failure::Config(e)) => {
            eprintln!("Error: {e:#}");
            ExitCode::from(exit_codes::CONFIG_ERROR)
        }
        Err(Failure::Input(e)) => {
            eprintln!("Error: {e:#}");
            ExitCode::from(exit_codes::INPUT_ERROR)
        }
    }
}

fn run(cli: Cli) -> std::result::Result<u8, Failure> {
    let config = Config::load(cli.config.as_deref()).map_err(Failure::Config)?;

    let mut logging = config.logging.clone();
    if cli.verbose {
        logging = logging.verbose();
    }
    tglogin_telemetry::init_with_config(&logging).map_err(Failure::Config)?;

    if let Some(path) = &config.path {
        tracing::debug!(path = %path.display(), "Loaded configuration");
    }

    match cli.command {
        Commands::Canonical { file } => {
            let claim = read_claim(file.as_deref()).map_err(Failure::Input)?;
            println!("{}", canonicalize(&claim));
            Ok(exit_codes::SUCCESS)
        }

        Commands::Sign { file } => {
            let verifier = verifier(&config, cli.token.as_deref())?;
            let claim = read_claim(file.as_deref()).map_err(Failure::Input)?;
            let signature = verifier
                .sign(&claim)
                .context("Failed to compute signature")
                .map_err(Failure::Input)?;
            println!("{signature}");
            Ok(exit_codes::SUCCESS)
        }

        Commands::Verify { file, json } => {
            let verifier = verifier(&config, cli.token.as_deref())?;
            let claim = read_claim(file.as_deref()).map_err(Failure::Input)?;
            let valid = verifier.verify(&claim).is_ok();

            if json {
                println!("{}", serde_json::json!({ "valid": valid, "id": claim.id }));
            } else if valid {
                println!("{}", "valid".if_supports_color(Stdout, |t| t.green()));
            } else {
                println!("{}", "invalid".if_supports_color(Stdout, |t| t.red()));
            }

            Ok(if valid { exit_codes::SUCCESS } else { exit_codes::REJECTED })
        }
    }
}

fn verifier(config: &Config, flag: Option<&str>) -> std::result::Result<Verifier, Failure> {
    let token = config.resolve_token(flag).map_err(Failure::Config)?;
    Ok(Verifier::new(token))
}

/// Read and decode a claim from `path`, or stdin for `None` / `-`.
fn read_claim(path: Option<&Path>) -> Result<IdentityClaim> {
    let raw = match path {
        Some(p) if p != Path::new("-") => std::fs::read_to_string(p)
            .with_context(|| format!("Failed to read {}", p.display()))?,
        _ => {
            let mut buf = String::new();
            std::io::stdin()
                .read_to_string(&mut buf)
                .context("Failed to read stdin")?;
            buf
        }
    };

    serde_json::from_str(&raw).context("Invalid login payload")
}
