// SPDX-License-Identifier: PMPL-1.0-or-later

//! lockpick: password guessing client for plaintext socket login servers
//!
//! Sends candidates to `HOST:PORT` one at a time and prints the accepted
//! password on stdout. Progress and diagnostics go to stderr.

use anyhow::{Context, Result};
use clap::{ArgAction, Parser};
use lockpick::attack::{self, AttackProfile};
use lockpick::report::{self, ReportFormatter};
use lockpick::types::{Alphabet, RunOutcome, DEFAULT_WORDLIST};
use std::path::PathBuf;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

#[derive(Parser)]
#[command(name = "lockpick")]
#[command(version)]
#[command(about = "Password guessing client for plaintext socket login servers")]
#[command(long_about = None)]
struct Cli {
    /// Server host name or IP address
    #[arg(value_name = "HOST")]
    host: String,

    /// Server port
    #[arg(value_name = "PORT")]
    port: u16,

    /// Try case variants of each word in a list instead of brute force
    #[arg(
        short,
        long,
        num_args = 0..=1,
        require_equals = true,
        default_missing_value = DEFAULT_WORDLIST
    )]
    wordlist: Option<PathBuf>,

    /// Stop brute force after this length
    #[arg(long)]
    max_length: Option<usize>,

    /// Brute-force charset (default: a-z then 0-9)
    #[arg(long)]
    alphabet: Option<Alphabet>,

    /// Connect/read/write timeout in seconds
    #[arg(short, long, value_name = "SECS")]
    timeout: Option<u64>,

    /// Load settings from a JSON or YAML profile (flags take precedence)
    #[arg(short, long)]
    profile: Option<PathBuf>,

    /// Save the run report (.json, .yaml)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Increase log verbosity (-v debug, -vv trace)
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,
}

impl Cli {
    fn overrides(&self) -> AttackProfile {
        AttackProfile {
            alphabet: self.alphabet.clone(),
            max_length: self.max_length,
            timeout_secs: self.timeout,
            wordlist: self.wordlist.clone(),
        }
    }
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => "info",
        1 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(filter)
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let base = match &cli.profile {
        Some(path) => AttackProfile::load(path)?,
        None => AttackProfile::default(),
    };
    let config = base
        .merge(cli.overrides())
        .into_config(cli.host.clone(), cli.port)?;
    let target = config.target();

    let report = attack::execute_attack(config).with_context(|| format!("attacking {}", target))?;

    if let Some(output_path) = &cli.output {
        report::save_report(&report, output_path)?;
    }
    if cli.verbose > 0 {
        report::print_summary(&report);
    }

    match &report.outcome {
        RunOutcome::Success(password) => println!("{}", password),
        other => eprintln!("{}", ReportFormatter::new().status_line(other)),
    }

    Ok(())
}
