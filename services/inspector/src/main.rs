//! Message inspector binary
//!
//! Usage:
//!   frame-inspect '{3}[a2V5]{5}[aGVsbG8=]'
//!   frame-inspect --config config/inspector.toml < messages.txt

use anyhow::Result;
use clap::Parser;
use frame_config::{ConfigSource, InspectorConfig};
use frame_inspector::{log_filter, Inspector};
use std::io;
use std::path::PathBuf;
use std::process::ExitCode;
use tracing::{error, info};

#[derive(Parser, Debug)]
#[command(name = "frame-inspect")]
#[command(about = "Parse and validate length-tagged field messages")]
#[command(version)]
struct Args {
    /// Path to configuration file
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Log filter (trace, debug, info, warn, error, or per-target directives)
    #[arg(short, long)]
    log_level: Option<String>,

    /// Enable JSON logging format
    #[arg(long)]
    json_logs: bool,

    /// Stop at the first rejected message
    #[arg(long)]
    fail_fast: bool,

    /// Print the effective configuration and exit
    #[arg(long)]
    print_config: bool,

    /// Messages to inspect; read one per line from stdin when empty
    inputs: Vec<String>,
}

fn main() -> ExitCode {
    match run() {
        Ok(true) => ExitCode::SUCCESS,
        Ok(false) => ExitCode::FAILURE,
        Err(e) => {
            error!("Inspector failed: {:#}", e);
            eprintln!("error: {:#}", e);
            ExitCode::from(2)
        }
    }
}

fn run() -> Result<bool> {
    let args = Args::parse();

    let source = ConfigSource::resolve(args.config.as_deref());
    let mut config = InspectorConfig::load(args.config.as_deref())?;
    apply_overrides(&mut config, &args);

    // The subscriber depends on the loaded config, so report the source afterwards
    init_logging(&config)?;
    info!(%source, fail_fast = config.fail_fast, "Configuration loaded");

    if args.print_config {
        print!("{}", config.to_toml()?);
        return Ok(true);
    }

    let inspector = Inspector::from_config(&config);
    let stdout = io::stdout().lock();

    let summary = if args.inputs.is_empty() {
        info!("Reading messages from stdin");
        inspector.run_lines(io::stdin().lock(), stdout)?
    } else {
        inspector.run_inputs(&args.inputs, stdout)?
    };

    info!(
        accepted = summary.accepted,
        rejected = summary.rejected,
        "Inspection complete"
    );
    Ok(summary.all_accepted())
}

fn apply_overrides(config: &mut InspectorConfig, args: &Args) {
    if let Some(level) = &args.log_level {
        config.logging.level = level.clone();
    }
    if args.json_logs {
        config.logging.json = true;
    }
    if args.fail_fast {
        config.fail_fast = true;
    }
}

fn init_logging(config: &InspectorConfig) -> Result<()> {
    let filter = log_filter(&config.logging)?;

    // Logs go to stderr so stdout carries only responses
    if config.logging.json {
        tracing_subscriber::fmt()
            .json()
            .with_env_filter(filter)
            .with_writer(io::stderr)
            .init();
    } else {
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_writer(io::stderr)
            .init();
    }
    Ok(())
}
