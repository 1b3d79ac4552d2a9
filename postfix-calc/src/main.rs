use std::fs::File;
use std::io::{self, BufReader, IsTerminal, Write};
use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::Parser;
use tracing_subscriber::EnvFilter;

use postfix_calc::config::CalcConfig;
use postfix_calc::session::{Session, SessionSummary};
use postfix_calc::{evaluate, format_value};

/// Evaluate postfix (reverse Polish) arithmetic expressions.
#[derive(Parser)]
#[command(name = "postfix-calc")]
#[command(version, about, long_about = None)]
struct Cli {
    /// Expression to evaluate, e.g. "1 3 + 2 7 - /". Reads stdin when omitted.
    #[arg(conflicts_with = "file", allow_hyphen_values = true)]
    expression: Option<String>,

    /// Evaluate one expression per line of this file.
    #[arg(short, long)]
    file: Option<PathBuf>,

    /// TOML configuration file.
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Fractional digits to print.
    #[arg(short, long)]
    precision: Option<usize>,

    /// Stop at the first failing line.
    #[arg(long)]
    stop_on_error: bool,
}

fn init_logging(config: &CalcConfig) {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&config.log_filter))
        .unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

fn exit_code(summary: SessionSummary) -> ExitCode {
    if summary.is_success() {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    }
}

fn main() -> Result<ExitCode> {
    let cli = Cli::parse();

    let mut config = match &cli.config {
        Some(path) => CalcConfig::load(path)?,
        None => CalcConfig::default(),
    };
    if cli.precision.is_some() {
        config.precision = cli.precision;
    }
    if cli.stop_on_error {
        config.continue_on_error = false;
    }

    init_logging(&config);
    tracing::debug!(?config, "configuration loaded");

    if let Some(expression) = &cli.expression {
        return match evaluate(expression) {
            Ok(value) => {
                println!("{}", format_value(value, config.precision));
                Ok(ExitCode::SUCCESS)
            }
            Err(e) => {
                eprintln!("Failed to evaluate the expression: {}", e);
                Ok(ExitCode::FAILURE)
            }
        };
    }

    let session = Session::new(&config);

    if let Some(path) = &cli.file {
        let file = File::open(path)
            .with_context(|| format!("failed to open expression file {}", path.display()))?;
        let summary = session.run(BufReader::new(file), io::stdout().lock())?;
        return Ok(exit_code(summary));
    }

    let stdin = io::stdin();
    if stdin.is_terminal() {
        eprintln!("Enter one postfix expression per line (Ctrl-D to quit):");
        io::stderr().flush()?;
    }
    let summary = session.run(stdin.lock(), io::stdout().lock())?;

    Ok(exit_code(summary))
}
