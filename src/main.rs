//! `diagonal` - watch a halting oracle get applied to itself.
//!
//! With no arguments, prints one line for every cell of the 8×8 grid, then
//! waits for Enter before exiting.
//!
//! # Environment Variables
//!
//! - `RUST_LOG`: tracing filter when neither `--debug` nor `--verbose` is given
//! - `NO_COLOR`: disable ANSI styling when set to a non-empty value

use std::io::{self, BufRead, Write};
use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use diagonal::audit::{AuditConfig, AuditFormat, AuditLogger, Severity};
use diagonal::{run_grid, AssessmentEngine, ConsoleSink, DiagonalResult, EngineConfig};
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

/// Simulate the diagonal argument behind the undecidability of the Halting Problem
#[derive(Parser, Debug)]
#[command(name = "diagonal")]
#[command(version, about, long_about = None)]
struct Args {
    /// Size of the computation index and natural-number range
    #[arg(short = 'n', long, default_value_t = 8)]
    grid_size: usize,

    /// Registry slot that holds the assessor itself
    #[arg(short = 'd', long, default_value_t = 6)]
    distinguished_index: usize,

    /// Send the self-referential cell through the non-halting branch
    #[arg(long)]
    specialized_test: bool,

    /// Fill every registry slot with a placeholder
    #[arg(long)]
    without_assessor: bool,

    /// Disable ANSI colours (also: NO_COLOR)
    #[arg(long)]
    no_color: bool,

    /// Exit without waiting for acknowledgement
    #[arg(long)]
    no_wait: bool,

    /// Print a summary of the run after the grid
    #[arg(long)]
    summary: bool,

    /// Write the run report as JSON to PATH
    #[arg(long, value_name = "PATH")]
    report: Option<PathBuf>,

    /// Enable audit logging (default file: diagonal-audit.log)
    #[arg(long, value_name = "PATH", num_args = 0..=1, default_missing_value = "diagonal-audit.log")]
    audit: Option<PathBuf>,

    /// Use JSON Lines format for audit output
    #[arg(long, requires = "audit")]
    audit_json: bool,

    /// Lowest audit severity to record: trace, info, warning or error
    #[arg(long, value_name = "LEVEL", default_value = "trace", value_parser = parse_severity, requires = "audit")]
    audit_level: Severity,

    /// Enable debug logging
    #[arg(long)]
    debug: bool,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,
}

impl Args {
    fn engine_config(&self) -> EngineConfig {
        EngineConfig::default()
            .with_grid_size(self.grid_size)
            .with_distinguished_index(self.distinguished_index)
            .with_specialized_test(self.specialized_test)
            .with_assessor_present(!self.without_assessor)
    }

    fn color(&self) -> bool {
        let no_color_env = std::env::var_os("NO_COLOR").is_some_and(|v| !v.is_empty());
        !self.no_color && !no_color_env
    }
}

fn parse_severity(s: &str) -> Result<Severity, String> {
    Severity::parse(s).ok_or_else(|| format!("unknown severity '{s}'"))
}

fn main() -> ExitCode {
    let args = Args::parse();
    init_tracing(&args);

    // Configuration errors fail fast, before anything is printed.
    let config = args.engine_config();
    match AssessmentEngine::new(config).and_then(|engine| run(&args, engine)) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) if e.is_config() => {
            eprintln!("Configuration error: {e}");
            ExitCode::FAILURE
        }
        Err(e) => {
            error!(category = %e.category(), recoverable = e.is_recoverable(), "{e}");
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}

fn run(args: &Args, engine: AssessmentEngine) -> DiagonalResult<()> {
    let engine = match &args.audit {
        Some(path) => {
            let logger = AuditLogger::new(AuditConfig {
                log_path: path.clone(),
                min_severity: args.audit_level,
                format: if args.audit_json {
                    AuditFormat::JsonLines
                } else {
                    AuditFormat::Text
                },
            })?;
            info!(path = %path.display(), "Audit logging enabled");
            engine.with_audit(logger)
        }
        None => engine,
    };

    let mut sink = ConsoleSink::stdout(args.color());
    let report = run_grid(&engine, &mut sink)?;

    if args.summary {
        report.write_summary(&mut sink)?;
    }

    if let Some(path) = &args.report {
        report.write_json(path)?;
        info!(path = %path.display(), "Run report written");
    }

    if let Some(audit) = engine.audit() {
        info!(entries = audit.sequence(), "Audit log complete");
    }

    if !args.no_wait {
        wait_for_acknowledgement()?;
    }

    Ok(())
}

fn init_tracing(args: &Args) {
    let filter = if args.debug {
        EnvFilter::new("debug")
    } else if args.verbose {
        EnvFilter::new("info")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(io::stderr)
        .init();
}

/// Block until the user presses Enter. End of input counts as acknowledgement.
fn wait_for_acknowledgement() -> io::Result<()> {
    let mut stdout = io::stdout();
    write!(stdout, "Press Enter to exit...")?;
    stdout.flush()?;

    let mut line = String::new();
    io::stdin().lock().read_line(&mut line)?;
    Ok(())
}
