use anyhow::Result;
use clap::{CommandFactory, Parser};
use lockscan::{
    config::Config,
    error::ScanError,
    output::print_report,
    scanner::{build_report, load_manifest},
};
use std::path::PathBuf;
use std::process::ExitCode;
use tracing::{debug, warn};
use tracing_subscriber::EnvFilter;

mod exit_codes {
    pub const SUCCESS: u8 = 0;
    pub const ERROR: u8 = 1;
}

#[derive(Parser)]
#[command(name = "lockscan")]
#[command(
    author,
    version,
    about = "Aggregate lock file dependencies and flag known-compromised versions"
)]
struct Cli {
    /// Path to the lock file (e.g. package-lock.json)
    manifest: Option<PathBuf>,
}

fn main() -> ExitCode {
    init_logging();

    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) => {
            // --help and --version also arrive here, on stdout.
            let code = if e.use_stderr() {
                exit_codes::ERROR
            } else {
                exit_codes::SUCCESS
            };
            let _ = e.print();
            return ExitCode::from(code);
        }
    };

    match run(cli) {
        Ok(code) => ExitCode::from(code),
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::from(exit_codes::ERROR)
        }
    }
}

fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn run(cli: Cli) -> Result<u8> {
    let Some(manifest_path) = cli.manifest else {
        eprintln!("{}", Cli::command().render_usage());
        return Err(ScanError::MissingArgument.into());
    };

    let config = Config::load().unwrap_or_else(|e| {
        warn!(
            path = %Config::config_path().display(),
            error = %e,
            "ignoring unreadable config file"
        );
        Config::default()
    });
    let format = config.output_format();

    let manifest = load_manifest(&manifest_path, config.strict)?;
    let checker = config.checker();
    debug!(rules = checker.rules().len(), "loaded vulnerability rules");

    let report = build_report(manifest, &checker);
    print_report(&report, format)?;

    // Findings are reported, never turned into a failing status.
    Ok(exit_codes::SUCCESS)
}
