//! hedwig: Command-line driver for the hedwig scanner.
//!
//! Usage:
//!   hedwig [options] [file...]
//!
//! With files (or a `hedwig.json` listing them) every file is scanned and its
//! tokens printed. With neither, an interactive prompt scans stdin line by line.

mod driver;
mod error;
mod render;
mod repl;

use clap::{ArgAction, Parser as ClapParser};
use error::{print_error, CliError, EXIT_OK, EXIT_USAGE};
use hedwig_options::{OutputFormat, ScanOptions, CONFIG_FILE_NAME};
use std::io::IsTerminal;
use std::path::{Path, PathBuf};
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

#[derive(ClapParser, Debug)]
#[command(name = "hedwig", version, about = "hedwig - scan source text into tokens")]
struct Cli {
    /// Source files to scan. Starts an interactive prompt when none are given.
    #[arg(value_name = "FILE")]
    files: Vec<PathBuf>,

    /// Path to a hedwig.json project file.
    #[arg(short = 'p', long = "project", value_name = "PATH")]
    project: Option<PathBuf>,

    /// Output format for tokens.
    #[arg(long, value_name = "FORMAT")]
    format: Option<OutputFormat>,

    /// Render diagnostics with source snippets.
    #[arg(long, overrides_with = "no_pretty")]
    pretty: bool,

    /// Render diagnostics one per line.
    #[arg(long = "no-pretty", overrides_with = "pretty")]
    no_pretty: bool,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace).
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,
}

fn main() -> ExitCode {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(err) => {
            let code = if err.use_stderr() { EXIT_USAGE } else { EXIT_OK };
            let _ = err.print();
            return ExitCode::from(code);
        }
    };

    init_tracing(cli.verbose);

    let options = match resolve_options(&cli) {
        Ok(options) => options,
        Err(err) => {
            let code = err.exit_code();
            print_error(err);
            return ExitCode::from(code);
        }
    };
    tracing::debug!(?options, "resolved options");

    let color = std::io::stderr().is_terminal();
    let code = if options.files.is_empty() {
        repl::run(&options, color)
    } else {
        driver::run_files(&options, color)
    };
    ExitCode::from(code)
}

/// Install the global subscriber. `RUST_LOG` takes precedence over `-v`.
fn init_tracing(verbose: u8) {
    let default_level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(true)
        .init();
}

/// Merge the project file, if any, with command-line flags.
fn resolve_options(cli: &Cli) -> Result<ScanOptions, CliError> {
    let mut options = if let Some(ref project) = cli.project {
        load_project(project)?
    } else if cli.files.is_empty() && Path::new(CONFIG_FILE_NAME).exists() {
        load_project(Path::new(CONFIG_FILE_NAME))?
    } else {
        ScanOptions::default()
    };

    // CLI options override hedwig.json
    if !cli.files.is_empty() {
        options.files = cli.files.clone();
    }
    if let Some(format) = cli.format {
        options.format = format;
    }
    if cli.pretty {
        options.pretty = true;
    }
    if cli.no_pretty {
        options.pretty = false;
    }
    Ok(options)
}

fn load_project(path: &Path) -> Result<ScanOptions, CliError> {
    let config = hedwig_options::parse_config_file(path)?;
    Ok(ScanOptions::from_config(&config, path))
}
