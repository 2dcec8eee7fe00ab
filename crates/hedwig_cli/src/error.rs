//! Failures that stop the driver, and the exit codes they map to.

use hedwig_core::CoreError;
use hedwig_options::ConfigError;
use thiserror::Error;

/// Successful run, no error diagnostics.
pub const EXIT_OK: u8 = 0;
/// Bad command line.
pub const EXIT_USAGE: u8 = 64;
/// At least one source produced an error diagnostic.
pub const EXIT_DATA_ERR: u8 = 65;
/// An input file could not be read.
pub const EXIT_NO_INPUT: u8 = 66;
/// Writing results failed.
pub const EXIT_IO_ERR: u8 = 74;
/// The project file is missing or malformed.
pub const EXIT_CONFIG: u8 = 78;

#[derive(Debug, Error, miette::Diagnostic)]
pub enum CliError {
    #[error(transparent)]
    #[diagnostic(code(hedwig::input))]
    Source(#[from] CoreError),

    #[error(transparent)]
    #[diagnostic(
        code(hedwig::config),
        help("hedwig.json accepts \"files\", \"format\" and \"pretty\"")
    )]
    Config(#[from] ConfigError),

    #[error("failed to write output")]
    #[diagnostic(code(hedwig::output))]
    Output(#[from] std::io::Error),

    #[error("failed to encode output as JSON")]
    #[diagnostic(code(hedwig::output))]
    Json(#[from] serde_json::Error),
}

impl CliError {
    pub fn exit_code(&self) -> u8 {
        match self {
            CliError::Source(_) => EXIT_NO_INPUT,
            CliError::Config(_) => EXIT_CONFIG,
            CliError::Output(_) | CliError::Json(_) => EXIT_IO_ERR,
        }
    }
}

/// Print an error with its cause chain to stderr.
pub fn print_error(err: CliError) {
    eprintln!("{:?}", miette::Report::new(err));
}
