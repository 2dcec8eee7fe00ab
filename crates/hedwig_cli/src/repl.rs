//! Interactive mode: scan each line of stdin as it arrives.

use crate::error::{print_error, CliError, EXIT_OK};
use crate::render::{self, DiagnosticRenderer};
use hedwig_core::SourceFile;
use hedwig_diagnostics::DiagnosticCollection;
use hedwig_options::{OutputFormat, ScanOptions};
use hedwig_scanner::scan_tokens;
use std::io::{self, BufRead, Write};

const PROMPT: &str = "> ";
const SOURCE_NAME: &str = "<repl>";

/// Read lines from stdin until end of input. Each line is scanned on its own,
/// so line numbers restart at 1 and errors never carry over.
pub fn run(options: &ScanOptions, color: bool) -> u8 {
    let stdin = io::stdin();
    match prompt_loop(stdin.lock(), io::stdout().lock(), options, color) {
        Ok(()) => EXIT_OK,
        Err(err) => {
            let code = err.exit_code();
            print_error(err);
            code
        }
    }
}

fn prompt_loop(
    input: impl BufRead,
    mut out: impl Write,
    options: &ScanOptions,
    color: bool,
) -> Result<(), CliError> {
    let renderer = DiagnosticRenderer::new(options.pretty, color);
    let mut lines = input.lines();

    loop {
        write!(out, "{}", PROMPT)?;
        out.flush()?;

        let Some(line) = lines.next() else {
            writeln!(out)?;
            return Ok(());
        };
        let source = SourceFile::new(SOURCE_NAME, line?);

        let mut diagnostics = DiagnosticCollection::new();
        let tokens = scan_tokens(&source.text, &mut diagnostics);
        tracing::debug!(tokens = tokens.len(), errors = diagnostics.error_count(), "scanned line");

        match options.format {
            OutputFormat::Text => render::write_tokens_text(&mut out, &tokens)?,
            OutputFormat::Json => {
                serde_json::to_writer(&mut out, &tokens)?;
                writeln!(out)?;
            }
        }
        if !diagnostics.is_empty() {
            out.flush()?;
            eprint!("{}", renderer.render_all(&source, &diagnostics));
        }
    }
}
