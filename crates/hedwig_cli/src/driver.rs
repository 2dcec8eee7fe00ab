//! Batch mode: scan every input file and print the results.

use crate::error::{print_error, CliError, EXIT_DATA_ERR, EXIT_NO_INPUT, EXIT_OK};
use crate::render::{self, DiagnosticRenderer, ScannedFile};
use hedwig_core::SourceFile;
use hedwig_diagnostics::{messages, Diagnostic, DiagnosticCollection, ErrorSink};
use hedwig_options::{OutputFormat, ScanOptions};
use hedwig_scanner::scan_tokens;
use rayon::prelude::*;
use std::io::Write;
use std::time::Instant;

/// Tags every diagnostic with the file it came from.
struct FileSink<'a> {
    file: &'a str,
    inner: &'a mut DiagnosticCollection,
}

impl ErrorSink for FileSink<'_> {
    fn report(&mut self, diagnostic: Diagnostic) {
        self.inner.report(diagnostic.with_file(self.file));
    }
}

/// Scan one loaded file.
pub fn scan_file(source: &SourceFile) -> ScannedFile<'_> {
    let mut diagnostics = DiagnosticCollection::new();
    let mut sink = FileSink {
        file: &source.name,
        inner: &mut diagnostics,
    };
    if source.text.is_empty() {
        sink.report(Diagnostic::new(&messages::EMPTY_SOURCE_FILE, 1));
    }
    let tokens = scan_tokens(&source.text, &mut sink);
    ScannedFile {
        source,
        tokens,
        diagnostics,
    }
}

/// Scan all files in `options` and print them. Returns the process exit code.
pub fn run_files(options: &ScanOptions, color: bool) -> u8 {
    let started = Instant::now();

    let loaded: Vec<Result<SourceFile, CliError>> = options
        .files
        .par_iter()
        .map(|path| SourceFile::load(path).map_err(CliError::from))
        .collect();

    let mut exit_code = EXIT_OK;
    let mut sources = Vec::with_capacity(loaded.len());
    for result in loaded {
        match result {
            Ok(source) => sources.push(source),
            Err(err) => {
                exit_code = EXIT_NO_INPUT;
                print_error(err);
            }
        }
    }

    let scanned: Vec<ScannedFile<'_>> = sources.par_iter().map(scan_file).collect();

    if let Err(err) = print_results(&scanned, options, color) {
        let code = err.exit_code();
        print_error(err);
        return code;
    }

    let errors: usize = scanned.iter().map(|f| f.diagnostics.error_count()).sum();
    tracing::info!(
        files = scanned.len(),
        errors,
        elapsed_ms = started.elapsed().as_millis() as u64,
        "scan finished"
    );

    if exit_code == EXIT_OK && errors > 0 {
        exit_code = EXIT_DATA_ERR;
    }
    exit_code
}

fn print_results(files: &[ScannedFile<'_>], options: &ScanOptions, color: bool) -> Result<(), CliError> {
    let stdout = std::io::stdout();
    let mut out = stdout.lock();

    match options.format {
        OutputFormat::Json => render::write_json(&mut out, files)?,
        OutputFormat::Text => {
            let renderer = DiagnosticRenderer::new(options.pretty, color);
            let with_headers = files.len() > 1;
            for file in files {
                if with_headers {
                    writeln!(out, "== {} ==", file.source.name)?;
                }
                render::write_tokens_text(&mut out, &file.tokens)?;
                if !file.diagnostics.is_empty() {
                    out.flush()?;
                    eprint!("{}", renderer.render_all(file.source, &file.diagnostics));
                }
            }
            let errors: usize = files.iter().map(|f| f.diagnostics.error_count()).sum();
            if errors > 0 {
                eprintln!("Found {} error{}.", errors, if errors == 1 { "" } else { "s" });
            }
        }
    }

    out.flush()?;
    Ok(())
}
