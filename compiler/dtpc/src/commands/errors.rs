//! The `errors` command: explain every warning recorded in a project.

use std::io::IsTerminal;
use std::path::{Path, PathBuf};
use std::time::Instant;

use dtp_diagnostic::emitter::{ColorMode, DiagnosticEmitter, TerminalEmitter, TracingEmitter};
use dtp_diagnostic::{Diagnostic, ErrorCode};
use dtp_ir::Lookup;

use crate::input::{load_mappings, load_project, Project, ProjectError, Sentence};
use crate::reporting::report_warning;

/// Where explained warnings are written.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub enum EmitMode {
    /// Human-readable text on stdout.
    #[default]
    Terminal,
    /// One `tracing` event per diagnostic.
    Log,
}

impl EmitMode {
    /// Parse `terminal` or `log`.
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "terminal" => Some(EmitMode::Terminal),
            "log" => Some(EmitMode::Log),
            _ => None,
        }
    }
}

/// Options for `dtp errors`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[allow(clippy::struct_excessive_bools)]
pub struct ErrorsOptions {
    /// Project dump to explain (first positional argument)
    pub project: Option<PathBuf>,
    /// Mapping tables (--mappings=<path>)
    pub mappings: Option<PathBuf>,
    /// Debug logging for the dtp crates (-v, --verbose)
    pub verbose: bool,
    /// Log how long explaining took (-t, --time)
    pub show_time: bool,
    /// Output destination (--emit=terminal|log)
    pub emit: EmitMode,
    /// Terminal colors (--color=auto|always|never)
    pub color: ColorMode,
    /// Also explain warnings on comment sentences (--include-comments)
    pub include_comments: bool,
}

/// Parse `dtp errors` arguments (everything after the subcommand).
///
/// Unknown values fall back to the default with a warning on stderr.
pub fn parse_errors_options(args: &[String]) -> ErrorsOptions {
    let mut options = ErrorsOptions::default();

    for arg in args {
        if arg == "-v" || arg == "--verbose" {
            options.verbose = true;
        } else if arg == "-t" || arg == "--time" {
            options.show_time = true;
        } else if arg == "--include-comments" {
            options.include_comments = true;
        } else if let Some(path) = arg.strip_prefix("--mappings=") {
            options.mappings = Some(PathBuf::from(path));
        } else if let Some(emit) = arg.strip_prefix("--emit=") {
            if let Some(mode) = EmitMode::parse(emit) {
                options.emit = mode;
            } else {
                eprintln!("warning: unknown emit mode '{emit}', options: terminal, log");
            }
        } else if let Some(color) = arg.strip_prefix("--color=") {
            if let Some(mode) = ColorMode::parse(color) {
                options.color = mode;
            } else {
                eprintln!("warning: unknown color mode '{color}', using auto");
            }
        } else if arg.starts_with('-') {
            eprintln!("warning: unknown option '{arg}'");
        } else if options.project.is_none() {
            options.project = Some(PathBuf::from(arg));
        } else {
            eprintln!("warning: ignoring extra argument '{arg}'");
        }
    }

    options
}

/// Which sentences the report loop considers.
#[derive(Copy, Clone, Debug, Default)]
pub struct ReportConfig {
    pub include_comments: bool,
}

/// Counts from one run of the report loop.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct ReportSummary {
    /// Sentences considered, with or without warnings.
    pub sentences: usize,
    /// Warnings turned into a diagnostic.
    pub explained: usize,
    /// Warnings whose context referenced an id missing from the lookup.
    pub failed: usize,
}

impl ReportSummary {
    pub fn has_failures(&self) -> bool {
        self.failed > 0
    }
}

/// Explain every warning of `project`, one heading per sentence with warnings.
///
/// Sentences are visited in ascending id order. A warning that cannot be
/// explained is reported as an internal error and does not stop the loop.
pub fn show_error_messages(
    project: &Project,
    lookup: &dyn Lookup,
    emitter: &mut dyn DiagnosticEmitter,
    config: &ReportConfig,
) -> ReportSummary {
    let mut sentences: Vec<&Sentence> = project
        .sentences
        .iter()
        .filter(|sentence| config.include_comments || !sentence.is_comment())
        .collect();
    sentences.sort_by_key(|sentence| sentence.id);

    let mut summary = ReportSummary::default();
    for sentence in sentences {
        summary.sentences += 1;
        if sentence.warnings.is_empty() {
            tracing::debug!(sentence = sentence.id, "no warnings");
            continue;
        }

        emitter.emit_heading(&format!("For the sentence: {}", sentence.text));
        for warning in &sentence.warnings {
            match report_warning(warning, lookup, emitter) {
                Ok(()) => summary.explained += 1,
                Err(err) => {
                    let kind = warning.kind();
                    tracing::error!(sentence = sentence.id, %kind, %err, "cannot explain warning");
                    let mut diag = Diagnostic::error(ErrorCode::E9002)
                        .with_message(format!("Cannot explain {kind} warning"))
                        .with_note(err.to_string());
                    if let Some(message) = warning.context.message() {
                        diag = diag.with_note(format!("The pipeline reported: {message}"));
                    }
                    emitter.emit(&diag);
                    summary.failed += 1;
                }
            }
        }
    }

    emitter.emit_summary(summary.explained, summary.failed);
    emitter.flush();
    summary
}

/// Load both inputs and run the report loop with the configured emitter.
pub fn run_errors(
    project_path: &Path,
    mappings_path: &Path,
    options: &ErrorsOptions,
) -> Result<ReportSummary, ProjectError> {
    let start = Instant::now();

    let mappings = load_mappings(mappings_path)?;
    let project = load_project(project_path)?;
    tracing::debug!(
        words = mappings.word_count(),
        tokens = mappings.token_count(),
        frames = mappings.frame_count(),
        sentences = project.sentences.len(),
        warnings = project.warning_count(),
        "inputs loaded"
    );

    let config = ReportConfig {
        include_comments: options.include_comments,
    };
    let summary = match options.emit {
        EmitMode::Terminal => {
            let mut emitter =
                TerminalEmitter::stdout(options.color, std::io::stdout().is_terminal());
            show_error_messages(&project, &mappings, &mut emitter, &config)
        }
        EmitMode::Log => {
            show_error_messages(&project, &mappings, &mut TracingEmitter::new(), &config)
        }
    };

    if options.show_time {
        tracing::info!(elapsed = ?start.elapsed(), "explained warnings");
    }

    Ok(summary)
}

#[cfg(test)]
mod tests;
