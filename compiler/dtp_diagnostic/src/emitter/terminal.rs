//! Terminal Emitter
//!
//! Prints one block per diagnostic: `severity[CODE]: message`, then each note
//! on its own `  = ` line, then a blank line. Sentence headings are bold.

use std::io::{self, Write};

use crate::{Diagnostic, Severity};

use super::{plural_s, DiagnosticEmitter};

/// When to color terminal output (`--color=auto|always|never`).
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ColorMode {
    /// Color only when writing to a terminal.
    #[default]
    Auto,
    Always,
    Never,
}

impl ColorMode {
    pub fn should_use_colors(self, is_tty: bool) -> bool {
        match self {
            ColorMode::Auto => is_tty,
            ColorMode::Always => true,
            ColorMode::Never => false,
        }
    }

    /// Parse the value of `--color=`.
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "auto" => Some(ColorMode::Auto),
            "always" => Some(ColorMode::Always),
            "never" => Some(ColorMode::Never),
            _ => None,
        }
    }
}

/// Text styles the report uses.
#[derive(Clone, Copy)]
enum Style {
    Severity(Severity),
    Bold,
}

impl Style {
    fn ansi(self) -> &'static str {
        match self {
            Style::Severity(Severity::Error) => "\x1b[1;31m",
            Style::Severity(Severity::Warning) => "\x1b[1;33m",
            Style::Severity(Severity::Info) => "\x1b[1;36m",
            Style::Bold => "\x1b[1m",
        }
    }
}

const RESET: &str = "\x1b[0m";

/// Writes diagnostics as text, optionally with ANSI colors.
pub struct TerminalEmitter<W: Write> {
    writer: W,
    colors: bool,
}

impl<W: Write> TerminalEmitter<W> {
    /// `is_tty` only matters for [`ColorMode::Auto`].
    pub fn with_color_mode(writer: W, mode: ColorMode, is_tty: bool) -> Self {
        TerminalEmitter {
            writer,
            colors: mode.should_use_colors(is_tty),
        }
    }

    pub fn into_inner(self) -> W {
        self.writer
    }

    fn styled(&mut self, style: Style, text: &str) {
        let _ = if self.colors {
            write!(self.writer, "{}{text}{RESET}", style.ansi())
        } else {
            write!(self.writer, "{text}")
        };
    }

    /// One summary line, `label: text`, with the label styled.
    fn summary_line(&mut self, severity: Severity, text: &str) {
        self.styled(Style::Severity(severity), &severity.to_string());
        let _ = writeln!(self.writer, ": {text}");
    }
}

impl TerminalEmitter<io::Stdout> {
    pub fn stdout(mode: ColorMode, is_tty: bool) -> Self {
        TerminalEmitter::with_color_mode(io::stdout(), mode, is_tty)
    }
}

impl<W: Write> DiagnosticEmitter for TerminalEmitter<W> {
    fn emit(&mut self, diagnostic: &Diagnostic) {
        self.styled(
            Style::Severity(diagnostic.severity),
            &diagnostic.severity.to_string(),
        );
        self.styled(Style::Bold, &format!("[{}]", diagnostic.code));
        let _ = writeln!(self.writer, ": {}", diagnostic.message);
        for note in &diagnostic.notes {
            let _ = writeln!(self.writer, "  = {note}");
        }
        let _ = writeln!(self.writer);
    }

    fn emit_heading(&mut self, heading: &str) {
        self.styled(Style::Bold, heading);
        let _ = writeln!(self.writer);
    }

    fn flush(&mut self) {
        let _ = self.writer.flush();
    }

    fn emit_summary(&mut self, explained: usize, failed: usize) {
        if failed > 0 {
            self.summary_line(
                Severity::Error,
                &format!("{failed} warning{} could not be explained", plural_s(failed)),
            );
        }
        if explained > 0 {
            self.summary_line(
                Severity::Info,
                &format!("explained {explained} warning{}", plural_s(explained)),
            );
        }
    }
}

#[cfg(test)]
mod tests;
