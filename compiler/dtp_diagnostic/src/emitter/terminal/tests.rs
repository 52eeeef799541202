use super::*;
use crate::ErrorCode;
use pretty_assertions::assert_eq;

fn render(f: impl FnOnce(&mut TerminalEmitter<Vec<u8>>)) -> String {
    let mut emitter = TerminalEmitter::with_color_mode(Vec::new(), ColorMode::Never, false);
    f(&mut emitter);
    String::from_utf8(emitter.into_inner()).unwrap_or_default()
}

#[test]
fn test_color_mode_resolution() {
    assert!(ColorMode::Auto.should_use_colors(true));
    assert!(!ColorMode::Auto.should_use_colors(false));
    assert!(ColorMode::Always.should_use_colors(false));
    assert!(!ColorMode::Never.should_use_colors(true));
}

#[test]
fn test_color_mode_parse() {
    assert_eq!(ColorMode::parse("always"), Some(ColorMode::Always));
    assert_eq!(ColorMode::parse("never"), Some(ColorMode::Never));
    assert_eq!(ColorMode::parse("sometimes"), None);
}

#[test]
fn test_emit_plain() {
    let diag = Diagnostic::info(ErrorCode::E3001)
        .with_message("Missing literal")
        .with_note("In the frame 'set _' at literal 1. Fill in the missing information.");

    let output = render(|e| e.emit(&diag));

    assert_eq!(
        output,
        "info[E3001]: Missing literal\n  \
         = In the frame 'set _' at literal 1. Fill in the missing information.\n\n"
    );
}

#[test]
fn test_emit_heading_and_summary() {
    let output = render(|e| {
        e.emit_heading("For the sentence: The pin is high.");
        e.emit_summary(3, 1);
    });

    assert_eq!(
        output,
        "For the sentence: The pin is high.\n\
         error: 1 warning could not be explained\n\
         info: explained 3 warnings\n"
    );
}

#[test]
fn test_empty_summary_is_silent() {
    let output = render(|e| e.emit_summary(0, 0));
    assert_eq!(output, "");
}

#[test]
fn test_colors_wrap_severity() {
    let mut emitter = TerminalEmitter::with_color_mode(Vec::new(), ColorMode::Always, false);
    emitter.emit(&Diagnostic::warning(ErrorCode::E9001).with_message("unknown context"));
    let output = String::from_utf8(emitter.into_inner()).unwrap_or_default();

    assert!(output.starts_with("\x1b[1;33mwarning\x1b[0m"));
    assert!(output.contains("\x1b[1m[E9001]\x1b[0m"));
}
