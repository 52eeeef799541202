use super::*;
use pretty_assertions::assert_eq;

#[test]
fn test_lines_start_with_message() {
    let diag = Diagnostic::info(ErrorCode::E1002)
        .with_message("no mapping for word")
        .with_note("first")
        .with_note("second");

    let lines: Vec<_> = diag.lines().collect();
    assert_eq!(lines, vec!["no mapping for word", "first", "second"]);
}

#[test]
fn test_severity_constructors() {
    assert_eq!(Diagnostic::error(ErrorCode::E9002).severity, Severity::Error);
    assert_eq!(
        Diagnostic::warning(ErrorCode::E9001).severity,
        Severity::Warning
    );
    assert_eq!(Diagnostic::info(ErrorCode::E0001).severity, Severity::Info);
}

#[test]
fn test_display() {
    let diag = Diagnostic::info(ErrorCode::E5002)
        .with_message("bad property")
        .with_note("Expected two sides of the expression.");

    assert_eq!(
        diag.to_string(),
        "info[E5002]: bad property\n  = Expected two sides of the expression."
    );
}
