//! The `explain` command: display documentation for diagnostic codes.

use dtp_diagnostic::ErrorCode;

/// Documentation text for `code`.
pub fn explanation(code: ErrorCode) -> String {
    format!("{code}\n\n{}", code.description())
}

/// Display the documentation for a given code string.
pub fn explain_code(code_str: &str) {
    let Ok(code) = code_str.parse::<ErrorCode>() else {
        eprintln!("Unknown diagnostic code: {code_str}");
        eprintln!();
        eprintln!("Codes have the format EXXXX where X is a digit.");
        eprintln!("Examples: E1001, E3001, E5003");
        std::process::exit(1);
    };

    println!("{}", explanation(code));
}
