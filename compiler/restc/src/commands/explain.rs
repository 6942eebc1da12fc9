//! The `explain` command: display documentation for error codes.

use rest_diagnostic::{ErrorCode, ErrorDocs};

/// Display detailed documentation for a given error code string.
pub fn explain_error(code_str: &str) {
    let Some(code) = ErrorCode::parse(code_str) else {
        eprintln!("Unknown error code: {code_str}");
        eprintln!();
        eprintln!("Codes have the format EXXXX where X is a digit.");
        eprintln!("Examples: E0001, E0009");
        std::process::exit(1);
    };

    if let Some(doc) = ErrorDocs::get(code) {
        println!("{doc}");
    } else {
        eprintln!("No documentation available for {code}");
        std::process::exit(1);
    }
}
