//! Terminal output formatting with colors
//!
//! Respects NO_COLOR, CLICOLOR, CLICOLOR_FORCE automatically.

use colored::Colorize;

/// Print error (red bold "error:" prefix) to stderr
pub fn error(msg: &(impl std::fmt::Display + ?Sized)) {
    eprintln!("{}: {}", "error".red().bold(), msg);
}

/// Print an error followed by each distinct cause in its source chain
pub fn error_chain(err: &(dyn std::error::Error + 'static)) {
    let mut messages = causes(err).into_iter();
    if let Some(top) = messages.next() {
        error(&top);
    }
    for cause in messages {
        eprintln!("  {} {}", "caused by:".dimmed(), cause);
    }
}

/// Messages along the source chain of `err`. Wrappers that only repeat their
/// inner message are collapsed.
pub fn causes(err: &(dyn std::error::Error + 'static)) -> Vec<String> {
    let mut messages: Vec<String> = Vec::new();
    let mut current = Some(err);
    while let Some(e) = current {
        let message = e.to_string();
        if messages.last() != Some(&message) {
            messages.push(message);
        }
        current = e.source();
    }
    messages
}

/// Print success status (green checkmark)
pub fn success(msg: &(impl std::fmt::Display + ?Sized)) {
    println!("{} {}", "✓".green(), msg);
}

/// Print failure status (red X)
pub fn failure(msg: &(impl std::fmt::Display + ?Sized)) {
    println!("{} {}", "✗".red(), msg);
}

/// Print section header (cyan bold)
pub fn header(msg: &(impl std::fmt::Display + ?Sized)) {
    println!("{}", msg.to_string().cyan().bold());
}

/// Print indented detail (no color)
pub fn detail(msg: &(impl std::fmt::Display + ?Sized)) {
    println!("  {}", msg);
}

/// Print plain output (no color, for data)
pub fn info(msg: &(impl std::fmt::Display + ?Sized)) {
    println!("{}", msg);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::ApplicationError;
    use crate::cli::CliError;

    #[test]
    fn given_wrapped_io_error_when_collecting_causes_then_io_message_included() {
        let err = CliError::from(ApplicationError::OperationFailed {
            context: "read sequence: seq.txt".to_string(),
            source: Box::new(std::io::Error::new(
                std::io::ErrorKind::NotFound,
                "No such file or directory",
            )),
        });
        assert_eq!(
            causes(&err),
            vec![
                "operation failed: read sequence: seq.txt".to_string(),
                "No such file or directory".to_string(),
            ]
        );
    }
}
