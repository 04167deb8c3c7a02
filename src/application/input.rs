//! Parsing of textual integer sequences
//!
//! Accepts values separated by any of the configured separator characters,
//! e.g. `1, 3, 2` or `1 3 2` or one value per line.

use tracing::{debug, instrument};

use crate::application::{ApplicationError, ApplicationResult};

/// Split `text` on any character in `separators` and parse each token as `i64`.
///
/// Empty tokens (repeated separators) are skipped. `position` in a parse
/// error counts non-empty tokens from 1.
#[instrument(level = "debug", skip(text))]
pub fn parse_sequence(text: &str, separators: &str) -> ApplicationResult<Vec<i64>> {
    let values = text
        .split(|c: char| separators.contains(c))
        .map(str::trim)
        .filter(|token| !token.is_empty())
        .enumerate()
        .map(|(i, token)| {
            token.parse::<i64>().map_err(|_| ApplicationError::Parse {
                token: token.to_string(),
                position: i + 1,
            })
        })
        .collect::<ApplicationResult<Vec<_>>>()?;
    debug!("parsed {} values", values.len());
    Ok(values)
}

/// Parse every argument with [`parse_sequence`] and concatenate the results.
///
/// Lets `verify 1 3 2` and `verify "1,3,2"` mean the same thing.
pub fn parse_args(args: &[String], separators: &str) -> ApplicationResult<Vec<i64>> {
    parse_sequence(&args.join(" "), &format!("{separators} "))
}
