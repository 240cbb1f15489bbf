//! Argument rules applied before any external call.

use std::num::IntErrorKind;

use crate::process::domain::{LogType, LogsRequest, ProcessTarget};

use super::ValidationError;

/// Smallest accepted `lines` value for the `logs` command.
pub const MIN_LOG_LINES: u32 = 15;

const LOGS_ARGUMENT_COUNT: usize = 3;

/// Joins all tokens into one free-form process name or ID.
///
/// # Errors
///
/// Returns [`ValidationError::MissingProcessIdentifier`] when no tokens were
/// supplied.
pub fn process_target(arguments: &[String]) -> Result<ProcessTarget, ValidationError> {
    if arguments.is_empty() {
        return Err(ValidationError::MissingProcessIdentifier);
    }
    Ok(ProcessTarget::new(arguments.join(" ")))
}

/// Validates `logs <lines> <logType> <identifier>`.
///
/// Checks run in argument order and stop at the first failure.
///
/// # Errors
///
/// Returns [`ValidationError::InvalidLineCount`] unless `lines` is an integer
/// of at least [`MIN_LOG_LINES`] (counts beyond `u32::MAX` are capped), [`ValidationError::InvalidLogType`] unless
/// the type is `out`, `err` or `error`,
/// [`ValidationError::MissingProcessIdentifier`] when the identifier is
/// absent and [`ValidationError::UnexpectedArguments`] for extra tokens.
pub fn logs_request(arguments: &[String]) -> Result<LogsRequest, ValidationError> {
    let mut tokens = arguments.iter().map(String::as_str);

    let raw_lines = tokens.next().unwrap_or_default();
    let lines = parse_line_count(raw_lines).ok_or_else(|| ValidationError::InvalidLineCount {
        provided: raw_lines.to_owned(),
    })?;

    let raw_type = tokens.next().unwrap_or_default();
    let log_type = LogType::from_token(raw_type).ok_or_else(|| ValidationError::InvalidLogType {
        provided: raw_type.to_owned(),
    })?;

    let target = tokens
        .next()
        .map(ProcessTarget::new)
        .ok_or(ValidationError::MissingProcessIdentifier)?;

    if arguments.len() > LOGS_ARGUMENT_COUNT {
        return Err(ValidationError::UnexpectedArguments {
            expected: LOGS_ARGUMENT_COUNT,
            provided: arguments.len(),
        });
    }

    Ok(LogsRequest::new(lines, log_type, target))
}

// Counts too large for `u32` saturate rather than fail.
fn parse_line_count(raw: &str) -> Option<u32> {
    let lines = match raw.parse::<u32>() {
        Ok(lines) => lines,
        Err(err) if *err.kind() == IntErrorKind::PosOverflow => u32::MAX,
        Err(_) => return None,
    };
    (lines >= MIN_LOG_LINES).then_some(lines)
}
