//! Error types for command validation, execution and delivery.

use thiserror::Error;

use crate::process::domain::ExecutionError;
use crate::render::LimitViolation;

/// Result type for command handlers.
pub type CommandResult<T> = Result<T, CommandError>;

/// Malformed or out-of-range command arguments.
///
/// Messages are shown to chat users verbatim.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ValidationError {
    /// A command that needs arguments was invoked without any.
    #[error("Invalid usage. Do `{prefix}help {label}` to view proper usage.")]
    MissingArguments {
        /// Configured command prefix.
        prefix: String,
        /// Canonical command label.
        label: String,
    },

    /// The `lines` argument is not a number or is below the minimum.
    #[error(
        "Invalid number of lines! Make sure you provide a number and one whose value is 15 or above!"
    )]
    InvalidLineCount {
        /// Raw token, empty when absent.
        provided: String,
    },

    /// The log type is not `out`, `err` or `error`.
    #[error("Please provide a valid log type! Acceptable types: `out`, `err`, or `error`")]
    InvalidLogType {
        /// Raw token, empty when absent.
        provided: String,
    },

    /// No process name or ID was supplied.
    #[error("Please provide a process name or ID!")]
    MissingProcessIdentifier,

    /// More positional arguments than the command accepts.
    #[error("Too many arguments! Expected {expected} but got {provided}.")]
    UnexpectedArguments {
        /// Accepted argument count.
        expected: usize,
        /// Supplied argument count.
        provided: usize,
    },
}

/// A rendered reply the chat layer refused to deliver.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum DeliveryError {
    /// Part of the reply exceeds a transport size limit.
    #[error("{part} must be {limit} or fewer in length (got {actual})")]
    PayloadTooLarge {
        /// Offending reply part.
        part: String,
        /// Transport limit.
        limit: usize,
        /// Actual size.
        actual: usize,
    },

    /// The transport failed for another reason.
    #[error("reply transport failed: {0}")]
    Transport(String),
}

impl From<LimitViolation> for DeliveryError {
    fn from(violation: LimitViolation) -> Self {
        Self::PayloadTooLarge {
            part: violation.part,
            limit: violation.limit,
            actual: violation.actual,
        }
    }
}

/// Discriminated failure of a command handler.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum CommandError {
    /// Arguments were rejected before any external call.
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// The external process manager call failed.
    #[error(transparent)]
    Execution(#[from] ExecutionError),

    /// The successful reply could not be delivered.
    #[error("reply of {length} characters could not be delivered: {source}")]
    Delivery {
        /// Character length of the undeliverable content.
        length: usize,
        /// Transport rejection.
        source: DeliveryError,
    },

    /// `help` was asked about a command that does not exist.
    #[error("Command `{0}` not found!")]
    UnknownHelpTopic(String),
}

/// Errors detected while building the command registry.
///
/// These are configuration errors; the process must not start with them.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum RegistryError {
    /// A label or alias is empty or contains whitespace.
    #[error("invalid command name '{0}'")]
    InvalidName(String),

    /// A label or alias is claimed by two definitions.
    #[error("command name '{name}' of '{conflicting}' is already registered by '{existing}'")]
    DuplicateName {
        /// The contested label or alias.
        name: String,
        /// Label of the definition registered first.
        existing: String,
        /// Label of the definition that collided.
        conflicting: String,
    },
}
