//! Command domain model.

mod definition;
mod error;
mod invocation;
mod reply;
pub mod validation;

pub use definition::{CommandDefinition, CommandKind};
pub use error::{CommandError, CommandResult, DeliveryError, RegistryError, ValidationError};
pub use invocation::CommandInvocation;
pub use reply::{CommandReply, HelpEntry, HelpPage};
