//! Chat command registry, validation and dispatch.
//!
//! A chat message flows through this module as follows: the
//! [`domain::CommandInvocation`] parser splits off the prefix and command
//! name, the [`registry::CommandRegistry`] resolves labels and aliases, the
//! [`services::CommandDispatcher`] enforces required arguments, validates them
//! and calls the process manager, and the resulting outcome is rendered and
//! handed to a [`ports::ReplySink`].
//!
//! # Example
//!
//! ```
//! use std::sync::Arc;
//!
//! use procurator::command::{
//!     adapters::InMemoryReplySink, registry::CommandRegistry, services::CommandDispatcher,
//! };
//! use procurator::process::{
//!     adapters::InMemoryProcessManager,
//!     domain::{CommandOutput, Pm2Command, ProcessTarget},
//! };
//!
//! # tokio::runtime::Builder::new_current_thread().build().expect("runtime").block_on(async {
//! let manager = InMemoryProcessManager::new().with_output(
//!     Pm2Command::Stop(ProcessTarget::new("web")),
//!     CommandOutput::stdout_only("[PM2] Applying action stopProcessId on app [web]\n"),
//! );
//! let registry = Arc::new(CommandRegistry::builtin().expect("built-in registry"));
//! let dispatcher = CommandDispatcher::new(registry, Arc::new(manager), ";");
//! let sink = InMemoryReplySink::new();
//!
//! dispatcher
//!     .dispatch_message(";s web", None, &sink)
//!     .await
//!     .expect("reply delivered");
//!
//! assert_eq!(
//!     sink.delivered()[0].title.as_deref(),
//!     Some("Stop successful!")
//! );
//! # });
//! ```

pub mod adapters;
pub mod domain;
pub mod ports;
pub mod registry;
pub mod services;

#[cfg(test)]
mod tests;
