//! Procurator: a chat-driven command relay for the `pm2` process manager.
//!
//! Prefixed chat messages are resolved against a fixed command registry,
//! validated, executed through `pm2` and answered with a structured reply.
//!
//! # Architecture
//!
//! The crate follows hexagonal architecture principles:
//!
//! - **Domain**: Commands, validation rules and reply shapes
//! - **Ports**: Trait interfaces for the process manager and the chat layer
//! - **Adapters**: The `pm2` CLI, in-memory doubles and a console sink
//!
//! # Modules
//!
//! - [`command`]: Registry, argument validation and dispatch
//! - [`process`]: `pm2` invocations and their raw output
//! - [`render`]: Output filtering and reply formatting
//! - [`config`]: Relay settings from file and environment

pub mod command;
pub mod config;
pub mod process;
pub mod render;
