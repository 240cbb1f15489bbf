//! Port contracts for the chat side of command handling.

pub mod reply_sink;

pub use reply_sink::{ReplySink, ReplySinkResult};
