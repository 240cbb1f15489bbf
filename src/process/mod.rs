//! Process-control proxy for the PM2 process manager.
//!
//! Every chat command maps to exactly one external `pm2` invocation. The
//! module follows the same hexagonal split as the rest of the crate:
//!
//! - Domain types in [`domain`]: the argument vectors issued to `pm2`, the
//!   captured output, and the process descriptors parsed from `pm2 jlist`
//! - Port contracts in [`ports`]: the [`ports::ProcessManager`] execution
//!   interface
//! - Adapter implementations in [`adapters`]: the real `pm2` CLI and an
//!   in-memory scripted manager for tests

pub mod adapters;
pub mod domain;
pub mod ports;

#[cfg(test)]
mod tests;
