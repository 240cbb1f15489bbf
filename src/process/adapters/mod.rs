//! Adapter implementations for the process manager port.

mod memory;
mod pm2;

pub use memory::InMemoryProcessManager;
pub use pm2::{DEFAULT_PM2_BINARY, Pm2Cli};
