//! Port contracts for the process-control proxy.

mod manager;

pub use manager::{ProcessManager, ProcessManagerResult};

#[cfg(test)]
pub use manager::MockProcessManager;
