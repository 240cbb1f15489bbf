//! Reply sink adapters.

mod console;
mod memory;

pub use console::ConsoleReplySink;
pub use memory::InMemoryReplySink;
