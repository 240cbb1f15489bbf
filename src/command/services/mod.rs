//! Command handling services.

mod dispatcher;
mod help;

pub use dispatcher::CommandDispatcher;
pub use help::help_page;
