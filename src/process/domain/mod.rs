//! Domain types for PM2 invocations.

mod command;
mod descriptor;
mod error;
mod output;

pub use command::{LogType, LogsRequest, Pm2Command, ProcessTarget};
pub use descriptor::{ProcessDescriptor, parse_process_list};
pub use error::ExecutionError;
pub use output::CommandOutput;
