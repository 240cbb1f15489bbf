//! In-memory process manager adapter for tests and dry runs.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::{Arc, Mutex, PoisonError};

use crate::process::{
    domain::{CommandOutput, ExecutionError, Pm2Command},
    ports::{ProcessManager, ProcessManagerResult},
};

const PROGRAM: &str = "pm2";

/// Scripted process manager.
///
/// Responses are registered per command ahead of time; every call is
/// recorded so tests can assert how many invocations were issued. Commands
/// without a scripted response fail with a non-zero exit, mirroring `pm2`
/// rejecting an unknown process.
#[derive(Debug, Clone, Default)]
pub struct InMemoryProcessManager {
    responses: HashMap<Pm2Command, ProcessManagerResult<CommandOutput>>,
    invocations: Arc<Mutex<Vec<Pm2Command>>>,
}

impl InMemoryProcessManager {
    /// Creates a manager with no scripted responses.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Scripts a successful run for `command`.
    #[must_use]
    pub fn with_output(mut self, command: Pm2Command, output: CommandOutput) -> Self {
        self.responses.insert(command, Ok(output));
        self
    }

    /// Scripts a failed run for `command`.
    #[must_use]
    pub fn with_failure(mut self, command: Pm2Command, error: ExecutionError) -> Self {
        self.responses.insert(command, Err(error));
        self
    }

    /// Returns every command run so far, in call order.
    #[must_use]
    pub fn invocations(&self) -> Vec<Pm2Command> {
        self.invocations
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }
}

#[async_trait]
impl ProcessManager for InMemoryProcessManager {
    async fn run(&self, command: &Pm2Command) -> ProcessManagerResult<CommandOutput> {
        self.invocations
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(command.clone());

        self.responses.get(command).cloned().unwrap_or_else(|| {
            Err(ExecutionError::non_zero_exit(
                self.describe(command),
                Some(1),
                "",
                "[PM2][ERROR] no scripted response for this command",
            ))
        })
    }

    fn describe(&self, command: &Pm2Command) -> String {
        command.command_line(PROGRAM)
    }
}
