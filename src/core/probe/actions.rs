//! Connect/disconnect side effects.
//!
//! An action is a shell command spawned on a transition into Online (connect)
//! or Offline (disconnect). The child gets `SITECHECK_STATUS` and `SITECHECK_URL`
//! in its environment and is never awaited by the prober; a runtime task reaps it.

use crate::core::probe::types::{ActionError, TransitionEvent};
use std::process::Stdio;
use tokio::process::Command;

pub const STATUS_ENV_VAR: &str = "SITECHECK_STATUS";
pub const URL_ENV_VAR: &str = "SITECHECK_URL";

/// Shell command fired on a status transition
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandAction {
    command: String,
}

impl CommandAction {
    pub fn new(command: impl Into<String>) -> Self {
        Self {
            command: command.into(),
        }
    }

    pub fn command(&self) -> &str {
        &self.command
    }

    /// Spawn the command for `event`
    ///
    /// Must be called from within a tokio runtime.
    pub fn run(&self, event: &TransitionEvent) -> Result<(), ActionError> {
        let command = self.command.trim();
        if command.is_empty() {
            return Err(ActionError::EmptyCommand);
        }

        let mut child = shell_command(command)
            .env(STATUS_ENV_VAR, event.status.keyword())
            .env(URL_ENV_VAR, &event.url)
            .stdin(Stdio::null())
            .spawn()
            .map_err(|source| ActionError::Spawn {
                command: command.to_string(),
                source,
            })?;

        tokio::spawn(async move {
            let _ = child.wait().await;
        });

        Ok(())
    }

    /// Wrap the action as a transition callback
    pub fn into_callback(self) -> impl Fn(&TransitionEvent) -> Result<(), ActionError> + Send + Sync + 'static {
        move |event| self.run(event)
    }
}

#[cfg(windows)]
fn shell_command(command: &str) -> Command {
    let mut cmd = Command::new("cmd");
    cmd.arg("/C").arg(command);
    cmd
}

#[cfg(not(windows))]
fn shell_command(command: &str) -> Command {
    let mut cmd = Command::new("sh");
    cmd.arg("-c").arg(command);
    cmd
}
