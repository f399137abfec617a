//! External command execution.
//! Repo scaffolding shells out to git and to toolchain scripts; any failure is fatal.

use log::{debug, error};
use std::process::{Command, Stdio};

use crate::error::{Error, Result};

/// Runs external commands on behalf of the scaffolder.
pub trait Executor {
    /// Runs `command` (whitespace-separated program and arguments) in the
    /// current working directory.
    ///
    /// # Errors
    /// * `Error::CommandError` if the command cannot start or exits unsuccessfully
    fn execute(&self, command: &str) -> Result<()>;

    /// Runs each command in order, stopping at the first failure.
    fn execute_all(&self, commands: &[&str]) -> Result<()> {
        for command in commands {
            self.execute(command)?;
        }
        Ok(())
    }
}

/// Executes commands as child processes.
///
/// Output is streamed to the terminal in verbose mode and captured otherwise,
/// in which case stderr is logged when the command fails.
pub struct ShellExecutor {
    verbose: bool,
}

impl ShellExecutor {
    pub fn new(verbose: bool) -> Self {
        Self { verbose }
    }
}

impl Executor for ShellExecutor {
    fn execute(&self, command: &str) -> Result<()> {
        let mut parts = command.split_whitespace();
        let program = parts.next().ok_or_else(|| Error::CommandError {
            command: command.to_string(),
            status: "empty command".to_string(),
        })?;

        debug!("Executing `{command}`");

        let mut cmd = Command::new(program);
        cmd.args(parts).stdin(Stdio::null());

        let failure = |status: String| {
            error!("Command failed: {command}");
            Error::CommandError {
                command: command.to_string(),
                status,
            }
        };

        if self.verbose {
            let status = cmd
                .stdout(Stdio::inherit())
                .stderr(Stdio::inherit())
                .status()
                .map_err(|e| failure(e.to_string()))?;
            if !status.success() {
                return Err(failure(status.to_string()));
            }
        } else {
            let output = cmd.output().map_err(|e| failure(e.to_string()))?;
            if !output.status.success() {
                let stderr = String::from_utf8_lossy(&output.stderr);
                if !stderr.trim().is_empty() {
                    error!("{}", stderr.trim_end());
                }
                return Err(failure(output.status.to_string()));
            }
        }
        Ok(())
    }
}
