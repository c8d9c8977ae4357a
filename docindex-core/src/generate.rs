use std::process::Stdio;

use async_trait::async_trait;
use tracing::{debug, error, info, warn};

use crate::config::GeneratorConfig;
use crate::contract::{CommandOutcome, CommandStatus, DocGenerator};

/// Runs an external documentation tool (by default `godoc -html <package>`)
/// and captures its output.
///
/// Arguments are passed to the process as a list, never through a shell, so
/// quotes or backticks in the package name reach the tool unchanged.
#[derive(Debug, Clone)]
pub struct CommandDocGenerator {
    program: String,
    args: Vec<String>,
}

impl CommandDocGenerator {
    pub fn new(program: impl Into<String>, args: Vec<String>) -> Self {
        Self {
            program: program.into(),
            args,
        }
    }

    /// Builds the command from config, substituting `{package}` in every argument.
    pub fn from_config(config: &GeneratorConfig, package: &str) -> Self {
        let args = config
            .args
            .iter()
            .map(|arg| arg.replace("{package}", package))
            .collect();
        Self::new(config.program.clone(), args)
    }

    pub fn program(&self) -> &str {
        &self.program
    }

    pub fn args(&self) -> &[String] {
        &self.args
    }
}

#[async_trait]
impl DocGenerator for CommandDocGenerator {
    async fn generate(&self) -> CommandOutcome {
        debug!(program = %self.program, args = ?self.args, "Running documentation tool");

        let output = tokio::process::Command::new(&self.program)
            .args(&self.args)
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .output()
            .await;

        let output = match output {
            Ok(output) => output,
            Err(e) => {
                error!(
                    error = ?e,
                    program = %self.program,
                    "Failed to launch documentation tool"
                );
                return CommandOutcome {
                    status: CommandStatus::FailedToStart(e.to_string()),
                    stdout: Vec::new(),
                    stderr: String::new(),
                };
            }
        };

        let status = match output.status.code() {
            Some(code) => CommandStatus::Exited(code),
            None => CommandStatus::Signalled,
        };
        let outcome = CommandOutcome {
            status,
            stdout: output.stdout,
            stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
        };

        debug!(stdout = %outcome.stdout_lossy(), stderr = %outcome.stderr, "Documentation tool output");
        if outcome.success() {
            info!(
                program = %self.program,
                bytes = outcome.stdout.len(),
                "Documentation tool finished"
            );
        } else {
            warn!(
                program = %self.program,
                status = %outcome.status,
                stderr = %outcome.stderr.trim(),
                "Documentation tool did not exit cleanly"
            );
        }
        outcome
    }
}
