//! # contract: the seams of the index pipeline
//!
//! This module defines the trait the pipeline uses to obtain documentation
//! HTML (`DocGenerator`), the outcome type every external command reports,
//! and the error type shared by the pipeline stages.
//!
//! ## Mocking & Testing
//! - `DocGenerator` is annotated for `mockall`, so tests can hand the pipeline
//!   canned tool output without `godoc` being installed.
//!
//! ## Failures of the external tool
//! - A tool failure is data, not an error: it comes back as a
//!   [`CommandOutcome`] and the caller decides whether to abort.

use async_trait::async_trait;
use serde::{Serialize, Serializer};
use std::fmt;
use std::path::PathBuf;

#[cfg(any(test, feature = "test-export-mocks"))]
use mockall::automock;

/// How an external command ended.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub enum CommandStatus {
    /// The process ran and exited with this code.
    Exited(i32),
    /// The process was terminated by a signal before exiting.
    Signalled,
    /// The process could not be spawned at all.
    FailedToStart(String),
}

/// Exit status plus captured streams of one external command run.
///
/// `stdout` is kept as raw bytes: it is appended to the index exactly as the
/// tool printed it, whatever its encoding.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CommandOutcome {
    pub status: CommandStatus,
    #[serde(serialize_with = "serialize_lossy")]
    pub stdout: Vec<u8>,
    pub stderr: String,
}

fn serialize_lossy<S: Serializer>(bytes: &[u8], serializer: S) -> Result<S::Ok, S::Error> {
    serializer.serialize_str(&String::from_utf8_lossy(bytes))
}

impl CommandOutcome {
    /// A clean exit with the given standard output and nothing on stderr.
    pub fn completed(stdout: impl Into<Vec<u8>>) -> Self {
        Self {
            status: CommandStatus::Exited(0),
            stdout: stdout.into(),
            stderr: String::new(),
        }
    }

    pub fn success(&self) -> bool {
        self.status == CommandStatus::Exited(0)
    }

    /// Standard output for logs; invalid UTF-8 shows as U+FFFD.
    pub fn stdout_lossy(&self) -> std::borrow::Cow<'_, str> {
        String::from_utf8_lossy(&self.stdout)
    }
}

impl fmt::Display for CommandStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CommandStatus::Exited(code) => write!(f, "exited with code {code}"),
            CommandStatus::Signalled => write!(f, "terminated by signal"),
            CommandStatus::FailedToStart(reason) => write!(f, "failed to start: {reason}"),
        }
    }
}

/// Errors that stop an index build.
#[derive(Debug)]
pub enum BuildError {
    /// The license file could not be read. Raised before anything is written.
    License {
        path: PathBuf,
        source: std::io::Error,
    },
    /// A rewrite rule is empty or its pattern does not compile.
    InvalidRule { find: String, message: String },
    /// The documentation tool failed and the build was configured as strict.
    Generator(CommandOutcome),
    Io(std::io::Error),
}

impl fmt::Display for BuildError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BuildError::License { path, source } => {
                write!(f, "cannot read license file {}: {source}", path.display())
            }
            BuildError::InvalidRule { find, message } => {
                write!(f, "invalid rewrite rule {find:?}: {message}")
            }
            BuildError::Generator(outcome) => {
                write!(f, "documentation tool {}", outcome.status)?;
                if !outcome.stderr.trim().is_empty() {
                    write!(f, ": {}", outcome.stderr.trim())?;
                }
                Ok(())
            }
            BuildError::Io(e) => write!(f, "I/O error: {e}"),
        }
    }
}

impl std::error::Error for BuildError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            BuildError::License { source, .. } => Some(source),
            BuildError::Io(e) => Some(e),
            _ => None,
        }
    }
}

impl From<std::io::Error> for BuildError {
    fn from(e: std::io::Error) -> Self {
        BuildError::Io(e)
    }
}

/// Produces the raw HTML documentation for the configured package.
/// Implemented by the subprocess-backed generator and by mocks in tests.
#[cfg_attr(any(test, feature = "test-export-mocks"), automock)]
#[async_trait]
pub trait DocGenerator: Send + Sync {
    /// Run the tool to completion and report what happened. Never fails:
    /// a tool that cannot start is reported through [`CommandStatus::FailedToStart`].
    async fn generate(&self) -> CommandOutcome;
}
