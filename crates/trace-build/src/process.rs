//! Collaborator invocation.
//!
//! Collaborators are external scripts run through an interpreter with
//! inherited stdio. The call blocks until the child exits; there is no
//! timeout and no cancellation.

use std::io;
use std::path::PathBuf;
use std::process::{Command, Stdio};
use thiserror::Error;

/// Exit code used when a collaborator failed without reporting one.
pub const DEFAULT_FAILURE_CODE: i32 = 1;

/// One external collaborator invocation: `<program> <script>` run in `cwd`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CollaboratorCommand {
    /// Short name used in diagnostics (`fetcher`, `builder`).
    pub role: &'static str,
    pub program: String,
    pub script: PathBuf,
    pub cwd: PathBuf,
}

impl CollaboratorCommand {
    pub fn display(&self) -> String {
        format!("{} \"{}\"", self.program, self.script.display())
    }
}

/// A collaborator invocation that did not succeed.
#[derive(Debug, Error)]
pub enum InvokeError {
    /// The child could not be started (interpreter missing, spawn failed).
    #[error("failed to launch `{program}`: {source}")]
    Launch {
        program: String,
        #[source]
        source: io::Error,
    },

    /// The child ran and exited unsuccessfully. `code` is `None` when it
    /// was terminated by a signal.
    #[error("{role} {}", status_text(.code.as_ref()))]
    Exited {
        role: &'static str,
        code: Option<i32>,
    },
}

impl InvokeError {
    /// Exit code to terminate this process with.
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::Launch { .. } => DEFAULT_FAILURE_CODE,
            Self::Exited { code, .. } => code
                .filter(|c| *c != 0)
                .unwrap_or(DEFAULT_FAILURE_CODE),
        }
    }
}

fn status_text(code: Option<&i32>) -> String {
    match code {
        Some(c) => format!("exited with status {c}"),
        None => "was terminated without an exit status".to_string(),
    }
}

/// Runs collaborators. The real implementation spawns processes; tests
/// substitute a recorder.
pub trait Runner {
    fn run(&self, cmd: &CollaboratorCommand) -> Result<(), InvokeError>;
}

/// Spawns the collaborator and waits for it.
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemRunner;

impl Runner for SystemRunner {
    fn run(&self, cmd: &CollaboratorCommand) -> Result<(), InvokeError> {
        let program = which::which(&cmd.program).map_err(|e| InvokeError::Launch {
            program: cmd.program.clone(),
            source: io::Error::new(io::ErrorKind::NotFound, e),
        })?;

        log::info!("running {}: {}", cmd.role, cmd.display());
        log::debug!("resolved {} to {}", cmd.program, program.display());

        let status = Command::new(&program)
            .arg(&cmd.script)
            .current_dir(&cmd.cwd)
            .stdin(Stdio::inherit())
            .stdout(Stdio::inherit())
            .stderr(Stdio::inherit())
            .status()
            .map_err(|source| InvokeError::Launch {
                program: cmd.program.clone(),
                source,
            })?;

        log::debug!("{} finished: {status}", cmd.role);

        if status.success() {
            Ok(())
        } else {
            Err(InvokeError::Exited {
                role: cmd.role,
                code: status.code(),
            })
        }
    }
}
