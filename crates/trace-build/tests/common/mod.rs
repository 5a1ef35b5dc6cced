//! Shared harness: a scripted collaborator runner and captured console output.

#![allow(dead_code)]

use std::cell::RefCell;
use std::fs::File;
use std::io;
use std::path::Path;
use trace_build::config::Config;
use trace_build::console::Console;
use trace_build::platform::PlatformClass;
use trace_build::process::{CollaboratorCommand, InvokeError, Runner};
use trace_build::strategy::Outcome;
use trace_build::Dispatch;

#[derive(Clone, Copy)]
enum Response {
    Exit(i32),
    Signal,
    LaunchFailure,
}

/// Records every invocation and answers with a fixed response.
pub struct FakeRunner {
    response: Response,
    calls: RefCell<Vec<CollaboratorCommand>>,
}

impl FakeRunner {
    fn new(response: Response) -> Self {
        FakeRunner {
            response,
            calls: RefCell::new(Vec::new()),
        }
    }

    pub fn exiting(code: i32) -> Self {
        Self::new(Response::Exit(code))
    }

    pub fn signalled() -> Self {
        Self::new(Response::Signal)
    }

    pub fn unlaunchable() -> Self {
        Self::new(Response::LaunchFailure)
    }

    pub fn calls(&self) -> Vec<CollaboratorCommand> {
        self.calls.borrow().clone()
    }

    pub fn roles(&self) -> Vec<&'static str> {
        self.calls.borrow().iter().map(|c| c.role).collect()
    }
}

impl Runner for FakeRunner {
    fn run(&self, cmd: &CollaboratorCommand) -> Result<(), InvokeError> {
        self.calls.borrow_mut().push(cmd.clone());
        match self.response {
            Response::Exit(0) => Ok(()),
            Response::Exit(code) => Err(InvokeError::Exited {
                role: cmd.role,
                code: Some(code),
            }),
            Response::Signal => Err(InvokeError::Exited {
                role: cmd.role,
                code: None,
            }),
            Response::LaunchFailure => Err(InvokeError::Launch {
                program: cmd.program.clone(),
                source: io::Error::new(io::ErrorKind::NotFound, "program not found"),
            }),
        }
    }
}

pub struct Run {
    pub outcome: Outcome,
    pub stdout: String,
    pub stderr: String,
}

impl Run {
    pub fn exit_code(&self) -> i32 {
        self.outcome.exit_code()
    }
}

pub fn dispatch(platform: PlatformClass, root: &Path, config: &Config, runner: &dyn Runner) -> Run {
    let os_name = match platform {
        PlatformClass::WindowsLike => "win32",
        PlatformClass::UnixLike => "linux",
    };
    let dispatch = Dispatch {
        platform,
        os_name,
        root,
        config,
        runner,
    };

    let mut out = Vec::new();
    let mut err = Vec::new();
    let outcome = trace_build::run(&dispatch, &mut Console::new(&mut out, &mut err)).unwrap();

    Run {
        outcome,
        stdout: String::from_utf8(out).unwrap(),
        stderr: String::from_utf8(err).unwrap(),
    }
}

/// Create the cached artifact with the given size under `root`.
pub fn place_artifact(root: &Path, config: &Config, size: u64) {
    let path = config.artifact_path(root);
    std::fs::create_dir_all(path.parent().unwrap()).unwrap();
    File::create(&path).unwrap().set_len(size).unwrap();
}
