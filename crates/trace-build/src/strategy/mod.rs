//! Platform strategies.
//!
//! Structure:
//! - `prebuilt` - Windows: reuse the cached bundle or run the fetcher
//! - `source` - macOS/Linux: run the source builder
//!
//! [`STRATEGIES`] is the only place that ties a platform class to a
//! strategy. Strategies report an [`Outcome`] and never exit the process.

pub mod prebuilt;
pub mod source;

use crate::config::Config;
use crate::console::Console;
use crate::platform::PlatformClass;
use crate::process::{CollaboratorCommand, Runner};
use std::path::Path;

/// Everything a strategy needs from the outside world.
pub struct Context<'a> {
    pub root: &'a Path,
    pub config: &'a Config,
    pub runner: &'a dyn Runner,
}

impl Context<'_> {
    /// Command for one of the configured collaborator scripts.
    pub fn collaborator(&self, role: &'static str, script: &str) -> CollaboratorCommand {
        CollaboratorCommand {
            role,
            program: self.config.collaborators.interpreter.clone(),
            script: self.config.script_path(self.root, script),
            cwd: self.root.to_path_buf(),
        }
    }
}

/// How a strategy finished.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// Cached artifact reused. Exits immediately, without the closing banner.
    CacheHit,
    /// Collaborator succeeded.
    Completed,
    /// Collaborator failed; `code` is never 0.
    Failed { code: i32 },
}

impl Outcome {
    pub fn exit_code(self) -> i32 {
        match self {
            Self::CacheHit | Self::Completed => 0,
            Self::Failed { code } => code,
        }
    }

    pub fn prints_closing_banner(self) -> bool {
        matches!(self, Self::Completed)
    }
}

pub struct Strategy {
    pub name: &'static str,
    pub run: fn(&Context<'_>, &mut Console<'_>) -> Outcome,
}

/// Platform class → strategy.
pub static STRATEGIES: &[(PlatformClass, Strategy)] = &[
    (
        PlatformClass::WindowsLike,
        Strategy {
            name: "prebuilt",
            run: prebuilt::run,
        },
    ),
    (
        PlatformClass::UnixLike,
        Strategy {
            name: "source",
            run: source::run,
        },
    ),
];

/// Get the strategy for a platform class.
#[must_use]
pub fn for_platform(platform: PlatformClass) -> Option<&'static Strategy> {
    STRATEGIES
        .iter()
        .find(|(class, _)| *class == platform)
        .map(|(_, strategy)| strategy)
}
