//! # trace-build
//!
//! Platform-aware setup for the lynx-trace viewer bundle.
//!
//! - Windows: reuse `resources/lynx-trace.tar.gz` if present, otherwise run
//!   the prebuilt fetcher.
//! - macOS/Linux: run the source builder.
//!
//! Collaborators are external scripts; this crate only picks one, runs it
//! and turns its outcome into an exit code.

pub mod artifact;
pub mod config;
pub mod console;
pub mod platform;
pub mod process;
pub mod strategy;

use anyhow::{bail, Result};
use config::Config;
use console::{Console, RULE};
use platform::PlatformClass;
use process::{Runner, DEFAULT_FAILURE_CODE};
use std::path::Path;
use strategy::{Context, Outcome};

/// Inputs of one dispatcher run.
pub struct Dispatch<'a> {
    pub platform: PlatformClass,
    /// OS name printed in the banner.
    pub os_name: &'a str,
    pub root: &'a Path,
    pub config: &'a Config,
    pub runner: &'a dyn Runner,
}

/// Print the banner, run the platform's strategy and, unless the cached
/// artifact was reused or the collaborator failed, the closing banner.
///
/// Collaborator failures are reported through the returned [`Outcome`];
/// `Err` only means no strategy is registered for the platform.
pub fn run(dispatch: &Dispatch<'_>, console: &mut Console<'_>) -> Result<Outcome> {
    console.out("");
    console.out(RULE);
    console.out("  Lynx Trace Build Script");
    console.out(RULE);
    console.out(&format!("Platform: {}", dispatch.os_name));
    console.out("");

    let Some(strategy) = strategy::for_platform(dispatch.platform) else {
        bail!("no build strategy registered for {}", dispatch.platform);
    };
    log::info!(
        "platform {} ({}): {} strategy",
        dispatch.os_name,
        dispatch.platform,
        strategy.name
    );

    let ctx = Context {
        root: dispatch.root,
        config: dispatch.config,
        runner: dispatch.runner,
    };
    let outcome = (strategy.run)(&ctx, console);
    log::debug!("{} strategy finished: {outcome:?}", strategy.name);

    if outcome.prints_closing_banner() {
        console.out(RULE);
        console.out("");
    }
    console.flush();

    Ok(outcome)
}

/// Resolve the repository root, then run [`execute_in`] there.
///
/// Returns the process exit code. Setup errors are printed as
/// `error: ...` on stderr and exit 1.
pub fn execute(
    platform: PlatformClass,
    os_name: &str,
    runner: &dyn Runner,
    console: &mut Console<'_>,
) -> i32 {
    match config::repo_root() {
        Ok(root) => execute_in(&root, platform, os_name, runner, console),
        Err(e) => report_setup_error(console, &e),
    }
}

/// Load `trace-build.toml` from `root` and dispatch.
pub fn execute_in(
    root: &Path,
    platform: PlatformClass,
    os_name: &str,
    runner: &dyn Runner,
    console: &mut Console<'_>,
) -> i32 {
    log::debug!("repository root: {}", root.display());

    let result = Config::load(root).and_then(|config| {
        let dispatch = Dispatch {
            platform,
            os_name,
            root,
            config: &config,
            runner,
        };
        run(&dispatch, console)
    });

    match result {
        Ok(outcome) => outcome.exit_code(),
        Err(e) => report_setup_error(console, &e),
    }
}

fn report_setup_error(console: &mut Console<'_>, e: &anyhow::Error) -> i32 {
    console.err(&format!("error: {e:#}"));
    console.flush();
    DEFAULT_FAILURE_CODE
}
