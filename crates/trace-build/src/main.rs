//! # trace-build
//!
//! Set up the lynx-trace viewer bundle for this host.
//!
//! ```bash
//! trace-build                      # Windows: fetch prebuilt, elsewhere: build from source
//! RUST_LOG=debug trace-build       # Show resolved paths and commands
//! TRACE_BUILD_ROOT=/src/lynx trace-build
//! ```
//!
//! Paths, interpreter and recovery hints can be overridden in
//! `trace-build.toml` at the repository root.

use clap::Parser;
use trace_build::console::Console;
use trace_build::platform::{self, PlatformClass};
use trace_build::process::SystemRunner;

#[derive(Parser)]
#[command(
    name = "trace-build",
    version,
    about = "Fetch the prebuilt lynx-trace bundle on Windows, build it from source elsewhere"
)]
struct Cli {}

fn main() {
    let Cli {} = Cli::parse();

    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn"))
        .format_timestamp(None)
        .init();

    let code = trace_build::execute(
        PlatformClass::detect(),
        platform::os_name(),
        &SystemRunner,
        &mut Console::stdio(),
    );
    std::process::exit(code);
}
