//! macOS/Linux strategy: build from source.

use super::{Context, Outcome};
use crate::console::Console;

pub fn run(ctx: &Context<'_>, console: &mut Console<'_>) -> Outcome {
    console.out("🔨 macOS/Linux platform detected, building from source...");
    console.out("");
    console.flush();

    let builder = ctx.collaborator("builder", &ctx.config.collaborators.builder);
    match ctx.runner.run(&builder) {
        Ok(()) => {
            console.out("");
            console.out("✅ Lynx-trace build completed successfully!");
            console.out("");
            Outcome::Completed
        }
        Err(e) => {
            console.err("");
            console.err("❌ Build failed!");
            console.err(&format!("   {e}"));
            console.err("");
            console.err("Please check the error messages above and retry.");
            console.err("");
            Outcome::Failed {
                code: e.exit_code(),
            }
        }
    }
}
