//! Windows strategy: use the prebuilt bundle.
//!
//! The trace UI does not build on Windows, so the bundle comes from the
//! release channel. A bundle already present under the resources directory
//! is reused as-is; the fetcher only runs on a cache miss.

use super::{Context, Outcome};
use crate::artifact::{self, CacheEntry};
use crate::console::Console;

pub fn run(ctx: &Context<'_>, console: &mut Console<'_>) -> Outcome {
    console.out("📦 Windows platform detected, using prebuilt binaries...");
    console.out("");
    console.out("ℹ️  Reason: Perfetto does not officially support building UI on Windows");
    console.out(&format!(
        "ℹ️  Solution: Downloading prebuilt artifacts from {}",
        ctx.config.remediation.release_repo()
    ));
    console.out("");

    let artifact_path = ctx.config.artifact_path(ctx.root);
    log::debug!("cached artifact: {}", artifact_path.display());

    if let Some(entry) = artifact::probe(&artifact_path) {
        report_cache_hit(ctx, console, &entry);
        return Outcome::CacheHit;
    }
    log::info!("no cached artifact, fetching");

    console.out("⬇️  Downloading prebuilt binary...");
    console.out("");
    console.flush();

    let fetcher = ctx.collaborator("fetcher", &ctx.config.collaborators.fetcher);
    match ctx.runner.run(&fetcher) {
        Ok(()) => {
            console.out("");
            console.out("✅ Lynx-trace setup completed for Windows platform!");
            console.out("");
            Outcome::Completed
        }
        Err(e) => {
            report_failure(ctx, console, &e.to_string());
            Outcome::Failed {
                code: e.exit_code(),
            }
        }
    }
}

fn report_cache_hit(ctx: &Context<'_>, console: &mut Console<'_>, entry: &CacheEntry) {
    console.out("✅ Found existing prebuilt binary:");
    console.out(&format!("   Path: {}", entry.path.display()));
    console.out(&format!("   Size: {}", entry.size_display()));
    console.out(&format!("   Modified: {}", entry.modified_display()));
    console.out("");
    console.out("💡 Using existing binary. To update, run:");
    console.out(&format!("   {}", ctx.config.remediation.refresh_command));
    console.out("");
}

/// Error banner plus the manual recovery steps, on stderr.
fn report_failure(ctx: &Context<'_>, console: &mut Console<'_>, cause: &str) {
    let fix = &ctx.config.remediation;

    console.err("");
    console.err("❌ Failed to download prebuilt binary!");
    console.err(&format!("   {cause}"));
    console.err("");
    console.err("🔧 Manual resolution steps:");
    console.err(&format!("   1. Visit {}", fix.release_page));
    console.err(&format!("   2. Download the latest {}", fix.release_asset));
    console.err(&format!("   3. Rename it to {}", ctx.config.paths.artifact));
    console.err(&format!("   4. Place it in {}", ctx.config.resources_display()));
    console.err("");
    console.err("Alternative: Build locally using WSL2:");
    console.err("   wsl");
    console.err(&format!("   cd {}", fix.wsl_checkout));
    console.err(&format!("   {}", fix.build_command));
    console.err("");
}
