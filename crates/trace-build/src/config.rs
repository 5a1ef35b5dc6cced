//! Configuration file support.
//!
//! Reads `trace-build.toml` from the repository root. Every field has a
//! default matching the lynx-devtool layout, so the file is optional and
//! only needs the keys that differ.

use anyhow::{Context, Result};
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

pub const CONFIG_FILE: &str = "trace-build.toml";

/// Overrides the repository root (defaults to the current directory).
pub const ROOT_ENV: &str = "TRACE_BUILD_ROOT";

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    #[serde(default)]
    pub paths: PathsConfig,

    #[serde(default)]
    pub collaborators: CollaboratorsConfig,

    #[serde(default)]
    pub remediation: RemediationConfig,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct PathsConfig {
    /// Directory holding the cached artifact, relative to the root.
    #[serde(default = "default_resources_dir")]
    pub resources_dir: PathBuf,

    #[serde(default = "default_artifact")]
    pub artifact: String,

    /// Directory holding the collaborator scripts, relative to the root.
    #[serde(default = "default_scripts_dir")]
    pub scripts_dir: PathBuf,
}

impl Default for PathsConfig {
    fn default() -> Self {
        PathsConfig {
            resources_dir: default_resources_dir(),
            artifact: default_artifact(),
            scripts_dir: default_scripts_dir(),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CollaboratorsConfig {
    /// Program used to run the collaborator scripts.
    #[serde(default = "default_interpreter")]
    pub interpreter: String,

    /// Prebuilt fetcher script (Windows).
    #[serde(default = "default_fetcher")]
    pub fetcher: String,

    /// Source builder script (macOS/Linux).
    #[serde(default = "default_builder")]
    pub builder: String,
}

impl Default for CollaboratorsConfig {
    fn default() -> Self {
        CollaboratorsConfig {
            interpreter: default_interpreter(),
            fetcher: default_fetcher(),
            builder: default_builder(),
        }
    }
}

/// Strings shown to the user when something has to be fixed by hand.
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RemediationConfig {
    #[serde(default = "default_release_page")]
    pub release_page: String,

    /// Release asset name pattern to download manually.
    #[serde(default = "default_release_asset")]
    pub release_asset: String,

    /// Command that forces a fresh download over a cached artifact.
    #[serde(default = "default_refresh_command")]
    pub refresh_command: String,

    /// Checkout location as seen from inside WSL.
    #[serde(default = "default_wsl_checkout")]
    pub wsl_checkout: String,

    #[serde(default = "default_build_command")]
    pub build_command: String,
}

impl Default for RemediationConfig {
    fn default() -> Self {
        RemediationConfig {
            release_page: default_release_page(),
            release_asset: default_release_asset(),
            refresh_command: default_refresh_command(),
            wsl_checkout: default_wsl_checkout(),
            build_command: default_build_command(),
        }
    }
}

impl RemediationConfig {
    /// `owner/repo` for a GitHub releases page, the page itself otherwise.
    pub fn release_repo(&self) -> &str {
        self.release_page
            .strip_prefix("https://github.com/")
            .map_or(self.release_page.as_str(), |rest| {
                rest.trim_end_matches('/').trim_end_matches("/releases")
            })
    }
}

fn default_resources_dir() -> PathBuf {
    PathBuf::from("packages/lynx-devtool-cli/resources")
}
fn default_artifact() -> String {
    "lynx-trace.tar.gz".to_string()
}
fn default_scripts_dir() -> PathBuf {
    PathBuf::from("scripts")
}
fn default_interpreter() -> String {
    "node".to_string()
}
fn default_fetcher() -> String {
    "download-lynx-trace-prebuilt.js".to_string()
}
fn default_builder() -> String {
    "build-lynx-trace-output.js".to_string()
}
fn default_release_page() -> String {
    "https://github.com/lynx-family/lynx-trace/releases".to_string()
}
fn default_release_asset() -> String {
    "perfetto-ui-release-*.tar.gz".to_string()
}
fn default_refresh_command() -> String {
    "pnpm run download:lynx-trace".to_string()
}
fn default_wsl_checkout() -> String {
    "/mnt/e/lynx/lynx-devtool".to_string()
}
fn default_build_command() -> String {
    "pnpm run build:lynx-trace".to_string()
}

impl Config {
    /// Load `trace-build.toml` from `root` (or use defaults if it doesn't exist).
    pub fn load(root: &Path) -> Result<Self> {
        let config_path = root.join(CONFIG_FILE);

        if !config_path.exists() {
            log::debug!("no {CONFIG_FILE} under {}, using defaults", root.display());
            return Ok(Config::default());
        }

        let content = fs::read_to_string(&config_path)
            .with_context(|| format!("Failed to read {}", config_path.display()))?;

        let config = Self::parse(&content)
            .with_context(|| format!("Failed to parse {}", config_path.display()))?;

        log::debug!("loaded {}", config_path.display());
        Ok(config)
    }

    pub fn parse(content: &str) -> Result<Self> {
        Ok(toml::from_str(content)?)
    }

    /// Expected location of the cached prebuilt artifact.
    pub fn artifact_path(&self, root: &Path) -> PathBuf {
        root.join(&self.paths.resources_dir).join(&self.paths.artifact)
    }

    /// Resources directory as shown in the manual recovery steps.
    pub fn resources_display(&self) -> String {
        let dir = self.paths.resources_dir.display().to_string();
        let dir = dir.replace('\\', "/");
        if dir.ends_with('/') {
            dir
        } else {
            format!("{dir}/")
        }
    }

    pub fn script_path(&self, root: &Path, script: &str) -> PathBuf {
        root.join(&self.paths.scripts_dir).join(script)
    }
}

/// Repository root: `$TRACE_BUILD_ROOT` if set, the working directory otherwise.
pub fn repo_root() -> Result<PathBuf> {
    if let Some(root) = std::env::var_os(ROOT_ENV).filter(|v| !v.is_empty()) {
        return Ok(PathBuf::from(root));
    }
    std::env::current_dir().context("Failed to determine the current directory")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.paths.artifact, "lynx-trace.tar.gz");
        assert_eq!(config.collaborators.interpreter, "node");
        assert_eq!(
            config.artifact_path(Path::new("/repo")),
            Path::new("/repo/packages/lynx-devtool-cli/resources/lynx-trace.tar.gz")
        );
        assert_eq!(
            config.resources_display(),
            "packages/lynx-devtool-cli/resources/"
        );
    }

    #[test]
    fn test_release_repo() {
        let mut fix = RemediationConfig::default();
        assert_eq!(fix.release_repo(), "lynx-family/lynx-trace");

        fix.release_page = "https://github.com/acme/trace-ui/releases/".to_string();
        assert_eq!(fix.release_repo(), "acme/trace-ui");

        fix.release_page = "https://mirror.example.com/trace".to_string();
        assert_eq!(fix.release_repo(), "https://mirror.example.com/trace");
    }

    #[test]
    fn test_missing_file_uses_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let config = Config::load(dir.path()).unwrap();
        assert_eq!(config.collaborators.fetcher, "download-lynx-trace-prebuilt.js");
        assert_eq!(config.collaborators.builder, "build-lynx-trace-output.js");
    }

    #[test]
    fn test_partial_override() {
        let config = Config::parse(
            r#"
            [collaborators]
            interpreter = "bun"

            [remediation]
            wsl_checkout = "/mnt/c/src/lynx-devtool"
            "#,
        )
        .unwrap();
        assert_eq!(config.collaborators.interpreter, "bun");
        assert_eq!(config.collaborators.builder, "build-lynx-trace-output.js");
        assert_eq!(config.remediation.wsl_checkout, "/mnt/c/src/lynx-devtool");
        assert_eq!(config.remediation.build_command, "pnpm run build:lynx-trace");
    }

    #[test]
    fn test_malformed_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join(CONFIG_FILE), "[paths\nartifact = 3").unwrap();
        let err = Config::load(dir.path()).unwrap_err();
        assert!(format!("{err:#}").contains(CONFIG_FILE));
    }

    #[test]
    fn test_unknown_key_is_rejected() {
        assert!(Config::parse("[paths]\nartefact = \"x.tar.gz\"\n").is_err());
    }
}
