//! Cached prebuilt artifact probe.
//!
//! The artifact is written by the external fetcher; this module only looks.

#![allow(clippy::cast_precision_loss)] // File sizes don't need u64 precision for display

use chrono::{DateTime, Local};
use std::io;
use std::path::{Path, PathBuf};
use std::time::SystemTime;

#[derive(Debug, Clone)]
pub struct CacheEntry {
    pub path: PathBuf,
    pub size: u64,
    pub modified: Option<SystemTime>,
}

impl CacheEntry {
    /// Size as shown to the user, e.g. `10.00 MB`.
    pub fn size_display(&self) -> String {
        format_megabytes(self.size)
    }

    /// Last-modified time in local time, or `unknown` if the platform has none.
    pub fn modified_display(&self) -> String {
        self.modified
            .map_or_else(|| "unknown".to_string(), format_local_time)
    }
}

/// Look up the artifact at `path`.
///
/// Any path that cannot be stat'ed is a cache miss, whatever the reason.
pub fn probe(path: &Path) -> Option<CacheEntry> {
    let meta = match std::fs::metadata(path) {
        Ok(meta) => meta,
        Err(e) if e.kind() == io::ErrorKind::NotFound => return None,
        Err(e) => {
            log::warn!("cannot stat {}: {e}; treating as missing", path.display());
            return None;
        }
    };

    Some(CacheEntry {
        path: path.to_path_buf(),
        size: meta.len(),
        modified: meta.modified().ok(),
    })
}

pub fn format_megabytes(bytes: u64) -> String {
    format!("{:.2} MB", bytes as f64 / 1024.0 / 1024.0)
}

pub fn format_local_time(t: SystemTime) -> String {
    DateTime::<Local>::from(t)
        .format("%Y-%m-%d %H:%M:%S")
        .to_string()
}
