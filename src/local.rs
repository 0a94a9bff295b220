// SPDX-License-Identifier: MIT OR Apache-2.0

//! Local working-copy content lookup.

use std::fs;
use std::path::PathBuf;

/// Resolves repository-relative paths against a local working copy.
///
/// Any read failure surfaces as `None`: remote results routinely reference
/// files absent from the local tree (deleted, generated, or not synced),
/// and those are skipped rather than reported.
#[derive(Debug, Clone)]
pub struct LocalResolver {
    root: PathBuf,
}

impl LocalResolver {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn resolve(&self, path: &str) -> Option<String> {
        let full = self.root.join(path.trim_start_matches('/'));
        match fs::read_to_string(&full) {
            Ok(content) => Some(content),
            Err(err) => {
                tracing::debug!(path = %full.display(), %err, "unreadable file");
                None
            }
        }
    }
}
