// SPDX-License-Identifier: MIT OR Apache-2.0

//! Large-codebase detection.
//!
//! Some callers change behavior (result caps, query scoping) when the local
//! checkout is a multi-million-line monorepo. Rather than counting lines,
//! we sample file paths and look for the signature directory names such
//! trees always carry. The walk honors ignore files and stops after a fixed
//! sample, so this stays cheap even on huge checkouts.

use std::path::Path;

use ignore::WalkBuilder;

/// Directory names that only show up in very large monorepo checkouts.
const SIGNATURE_DIRS: &[&str] = &[
    "third_party",
    "chrome/browser",
    "base/allocator",
    "build/config",
    "v8",
];

/// Paths sampled before giving up.
const SAMPLE_LIMIT: usize = 4096;

/// Report whether the tree under `root` looks like a large monorepo.
pub fn is_large_codebase(root: &Path) -> bool {
    let mut sampled = 0usize;
    for entry in WalkBuilder::new(root).build() {
        let Ok(entry) = entry else { continue };
        let Ok(rel) = entry.path().strip_prefix(root) else { continue };
        let rel = rel.to_string_lossy().replace('\\', "/");
        if SIGNATURE_DIRS.iter().any(|sig| has_dir_component(&rel, sig)) {
            tracing::debug!(path = rel, "signature directory found");
            return true;
        }
        sampled += 1;
        if sampled >= SAMPLE_LIMIT {
            break;
        }
    }
    false
}

/// Component-boundary containment check: `sig` may itself span directories.
fn has_dir_component(rel: &str, sig: &str) -> bool {
    let padded = format!("/{rel}/");
    padded.contains(&format!("/{sig}/"))
}
