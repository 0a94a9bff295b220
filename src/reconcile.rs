// SPDX-License-Identifier: MIT OR Apache-2.0

//! Merges remote hits with fallback paths and assembles the result lines.
//!
//! The remote backend is only trusted to name candidate files; which lines
//! are shown is decided by re-extracting against the local working copy. A
//! candidate that cannot be read locally, or that no longer matches, simply
//! contributes nothing.

use std::collections::HashSet;

use crate::remote::SearchHit;
use crate::snippet;

/// Build the flattened result-line sequence for one query.
///
/// Candidate paths come from the remote hits first, then from the optional
/// fallback source; duplicates keep their first-seen position. `lookup`
/// resolves a repository-relative path to file content, returning `None`
/// for anything unreadable.
pub fn reconcile<F>(
    remote_hits: &[SearchHit],
    fallback_paths: Option<&[String]>,
    mut lookup: F,
    search_term: &str,
    context_lines: usize,
) -> Vec<String>
where
    F: FnMut(&str) -> Option<String>,
{
    let mut seen = HashSet::new();
    let mut candidates: Vec<String> = Vec::new();

    let remote_paths = remote_hits.iter().map(|hit| hit.path.as_str());
    let extra_paths = fallback_paths.unwrap_or(&[]).iter().map(String::as_str);
    for raw in remote_paths.chain(extra_paths) {
        let path = raw.trim_start_matches('/');
        if path.is_empty() {
            continue;
        }
        if seen.insert(path.to_string()) {
            candidates.push(path.to_string());
        }
    }

    let mut lines: Vec<String> = Vec::new();
    for path in &candidates {
        let Some(content) = lookup(path) else {
            tracing::debug!(path, "no local content, skipping candidate");
            continue;
        };
        let Some(rendered) = snippet::extract(&content, search_term, context_lines) else {
            tracing::debug!(path, "no local match, skipping candidate");
            continue;
        };
        lines.push(path.clone());
        lines.extend(rendered.lines().map(str::to_string));
        lines.push(String::new());
    }
    lines
}
