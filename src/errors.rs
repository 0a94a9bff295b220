// SPDX-License-Identifier: MIT OR Apache-2.0

//! Error types with helpful suggestions
//!
//! Provides user-friendly error messages with actionable suggestions.

use std::fmt;

use crate::config::TOKEN_ENV_VAR;

/// Error indicating the access token is missing
///
/// Checked before any search is attempted; nothing talks to the backend
/// without a credential.
#[derive(Debug)]
pub struct MissingCredentialError;

impl fmt::Display for MissingCredentialError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "No access token configured\n\n\
             Suggestion: Export your personal access token before searching.\n\
             Example: export {}=<token>",
            TOKEN_ENV_VAR
        )
    }
}

impl std::error::Error for MissingCredentialError {}

/// Error indicating backend identifiers are missing from configuration
#[derive(Debug)]
pub struct IncompleteConfigError {
    pub missing: Vec<&'static str>,
}

impl fmt::Display for IncompleteConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Missing configuration: {}\n\n\
             Suggestion: Add the missing keys to .csearchrc.toml in your project,\n\
             or to ~/.config/csearch/config.toml.\n\
             Example:\n\
             organization = \"acme\"\n\
             project = \"widgets\"\n\
             repository = \"monorepo\"",
            self.missing.join(", ")
        )
    }
}

impl std::error::Error for IncompleteConfigError {}

/// Error indicating no search results were found
#[derive(Debug)]
pub struct NoResultsError {
    pub query: String,
}

impl fmt::Display for NoResultsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "No results found for query: '{}'\n\n\
             Suggestions:\n\
             - Try a different or broader search query\n\
             - Widen the file filter, e.g. --glob '*'\n\
             - Include test files with --include-tests",
            self.query
        )
    }
}

impl std::error::Error for NoResultsError {}
