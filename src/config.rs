// SPDX-License-Identifier: MIT OR Apache-2.0

//! Configuration file support for csearch
//!
//! Loads configuration from .csearchrc.toml in current directory or
//! ~/.config/csearch/config.toml. The access token is never read from a
//! file; it comes from the CSEARCH_TOKEN environment variable only.

use serde::Deserialize;
use std::env;
use std::path::PathBuf;

use crate::snippet::DEFAULT_CONTEXT_LINES;

/// Default bound on flattened result lines.
pub const DEFAULT_MAX_RESULTS: usize = 50;

/// Default backend host; point this at your deployment via config.
pub const DEFAULT_BASE_URL: &str = "https://almsearch.dev.azure.com";

/// Environment variable holding the personal access token.
pub const TOKEN_ENV_VAR: &str = "CSEARCH_TOKEN";

/// Configuration loaded from .csearchrc.toml or ~/.config/csearch/config.toml
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Backend organization identifier
    pub organization: Option<String>,
    /// Project within the organization
    pub project: Option<String>,
    /// Repository within the project
    pub repository: Option<String>,
    /// Branch to search (backend default branch when unset)
    pub branch: Option<String>,
    /// Backend base URL
    pub base_url: Option<String>,
    /// Root of the local working copy used for snippet extraction
    pub local_root: Option<String>,
    /// Maximum number of result lines to return
    pub max_results: Option<usize>,
    /// Context lines above/below each match
    pub context_lines: Option<usize>,
}

impl Config {
    /// Load configuration from files
    ///
    /// Precedence (highest to lowest):
    /// 1. .csearchrc.toml in current directory
    /// 2. ~/.config/csearch/config.toml
    pub fn load() -> Self {
        if let Some(config) = Self::load_from_path(&PathBuf::from(".csearchrc.toml")) {
            return config;
        }

        if let Some(home) = dirs::home_dir() {
            let config_path = home.join(".config").join("csearch").join("config.toml");
            if let Some(config) = Self::load_from_path(&config_path) {
                return config;
            }
        }

        Self::default()
    }

    fn load_from_path(path: &PathBuf) -> Option<Self> {
        let content = std::fs::read_to_string(path).ok()?;
        match toml::from_str(&content) {
            Ok(config) => Some(config),
            Err(e) => {
                eprintln!("Warning: Failed to parse {}: {}", path.display(), e);
                None
            }
        }
    }

    /// Merge CLI options with config (CLI wins)
    pub fn merge_max_results(&self, cli_value: Option<usize>) -> usize {
        cli_value.or(self.max_results).unwrap_or(DEFAULT_MAX_RESULTS)
    }

    /// Merge CLI context lines with config (CLI wins)
    pub fn merge_context_lines(&self, cli_value: Option<usize>) -> usize {
        cli_value.or(self.context_lines).unwrap_or(DEFAULT_CONTEXT_LINES)
    }

    /// Merge CLI working-copy root with config, defaulting to the cwd
    pub fn merge_local_root(&self, cli_value: Option<&str>) -> PathBuf {
        cli_value
            .map(PathBuf::from)
            .or_else(|| self.local_root.as_ref().map(PathBuf::from))
            .unwrap_or_else(|| PathBuf::from("."))
    }

    pub fn base_url(&self) -> &str {
        self.base_url.as_deref().unwrap_or(DEFAULT_BASE_URL)
    }
}

/// Read the access token from the environment, rejecting blank values.
pub fn access_token() -> Option<String> {
    env::var(TOKEN_ENV_VAR).ok().filter(|t| !t.trim().is_empty())
}
