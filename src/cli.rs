// SPDX-License-Identifier: MIT OR Apache-2.0

//! CLI argument parsing using clap

use clap::{Parser, Subcommand};
use clap_complete::Shell;

/// csearch - remote code search with local snippet extraction
///
/// Queries a hosted code-search backend, then re-reads the matched files
/// from your local working copy to show richer context snippets.
#[derive(Parser, Debug)]
#[command(name = "csearch")]
#[command(
    author,
    version,
    about,
    long_about = None,
    after_help = "Search quickstart:\n  csearch s \"token refresh\"\n  csearch search -g '*.cc' SocketPool\n  csearch search -C 4 \"open*file\""
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Search the remote backend and extract local snippets
    #[command(
        visible_aliases = ["s", "find"],
        after_help = "Examples:\n  csearch search SocketPool\n  csearch search -g '*.cc' --scope src/net \"connect timeout\"\n  csearch search --extra-paths scraped.txt retry"
    )]
    Search {
        /// Search query (literal text, * wildcards allowed)
        query: String,

        /// Filter files matching glob pattern (e.g., "*.rs")
        #[arg(short = 'g', long, visible_alias = "include", help_heading = "Core")]
        glob: Option<String>,

        /// Restrict matches to a path prefix
        #[arg(long, help_heading = "Core")]
        scope: Option<String>,

        /// Maximum number of result lines
        #[arg(
            short = 'm',
            long = "limit",
            visible_alias = "max-results",
            help_heading = "Core"
        )]
        limit: Option<usize>,

        /// Show N lines before and after each match (like grep -C)
        #[arg(short = 'C', long, help_heading = "Core")]
        context: Option<usize>,

        /// Include files whose names mark them as tests
        #[arg(long, help_heading = "Scope")]
        include_tests: bool,

        /// File with newline-separated candidate paths from a secondary source
        #[arg(long, value_name = "FILE", help_heading = "Scope")]
        extra_paths: Option<String>,

        /// Local working-copy root (defaults to config, then cwd)
        #[arg(short = 'p', long, help_heading = "Core")]
        path: Option<String>,
    },

    /// Check whether a checkout looks like a large monorepo
    Detect {
        /// Path to inspect (defaults to current directory)
        path: Option<String>,
    },

    /// Generate shell completions
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}
