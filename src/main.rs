//! csearch - Remote code search with local snippet extraction
//!
//! Queries a hosted code-search backend and re-reads matched files from a
//! local working copy to render richer context snippets than the remote
//! service returns.

mod cli;

use anyhow::Result;
use clap::{CommandFactory, Parser};
use clap_complete::generate;
use cli::{Cli, Commands};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

use csearch::detect::is_large_codebase;
use csearch::output::{colorize_note, colorize_path, use_colors};
use csearch::search::{self, SearchArgs};

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Search {
            query,
            glob,
            scope,
            limit,
            context,
            include_tests,
            extra_paths,
            path,
        } => {
            search::run(&SearchArgs {
                query,
                glob,
                scope,
                limit,
                context,
                include_tests,
                extra_paths,
                local_root: path,
            })?;
        }
        Commands::Detect { path } => {
            let root = PathBuf::from(path.unwrap_or_else(|| ".".to_string()));
            let verdict = if is_large_codebase(&root) { "large" } else { "normal" };
            let color = use_colors();
            println!(
                "{}: {}",
                colorize_path(&root.display().to_string(), color),
                colorize_note(verdict, color)
            );
        }
        Commands::Completions { shell } => {
            generate(shell, &mut Cli::command(), "csearch", &mut std::io::stdout());
        }
    }

    Ok(())
}
