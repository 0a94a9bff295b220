// SPDX-License-Identifier: MIT OR Apache-2.0

//! Search orchestration: query build, remote search, reconcile, format.

use std::fs;
use std::time::Instant;

use anyhow::{Context, Result};

use crate::config::{self, Config};
use crate::errors::{IncompleteConfigError, MissingCredentialError, NoResultsError};
use crate::format::format_results;
use crate::local::LocalResolver;
use crate::query::{build_query, QueryOptions};
use crate::reconcile::reconcile;
use crate::remote::{RemoteConfig, SearchClient};

/// Options for one search invocation, already parsed from the CLI.
#[derive(Debug, Default)]
pub struct SearchArgs {
    pub query: String,
    pub glob: Option<String>,
    pub scope: Option<String>,
    pub limit: Option<usize>,
    pub context: Option<usize>,
    pub include_tests: bool,
    /// File with newline-separated candidate paths from a secondary source.
    pub extra_paths: Option<String>,
    pub local_root: Option<String>,
}

pub fn run(args: &SearchArgs) -> Result<()> {
    let config = Config::load();
    // Credential check comes first; nothing talks to the backend without it.
    let token = config::access_token().ok_or(MissingCredentialError)?;

    let (organization, project, repository) =
        match (&config.organization, &config.project, &config.repository) {
            (Some(org), Some(project), Some(repo)) => {
                (org.clone(), project.clone(), repo.clone())
            }
            _ => {
                let mut missing = Vec::new();
                if config.organization.is_none() {
                    missing.push("organization");
                }
                if config.project.is_none() {
                    missing.push("project");
                }
                if config.repository.is_none() {
                    missing.push("repository");
                }
                return Err(IncompleteConfigError { missing }.into());
            }
        };

    let max_results = config.merge_max_results(args.limit);
    let context_lines = config.merge_context_lines(args.context);
    let local_root = config.merge_local_root(args.local_root.as_deref());

    let query = build_query(
        &args.query,
        &QueryOptions {
            file_glob: args.glob.as_deref(),
            path_filter: args.scope.as_deref(),
            include_tests: args.include_tests,
        },
    );

    let client = SearchClient::new(RemoteConfig {
        base_url: config.base_url().to_string(),
        organization,
        project,
        repository,
        branch: config.branch.clone(),
        token,
    })?;

    let started = Instant::now();
    let hits = client.search(&query, max_results)?;
    tracing::debug!(hits = hits.len(), elapsed_ms = started.elapsed().as_millis() as u64, "remote search done");

    let fallback = match &args.extra_paths {
        Some(file) => Some(read_path_list(file)?),
        None => None,
    };

    let resolver = LocalResolver::new(local_root);
    let lines = reconcile(
        &hits,
        fallback.as_deref(),
        |path| resolver.resolve(path),
        &args.query,
        context_lines,
    );

    if lines.is_empty() {
        println!("{}", NoResultsError { query: args.query.clone() });
        return Ok(());
    }
    println!("{}", format_results(&lines, max_results));
    Ok(())
}

fn read_path_list(path: &str) -> Result<Vec<String>> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("failed to read extra paths file '{path}'"))?;
    Ok(content
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(str::to_string)
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn path_list_skips_blank_lines_and_trims() {
        let mut file = tempfile::NamedTempFile::new().expect("tempfile");
        writeln!(file, "  src/a.rs  \n\n/src/b.rs\n").expect("write");
        let paths = read_path_list(file.path().to_str().expect("utf8 path")).expect("read");
        assert_eq!(paths, ["src/a.rs", "/src/b.rs"]);
    }

    #[test]
    fn missing_path_list_is_a_descriptive_error() {
        let err = read_path_list("/no/such/file.txt").expect_err("should fail");
        assert!(err.to_string().contains("extra paths file"));
    }
}
