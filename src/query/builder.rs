// SPDX-License-Identifier: MIT OR Apache-2.0

//! Translates a user search string into the backend's query language.
//!
//! Canonical strategy: the structured query syntax with OR-groups and
//! `file:`/`path:` filters. Each plain token is expanded into an OR-group
//! with its prefix-wildcard form so identifier fragments still hit; tokens
//! that already carry a wildcard are passed through untouched. Test files
//! are excluded unless the caller opts in.

/// Filters applied alongside the search term.
#[derive(Debug, Default, Clone)]
pub struct QueryOptions<'a> {
    /// Glob restricting matches to certain file names, e.g. `*.cc`.
    pub file_glob: Option<&'a str>,
    /// Path prefix restricting matches to a subtree.
    pub path_filter: Option<&'a str>,
    /// Include files whose names mark them as tests.
    pub include_tests: bool,
}

/// Build the backend query string for a user term.
pub fn build_query(term: &str, options: &QueryOptions) -> String {
    let mut clauses: Vec<String> = Vec::new();
    for token in term.split_whitespace() {
        if token.contains('*') {
            clauses.push(token.to_string());
        } else {
            clauses.push(format!("({token} OR {token}*)"));
        }
    }

    let mut query = clauses.join(" ");
    if let Some(glob) = options.file_glob {
        push_clause(&mut query, &format!("file:{glob}"));
    }
    if let Some(path) = options.path_filter {
        push_clause(&mut query, &format!("path:{path}"));
    }
    if !options.include_tests {
        push_clause(&mut query, "NOT file:*test*");
    }
    query
}

fn push_clause(query: &mut String, clause: &str) {
    if !query.is_empty() {
        query.push(' ');
    }
    query.push_str(clause);
}
