// SPDX-License-Identifier: MIT OR Apache-2.0

//! Context-snippet extraction from local file content.
//!
//! Remote hits only tell us which files matched; the snippet shown to the
//! user is always re-extracted from the local working copy. Matching lines
//! are expanded into context windows, overlapping windows are suppressed,
//! and the surviving windows are rendered with 1-based line numbers.

use regex::{Regex, RegexBuilder};

/// Context lines above/below a match when the caller does not override it.
pub const DEFAULT_CONTEXT_LINES: usize = 2;

/// Rendered lines longer than this are truncated with a trailing ellipsis.
pub const MAX_LINE_CHARS: usize = 256;

/// Maximum number of snippet blocks rendered per file.
pub const MAX_BLOCKS_PER_FILE: usize = 10;

/// Separator between non-contiguous snippet blocks.
pub const BLOCK_SEPARATOR: &str = "------";

const ELLIPSIS: &str = "...";
const ANY: &str = ".*";

/// Half-open, 0-indexed line range around one matching line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct LineWindow {
    start: usize,
    end: usize,
}

impl LineWindow {
    fn overlaps(&self, other: &LineWindow) -> bool {
        self.start <= other.end && self.end >= other.start
    }
}

/// Build the case-insensitive matching predicate for a search term.
///
/// `*`, `.*` tokens, and `|` all collapse to an any-character wildcard, as
/// do whitespace runs (so a multi-word query still matches lines where the
/// words are separated differently). Every other character is escaped, so
/// regex metacharacters in user input never reach the engine unquoted.
pub fn build_predicate(term: &str) -> Result<Regex, regex::Error> {
    let mut pattern = String::with_capacity(term.len() + 8);
    let mut chars = term.chars().peekable();

    while let Some(c) = chars.next() {
        match c {
            '*' | '|' => push_wildcard(&mut pattern),
            '.' if chars.peek() == Some(&'*') => {
                chars.next();
                push_wildcard(&mut pattern);
            }
            c if c.is_whitespace() => {
                while chars.peek().is_some_and(|n| n.is_whitespace()) {
                    chars.next();
                }
                push_wildcard(&mut pattern);
            }
            c => {
                let mut buf = [0u8; 4];
                pattern.push_str(&regex::escape(c.encode_utf8(&mut buf)));
            }
        }
    }

    RegexBuilder::new(&pattern).case_insensitive(true).build()
}

fn push_wildcard(pattern: &mut String) {
    // Collapse runs of adjacent wildcard tokens into one.
    if !pattern.ends_with(ANY) {
        pattern.push_str(ANY);
    }
}

/// Extract a rendered snippet for `term` from `content`.
///
/// Returns `None` when no line matches; the caller treats that as "nothing
/// to show for this file", not as an error.
pub fn extract(content: &str, term: &str, context_lines: usize) -> Option<String> {
    let predicate = build_predicate(term).ok()?;
    let lines: Vec<&str> = content.lines().collect();

    let mut accepted: Vec<LineWindow> = Vec::new();
    let mut rendered: Vec<String> = Vec::new();

    for (idx, line) in lines.iter().enumerate() {
        if !predicate.is_match(line) {
            continue;
        }

        let window = LineWindow {
            start: idx.saturating_sub(context_lines),
            end: (idx + context_lines + 1).min(lines.len()),
        };
        if accepted.iter().any(|w| w.overlaps(&window)) {
            continue;
        }

        if accepted.len() == MAX_BLOCKS_PER_FILE {
            let remaining = lines[idx..].iter().filter(|l| predicate.is_match(l)).count();
            rendered.push(BLOCK_SEPARATOR.to_string());
            rendered.push(format!(
                "... {} more matching line{} not shown",
                remaining,
                if remaining == 1 { "" } else { "s" }
            ));
            break;
        }

        if let Some(prev) = accepted.last() {
            if prev.end < window.start {
                rendered.push(BLOCK_SEPARATOR.to_string());
            }
        }

        for n in window.start..window.end {
            let marker = if context_lines == 0 {
                ""
            } else if n == idx {
                "> "
            } else {
                "  "
            };
            rendered.push(format!("{}{}: {}", marker, n + 1, clip_line(lines[n])));
        }

        accepted.push(window);
    }

    if accepted.is_empty() {
        return None;
    }
    Some(rendered.join("\n"))
}

fn clip_line(line: &str) -> String {
    if line.chars().count() <= MAX_LINE_CHARS {
        return line.to_string();
    }
    let mut clipped: String = line.chars().take(MAX_LINE_CHARS).collect();
    clipped.push_str(ELLIPSIS);
    clipped
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn no_matching_line_returns_none() {
        assert_eq!(extract("alpha\nbeta\ngamma", "needle", 2), None);
        assert_eq!(extract("", "needle", 2), None);
    }

    #[test]
    fn single_match_renders_window_with_markers() {
        let content = "a\nb\nneedle here\nc\nd";
        let snippet = extract(content, "needle", 1).expect("snippet");
        assert_eq!(snippet, "  2: b\n> 3: needle here\n  4: c");
    }

    #[test]
    fn window_clamps_at_file_boundaries() {
        let snippet = extract("needle\ntail", "needle", 2).expect("snippet");
        assert_eq!(snippet, "> 1: needle\n  2: tail");
    }

    #[test]
    fn zero_context_renders_match_line_only_without_marker() {
        let snippet = extract("a\nneedle\nb", "needle", 0).expect("snippet");
        assert_eq!(snippet, "2: needle");
    }

    #[test]
    fn distant_matches_produce_separated_blocks() {
        let content = "a\nMATCH\nb\nc\nd\ne\nMATCH\nf";
        let snippet = extract(content, "match", 1).expect("snippet");
        let expected = "  1: a\n> 2: MATCH\n  3: b\n------\n  6: e\n> 7: MATCH\n  8: f";
        assert_eq!(snippet, expected);
    }

    #[test]
    fn close_matches_suppress_the_overlapping_window() {
        // Second match sits inside the first window's reach; no line may
        // render twice.
        let content = "a\nMATCH\nb\nMATCH\nc";
        let snippet = extract(content, "match", 1).expect("snippet");
        assert_eq!(snippet, "  1: a\n> 2: MATCH\n  3: b");
        assert_eq!(snippet.matches("MATCH").count(), 1);
    }

    #[test]
    fn window_overlapping_any_accepted_window_is_skipped() {
        let content = "MATCH\nx\nx\nx\nx\nx\nMATCH\nx\nMATCH again";
        let snippet = extract(content, "match", 1).expect("snippet");
        assert!(snippet.contains("> 1: MATCH"));
        assert!(snippet.contains("> 7: MATCH"));
        assert!(!snippet.contains("> 9:"));
    }

    #[test]
    fn windows_render_in_ascending_line_order() {
        let content = (0..40)
            .map(|i| if i % 15 == 0 { format!("hit {i}") } else { format!("line {i}") })
            .collect::<Vec<_>>()
            .join("\n");
        let snippet = extract(&content, "hit", 1).expect("snippet");
        let numbers: Vec<usize> = snippet
            .lines()
            .filter(|l| l.starts_with("> "))
            .filter_map(|l| l[2..].split(':').next()?.trim().parse().ok())
            .collect();
        let mut sorted = numbers.clone();
        sorted.sort_unstable();
        assert_eq!(numbers, sorted);
        assert!(numbers.len() > 1);
    }

    #[test]
    fn wildcard_matches_any_characters_case_insensitively() {
        let predicate = build_predicate("Foo*Bar").expect("predicate");
        assert!(predicate.is_match("FooXBar"));
        assert!(predicate.is_match("foo123bar"));
        assert!(predicate.is_match("prefix fooQbar suffix"));
        assert!(!predicate.is_match("FooBa"));
    }

    #[test]
    fn whitespace_and_alternation_collapse_to_wildcards() {
        let predicate = build_predicate("open   file|read").expect("predicate");
        assert!(predicate.is_match("openFileForRead"));
        assert!(predicate.is_match("open the file and read it"));
        assert!(!predicate.is_match("read before open"));
    }

    #[test]
    fn dot_star_token_is_treated_as_wildcard() {
        let predicate = build_predicate("begin.*end").expect("predicate");
        assert!(predicate.is_match("begin middle end"));
        // A bare dot stays literal.
        let literal = build_predicate("a.b").expect("predicate");
        assert!(literal.is_match("a.b"));
        assert!(!literal.is_match("axb"));
    }

    #[test]
    fn regex_metacharacters_are_neutralized() {
        let predicate = build_predicate("vec[0] + (x)").expect("predicate");
        assert!(predicate.is_match("let y = vec[0] + (x);"));
        assert!(!predicate.is_match("vec0 + x"));

        for term in ["(", "[a-z", "a{2", "\\", "a+?"] {
            let p = build_predicate(term).expect("metacharacters must not break the build");
            let _ = p.is_match("probe");
        }
    }

    #[test]
    fn wildcard_only_term_coalesces_into_large_blocks() {
        let content = "a\nb\nc\nd\ne";
        let snippet = extract(content, "*", 1).expect("snippet");
        // Every line matches; overlap suppression collapses the file into a
        // few blocks and no line renders twice.
        for n in 1..=5 {
            assert!(snippet.matches(&format!("{n}: ")).count() <= 1);
        }
        assert!(snippet.contains("> 1: a"));
    }

    #[test]
    fn long_lines_truncate_with_ellipsis() {
        let long = format!("needle {}", "x".repeat(400));
        let snippet = extract(&long, "needle", 0).expect("snippet");
        let line = snippet.lines().next().expect("line");
        assert!(line.ends_with("..."));
        // "1: " prefix + capped content + ellipsis.
        let body = &line[3..];
        assert_eq!(body.chars().count(), MAX_LINE_CHARS + 3);
    }

    #[test]
    fn block_cap_stops_scanning_with_remainder_notice() {
        // Matches spaced widely enough that every window is accepted.
        let mut lines = Vec::new();
        for i in 0..200 {
            if i % 10 == 0 {
                lines.push(format!("needle {i}"));
            } else {
                lines.push(format!("filler {i}"));
            }
        }
        let content = lines.join("\n");
        let snippet = extract(&content, "needle", 1).expect("snippet");
        assert_eq!(snippet.lines().filter(|l| l.starts_with("> ")).count(), MAX_BLOCKS_PER_FILE);
        assert!(snippet.contains("more matching line"));
        assert!(snippet.ends_with("not shown"));
    }
}
