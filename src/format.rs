// SPDX-License-Identifier: MIT OR Apache-2.0

//! Final result formatting: summary header plus bounded body.

/// Join result lines under a summary header, truncated to `max_results`.
///
/// The returned string is the tool's wire contract: callers get exactly
/// this text, with no structured payload alongside it.
pub fn format_results(lines: &[String], max_results: usize) -> String {
    let header = if lines.len() >= max_results {
        format!(
            "Showing first {max_results} of {max_results}+ results. \
             Use a more specific search if necessary."
        )
    } else if lines.len() == 1 {
        "Found 1 result.".to_string()
    } else {
        format!("Found {} results.", lines.len())
    };

    let body = lines
        .iter()
        .take(max_results)
        .map(String::as_str)
        .collect::<Vec<_>>()
        .join("\n");
    format!("{header}\n\n{body}")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lines(n: usize) -> Vec<String> {
        (0..n).map(|i| format!("line {i}")).collect()
    }

    #[test]
    fn empty_input_formats_as_zero_results() {
        assert_eq!(format_results(&[], 50), "Found 0 results.\n\n");
    }

    #[test]
    fn pluralization_boundary_at_one() {
        let one = format_results(&lines(1), 50);
        assert!(one.starts_with("Found 1 result.\n"));
        let two = format_results(&lines(2), 50);
        assert!(two.starts_with("Found 2 results.\n"));
    }

    #[test]
    fn under_cap_keeps_every_line() {
        let out = format_results(&lines(3), 50);
        let body: Vec<&str> = out.splitn(3, '\n').nth(2).expect("body").lines().collect();
        assert_eq!(body, ["line 0", "line 1", "line 2"]);
    }

    #[test]
    fn exactly_at_cap_emits_truncation_header() {
        let out = format_results(&lines(50), 50);
        assert!(out.starts_with(
            "Showing first 50 of 50+ results. Use a more specific search if necessary."
        ));
        let body_lines = out.splitn(3, '\n').nth(2).expect("body").lines().count();
        assert_eq!(body_lines, 50);
    }

    #[test]
    fn over_cap_truncates_body() {
        let out = format_results(&lines(80), 50);
        assert!(out.contains("Showing first 50 of 50+"));
        let body: Vec<&str> = out.splitn(3, '\n').nth(2).expect("body").lines().collect();
        assert_eq!(body.len(), 50);
        assert_eq!(body[49], "line 49");
    }
}
