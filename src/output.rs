// SPDX-License-Identifier: MIT OR Apache-2.0

//! Terminal output helpers
//!
//! Color is framing only: the formatted result string itself is the wire
//! contract and is always printed verbatim.

use std::io::IsTerminal;

use colored::Colorize;

/// Whether colored output should be used on stdout.
pub fn use_colors() -> bool {
    std::env::var_os("NO_COLOR").is_none() && std::io::stdout().is_terminal()
}

pub fn colorize_path(path: &str, use_color: bool) -> String {
    if use_color {
        path.cyan().bold().to_string()
    } else {
        path.to_string()
    }
}

pub fn colorize_note(note: &str, use_color: bool) -> String {
    if use_color {
        note.yellow().to_string()
    } else {
        note.to_string()
    }
}
