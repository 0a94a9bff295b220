//! csearch - Remote code search with local snippet extraction
//!
//! Shared modules for the csearch CLI tool.

pub mod config;
pub mod detect;
pub mod errors;
pub mod format;
pub mod local;
pub mod output;
pub mod query;
pub mod reconcile;
pub mod remote;
pub mod search;
pub mod snippet;
