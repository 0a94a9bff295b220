//! Query module - backend query-language construction

pub mod builder;

pub use builder::{build_query, QueryOptions};
