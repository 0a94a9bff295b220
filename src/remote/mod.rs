// SPDX-License-Identifier: MIT OR Apache-2.0

//! Remote code-search API client.

pub mod client;

pub use client::{RemoteConfig, RemoteError, SearchClient, SearchHit};
