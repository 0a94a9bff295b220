// SPDX-License-Identifier: MIT OR Apache-2.0

//! Blocking HTTP client for the hosted code-search REST API.
//!
//! This is thin I/O glue: it builds the request, authenticates, and hands a
//! fully materialized hit list to the reconciler. Failures surface as
//! descriptive errors at this boundary; downstream code never sees partial
//! or garbled hit data.

use std::time::Duration;

use serde::{Deserialize, Serialize};
use thiserror::Error;

const API_VERSION: &str = "7.1";
const REQUEST_TIMEOUT_SECS: u64 = 30;

#[derive(Debug, Error)]
pub enum RemoteError {
    #[error("search request failed: {0}")]
    Transport(#[from] reqwest::Error),
    #[error("search API returned HTTP {status}: {detail}")]
    Api { status: u16, detail: String },
}

/// One remote match: the backend reports which files matched, not where.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchHit {
    /// Repository-relative path, leading-slash-prefixed by the backend.
    pub path: String,
    #[serde(default)]
    pub repository: Option<NamedRef>,
    #[serde(default)]
    pub project: Option<NamedRef>,
    #[serde(default)]
    pub versions: Vec<BranchVersion>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct NamedRef {
    pub name: String,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BranchVersion {
    pub branch_name: String,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct SearchRequest<'a> {
    search_text: &'a str,
    #[serde(rename = "$top")]
    top: usize,
    filters: SearchFilters<'a>,
}

#[derive(Debug, Serialize)]
struct SearchFilters<'a> {
    #[serde(rename = "Project")]
    project: Vec<&'a str>,
    #[serde(rename = "Repository")]
    repository: Vec<&'a str>,
    #[serde(rename = "Branch", skip_serializing_if = "Vec::is_empty")]
    branch: Vec<&'a str>,
}

#[derive(Debug, Deserialize)]
struct SearchResponse {
    #[serde(default)]
    count: usize,
    #[serde(default)]
    results: Vec<SearchHit>,
}

/// Connection settings for one backend organization/project/repository.
#[derive(Debug, Clone)]
pub struct RemoteConfig {
    pub base_url: String,
    pub organization: String,
    pub project: String,
    pub repository: String,
    pub branch: Option<String>,
    /// Personal access token; injected, never read from source or config files.
    pub token: String,
}

pub struct SearchClient {
    http: reqwest::blocking::Client,
    config: RemoteConfig,
}

impl SearchClient {
    pub fn new(config: RemoteConfig) -> Result<Self, RemoteError> {
        let http = reqwest::blocking::Client::builder()
            .timeout(Duration::from_secs(REQUEST_TIMEOUT_SECS))
            .build()?;
        Ok(Self { http, config })
    }

    /// Run one code search and return the hit list.
    pub fn search(&self, query: &str, top: usize) -> Result<Vec<SearchHit>, RemoteError> {
        let url = format!(
            "{}/{}/{}/_apis/search/codesearchresults?api-version={}",
            self.config.base_url.trim_end_matches('/'),
            self.config.organization,
            self.config.project,
            API_VERSION
        );

        let request = SearchRequest {
            search_text: query,
            top,
            filters: SearchFilters {
                project: vec![self.config.project.as_str()],
                repository: vec![self.config.repository.as_str()],
                branch: self.config.branch.as_deref().into_iter().collect(),
            },
        };

        tracing::debug!(%url, query, top, "issuing code search request");
        let response = self
            .http
            .post(&url)
            .basic_auth("", Some(&self.config.token))
            .json(&request)
            .send()?;

        let status = response.status();
        if !status.is_success() {
            let detail = response
                .text()
                .unwrap_or_default()
                .chars()
                .take(500)
                .collect::<String>();
            return Err(RemoteError::Api {
                status: status.as_u16(),
                detail: if detail.trim().is_empty() {
                    status.canonical_reason().unwrap_or("unknown error").to_string()
                } else {
                    detail
                },
            });
        }

        let body: SearchResponse = response.json()?;
        tracing::debug!(count = body.count, returned = body.results.len(), "code search response");
        Ok(body.results)
    }
}
