//! Provider adapters — one module per external job-search API.
//!
//! Every adapter follows the same shape: build one provider-specific
//! request, issue it through the shared `reqwest::Client`, and map the
//! provider's response schema field-by-field into `JobRecord`s. Failures of
//! any kind (transport, non-2xx, malformed body) collapse into a single
//! `ProviderError`; callers decide how to recover, the adapter never does.

pub mod adzuna;
pub mod fallback;
pub mod reed;
pub mod usajobs;

use async_trait::async_trait;
use serde::Deserialize;
use thiserror::Error;

use crate::models::job::JobRecord;

/// A generic job-search query, defaulted the same way for every provider.
#[derive(Debug, Clone, Deserialize)]
pub struct JobQuery {
    #[serde(default = "default_keywords")]
    pub keywords: String,
    #[serde(default = "default_location")]
    pub location: String,
    #[serde(default = "default_page")]
    pub page: u32,
    #[serde(default = "default_results_per_page", rename = "resultsPerPage")]
    pub results_per_page: u32,
}

pub(crate) fn default_keywords() -> String {
    "software engineer".to_string()
}

pub(crate) fn default_location() -> String {
    "london".to_string()
}

fn default_page() -> u32 {
    1
}

fn default_results_per_page() -> u32 {
    20
}

impl Default for JobQuery {
    fn default() -> Self {
        Self {
            keywords: default_keywords(),
            location: default_location(),
            page: default_page(),
            results_per_page: default_results_per_page(),
        }
    }
}

/// One page of mapped results plus the provider-reported total count.
#[derive(Debug, Clone)]
pub struct ProviderPage {
    pub jobs: Vec<JobRecord>,
    pub total: u64,
}

/// The single failure class for adapter calls. The detail is logged
/// server-side only; clients get a fixed message and fallback data.
#[derive(Debug, Error)]
pub enum ProviderError {
    #[error("request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("upstream returned {status}: {body}")]
    Status { status: u16, body: String },

    #[error("malformed response body: {0}")]
    Parse(#[from] serde_json::Error),
}

/// The seam between the HTTP surface and the external providers.
///
/// Adapters share their whole control flow (build request → call → map →
/// fail as one class); only request building and field mapping differ, so
/// new providers are one impl away.
#[async_trait]
pub trait JobProvider: Send + Sync {
    /// Route segment and `sources=` token, e.g. "adzuna".
    fn name(&self) -> &'static str;

    /// Source tag carried on every record, e.g. "Adzuna".
    fn display_name(&self) -> &'static str;

    /// Credential presence only; never probes the network.
    fn configured(&self) -> bool;

    async fn search(&self, query: &JobQuery) -> Result<ProviderPage, ProviderError>;
}
