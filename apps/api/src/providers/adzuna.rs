//! Adzuna adapter — UK market, query-string `app_id`/`app_key` auth.

use reqwest::Client;
use serde::Deserialize;

use super::{JobProvider, JobQuery, ProviderError, ProviderPage};
use crate::config;
use crate::models::job::{
    format_posted, format_salary, or_placeholder, JobRecord, Market, UNKNOWN_COMPANY,
    UNKNOWN_DESCRIPTION, UNKNOWN_LOCATION,
};

const DEFAULT_BASE_URL: &str = "https://api.adzuna.com";
const SOURCE: &str = "Adzuna";

pub struct AdzunaProvider {
    client: Client,
    app_id: String,
    app_key: String,
    base_url: String,
}

impl AdzunaProvider {
    pub fn new(client: Client, app_id: String, app_key: String) -> Self {
        Self {
            client,
            app_id,
            app_key,
            base_url: DEFAULT_BASE_URL.to_string(),
        }
    }

    /// Points the adapter at a mock server in wire tests.
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }
}

#[derive(Debug, Deserialize)]
struct SearchResponse {
    #[serde(default)]
    count: u64,
    #[serde(default)]
    results: Vec<RawJob>,
}

#[derive(Debug, Default, Deserialize)]
struct RawJob {
    id: Option<String>,
    title: Option<String>,
    company: Option<RawCompany>,
    location: Option<RawLocation>,
    description: Option<String>,
    redirect_url: Option<String>,
    salary_min: Option<f64>,
    salary_max: Option<f64>,
    created: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
struct RawCompany {
    display_name: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
struct RawLocation {
    display_name: Option<String>,
}

fn map_job(raw: RawJob) -> JobRecord {
    JobRecord {
        id: or_placeholder(raw.id, "unknown"),
        title: or_placeholder(raw.title, "Untitled position"),
        company: or_placeholder(
            raw.company.unwrap_or_default().display_name,
            UNKNOWN_COMPANY,
        ),
        location: or_placeholder(
            raw.location.unwrap_or_default().display_name,
            UNKNOWN_LOCATION,
        ),
        description: or_placeholder(raw.description, UNKNOWN_DESCRIPTION),
        salary: format_salary(Market::Uk, raw.salary_min, raw.salary_max),
        url: or_placeholder(raw.redirect_url, "#"),
        posted: format_posted(raw.created.as_deref()),
        source: SOURCE.to_string(),
    }
}

#[async_trait::async_trait]
impl JobProvider for AdzunaProvider {
    fn name(&self) -> &'static str {
        "adzuna"
    }

    fn display_name(&self) -> &'static str {
        SOURCE
    }

    fn configured(&self) -> bool {
        config::credential_configured(&self.app_id) && config::credential_configured(&self.app_key)
    }

    async fn search(&self, query: &JobQuery) -> Result<ProviderPage, ProviderError> {
        let url = format!("{}/v1/api/jobs/gb/search/{}", self.base_url, query.page);
        let response = self
            .client
            .get(&url)
            .query(&[
                ("app_id", self.app_id.as_str()),
                ("app_key", self.app_key.as_str()),
                ("results_per_page", &query.results_per_page.to_string()),
                ("what", &query.keywords),
                ("where", &query.location),
            ])
            .send()
            .await?;

        let status = response.status();
        let body = response.text().await?;
        if !status.is_success() {
            return Err(ProviderError::Status {
                status: status.as_u16(),
                body,
            });
        }

        let parsed: SearchResponse = serde_json::from_str(&body)?;
        Ok(ProviderPage {
            total: parsed.count,
            jobs: parsed.results.into_iter().map(map_job).collect(),
        })
    }
}
