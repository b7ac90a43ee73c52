//! USAJobs adapter — US market, `Authorization-Key` header auth plus the
//! contact-email `User-Agent` the API mandates.

use reqwest::Client;
use serde::Deserialize;

use super::{JobProvider, JobQuery, ProviderError, ProviderPage};
use crate::config;
use crate::models::job::{
    format_posted, format_salary, or_placeholder, JobRecord, Market, UNKNOWN_COMPANY,
    UNKNOWN_DESCRIPTION, UNKNOWN_LOCATION,
};

const DEFAULT_BASE_URL: &str = "https://data.usajobs.gov";
const SOURCE: &str = "USAJobs";

pub struct UsaJobsProvider {
    client: Client,
    api_key: String,
    user_agent: String,
    base_url: String,
}

impl UsaJobsProvider {
    pub fn new(client: Client, api_key: String, user_agent: String) -> Self {
        Self {
            client,
            api_key,
            user_agent,
            base_url: DEFAULT_BASE_URL.to_string(),
        }
    }

    /// Points the adapter at a mock server in wire tests.
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }
}

#[derive(Debug, Default, Deserialize)]
struct SearchResponse {
    #[serde(rename = "SearchResult", default)]
    search_result: SearchResult,
}

#[derive(Debug, Default, Deserialize)]
struct SearchResult {
    #[serde(rename = "SearchResultCountAll", default)]
    count_all: u64,
    #[serde(rename = "SearchResultItems", default)]
    items: Vec<RawItem>,
}

#[derive(Debug, Default, Deserialize)]
struct RawItem {
    #[serde(rename = "MatchedObjectId")]
    id: Option<String>,
    #[serde(rename = "MatchedObjectDescriptor", default)]
    descriptor: RawDescriptor,
}

#[derive(Debug, Default, Deserialize)]
struct RawDescriptor {
    #[serde(rename = "PositionTitle")]
    title: Option<String>,
    #[serde(rename = "OrganizationName")]
    organization: Option<String>,
    #[serde(rename = "PositionLocationDisplay")]
    location: Option<String>,
    #[serde(rename = "PositionURI")]
    uri: Option<String>,
    #[serde(rename = "PositionRemuneration", default)]
    remuneration: Vec<RawRemuneration>,
    #[serde(rename = "PublicationStartDate")]
    publication_start: Option<String>,
    #[serde(rename = "UserArea", default)]
    user_area: RawUserArea,
}

/// Salary bounds arrive as decimal strings, e.g. `"64660.0"`.
#[derive(Debug, Default, Deserialize)]
struct RawRemuneration {
    #[serde(rename = "MinimumRange")]
    minimum: Option<String>,
    #[serde(rename = "MaximumRange")]
    maximum: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
struct RawUserArea {
    #[serde(rename = "Details", default)]
    details: RawDetails,
}

#[derive(Debug, Default, Deserialize)]
struct RawDetails {
    #[serde(rename = "JobSummary")]
    job_summary: Option<String>,
}

fn map_job(raw: RawItem) -> JobRecord {
    let d = raw.descriptor;
    let pay = d.remuneration.into_iter().next().unwrap_or_default();
    JobRecord {
        id: or_placeholder(raw.id, "unknown"),
        title: or_placeholder(d.title, "Untitled position"),
        company: or_placeholder(d.organization, UNKNOWN_COMPANY),
        location: or_placeholder(d.location, UNKNOWN_LOCATION),
        description: or_placeholder(d.user_area.details.job_summary, UNKNOWN_DESCRIPTION),
        salary: format_salary(
            Market::Us,
            pay.minimum.and_then(|v| v.parse().ok()),
            pay.maximum.and_then(|v| v.parse().ok()),
        ),
        url: or_placeholder(d.uri, "#"),
        posted: format_posted(d.publication_start.as_deref()),
        source: SOURCE.to_string(),
    }
}

#[async_trait::async_trait]
impl JobProvider for UsaJobsProvider {
    fn name(&self) -> &'static str {
        "usajobs"
    }

    fn display_name(&self) -> &'static str {
        SOURCE
    }

    fn configured(&self) -> bool {
        config::credential_configured(&self.api_key)
    }

    async fn search(&self, query: &JobQuery) -> Result<ProviderPage, ProviderError> {
        let url = format!("{}/api/search", self.base_url);
        let response = self
            .client
            .get(&url)
            .header("Authorization-Key", &self.api_key)
            .header("User-Agent", &self.user_agent)
            .query(&[
                ("Keyword", query.keywords.as_str()),
                ("LocationName", query.location.as_str()),
                ("ResultsPerPage", &query.results_per_page.to_string()),
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
            total: parsed.search_result.count_all,
            jobs: parsed
                .search_result
                .items
                .into_iter()
                .map(map_job)
                .collect(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use httpmock::prelude::*;
    use serde_json::json;

    fn provider(base_url: &str) -> UsaJobsProvider {
        UsaJobsProvider::new(
            Client::new(),
            "usajobs-test-key".into(),
            "tester@example.com".into(),
        )
        .with_base_url(base_url)
    }

    #[test]
    fn test_map_job_full() {
        let raw: RawItem = serde_json::from_value(json!({
            "MatchedObjectId": "719000",
            "MatchedObjectDescriptor": {
                "PositionTitle": "IT Specialist",
                "OrganizationName": "Department of the Interior",
                "PositionLocationDisplay": "Washington, DC",
                "PositionURI": "https://www.usajobs.gov/job/719000",
                "PositionRemuneration": [
                    {"MinimumRange": "64660.0", "MaximumRange": "112015.0"}
                ],
                "PublicationStartDate": "2024-03-11",
                "UserArea": {"Details": {"JobSummary": "Serve the public."}}
            }
        }))
        .unwrap();

        let job = map_job(raw);
        assert_eq!(job.id, "719000");
        assert_eq!(job.company, "Department of the Interior");
        assert_eq!(job.salary, "$64660 - $112015");
        assert_eq!(job.posted, "11/03/2024");
        assert_eq!(job.description, "Serve the public.");
        assert_eq!(job.source, "USAJobs");
    }

    #[test]
    fn test_map_job_missing_fields_get_placeholders() {
        let job = map_job(RawItem::default());
        assert_eq!(job.company, UNKNOWN_COMPANY);
        assert_eq!(job.location, UNKNOWN_LOCATION);
        assert_eq!(job.description, UNKNOWN_DESCRIPTION);
        assert_eq!(job.salary, "Salary not specified");
        assert_eq!(job.posted, "Recently");
    }

    #[tokio::test]
    async fn test_search_sends_auth_headers() {
        let server = MockServer::start_async().await;
        let mock = server
            .mock_async(|when, then| {
                when.method(GET)
                    .path("/api/search")
                    .query_param("Keyword", "analyst")
                    .query_param("LocationName", "denver")
                    .header("Authorization-Key", "usajobs-test-key")
                    .header("User-Agent", "tester@example.com");
                then.status(200).json_body(json!({
                    "SearchResult": {
                        "SearchResultCountAll": 7,
                        "SearchResultItems": [{
                            "MatchedObjectId": "1",
                            "MatchedObjectDescriptor": {
                                "PositionTitle": "Analyst",
                                "OrganizationName": "GSA",
                                "PositionLocationDisplay": "Denver, CO",
                                "PositionURI": "https://u/1",
                                "PositionRemuneration": [],
                                "PublicationStartDate": "2024-02-20",
                                "UserArea": {"Details": {"JobSummary": "s"}}
                            }
                        }]
                    }
                }));
            })
            .await;

        let query = JobQuery {
            keywords: "analyst".into(),
            location: "denver".into(),
            ..Default::default()
        };
        let page = provider(&server.base_url()).search(&query).await.unwrap();

        mock.assert_async().await;
        assert_eq!(page.total, 7);
        assert_eq!(page.jobs[0].salary, "Salary not specified");
    }

    #[tokio::test]
    async fn test_search_forbidden_is_an_error() {
        let server = MockServer::start_async().await;
        server
            .mock_async(|when, then| {
                when.method(GET).path("/api/search");
                then.status(403).body("invalid key");
            })
            .await;

        let err = provider(&server.base_url())
            .search(&JobQuery::default())
            .await
            .unwrap_err();
        assert!(matches!(err, ProviderError::Status { status: 403, .. }));
    }
}
