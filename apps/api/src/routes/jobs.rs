use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};
use tracing::error;

use crate::aggregate::{combined_search, select_providers};
use crate::errors::AppError;
use crate::models::job::JobRecord;
use crate::providers::{fallback::fallback_jobs, JobQuery};
use crate::state::AppState;

/// The unified envelope for every job listing response, success or failure.
#[derive(Debug, Serialize)]
pub struct JobsResponse {
    pub success: bool,
    pub jobs: Vec<JobRecord>,
    pub total: u64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sources: Option<Vec<String>>,
}

/// GET /api/jobs/:source
///
/// A provider failure is downgraded, not propagated: the upstream detail is
/// logged and the client gets 500 with a fixed message and three fallback
/// records.
pub async fn search_provider(
    State(state): State<AppState>,
    Path(source): Path<String>,
    Query(query): Query<JobQuery>,
) -> Result<Response, AppError> {
    let provider = state
        .provider_by_name(&source)
        .ok_or_else(|| AppError::NotFound(format!("Unknown job source '{source}'")))?;

    let response = match provider.search(&query).await {
        Ok(page) => (
            StatusCode::OK,
            Json(JobsResponse {
                success: true,
                jobs: page.jobs,
                total: page.total,
                error: None,
                sources: None,
            }),
        ),
        Err(err) => {
            error!(provider = provider.name(), error = %err, "provider search failed");
            let jobs = fallback_jobs(&query.keywords, &query.location, provider.display_name());
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(JobsResponse {
                    success: false,
                    total: jobs.len() as u64,
                    jobs,
                    error: Some(format!(
                        "Failed to fetch jobs from {}",
                        provider.display_name()
                    )),
                    sources: None,
                }),
            )
        }
    };
    Ok(response.into_response())
}

#[derive(Debug, Deserialize)]
pub struct CombinedParams {
    #[serde(default = "crate::providers::default_keywords")]
    pub keywords: String,
    #[serde(default = "crate::providers::default_location")]
    pub location: String,
    /// Comma-separated subset of provider names; absent means all.
    pub sources: Option<String>,
}

/// GET /api/jobs/search
///
/// Fans out across the selected providers in-process, merges and dedups.
/// Individual provider failures are swallowed inside the merge; only a
/// sources list that selects no known provider reaches the catch-all path,
/// which answers with fallback data tagged "Multiple Sources".
pub async fn search_all(
    State(state): State<AppState>,
    Query(params): Query<CombinedParams>,
) -> Response {
    let selected = select_providers(&state.providers, params.sources.as_deref());
    if selected.is_empty() {
        error!(sources = ?params.sources, "combined search matched no known source");
        let jobs = fallback_jobs(&params.keywords, &params.location, "Multiple Sources");
        return (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(JobsResponse {
                success: false,
                total: jobs.len() as u64,
                jobs,
                error: Some("Failed to fetch jobs from multiple sources".to_string()),
                sources: Some(Vec::new()),
            }),
        )
            .into_response();
    }

    let query = JobQuery {
        keywords: params.keywords,
        location: params.location,
        ..Default::default()
    };
    let jobs = combined_search(&selected, &query).await;
    let sources = selected.iter().map(|p| p.name().to_string()).collect();

    Json(JobsResponse {
        success: true,
        total: jobs.len() as u64,
        jobs,
        error: None,
        sources: Some(sources),
    })
    .into_response()
}
