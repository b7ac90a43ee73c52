//! Combined search: fan out across the selected providers, fan in, dedup.

use std::collections::HashSet;
use std::sync::Arc;

use futures::future::join_all;
use tracing::warn;

use crate::models::job::JobRecord;
use crate::providers::{JobProvider, JobQuery};

/// Resolves a `sources=adzuna,reed` style list against the registered
/// providers. Unknown tokens are ignored; `None` selects everything. The
/// result always follows provider declaration order, not request order, so
/// the merged list (and dedup winners) stay stable.
pub fn select_providers(
    providers: &[Arc<dyn JobProvider>],
    sources: Option<&str>,
) -> Vec<Arc<dyn JobProvider>> {
    let Some(sources) = sources else {
        return providers.to_vec();
    };
    let wanted: Vec<&str> = sources
        .split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .collect();
    providers
        .iter()
        .filter(|p| wanted.contains(&p.name()))
        .cloned()
        .collect()
}

/// Queries every selected provider concurrently and merges their results.
///
/// Branches are isolated: a provider that fails is logged and contributes
/// an empty list without cancelling or failing the others. The join waits
/// for all branches to settle, then the merge flattens in provider order
/// and drops later duplicates of the same `(title, company)` pair.
pub async fn combined_search(
    selected: &[Arc<dyn JobProvider>],
    query: &JobQuery,
) -> Vec<JobRecord> {
    let branches = selected.iter().map(|provider| {
        let provider = Arc::clone(provider);
        let query = query.clone();
        async move {
            match provider.search(&query).await {
                Ok(page) => page.jobs,
                Err(err) => {
                    warn!(
                        provider = provider.name(),
                        error = %err,
                        "provider failed during combined search; contributing no jobs"
                    );
                    Vec::new()
                }
            }
        }
    });

    let merged: Vec<JobRecord> = join_all(branches).await.into_iter().flatten().collect();
    dedupe_jobs(merged)
}

/// First occurrence of a `(title, company)` pair wins; comparison is exact
/// and case-sensitive.
pub fn dedupe_jobs(jobs: Vec<JobRecord>) -> Vec<JobRecord> {
    let mut seen = HashSet::new();
    jobs.into_iter()
        .filter(|job| seen.insert((job.title.clone(), job.company.clone())))
        .collect()
}
