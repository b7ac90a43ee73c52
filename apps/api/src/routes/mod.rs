pub mod health;
pub mod jobs;

use axum::{middleware, routing::get, Router};

use crate::gate;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    // `/api/jobs/search` is a static segment so it wins over `:source`.
    Router::new()
        .route("/api/jobs/search", get(jobs::search_all))
        .route("/api/jobs/:source", get(jobs::search_provider))
        .route("/api/health", get(health::health_handler))
        .layer(middleware::from_fn_with_state(
            state.clone(),
            gate::rate_limit,
        ))
        .with_state(state)
}
