use axum::{extract::State, Json};
use chrono::Utc;
use serde_json::{json, Map, Value};

use crate::state::AppState;

/// GET /api/health
/// Reports whether each provider has a credential configured. This is
/// configuration presence only; no provider endpoint is probed, so "OK"
/// does not imply the providers are reachable.
pub async fn health_handler(State(state): State<AppState>) -> Json<Value> {
    let services: Map<String, Value> = state
        .providers
        .iter()
        .map(|p| (p.name().to_string(), Value::Bool(p.configured())))
        .collect();

    Json(json!({
        "status": "OK",
        "timestamp": Utc::now().to_rfc3339(),
        "services": services
    }))
}
