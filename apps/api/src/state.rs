use std::sync::Arc;

use crate::gate::RequestGate;
use crate::providers::JobProvider;

/// Shared application state injected into all route handlers via Axum
/// extractors.
#[derive(Clone)]
pub struct AppState {
    /// Registered providers in merge order (adzuna, reed, usajobs); the
    /// combined search flattens and dedups in this order.
    pub providers: Arc<Vec<Arc<dyn JobProvider>>>,
    /// Per-IP request gate consulted by the rate-limit middleware.
    pub gate: Arc<RequestGate>,
}

impl AppState {
    pub fn provider_by_name(&self, name: &str) -> Option<&Arc<dyn JobProvider>> {
        self.providers.iter().find(|p| p.name() == name)
    }
}
