//! Per-client-IP request gate, applied before any provider logic runs.

use std::net::{IpAddr, SocketAddr};
use std::num::NonZeroU32;
use std::time::Duration;

use axum::{
    extract::{ConnectInfo, Request, State},
    http::StatusCode,
    middleware::Next,
    response::{IntoResponse, Response},
    Json,
};
use governor::{DefaultKeyedRateLimiter, Quota, RateLimiter};
use serde_json::json;
use tracing::warn;

pub const MAX_REQUESTS_PER_WINDOW: u32 = 10;
pub const WINDOW: Duration = Duration::from_secs(60);

/// Keyed limiter owned by the application state and injected into the
/// middleware. The keyed store is the in-memory per-IP consumption map;
/// governor expires idle keys on its own.
pub struct RequestGate {
    limiter: DefaultKeyedRateLimiter<IpAddr>,
}

impl RequestGate {
    /// Budget of `max_requests` per `window` per client IP. Requests over
    /// budget are rejected immediately, never queued or delayed.
    pub fn new(max_requests: u32, window: Duration) -> Self {
        let max_requests = NonZeroU32::new(max_requests).unwrap_or(NonZeroU32::MIN);
        let quota = Quota::with_period(window / max_requests.get())
            .expect("rate limit window must be non-zero")
            .allow_burst(max_requests);
        Self {
            limiter: RateLimiter::keyed(quota),
        }
    }

    /// Check-and-consume one unit of budget for `ip`.
    pub fn allow(&self, ip: IpAddr) -> bool {
        self.limiter.check_key(&ip).is_ok()
    }
}

/// Axum middleware answering 429 with a fixed body once a client exhausts
/// its window budget.
pub async fn rate_limit(
    State(state): State<crate::state::AppState>,
    ConnectInfo(addr): ConnectInfo<SocketAddr>,
    request: Request,
    next: Next,
) -> Response {
    if state.gate.allow(addr.ip()) {
        next.run(request).await
    } else {
        warn!(ip = %addr.ip(), "rate limit exceeded");
        (
            StatusCode::TOO_MANY_REQUESTS,
            Json(json!({ "error": "Too many requests" })),
        )
            .into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_budget_allows_exactly_max_requests() {
        let gate = RequestGate::new(10, Duration::from_secs(60));
        let ip: IpAddr = "10.0.0.1".parse().unwrap();
        for i in 0..10 {
            assert!(gate.allow(ip), "request {} should pass", i + 1);
        }
        assert!(!gate.allow(ip), "11th request should be rejected");
    }

    #[test]
    fn test_budgets_are_per_ip() {
        let gate = RequestGate::new(2, Duration::from_secs(60));
        let first: IpAddr = "10.0.0.1".parse().unwrap();
        let second: IpAddr = "10.0.0.2".parse().unwrap();

        assert!(gate.allow(first));
        assert!(gate.allow(first));
        assert!(!gate.allow(first));
        assert!(gate.allow(second));
    }

    #[test]
    fn test_zero_budget_clamps_to_one() {
        let gate = RequestGate::new(0, Duration::from_secs(60));
        let ip: IpAddr = "10.0.0.1".parse().unwrap();
        assert!(gate.allow(ip));
        assert!(!gate.allow(ip));
    }
}
