//! Health endpoints: liveness and readiness probes for orchestration.
//!
//! Readiness flips once the record store is reachable and example data (when
//! enabled) has been applied. Liveness drops once
//! [`drain`](crate::server::drain) marks the state unhealthy on shutdown, so
//! orchestrators stop routing searches to a draining instance.

use std::sync::atomic::{AtomicBool, Ordering};

use actix_web::{HttpResponse, get, http::header, web};
use serde::Serialize;
use utoipa::ToSchema;

/// Shared health state for readiness and liveness checks.
pub struct HealthState {
    ready: AtomicBool,
    live: AtomicBool,
}

impl Default for HealthState {
    fn default() -> Self {
        Self {
            ready: AtomicBool::new(false),
            live: AtomicBool::new(true),
        }
    }
}

/// Probe outcome returned in the response body.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum ProbeStatus {
    /// The probe passed.
    Ok,
    /// The probe failed.
    Unavailable,
}

/// Body returned by both probes.
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct ProbeResponse {
    /// Outcome of the probe.
    pub status: ProbeStatus,
}

impl HealthState {
    /// Create a new health state starting as not ready but live.
    pub fn new() -> Self {
        Self::default()
    }

    /// Mark the service as ready.
    pub fn mark_ready(&self) {
        self.ready.store(true, Ordering::Release);
    }

    /// Flag the service as unhealthy so liveness checks fail fast during shutdown.
    pub fn mark_unhealthy(&self) {
        self.live.store(false, Ordering::Release);
    }

    /// Return readiness state.
    pub fn is_ready(&self) -> bool {
        self.ready.load(Ordering::Acquire)
    }

    /// Return liveness state.
    pub fn is_alive(&self) -> bool {
        self.live.load(Ordering::Acquire)
    }

    fn probe_response(probe_ok: bool) -> HttpResponse {
        let (mut response, status) = if probe_ok {
            (HttpResponse::Ok(), ProbeStatus::Ok)
        } else {
            (HttpResponse::ServiceUnavailable(), ProbeStatus::Unavailable)
        };

        response
            .insert_header((header::CACHE_CONTROL, "no-store"))
            .json(ProbeResponse { status })
    }
}

/// Readiness probe. Returns 200 once the server can handle searches.
#[utoipa::path(
    get,
    path = "/health/ready",
    tags = ["health"],
    responses(
        (status = 200, description = "Server is ready to handle traffic", body = ProbeResponse),
        (status = 503, description = "Server is not ready", body = ProbeResponse)
    )
)]
#[get("/health/ready")]
pub async fn ready(state: web::Data<HealthState>) -> HttpResponse {
    HealthState::probe_response(state.is_ready())
}

/// Liveness probe. Returns 200 while alive and 503 once draining.
#[utoipa::path(
    get,
    path = "/health/live",
    tags = ["health"],
    responses(
        (status = 200, description = "Server is alive", body = ProbeResponse),
        (status = 503, description = "Server is shutting down", body = ProbeResponse)
    )
)]
#[get("/health/live")]
pub async fn live(state: web::Data<HealthState>) -> HttpResponse {
    HealthState::probe_response(state.is_alive())
}
