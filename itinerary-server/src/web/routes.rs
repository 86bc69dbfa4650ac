//! HTTP route handlers.

use axum::body::Bytes;
use axum::{
    Json, Router,
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
};
use tower_http::trace::TraceLayer;
use tracing::{debug, info, warn};

use crate::domain::Airport;
use crate::planner::{ReconstructError, reconstruct_pairs};

use super::dto::*;
use super::state::AppState;

/// Create the application router.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/itinerary", post(reconstruct_itinerary))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Health check endpoint.
async fn health() -> &'static str {
    "ok"
}

/// Reconstruct an itinerary from unordered tickets.
async fn reconstruct_itinerary(
    State(state): State<AppState>,
    body: Bytes,
) -> Result<Json<ItineraryResponse>, AppError> {
    // Parse JSON manually so we can log the body on failure
    let req: TicketsRequest = serde_json::from_slice(&body).map_err(|e| {
        debug!(body = %String::from_utf8_lossy(&body), "Unparseable itinerary request");
        AppError::BadRequest {
            message: format!("Invalid request payload: {e}"),
        }
    })?;

    let limit = state.config.max_tickets;
    if req.tickets.len() > limit {
        return Err(AppError::PayloadTooLarge {
            message: format!("Too many tickets: {} (limit {limit})", req.tickets.len()),
        });
    }

    let result = reconstruct_pairs(&req.tickets)?;

    let from = result.itinerary.departure().map(Airport::as_str);
    let to = result.itinerary.arrival().map(Airport::as_str);
    if result.is_complete() {
        info!(
            tickets = result.tickets_total,
            legs = result.itinerary.leg_count(),
            from,
            to,
            "Reconstructed itinerary"
        );
    } else {
        warn!(
            tickets = result.tickets_total,
            used = result.tickets_used,
            dropped = result.tickets_dropped(),
            broken_legs = result.broken_legs,
            from,
            to,
            "Tickets do not form a single itinerary; returning a partial one"
        );
    }

    Ok(Json(ItineraryResponse {
        itinerary: result.itinerary.into_codes(),
    }))
}

/// Application error type.
#[derive(Debug)]
pub enum AppError {
    BadRequest { message: String },
    PayloadTooLarge { message: String },
}

impl From<ReconstructError> for AppError {
    fn from(e: ReconstructError) -> Self {
        AppError::BadRequest {
            message: format!("Invalid request payload: {e}"),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            AppError::BadRequest { message } => (StatusCode::BAD_REQUEST, message),
            AppError::PayloadTooLarge { message } => (StatusCode::PAYLOAD_TOO_LARGE, message),
        };

        warn!(status = %status, "{message}");

        let body = Json(ErrorResponse { error: message });
        (status, body).into_response()
    }
}
