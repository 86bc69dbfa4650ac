//! Web layer for the itinerary server.
//!
//! Provides the HTTP endpoint that reconstructs itineraries.

mod dto;
mod routes;
mod state;

pub use dto::*;
pub use routes::{AppError, create_router};
pub use state::AppState;
