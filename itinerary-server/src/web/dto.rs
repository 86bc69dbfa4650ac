//! Data transfer objects for web requests and responses.

use serde::{Deserialize, Serialize};

/// Request to reconstruct an itinerary.
#[derive(Debug, Deserialize)]
pub struct TicketsRequest {
    /// Raw `[origin, destination]` pairs. Arity is checked later so the
    /// error can name the offending ticket.
    #[serde(default)]
    pub tickets: Vec<Vec<String>>,
}

/// Reconstructed itinerary.
#[derive(Debug, Serialize)]
pub struct ItineraryResponse {
    /// Airport codes in travel order
    pub itinerary: Vec<String>,
}

/// Error response.
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    /// Error message
    pub error: String,
}
