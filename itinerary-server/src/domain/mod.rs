//! Domain types for itinerary reconstruction.
//!
//! All types enforce their invariants at construction time, so the planner
//! can trust that every ticket it receives has two non-empty airports.

mod airport;
mod itinerary;
mod ticket;

pub use airport::{Airport, InvalidAirport};
pub use itinerary::Itinerary;
pub use ticket::{InvalidTicket, Ticket};
