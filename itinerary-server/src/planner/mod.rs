//! Itinerary reconstruction.
//!
//! This module answers: "given a pile of one-way tickets, in what order
//! were they flown?"
//!
//! Tickets are edges of a directed multigraph. An itinerary that uses every
//! ticket once is an Eulerian path, found with Hierholzer's algorithm. When
//! more than one ordering is valid, destinations are always tried smallest
//! code first, which yields the lexicographically smallest itinerary.

mod graph;
mod reconstruct;

pub use graph::{FlightGraph, Walk};
pub use reconstruct::{ReconstructError, Reconstruction, reconstruct, reconstruct_pairs};
