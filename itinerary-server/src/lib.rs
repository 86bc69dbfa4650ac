//! Itinerary reconstruction server.
//!
//! A web service that answers: "I have a pile of one-way flight tickets,
//! in what order were they flown?"

pub mod config;
pub mod domain;
pub mod planner;
pub mod web;
