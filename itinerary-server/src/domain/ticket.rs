//! One-way flight tickets.

use std::fmt;

use super::airport::{Airport, InvalidAirport};

/// Error returned when raw ticket fields cannot form a [`Ticket`].
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum InvalidTicket {
    /// A ticket must have exactly an origin and a destination.
    #[error("ticket must have exactly 2 airports, got {0}")]
    WrongArity(usize),

    /// One of the two airport fields was empty.
    #[error(transparent)]
    EmptyAirport(#[from] InvalidAirport),
}

/// A one-way ticket from `origin` to `destination`.
///
/// Each ticket is a single directed edge that an itinerary must use exactly
/// once. Self-loops (`origin == destination`) are allowed.
#[derive(Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Ticket {
    pub origin: Airport,
    pub destination: Airport,
}

impl Ticket {
    /// Create a ticket from two already-validated airports.
    pub fn new(origin: Airport, destination: Airport) -> Self {
        Self {
            origin,
            destination,
        }
    }

    /// Build a ticket from raw fields, as received on the wire.
    ///
    /// # Examples
    ///
    /// ```
    /// use itinerary_server::domain::{InvalidTicket, Ticket};
    ///
    /// let ticket = Ticket::from_fields(&["JFK", "SFO"]).unwrap();
    /// assert_eq!(ticket.origin.as_str(), "JFK");
    ///
    /// assert_eq!(
    ///     Ticket::from_fields(&["JFK"]),
    ///     Err(InvalidTicket::WrongArity(1))
    /// );
    /// ```
    pub fn from_fields<S: AsRef<str>>(fields: &[S]) -> Result<Self, InvalidTicket> {
        let [origin, destination] = fields else {
            return Err(InvalidTicket::WrongArity(fields.len()));
        };
        Ok(Self::new(
            Airport::parse(origin.as_ref())?,
            Airport::parse(destination.as_ref())?,
        ))
    }
}

impl fmt::Debug for Ticket {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Ticket({} -> {})", self.origin, self.destination)
    }
}

impl fmt::Display for Ticket {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} -> {}", self.origin, self.destination)
    }
}
