//! Reconstructed itineraries.

use std::fmt;

use super::{Airport, Ticket};

/// An ordered sequence of airports visited by following tickets.
///
/// A non-empty itinerary built from `n` tickets has `n + 1` stops. An empty
/// itinerary is the result of reconstructing from no tickets.
#[derive(Clone, Default, PartialEq, Eq, PartialOrd, Ord)]
pub struct Itinerary {
    stops: Vec<Airport>,
}

impl Itinerary {
    /// Create an itinerary from its stops in travel order.
    pub fn new(stops: Vec<Airport>) -> Self {
        Self { stops }
    }

    /// The airports in travel order.
    pub fn stops(&self) -> &[Airport] {
        &self.stops
    }

    /// Number of stops (not legs).
    pub fn len(&self) -> usize {
        self.stops.len()
    }

    pub fn is_empty(&self) -> bool {
        self.stops.is_empty()
    }

    /// Number of tickets this itinerary uses.
    pub fn leg_count(&self) -> usize {
        self.stops.len().saturating_sub(1)
    }

    /// The first airport, if any.
    pub fn departure(&self) -> Option<&Airport> {
        self.stops.first()
    }

    /// The last airport, if any.
    pub fn arrival(&self) -> Option<&Airport> {
        self.stops.last()
    }

    /// The tickets used, as consecutive (from, to) pairs.
    pub fn legs(&self) -> impl Iterator<Item = Ticket> + '_ {
        self.stops
            .windows(2)
            .map(|pair| Ticket::new(pair[0].clone(), pair[1].clone()))
    }

    /// Consumes the itinerary, returning the airport codes as strings.
    pub fn into_codes(self) -> Vec<String> {
        self.stops.into_iter().map(Airport::into_string).collect()
    }
}

impl fmt::Debug for Itinerary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.stops.iter().map(Airport::as_str)).finish()
    }
}

impl fmt::Display for Itinerary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, stop) in self.stops.iter().enumerate() {
            if i > 0 {
                f.write_str(" -> ")?;
            }
            write!(f, "{stop}")?;
        }
        Ok(())
    }
}
