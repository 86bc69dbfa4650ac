//! Airport code type.

use std::fmt;

/// Error returned when parsing an invalid airport code.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid airport code: must not be empty")]
pub struct InvalidAirport;

/// An airport code as it appears on a ticket.
///
/// Codes are opaque, non-empty text tokens. No IATA/ICAO format is enforced,
/// so `"JFK"`, `"EGLL"` and `"x"` are all accepted. Ordering is byte-wise
/// string ordering, which is what decides between competing itineraries.
///
/// # Examples
///
/// ```
/// use itinerary_server::domain::Airport;
///
/// let jfk = Airport::parse("JFK").unwrap();
/// assert_eq!(jfk.as_str(), "JFK");
///
/// // Empty codes are rejected
/// assert!(Airport::parse("").is_err());
///
/// // Ordering is lexicographic
/// assert!(Airport::parse("ATL").unwrap() < jfk);
/// ```
#[derive(Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Airport(String);

impl Airport {
    /// Parse an airport code from a string.
    pub fn parse(s: &str) -> Result<Self, InvalidAirport> {
        if s.is_empty() {
            return Err(InvalidAirport);
        }
        Ok(Airport(s.to_owned()))
    }

    /// Returns the airport code as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Consumes the airport, returning the owned code.
    pub fn into_string(self) -> String {
        self.0
    }
}

impl fmt::Debug for Airport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Airport({})", self.0)
    }
}

impl fmt::Display for Airport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        /// Any non-empty string is a valid code and survives unchanged
        #[test]
        fn roundtrip(s in ".{1,8}") {
            let airport = Airport::parse(&s).unwrap();
            prop_assert_eq!(airport.as_str(), s.as_str());
        }

        /// Airport ordering agrees with string ordering
        #[test]
        fn ordering_matches_str(a in "[A-Z]{1,4}", b in "[A-Z]{1,4}") {
            let x = Airport::parse(&a).unwrap();
            let y = Airport::parse(&b).unwrap();
            prop_assert_eq!(x.cmp(&y), a.cmp(&b));
        }
    }
}
