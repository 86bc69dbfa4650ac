//! Itinerary reconstruction entry points.

use tracing::debug;

use super::graph::{FlightGraph, Walk};
use crate::domain::{InvalidTicket, Itinerary, Ticket};

/// Errors that prevent reconstruction from starting.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ReconstructError {
    /// A raw ticket could not be turned into a [`Ticket`].
    #[error("ticket {index}: {source}")]
    InvalidTicket {
        index: usize,
        #[source]
        source: InvalidTicket,
    },
}

/// Result of reconstructing an itinerary.
///
/// When the tickets don't form a single Eulerian path the itinerary is
/// best-effort: tickets unreachable from the chosen start are left out, and
/// pieces of the walk may be joined by legs no ticket covers.
/// `tickets_used` and `broken_legs` make that visible.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Reconstruction {
    pub itinerary: Itinerary,
    pub tickets_used: usize,
    pub tickets_total: usize,
    pub broken_legs: usize,
}

impl Reconstruction {
    /// Returns true if the itinerary uses every ticket and only tickets.
    pub fn is_complete(&self) -> bool {
        self.tickets_used == self.tickets_total && self.broken_legs == 0
    }

    /// Number of tickets left out of the itinerary.
    pub fn tickets_dropped(&self) -> usize {
        self.tickets_total - self.tickets_used
    }
}

/// Reconstruct the lexicographically smallest itinerary from `tickets`.
///
/// # Examples
///
/// ```
/// use itinerary_server::domain::Ticket;
/// use itinerary_server::planner::reconstruct;
///
/// let tickets: Vec<Ticket> = [["MUC", "LHR"], ["JFK", "MUC"], ["SFO", "SJC"], ["LHR", "SFO"]]
///     .iter()
///     .map(|pair| Ticket::from_fields(pair).unwrap())
///     .collect();
///
/// let result = reconstruct(&tickets);
/// assert!(result.is_complete());
/// assert_eq!(
///     result.itinerary.into_codes(),
///     vec!["JFK", "MUC", "LHR", "SFO", "SJC"]
/// );
/// ```
pub fn reconstruct(tickets: &[Ticket]) -> Reconstruction {
    let graph = FlightGraph::build(tickets);

    let Walk {
        itinerary,
        tickets_used,
        broken_legs,
    } = match graph.start_airport() {
        Some(start) => {
            debug!(
                airports = graph.airports().len(),
                tickets = graph.ticket_count(),
                start = %start,
                out_degree = graph.out_degree(start),
                in_degree = graph.in_degree(start),
                "Reconstructing itinerary"
            );
            graph.walk_from(start)
        }
        None => Walk {
            itinerary: Itinerary::default(),
            tickets_used: 0,
            broken_legs: 0,
        },
    };

    Reconstruction {
        itinerary,
        tickets_used,
        tickets_total: tickets.len(),
        broken_legs,
    }
}

/// Validate raw `[origin, destination]` pairs and reconstruct from them.
///
/// Fails on the first pair that isn't exactly two non-empty codes.
pub fn reconstruct_pairs<P, S>(pairs: &[P]) -> Result<Reconstruction, ReconstructError>
where
    P: AsRef<[S]>,
    S: AsRef<str>,
{
    let tickets = pairs
        .iter()
        .enumerate()
        .map(|(index, pair)| {
            Ticket::from_fields(pair.as_ref())
                .map_err(|source| ReconstructError::InvalidTicket { index, source })
        })
        .collect::<Result<Vec<_>, _>>()?;

    Ok(reconstruct(&tickets))
}


#[cfg(test)]
mod proptests {
    use super::*;
    use crate::domain::Airport;
    use proptest::prelude::*;

    fn airport(s: &str) -> Airport {
        Airport::parse(s).unwrap()
    }

    /// A random walk over a small alphabet, cut into shuffled tickets.
    ///
    /// The tickets always admit at least one Eulerian path.
    fn walk_tickets() -> impl Strategy<Value = Vec<Ticket>> {
        prop::collection::vec("[A-E]", 2..10).prop_flat_map(|stops| {
            let tickets: Vec<Ticket> = stops
                .windows(2)
                .map(|w| Ticket::new(airport(&w[0]), airport(&w[1])))
                .collect();
            Just(tickets).prop_shuffle()
        })
    }

    /// Arbitrary tickets over a small alphabet, possibly disconnected.
    fn any_tickets() -> impl Strategy<Value = Vec<Ticket>> {
        prop::collection::vec(("[A-D]", "[A-D]"), 0..7).prop_map(|pairs| {
            pairs
                .iter()
                .map(|(from, to)| Ticket::new(airport(from), airport(to)))
                .collect()
        })
    }

    fn sorted(mut tickets: Vec<Ticket>) -> Vec<Ticket> {
        tickets.sort();
        tickets
    }

    /// Smallest itinerary using every ticket, by exhaustive search.
    fn brute_force_smallest(tickets: &[Ticket]) -> Option<Itinerary> {
        fn extend(
            tickets: &[Ticket],
            used: &mut Vec<bool>,
            route: &mut Vec<Airport>,
            best: &mut Option<Itinerary>,
        ) {
            if route.len() == tickets.len() + 1 {
                let candidate = Itinerary::new(route.clone());
                if best.as_ref().is_none_or(|b| candidate < *b) {
                    *best = Some(candidate);
                }
                return;
            }
            let Some(here) = route.last().cloned() else {
                return;
            };
            for i in 0..tickets.len() {
                if !used[i] && tickets[i].origin == here {
                    used[i] = true;
                    route.push(tickets[i].destination.clone());
                    extend(tickets, used, route, best);
                    route.pop();
                    used[i] = false;
                }
            }
        }

        let mut best = None;
        let mut used = vec![false; tickets.len()];
        for ticket in tickets {
            let mut route = vec![ticket.origin.clone()];
            extend(tickets, &mut used, &mut route, &mut best);
        }
        best
    }

    proptest! {
        /// Every ticket is used exactly once on a valid path
        #[test]
        fn uses_every_ticket_once(tickets in walk_tickets()) {
            let result = reconstruct(&tickets);
            prop_assert!(result.is_complete());
            prop_assert_eq!(result.itinerary.len(), tickets.len() + 1);

            let legs: Vec<Ticket> = result.itinerary.legs().collect();
            prop_assert_eq!(sorted(legs), sorted(tickets));
        }

        /// Supplying tickets in a different order gives the same itinerary
        #[test]
        fn order_independent(
            (tickets, shuffled) in any_tickets()
                .prop_flat_map(|t| (Just(t.clone()), Just(t).prop_shuffle()))
        ) {
            prop_assert_eq!(reconstruct(&tickets), reconstruct(&shuffled));
        }

        /// The result is the smallest Eulerian path whenever one exists
        #[test]
        fn smallest_valid_itinerary(tickets in any_tickets()) {
            if let Some(expected) = brute_force_smallest(&tickets) {
                let result = reconstruct(&tickets);
                prop_assert!(result.is_complete());
                prop_assert_eq!(result.itinerary, expected);
            }
        }

        /// A complete result is exactly the tickets, so it is a valid path
        #[test]
        fn complete_means_every_leg_is_a_ticket(tickets in any_tickets()) {
            let result = reconstruct(&tickets);
            if result.is_complete() {
                let legs: Vec<Ticket> = result.itinerary.legs().collect();
                prop_assert_eq!(sorted(legs), sorted(tickets));
            }
        }

        /// An unbroken walk only ever uses real tickets
        #[test]
        fn unbroken_legs_are_tickets(tickets in any_tickets()) {
            let result = reconstruct(&tickets);
            prop_assert!(result.tickets_used <= result.tickets_total);
            prop_assert_eq!(result.itinerary.leg_count(), result.tickets_used);
            if result.broken_legs == 0 {
                let mut remaining = tickets.clone();
                for leg in result.itinerary.legs() {
                    let pos = remaining.iter().position(|t| *t == leg);
                    prop_assert!(pos.is_some(), "leg {} not among tickets", leg);
                    if let Some(pos) = pos {
                        remaining.swap_remove(pos);
                    }
                }
                prop_assert_eq!(remaining.len(), result.tickets_dropped());
            }
        }

        /// If any valid path exists the result is complete, and vice versa
        #[test]
        fn complete_iff_path_exists(tickets in any_tickets()) {
            let result = reconstruct(&tickets);
            let exists = tickets.is_empty() || brute_force_smallest(&tickets).is_some();
            prop_assert_eq!(result.is_complete(), exists);
        }
    }
}
