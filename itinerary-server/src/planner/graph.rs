//! Directed flight multigraph and Hierholzer traversal.

use std::collections::BTreeMap;

use tracing::trace;

use crate::domain::{Airport, Itinerary, Ticket};

/// A directed multigraph with one edge per ticket.
///
/// Airports are interned into a sorted table, and edges refer to airports by
/// their index in that table. Because the table is sorted, sorting an
/// adjacency list by index is the same as sorting it by airport code.
///
/// The graph is immutable once built. Edge consumption happens in
/// [`FlightGraph::walk_from`], which keeps its own cursors.
#[derive(Debug, Clone, Default)]
pub struct FlightGraph {
    /// Every distinct airport, ascending.
    airports: Vec<Airport>,

    /// Destinations reachable by one ticket, per airport, ascending.
    /// Duplicate tickets and self-loops appear as repeated entries.
    departures: Vec<Vec<usize>>,

    /// Number of tickets landing at each airport.
    in_degree: Vec<usize>,

    ticket_count: usize,
}

/// Outcome of walking the graph from one airport.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Walk {
    /// Airports in travel order.
    pub itinerary: Itinerary,

    /// Tickets consumed by the walk.
    pub tickets_used: usize,

    /// Legs of the itinerary that no consumed ticket covers.
    ///
    /// When the tickets don't form an Eulerian path the walk can strand
    /// itself, and splicing the pieces back together joins two airports
    /// no ticket connects. Always zero for a valid path or circuit.
    pub broken_legs: usize,
}

impl FlightGraph {
    /// Build the graph from a set of tickets.
    pub fn build(tickets: &[Ticket]) -> Self {
        let mut index: BTreeMap<&Airport, usize> = tickets
            .iter()
            .flat_map(|t| [(&t.origin, 0), (&t.destination, 0)])
            .collect();
        for (idx, slot) in index.values_mut().enumerate() {
            *slot = idx;
        }

        let airports: Vec<Airport> = index.keys().map(|&a| a.clone()).collect();
        let mut departures = vec![Vec::new(); airports.len()];
        let mut in_degree = vec![0; airports.len()];

        for ticket in tickets {
            let (from, to) = (index[&ticket.origin], index[&ticket.destination]);
            departures[from].push(to);
            in_degree[to] += 1;
        }

        for destinations in &mut departures {
            destinations.sort_unstable();
        }

        Self {
            airports,
            departures,
            in_degree,
            ticket_count: tickets.len(),
        }
    }

    /// All distinct airports, ascending.
    pub fn airports(&self) -> &[Airport] {
        &self.airports
    }

    /// Number of tickets the graph was built from.
    pub fn ticket_count(&self) -> usize {
        self.ticket_count
    }

    pub fn is_empty(&self) -> bool {
        self.airports.is_empty()
    }

    /// Tickets departing from `airport`.
    pub fn out_degree(&self, airport: &Airport) -> usize {
        self.index_of(airport)
            .map_or(0, |idx| self.departures[idx].len())
    }

    /// Tickets landing at `airport`.
    pub fn in_degree(&self, airport: &Airport) -> usize {
        self.index_of(airport).map_or(0, |idx| self.in_degree[idx])
    }

    /// Choose the airport the itinerary should start from.
    ///
    /// The open end of an Eulerian path is the airport with more departures
    /// than arrivals. If several airports qualify (no single path exists)
    /// the smallest code wins. If none qualify the tickets form a circuit
    /// and the smallest airport overall is used. Returns `None` for an
    /// empty graph.
    pub fn start_airport(&self) -> Option<&Airport> {
        self.start_index().map(|idx| &self.airports[idx])
    }

    fn start_index(&self) -> Option<usize> {
        (0..self.airports.len())
            .find(|&idx| self.departures[idx].len() > self.in_degree[idx])
            .or_else(|| (!self.airports.is_empty()).then_some(0))
    }

    /// Walk every ticket reachable from `start`, smallest destination first.
    ///
    /// This is Hierholzer's algorithm with an explicit stack. Each airport
    /// keeps a cursor into its sorted departures; taking a ticket advances
    /// the cursor. An airport is emitted once it has no tickets left, so the
    /// route comes out in reverse and is flipped at the end.
    ///
    /// Tickets not reachable from `start` are not used. Returns an empty
    /// walk if `start` is not in the graph.
    pub fn walk_from(&self, start: &Airport) -> Walk {
        match self.index_of(start) {
            Some(idx) => self.walk_from_index(idx),
            None => Walk {
                itinerary: Itinerary::default(),
                tickets_used: 0,
                broken_legs: 0,
            },
        }
    }

    fn walk_from_index(&self, start: usize) -> Walk {
        let mut cursors = vec![0usize; self.airports.len()];
        let mut stack = vec![start];
        let mut route = Vec::with_capacity(self.ticket_count + 1);

        // The airport that must be emitted next for the last emitted leg to
        // be the ticket that was actually taken.
        let mut expected: Option<usize> = None;
        let mut broken_legs = 0;

        while let Some(&current) = stack.last() {
            let cursor = &mut cursors[current];
            match self.departures[current].get(*cursor) {
                Some(&next) => {
                    *cursor += 1;
                    trace!(
                        from = %self.airports[current],
                        to = %self.airports[next],
                        "Using ticket"
                    );
                    stack.push(next);
                }
                None => {
                    stack.pop();
                    if expected.is_some_and(|idx| idx != current) {
                        trace!(at = %self.airports[current], "Walk stranded; splicing");
                        broken_legs += 1;
                    }
                    expected = stack.last().copied();
                    route.push(self.airports[current].clone());
                }
            }
        }

        route.reverse();
        Walk {
            itinerary: Itinerary::new(route),
            tickets_used: cursors.iter().sum(),
            broken_legs,
        }
    }

    fn index_of(&self, airport: &Airport) -> Option<usize> {
        self.airports.binary_search(airport).ok()
    }
}
