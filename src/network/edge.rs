//! Directed edge between two adjacent stations
//!
//! Two stations that are consecutive stops on at least one route get one
//! edge in each direction. Routes sharing the same adjacency share the
//! edges, which record the union of their ids.

use super::types::{RouteIdx, StationIdx};
use indexmap::IndexSet;

/// A directed adjacency `from -> to`
#[derive(Debug, Clone)]
pub struct GraphEdge {
    /// Origin station (edge goes FROM this node)
    pub from: StationIdx,

    /// Destination station (edge goes TO this node)
    pub to: StationIdx,

    /// Routes travelling over this adjacency, in insertion order
    pub routes: IndexSet<RouteIdx>,

    /// Travel time in seconds; 0 means unset
    pub travel_time: u32,
}

impl GraphEdge {
    pub fn new(from: StationIdx, to: StationIdx) -> Self {
        GraphEdge {
            from,
            to,
            routes: IndexSet::new(),
            travel_time: 0,
        }
    }

    /// Record that `route` uses this adjacency. Returns false if it was
    /// already recorded.
    pub fn add_route(&mut self, route: RouteIdx) -> bool {
        self.routes.insert(route)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_edge_has_no_travel_time() {
        let edge = GraphEdge::new(StationIdx::new(0), StationIdx::new(1));
        assert_eq!(edge.travel_time, 0);
        assert!(edge.routes.is_empty());
    }

    #[test]
    fn test_add_route_is_a_set() {
        let mut edge = GraphEdge::new(StationIdx::new(0), StationIdx::new(1));
        assert!(edge.add_route(RouteIdx::new(3)));
        assert!(edge.add_route(RouteIdx::new(1)));
        assert!(!edge.add_route(RouteIdx::new(3)));

        let routes: Vec<_> = edge.routes.iter().copied().collect();
        assert_eq!(routes, vec![RouteIdx::new(3), RouteIdx::new(1)]);
    }
}
