//! Route queries over the built network

use super::route::RouteInternal;
use super::store::TransportNetwork;
use super::types::Direction;
use indexmap::IndexSet;

impl TransportNetwork {
    /// Ids of every route that stops at a station.
    ///
    /// Collects the routes of every edge leaving or reaching the station,
    /// each id once. An unknown station has no routes.
    pub fn routes_serving_station(&self, station: &str) -> Vec<&str> {
        let Some(idx) = self.station_idx(station) else {
            return Vec::new();
        };

        let routes: IndexSet<_> = self
            .node(idx)
            .incident_edges()
            .flat_map(|edge| self.edge(edge).routes.iter().copied())
            .collect();

        routes
            .into_iter()
            .map(|route| self.route(route).id.as_str())
            .collect()
    }

    /// Zero-based position of a station in a route's stop sequence, or
    /// `None` if the route does not exist or does not stop there.
    pub fn stop_position(&self, station: &str, route_id: &str) -> Option<usize> {
        let route = self.route_by_id(route_id)?;
        let idx = self.station_idx(station)?;
        route.position(idx)
    }

    /// Zero-based position of a station in a route's stop sequence.
    ///
    /// A station that is not on the route also reports 0, the same as the
    /// first stop. Use [`stop_position`](Self::stop_position) to tell them
    /// apart.
    pub fn stop_number_on_route(&self, station: &str, route_id: &str) -> usize {
        self.stop_position(station, route_id).unwrap_or(0)
    }

    /// Direction of travel from `station_a` to `station_b` on a route.
    ///
    /// Stations are compared by [`stop_number_on_route`](Self::stop_number_on_route);
    /// `Outbound` when `station_a` does not come after `station_b`.
    pub fn direction_between_stops(
        &self,
        station_a: &str,
        station_b: &str,
        route_id: &str,
    ) -> Direction {
        Self::direction_between_positions(
            self.stop_number_on_route(station_a, route_id),
            self.stop_number_on_route(station_b, route_id),
        )
    }

    pub(super) fn stop_position_in(&self, route: &RouteInternal, station: &str) -> usize {
        self.station_idx(station)
            .and_then(|idx| route.position(idx))
            .unwrap_or(0)
    }

    pub(super) fn direction_between_positions(pos_a: usize, pos_b: usize) -> Direction {
        if pos_a <= pos_b {
            Direction::Outbound
        } else {
            Direction::Inbound
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::network::{Direction, Id, Line, Route, Station, TransportNetwork};

    fn stops(ids: &[&str]) -> Vec<Id> {
        ids.iter().map(|s| s.to_string()).collect()
    }

    /// Line l1 with r1 = a b c d and r2 = d c b a, plus an isolated station x.
    fn network() -> TransportNetwork {
        let mut network = TransportNetwork::new();
        for id in ["a", "b", "c", "d", "x"] {
            network.add_station(&Station::new(id, id.to_uppercase())).unwrap();
        }
        let r1 = Route::new("r1", "outbound", "l1", stops(&["a", "b", "c", "d"]));
        let r2 = Route::new("r2", "inbound", "l1", stops(&["d", "c", "b", "a"]));
        network.add_line(&Line::new("l1", "Line 1", vec![r1, r2])).unwrap();
        network
    }

    #[test]
    fn test_routes_serving_station_deduplicates() {
        let network = network();
        let mut routes = network.routes_serving_station("b");
        routes.sort_unstable();
        assert_eq!(routes, vec!["r1", "r2"]);
    }

    #[test]
    fn test_routes_serving_terminus() {
        let network = network();
        let mut routes = network.routes_serving_station("a");
        routes.sort_unstable();
        assert_eq!(routes, vec!["r1", "r2"]);
    }

    #[test]
    fn test_routes_serving_isolated_or_unknown_station() {
        let network = network();
        assert!(network.routes_serving_station("x").is_empty());
        assert!(network.routes_serving_station("nowhere").is_empty());
    }

    #[test]
    fn test_routes_from_separate_lines() {
        let mut network = network();
        let r3 = Route::new("r3", "outbound", "l2", stops(&["x", "b"]));
        network.add_line(&Line::new("l2", "Line 2", vec![r3])).unwrap();

        let mut routes = network.routes_serving_station("b");
        routes.sort_unstable();
        assert_eq!(routes, vec!["r1", "r2", "r3"]);
        assert_eq!(network.routes_serving_station("x"), vec!["r3"]);
    }

    #[test]
    fn test_stop_numbers() {
        let network = network();
        assert_eq!(network.stop_number_on_route("a", "r1"), 0);
        assert_eq!(network.stop_number_on_route("c", "r1"), 2);
        assert_eq!(network.stop_number_on_route("c", "r2"), 1);
        assert_eq!(network.stop_number_on_route("x", "r1"), 0);
        assert_eq!(network.stop_number_on_route("a", "nope"), 0);
    }

    #[test]
    fn test_stop_position_is_unambiguous() {
        let network = network();
        assert_eq!(network.stop_position("a", "r1"), Some(0));
        assert_eq!(network.stop_position("x", "r1"), None);
        assert_eq!(network.stop_position("a", "nope"), None);
    }

    #[test]
    fn test_direction_between_stops() {
        let network = network();
        assert_eq!(network.direction_between_stops("a", "c", "r1"), Direction::Outbound);
        assert_eq!(network.direction_between_stops("c", "b", "r1"), Direction::Inbound);
        assert_eq!(network.direction_between_stops("a", "c", "r2"), Direction::Inbound);
        assert_eq!(network.direction_between_stops("b", "b", "r1"), Direction::Outbound);
    }

    #[test]
    fn test_direction_with_station_off_route() {
        let network = network();
        // Off-route stations share position 0 with the first stop.
        assert_eq!(network.direction_between_stops("x", "a", "r1"), Direction::Outbound);
        assert_eq!(network.direction_between_stops("b", "x", "r1"), Direction::Inbound);
    }
}
