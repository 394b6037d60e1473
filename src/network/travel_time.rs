//! Travel-time index
//!
//! Travel times are stored on edges. A physical track segment takes the
//! same time in both directions, so setting a time writes both `A -> B`
//! and `B -> A` when they exist.

use super::route::RouteInternal;
use super::store::{NetworkError, NetworkResult, TransportNetwork};
use super::types::{Direction, StationIdx};
use crate::config::InboundTravelTime;
use tracing::debug;

impl TransportNetwork {
    /// Set the travel time between two adjacent stations.
    ///
    /// Fails if no route has the two stations as consecutive stops, in
    /// either order.
    pub fn set_travel_time(
        &mut self,
        station_a: &str,
        station_b: &str,
        travel_time: u32,
    ) -> NetworkResult<()> {
        let edges = match (self.station_idx(station_a), self.station_idx(station_b)) {
            (Some(a), Some(b)) => {
                let node = self.node(a);
                [node.outbound_edge(b), node.inbound_edge(b)]
            }
            _ => [None, None],
        };

        if edges.iter().all(Option::is_none) {
            debug!(
                "Rejected travel time {} <-> {}: not adjacent",
                station_a, station_b
            );
            return Err(NetworkError::NoAdjacency(
                station_a.to_string(),
                station_b.to_string(),
            ));
        }

        for edge in edges.into_iter().flatten() {
            self.edges[edge.index()].travel_time = travel_time;
        }

        debug!(
            "Set travel time {} <-> {} to {}",
            station_a, station_b, travel_time
        );
        Ok(())
    }

    /// Travel time between two adjacent stations.
    ///
    /// Returns 0 when both ids are the same station, when the stations are
    /// not adjacent, or when no time was set.
    pub fn travel_time(&self, station_a: &str, station_b: &str) -> u32 {
        if station_a == station_b {
            return 0;
        }
        match (self.station_idx(station_a), self.station_idx(station_b)) {
            (Some(a), Some(b)) => self.adjacent_travel_time(a, b),
            _ => 0,
        }
    }

    /// Total travel time between two stops of a route.
    ///
    /// Sums the adjacent travel times of every segment from `station_a` to
    /// `station_b` in route order. Returns 0 when the two ids are equal or
    /// when `route_id` is not a route of `line_id`.
    ///
    /// A station missing from the route counts as the route's first stop.
    /// If `station_a` comes after `station_b` the answer depends on
    /// [`InboundTravelTime`]: 0 by default, or the sum of the same segments
    /// walked backwards.
    pub fn route_travel_time(
        &self,
        line_id: &str,
        route_id: &str,
        station_a: &str,
        station_b: &str,
    ) -> u32 {
        if station_a == station_b {
            return 0;
        }
        let Some(route) = self.route_on_line(line_id, route_id) else {
            return 0;
        };

        let pos_a = self.stop_position_in(route, station_a);
        let pos_b = self.stop_position_in(route, station_b);

        match Self::direction_between_positions(pos_a, pos_b) {
            Direction::Outbound => self.sum_segments(route, pos_a, pos_b),
            Direction::Inbound => match self.config.inbound_travel_time {
                InboundTravelTime::Zero => 0,
                InboundTravelTime::ReverseSum => self.sum_segments(route, pos_b, pos_a),
            },
        }
    }

    pub(super) fn adjacent_travel_time(&self, a: StationIdx, b: StationIdx) -> u32 {
        if a == b {
            return 0;
        }
        let node = self.node(a);
        node.outbound_edge(b)
            .or_else(|| node.inbound_edge(b))
            .map(|edge| self.edge(edge).travel_time)
            .unwrap_or(0)
    }

    /// Sum of segment times between stop positions `from <= to`.
    fn sum_segments(&self, route: &RouteInternal, from: usize, to: usize) -> u32 {
        route.stops[from..=to]
            .windows(2)
            .map(|pair| self.adjacent_travel_time(pair[0], pair[1]))
            .fold(0, u32::saturating_add)
    }
}
