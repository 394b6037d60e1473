//! Core type definitions for the transport network graph
//!
//! Arena handles are plain indices into the tables owned by
//! [`TransportNetwork`](super::TransportNetwork). They are only meaningful
//! for the network that issued them.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A station, line, or route identifier.
pub type Id = String;

/// Handle of a station node in the network arena
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct StationIdx(pub usize);

impl StationIdx {
    pub fn new(idx: usize) -> Self {
        StationIdx(idx)
    }

    pub fn index(&self) -> usize {
        self.0
    }
}

impl fmt::Display for StationIdx {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "StationIdx({})", self.0)
    }
}

/// Handle of a directed edge in the network arena
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct EdgeIdx(pub usize);

impl EdgeIdx {
    pub fn new(idx: usize) -> Self {
        EdgeIdx(idx)
    }

    pub fn index(&self) -> usize {
        self.0
    }
}

impl fmt::Display for EdgeIdx {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "EdgeIdx({})", self.0)
    }
}

/// Handle of a route in the network arena
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct RouteIdx(pub usize);

impl RouteIdx {
    pub fn new(idx: usize) -> Self {
        RouteIdx(idx)
    }

    pub fn index(&self) -> usize {
        self.0
    }
}

/// Handle of a line in the network arena
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct LineIdx(pub usize);

impl LineIdx {
    pub fn new(idx: usize) -> Self {
        LineIdx(idx)
    }

    pub fn index(&self) -> usize {
        self.0
    }
}

/// Direction of travel between two stops of the same route.
///
/// `Outbound` follows the route's stop order, `Inbound` walks against it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    Outbound,
    Inbound,
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Direction::Outbound => write!(f, "outbound"),
            Direction::Inbound => write!(f, "inbound"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_station_idx() {
        let idx = StationIdx::new(42);
        assert_eq!(idx.index(), 42);
        assert_eq!(format!("{}", idx), "StationIdx(42)");
    }

    #[test]
    fn test_edge_idx() {
        let idx = EdgeIdx::new(7);
        assert_eq!(idx.index(), 7);
        assert_eq!(format!("{}", idx), "EdgeIdx(7)");
    }

    #[test]
    #[cfg(target_pointer_width = "64")]
    fn test_idx_keeps_large_index() {
        let big = u32::MAX as usize + 1;
        assert_eq!(StationIdx::new(big).index(), big);
        assert_eq!(EdgeIdx::new(big).index(), big);
    }

    #[test]
    fn test_idx_ordering() {
        assert!(RouteIdx::new(1) < RouteIdx::new(2));
        assert!(LineIdx::new(0) < LineIdx::new(3));
    }

    #[test]
    fn test_direction_display() {
        assert_eq!(Direction::Outbound.to_string(), "outbound");
        assert_eq!(Direction::Inbound.to_string(), "inbound");
    }
}
