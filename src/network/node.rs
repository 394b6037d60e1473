//! Station node of the network graph

use super::types::{EdgeIdx, Id, StationIdx};
use indexmap::IndexMap;

/// A station in the network graph
///
/// Nodes are created by `add_station` and live as long as the network.
/// Neighbours are keyed by their arena handle:
/// - `outbound`: edges leaving this station, keyed by destination
/// - `inbound`: edges arriving at this station, keyed by origin
#[derive(Debug, Clone)]
pub struct GraphNode {
    pub id: Id,
    pub name: String,

    /// Edges leaving this station (neighbour -> edge)
    pub outbound: IndexMap<StationIdx, EdgeIdx>,

    /// Edges arriving at this station (neighbour -> edge)
    pub inbound: IndexMap<StationIdx, EdgeIdx>,

    /// Passengers currently recorded at the station. Can be negative when
    /// monitoring starts with passengers already inside.
    pub passenger_count: i64,
}

impl GraphNode {
    pub fn new(id: impl Into<Id>, name: impl Into<String>) -> Self {
        GraphNode {
            id: id.into(),
            name: name.into(),
            outbound: IndexMap::new(),
            inbound: IndexMap::new(),
            passenger_count: 0,
        }
    }

    /// Edge towards `neighbour`, if any
    pub fn outbound_edge(&self, neighbour: StationIdx) -> Option<EdgeIdx> {
        self.outbound.get(&neighbour).copied()
    }

    /// Edge from `neighbour`, if any
    pub fn inbound_edge(&self, neighbour: StationIdx) -> Option<EdgeIdx> {
        self.inbound.get(&neighbour).copied()
    }

    /// Every edge touching this station, outbound first.
    pub fn incident_edges(&self) -> impl Iterator<Item = EdgeIdx> + '_ {
        self.outbound.values().chain(self.inbound.values()).copied()
    }
}
