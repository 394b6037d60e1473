//! Transport network graph
//!
//! This module implements the network model:
//! - Stations as graph nodes with a live passenger counter
//! - Directed edges between consecutive stops, shared by every route using them
//! - Lines and routes keeping their ordered stop sequences
//! - Travel times per edge and cumulative travel times along a route

pub mod descriptor;
pub mod edge;
pub mod node;
pub mod passengers;
pub mod query;
pub mod route;
pub mod store;
pub mod travel_time;
pub mod types;

// Re-export main types
pub use descriptor::{Line, PassengerEvent, PassengerEventType, Route, Station};
pub use edge::GraphEdge;
pub use node::GraphNode;
pub use store::{NetworkError, NetworkResult, NetworkStatistics, TransportNetwork};
pub use types::{Direction, EdgeIdx, Id, LineIdx, RouteIdx, StationIdx};
