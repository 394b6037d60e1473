//! Network Monitor
//!
//! An in-memory model of a transit network (stations, lines, routes) that
//! tracks live passenger counts per station and answers travel-time queries
//! along routes.
//!
//! # Architecture
//!
//! - [`network`]: the graph itself. Stations, edges, routes, and lines are
//!   stored in arenas owned by [`TransportNetwork`] and refer to each other
//!   through integer handles.
//! - [`ingest`]: adapters turning a parsed network layout document or a live
//!   passenger event message into calls against the network.
//! - [`config`]: behaviour switches, loadable from YAML.
//!
//! The library performs no I/O and installs no logging subscriber; it emits
//! `tracing` events that the embedding application may collect.
//!
//! ## Example Usage
//!
//! ```rust
//! use network_monitor::{Line, PassengerEvent, PassengerEventType, Route, Station, TransportNetwork};
//!
//! let mut network = TransportNetwork::new();
//! for id in ["s1", "s2", "s3"] {
//!     network.add_station(&Station::new(id, id)).unwrap();
//! }
//!
//! let stops = vec!["s1".to_string(), "s2".to_string(), "s3".to_string()];
//! let route = Route::new("R1", "outbound", "L1", stops);
//! network.add_line(&Line::new("L1", "Line 1", vec![route])).unwrap();
//!
//! network.set_travel_time("s1", "s2", 3).unwrap();
//! network.set_travel_time("s2", "s3", 4).unwrap();
//! assert_eq!(network.route_travel_time("L1", "R1", "s1", "s3"), 7);
//!
//! network.record_passenger_event(&PassengerEvent::new("s2", PassengerEventType::In)).unwrap();
//! assert_eq!(network.passenger_count("s2"), Ok(1));
//! assert_eq!(network.routes_serving_station("s2"), vec!["R1"]);
//! ```

#![allow(missing_docs)]
#![warn(clippy::all)]

pub mod config;
pub mod ingest;
pub mod network;

// Re-export main types for convenience
pub use config::{ConfigError, ConfigResult, InboundTravelTime, NetworkConfig};

pub use network::{
    Direction, Id, Line, NetworkError, NetworkResult, NetworkStatistics, PassengerEvent,
    PassengerEventType, Route, Station, TransportNetwork,
};

pub use ingest::{
    IngestError, IngestResult, NetworkLayout, PassengerEventMessage, TravelTimeEntry,
};

/// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Get version string
pub fn version() -> &'static str {
    VERSION
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version() {
        let ver = version();
        assert!(!ver.is_empty());
        assert_eq!(ver, "0.1.0");
    }
}
