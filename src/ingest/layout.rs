//! Network layout ingestion
//!
//! ```json
//! {
//!   "stations": [ {"station_id": "...", "name": "..."} ],
//!   "lines": [ {"line_id": "...", "name": "...", "routes": [ ... ]} ],
//!   "travel_times": [
//!     {"start_station_id": "...", "end_station_id": "...", "travel_time": 2}
//!   ]
//! }
//! ```

use super::IngestResult;
use crate::config::NetworkConfig;
use crate::network::{Id, Line, Station, TransportNetwork};
use serde::{Deserialize, Serialize};
use tracing::info;

/// Travel time between two adjacent stations
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TravelTimeEntry {
    pub start_station_id: Id,
    pub end_station_id: Id,
    pub travel_time: u32,
}

/// A parsed network layout document
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct NetworkLayout {
    pub stations: Vec<Station>,
    pub lines: Vec<Line>,
    pub travel_times: Vec<TravelTimeEntry>,
}

impl NetworkLayout {
    /// Interpret a parsed JSON value as a layout document
    pub fn from_value(value: serde_json::Value) -> IngestResult<Self> {
        Ok(serde_json::from_value(value)?)
    }

    pub fn from_json_str(json: &str) -> IngestResult<Self> {
        Ok(serde_json::from_str(json)?)
    }
}

impl TransportNetwork {
    /// Add every station, then every line, then every travel time of a
    /// layout.
    ///
    /// Stops at the first item the network rejects. Items added before the
    /// failure stay in the network.
    pub fn load_layout(&mut self, layout: &NetworkLayout) -> IngestResult<()> {
        for station in &layout.stations {
            self.add_station(station)?;
        }
        for line in &layout.lines {
            self.add_line(line)?;
        }
        for entry in &layout.travel_times {
            self.set_travel_time(
                &entry.start_station_id,
                &entry.end_station_id,
                entry.travel_time,
            )?;
        }

        info!(
            "Loaded network layout: {} stations, {} lines, {} travel times",
            layout.stations.len(),
            layout.lines.len(),
            layout.travel_times.len()
        );
        Ok(())
    }

    /// Build a new network from a layout
    pub fn from_layout(layout: &NetworkLayout, config: NetworkConfig) -> IngestResult<Self> {
        let mut network = TransportNetwork::with_config(config);
        network.load_layout(layout)?;
        Ok(network)
    }
}
