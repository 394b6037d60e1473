//! Live passenger event messages
//!
//! ```json
//! {"station_id": "...", "passenger_event": "in", "datetime": "2020-11-01T07:18:50.234000Z"}
//! ```
//!
//! `"in"` is an entry. Any other value, typos included, is recorded as an
//! exit.

use super::IngestResult;
use crate::network::{
    Id, NetworkResult, PassengerEvent, PassengerEventType, TransportNetwork,
};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::trace;

/// A passenger event as delivered by the live event feed
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PassengerEventMessage {
    pub station_id: Id,
    pub passenger_event: String,
    #[serde(default)]
    pub datetime: Option<DateTime<Utc>>,
}

impl PassengerEventMessage {
    pub fn from_value(value: serde_json::Value) -> IngestResult<Self> {
        Ok(serde_json::from_value(value)?)
    }

    pub fn from_json_str(json: &str) -> IngestResult<Self> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn kind(&self) -> PassengerEventType {
        if self.passenger_event == "in" {
            PassengerEventType::In
        } else {
            PassengerEventType::Out
        }
    }
}

impl From<&PassengerEventMessage> for PassengerEvent {
    fn from(message: &PassengerEventMessage) -> Self {
        PassengerEvent::new(message.station_id.clone(), message.kind())
    }
}

impl TransportNetwork {
    /// Record a passenger event received from the live feed
    pub fn record_event_message(&mut self, message: &PassengerEventMessage) -> NetworkResult<()> {
        if let Some(at) = message.datetime {
            trace!("Event at {} recorded {}", message.station_id, at.to_rfc3339());
        }
        self.record_passenger_event(&PassengerEvent::from(message))
    }
}
