//! Passenger ledger
//!
//! Each station keeps a running signed counter. Counters may go negative
//! when monitoring starts while passengers are already inside a station.

use super::descriptor::PassengerEvent;
use super::store::{NetworkError, NetworkResult, TransportNetwork};
use tracing::trace;

impl TransportNetwork {
    /// Record a passenger entering or leaving a station.
    pub fn record_passenger_event(&mut self, event: &PassengerEvent) -> NetworkResult<()> {
        let idx = self
            .station_idx(&event.station_id)
            .ok_or_else(|| NetworkError::StationNotFound(event.station_id.clone()))?;

        let node = &mut self.nodes[idx.index()];
        node.passenger_count += event.delta();

        trace!(
            "Passenger {:?} at {} -> {}",
            event.kind,
            event.station_id,
            node.passenger_count
        );
        Ok(())
    }

    /// Passengers currently recorded at a station.
    ///
    /// Asking for a station that was never added is a caller error and is
    /// reported as [`NetworkError::StationNotFound`].
    pub fn passenger_count(&self, station: &str) -> NetworkResult<i64> {
        self.station_idx(station)
            .map(|idx| self.node(idx).passenger_count)
            .ok_or_else(|| NetworkError::StationNotFound(station.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use crate::network::{PassengerEvent, PassengerEventType, Station, TransportNetwork};

    fn network() -> TransportNetwork {
        let mut network = TransportNetwork::new();
        network.add_station(&Station::new("a", "A")).unwrap();
        network.add_station(&Station::new("b", "B")).unwrap();
        network
    }

    #[test]
    fn test_counter_starts_at_zero() {
        let network = network();
        assert_eq!(network.passenger_count("a"), Ok(0));
    }

    #[test]
    fn test_counter_can_go_negative() {
        let mut network = network();
        network.record_passenger_event(&PassengerEvent::new("a", PassengerEventType::In)).unwrap();
        network.record_passenger_event(&PassengerEvent::new("a", PassengerEventType::Out)).unwrap();
        network.record_passenger_event(&PassengerEvent::new("a", PassengerEventType::Out)).unwrap();

        assert_eq!(network.passenger_count("a"), Ok(-1));
        assert_eq!(network.passenger_count("b"), Ok(0));
        assert_eq!(network.statistics().total_passengers, -1);
    }

    #[test]
    fn test_event_at_unknown_station() {
        let mut network = network();
        let result =
            network.record_passenger_event(&PassengerEvent::new("zz", PassengerEventType::In));
        assert!(result.is_err());
        assert_eq!(network.statistics().total_passengers, 0);
    }

    #[test]
    fn test_count_of_unknown_station_is_not_found() {
        let network = network();
        let err = network.passenger_count("zz").unwrap_err();
        assert!(err.is_not_found());
    }
}
