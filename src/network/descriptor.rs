//! Descriptor types supplied by callers of the network
//!
//! Descriptors are plain value records. They describe what a well formed
//! station, route, or line looks like, but adding them to a network does not
//! re-verify that shape unless strict route checking is enabled.

use super::types::Id;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// A network station
///
/// A station is well formed if its `id` is unique across all stations in
/// the network.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Station {
    #[serde(rename = "station_id")]
    pub id: Id,
    pub name: String,
}

impl Station {
    pub fn new(id: impl Into<Id>, name: impl Into<String>) -> Self {
        Station {
            id: id.into(),
            name: name.into(),
        }
    }
}

/// Two stations are equal if they have the same id.
impl PartialEq for Station {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for Station {}

/// A single journey across a set of stops in a given direction
///
/// Each line has one or more routes. There may or may not be a matching
/// route in the opposite direction of travel.
///
/// A route is well formed if:
/// - `id` is unique across all lines and their routes in the network
/// - the `line_id` line exists and lists this route among its routes
/// - `stops` has at least 2 stops, each appearing only once
/// - `start_station_id` is the first stop and `end_station_id` the last
/// - every stop is a station of the network
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Route {
    #[serde(rename = "route_id")]
    pub id: Id,
    pub direction: String,
    pub line_id: Id,
    pub start_station_id: Id,
    pub end_station_id: Id,
    #[serde(rename = "route_stops")]
    pub stops: Vec<Id>,
}

impl Route {
    /// Build a route whose start and end stations are taken from `stops`.
    pub fn new(
        id: impl Into<Id>,
        direction: impl Into<String>,
        line_id: impl Into<Id>,
        stops: Vec<Id>,
    ) -> Self {
        Route {
            id: id.into(),
            direction: direction.into(),
            line_id: line_id.into(),
            start_station_id: stops.first().cloned().unwrap_or_default(),
            end_station_id: stops.last().cloned().unwrap_or_default(),
            stops,
        }
    }

    /// Check the structural rules that do not depend on the network.
    ///
    /// Returns a description of the first violated rule.
    pub fn check_well_formed(&self) -> Result<(), String> {
        if self.stops.len() < 2 {
            return Err(format!("has {} stop(s), at least 2 required", self.stops.len()));
        }

        let mut seen = HashSet::with_capacity(self.stops.len());
        if let Some(repeated) = self.stops.iter().find(|stop| !seen.insert(stop.as_str())) {
            return Err(format!("stop {} appears more than once", repeated));
        }

        if self.stops.first() != Some(&self.start_station_id) {
            return Err(format!(
                "start station {} is not the first stop",
                self.start_station_id
            ));
        }
        if self.stops.last() != Some(&self.end_station_id) {
            return Err(format!(
                "end station {} is not the last stop",
                self.end_station_id
            ));
        }
        Ok(())
    }
}

/// Two routes are equal if they have the same id.
impl PartialEq for Route {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for Route {}

/// A collection of routes serving multiple stations
///
/// A line is well formed if:
/// - `id` is unique across all lines in the network
/// - `routes` has at least 1 route, each one well formed
/// - every route has a `line_id` equal to this line's `id`
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Line {
    #[serde(rename = "line_id")]
    pub id: Id,
    pub name: String,
    pub routes: Vec<Route>,
}

impl Line {
    pub fn new(id: impl Into<Id>, name: impl Into<String>, routes: Vec<Route>) -> Self {
        Line {
            id: id.into(),
            name: name.into(),
            routes,
        }
    }

    /// Check the line-level structural rules. Each route is checked on its
    /// own with [`Route::check_well_formed`].
    pub fn check_well_formed(&self) -> Result<(), String> {
        if self.routes.is_empty() {
            return Err("has no routes".to_string());
        }
        for route in &self.routes {
            if route.line_id != self.id {
                return Err(format!(
                    "route {} belongs to line {}",
                    route.id, route.line_id
                ));
            }
        }
        Ok(())
    }
}

/// Two lines are equal if they have the same id.
impl PartialEq for Line {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for Line {}

/// Kind of passenger event recorded at a station
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PassengerEventType {
    #[default]
    In,
    Out,
}

/// A passenger entering or leaving a station
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PassengerEvent {
    pub station_id: Id,
    #[serde(rename = "type")]
    pub kind: PassengerEventType,
}

impl PassengerEvent {
    pub fn new(station_id: impl Into<Id>, kind: PassengerEventType) -> Self {
        PassengerEvent {
            station_id: station_id.into(),
            kind,
        }
    }

    /// Change applied to the station's passenger counter.
    pub fn delta(&self) -> i64 {
        match self.kind {
            PassengerEventType::In => 1,
            PassengerEventType::Out => -1,
        }
    }
}
