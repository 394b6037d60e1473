//! Route and line internals
//!
//! A route keeps its stops as an ordered list of station handles. Positions
//! in that list drive direction detection and cumulative travel times.

use super::types::{Id, LineIdx, RouteIdx, StationIdx};

#[derive(Debug, Clone)]
pub struct RouteInternal {
    pub id: Id,
    pub direction: String,
    pub line: LineIdx,
    pub stops: Vec<StationIdx>,
}

impl RouteInternal {
    /// Zero-based position of `station` in the stop sequence
    pub fn position(&self, station: StationIdx) -> Option<usize> {
        self.stops.iter().position(|&stop| stop == station)
    }
}

#[derive(Debug, Clone)]
pub struct LineInternal {
    pub id: Id,
    pub name: String,
    pub routes: Vec<RouteIdx>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn route(stops: &[usize]) -> RouteInternal {
        RouteInternal {
            id: "r1".to_string(),
            direction: "outbound".to_string(),
            line: LineIdx::new(0),
            stops: stops.iter().map(|&i| StationIdx::new(i)).collect(),
        }
    }

    #[test]
    fn test_position() {
        let r = route(&[4, 2, 7]);
        assert_eq!(r.position(StationIdx::new(4)), Some(0));
        assert_eq!(r.position(StationIdx::new(7)), Some(2));
        assert_eq!(r.position(StationIdx::new(9)), None);
    }
}
