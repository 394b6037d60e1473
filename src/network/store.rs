//! In-memory transport network storage
//!
//! All nodes, edges, routes, and lines live in flat arenas owned by
//! [`TransportNetwork`]. Every cross reference (edge -> station,
//! route -> station, route -> line) is a handle into those arenas, so the
//! graph has no ownership cycles and is released in one go when the
//! network is dropped.
//!
//! Lookup tables:
//! - station_index: station id -> StationIdx
//! - route_index: route id -> RouteIdx
//! - line_index: line id -> LineIdx

use super::descriptor::{Line, Station};
use super::edge::GraphEdge;
use super::node::GraphNode;
use super::route::{LineInternal, RouteInternal};
use super::types::{EdgeIdx, Id, LineIdx, RouteIdx, StationIdx};
use crate::config::NetworkConfig;
use rustc_hash::{FxHashMap, FxHashSet};
use thiserror::Error;
use tracing::debug;

/// Errors that can occur during network operations
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum NetworkError {
    #[error("Station {0} not found")]
    StationNotFound(Id),

    #[error("Station {0} already exists")]
    StationAlreadyExists(Id),

    #[error("Line {0} already exists")]
    LineAlreadyExists(Id),

    #[error("Route {0} already exists")]
    RouteAlreadyExists(Id),

    #[error("Route {route} stops at unknown station {station}")]
    UnknownStop { route: Id, station: Id },

    #[error("Route {route} is malformed: {reason}")]
    MalformedRoute { route: Id, reason: String },

    #[error("Line {line} is malformed: {reason}")]
    MalformedLine { line: Id, reason: String },

    #[error("Stations {0} and {1} are not adjacent")]
    NoAdjacency(Id, Id),
}

impl NetworkError {
    /// True for the error kind reported when a station was never added.
    pub fn is_not_found(&self) -> bool {
        matches!(self, NetworkError::StationNotFound(_))
    }
}

pub type NetworkResult<T> = Result<T, NetworkError>;

/// Size of the network and the passengers it currently holds
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct NetworkStatistics {
    pub station_count: usize,
    pub line_count: usize,
    pub route_count: usize,
    pub edge_count: usize,
    pub total_passengers: i64,
}

/// Transport network graph
///
/// Build it in three phases: every station, then every line, then travel
/// times. Each phase relies on the ids registered by the previous one.
///
/// The network is not internally synchronised. Mutations need `&mut self`;
/// share it behind a lock if several threads record events.
#[derive(Debug)]
pub struct TransportNetwork {
    pub(super) config: NetworkConfig,

    /// Station arena
    pub(super) nodes: Vec<GraphNode>,

    /// Directed edge arena
    pub(super) edges: Vec<GraphEdge>,

    /// Route arena
    pub(super) routes: Vec<RouteInternal>,

    /// Line arena
    pub(super) lines: Vec<LineInternal>,

    station_index: FxHashMap<Id, StationIdx>,
    route_index: FxHashMap<Id, RouteIdx>,
    line_index: FxHashMap<Id, LineIdx>,
}

impl TransportNetwork {
    /// Create an empty network with the default configuration
    pub fn new() -> Self {
        Self::with_config(NetworkConfig::default())
    }

    /// Create an empty network with an explicit configuration
    pub fn with_config(config: NetworkConfig) -> Self {
        TransportNetwork {
            config,
            nodes: Vec::new(),
            edges: Vec::new(),
            routes: Vec::new(),
            lines: Vec::new(),
            station_index: FxHashMap::default(),
            route_index: FxHashMap::default(),
            line_index: FxHashMap::default(),
        }
    }

    pub fn config(&self) -> &NetworkConfig {
        &self.config
    }

    /// Add a station to the network.
    ///
    /// Fails without touching the network if a station with the same id was
    /// already added.
    pub fn add_station(&mut self, station: &Station) -> NetworkResult<()> {
        if self.station_index.contains_key(&station.id) {
            debug!("Rejected station {}: already exists", station.id);
            return Err(NetworkError::StationAlreadyExists(station.id.clone()));
        }

        let idx = StationIdx::new(self.nodes.len());
        self.nodes.push(GraphNode::new(station.id.clone(), station.name.clone()));
        self.station_index.insert(station.id.clone(), idx);

        debug!("Added station {} ({})", station.id, station.name);
        Ok(())
    }

    /// Add a line and all of its routes to the network.
    ///
    /// Every stop must already be a station of the network, and neither the
    /// line id nor any route id may be taken. The whole line is checked
    /// before anything is installed: on error the network is unchanged.
    ///
    /// Consecutive stops `A, B` of a route produce the directed edges
    /// `A -> B` and `B -> A`. If an edge already exists for another route
    /// the route is added to it and its travel time is kept.
    pub fn add_line(&mut self, line: &Line) -> NetworkResult<()> {
        let resolved = match self.resolve_line(line) {
            Ok(resolved) => resolved,
            Err(e) => {
                debug!("Rejected line {}: {}", line.id, e);
                return Err(e);
            }
        };

        let line_idx = LineIdx::new(self.lines.len());
        let edges_before = self.edges.len();
        let mut route_handles = Vec::with_capacity(line.routes.len());

        for (route, stops) in line.routes.iter().zip(resolved) {
            let route_idx = RouteIdx::new(self.routes.len());
            for pair in stops.windows(2) {
                self.link(pair[0], pair[1], route_idx);
                self.link(pair[1], pair[0], route_idx);
            }

            self.routes.push(RouteInternal {
                id: route.id.clone(),
                direction: route.direction.clone(),
                line: line_idx,
                stops,
            });
            self.route_index.insert(route.id.clone(), route_idx);
            route_handles.push(route_idx);
        }

        self.lines.push(LineInternal {
            id: line.id.clone(),
            name: line.name.clone(),
            routes: route_handles,
        });
        self.line_index.insert(line.id.clone(), line_idx);

        debug!(
            "Added line {} with {} route(s) and {} new edge(s)",
            line.id,
            line.routes.len(),
            self.edges.len() - edges_before
        );
        Ok(())
    }

    /// Check a line against the network and resolve every route's stops.
    fn resolve_line(&self, line: &Line) -> NetworkResult<Vec<Vec<StationIdx>>> {
        if self.line_index.contains_key(&line.id) {
            return Err(NetworkError::LineAlreadyExists(line.id.clone()));
        }
        if self.config.strict_routes {
            line.check_well_formed()
                .map_err(|reason| NetworkError::MalformedLine {
                    line: line.id.clone(),
                    reason,
                })?;
        }

        let mut seen_routes = FxHashSet::default();
        line.routes
            .iter()
            .map(|route| -> NetworkResult<Vec<StationIdx>> {
                if self.route_index.contains_key(&route.id)
                    || !seen_routes.insert(route.id.as_str())
                {
                    return Err(NetworkError::RouteAlreadyExists(route.id.clone()));
                }
                if self.config.strict_routes {
                    route
                        .check_well_formed()
                        .map_err(|reason| NetworkError::MalformedRoute {
                            route: route.id.clone(),
                            reason,
                        })?;
                }

                route
                    .stops
                    .iter()
                    .map(|stop| {
                        self.station_idx(stop).ok_or_else(|| NetworkError::UnknownStop {
                            route: route.id.clone(),
                            station: stop.clone(),
                        })
                    })
                    .collect()
            })
            .collect()
    }

    /// Create or extend the directed edge `from -> to` for `route`.
    fn link(&mut self, from: StationIdx, to: StationIdx, route: RouteIdx) {
        let edge_idx = match self.nodes[from.index()].outbound_edge(to) {
            Some(existing) => existing,
            None => {
                let idx = EdgeIdx::new(self.edges.len());
                self.edges.push(GraphEdge::new(from, to));
                self.nodes[from.index()].outbound.insert(to, idx);
                self.nodes[to.index()].inbound.insert(from, idx);
                idx
            }
        };
        self.edges[edge_idx.index()].add_route(route);
    }

    pub(super) fn station_idx(&self, id: &str) -> Option<StationIdx> {
        self.station_index.get(id).copied()
    }

    pub(super) fn node(&self, idx: StationIdx) -> &GraphNode {
        &self.nodes[idx.index()]
    }

    pub(super) fn edge(&self, idx: EdgeIdx) -> &GraphEdge {
        &self.edges[idx.index()]
    }

    pub(super) fn route(&self, idx: RouteIdx) -> &RouteInternal {
        &self.routes[idx.index()]
    }

    pub(super) fn route_by_id(&self, id: &str) -> Option<&RouteInternal> {
        self.route_index.get(id).map(|&idx| self.route(idx))
    }

    /// The route `route_id`, provided it belongs to line `line_id`
    pub(super) fn route_on_line(&self, line_id: &str, route_id: &str) -> Option<&RouteInternal> {
        self.route_by_id(route_id)
            .filter(|route| self.lines[route.line.index()].id == line_id)
    }

    pub fn has_station(&self, id: &str) -> bool {
        self.station_index.contains_key(id)
    }

    pub fn has_line(&self, id: &str) -> bool {
        self.line_index.contains_key(id)
    }

    pub fn has_route(&self, id: &str) -> bool {
        self.route_index.contains_key(id)
    }

    pub fn station_name(&self, id: &str) -> Option<&str> {
        self.station_idx(id).map(|idx| self.node(idx).name.as_str())
    }

    /// Station ids in the order they were added
    pub fn station_ids(&self) -> impl Iterator<Item = &str> + '_ {
        self.nodes.iter().map(|node| node.id.as_str())
    }

    pub fn line_name(&self, id: &str) -> Option<&str> {
        self.line_index
            .get(id)
            .map(|&idx| self.lines[idx.index()].name.as_str())
    }

    /// Direction label the route was registered with
    pub fn route_direction(&self, id: &str) -> Option<&str> {
        self.route_by_id(id).map(|route| route.direction.as_str())
    }

    /// Route ids of a line in the order they were added. Empty for an
    /// unknown line.
    pub fn routes_of_line(&self, line_id: &str) -> Vec<&str> {
        self.line_index
            .get(line_id)
            .map(|&idx| {
                self.lines[idx.index()]
                    .routes
                    .iter()
                    .map(|&route| self.route(route).id.as_str())
                    .collect()
            })
            .unwrap_or_default()
    }

    pub fn station_count(&self) -> usize {
        self.nodes.len()
    }

    pub fn line_count(&self) -> usize {
        self.lines.len()
    }

    pub fn route_count(&self) -> usize {
        self.routes.len()
    }

    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    pub fn statistics(&self) -> NetworkStatistics {
        NetworkStatistics {
            station_count: self.station_count(),
            line_count: self.line_count(),
            route_count: self.route_count(),
            edge_count: self.edge_count(),
            total_passengers: self.nodes.iter().map(|node| node.passenger_count).sum(),
        }
    }
}

impl Default for TransportNetwork {
    fn default() -> Self {
        Self::new()
    }
}
