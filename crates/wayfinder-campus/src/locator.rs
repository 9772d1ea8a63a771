//! Building name resolution over the campus graph

use std::collections::BTreeMap;
use std::path::Path as FsPath;

use thiserror::Error;
use tracing::info;

use wayfinder_core::{GraphError, LabeledGraph, Path, find_path};

use crate::loader::{self, LoadError};
use crate::model::{CampusBuilding, CampusSegment, Point};

/// Faults raised while building or querying a [`CampusMap`].
#[derive(Debug, Error)]
pub enum CampusError {
    /// The short name does not identify any building.
    #[error("unknown building: {0}")]
    UnknownBuilding(String),

    /// Two building records share a short name.
    #[error("duplicate building: {0}")]
    DuplicateBuilding(String),

    #[error(transparent)]
    Load(#[from] LoadError),

    #[error(transparent)]
    Graph(#[from] GraphError),
}

/// Resolves building short names to map coordinates and answers the two
/// queries the request layer needs: list buildings, route between two.
///
/// Built once from loaded records and immutable afterwards, so it can be
/// shared across concurrent searches without locking.
pub struct CampusMap {
    long_names: BTreeMap<String, String>,
    locations: BTreeMap<String, Point>,
    graph: LabeledGraph<Point, f64>,
}

impl std::fmt::Debug for CampusMap {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CampusMap")
            .field("buildings", &self.long_names.len())
            .field("graph", &self.graph)
            .finish()
    }
}

impl CampusMap {
    /// Load both data files and build the map.
    pub fn load(buildings_file: &FsPath, segments_file: &FsPath) -> Result<Self, CampusError> {
        let buildings = loader::load_buildings(buildings_file)?;
        let segments = loader::load_segments(segments_file)?;
        Self::build(buildings, segments)
    }

    /// Build the map from already-parsed records.
    ///
    /// Registers every building, adds each building location and each
    /// segment endpoint as a graph vertex (first occurrence wins), then adds
    /// one directed edge per segment. Any fault aborts the whole
    /// construction; a partially built map is never returned.
    pub fn build(
        buildings: Vec<CampusBuilding>,
        segments: Vec<CampusSegment>,
    ) -> Result<Self, CampusError> {
        let mut long_names = BTreeMap::new();
        let mut locations = BTreeMap::new();
        let mut graph = LabeledGraph::new();

        for building in buildings {
            if long_names.contains_key(&building.short_name) {
                return Err(CampusError::DuplicateBuilding(building.short_name));
            }
            let location = building.location();
            if !graph.contains_vertex(&location) {
                graph.add_vertex(location)?;
            }
            long_names.insert(building.short_name.clone(), building.long_name);
            locations.insert(building.short_name, location);
        }

        for segment in &segments {
            for endpoint in [segment.start(), segment.end()] {
                if !graph.contains_vertex(&endpoint) {
                    graph.add_vertex(endpoint)?;
                }
            }
            graph.add_edge(segment.start(), segment.end(), segment.distance)?;
        }

        info!(
            buildings = long_names.len(),
            vertices = graph.vertex_count(),
            edges = graph.edge_count(),
            "campus map built"
        );

        Ok(CampusMap {
            long_names,
            locations,
            graph,
        })
    }

    /// Whether `short_name` identifies a building.
    pub fn short_name_exists(&self, short_name: &str) -> bool {
        self.long_names.contains_key(short_name)
    }

    /// The full display name for a building.
    pub fn long_name_for(&self, short_name: &str) -> Result<&str, CampusError> {
        self.long_names
            .get(short_name)
            .map(String::as_str)
            .ok_or_else(|| CampusError::UnknownBuilding(short_name.to_string()))
    }

    /// All buildings as a sorted short name → long name mapping.
    pub fn building_names(&self) -> &BTreeMap<String, String> {
        &self.long_names
    }

    /// The map location of a building.
    pub fn location_of(&self, short_name: &str) -> Result<Point, CampusError> {
        self.locations
            .get(short_name)
            .copied()
            .ok_or_else(|| CampusError::UnknownBuilding(short_name.to_string()))
    }

    /// Shortest walking path between two buildings, by total distance.
    ///
    /// Unknown short names fail with [`CampusError::UnknownBuilding`];
    /// `Ok(None)` means the buildings are not connected.
    pub fn find_shortest_path(
        &self,
        start_short_name: &str,
        end_short_name: &str,
    ) -> Result<Option<Path<Point>>, CampusError> {
        let start = self.location_of(start_short_name)?;
        let end = self.location_of(end_short_name)?;
        Ok(find_path(&self.graph, &start, &end)?)
    }
}
