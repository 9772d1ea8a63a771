//! Directed labeled multigraph over generic vertex identifiers

use std::collections::BTreeMap;
use std::fmt;

use serde::Serialize;

use crate::error::GraphError;

/// A directed edge. Parallel edges between the same ordered vertex pair are
/// allowed as long as their labels differ.
///
/// Edges live in their source vertex's outgoing list and name the destination
/// by identifier only; they never own the destination vertex.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Edge<V, L> {
    pub src: V,
    pub dst: V,
    pub label: L,
}

/// A mutable directed multigraph with unique vertices and labeled edges.
///
/// Backed by a single adjacency map from vertex identifier to outgoing edge
/// list. `BTreeMap` keeps vertex iteration in ascending order, so
/// [`vertices`](LabeledGraph::vertices) is stable and display-ready without
/// extra sorting. Outgoing edges are kept in insertion order; consumers that
/// need a deterministic edge order sort explicitly.
///
/// The structure is append-only: there are no removal operations.
pub struct LabeledGraph<V, L> {
    adjacency: BTreeMap<V, Vec<Edge<V, L>>>,
    edge_count: usize,
}

impl<V, L> fmt::Debug for LabeledGraph<V, L> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LabeledGraph")
            .field("vertex_count", &self.adjacency.len())
            .field("edge_count", &self.edge_count)
            .finish()
    }
}

impl<V, L> LabeledGraph<V, L>
where
    V: Ord + fmt::Display,
    L: PartialEq + fmt::Display,
{
    pub fn new() -> Self {
        LabeledGraph {
            adjacency: BTreeMap::new(),
            edge_count: 0,
        }
    }

    /// Register a vertex with an empty outgoing-edge list.
    ///
    /// Fails with [`GraphError::DuplicateVertex`] if the identifier is
    /// already present; the graph is unchanged on failure.
    pub fn add_vertex(&mut self, vertex: V) -> Result<(), GraphError> {
        if self.adjacency.contains_key(&vertex) {
            return Err(GraphError::DuplicateVertex(vertex.to_string()));
        }
        self.adjacency.insert(vertex, Vec::new());
        Ok(())
    }

    /// Add a directed edge from `src` to `dst` carrying `label`.
    ///
    /// Both endpoints must already be vertices ([`GraphError::UnknownVertex`]
    /// otherwise), and no edge with the identical (src, dst, label) triple
    /// may exist ([`GraphError::DuplicateEdge`]). The graph is unchanged on
    /// failure.
    pub fn add_edge(&mut self, src: V, dst: V, label: L) -> Result<(), GraphError> {
        if !self.adjacency.contains_key(&dst) {
            return Err(GraphError::UnknownVertex(dst.to_string()));
        }
        let Some(outgoing) = self.adjacency.get_mut(&src) else {
            return Err(GraphError::UnknownVertex(src.to_string()));
        };

        if outgoing.iter().any(|e| e.dst == dst && e.label == label) {
            return Err(GraphError::DuplicateEdge {
                src: src.to_string(),
                dst: dst.to_string(),
                label: label.to_string(),
            });
        }

        outgoing.push(Edge { src, dst, label });
        self.edge_count += 1;
        Ok(())
    }

    /// Whether a vertex with this identifier exists.
    pub fn contains_vertex(&self, vertex: &V) -> bool {
        self.adjacency.contains_key(vertex)
    }

    /// All vertex identifiers, in ascending order.
    pub fn vertices(&self) -> impl Iterator<Item = &V> {
        self.adjacency.keys()
    }

    /// The edges leaving `vertex`, in insertion order.
    ///
    /// Fails with [`GraphError::UnknownVertex`] if the vertex is absent.
    pub fn outgoing_edges(&self, vertex: &V) -> Result<&[Edge<V, L>], GraphError> {
        self.adjacency
            .get(vertex)
            .map(Vec::as_slice)
            .ok_or_else(|| GraphError::UnknownVertex(vertex.to_string()))
    }

    /// Total number of vertices.
    pub fn vertex_count(&self) -> usize {
        self.adjacency.len()
    }

    /// Total number of edges.
    pub fn edge_count(&self) -> usize {
        self.edge_count
    }
}

impl<V, L> Default for LabeledGraph<V, L>
where
    V: Ord + fmt::Display,
    L: PartialEq + fmt::Display,
{
    fn default() -> Self {
        Self::new()
    }
}
