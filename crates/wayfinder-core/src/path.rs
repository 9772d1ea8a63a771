//! Immutable walk through a graph with an accumulated cost

use serde::Serialize;

use crate::graph::Edge;

/// An ordered sequence of edges from a start vertex, plus the running total
/// of their labels.
///
/// Paths are immutable: [`extend`](Path::extend) returns a new value and
/// leaves the original untouched, so frontier branches in the search can
/// share a common prefix. A freshly rooted path has zero edges and cost
/// exactly `0.0`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Path<V> {
    start: V,
    edges: Vec<Edge<V, f64>>,
    cost: f64,
}

impl<V> Path<V> {
    /// A zero-edge, zero-cost path rooted at `start`.
    pub fn new(start: V) -> Self {
        Path {
            start,
            edges: Vec::new(),
            cost: 0.0,
        }
    }

    /// The vertex this path is rooted at.
    pub fn start(&self) -> &V {
        &self.start
    }

    /// The terminal vertex: the destination of the last edge, or the start
    /// vertex for a zero-edge path.
    pub fn end(&self) -> &V {
        self.edges.last().map_or(&self.start, |e| &e.dst)
    }

    /// The traversed edges, in walk order.
    pub fn edges(&self) -> &[Edge<V, f64>] {
        &self.edges
    }

    /// Sum of the traversed edge labels.
    pub fn cost(&self) -> f64 {
        self.cost
    }
}

impl<V: Clone> Path<V> {
    /// A new path that follows `self` and then traverses `edge`.
    pub fn extend(&self, edge: Edge<V, f64>) -> Self {
        let mut edges = self.edges.clone();
        let cost = self.cost + edge.label;
        edges.push(edge);
        Path {
            start: self.start.clone(),
            edges,
            cost,
        }
    }
}
