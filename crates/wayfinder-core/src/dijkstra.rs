//! Dijkstra shortest-path search over non-negative edge costs

use std::cmp::{Ordering, Reverse};
use std::collections::{BTreeSet, BinaryHeap};
use std::fmt;

use tracing::trace;

use crate::error::GraphError;
use crate::graph::LabeledGraph;
use crate::path::Path;

/// Find the minimum-total-cost path from `start` to `goal`.
///
/// Returns `Err(UnknownVertex)` if either endpoint is absent from the graph,
/// before any search work. Returns `Ok(None)` when `goal` is unreachable
/// from `start`; that is an expected outcome, not an error.
/// `find_path(g, v, v)` yields the zero-edge, zero-cost path.
///
/// Edge labels must be non-negative and finite; that is a caller contract,
/// not checked here. The graph is only read, so concurrent searches over a
/// shared graph are safe.
///
/// Ties between equal-cost candidates are broken deterministically: by
/// terminal vertex ascending, then by edge count, then by the edge sequence
/// compared as (destination, label) pairs. Repeated searches over the same
/// graph therefore return the identical path, not merely an equal cost.
pub fn find_path<V>(
    graph: &LabeledGraph<V, f64>,
    start: &V,
    goal: &V,
) -> Result<Option<Path<V>>, GraphError>
where
    V: Ord + Clone + fmt::Display,
{
    if !graph.contains_vertex(start) {
        return Err(GraphError::UnknownVertex(start.to_string()));
    }
    if !graph.contains_vertex(goal) {
        return Err(GraphError::UnknownVertex(goal.to_string()));
    }

    // Min-heap of candidate paths keyed by cumulative cost.
    let mut frontier = BinaryHeap::new();
    let mut finalized = BTreeSet::new();
    frontier.push(Reverse(Candidate(Path::new(start.clone()))));

    while let Some(Reverse(Candidate(path))) = frontier.pop() {
        let terminal = path.end();

        if terminal == goal {
            trace!(cost = path.cost(), hops = path.edges().len(), "goal reached");
            return Ok(Some(path));
        }
        if finalized.contains(terminal) {
            // Stale entry, superseded by a cheaper path popped earlier.
            continue;
        }
        let terminal = terminal.clone();

        // Sorted expansion keeps heap insertion order deterministic, which
        // the tie-break rule depends on.
        let mut outgoing = graph.outgoing_edges(&terminal)?.to_vec();
        outgoing.sort_by(|a, b| a.dst.cmp(&b.dst).then(a.label.total_cmp(&b.label)));

        for edge in outgoing {
            if !finalized.contains(&edge.dst) {
                frontier.push(Reverse(Candidate(path.extend(edge))));
            }
        }
        finalized.insert(terminal);
    }

    Ok(None)
}

/// Frontier entry ordering: cost first, then the documented tie-break chain.
/// Wrapped in `Reverse` by the caller to turn `BinaryHeap` into a min-heap.
struct Candidate<V>(Path<V>);

impl<V: Ord> Candidate<V> {
    fn key_cmp(&self, other: &Self) -> Ordering {
        self.0
            .cost()
            .total_cmp(&other.0.cost())
            .then_with(|| self.0.end().cmp(other.0.end()))
            .then_with(|| self.0.edges().len().cmp(&other.0.edges().len()))
            .then_with(|| {
                for (a, b) in self.0.edges().iter().zip(other.0.edges()) {
                    let step = a.dst.cmp(&b.dst).then(a.label.total_cmp(&b.label));
                    if step != Ordering::Equal {
                        return step;
                    }
                }
                Ordering::Equal
            })
    }
}

impl<V: Ord> Ord for Candidate<V> {
    fn cmp(&self, other: &Self) -> Ordering {
        self.key_cmp(other)
    }
}

impl<V: Ord> PartialOrd for Candidate<V> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<V: Ord> PartialEq for Candidate<V> {
    fn eq(&self, other: &Self) -> bool {
        self.key_cmp(other) == Ordering::Equal
    }
}

impl<V: Ord> Eq for Candidate<V> {}
