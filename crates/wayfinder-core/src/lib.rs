//! Wayfinder Core — labeled multigraph and shortest-path search

pub mod dijkstra;
pub mod error;
pub mod graph;
pub mod path;


pub use dijkstra::find_path;
pub use error::GraphError;
pub use graph::{Edge, LabeledGraph};
pub use path::Path;
