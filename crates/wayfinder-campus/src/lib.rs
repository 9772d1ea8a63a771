//! Wayfinder Campus — building/path data loading and name resolution

pub mod loader;
pub mod locator;
pub mod model;


pub use loader::{LoadError, load_buildings, load_segments};
pub use locator::{CampusError, CampusMap};
pub use model::{CampusBuilding, CampusSegment, Point};
