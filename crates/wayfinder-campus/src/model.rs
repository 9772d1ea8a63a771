//! Data records for the campus map

use std::cmp::Ordering;
use std::fmt;

use serde::{Deserialize, Serialize};

/// A 2-D map coordinate. Used as the graph's vertex identifier.
///
/// The loader only admits finite coordinates, which makes the `total_cmp`
/// based `Eq`/`Ord` impls agree with plain floating-point equality here.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Point { x, y }
    }
}

impl Eq for Point {}

impl Ord for Point {
    fn cmp(&self, other: &Self) -> Ordering {
        self.x
            .total_cmp(&other.x)
            .then_with(|| self.y.total_cmp(&other.y))
    }
}

impl PartialOrd for Point {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

/// One building record: display names plus its location on the map.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CampusBuilding {
    pub short_name: String,
    pub long_name: String,
    pub x: f64,
    pub y: f64,
}

impl CampusBuilding {
    pub fn location(&self) -> Point {
        Point::new(self.x, self.y)
    }
}

/// One walkable path segment between two map coordinates.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CampusSegment {
    pub x1: f64,
    pub y1: f64,
    pub x2: f64,
    pub y2: f64,
    pub distance: f64,
}

impl CampusSegment {
    pub fn start(&self) -> Point {
        Point::new(self.x1, self.y1)
    }

    pub fn end(&self) -> Point {
        Point::new(self.x2, self.y2)
    }
}
