//! File loaders for building and path-segment records
//!
//! Both files are plain comma-separated text, one record per line. Blank
//! lines and lines starting with `#` are skipped. Loading is fail-fast: the
//! first malformed line aborts with an error naming the file and line, and
//! no partial record list is returned.

use std::fs;
use std::path::Path;

use thiserror::Error;
use tracing::debug;

use crate::model::{CampusBuilding, CampusSegment};

/// Faults raised while reading the campus data files.
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("reading {file}: {source}")]
    Io {
        file: String,
        #[source]
        source: std::io::Error,
    },

    #[error("{file}:{line}: expected {expected} comma-separated fields, got {got}")]
    FieldCount {
        file: String,
        line: usize,
        expected: usize,
        got: usize,
    },

    #[error("{file}:{line}: invalid number {value:?}")]
    InvalidNumber {
        file: String,
        line: usize,
        value: String,
    },

    #[error("{file}:{line}: coordinates and distances must be finite and non-negative")]
    InvalidValue { file: String, line: usize },
}

/// Load building records: `shortName,longName,x,y`.
pub fn load_buildings(path: &Path) -> Result<Vec<CampusBuilding>, LoadError> {
    let file = path.display().to_string();
    let contents = fs::read_to_string(path).map_err(|source| LoadError::Io {
        file: file.clone(),
        source,
    })?;

    let mut buildings = Vec::new();
    for (line, fields) in records(&contents) {
        if fields.len() != 4 {
            return Err(LoadError::FieldCount {
                file,
                line,
                expected: 4,
                got: fields.len(),
            });
        }
        let x = parse_coordinate(fields[2], &file, line)?;
        let y = parse_coordinate(fields[3], &file, line)?;
        buildings.push(CampusBuilding {
            short_name: fields[0].to_string(),
            long_name: fields[1].to_string(),
            x,
            y,
        });
    }

    debug!(count = buildings.len(), file = %file, "loaded building records");
    Ok(buildings)
}

/// Load path-segment records: `x1,y1,x2,y2,distance`.
pub fn load_segments(path: &Path) -> Result<Vec<CampusSegment>, LoadError> {
    let file = path.display().to_string();
    let contents = fs::read_to_string(path).map_err(|source| LoadError::Io {
        file: file.clone(),
        source,
    })?;

    let mut segments = Vec::new();
    for (line, fields) in records(&contents) {
        if fields.len() != 5 {
            return Err(LoadError::FieldCount {
                file,
                line,
                expected: 5,
                got: fields.len(),
            });
        }
        let x1 = parse_coordinate(fields[0], &file, line)?;
        let y1 = parse_coordinate(fields[1], &file, line)?;
        let x2 = parse_coordinate(fields[2], &file, line)?;
        let y2 = parse_coordinate(fields[3], &file, line)?;
        let distance = parse_coordinate(fields[4], &file, line)?;
        segments.push(CampusSegment {
            x1,
            y1,
            x2,
            y2,
            distance,
        });
    }

    debug!(count = segments.len(), file = %file, "loaded segment records");
    Ok(segments)
}

/// Iterate data lines as (1-based line number, trimmed fields).
fn records(contents: &str) -> impl Iterator<Item = (usize, Vec<&str>)> {
    contents
        .lines()
        .enumerate()
        .map(|(i, l)| (i + 1, l.trim()))
        .filter(|(_, l)| !l.is_empty() && !l.starts_with('#'))
        .map(|(n, l)| (n, l.split(',').map(str::trim).collect()))
}

/// Parse a numeric field. The search engine requires non-negative finite
/// costs, and negative coordinates have no meaning on the map either, so
/// both are rejected here at the boundary.
fn parse_coordinate(raw: &str, file: &str, line: usize) -> Result<f64, LoadError> {
    let value: f64 = raw.parse().map_err(|_| LoadError::InvalidNumber {
        file: file.to_string(),
        line,
        value: raw.to_string(),
    })?;
    if !value.is_finite() || value < 0.0 {
        return Err(LoadError::InvalidValue {
            file: file.to_string(),
            line,
        });
    }
    Ok(value)
}
