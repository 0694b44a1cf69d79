//! CSV records for campus buildings and walkable path segments.
//!
//! Buildings: `shortName,longName,x,y`.
//! Paths: `x1,y1,x2,y2,distance`, one undirected segment per row.

use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

use serde::de::DeserializeOwned;
use serde::Deserialize;
use tracing::debug;

use crate::campus::Point;
use crate::error::Result;

/// A named building and the coordinate of its entrance.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Building {
    pub short_name: String,
    pub long_name: String,
    pub x: f64,
    pub y: f64,
}

impl Building {
    pub fn location(&self) -> Point {
        Point::new(self.x, self.y)
    }
}

/// An undirected walkable segment between two coordinates.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct CampusPath {
    pub x1: f64,
    pub y1: f64,
    pub x2: f64,
    pub y2: f64,
    pub distance: f64,
}

impl CampusPath {
    pub fn endpoints(&self) -> (Point, Point) {
        (Point::new(self.x1, self.y1), Point::new(self.x2, self.y2))
    }
}

pub fn read_buildings<R: Read>(reader: R) -> Result<Vec<Building>> {
    read_records(reader)
}

pub fn read_paths<R: Read>(reader: R) -> Result<Vec<CampusPath>> {
    read_records(reader)
}

pub fn load_buildings(path: impl AsRef<Path>) -> Result<Vec<Building>> {
    let file = File::open(path.as_ref())?;
    let buildings = read_buildings(BufReader::new(file))?;
    debug!(path = %path.as_ref().display(), count = buildings.len(), "buildings parsed");
    Ok(buildings)
}

pub fn load_paths(path: impl AsRef<Path>) -> Result<Vec<CampusPath>> {
    let file = File::open(path.as_ref())?;
    let paths = read_paths(BufReader::new(file))?;
    debug!(path = %path.as_ref().display(), count = paths.len(), "path segments parsed");
    Ok(paths)
}

fn read_records<T: DeserializeOwned, R: Read>(reader: R) -> Result<Vec<T>> {
    let mut rdr = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_reader(reader);
    let records = rdr.deserialize().collect::<std::result::Result<Vec<T>, _>>()?;
    Ok(records)
}
