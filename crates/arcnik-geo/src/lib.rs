pub mod layers;
pub mod project;
pub mod segments;

pub use layers::{layer_catalog, ColorScale, LayerDef, LayerKind};
pub use project::{project, MapPoint, MERCATOR_LAT_LIMIT};
pub use segments::{classify_segment, SegmentPhase};

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinate {
    pub latitude: f64,
    pub longitude: f64,
}

impl Coordinate {
    pub fn new(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude,
            longitude,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BoundingBox {
    pub north: f64,
    pub south: f64,
    pub east: f64,
    pub west: f64,
}

impl BoundingBox {
    pub fn contains(&self, coord: Coordinate) -> bool {
        coord.latitude <= self.north
            && coord.latitude >= self.south
            && coord.longitude <= self.east
            && coord.longitude >= self.west
    }
}
