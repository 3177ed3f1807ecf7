use crate::Coordinate;
use serde::Serialize;
use std::f64::consts::PI;

/// Latitudes beyond this fold into the mercator singularity; inputs are
/// clamped to it before projection.
pub const MERCATOR_LAT_LIMIT: f64 = 85.05112878;

/// A position in normalized map space: x grows eastward, y grows southward,
/// both in [0, 1].
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct MapPoint {
    pub x: f64,
    pub y: f64,
}

pub fn project(coord: Coordinate) -> MapPoint {
    let latitude = coord
        .latitude
        .clamp(-MERCATOR_LAT_LIMIT, MERCATOR_LAT_LIMIT);
    let longitude = coord.longitude.clamp(-180.0, 180.0);

    let x = (longitude + 180.0) / 360.0;
    let lat_rad = latitude.to_radians();
    let y = (1.0 - ((lat_rad.tan() + 1.0 / lat_rad.cos()).ln()) / PI) / 2.0;

    MapPoint { x, y }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn equator_projects_to_center_line() {
        let point = project(Coordinate::new(0.0, 0.0));
        assert!((point.x - 0.5).abs() < 1e-9);
        assert!((point.y - 0.5).abs() < 1e-9);
    }

    #[test]
    fn longitude_spans_unit_interval() {
        assert!((project(Coordinate::new(0.0, -180.0)).x - 0.0).abs() < 1e-9);
        assert!((project(Coordinate::new(0.0, 180.0)).x - 1.0).abs() < 1e-9);
    }

    #[test]
    fn northern_latitudes_map_above_center() {
        let varna = project(Coordinate::new(43.2141, 27.9147));
        let livingston = project(Coordinate::new(-62.6167, -60.5667));
        assert!(varna.y < 0.5);
        assert!(livingston.y > 0.5);
    }

    #[test]
    fn polar_latitudes_clamp_to_mercator_limit() {
        let pole = project(Coordinate::new(90.0, 0.0));
        let limit = project(Coordinate::new(MERCATOR_LAT_LIMIT, 0.0));
        assert!((pole.y - limit.y).abs() < 1e-9);
        assert!(pole.y.is_finite());
    }
}
