use crate::route::Waypoint;
use arcnik_geo::Coordinate;
use serde::Serialize;

/// The interpolated (non-randomized) environmental state at a progress value.
/// Ephemeral: recomputed on every tick, never stored.
#[derive(Debug, Clone, Serialize)]
pub struct LocationSnapshot {
    pub position: Coordinate,
    pub reference_name: String,
    pub temp_c: f64,
    pub temp_range: f64,
    pub wind_kmh: f64,
    pub wind_range: f64,
    pub waves_m: f64,
    pub waves_range: f64,
    pub sea_condition: String,
    pub segment_index: usize,
    pub fraction: f64,
}

fn lerp(a: f64, b: f64, t: f64) -> f64 {
    a + (b - a) * t
}

fn terminal(route: &[Waypoint], index: usize) -> LocationSnapshot {
    let wp = &route[index];
    LocationSnapshot {
        position: wp.position,
        reference_name: wp.name.clone(),
        temp_c: wp.baseline.temp_c,
        temp_range: wp.baseline.temp_range,
        wind_kmh: wp.baseline.wind_kmh,
        wind_range: wp.baseline.wind_range,
        waves_m: wp.baseline.waves_m,
        waves_range: wp.baseline.waves_range,
        sea_condition: wp.baseline.sea_condition.clone(),
        segment_index: index.saturating_sub(1),
        fraction: 1.0,
    }
}

/// Maps a progress scalar onto the route. Progress is clamped to [0, 1];
/// every numeric baseline interpolates linearly across the bounding segment,
/// labels step discretely at the segment midpoint, and the final waypoint is
/// a terminal clamp with no extrapolation.
pub fn locate(route: &[Waypoint], progress: f64) -> LocationSnapshot {
    assert!(!route.is_empty(), "route must contain at least one waypoint");
    let last = route.len() - 1;
    if last == 0 {
        return terminal(route, 0);
    }

    let progress = progress.clamp(0.0, 1.0);
    let segment_progress = progress * last as f64;
    let segment_index = segment_progress.floor() as usize;
    let fraction = segment_progress - segment_index as f64;

    if segment_index >= last {
        return terminal(route, last);
    }

    let start = &route[segment_index];
    let end = &route[segment_index + 1];
    let near = if fraction < 0.5 { start } else { end };

    LocationSnapshot {
        position: Coordinate::new(
            lerp(start.position.latitude, end.position.latitude, fraction),
            lerp(start.position.longitude, end.position.longitude, fraction),
        ),
        reference_name: near.name.clone(),
        temp_c: lerp(start.baseline.temp_c, end.baseline.temp_c, fraction),
        temp_range: lerp(start.baseline.temp_range, end.baseline.temp_range, fraction),
        wind_kmh: lerp(start.baseline.wind_kmh, end.baseline.wind_kmh, fraction),
        wind_range: lerp(start.baseline.wind_range, end.baseline.wind_range, fraction),
        waves_m: lerp(start.baseline.waves_m, end.baseline.waves_m, fraction),
        waves_range: lerp(start.baseline.waves_range, end.baseline.waves_range, fraction),
        sea_condition: near.baseline.sea_condition.clone(),
        segment_index,
        fraction,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::route::{expedition_route, EnvBaseline, OceanProfile};

    fn waypoint(name: &str, lat: f64, temp: f64, condition: &str) -> Waypoint {
        Waypoint {
            name: name.to_string(),
            position: Coordinate::new(lat, 0.0),
            visited: false,
            arrival_ms: 0,
            baseline: EnvBaseline {
                temp_c: temp,
                temp_range: 2.0,
                wind_kmh: 10.0,
                wind_range: 4.0,
                waves_m: 1.0,
                waves_range: 0.5,
                sea_condition: condition.to_string(),
            },
            ocean: OceanProfile {
                surface_temp_c: temp,
                salinity_psu: 35.0,
                depth_m: 1000.0,
                current_speed_mps: 0.5,
                ice_coverage_pct: 0.0,
            },
        }
    }

    fn three_stop_route() -> Vec<Waypoint> {
        vec![
            waypoint("A", 0.0, 10.0, "calm"),
            waypoint("B", 10.0, 20.0, "moderate"),
            waypoint("C", 20.0, 30.0, "rough"),
        ]
    }

    #[test]
    fn temperatures_are_piecewise_linear() {
        let route = three_stop_route();
        let expected = [
            (0.0, 10.0),
            (0.25, 15.0),
            (0.5, 20.0),
            (0.75, 25.0),
            (1.0, 30.0),
        ];
        for (progress, temp) in expected {
            let snapshot = locate(&route, progress);
            assert!(
                (snapshot.temp_c - temp).abs() < 1e-9,
                "p={progress}: got {}",
                snapshot.temp_c
            );
        }
    }

    #[test]
    fn terminal_clamp_returns_last_waypoint() {
        let route = three_stop_route();
        let snapshot = locate(&route, 1.0);
        assert_eq!(snapshot.reference_name, "C");
        assert_eq!(snapshot.sea_condition, "rough");
        assert!((snapshot.position.latitude - 20.0).abs() < 1e-9);
    }

    #[test]
    fn out_of_range_progress_clamps() {
        let route = three_stop_route();
        let below = locate(&route, -0.5);
        assert!((below.temp_c - 10.0).abs() < 1e-9);
        let above = locate(&route, 1.7);
        assert!((above.temp_c - 30.0).abs() < 1e-9);
    }

    #[test]
    fn labels_step_at_segment_midpoint() {
        let route = three_stop_route();
        assert_eq!(locate(&route, 0.2).sea_condition, "calm");
        assert_eq!(locate(&route, 0.3).sea_condition, "moderate");
        assert_eq!(locate(&route, 0.6).sea_condition, "moderate");
        assert_eq!(locate(&route, 0.9).sea_condition, "rough");
    }

    #[test]
    fn positions_interpolate_between_stops() {
        let route = three_stop_route();
        let snapshot = locate(&route, 0.25);
        assert!((snapshot.position.latitude - 5.0).abs() < 1e-9);
    }

    #[test]
    fn full_route_is_total_over_the_unit_interval() {
        let route = expedition_route();
        for step in 0..=100 {
            let snapshot = locate(&route, step as f64 / 100.0);
            assert!(snapshot.temp_c.is_finite());
            assert!(snapshot.segment_index < route.len());
        }
    }
}
