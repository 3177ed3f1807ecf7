use arcnik_core::EpochMillis;
use arcnik_geo::{Coordinate, LayerKind};
use serde::Serialize;

/// Environmental baseline at a route stop: a mean/variance pair per reading
/// plus the qualitative sea-condition label shown in the readout.
#[derive(Debug, Clone, Serialize)]
pub struct EnvBaseline {
    pub temp_c: f64,
    pub temp_range: f64,
    pub wind_kmh: f64,
    pub wind_range: f64,
    pub waves_m: f64,
    pub waves_range: f64,
    pub sea_condition: String,
}

/// Oceanographic profile feeding the overlay layers.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct OceanProfile {
    pub surface_temp_c: f64,
    pub salinity_psu: f64,
    pub depth_m: f64,
    pub current_speed_mps: f64,
    pub ice_coverage_pct: f64,
}

/// A named stop on the expedition route. Index order is travel order; the
/// list is defined once and never mutated.
#[derive(Debug, Clone, Serialize)]
pub struct Waypoint {
    pub name: String,
    pub position: Coordinate,
    pub visited: bool,
    pub arrival_ms: EpochMillis,
    pub baseline: EnvBaseline,
    pub ocean: OceanProfile,
}

/// Expedition window used for the day-count readouts.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct Expedition {
    pub start_ms: EpochMillis,
    pub end_ms: EpochMillis,
    pub total_days: u32,
}

pub const EXPEDITION: Expedition = Expedition {
    start_ms: 1_762_502_400_000, // 2025-11-07 08:00 UTC, Varna departure
    end_ms: 1_777_996_800_000,   // 2026-05-05 16:00 UTC, Livingston Island
    total_days: 180,
};

pub fn ocean_value(waypoint: &Waypoint, kind: LayerKind) -> f64 {
    match kind {
        LayerKind::Temperature => waypoint.ocean.surface_temp_c,
        LayerKind::Salinity => waypoint.ocean.salinity_psu,
        LayerKind::Bathymetry => waypoint.ocean.depth_m,
        LayerKind::Currents => waypoint.ocean.current_speed_mps,
        LayerKind::Ice => waypoint.ocean.ice_coverage_pct,
    }
}

struct Stop {
    name: &'static str,
    lat: f64,
    lon: f64,
    visited: bool,
    arrival_ms: EpochMillis,
    temp: (f64, f64),
    wind: (f64, f64),
    waves: (f64, f64),
    condition: &'static str,
    ocean: OceanProfile,
}

/// The R/V NIK 421 route, Varna to Livingston Island.
pub fn expedition_route() -> Vec<Waypoint> {
    let stops = [
        Stop {
            name: "Varna, Bulgaria",
            lat: 43.2141,
            lon: 27.9147,
            visited: true,
            arrival_ms: 1_762_502_400_000, // 2025-11-07 08:00 UTC
            temp: (12.0, 4.0),
            wind: (15.0, 8.0),
            waves: (1.0, 0.8),
            condition: "Black Sea - Calm",
            ocean: OceanProfile {
                surface_temp_c: 12.0,
                salinity_psu: 18.2,
                depth_m: 2100.0,
                current_speed_mps: 0.2,
                ice_coverage_pct: 0.0,
            },
        },
        Stop {
            name: "Istanbul, Turkey",
            lat: 41.0082,
            lon: 28.9784,
            visited: true,
            arrival_ms: 1_762_783_200_000, // 2025-11-10 14:00 UTC
            temp: (14.0, 3.0),
            wind: (18.0, 7.0),
            waves: (1.2, 0.6),
            condition: "Bosphorus - Moderate",
            ocean: OceanProfile {
                surface_temp_c: 14.0,
                salinity_psu: 22.5,
                depth_m: 80.0,
                current_speed_mps: 0.5,
                ice_coverage_pct: 0.0,
            },
        },
        Stop {
            name: "Messina, Italy",
            lat: 38.1938,
            lon: 15.5540,
            visited: false,
            arrival_ms: 1_763_460_000_000, // 2025-11-18 10:00 UTC
            temp: (17.0, 3.0),
            wind: (20.0, 10.0),
            waves: (1.8, 1.0),
            condition: "Mediterranean - Active",
            ocean: OceanProfile {
                surface_temp_c: 17.0,
                salinity_psu: 38.0,
                depth_m: 1200.0,
                current_speed_mps: 0.4,
                ice_coverage_pct: 0.0,
            },
        },
        Stop {
            name: "Cartagena, Spain",
            lat: 37.6256,
            lon: -0.9959,
            visited: false,
            arrival_ms: 1_763_913_600_000, // 2025-11-23 16:00 UTC
            temp: (18.0, 4.0),
            wind: (22.0, 8.0),
            waves: (2.0, 1.2),
            condition: "Western Mediterranean",
            ocean: OceanProfile {
                surface_temp_c: 18.0,
                salinity_psu: 37.2,
                depth_m: 1500.0,
                current_speed_mps: 0.5,
                ice_coverage_pct: 0.0,
            },
        },
        Stop {
            name: "Gibraltar",
            lat: 36.1408,
            lon: -5.3536,
            visited: false,
            arrival_ms: 1_764_147_600_000, // 2025-11-26 09:00 UTC
            temp: (19.0, 3.0),
            wind: (25.0, 10.0),
            waves: (2.5, 1.5),
            condition: "Strait of Gibraltar - Choppy",
            ocean: OceanProfile {
                surface_temp_c: 19.0,
                salinity_psu: 36.5,
                depth_m: 900.0,
                current_speed_mps: 0.8,
                ice_coverage_pct: 0.0,
            },
        },
        Stop {
            name: "Atlantic Ocean",
            lat: 20.0,
            lon: -25.0,
            visited: false,
            arrival_ms: 1_765_368_000_000, // 2025-12-10 12:00 UTC
            temp: (23.0, 2.0),
            wind: (28.0, 12.0),
            waves: (3.5, 2.0),
            condition: "North Atlantic - Rough",
            ocean: OceanProfile {
                surface_temp_c: 23.0,
                salinity_psu: 36.0,
                depth_m: 4500.0,
                current_speed_mps: 0.6,
                ice_coverage_pct: 0.0,
            },
        },
        Stop {
            name: "Equator Crossing",
            lat: 0.0,
            lon: -30.0,
            visited: false,
            arrival_ms: 1_766_934_000_000, // 2025-12-28 15:00 UTC
            temp: (27.0, 2.0),
            wind: (15.0, 5.0),
            waves: (2.0, 1.0),
            condition: "Equatorial Atlantic - Warm",
            ocean: OceanProfile {
                surface_temp_c: 27.0,
                salinity_psu: 35.5,
                depth_m: 4200.0,
                current_speed_mps: 0.3,
                ice_coverage_pct: 0.0,
            },
        },
        Stop {
            name: "Mar del Plata, Argentina",
            lat: -38.0055,
            lon: -57.5426,
            visited: false,
            arrival_ms: 1_771_153_200_000, // 2026-02-15 11:00 UTC
            temp: (22.0, 5.0),
            wind: (30.0, 15.0),
            waves: (3.0, 2.0),
            condition: "South Atlantic - Variable",
            ocean: OceanProfile {
                surface_temp_c: 18.0,
                salinity_psu: 35.8,
                depth_m: 3800.0,
                current_speed_mps: 0.7,
                ice_coverage_pct: 0.0,
            },
        },
        Stop {
            name: "Drake Passage",
            lat: -58.0,
            lon: -62.0,
            visited: false,
            arrival_ms: 1_774_425_600_000, // 2026-03-25 08:00 UTC
            temp: (5.0, 4.0),
            wind: (45.0, 20.0),
            waves: (6.0, 3.0),
            condition: "Drake Passage - Extreme",
            ocean: OceanProfile {
                surface_temp_c: 5.0,
                salinity_psu: 34.2,
                depth_m: 3200.0,
                current_speed_mps: 1.2,
                ice_coverage_pct: 15.0,
            },
        },
        Stop {
            name: "Livingston Island, Antarctica",
            lat: -62.6167,
            lon: -60.5667,
            visited: false,
            arrival_ms: 1_775_404_800_000, // 2026-04-05 16:00 UTC
            temp: (-2.0, 3.0),
            wind: (35.0, 15.0),
            waves: (4.5, 2.5),
            condition: "Antarctic Peninsula - Icy",
            ocean: OceanProfile {
                surface_temp_c: -2.0,
                salinity_psu: 33.8,
                depth_m: 800.0,
                current_speed_mps: 0.4,
                ice_coverage_pct: 45.0,
            },
        },
    ];

    stops
        .into_iter()
        .map(|stop| Waypoint {
            name: stop.name.to_string(),
            position: Coordinate::new(stop.lat, stop.lon),
            visited: stop.visited,
            arrival_ms: stop.arrival_ms,
            baseline: EnvBaseline {
                temp_c: stop.temp.0,
                temp_range: stop.temp.1,
                wind_kmh: stop.wind.0,
                wind_range: stop.wind.1,
                waves_m: stop.waves.0,
                waves_range: stop.waves.1,
                sea_condition: stop.condition.to_string(),
            },
            ocean: stop.ocean,
        })
        .collect()
}
