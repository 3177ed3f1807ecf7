use arcnik_core::{now_epoch_millis, EpochMillis};
use arcnik_geo::{project, Coordinate, MapPoint};
use arcnik_sim::{
    locate, sample, Driver, RunState, SampledReading, ShipTelemetry, Waypoint, EXPEDITION,
};
use rand::Rng;
use serde::Serialize;

/// Shared tracking-panel state: the driver starts paused and only moves once
/// the operator resumes it. The dashboard SSE stream runs its own driver.
pub const TRACKING_INCREMENT: f64 = 0.001;
pub const TRACKING_TICK_MS: u64 = 1_000;
pub const STREAM_INCREMENT: f64 = 0.0025;
pub const STREAM_TICK_MS: u64 = 1_000;

pub struct TrackingSession {
    pub driver: Driver,
    pub telemetry: ShipTelemetry,
}

impl TrackingSession {
    pub fn new() -> Self {
        Self {
            driver: Driver::new(TRACKING_INCREMENT, RunState::Paused),
            telemetry: ShipTelemetry::default(),
        }
    }
}

impl Default for TrackingSession {
    fn default() -> Self {
        Self::new()
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct ExpeditionProgress {
    pub days_elapsed: u64,
    pub days_remaining: u64,
    pub total_days: u32,
    pub next_port: Option<String>,
    pub days_to_next_port: Option<u64>,
}

const DAY_MS: EpochMillis = 24 * 60 * 60 * 1_000;

pub fn expedition_progress(route: &[Waypoint], now_ms: EpochMillis) -> ExpeditionProgress {
    let days_elapsed = now_ms.saturating_sub(EXPEDITION.start_ms) / DAY_MS;
    let days_remaining = EXPEDITION.end_ms.saturating_sub(now_ms) / DAY_MS;
    let next = route.iter().find(|wp| !wp.visited);
    ExpeditionProgress {
        days_elapsed,
        days_remaining,
        total_days: EXPEDITION.total_days,
        next_port: next.map(|wp| wp.name.clone()),
        days_to_next_port: next.map(|wp| wp.arrival_ms.saturating_sub(now_ms) / DAY_MS),
    }
}

/// Everything one animation tick produces for the dashboard.
#[derive(Debug, Clone, Serialize)]
pub struct SimSnapshot {
    pub timestamp_ms: EpochMillis,
    pub progress: f64,
    pub run_state: RunState,
    pub position: Coordinate,
    pub map_point: MapPoint,
    pub reference_name: String,
    pub sea_condition: String,
    pub weather: SampledReading,
    pub telemetry: ShipTelemetry,
    pub expedition: ExpeditionProgress,
}

pub fn build_snapshot<R: Rng>(
    route: &[Waypoint],
    driver: &Driver,
    telemetry: &ShipTelemetry,
    noise_scale: f64,
    rng: &mut R,
) -> SimSnapshot {
    let snapshot = locate(route, driver.progress());
    let weather = sample(&snapshot, noise_scale, rng);
    let now_ms = now_epoch_millis();
    SimSnapshot {
        timestamp_ms: now_ms,
        progress: driver.progress(),
        run_state: driver.run_state(),
        position: snapshot.position,
        map_point: project(snapshot.position),
        reference_name: snapshot.reference_name.clone(),
        sea_condition: snapshot.sea_condition.clone(),
        weather,
        telemetry: *telemetry,
        expedition: expedition_progress(route, now_ms),
    }
}
