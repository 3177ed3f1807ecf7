use actix_web::rt::time::interval;
use actix_web::web::Bytes;
use actix_web::{get, post, web, HttpResponse};
use arcnik_sim::{Driver, RunState, ShipTelemetry, TICK_NOISE_SCALE};
use rand::rngs::SmallRng;
use rand::SeedableRng;
use serde::Serialize;
use std::time::Duration;

use crate::sim::{build_snapshot, SimSnapshot, STREAM_INCREMENT, STREAM_TICK_MS};
use crate::state::AppState;

#[get("/ui/dashboard")]
pub async fn dashboard(state: web::Data<AppState>) -> HttpResponse {
    let session = state
        .tracking
        .lock()
        .unwrap_or_else(|poisoned| poisoned.into_inner());
    let mut rng = rand::thread_rng();
    let snapshot = build_snapshot(
        &state.route,
        &session.driver,
        &session.telemetry,
        TICK_NOISE_SCALE,
        &mut rng,
    );
    HttpResponse::Ok().json(snapshot)
}

/// Each subscriber gets a private animation driver; dropping the connection
/// drops the driver and its interval with it.
#[get("/ui/dashboard/stream")]
pub async fn dashboard_stream(state: web::Data<AppState>) -> HttpResponse {
    let route = state.route.clone();
    let driver = Driver::new(STREAM_INCREMENT, RunState::Running);
    let telemetry = ShipTelemetry::default();
    let rng = SmallRng::from_entropy();
    let ticker = interval(Duration::from_millis(STREAM_TICK_MS));

    let stream = futures_util::stream::unfold(
        (ticker, route, driver, telemetry, rng),
        |(mut ticker, route, mut driver, mut telemetry, mut rng)| async move {
            ticker.tick().await;
            driver.tick();
            telemetry.advance(&mut rng);
            let snapshot = build_snapshot(&route, &driver, &telemetry, TICK_NOISE_SCALE, &mut rng);
            metrics::counter!("arcnik_sim_ticks_total").increment(1);
            let payload = build_sse_event("snapshot", &snapshot);
            Some((
                Ok::<Bytes, actix_web::Error>(Bytes::from(payload)),
                (ticker, route, driver, telemetry, rng),
            ))
        },
    );

    HttpResponse::Ok()
        .insert_header(("Content-Type", "text/event-stream"))
        .insert_header(("Cache-Control", "no-cache"))
        .insert_header(("Connection", "keep-alive"))
        .streaming(stream)
}

fn build_sse_event<T: Serialize>(event: &str, payload: &T) -> String {
    let data = serde_json::to_string(payload).unwrap_or_else(|_| "{}".to_string());
    format!("event: {event}\ndata: {data}\n\n")
}

#[derive(Debug, Serialize)]
struct TrackingResponse {
    run_state: RunState,
    snapshot: SimSnapshot,
}

fn tracking_response(state: &AppState) -> TrackingResponse {
    let session = state
        .tracking
        .lock()
        .unwrap_or_else(|poisoned| poisoned.into_inner());
    let mut rng = rand::thread_rng();
    let snapshot = build_snapshot(
        &state.route,
        &session.driver,
        &session.telemetry,
        TICK_NOISE_SCALE,
        &mut rng,
    );
    TrackingResponse {
        run_state: session.driver.run_state(),
        snapshot,
    }
}

#[get("/ui/tracking")]
pub async fn tracking(state: web::Data<AppState>) -> HttpResponse {
    HttpResponse::Ok().json(tracking_response(&state))
}

#[post("/ui/tracking/toggle")]
pub async fn tracking_toggle(state: web::Data<AppState>) -> HttpResponse {
    {
        let mut session = state
            .tracking
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner());
        let next = session.driver.toggle();
        tracing::info!(run_state = ?next, "tracking session toggled");
    }
    HttpResponse::Ok().json(tracking_response(&state))
}

#[post("/ui/tracking/reset")]
pub async fn tracking_reset(state: web::Data<AppState>) -> HttpResponse {
    {
        let mut session = state
            .tracking
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner());
        session.driver.reset();
        session.telemetry = ShipTelemetry::default();
        tracing::info!("tracking session reset");
    }
    HttpResponse::Ok().json(tracking_response(&state))
}
