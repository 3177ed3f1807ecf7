use actix_web::{get, web, HttpResponse};
use arcnik_core::now_epoch_millis;
use serde::Serialize;

use crate::state::AppState;

#[derive(Debug, Serialize)]
struct HealthResponse {
    status: &'static str,
    service: String,
    environment: String,
    timestamp_ms: u64,
}

#[get("/health")]
pub async fn health(state: web::Data<AppState>) -> HttpResponse {
    HttpResponse::Ok().json(HealthResponse {
        status: "ok",
        service: state.config.service_name.clone(),
        environment: state.config.environment.to_string(),
        timestamp_ms: now_epoch_millis(),
    })
}
