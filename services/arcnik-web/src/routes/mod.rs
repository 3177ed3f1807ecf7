pub mod gear;
pub mod health;
pub mod map;
pub mod sim;
pub mod stories;
pub mod ui;
pub mod wildlife;

use actix_web::http::StatusCode;
use actix_web::{web, HttpResponse};
use arcnik_core::{ArcError, ErrorCode};

/// Shared domain-error to HTTP mapping for the JSON routes.
pub(crate) fn error_response(err: &ArcError) -> HttpResponse {
    let status = match err.code {
        ErrorCode::InvalidInput => StatusCode::BAD_REQUEST,
        ErrorCode::NotFound => StatusCode::NOT_FOUND,
        ErrorCode::CapacityExceeded => StatusCode::PAYLOAD_TOO_LARGE,
        ErrorCode::Upstream => StatusCode::BAD_GATEWAY,
        ErrorCode::Internal => StatusCode::INTERNAL_SERVER_ERROR,
    };
    HttpResponse::build(status).json(serde_json::json!({
        "error": err.message,
    }))
}

pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(health::health)
        .service(ui::index)
        .service(sim::dashboard)
        .service(sim::dashboard_stream)
        .service(sim::tracking)
        .service(sim::tracking_toggle)
        .service(sim::tracking_reset)
        .service(map::route)
        .service(map::map_view)
        .service(map::geodata)
        .service(stories::list)
        .service(stories::publish)
        .service(stories::like)
        .service(stories::remove)
        .service(gear::list)
        .service(gear::cycle)
        .service(wildlife::list)
        .service(wildlife::report);
}
