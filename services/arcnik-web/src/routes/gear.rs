use actix_web::{get, post, web, HttpResponse};
use arcnik_core::{ArcError, GearItem, GearStatus};
use serde::Serialize;

use crate::routes::error_response;
use crate::state::AppState;

#[derive(Debug, Serialize)]
struct GearResponse {
    items: Vec<GearItem>,
    complete: usize,
    total: usize,
}

fn gear_response(items: Vec<GearItem>) -> GearResponse {
    let complete = items
        .iter()
        .filter(|item| item.status == GearStatus::Complete)
        .count();
    let total = items.len();
    GearResponse {
        items,
        complete,
        total,
    }
}

#[get("/ui/gear")]
pub async fn list(state: web::Data<AppState>) -> HttpResponse {
    let items = state
        .gear
        .lock()
        .unwrap_or_else(|poisoned| poisoned.into_inner())
        .clone();
    HttpResponse::Ok().json(gear_response(items))
}

#[post("/ui/gear/{id}/cycle")]
pub async fn cycle(state: web::Data<AppState>, path: web::Path<u32>) -> HttpResponse {
    let id = path.into_inner();
    let mut items = state
        .gear
        .lock()
        .unwrap_or_else(|poisoned| poisoned.into_inner());
    let Some(item) = items.iter_mut().find(|item| item.id == id) else {
        return error_response(&ArcError::not_found(format!("no gear item with id {id}")));
    };
    item.status = item.status.next();
    tracing::debug!(id, status = ?item.status, "gear item cycled");
    HttpResponse::Ok().json(gear_response(items.clone()))
}
