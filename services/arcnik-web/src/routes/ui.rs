use actix_web::{error::ErrorInternalServerError, get, web, Error, HttpResponse};
use arcnik_core::now_epoch_millis;

use crate::render::{build_context, ShellTemplateData};
use crate::sim::expedition_progress;
use crate::state::AppState;

#[get("/")]
pub async fn index(state: web::Data<AppState>) -> Result<HttpResponse, Error> {
    let expedition = expedition_progress(&state.route, now_epoch_millis());
    let data = ShellTemplateData::from_state(&state, expedition);
    let context = build_context(&data);

    let body = state
        .tera
        .render("index.html", &context)
        .map_err(ErrorInternalServerError)?;

    Ok(HttpResponse::Ok()
        .content_type("text/html; charset=utf-8")
        .body(body))
}
