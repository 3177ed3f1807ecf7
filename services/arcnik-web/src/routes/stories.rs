use actix_web::{delete, get, post, web, HttpResponse};
use arcnik_core::{ArcError, StoryDraft, StoryId, StoryPost};
use arcnik_storage::{StorageStatus, StoreError};
use serde::Serialize;

use crate::routes::error_response;
use crate::state::AppState;

#[derive(Debug, Serialize)]
struct StoriesResponse {
    posts: Vec<StoryPost>,
    storage: StorageStatus,
}

#[derive(Debug, Serialize)]
struct StoryResponse {
    post: StoryPost,
    storage: StorageStatus,
}

#[derive(Debug, Serialize)]
struct StorageOnlyResponse {
    storage: StorageStatus,
}

fn store_error_response(err: StoreError) -> HttpResponse {
    match err {
        StoreError::InvalidStory(message) => HttpResponse::BadRequest().json(serde_json::json!({
            "error": message,
        })),
        StoreError::CapacityExceeded {
            attempted_bytes,
            ceiling_bytes,
        } => HttpResponse::PayloadTooLarge().json(serde_json::json!({
            "error": "story store is full",
            "attempted_bytes": attempted_bytes,
            "ceiling_bytes": ceiling_bytes,
            "overage_bytes": attempted_bytes.saturating_sub(ceiling_bytes),
        })),
        StoreError::NotFound(id) => HttpResponse::NotFound().json(serde_json::json!({
            "error": format!("no story with id {id}"),
        })),
        StoreError::Io(err) => {
            tracing::error!(error = %err, "story store io failure");
            HttpResponse::InternalServerError().json(serde_json::json!({
                "error": "story store unavailable",
            }))
        }
        StoreError::Encode(err) => {
            tracing::error!(error = %err, "story store encode failure");
            HttpResponse::InternalServerError().json(serde_json::json!({
                "error": "story store unavailable",
            }))
        }
    }
}

#[get("/ui/stories")]
pub async fn list(state: web::Data<AppState>) -> HttpResponse {
    HttpResponse::Ok().json(StoriesResponse {
        posts: state.stories.list(),
        storage: state.stories.status(),
    })
}

#[post("/ui/stories")]
pub async fn publish(state: web::Data<AppState>, draft: web::Json<StoryDraft>) -> HttpResponse {
    match state.stories.publish(draft.into_inner()) {
        Ok(post) => HttpResponse::Created().json(StoryResponse {
            post,
            storage: state.stories.status(),
        }),
        Err(err) => store_error_response(err),
    }
}

#[post("/ui/stories/{id}/like")]
pub async fn like(state: web::Data<AppState>, path: web::Path<String>) -> HttpResponse {
    let Some(id) = StoryId::parse(&path) else {
        return error_response(&ArcError::not_found(format!("no story with id {path}")));
    };
    match state.stories.toggle_like(id) {
        Ok(post) => HttpResponse::Ok().json(StoryResponse {
            post,
            storage: state.stories.status(),
        }),
        Err(err) => store_error_response(err),
    }
}

#[delete("/ui/stories/{id}")]
pub async fn remove(state: web::Data<AppState>, path: web::Path<String>) -> HttpResponse {
    let Some(id) = StoryId::parse(&path) else {
        return error_response(&ArcError::not_found(format!("no story with id {path}")));
    };
    match state.stories.delete(id) {
        Ok(()) => HttpResponse::Ok().json(StorageOnlyResponse {
            storage: state.stories.status(),
        }),
        Err(err) => store_error_response(err),
    }
}
