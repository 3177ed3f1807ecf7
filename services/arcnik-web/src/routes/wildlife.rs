use actix_web::{get, post, web, HttpResponse};
use arcnik_core::{
    now_epoch_millis, AnimalKind, ArcError, ArcResult, SightingId, WildlifeSighting,
};
use serde::Deserialize;

use crate::routes::error_response;
use crate::state::AppState;

#[get("/ui/wildlife")]
pub async fn list(state: web::Data<AppState>) -> HttpResponse {
    let sightings = state
        .sightings
        .lock()
        .unwrap_or_else(|poisoned| poisoned.into_inner())
        .clone();
    HttpResponse::Ok().json(sightings)
}

#[derive(Debug, Deserialize)]
pub struct SightingDraft {
    species: String,
    kind: AnimalKind,
    count: u32,
    location: String,
}

fn validate(draft: &SightingDraft) -> ArcResult<()> {
    if draft.species.trim().is_empty() {
        return Err(ArcError::invalid_input("species is required"));
    }
    if draft.location.trim().is_empty() {
        return Err(ArcError::invalid_input("location is required"));
    }
    if draft.count == 0 {
        return Err(ArcError::invalid_input("count must be at least 1"));
    }
    Ok(())
}

#[post("/ui/wildlife")]
pub async fn report(state: web::Data<AppState>, draft: web::Json<SightingDraft>) -> HttpResponse {
    let draft = draft.into_inner();
    if let Err(err) = validate(&draft) {
        return error_response(&err);
    }
    let sighting = WildlifeSighting {
        id: SightingId::new(),
        species: draft.species.trim().to_string(),
        kind: draft.kind,
        count: draft.count,
        location: draft.location.trim().to_string(),
        logged_at_ms: now_epoch_millis(),
    };
    let mut sightings = state
        .sightings
        .lock()
        .unwrap_or_else(|poisoned| poisoned.into_inner());
    // newest first, matching the story feed
    sightings.insert(0, sighting.clone());
    HttpResponse::Created().json(sighting)
}

#[cfg(test)]
mod tests {
    use super::*;
    use arcnik_core::ErrorCode;

    fn draft() -> SightingDraft {
        SightingDraft {
            species: "Adelie Penguin".to_string(),
            kind: AnimalKind::Penguin,
            count: 12,
            location: "Paradise Bay".to_string(),
        }
    }

    #[test]
    fn accepts_a_complete_sighting() {
        assert!(validate(&draft()).is_ok());
    }

    #[test]
    fn rejects_blank_species_and_location() {
        let mut blank_species = draft();
        blank_species.species = "   ".to_string();
        let err = validate(&blank_species).unwrap_err();
        assert_eq!(err.code, ErrorCode::InvalidInput);

        let mut blank_location = draft();
        blank_location.location = String::new();
        assert!(validate(&blank_location).is_err());
    }

    #[test]
    fn rejects_zero_count() {
        let mut empty = draft();
        empty.count = 0;
        assert!(validate(&empty).is_err());
    }
}
