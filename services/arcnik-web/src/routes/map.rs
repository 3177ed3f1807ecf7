use actix_web::{error::ErrorBadRequest, get, web, Error, HttpResponse};
use arcnik_core::{ArcError, ErrorCode};
use arcnik_geo::{
    classify_segment, layer_catalog, project, BoundingBox, LayerDef, LayerKind, MapPoint,
    SegmentPhase,
};
use arcnik_sim::{locate, ocean_value, Waypoint};
use serde::{Deserialize, Serialize};

use crate::routes::error_response;
use crate::state::AppState;

const VISITED_COLOR: &str = "#10b981";
const UPCOMING_COLOR: &str = "#3b82f6";

#[derive(Debug, Serialize)]
struct RouteWaypoint<'a> {
    #[serde(flatten)]
    waypoint: &'a Waypoint,
    point: MapPoint,
}

#[get("/ui/route")]
pub async fn route(state: web::Data<AppState>) -> HttpResponse {
    let waypoints: Vec<RouteWaypoint<'_>> = state
        .route
        .iter()
        .map(|waypoint| RouteWaypoint {
            waypoint,
            point: project(waypoint.position),
        })
        .collect();
    HttpResponse::Ok().json(waypoints)
}

#[derive(Debug, Deserialize)]
pub struct MapQuery {
    layers: Option<String>,
    selected: Option<String>,
}

#[derive(Debug, Serialize)]
struct MapMarker {
    name: String,
    point: MapPoint,
    visited: bool,
    color: &'static str,
}

#[derive(Debug, Serialize)]
struct MapSegment {
    from: MapPoint,
    to: MapPoint,
    phase: SegmentPhase,
    stroke: &'static str,
    dash_array: &'static str,
}

#[derive(Debug, Serialize)]
struct ShipMarker {
    point: MapPoint,
    progress: f64,
}

#[derive(Debug, Serialize)]
struct WaypointReadout<'a> {
    waypoint: &'a Waypoint,
    layer_values: Vec<LayerValue>,
}

#[derive(Debug, Serialize)]
struct LayerValue {
    layer: &'static str,
    value: f64,
    unit: &'static str,
    color: &'static str,
}

#[derive(Debug, Serialize)]
struct MapView<'a> {
    viewport: BoundingBox,
    markers: Vec<MapMarker>,
    segments: Vec<MapSegment>,
    ship: ShipMarker,
    legends: Vec<LayerDef>,
    selected: Option<WaypointReadout<'a>>,
}

/// Smallest box holding every route stop, padded so markers at the extremes
/// do not sit on the frame edge.
fn route_viewport(stops: &[Waypoint]) -> BoundingBox {
    const PAD_DEG: f64 = 3.0;
    let mut bounds = BoundingBox {
        north: -90.0,
        south: 90.0,
        east: -180.0,
        west: 180.0,
    };
    for waypoint in stops {
        bounds.north = bounds.north.max(waypoint.position.latitude);
        bounds.south = bounds.south.min(waypoint.position.latitude);
        bounds.east = bounds.east.max(waypoint.position.longitude);
        bounds.west = bounds.west.min(waypoint.position.longitude);
    }
    bounds.north = (bounds.north + PAD_DEG).min(90.0);
    bounds.south = (bounds.south - PAD_DEG).max(-90.0);
    bounds.east = (bounds.east + PAD_DEG).min(180.0);
    bounds.west = (bounds.west - PAD_DEG).max(-180.0);
    bounds
}

fn parse_layers(raw: Option<&str>) -> Result<Vec<LayerKind>, String> {
    let Some(raw) = raw else {
        return Ok(Vec::new());
    };
    let mut kinds = Vec::new();
    for token in raw.split(',') {
        let token = token.trim();
        if token.is_empty() {
            continue;
        }
        match LayerKind::parse(token) {
            Some(kind) => {
                if !kinds.contains(&kind) {
                    kinds.push(kind);
                }
            }
            None => return Err(format!("unknown layer: {token}")),
        }
    }
    Ok(kinds)
}

/// The full map payload: route markers colored by the first enabled overlay
/// (visited status when no overlay is on), phase-styled segments, the ship
/// marker at the tracking progress, and legends for the enabled overlays.
#[get("/ui/map")]
pub async fn map_view(
    state: web::Data<AppState>,
    query: web::Query<MapQuery>,
) -> Result<HttpResponse, Error> {
    let enabled = parse_layers(query.layers.as_deref()).map_err(ErrorBadRequest)?;
    let catalog = layer_catalog();
    let legends: Vec<LayerDef> = catalog
        .iter()
        .filter(|def| enabled.contains(&def.kind))
        .cloned()
        .collect();
    let primary = legends.first();

    let progress = {
        let session = state
            .tracking
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner());
        session.driver.progress()
    };

    let markers: Vec<MapMarker> = state
        .route
        .iter()
        .map(|waypoint| {
            let color = match primary {
                Some(def) => def.scale.color_for(ocean_value(waypoint, def.kind)),
                None => {
                    if waypoint.visited {
                        VISITED_COLOR
                    } else {
                        UPCOMING_COLOR
                    }
                }
            };
            MapMarker {
                name: waypoint.name.clone(),
                point: project(waypoint.position),
                visited: waypoint.visited,
                color,
            }
        })
        .collect();

    let count = state.route.len();
    let segments: Vec<MapSegment> = state
        .route
        .windows(2)
        .enumerate()
        .map(|(index, pair)| {
            let phase = classify_segment(index, count, progress);
            MapSegment {
                from: project(pair[0].position),
                to: project(pair[1].position),
                phase,
                stroke: phase.stroke(),
                dash_array: phase.dash_array(),
            }
        })
        .collect();

    let ship_snapshot = locate(&state.route, progress);
    let ship = ShipMarker {
        point: project(ship_snapshot.position),
        progress,
    };

    let selected = query.selected.as_deref().and_then(|name| {
        state
            .route
            .iter()
            .find(|waypoint| waypoint.name == name)
            .map(|waypoint| WaypointReadout {
                waypoint,
                layer_values: catalog
                    .iter()
                    .map(|def| {
                        let value = ocean_value(waypoint, def.kind);
                        LayerValue {
                            layer: def.kind.id(),
                            value,
                            unit: def.unit,
                            color: def.scale.color_for(value),
                        }
                    })
                    .collect(),
            })
    });

    Ok(HttpResponse::Ok().json(MapView {
        viewport: route_viewport(&state.route),
        markers,
        segments,
        ship,
        legends,
        selected,
    }))
}

#[get("/ui/geodata")]
pub async fn geodata(state: web::Data<AppState>) -> HttpResponse {
    match state.geodata.fetch().await {
        Ok((content_type, body)) => HttpResponse::Ok()
            .content_type(content_type)
            .insert_header(("Cache-Control", "public, max-age=3600"))
            .body(body),
        Err(err) => error_response(&ArcError::new(ErrorCode::Upstream, err.message)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn layer_query_splits_and_dedupes() {
        let kinds = parse_layers(Some("temperature, ice,temperature")).unwrap();
        assert_eq!(kinds, vec![LayerKind::Temperature, LayerKind::Ice]);
    }

    #[test]
    fn layer_query_rejects_unknown_ids() {
        assert!(parse_layers(Some("temperature,plankton")).is_err());
    }

    #[test]
    fn empty_layer_query_enables_nothing() {
        assert!(parse_layers(None).unwrap().is_empty());
        assert!(parse_layers(Some("")).unwrap().is_empty());
    }

    #[test]
    fn viewport_contains_every_stop() {
        let stops = arcnik_sim::expedition_route();
        let viewport = route_viewport(&stops);
        for waypoint in &stops {
            assert!(viewport.contains(waypoint.position), "{}", waypoint.name);
        }
    }
}
