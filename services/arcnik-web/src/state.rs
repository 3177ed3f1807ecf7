use arcnik_config::ServiceConfig;
use arcnik_core::{GearItem, WildlifeSighting};
use arcnik_sim::Waypoint;
use arcnik_storage::StoryStore;
use std::sync::Mutex;
use tera::Tera;

use crate::geodata::GeodataClient;
use crate::sim::TrackingSession;

pub struct AppState {
    pub config: ServiceConfig,
    pub tera: Tera,
    pub route: Vec<Waypoint>,
    pub stories: StoryStore,
    pub tracking: Mutex<TrackingSession>,
    pub gear: Mutex<Vec<GearItem>>,
    pub sightings: Mutex<Vec<WildlifeSighting>>,
    pub geodata: GeodataClient,
}
