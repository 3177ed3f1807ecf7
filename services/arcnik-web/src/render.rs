use tera::Context;

use crate::sim::ExpeditionProgress;
use crate::state::AppState;
use arcnik_sim::Waypoint;

#[derive(Debug, Clone)]
pub struct ShellTemplateData {
    pub service_name: String,
    pub environment: String,
    pub vessel: String,
    pub expedition: ExpeditionProgress,
    pub route: Vec<Waypoint>,
}

impl ShellTemplateData {
    pub fn from_state(state: &AppState, expedition: ExpeditionProgress) -> Self {
        Self {
            service_name: state.config.service_name.clone(),
            environment: state.config.environment.to_string(),
            vessel: "R/V NIK 421".to_string(),
            expedition,
            route: state.route.clone(),
        }
    }
}

pub fn build_context(data: &ShellTemplateData) -> Context {
    let mut context = Context::new();
    context.insert("service_name", &data.service_name);
    context.insert("environment", &data.environment);
    context.insert("vessel", &data.vessel);
    context.insert("expedition", &data.expedition);
    context.insert("route", &data.route);
    context
}
