mod geodata;
mod render;
mod routes;
mod seed;
mod sim;
mod state;

use actix_files::Files;
use actix_web::rt::time::interval;
use actix_web::{web, App, HttpServer};
use arcnik_config::{ServiceConfig, StoryStoreConfig};
use arcnik_observability::{init, log_startup, ObservabilityConfig};
use arcnik_sim::expedition_route;
use arcnik_storage::StoryStore;
use geodata::{GeodataClient, DEFAULT_GEODATA_URL};
use rand::rngs::SmallRng;
use rand::SeedableRng;
use sim::{TrackingSession, TRACKING_TICK_MS};
use state::AppState;
use std::env;
use std::io;
use std::path::Path;
use std::sync::Mutex;
use std::time::Duration;
use tera::Tera;

#[actix_web::main]
async fn main() -> io::Result<()> {
    let config = ServiceConfig::from_env("arcnik-web");
    let obs_config = ObservabilityConfig {
        service_name: config.service_name.clone(),
        environment: config.environment.to_string(),
        log_level: config.log_level.clone(),
        metrics_addr: config.metrics_addr.clone(),
    };
    let handle = init(&obs_config);
    log_startup(&handle, &obs_config.environment);

    let template_root =
        env::var("ARCNIK_WEB_TEMPLATES_DIR").unwrap_or_else(|_| "templates".to_string());
    let template_root = if Path::new(&template_root).exists() {
        template_root
    } else {
        "services/arcnik-web/templates".to_string()
    };
    let template_glob = format!("{}/**/*", template_root);
    let tera = Tera::new(&template_glob).expect("Failed to load templates");

    let static_root = env::var("ARCNIK_WEB_STATIC_DIR").unwrap_or_else(|_| "static".to_string());
    let static_root = if Path::new(&static_root).exists() {
        static_root
    } else {
        "services/arcnik-web/static".to_string()
    };

    let geodata_url =
        env::var("ARCNIK_GEODATA_URL").unwrap_or_else(|_| DEFAULT_GEODATA_URL.to_string());
    let geodata_client = reqwest::Client::builder()
        .user_agent(format!("ArcNIK/{}", env!("CARGO_PKG_VERSION")))
        .build()
        .map_err(|err| io::Error::new(io::ErrorKind::Other, err.to_string()))?;

    let stories = StoryStore::open(Path::new(&config.data_dir), StoryStoreConfig::from_env());

    let bind_addr = config.bind_addr.clone();
    let state = web::Data::new(AppState {
        config,
        tera,
        route: expedition_route(),
        stories,
        tracking: Mutex::new(TrackingSession::new()),
        gear: Mutex::new(seed::gear_checklist()),
        sightings: Mutex::new(seed::wildlife_log()),
        geodata: GeodataClient::new(geodata_url, geodata_client),
    });

    // Advances the shared tracking session while it is in the Running state.
    let ticker_state = state.clone();
    let ticker = actix_web::rt::spawn(async move {
        let mut ticker = interval(Duration::from_millis(TRACKING_TICK_MS));
        let mut rng = SmallRng::from_entropy();
        loop {
            ticker.tick().await;
            let mut session = ticker_state
                .tracking
                .lock()
                .unwrap_or_else(|poisoned| poisoned.into_inner());
            if session.driver.tick() {
                session.telemetry.advance(&mut rng);
                metrics::counter!("arcnik_sim_ticks_total").increment(1);
            }
        }
    });

    let server = HttpServer::new(move || {
        App::new()
            .app_data(state.clone())
            .service(Files::new("/static", static_root.clone()).prefer_utf8(true))
            .configure(routes::configure)
    })
    .bind(bind_addr)?
    .run()
    .await;

    ticker.abort();
    server
}
