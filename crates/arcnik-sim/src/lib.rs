pub mod driver;
pub mod interpolate;
pub mod route;
pub mod sampler;
pub mod telemetry;

pub use driver::{Driver, RunState};
pub use interpolate::{locate, LocationSnapshot};
pub use route::{
    expedition_route, ocean_value, EnvBaseline, Expedition, OceanProfile, Waypoint, EXPEDITION,
};
pub use sampler::{sample, SampledReading, Visibility, TICK_NOISE_SCALE};
pub use telemetry::ShipTelemetry;
