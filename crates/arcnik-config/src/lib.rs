use serde::{Deserialize, Serialize};
use std::{env, fmt};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Environment {
    Local,
    Dev,
    Test,
    Staging,
    Prod,
}

impl Environment {
    pub fn from_env(value: &str) -> Self {
        match value.to_ascii_lowercase().as_str() {
            "local" => Self::Local,
            "dev" | "development" => Self::Dev,
            "test" | "testing" => Self::Test,
            "staging" => Self::Staging,
            "prod" | "production" => Self::Prod,
            _ => Self::Local,
        }
    }
}

impl fmt::Display for Environment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let value = match self {
            Self::Local => "local",
            Self::Dev => "dev",
            Self::Test => "test",
            Self::Staging => "staging",
            Self::Prod => "prod",
        };
        write!(f, "{}", value)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServiceConfig {
    pub service_name: String,
    pub environment: Environment,
    pub bind_addr: String,
    pub metrics_addr: Option<String>,
    pub log_level: String,
    pub data_dir: String,
}

impl ServiceConfig {
    pub fn from_env(default_service_name: &str) -> Self {
        let service_name = env_var("ARCNIK_SERVICE_NAME", default_service_name.to_string());
        let environment = Environment::from_env(&env_var("ARCNIK_ENV", "local".to_string()));
        let bind_addr = env_var("ARCNIK_BIND_ADDR", "0.0.0.0:8080".to_string());
        let metrics_addr = env::var("ARCNIK_METRICS_ADDR").ok();
        let log_level = env_var("ARCNIK_LOG_LEVEL", "info".to_string());
        let data_dir = env_var("ARCNIK_DATA_DIR", "/var/lib/arcnik".to_string());

        Self {
            service_name,
            environment,
            bind_addr,
            metrics_addr,
            log_level,
            data_dir,
        }
    }
}

/// Story-store tuning knobs; both thresholds are byte counts against the
/// serialized collection.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StoryStoreConfig {
    pub ceiling_bytes: u64,
    pub warn_bytes: u64,
}

impl StoryStoreConfig {
    pub fn from_env() -> Self {
        let ceiling_bytes = env_var_u64("ARCNIK_STORY_CEILING_BYTES", 9 * 1024 * 1024);
        let warn_bytes = env_var_u64("ARCNIK_STORY_WARN_BYTES", 8 * 1024 * 1024);
        Self {
            ceiling_bytes,
            warn_bytes,
        }
    }
}

impl Default for StoryStoreConfig {
    fn default() -> Self {
        Self {
            ceiling_bytes: 9 * 1024 * 1024,
            warn_bytes: 8 * 1024 * 1024,
        }
    }
}

fn env_var(key: &str, default: String) -> String {
    env::var(key).unwrap_or(default)
}

fn env_var_u64(key: &str, default: u64) -> u64 {
    env::var(key)
        .ok()
        .and_then(|value| value.parse::<u64>().ok())
        .unwrap_or(default)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn environment_parses_aliases() {
        assert_eq!(Environment::from_env("production"), Environment::Prod);
        assert_eq!(Environment::from_env("DEV"), Environment::Dev);
        assert_eq!(Environment::from_env("unknown"), Environment::Local);
    }
}
