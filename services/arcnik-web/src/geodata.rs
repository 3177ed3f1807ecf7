use actix_web::web::Bytes;
use std::sync::Mutex;
use std::time::{Duration, Instant};

pub const DEFAULT_GEODATA_URL: &str =
    "https://cdn.jsdelivr.net/npm/world-atlas@2/countries-110m.json";
const CACHE_TTL: Duration = Duration::from_secs(60 * 60);

#[derive(Debug, Clone)]
pub struct GeodataError {
    pub message: String,
}

impl GeodataError {
    fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

impl std::fmt::Display for GeodataError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl std::error::Error for GeodataError {}

struct CachedDocument {
    fetched_at: Instant,
    content_type: String,
    body: Bytes,
}

/// Fetches the world-boundary TopoJSON the map is drawn over. The document
/// is an external collaborator: it is cached and passed through untouched,
/// never parsed or validated here. A stale copy beats a failed refresh.
pub struct GeodataClient {
    url: String,
    client: reqwest::Client,
    cache: Mutex<Option<CachedDocument>>,
}

impl GeodataClient {
    pub fn new(url: String, client: reqwest::Client) -> Self {
        Self {
            url,
            client,
            cache: Mutex::new(None),
        }
    }

    pub async fn fetch(&self) -> Result<(String, Bytes), GeodataError> {
        let now = Instant::now();
        if let Ok(cache) = self.cache.lock() {
            if let Some(cached) = cache.as_ref() {
                if now.duration_since(cached.fetched_at) < CACHE_TTL {
                    return Ok((cached.content_type.clone(), cached.body.clone()));
                }
            }
        }

        match self.fetch_fresh().await {
            Ok((content_type, body)) => {
                if let Ok(mut cache) = self.cache.lock() {
                    *cache = Some(CachedDocument {
                        fetched_at: now,
                        content_type: content_type.clone(),
                        body: body.clone(),
                    });
                }
                Ok((content_type, body))
            }
            Err(err) => {
                tracing::warn!(url = %self.url, error = %err, "geodata fetch failed");
                if let Ok(cache) = self.cache.lock() {
                    if let Some(cached) = cache.as_ref() {
                        return Ok((cached.content_type.clone(), cached.body.clone()));
                    }
                }
                Err(err)
            }
        }
    }

    async fn fetch_fresh(&self) -> Result<(String, Bytes), GeodataError> {
        let response = self
            .client
            .get(&self.url)
            .send()
            .await
            .map_err(|err| GeodataError::new(err.to_string()))?;
        if !response.status().is_success() {
            return Err(GeodataError::new(format!(
                "geodata upstream returned {}",
                response.status()
            )));
        }
        let content_type = response
            .headers()
            .get(reqwest::header::CONTENT_TYPE)
            .and_then(|value| value.to_str().ok())
            .unwrap_or("application/json")
            .to_string();
        let body = response
            .bytes()
            .await
            .map_err(|err| GeodataError::new(err.to_string()))?;
        Ok((content_type, Bytes::from(body.to_vec())))
    }
}
