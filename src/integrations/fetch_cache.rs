use crate::error::{AppError, Result};
use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Mutex;
use std::time::{Duration, Instant};

/// HTTP fetch-with-cache capability used for metadata documents.
///
/// `cache_refresh` is how long a previously fetched body stays valid; the
/// caller passes it explicitly on every fetch.
#[async_trait]
pub trait MetadataFetcher: Send + Sync {
    async fn fetch_json(&self, url: &str, cache_refresh: Duration) -> Result<serde_json::Value>;
}

#[derive(Debug, Clone)]
struct CacheSlot {
    fetched_at: Instant,
    body: serde_json::Value,
}

impl CacheSlot {
    fn is_fresh(&self, ttl: Duration) -> bool {
        self.fetched_at.elapsed() < ttl
    }
}

/// Default `MetadataFetcher`: reqwest GET with a per-URL TTL cache.
/// One slot per URL, overwritten on refresh.
pub struct CachedHttpClient {
    client: reqwest::Client,
    cache: Mutex<HashMap<String, CacheSlot>>,
}

impl CachedHttpClient {
    pub fn new() -> Self {
        Self {
            client: reqwest::Client::new(),
            cache: Mutex::new(HashMap::new()),
        }
    }

    fn cached(&self, url: &str, ttl: Duration) -> Option<serde_json::Value> {
        let cache = self.cache.lock().expect("fetch cache poisoned");
        cache
            .get(url)
            .filter(|slot| slot.is_fresh(ttl))
            .map(|slot| slot.body.clone())
    }

    fn store(&self, url: &str, body: serde_json::Value) {
        let mut cache = self.cache.lock().expect("fetch cache poisoned");
        cache.insert(
            url.to_string(),
            CacheSlot {
                fetched_at: Instant::now(),
                body,
            },
        );
    }
}

impl Default for CachedHttpClient {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl MetadataFetcher for CachedHttpClient {
    async fn fetch_json(&self, url: &str, cache_refresh: Duration) -> Result<serde_json::Value> {
        if let Some(body) = self.cached(url, cache_refresh) {
            tracing::debug!("Metadata cache hit for {}", url);
            return Ok(body);
        }

        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|e| AppError::MetadataFetch(format!("GET {} failed: {}", url, e)))?;

        let status = response.status();
        if !status.is_success() {
            return Err(AppError::MetadataFetch(format!(
                "GET {} returned {}",
                url, status
            )));
        }

        let body: serde_json::Value = response
            .json()
            .await
            .map_err(|e| AppError::MetadataFetch(format!("Decoding {} failed: {}", url, e)))?;

        self.store(url, body.clone());
        Ok(body)
    }
}
