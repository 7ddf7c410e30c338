//! Result cache for the dashboard's read queries.
//!
//! Entries are keyed by query identity and live until they are invalidated
//! explicitly; there is no expiry. A failed load leaves the entry empty so the
//! next request tries again.

use crate::address::StationAddress;
use crate::error::Result;
use crate::summary::RegionSummary;
use chrono::{DateTime, Utc};
use std::collections::HashMap;
use std::fmt::Debug;
use std::future::Future;
use std::hash::Hash;
use std::sync::Arc;
use tokio::sync::RwLock;
use tracing::{debug, info};

#[derive(Debug)]
pub struct Cached<V> {
    pub value: Arc<V>,
    pub loaded_at: DateTime<Utc>,
}

impl<V> Clone for Cached<V> {
    fn clone(&self) -> Self {
        Self {
            value: Arc::clone(&self.value),
            loaded_at: self.loaded_at,
        }
    }
}

pub struct QueryCache<K, V> {
    name: &'static str,
    entries: RwLock<HashMap<K, Cached<V>>>,
}

impl<K, V> QueryCache<K, V>
where
    K: Eq + Hash + Clone + Debug,
{
    pub fn new(name: &'static str) -> Self {
        Self {
            name,
            entries: RwLock::new(HashMap::new()),
        }
    }

    pub async fn get(&self, key: &K) -> Option<Cached<V>> {
        self.entries.read().await.get(key).cloned()
    }

    /// Returns the cached value for `key`, running `load` on a miss.
    pub async fn get_or_try_load<F, Fut>(&self, key: K, load: F) -> Result<Cached<V>>
    where
        F: FnOnce() -> Fut,
        Fut: Future<Output = Result<V>>,
    {
        if let Some(hit) = self.get(&key).await {
            debug!("{} cache hit for {:?}", self.name, key);
            return Ok(hit);
        }

        let mut entries = self.entries.write().await;
        // Another request may have filled the entry while we waited.
        if let Some(hit) = entries.get(&key) {
            return Ok(hit.clone());
        }

        debug!("{} cache miss for {:?}", self.name, key);
        let cached = Cached {
            value: Arc::new(load().await?),
            loaded_at: Utc::now(),
        };
        entries.insert(key, cached.clone());
        Ok(cached)
    }

    pub async fn invalidate(&self, key: &K) {
        self.entries.write().await.remove(key);
    }

    pub async fn clear(&self) {
        self.entries.write().await.clear();
    }

    pub async fn entry_count(&self) -> usize {
        self.entries.read().await.len()
    }
}

/// Every cached query the dashboard issues.
pub struct DashboardCache {
    /// Keyed by registration year.
    pub summaries: QueryCache<i32, Vec<RegionSummary>>,
    pub addresses: QueryCache<(), Vec<StationAddress>>,
}

impl DashboardCache {
    pub fn new() -> Self {
        Self {
            summaries: QueryCache::new("region summary"),
            addresses: QueryCache::new("station addresses"),
        }
    }

    pub async fn invalidate_all(&self) {
        self.summaries.clear().await;
        self.addresses.clear().await;
        info!("Dashboard cache invalidated");
    }
}

impl Default for DashboardCache {
    fn default() -> Self {
        Self::new()
    }
}

pub fn get_cache_from_context()
-> std::result::Result<Arc<DashboardCache>, leptos::prelude::ServerFnError> {
    use leptos::prelude::{ServerFnError, use_context};
    use_context::<Arc<DashboardCache>>()
        .ok_or_else(|| ServerFnError::new("Query cache missing from context"))
}
