use std::sync::Arc;
use std::time::Duration;

use crate::models::FrequencyEntry;

/// In-process cache for analytics aggregates
///
/// Skill demand and regional insights scan every active posting, so results
/// are kept for a short TTL instead of being recomputed per admin page view.
#[derive(Clone)]
pub struct AnalyticsCache {
    entries: moka::future::Cache<String, Arc<Vec<FrequencyEntry>>>,
}

impl AnalyticsCache {
    pub fn new(max_entries: u64, ttl_secs: u64) -> Self {
        let entries = moka::future::CacheBuilder::new(max_entries)
            .time_to_live(Duration::from_secs(ttl_secs))
            .build();

        Self { entries }
    }

    pub async fn get(&self, key: &str) -> Option<Arc<Vec<FrequencyEntry>>> {
        let hit = self.entries.get(key).await;
        if hit.is_some() {
            tracing::trace!("Analytics cache hit: {}", key);
        }
        hit
    }

    pub async fn set(&self, key: &str, value: Vec<FrequencyEntry>) -> Arc<Vec<FrequencyEntry>> {
        let value = Arc::new(value);
        self.entries.insert(key.to_string(), Arc::clone(&value)).await;
        tracing::trace!("Analytics cache set: {}", key);
        value
    }
}

/// Cache key builder
pub struct CacheKey;

impl CacheKey {
    pub fn skill_demand(top: usize) -> String {
        format!("skills:{}", top)
    }

    pub fn regional_insights(top: usize) -> String {
        format!("regions:{}", top)
    }
}
