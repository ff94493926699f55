use async_trait::async_trait;
use chrono::NaiveDate;
use dashmap::DashMap;
use std::sync::Arc;
use tokio_cron_scheduler::{Job, JobScheduler};

use crate::services::prayer_times::{LookupError, PrayerTimeProvider, PrayerWindow};
use crate::utils::datetime::local_now;
use crate::utils::logging::log_system_event;

type CacheKey = (String, NaiveDate);

/// Per-(city, date) cache in front of a [`PrayerTimeProvider`].
///
/// An entry is only ever valid for its own date, so freshness is per key and
/// entries for past dates are dropped by [`PrayerTimeCache::purge_before`].
/// Failures are never cached.
pub struct PrayerTimeCache<P> {
    inner: P,
    entries: DashMap<CacheKey, PrayerWindow>,
}

impl<P: PrayerTimeProvider> PrayerTimeCache<P> {
    pub fn new(inner: P) -> Self {
        Self {
            inner,
            entries: DashMap::new(),
        }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Removes every entry dated before `today`, returning how many were dropped.
    pub fn purge_before(&self, today: NaiveDate) -> usize {
        let before = self.entries.len();
        self.entries.retain(|(_, date), _| *date >= today);
        before - self.entries.len()
    }
}

#[async_trait]
impl<P: PrayerTimeProvider> PrayerTimeProvider for PrayerTimeCache<P> {
    async fn fetch(&self, lookup_id: &str, date: NaiveDate) -> Result<PrayerWindow, LookupError> {
        let key = (lookup_id.to_string(), date);
        if let Some(hit) = self.entries.get(&key) {
            tracing::debug!("Prayer times cache hit for {} on {}", lookup_id, date);
            return Ok(hit.clone());
        }

        // Concurrent misses for the same key may both call out; the last
        // write wins and both values are for the same day.
        let window = self.inner.fetch(lookup_id, date).await?;
        self.entries.insert(key, window.clone());
        Ok(window)
    }
}

/// Type-erased view of a cache, used by the sweeper and the health endpoint.
pub trait CacheMaintenance: Send + Sync {
    fn purge_before(&self, today: NaiveDate) -> usize;
    fn entry_count(&self) -> usize;
}

impl<P: PrayerTimeProvider> CacheMaintenance for PrayerTimeCache<P> {
    fn purge_before(&self, today: NaiveDate) -> usize {
        PrayerTimeCache::purge_before(self, today)
    }

    fn entry_count(&self) -> usize {
        self.len()
    }
}

/// Scheduled job dropping cache entries for past dates.
pub struct CacheSweeper {
    cache: Arc<dyn CacheMaintenance>,
    scheduler: JobScheduler,
}

impl CacheSweeper {
    pub async fn new(cache: Arc<dyn CacheMaintenance>) -> Result<Self, Box<dyn std::error::Error + Send + Sync>> {
        let scheduler = JobScheduler::new().await?;

        Ok(Self { cache, scheduler })
    }

    pub async fn start(&mut self) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
        // Hourly, so the first sweep after local midnight happens regardless of host timezone
        let cache = self.cache.clone();

        let sweep_job = Job::new_async("0 5 * * * *", move |_uuid, _l| {
            let cache = cache.clone();
            Box::pin(async move {
                sweep(cache.as_ref());
            })
        })?;

        self.scheduler.add(sweep_job).await?;
        self.scheduler.start().await?;

        tracing::info!("Cache sweeper started - purging past dates every hour");
        Ok(())
    }

    pub async fn stop(&mut self) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
        self.scheduler.shutdown().await?;
        Ok(())
    }

    pub fn sweep_now(&self) -> usize {
        sweep(self.cache.as_ref())
    }
}

fn sweep(cache: &dyn CacheMaintenance) -> usize {
    let removed = cache.purge_before(local_now().date());
    if removed > 0 {
        log_system_event("Prayer times cache swept", Some(&format!("{removed} stale entries removed")));
    }
    removed
}
