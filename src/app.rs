//! Application context built once at startup and shared with every handler.

use anyhow::{anyhow, Result};
use std::sync::Arc;

use crate::bot::pipeline::RequestPipeline;
use crate::config::Config;
use crate::domain::{ObservanceCalendar, RegionDirectory};
use crate::services::prayer_cache::{CacheMaintenance, PrayerTimeCache};
use crate::services::prayer_times::{AladhanClient, PrayerTimeProvider};
use crate::services::subscription::{MembershipSource, SubscriptionGate};

/// Shared state handed to every update handler.
pub struct AppContext {
    pub pipeline: RequestPipeline,
    pub join_url: String,
    /// Present only when the prayer-times cache is enabled.
    pub cache: Option<Arc<dyn CacheMaintenance>>,
}

impl AppContext {
    pub fn new(
        pipeline: RequestPipeline,
        join_url: impl Into<String>,
        cache: Option<Arc<dyn CacheMaintenance>>,
    ) -> Self {
        Self {
            pipeline,
            join_url: join_url.into(),
            cache,
        }
    }

    /// Wires the production collaborators: `membership` is the Telegram bot
    /// and prayer times come from the configured Aladhan endpoint.
    pub fn from_config(config: &Config, membership: Arc<dyn MembershipSource>) -> Result<Self> {
        let client = AladhanClient::new(config.prayer_api_url.clone(), config.lookup_timeout)
            .map_err(|e| anyhow!("Failed to build prayer times client: {e}"))?;

        let provider: Arc<dyn PrayerTimeProvider>;
        let mut cache: Option<Arc<dyn CacheMaintenance>> = None;
        if config.prayer_cache_enabled {
            let cached = Arc::new(PrayerTimeCache::new(client));
            provider = cached.clone();
            cache = Some(cached);
        } else {
            provider = Arc::new(client);
        }

        let gate = SubscriptionGate::new(membership, config.channel.clone(), config.lookup_timeout);
        let pipeline = RequestPipeline::new(
            Arc::new(RegionDirectory::uzbekistan()),
            ObservanceCalendar::new(config.observance_start),
            gate,
            provider,
        );

        Ok(Self::new(pipeline, config.invite_link.clone(), cache))
    }

    pub fn calendar(&self) -> ObservanceCalendar {
        *self.pipeline.calendar()
    }
}
