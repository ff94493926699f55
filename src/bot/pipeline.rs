//! Gate → region → lookup → reply, for one interaction at a time.
//!
//! The pipeline never talks to Telegram directly: it returns a typed [`Reply`]
//! that the handlers render and send. Every branch yields exactly one reply,
//! except a region name that is not in the directory, which is ignored.

use chrono::{NaiveDate, NaiveDateTime};
use std::sync::Arc;

use crate::domain::{Countdown, ObservanceCalendar, RegionDirectory};
use crate::services::prayer_times::{PrayerTimeProvider, PrayerWindow};
use crate::services::subscription::SubscriptionGate;
use crate::utils::logging::log_interaction_outcome;

/// A classified inbound interaction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Interaction {
    Start,
    Recheck,
    RegionSelection(String),
}

impl Interaction {
    pub fn kind(&self) -> &'static str {
        match self {
            Interaction::Start => "start",
            Interaction::Recheck => "recheck",
            Interaction::RegionSelection(_) => "region",
        }
    }
}

/// Who sent the interaction.
#[derive(Debug, Clone)]
pub struct Caller {
    pub user_id: u64,
    pub first_name: String,
}

impl Caller {
    pub fn new(user_id: u64, first_name: impl Into<String>) -> Self {
        Self {
            user_id,
            first_name: first_name.into(),
        }
    }
}

/// Everything the final prayer-times message shows.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PrayerReport {
    pub region: String,
    pub date: NaiveDate,
    pub day_index: i64,
    pub window: PrayerWindow,
    pub countdown: Countdown,
}

/// What the bot answers, before it is rendered for Telegram.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Reply {
    /// Gate failed on `/start` (greets by name) or on a region pick (no name).
    SubscribePrompt { first_name: Option<String> },
    /// Gate failed on the re-check button.
    RecheckDenied,
    RegionPrompt {
        first_name: String,
        countdown: Countdown,
        regions: Vec<String>,
    },
    PrayerTimes(PrayerReport),
    LookupFailed,
}

impl Reply {
    fn label(&self) -> &'static str {
        match self {
            Reply::SubscribePrompt { .. } => "blocked",
            Reply::RecheckDenied => "recheck denied",
            Reply::RegionPrompt { .. } => "region prompt",
            Reply::PrayerTimes(_) => "prayer times",
            Reply::LookupFailed => "lookup failed",
        }
    }
}

/// Runs one classified interaction through the subscription gate and lookups.
pub struct RequestPipeline {
    directory: Arc<RegionDirectory>,
    calendar: ObservanceCalendar,
    gate: SubscriptionGate,
    provider: Arc<dyn PrayerTimeProvider>,
}

impl RequestPipeline {
    pub fn new(
        directory: Arc<RegionDirectory>,
        calendar: ObservanceCalendar,
        gate: SubscriptionGate,
        provider: Arc<dyn PrayerTimeProvider>,
    ) -> Self {
        Self {
            directory,
            calendar,
            gate,
            provider,
        }
    }

    pub fn directory(&self) -> &RegionDirectory {
        &self.directory
    }

    pub fn calendar(&self) -> &ObservanceCalendar {
        &self.calendar
    }

    /// Plain text only counts when it is exactly a known region name.
    pub fn classify_text(&self, text: &str) -> Option<Interaction> {
        self.directory
            .contains(text)
            .then(|| Interaction::RegionSelection(text.to_string()))
    }

    pub async fn handle(
        &self,
        caller: &Caller,
        interaction: Interaction,
        now: NaiveDateTime,
    ) -> Option<Reply> {
        let kind = interaction.kind();
        let reply = self.dispatch(caller, interaction, now).await;

        match &reply {
            Some(reply) => log_interaction_outcome(kind, caller.user_id, reply.label()),
            None => log_interaction_outcome(kind, caller.user_id, "ignored"),
        }
        reply
    }

    async fn dispatch(
        &self,
        caller: &Caller,
        interaction: Interaction,
        now: NaiveDateTime,
    ) -> Option<Reply> {
        let subscribed = self.gate.check(caller.user_id).await.is_subscribed();

        match interaction {
            Interaction::Start if !subscribed => Some(Reply::SubscribePrompt {
                first_name: Some(caller.first_name.clone()),
            }),
            Interaction::Recheck if !subscribed => Some(Reply::RecheckDenied),
            Interaction::RegionSelection(_) if !subscribed => {
                Some(Reply::SubscribePrompt { first_name: None })
            }
            Interaction::Start | Interaction::Recheck => Some(self.region_prompt(caller, now)),
            Interaction::RegionSelection(region) => self.time_lookup(region, now).await,
        }
    }

    fn region_prompt(&self, caller: &Caller, now: NaiveDateTime) -> Reply {
        Reply::RegionPrompt {
            first_name: caller.first_name.clone(),
            countdown: self.calendar.countdown(now),
            regions: self
                .directory
                .display_names()
                .into_iter()
                .map(str::to_string)
                .collect(),
        }
    }

    async fn time_lookup(&self, region: String, now: NaiveDateTime) -> Option<Reply> {
        let lookup_id = self.directory.resolve(&region)?;
        let today = now.date();

        let reply = match self.provider.fetch(lookup_id, today).await {
            Ok(window) => {
                let progress = self.calendar.progress(now);
                Reply::PrayerTimes(PrayerReport {
                    region,
                    date: today,
                    day_index: progress.day_index,
                    window,
                    countdown: progress.countdown,
                })
            }
            Err(_) => Reply::LookupFailed,
        };
        Some(reply)
    }
}
