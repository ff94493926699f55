use anyhow::{anyhow, Result};
use chrono::NaiveDate;
use std::env;
use std::time::Duration;

use crate::utils::validation::{
    parse_channel, parse_start_date, validate_bot_token, validate_invite_link, ChannelRef,
};

pub const DEFAULT_OBSERVANCE_START: &str = "2026-02-18";
pub const DEFAULT_PRAYER_API_URL: &str = "https://api.aladhan.com/v1";
pub const DEFAULT_LOOKUP_TIMEOUT_SECS: u64 = 10;
pub const DEFAULT_HTTP_PORT: u16 = 3000;

/// Runtime settings read from the environment.
#[derive(Debug, Clone)]
pub struct Config {
    pub telegram_bot_token: String,
    pub channel: ChannelRef,
    pub invite_link: String,
    pub observance_start: NaiveDate,
    pub prayer_api_url: String,
    pub lookup_timeout: Duration,
    pub prayer_cache_enabled: bool,
    pub http_port: u16,
}

fn optional_var(name: &str) -> Option<String> {
    env::var(name).ok().filter(|v| !v.trim().is_empty())
}

impl Config {
    pub fn from_env() -> Result<Self> {
        let token = env::var("TELEGRAM_BOT_TOKEN")
            .map_err(|_| anyhow!("TELEGRAM_BOT_TOKEN must be set"))?;

        if token.trim().is_empty() {
            return Err(anyhow!("TELEGRAM_BOT_TOKEN must be set"));
        }
        validate_bot_token(&token).map_err(|e| anyhow!("Invalid TELEGRAM_BOT_TOKEN: {e}"))?;

        let channel_raw = optional_var("CHANNEL_USERNAME")
            .ok_or_else(|| anyhow!("CHANNEL_USERNAME must be set"))?;
        let channel = parse_channel(&channel_raw)
            .map_err(|e| anyhow!("Invalid CHANNEL_USERNAME: {e}"))?;

        let invite_link = match optional_var("CHANNEL_INVITE_LINK") {
            Some(link) => {
                validate_invite_link(&link)
                    .map_err(|e| anyhow!("Invalid CHANNEL_INVITE_LINK: {e}"))?;
                link.trim().to_string()
            }
            None => channel.public_link().ok_or_else(|| {
                anyhow!("CHANNEL_INVITE_LINK must be set when CHANNEL_USERNAME is a numeric id")
            })?,
        };

        let start_raw = optional_var("OBSERVANCE_START")
            .unwrap_or_else(|| DEFAULT_OBSERVANCE_START.to_string());
        let observance_start = parse_start_date(&start_raw)
            .map_err(|e| anyhow!("Invalid OBSERVANCE_START: {e}"))?;

        let prayer_api_url = optional_var("PRAYER_API_URL")
            .map(|url| url.trim().trim_end_matches('/').to_string())
            .unwrap_or_else(|| DEFAULT_PRAYER_API_URL.to_string());

        let lookup_timeout_secs = match optional_var("LOOKUP_TIMEOUT_SECS") {
            Some(raw) => raw
                .trim()
                .parse::<u64>()
                .ok()
                .filter(|secs| *secs > 0)
                .ok_or_else(|| anyhow!("Invalid LOOKUP_TIMEOUT_SECS"))?,
            None => DEFAULT_LOOKUP_TIMEOUT_SECS,
        };

        let prayer_cache_enabled = match optional_var("PRAYER_CACHE") {
            Some(raw) => match raw.trim().to_ascii_lowercase().as_str() {
                "1" | "true" | "yes" | "on" => true,
                "0" | "false" | "no" | "off" => false,
                _ => return Err(anyhow!("Invalid PRAYER_CACHE")),
            },
            None => false,
        };

        let port_str = env::var("HTTP_PORT")
            .unwrap_or_else(|_| DEFAULT_HTTP_PORT.to_string());
        let http_port = port_str.trim()
            .parse()
            .map_err(|_| anyhow!("Invalid HTTP_PORT"))?;

        Ok(Config {
            telegram_bot_token: token.trim().to_string(),
            channel,
            invite_link,
            observance_start,
            prayer_api_url,
            lookup_timeout: Duration::from_secs(lookup_timeout_secs),
            prayer_cache_enabled,
            http_port,
        })
    }
}
