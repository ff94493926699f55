use anyhow::{anyhow, Result};
use chrono::NaiveDate;

/// A channel the bot checks membership against.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ChannelRef {
    /// Public channel, stored with its leading `@`.
    Username(String),
    /// Numeric chat id, e.g. `-1001234567890`.
    Id(i64),
}

impl ChannelRef {
    /// Public `t.me` link, only available for username channels.
    pub fn public_link(&self) -> Option<String> {
        match self {
            ChannelRef::Username(name) => Some(format!("https://t.me/{}", name.trim_start_matches('@'))),
            ChannelRef::Id(_) => None,
        }
    }
}

impl std::fmt::Display for ChannelRef {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ChannelRef::Username(name) => write!(f, "{name}"),
            ChannelRef::Id(id) => write!(f, "{id}"),
        }
    }
}

pub fn validate_bot_token(token: &str) -> Result<()> {
    let token = token.trim();

    if token.is_empty() {
        return Err(anyhow!("Bot token cannot be empty"));
    }

    // Telegram tokens look like "<bot id>:<secret>"
    let Some((id, secret)) = token.split_once(':') else {
        return Err(anyhow!("Bot token must have the form <id>:<secret>"));
    };

    if id.is_empty() || !id.chars().all(|c| c.is_ascii_digit()) {
        return Err(anyhow!("Bot token id part must be numeric"));
    }

    if secret.is_empty() {
        return Err(anyhow!("Bot token secret part cannot be empty"));
    }

    Ok(())
}

/// Accepts `@name`, `name` or a numeric chat id.
pub fn parse_channel(raw: &str) -> Result<ChannelRef> {
    let raw = raw.trim();

    if raw.is_empty() {
        return Err(anyhow!("Channel cannot be empty"));
    }

    if let Ok(id) = raw.parse::<i64>() {
        validate_telegram_chat_id(id)?;
        return Ok(ChannelRef::Id(id));
    }

    let name = raw.trim_start_matches('@');

    // Telegram usernames: 5-32 chars, letters, digits and underscores
    if name.len() < 5 || name.len() > 32 {
        return Err(anyhow!("Channel username must be 5 to 32 characters long"));
    }

    if !name.chars().all(|c| c.is_ascii_alphanumeric() || c == '_') {
        return Err(anyhow!("Channel username can only contain letters, numbers and underscores"));
    }

    if !name.starts_with(|c: char| c.is_ascii_alphabetic()) {
        return Err(anyhow!("Channel username must start with a letter"));
    }

    Ok(ChannelRef::Username(format!("@{name}")))
}

pub fn validate_telegram_chat_id(chat_id: i64) -> Result<()> {
    if chat_id == 0 {
        return Err(anyhow!("Chat ID cannot be zero"));
    }

    // Reject extremely large negative numbers beyond Telegram's known ranges
    if chat_id < -2000000000000 {
        return Err(anyhow!("Chat ID out of valid range"));
    }

    Ok(())
}

pub fn validate_invite_link(link: &str) -> Result<()> {
    let link = link.trim();

    if !(link.starts_with("https://t.me/") || link.starts_with("https://telegram.me/")) {
        return Err(anyhow!("Invite link must start with https://t.me/"));
    }

    if link.contains(char::is_whitespace) {
        return Err(anyhow!("Invite link cannot contain whitespace"));
    }

    Ok(())
}

pub fn parse_start_date(raw: &str) -> Result<NaiveDate> {
    NaiveDate::parse_from_str(raw.trim(), "%Y-%m-%d")
        .map_err(|_| anyhow!("Start date must use the YYYY-MM-DD format"))
}
