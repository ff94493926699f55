//! Channel-membership gate. Any doubt about membership denies access.

use async_trait::async_trait;
use std::sync::Arc;
use std::time::Duration;
use teloxide::prelude::*;
use teloxide::types::{ChatMemberStatus, Recipient};
use thiserror::Error;

use crate::utils::logging::{log_gate_decision, log_gate_error, log_timeout};
use crate::utils::validation::ChannelRef;

/// Membership state reported by the transport.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MemberState {
    Creator,
    Administrator,
    Member,
    Restricted,
    Left,
    Banned,
}

impl From<ChatMemberStatus> for MemberState {
    fn from(status: ChatMemberStatus) -> Self {
        match status {
            ChatMemberStatus::Owner => MemberState::Creator,
            ChatMemberStatus::Administrator => MemberState::Administrator,
            ChatMemberStatus::Member => MemberState::Member,
            ChatMemberStatus::Restricted => MemberState::Restricted,
            ChatMemberStatus::Left => MemberState::Left,
            ChatMemberStatus::Banned => MemberState::Banned,
        }
    }
}

#[derive(Debug, Error)]
pub enum MembershipError {
    #[error("membership lookup timed out")]
    Timeout,
    #[error("telegram request failed: {0}")]
    Request(String),
}

impl From<teloxide::RequestError> for MembershipError {
    fn from(err: teloxide::RequestError) -> Self {
        MembershipError::Request(err.to_string())
    }
}

/// Source of channel membership records.
#[async_trait]
pub trait MembershipSource: Send + Sync {
    async fn member_state(&self, channel: &ChannelRef, user_id: u64) -> Result<MemberState, MembershipError>;
}

#[async_trait]
impl MembershipSource for Bot {
    async fn member_state(&self, channel: &ChannelRef, user_id: u64) -> Result<MemberState, MembershipError> {
        let chat = match channel {
            ChannelRef::Username(name) => Recipient::ChannelUsername(name.clone()),
            ChannelRef::Id(id) => Recipient::Id(ChatId(*id)),
        };

        let member = self.get_chat_member(chat, UserId(user_id)).await?;
        Ok(member.kind.status().into())
    }
}

/// Outcome of a membership probe. `Unknown` never grants access.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubscriptionStatus {
    Subscribed,
    NotSubscribed,
    /// The membership lookup failed.
    Unknown,
}

impl SubscriptionStatus {
    /// Collapses `Unknown` into `NotSubscribed`.
    pub fn fail_closed(self) -> Self {
        match self {
            SubscriptionStatus::Subscribed => SubscriptionStatus::Subscribed,
            SubscriptionStatus::NotSubscribed | SubscriptionStatus::Unknown => {
                SubscriptionStatus::NotSubscribed
            }
        }
    }

    pub fn is_subscribed(self) -> bool {
        self == SubscriptionStatus::Subscribed
    }

    fn label(self) -> &'static str {
        match self {
            SubscriptionStatus::Subscribed => "subscribed",
            SubscriptionStatus::NotSubscribed => "not subscribed",
            SubscriptionStatus::Unknown => "unknown",
        }
    }
}

impl From<MemberState> for SubscriptionStatus {
    fn from(state: MemberState) -> Self {
        match state {
            MemberState::Creator | MemberState::Administrator | MemberState::Member => {
                SubscriptionStatus::Subscribed
            }
            MemberState::Restricted | MemberState::Left | MemberState::Banned => {
                SubscriptionStatus::NotSubscribed
            }
        }
    }
}

/// Checks a user's membership in one configured channel on every call.
#[derive(Clone)]
pub struct SubscriptionGate {
    source: Arc<dyn MembershipSource>,
    channel: ChannelRef,
    timeout: Duration,
}

impl SubscriptionGate {
    pub fn new(source: Arc<dyn MembershipSource>, channel: ChannelRef, timeout: Duration) -> Self {
        Self { source, channel, timeout }
    }

    pub fn channel(&self) -> &ChannelRef {
        &self.channel
    }

    /// Raw status, `Unknown` when the lookup failed or timed out.
    pub async fn probe(&self, user_id: u64) -> SubscriptionStatus {
        let lookup = self.source.member_state(&self.channel, user_id);
        let result = match tokio::time::timeout(self.timeout, lookup).await {
            Ok(result) => result,
            Err(_) => {
                log_timeout("membership lookup", self.timeout.as_secs(), Some(&self.channel.to_string()));
                Err(MembershipError::Timeout)
            }
        };

        match result {
            Ok(state) => state.into(),
            Err(e) => {
                log_gate_error(user_id, &self.channel.to_string(), &e.to_string());
                SubscriptionStatus::Unknown
            }
        }
    }

    /// Gate decision: `Subscribed` or `NotSubscribed`, never `Unknown`.
    pub async fn check(&self, user_id: u64) -> SubscriptionStatus {
        let status = self.probe(user_id).await.fail_closed();
        log_gate_decision(user_id, &self.channel.to_string(), status.label());
        status
    }
}
