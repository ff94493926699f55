use tracing::{debug, error, info, warn};

/// Logs an incoming interaction with consistent format
pub fn log_interaction_start(kind: &str, user: &str, user_id: u64, chat_id: i64, details: Option<&str>) {
    match details {
        Some(d) => info!(
            "INTERACTION_START: {} by {}({}) in chat {} - {}",
            kind, user, user_id, chat_id, d
        ),
        None => info!(
            "INTERACTION_START: {} by {}({}) in chat {}",
            kind, user, user_id, chat_id
        ),
    }
}

/// Logs the outcome of an interaction with consistent format
pub fn log_interaction_outcome(kind: &str, user_id: u64, outcome: &str) {
    info!("INTERACTION_DONE: {} for user {} - {}", kind, user_id, outcome);
}

/// Logs a subscription gate decision
pub fn log_gate_decision(user_id: u64, channel: &str, status: &str) {
    debug!("GATE: user {} in {} -> {}", user_id, channel, status);
}

/// Logs a failed membership lookup; the gate treats these as not subscribed
pub fn log_gate_error(user_id: u64, channel: &str, error: &str) {
    warn!("GATE_ERROR: membership of user {} in {} unavailable: {}", user_id, channel, error);
}

/// Logs prayer-times lookups with consistent format
pub fn log_lookup(city: &str, date: &str, details: Option<&str>) {
    match details {
        Some(d) => debug!("LOOKUP: {} on {} - {}", city, date, d),
        None => debug!("LOOKUP: {} on {}", city, date),
    }
}

/// Logs prayer-times lookup failures with consistent format
pub fn log_lookup_error(city: &str, date: &str, error: &str) {
    error!("LOOKUP_ERROR: {} on {} failed: {}", city, date, error);
}

/// Logs timeout events with consistent format
pub fn log_timeout(operation: &str, duration_secs: u64, details: Option<&str>) {
    match details {
        Some(d) => warn!("TIMEOUT: {} after {}s - {}", operation, duration_secs, d),
        None => warn!("TIMEOUT: {} after {}s", operation, duration_secs),
    }
}

/// Logs system events with consistent format
pub fn log_system_event(event: &str, details: Option<&str>) {
    match details {
        Some(d) => info!("SYSTEM: {} - {}", event, d),
        None => info!("SYSTEM: {}", event),
    }
}
