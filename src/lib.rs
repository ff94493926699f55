//! # Ramadan Schedule Bot
//!
//! A Telegram bot that serves daily suhoor and iftar times to subscribers of a
//! channel during Ramadan.
//!
//! ## Features
//! - Channel-subscription gate (fail-closed) in front of all content
//! - Region picker covering every region of Uzbekistan
//! - Dawn and dusk times from the Aladhan API with a bounded timeout
//! - Countdown to the first day and the current Ramadan day number
//! - Optional per-region, per-day cache of prayer times

/// Application context shared by all handlers
pub mod app;
/// Bot command handlers, request pipeline and message rendering
pub mod bot;
/// Configuration management and environment variables
pub mod config;
/// Regions and observance date arithmetic
pub mod domain;
/// Prayer times lookup, subscription gate, cache and health endpoints
pub mod services;
/// Utility functions for datetime, validation, logging and formatting
pub mod utils;
