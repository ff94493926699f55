//! # Ramadan Schedule Bot Main Entry Point
//!
//! Initializes logging, loads configuration, builds the application context,
//! starts the optional cache sweeper and the health server, and runs the
//! Telegram dispatcher until interrupted.

use anyhow::Result;
use std::sync::Arc;
use teloxide::prelude::*;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use ramadan_schedule_bot::app::AppContext;
use ramadan_schedule_bot::bot::handlers::BotHandler;
use ramadan_schedule_bot::config::Config;
use ramadan_schedule_bot::services::health::HealthService;
use ramadan_schedule_bot::services::prayer_cache::CacheSweeper;
use ramadan_schedule_bot::utils::logging::log_system_event;

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize logging
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "ramadan_schedule_bot=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Load configuration
    dotenvy::dotenv().ok();
    let config = Config::from_env()?;

    info!("Starting Ramadan Schedule Bot v{}", env!("CARGO_PKG_VERSION"));
    info!(
        "Configuration loaded - Channel: {}, Start: {}, Cache: {}, HTTP Port: {}",
        config.channel, config.observance_start, config.prayer_cache_enabled, config.http_port
    );

    // Initialize bot and application context
    info!("Initializing Telegram bot...");
    let bot = Bot::new(&config.telegram_bot_token);
    let ctx = Arc::new(AppContext::from_config(&config, Arc::new(bot.clone()))?);
    let handler = BotHandler::new(ctx.clone());
    info!("Telegram bot initialized successfully");

    // Start the cache sweeper when caching is on
    let mut sweeper = match ctx.cache.clone() {
        Some(cache) => match CacheSweeper::new(cache).await {
            Ok(mut sweeper) => {
                if let Err(e) = sweeper.start().await {
                    tracing::error!("Failed to start cache sweeper: {}", e);
                }
                Some(sweeper)
            }
            Err(e) => {
                tracing::error!("Failed to create cache sweeper: {}", e);
                None
            }
        },
        None => None,
    };

    // Initialize health service
    let health_service = HealthService::new(ctx.calendar(), ctx.cache.clone());
    let listener = tokio::net::TcpListener::bind(format!("0.0.0.0:{}", config.http_port))
        .await
        .map_err(|e| anyhow::anyhow!("Failed to bind to port {}: {}", config.http_port, e))?;

    info!("Health check server starting on port {}", config.http_port);

    // Run both the bot and health server concurrently
    let bot_task = tokio::spawn(async move {
        Dispatcher::builder(bot, handler.schema())
            .enable_ctrlc_handler()
            .build()
            .dispatch()
            .await;
    });

    let health_task = tokio::spawn(async move {
        if let Err(e) = axum::serve(listener, health_service.router).await {
            tracing::error!("Health server error: {}", e);
        }
    });

    // Wait for either task to complete (which would indicate shutdown)
    tokio::select! {
        result1 = bot_task => {
            if let Err(e) = result1 {
                tracing::error!("Bot task error: {}", e);
            }
        }
        result2 = health_task => {
            if let Err(e) = result2 {
                tracing::error!("Health task error: {}", e);
            }
        }
    }

    if let Some(sweeper) = sweeper.as_mut() {
        if let Err(e) = sweeper.stop().await {
            tracing::warn!("Error stopping cache sweeper: {}", e);
        }
    }

    log_system_event("Application stopped", None);
    Ok(())
}
