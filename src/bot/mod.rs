/// Slash commands understood by the bot
pub mod commands;
/// teloxide update handlers
pub mod handlers;
pub mod keyboards;
/// Gate, region and lookup orchestration
pub mod pipeline;
pub mod reply;
pub mod texts;
