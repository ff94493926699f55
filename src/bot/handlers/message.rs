use std::sync::Arc;
use teloxide::prelude::*;

use super::{deliver, HandlerResult};
use crate::app::AppContext;
use crate::bot::commands::Command;
use crate::bot::pipeline::{Caller, Interaction};
use crate::bot::reply::render;
use crate::bot::texts::help_text;
use crate::utils::datetime::local_now;
use crate::utils::logging::log_interaction_start;

pub async fn command_handler(
    bot: Bot,
    msg: Message,
    cmd: Command,
    ctx: Arc<AppContext>,
) -> HandlerResult {
    match cmd {
        Command::Help => {
            bot.send_message(msg.chat.id, help_text()).await?;
        }
        Command::Start => {
            run_interaction(&bot, &msg, Interaction::Start, &ctx).await?;
        }
    }
    Ok(())
}

/// Plain text is answered only when it is exactly a region name.
pub async fn text_handler(bot: Bot, msg: Message, ctx: Arc<AppContext>) -> HandlerResult {
    let Some(text) = msg.text() else {
        return Ok(());
    };

    match ctx.pipeline.classify_text(text) {
        Some(interaction) => run_interaction(&bot, &msg, interaction, &ctx).await,
        None => Ok(()),
    }
}

async fn run_interaction(
    bot: &Bot,
    msg: &Message,
    interaction: Interaction,
    ctx: &AppContext,
) -> HandlerResult {
    let Some(user) = msg.from() else {
        return Ok(());
    };

    let details = match &interaction {
        Interaction::RegionSelection(region) => Some(region.as_str()),
        _ => None,
    };
    log_interaction_start(
        interaction.kind(),
        user.username.as_deref().unwrap_or("unknown"),
        user.id.0,
        msg.chat.id.0,
        details,
    );

    let caller = Caller::new(user.id.0, user.first_name.clone());
    if let Some(reply) = ctx.pipeline.handle(&caller, interaction, local_now()).await {
        deliver(bot, msg.chat.id, &render(&reply, &ctx.join_url)).await?;
    }
    Ok(())
}
