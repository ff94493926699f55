use std::sync::Arc;
use teloxide::prelude::*;

use super::{deliver, HandlerResult};
use crate::app::AppContext;
use crate::bot::pipeline::{Caller, Interaction};
use crate::bot::reply::{render, Outbound};
use crate::bot::texts::RECHECK_CALLBACK;
use crate::utils::datetime::local_now;
use crate::utils::logging::log_interaction_start;

pub async fn callback_handler(
    bot: Bot,
    q: CallbackQuery,
    ctx: Arc<AppContext>,
) -> HandlerResult {
    let user_id = q.from.id.0;
    let username = q.from.username.as_deref().unwrap_or("unknown");
    let chat_id = q
        .message
        .as_ref()
        .map(|m| m.chat.id)
        .unwrap_or_else(|| q.from.id.into());

    if q.data.as_deref() != Some(RECHECK_CALLBACK) {
        tracing::debug!("Ignoring callback {:?} from user {}", q.data, user_id);
        bot.answer_callback_query(q.id).await?;
        return Ok(());
    }

    log_interaction_start("recheck", username, user_id, chat_id.0, None);

    let caller = Caller::new(user_id, q.from.first_name.clone());
    let reply = ctx
        .pipeline
        .handle(&caller, Interaction::Recheck, local_now())
        .await;

    match reply.map(|r| render(&r, &ctx.join_url)) {
        Some(Outbound::Alert { text }) => {
            bot.answer_callback_query(q.id)
                .text(text)
                .show_alert(true)
                .await?;
        }
        Some(outbound) => {
            // Telegram rejects answers to queries that went stale during the gate check
            if let Err(e) = bot.answer_callback_query(q.id).await {
                tracing::warn!("Failed to answer recheck callback: {}", e);
            }

            // The subscribe prompt is replaced by the greeting
            if let Some(message) = q.message.as_ref() {
                if let Err(e) = bot.delete_message(message.chat.id, message.id).await {
                    tracing::warn!("Failed to delete subscribe prompt: {}", e);
                }
            }
            deliver(&bot, chat_id, &outbound).await?;
        }
        None => {
            bot.answer_callback_query(q.id).await?;
        }
    }

    Ok(())
}
