pub mod callback;
pub mod message;

use std::sync::Arc;
use teloxide::{
    dispatching::{UpdateFilterExt, UpdateHandler},
    prelude::*,
    types::ParseMode,
};

use crate::app::AppContext;
use crate::bot::commands::Command;
use crate::bot::keyboards::to_markup;
use crate::bot::reply::Outbound;

pub type HandlerError = Box<dyn std::error::Error + Send + Sync + 'static>;
pub type HandlerResult = Result<(), HandlerError>;

/// Builds the dispatcher tree around a shared [`AppContext`].
pub struct BotHandler {
    pub ctx: Arc<AppContext>,
}

impl BotHandler {
    pub fn new(ctx: Arc<AppContext>) -> Self {
        Self { ctx }
    }

    pub fn schema(&self) -> UpdateHandler<HandlerError> {
        let ctx_command = self.ctx.clone();
        let ctx_text = self.ctx.clone();
        let ctx_callback = self.ctx.clone();

        dptree::entry()
            .branch(
                Update::filter_message()
                    .filter_command::<Command>()
                    .endpoint(move |bot: Bot, msg: Message, cmd: Command| {
                        let ctx = ctx_command.clone();
                        async move { message::command_handler(bot, msg, cmd, ctx).await }
                    }),
            )
            .branch(Update::filter_message().endpoint(move |bot: Bot, msg: Message| {
                let ctx = ctx_text.clone();
                async move { message::text_handler(bot, msg, ctx).await }
            }))
            .branch(Update::filter_callback_query().endpoint(move |bot: Bot, q: CallbackQuery| {
                let ctx = ctx_callback.clone();
                async move { callback::callback_handler(bot, q, ctx).await }
            }))
    }
}

/// Sends a rendered reply as a chat message.
///
/// Alerts only exist as callback answers, so they are never sent here.
pub(crate) async fn deliver(bot: &Bot, chat_id: ChatId, outbound: &Outbound) -> HandlerResult {
    match outbound {
        Outbound::Message { text, keyboard } => {
            let request = bot
                .send_message(chat_id, text.as_str())
                .parse_mode(ParseMode::Html);
            match to_markup(keyboard) {
                Some(markup) => request.reply_markup(markup).await?,
                None => request.await?,
            };
        }
        Outbound::Alert { text } => {
            tracing::warn!("Dropping alert outside a callback for chat {}: {}", chat_id.0, text);
        }
    }
    Ok(())
}
