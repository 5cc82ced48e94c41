//! REPL runner: converts each teloxide message to a core `Message`, runs the
//! handler chain, and sends the resulting reply back to the chat.
//!
//! Store/backend failures are fatal by design: the task logs the error,
//! sends a best-effort internal-error reply, and exits the process so
//! external supervision can restart it.

use std::sync::Arc;

use anyhow::Result;
use gifbot_core::{Bot as CoreBot, HandlerChain, HandlerResponse};
use teloxide::prelude::*;
use tracing::{error, info, instrument};

use super::adapters::TelegramMessageWrapper;

const INTERNAL_ERROR_REPLY: &str = "Internal error, restarting";

/// Starts the Telegram REPL over the given handler chain. `sender` is the
/// core Bot used to deliver replies (normally a [`super::TelegramBotAdapter`]
/// over the same teloxide Bot).
#[instrument(skip(bot, handler_chain, sender))]
pub async fn run_repl(
    bot: teloxide::Bot,
    handler_chain: HandlerChain,
    sender: Arc<dyn CoreBot>,
) -> Result<()> {
    let chain = handler_chain;
    teloxide::repl(
        bot,
        move |_bot: Bot, msg: teloxide::types::Message| {
            let chain = chain.clone();
            let sender = sender.clone();

            async move {
                // Only text messages can carry commands.
                if msg.text().is_none() {
                    return Ok(());
                }

                let wrapper = TelegramMessageWrapper(&msg);
                let core_msg = wrapper.to_core();

                info!(
                    user_id = core_msg.user.id,
                    chat_id = core_msg.chat.id,
                    message_content = %core_msg.content,
                    "Received message"
                );

                tokio::spawn(async move {
                    match chain.handle(&core_msg).await {
                        Ok(HandlerResponse::Reply(text)) => {
                            if let Err(e) = sender.reply_to(&core_msg, &text).await {
                                error!(error = %e, chat_id = core_msg.chat.id, "Failed to send reply");
                            }
                        }
                        Ok(_) => {}
                        Err(e) => {
                            // Backend errors are fatal; supervision restarts us.
                            error!(error = %e, user_id = core_msg.user.id, "Handler chain failed, exiting");
                            let _ = sender.reply_to(&core_msg, INTERNAL_ERROR_REPLY).await;
                            std::process::exit(1);
                        }
                    }
                });

                Ok(())
            }
        },
    )
    .await;

    Ok(())
}
