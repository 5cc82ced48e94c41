//! Handler for the four `.gif*` commands.
//!
//! Parses the message, runs exactly one store operation, and returns the
//! reply text. Store failures propagate as errors; the runner treats them as
//! fatal. "Nothing stored" conditions are ordinary replies.

use std::sync::Arc;

use async_trait::async_trait;
use gifbot_core::{GifbotError, Handler, HandlerResponse, Message};
use gifstore::KeywordStore;
use tracing::{info, instrument};

use crate::command::{parse, Command};

pub(crate) const NO_MATCH_REPLY: &str = "No matches for that keyword";
pub(crate) const STORED_REPLY: &str = "Got it.";
pub(crate) const DELETED_REPLY: &str = "GIF Removed.";
pub(crate) const NO_METADATA_REPLY: &str = "No metadata found for those parameters";

/// Handler that serves `.gif`, `.gifstore`, `.gifdelete` and
/// `.gifattribute`; non-command text continues down the chain.
pub struct GifCommandHandler {
    store: Arc<dyn KeywordStore>,
}

impl GifCommandHandler {
    /// Creates a handler over the given keyword store.
    pub fn new(store: Arc<dyn KeywordStore>) -> Self {
        Self { store }
    }

    async fn run(&self, command: Command, message: &Message) -> gifbot_core::Result<String> {
        let reply = match command {
            Command::Lookup { keyword } => {
                let url = self
                    .store
                    .sample(&keyword)
                    .await
                    .map_err(|e| GifbotError::Store(e.to_string()))?;
                match url {
                    Some(url) => url,
                    None => NO_MATCH_REPLY.to_string(),
                }
            }
            Command::Store { keyword, url } => {
                let creator = message.user.display_name();
                let added = self
                    .store
                    .add(&keyword, &url, &creator)
                    .await
                    .map_err(|e| GifbotError::Store(e.to_string()))?;
                info!(
                    user_id = message.user.id,
                    keyword = %keyword,
                    added = added,
                    "store command handled"
                );
                STORED_REPLY.to_string()
            }
            Command::Delete { keyword, url } => {
                self.store
                    .remove(&keyword, &url)
                    .await
                    .map_err(|e| GifbotError::Store(e.to_string()))?;
                DELETED_REPLY.to_string()
            }
            Command::Attribute { keyword, url } => {
                let attribution = self
                    .store
                    .attribution(&keyword, &url)
                    .await
                    .map_err(|e| GifbotError::Store(e.to_string()))?;
                match attribution {
                    Some(a) => format!("That was created by <@{}> at {}", a.creator, a.stored_at),
                    None => NO_METADATA_REPLY.to_string(),
                }
            }
        };
        Ok(reply)
    }
}

#[async_trait]
impl Handler for GifCommandHandler {
    #[instrument(skip(self, message))]
    async fn handle(&self, message: &Message) -> gifbot_core::Result<HandlerResponse> {
        let Some(command) = parse(&message.content) else {
            return Ok(HandlerResponse::Continue);
        };
        let reply = self.run(command, message).await?;
        Ok(HandlerResponse::Reply(reply))
    }
}
