//! Handler chain: runs handlers in order for each message.
//!
//! The first handler that returns Stop or Reply ends execution; Continue
//! falls through to the next handler. A catch-all handler placed last gives
//! the unmatched-text behavior.

use crate::error::Result;
use crate::types::{Handler, HandlerResponse, Message};
use std::sync::Arc;
use tracing::{debug, info, instrument};

/// Ordered chain of handlers; first Stop or Reply wins.
#[derive(Clone)]
pub struct HandlerChain {
    handlers: Vec<Arc<dyn Handler>>,
}

impl HandlerChain {
    /// Creates an empty chain.
    pub fn new() -> Self {
        Self {
            handlers: Vec::new(),
        }
    }

    /// Appends a handler (runs in insertion order).
    pub fn add_handler(mut self, handler: Arc<dyn Handler>) -> Self {
        self.handlers.push(handler);
        self
    }

    /// Runs the handlers in order. Returns the first Stop or Reply, or
    /// Continue when every handler passed.
    #[instrument(skip(self, message))]
    pub async fn handle(&self, message: &Message) -> Result<HandlerResponse> {
        info!(
            user_id = message.user.id,
            chat_id = message.chat.id,
            message_id = %message.id,
            "handler chain started"
        );

        for handler in &self.handlers {
            let handler_name = std::any::type_name_of_val(handler.as_ref());
            let response = handler.handle(message).await?;
            debug!(
                handler = %handler_name,
                response = ?response,
                "handler processed"
            );

            match response {
                HandlerResponse::Stop | HandlerResponse::Reply(_) => {
                    info!(
                        user_id = message.user.id,
                        handler = %handler_name,
                        "handler chain stopped by handler"
                    );
                    return Ok(response);
                }
                HandlerResponse::Continue => continue,
            }
        }

        Ok(HandlerResponse::Continue)
    }
}

impl Default for HandlerChain {
    fn default() -> Self {
        Self::new()
    }
}

// Integration tests live in tests/handler_chain_test.rs
