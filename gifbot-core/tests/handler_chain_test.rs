//! Integration tests for [`gifbot_core::HandlerChain`].
//!
//! Covers: handlers executed in order, Reply stopping the chain, Continue
//! falling through to the next handler, and an empty chain returning Continue.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use chrono::Utc;
use gifbot_core::{Chat, Handler, HandlerChain, HandlerResponse, Message, User};

fn create_test_message(content: &str) -> Message {
    Message {
        id: "test_message_id".to_string(),
        content: content.to_string(),
        user: User {
            id: 123,
            username: Some("test_user".to_string()),
            first_name: Some("Test".to_string()),
            last_name: None,
        },
        chat: Chat {
            id: 456,
            chat_type: "private".to_string(),
        },
        created_at: Utc::now(),
    }
}

/// Handler that counts how many times it ran and returns a fixed response.
struct CountingHandler {
    count: Arc<AtomicUsize>,
    response: HandlerResponse,
}

#[async_trait::async_trait]
impl Handler for CountingHandler {
    async fn handle(&self, _message: &Message) -> gifbot_core::Result<HandlerResponse> {
        self.count.fetch_add(1, Ordering::SeqCst);
        Ok(self.response.clone())
    }
}

/// **Test: Reply stops the chain; later handlers never run.**
#[tokio::test]
async fn test_reply_stops_chain() {
    let first_count = Arc::new(AtomicUsize::new(0));
    let second_count = Arc::new(AtomicUsize::new(0));

    let chain = HandlerChain::new()
        .add_handler(Arc::new(CountingHandler {
            count: first_count.clone(),
            response: HandlerResponse::Reply("hit".to_string()),
        }))
        .add_handler(Arc::new(CountingHandler {
            count: second_count.clone(),
            response: HandlerResponse::Reply("never".to_string()),
        }));

    let result = chain.handle(&create_test_message(".gif cats")).await.unwrap();

    assert_eq!(result, HandlerResponse::Reply("hit".to_string()));
    assert_eq!(first_count.load(Ordering::SeqCst), 1);
    assert_eq!(second_count.load(Ordering::SeqCst), 0);
}

/// **Test: Continue falls through; the later handler's Reply is returned.**
#[tokio::test]
async fn test_continue_falls_through() {
    let first_count = Arc::new(AtomicUsize::new(0));

    let chain = HandlerChain::new()
        .add_handler(Arc::new(CountingHandler {
            count: first_count.clone(),
            response: HandlerResponse::Continue,
        }))
        .add_handler(Arc::new(CountingHandler {
            count: Arc::new(AtomicUsize::new(0)),
            response: HandlerResponse::Reply("fallback".to_string()),
        }));

    let result = chain.handle(&create_test_message("unrelated")).await.unwrap();

    assert_eq!(result, HandlerResponse::Reply("fallback".to_string()));
    assert_eq!(first_count.load(Ordering::SeqCst), 1);
}

/// **Test: Stop ends the chain without a reply body.**
#[tokio::test]
async fn test_stop_ends_chain() {
    let later_count = Arc::new(AtomicUsize::new(0));

    let chain = HandlerChain::new()
        .add_handler(Arc::new(CountingHandler {
            count: Arc::new(AtomicUsize::new(0)),
            response: HandlerResponse::Stop,
        }))
        .add_handler(Arc::new(CountingHandler {
            count: later_count.clone(),
            response: HandlerResponse::Reply("never".to_string()),
        }));

    let result = chain.handle(&create_test_message("x")).await.unwrap();

    assert_eq!(result, HandlerResponse::Stop);
    assert_eq!(later_count.load(Ordering::SeqCst), 0);
}

/// **Test: an empty chain returns Continue.**
#[tokio::test]
async fn test_empty_chain_continues() {
    let chain = HandlerChain::new();
    let result = chain.handle(&create_test_message("x")).await.unwrap();
    assert_eq!(result, HandlerResponse::Continue);
}
