//! # gifbot-core
//!
//! Core types and traits for the gif bot: [`Handler`], [`HandlerChain`], the
//! transport-agnostic [`Bot`] trait, message and user types, error types, and
//! tracing initialization. Transport-agnostic; used by gifbot-telegram and
//! gifbot-handlers.

pub mod bot;
pub mod chain;
pub mod error;
pub mod logger;
pub mod types;

pub use bot::Bot;
pub use chain::HandlerChain;
pub use error::{GifbotError, Result};
pub use logger::init_tracing;
pub use types::{Chat, Handler, HandlerResponse, Message, User};
