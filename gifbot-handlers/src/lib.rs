//! # gifbot-handlers
//!
//! Command parsing and the handlers that back each chat command: one handler
//! for the four `.gif*` commands, one catch-all help handler. Handlers hold
//! an injected [`gifstore::KeywordStore`] and know nothing about the
//! transport.

pub mod command;
mod gif_handler;
mod help_handler;

pub use command::{parse, Command};
pub use gif_handler::GifCommandHandler;
pub use help_handler::{HelpHandler, HELP_TEXT};
