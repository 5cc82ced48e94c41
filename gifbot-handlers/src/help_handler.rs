//! Catch-all help handler: replies with the command list for any text no
//! earlier handler claimed. Placed last in the chain.

use async_trait::async_trait;
use gifbot_core::{Handler, HandlerResponse, Message};

/// Help reply listing the supported commands.
pub const HELP_TEXT: &str = "Hi I'm gifbot. Supported commands:\n\
```\n\
.gif <keyword> Get a stored gif for a keyword\n\
.gifstore <keyword> <url> Store a URL under a keyword\n\
.gifdelete <keyword> <url> Delete a URL from a keyword\n\
.gifattribute <keyword> <url> Figure out who is responsible for a URL.\n\
```";

/// Terminal handler; always replies with [`HELP_TEXT`].
#[derive(Clone, Default)]
pub struct HelpHandler;

impl HelpHandler {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl Handler for HelpHandler {
    async fn handle(&self, _message: &Message) -> gifbot_core::Result<HandlerResponse> {
        Ok(HandlerResponse::Reply(HELP_TEXT.to_string()))
    }
}
