use thiserror::Error;

#[derive(Error, Debug)]
pub enum GifbotError {
    #[error("Store error: {0}")]
    Store(String),

    #[error("Bot error: {0}")]
    Bot(String),

    #[error("Config error: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, GifbotError>;
