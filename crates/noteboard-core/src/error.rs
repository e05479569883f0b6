use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid drag geometry: {0}")]
    InvalidGeometry(String),

    #[error("No async runtime available: {0}")]
    Runtime(String),

    #[error("Item not found: {0}")]
    ItemNotFound(String),
}

pub type Result<T> = std::result::Result<T, Error>;
