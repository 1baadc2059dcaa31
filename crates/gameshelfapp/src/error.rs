use thiserror::Error;

#[derive(Error, Debug)]
pub enum ShelfError {
    #[error("Item not found: {0}")]
    ItemNotFound(String),

    #[error("Game not found in catalog: {0}")]
    GameNotFound(String),

    #[error("No platform given for {0} and the catalog record has none")]
    MissingPlatform(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Config error: {0}")]
    Config(String),

    #[error("Store error: {0}")]
    Store(String),

    #[error("Api Error: {0}")]
    Api(String),
}

impl From<confique::Error> for ShelfError {
    fn from(err: confique::Error) -> Self {
        ShelfError::Config(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, ShelfError>;
