use thiserror::Error;

#[derive(Debug, Error)]
pub enum RecipeUiError {
    #[error("Config error: {0}")]
    Config(#[from] serde_json::Error),

    #[error("Element not found: #{0}")]
    MissingElement(String),

    #[error("Invalid serving count: {0:?}")]
    InvalidServings(String),

    #[error("Serving count must be at least 1")]
    ZeroServings,

    #[error("Unrecognized toggle value: {0:?}")]
    UnknownToggleValue(String),
}
