#[derive(Debug, thiserror::Error)]
pub enum PricesError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("{message}")]
    Api { message: String, errors: Vec<String> },

    #[error("No prices found.")]
    NoPrices,

    #[error("Invalid argument: {0}")]
    InvalidArgument(String),
}

impl PricesError {
    /// Upstream error strings attached to this error, if any.
    pub fn data(&self) -> &[String] {
        match self {
            PricesError::Api { errors, .. } => errors,
            _ => &[],
        }
    }
}

pub type Result<T> = std::result::Result<T, PricesError>;
