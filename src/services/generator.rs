use async_trait::async_trait;
use thiserror::Error;

/// Outcome of a successful upstream call. The API can answer without
/// producing any text (safety block, empty candidate list), and that
/// case is not an error.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Generation {
    Text(String),
    Empty,
}

#[derive(Debug, Error)]
pub enum GenerateError {
    #[error("request to generative API failed: {0}")]
    Network(#[from] reqwest::Error),

    #[error("generative API returned {status}: {body}")]
    Api {
        status: reqwest::StatusCode,
        body: String,
    },

    #[error("failed to decode generative API response: {0}")]
    Decode(#[source] reqwest::Error),
}

/// Seam over the generative-model API so the handler can be exercised
/// against a stub.
#[async_trait]
pub trait Generator: Send + Sync {
    async fn generate_content(&self, prompt: &str) -> Result<Generation, GenerateError>;
}
