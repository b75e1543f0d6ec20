use thiserror::Error;

#[derive(Debug, Error)]
pub enum SanityError {
    #[error("http error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("content lake returned {status}: {body}")]
    Status { status: u16, body: String },

    #[error("failed to decode response: {0}")]
    Decode(#[from] serde_json::Error),

    #[error("write token not configured")]
    MissingToken,

    #[error("mutation committed but returned no document id")]
    EmptyMutationResult,
}
