use crate::content::RequestError;

#[derive(Debug, thiserror::Error)]
pub enum CommandError {
    #[error("invalid search: {0}")]
    Request(#[from] RequestError),

    #[error("failed to encode JSON output: {0}")]
    Json(#[from] serde_json::Error),

    #[error("failed to build HTTP client: {0}")]
    Http(#[from] reqwest::Error),
}
