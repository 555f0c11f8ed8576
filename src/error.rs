use reqwest::StatusCode;

#[derive(Debug, thiserror::Error)]
pub enum SourceError {
    #[error("AniList API error: {status_text}")]
    Remote {
        status: StatusCode,
        status_text: String,
    },

    #[error("Failed to decode response: {0}")]
    Decode(#[from] serde_json::Error),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Network error: {0}")]
    Transport(#[from] reqwest::Error),
}

impl SourceError {
    pub(crate) fn remote(status: StatusCode) -> Self {
        let status_text = status
            .canonical_reason()
            .map(str::to_string)
            .unwrap_or_else(|| status.as_str().to_string());
        Self::Remote {
            status,
            status_text,
        }
    }
}

pub type Result<T> = std::result::Result<T, SourceError>;
