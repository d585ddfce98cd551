use crate::client::RateLimit;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Sending Request: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Non Success status {status}: {body}")]
    Status {
        status: reqwest::StatusCode,
        body: String,
    },

    #[error("Rate limited, {} of {} requests remaining until {}", .0.remaining, .0.limit, .0.resets_at)]
    RateLimited(RateLimit),

    #[error("Unexpected response format: {0}")]
    UnexpectedShape(serde_json::Value),

    #[error("Parsing {entity}: {source}")]
    Model {
        entity: &'static str,
        #[source]
        source: serde_json::Error,
    },

    #[error("Invalid parameter: {0}")]
    InvalidParameter(String),

    #[error("Invalid client configuration: {0}")]
    Config(String),
}

pub type Result<T, E = Error> = std::result::Result<T, E>;

impl Error {
    /// The HTTP status of the response that caused this error, if there was one
    pub fn status(&self) -> Option<reqwest::StatusCode> {
        match self {
            Self::Http(e) => e.status(),
            Self::Status { status, .. } => Some(*status),
            Self::RateLimited(_) => Some(reqwest::StatusCode::TOO_MANY_REQUESTS),
            _ => None,
        }
    }
}
