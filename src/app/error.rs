use thiserror::Error;

#[derive(Error, Debug)]
pub enum ApodError {
    #[error("Invalid query intent: {0}")]
    InvalidIntent(String),

    #[error("HTTP error: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("HTTP {status} from {url}")]
    HttpStatus { url: String, status: u16 },

    /// The body matched neither a single record nor a list of records.
    #[error("Could not decode response as a record ({single}) or a list of records ({many}): {excerpt}")]
    Decode {
        single: serde_json::Error,
        many: serde_json::Error,
        excerpt: String,
    },

    /// The API answered with its documented error object.
    #[error("APOD API error {code}: {message}")]
    Upstream { code: String, message: String },

    #[error("APOD for {date} is a {media_type}, not an image")]
    NotAnImage { date: String, media_type: String },

    #[error("Invalid destination path: {0}")]
    InvalidDestination(String),

    #[error("Invalid date '{0}', expected YYYY-MM-DD")]
    InvalidDate(String),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Invalid URL: {0}")]
    InvalidUrl(#[from] url::ParseError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Configuration error: {0}")]
    Config(String),
}

impl ApodError {
    /// Network or HTTP-level failures, as opposed to problems with the request or payload.
    pub fn is_transport(&self) -> bool {
        matches!(self, ApodError::Transport(_) | ApodError::HttpStatus { .. })
    }
}

pub type Result<T> = std::result::Result<T, ApodError>;
