use thiserror::Error;

/// The primary error type for all fallible operations in this crate.
#[derive(Debug, Error)]
pub enum TradierError {
    /// An error occurred during an HTTP request.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// A provided or resolved URL could not be parsed.
    #[error("Invalid URL: {0}")]
    Url(#[from] url::ParseError),

    /// The response body (or a streamed event) was not valid JSON.
    #[error("JSON decoding error: {0}")]
    Json(#[from] serde_json::Error),

    /// The server returned a non-2xx HTTP status code.
    #[error("Unexpected response status: {status} at {url}")]
    Status {
        /// The HTTP status code.
        status: u16,
        /// The URL that returned the error.
        url: String,
        /// The raw response body, empty if it could not be read.
        body: String,
    },

    /// A streaming endpoint was requested by a sandbox account.
    #[error("stream not permitted for sandbox accounts")]
    StreamNotPermitted,

    /// The access token cannot be carried in an `Authorization` header.
    #[error("invalid access token: {0}")]
    InvalidToken(String),

    /// An endpoint template placeholder was left without a value.
    #[error("missing path parameter `{0}`")]
    MissingPathParam(String),

    /// A value substituted into an endpoint template is empty or not path-safe.
    #[error("invalid value for path parameter `{name}`: {value:?}")]
    InvalidPathParam {
        /// The placeholder name.
        name: String,
        /// The rejected value.
        value: String,
    },

    /// The client could not be configured (missing environment variable, unknown account type).
    #[error("configuration error: {0}")]
    Config(String),
}

impl TradierError {
    /// Returns `true` for failures of the outbound call itself, as opposed to
    /// configuration errors raised before any network access.
    #[must_use]
    pub const fn is_transport(&self) -> bool {
        matches!(self, Self::Http(_) | Self::Status { .. } | Self::Json(_))
    }

    /// The HTTP status code, when the server answered with a non-2xx response.
    #[must_use]
    pub const fn status(&self) -> Option<u16> {
        match self {
            Self::Status { status, .. } => Some(*status),
            _ => None,
        }
    }
}
