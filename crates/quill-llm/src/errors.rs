//! Generation client errors.

use thiserror::Error;

/// Errors raised while constructing or invoking a generation client.
#[derive(Debug, Error)]
pub enum ClientError {
    /// The HTTP request itself failed (connect, timeout, body read).
    #[error("http request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// The endpoint answered with a non-success status.
    #[error("api error (status {status}): {message}")]
    Api {
        /// HTTP status code.
        status: u16,
        /// Response body, as returned by the endpoint.
        message: String,
    },

    /// The provider requires an API key and none was configured.
    #[error("missing api key for provider `{0}`")]
    MissingApiKey(String),

    /// The endpoint answered without any usable completion content.
    #[error("provider returned an empty response")]
    EmptyResponse,

    /// The configured provider id is not known to the client factory.
    #[error("unsupported provider `{0}`")]
    UnsupportedProvider(String),
}
