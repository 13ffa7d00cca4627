use thiserror::Error;

/// Failure while reading a collection from the data store.
///
/// The `Display` text is what the UI shows, so it never carries the access
/// key or raw response bodies.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FetchError {
    #[error("Network error: {0}")]
    Transport(String),

    #[error("Query on `{collection}` failed ({status}): {message}")]
    Query {
        collection: &'static str,
        status: u16,
        message: String,
    },

    #[error("Unexpected `{collection}` record: {message}")]
    Decode {
        collection: &'static str,
        message: String,
    },

    #[error("Data client setup failed: {0}")]
    Setup(String),
}

impl From<reqwest::Error> for FetchError {
    fn from(err: reqwest::Error) -> Self {
        // Strip the URL: it embeds the endpoint and query string.
        FetchError::Transport(err.without_url().to_string())
    }
}
