use thiserror::Error;

/// Errors returned by the Overpass API client.
#[derive(Debug, Error)]
pub enum OverpassError {
    /// Network or TLS failure from the underlying HTTP client.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Overpass answered with a non-success HTTP status (busy endpoints
    /// routinely return 429/504 under load).
    #[error("Overpass API error: status {status}")]
    Api { status: u16 },

    /// The response body was not valid JSON.
    #[error("JSON parse error for {context}: {source}")]
    Json {
        context: String,
        #[source]
        source: serde_json::Error,
    },

    /// The base URL handed to the client could not be parsed.
    #[error("invalid base URL: {0}")]
    InvalidBaseUrl(String),
}
