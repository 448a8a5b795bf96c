use thiserror::Error;

/// Errors returned by the LLM client.
///
/// All of these are fatal for the advice request that triggered the call;
/// the orchestrator surfaces them instead of retrying.
#[derive(Debug, Error)]
pub enum LlmError {
    /// Network or TLS failure from the underlying HTTP client.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// The provider answered with a non-success HTTP status.
    #[error("LLM API error: status {status} - {body}")]
    Api { status: u16, body: String },

    /// The response envelope was valid JSON but the model text was missing
    /// from its expected location.
    #[error("malformed LLM response: {0}")]
    MalformedResponse(String),

    /// The envelope or the model's own output could not be parsed as JSON.
    #[error("JSON parse error for {context}: {source}")]
    Json {
        context: String,
        #[source]
        source: serde_json::Error,
    },
}
