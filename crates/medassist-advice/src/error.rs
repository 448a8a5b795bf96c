use thiserror::Error;

/// Errors surfaced by the advice pipeline.
///
/// Facility-search failures are deliberately absent: the orchestrator absorbs
/// them into an empty `nearby_chemists` list. The [`AdviceError::Facility`]
/// variant only covers client construction.
#[derive(Debug, Error)]
pub enum AdviceError {
    /// The query text was empty or whitespace. Checked before any outbound call.
    #[error("query must not be empty")]
    EmptyQuery,

    /// The LLM call failed or returned unusable output. Fatal for the request.
    #[error("LLM request failed: {0}")]
    Llm(#[from] medassist_llm::LlmError),

    /// The Overpass client could not be constructed.
    #[error("facility client setup failed: {0}")]
    Facility(#[from] medassist_overpass::OverpassError),
}
