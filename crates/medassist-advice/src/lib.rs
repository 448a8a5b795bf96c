//! Advice pipeline: coercion of untrusted model output and the orchestrator
//! that sequences prompt construction, the LLM call, and pharmacy enrichment.

pub mod coerce;
pub mod error;
pub mod pipeline;

pub use coerce::{coerce_output, normalize_videos};
pub use error::AdviceError;
pub use pipeline::AdviceService;
