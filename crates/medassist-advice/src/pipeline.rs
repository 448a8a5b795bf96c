//! Orchestration of one advice request.

use medassist_core::app_config::LlmProvider;
use medassist_core::types::{AdviceQuery, AdviceResult, NearbyChemist};
use medassist_core::AppConfig;
use medassist_llm::{build_prompt, LlmClient};
use medassist_overpass::OverpassClient;

use crate::coerce::coerce_output;
use crate::error::AdviceError;

/// Sequences prompt construction, the LLM call, output coercion, and the
/// optional pharmacy enrichment into one [`AdviceResult`].
///
/// Holds no mutable state; concurrent requests against a shared instance are
/// independent.
pub struct AdviceService {
    llm: LlmClient,
    overpass: OverpassClient,
    search_radius_meters: u32,
    result_limit: usize,
}

impl AdviceService {
    /// Assembles a service from already-constructed clients. Tests use this
    /// to point both clients at wiremock servers.
    #[must_use]
    pub fn new(
        llm: LlmClient,
        overpass: OverpassClient,
        search_radius_meters: u32,
        result_limit: usize,
    ) -> Self {
        Self {
            llm,
            overpass,
            search_radius_meters,
            result_limit,
        }
    }

    /// Builds the service from application configuration, selecting the LLM
    /// backend by provider.
    ///
    /// # Errors
    ///
    /// Returns [`AdviceError::Llm`] or [`AdviceError::Facility`] if a client
    /// cannot be constructed.
    pub fn from_config(config: &AppConfig) -> Result<Self, AdviceError> {
        let llm = match (config.llm_provider, config.llm_base_url.as_deref()) {
            (LlmProvider::OpenAi, None) => LlmClient::openai(
                &config.llm_api_key,
                &config.llm_model,
                config.llm_timeout_secs,
            ),
            (LlmProvider::OpenAi, Some(base_url)) => LlmClient::openai_with_base_url(
                &config.llm_api_key,
                &config.llm_model,
                config.llm_timeout_secs,
                base_url,
            ),
            (LlmProvider::Gemini, None) => LlmClient::gemini(
                &config.llm_api_key,
                &config.llm_model,
                config.llm_timeout_secs,
            ),
            (LlmProvider::Gemini, Some(base_url)) => LlmClient::gemini_with_base_url(
                &config.llm_api_key,
                &config.llm_model,
                config.llm_timeout_secs,
                base_url,
            ),
        }?;

        let overpass =
            OverpassClient::with_base_url(config.overpass_timeout_secs, &config.overpass_base_url)?;

        Ok(Self::new(
            llm,
            overpass,
            config.search_radius_meters,
            config.result_limit,
        ))
    }

    /// Runs one query through the pipeline.
    ///
    /// 1. Reject empty query text before any outbound call.
    /// 2. Build the prompt and ask the LLM for a JSON-only completion.
    /// 3. Coerce the model output into the strict result shape.
    /// 4. With a coordinate: rank nearby pharmacies. A failed lookup degrades
    ///    to an empty list and the request still succeeds; without a
    ///    coordinate the list stays empty.
    ///
    /// # Errors
    ///
    /// - [`AdviceError::EmptyQuery`] for empty/whitespace query text.
    /// - [`AdviceError::Llm`] if the LLM call fails or its output is not JSON.
    pub async fn advise(&self, query: &AdviceQuery) -> Result<AdviceResult, AdviceError> {
        let text = query.query.trim();
        if text.is_empty() {
            return Err(AdviceError::EmptyQuery);
        }

        let prompt = build_prompt(text);
        let model_output = self.llm.complete_advice(&prompt).await?;
        let mut result = coerce_output(&model_output);

        if let Some(location) = query.user_location {
            match self
                .overpass
                .find_nearby_pharmacies(
                    location.lat,
                    location.lon,
                    self.search_radius_meters,
                    self.result_limit,
                )
                .await
            {
                Ok(pharmacies) => {
                    result.nearby_chemists = pharmacies
                        .into_iter()
                        .map(|p| NearbyChemist {
                            name: p.name,
                            address: p.address,
                            map_url: p.map_url,
                        })
                        .collect();
                }
                Err(e) => {
                    // Degraded, not fatal: the advice still goes out with an
                    // empty chemist list.
                    tracing::warn!(error = %e, "pharmacy lookup failed");
                }
            }
        }

        Ok(result)
    }
}
