use axum::{extract::State, Extension, Json};
use medassist_advice::AdviceError;
use medassist_core::types::{AdviceQuery, AdviceResult};

use crate::middleware::RequestId;

use super::{ApiError, ApiResponse, AppState, ResponseMeta};

pub(super) async fn create_advice(
    State(state): State<AppState>,
    Extension(req_id): Extension<RequestId>,
    Json(query): Json<AdviceQuery>,
) -> Result<Json<ApiResponse<AdviceResult>>, ApiError> {
    let result = state
        .service
        .advise(&query)
        .await
        .map_err(|e| map_advice_error(req_id.0.clone(), &e))?;

    Ok(Json(ApiResponse {
        data: result,
        meta: ResponseMeta::new(req_id.0),
    }))
}

fn map_advice_error(request_id: String, error: &AdviceError) -> ApiError {
    match error {
        AdviceError::EmptyQuery => {
            ApiError::new(request_id, "validation_error", "query must not be empty")
        }
        AdviceError::Llm(e) => {
            tracing::error!(error = %e, "LLM request failed");
            ApiError::new(request_id, "upstream_error", e.to_string())
        }
        AdviceError::Facility(e) => {
            // Construction-time only; advise() absorbs lookup failures itself.
            tracing::error!(error = %e, "facility client error");
            ApiError::new(request_id, "internal_error", e.to_string())
        }
    }
}
