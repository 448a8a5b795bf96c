use axum::{Extension, Json};
use serde::{Deserialize, Serialize};

use crate::middleware::RequestId;

use super::{ApiError, ApiResponse, ResponseMeta};

/// Placeholder contact identifier echoed back for any accepted token.
/// Carried over from the original integration's stub; this endpoint is not
/// real authentication (bearer auth lives in the middleware).
const PLACEHOLDER_PHONE_NUMBER: &str = "919876543210";

const MIN_TOKEN_LENGTH: usize = 10;

#[derive(Debug, Deserialize)]
pub(super) struct ValidateRequest {
    bearer_token: String,
}

#[derive(Debug, Serialize)]
pub(super) struct ValidateData {
    phone_number: &'static str,
}

pub(super) async fn validate_token(
    Extension(req_id): Extension<RequestId>,
    Json(request): Json<ValidateRequest>,
) -> Result<Json<ApiResponse<ValidateData>>, ApiError> {
    if request.bearer_token.len() < MIN_TOKEN_LENGTH {
        return Err(ApiError::new(
            req_id.0,
            "validation_error",
            "invalid bearer token",
        ));
    }

    Ok(Json(ApiResponse {
        data: ValidateData {
            phone_number: PLACEHOLDER_PHONE_NUMBER,
        },
        meta: ResponseMeta::new(req_id.0),
    }))
}
