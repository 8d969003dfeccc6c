use axum::{Extension, Json, extract::State};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use crate::application::{
    http::{
        analysis::validators::AnalyzeLabelRequest,
        server::{
            api_entities::{api_error::ApiError, response::Response},
            app_state::AppState,
        },
    },
    user_context::UserContext,
};
use nutridecode_core::domain::analysis::{
    entities::AnalysisRecord, ports::AnalysisService, value_objects::AnalyzeLabelInput,
};

#[derive(Debug, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct AnalyzeLabelResponse {
    pub data: AnalysisRecord,
}

#[utoipa::path(
    post,
    path = "",
    tag = "analysis",
    summary = "Analyze a food label",
    description = "Scores an extracted label document against the user's dietary preferences and persists the result",
    responses(
        (status = 201, body = AnalyzeLabelResponse)
    ),
)]
pub async fn analyze_label(
    State(state): State<AppState>,
    Extension(user): Extension<UserContext>,
    Json(request): Json<AnalyzeLabelRequest>,
) -> Result<Response<AnalyzeLabelResponse>, ApiError> {
    request
        .validate()
        .map_err(|e| ApiError::Validation(e.to_string()))?;

    let record = state
        .service
        .analyze_label(
            user.user_id,
            AnalyzeLabelInput {
                document: request.document,
                image_ref: request.image_ref,
            },
        )
        .await
        .map_err(ApiError::from)?;

    Ok(Response::Created(AnalyzeLabelResponse { data: record }))
}
