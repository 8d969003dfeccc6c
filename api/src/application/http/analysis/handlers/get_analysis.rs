use axum::{
    Extension,
    extract::{Path, State},
};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::application::{
    http::server::{
        api_entities::{api_error::ApiError, response::Response},
        app_state::AppState,
    },
    user_context::UserContext,
};
use nutridecode_core::domain::analysis::{entities::AnalysisRecord, ports::AnalysisService};

#[derive(Debug, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct GetAnalysisResponse {
    pub data: AnalysisRecord,
}

#[utoipa::path(
    get,
    path = "/{analysis_id}",
    tag = "analysis",
    summary = "Get a single analysis",
    responses(
        (status = 200, body = GetAnalysisResponse)
    ),
    params(
        ("analysis_id" = Uuid, Path, description = "Analysis record id"),
    ),
)]
pub async fn get_analysis(
    State(state): State<AppState>,
    Extension(user): Extension<UserContext>,
    Path(analysis_id): Path<Uuid>,
) -> Result<Response<GetAnalysisResponse>, ApiError> {
    let record = state
        .service
        .get_analysis(user.user_id, analysis_id)
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(GetAnalysisResponse { data: record }))
}
