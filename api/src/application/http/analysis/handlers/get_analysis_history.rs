use axum::{
    Extension,
    extract::{Query, State},
};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::application::{
    http::{
        analysis::validators::GetAnalysisHistoryParams,
        server::{
            api_entities::{api_error::ApiError, response::Response},
            app_state::AppState,
        },
    },
    user_context::UserContext,
};
use nutridecode_core::domain::analysis::{
    entities::AnalysisRecord,
    ports::AnalysisService,
    value_objects::{GetAnalysisHistoryFilter, GetAnalysisHistoryInput},
};

#[derive(Debug, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct GetAnalysisHistoryResponse {
    pub data: Vec<AnalysisRecord>,
}

#[utoipa::path(
    get,
    path = "",
    tag = "analysis",
    summary = "Get analysis history",
    description = "Past analyses of the current user, newest first, optionally bounded by a time range",
    responses(
        (status = 200, body = GetAnalysisHistoryResponse)
    ),
    params(GetAnalysisHistoryParams),
)]
pub async fn get_analysis_history(
    State(state): State<AppState>,
    Extension(user): Extension<UserContext>,
    Query(params): Query<GetAnalysisHistoryParams>,
) -> Result<Response<GetAnalysisHistoryResponse>, ApiError> {
    let filter = GetAnalysisHistoryFilter {
        from: params.from,
        to: params.to,
        offset: params.offset,
        limit: params.limit,
    };

    let records = state
        .service
        .get_analysis_history(user.user_id, GetAnalysisHistoryInput { filter })
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(GetAnalysisHistoryResponse { data: records }))
}
