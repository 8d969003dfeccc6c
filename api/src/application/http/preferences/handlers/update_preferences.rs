use axum::{Extension, Json, extract::State};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::application::{
    http::server::{
        api_entities::{api_error::ApiError, response::Response},
        app_state::AppState,
    },
    user_context::UserContext,
};
use nutridecode_core::domain::preferences::{
    entities::UserPreferences, ports::PreferenceService, value_objects::UpdatePreferencesInput,
};

#[derive(Debug, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct UpdatePreferencesResponse {
    pub data: UserPreferences,
}

#[utoipa::path(
    put,
    path = "",
    tag = "preferences",
    summary = "Update dietary preferences",
    description = "Partial update; omitted fields keep their stored values",
    responses(
        (status = 200, body = UpdatePreferencesResponse)
    ),
)]
pub async fn update_preferences(
    State(state): State<AppState>,
    Extension(user): Extension<UserContext>,
    Json(input): Json<UpdatePreferencesInput>,
) -> Result<Response<UpdatePreferencesResponse>, ApiError> {
    let preferences = state
        .service
        .update_preferences(user.user_id, input)
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(UpdatePreferencesResponse { data: preferences }))
}
