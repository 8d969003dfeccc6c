use axum::{Extension, extract::State};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::application::{
    http::server::{
        api_entities::{api_error::ApiError, response::Response},
        app_state::AppState,
    },
    user_context::UserContext,
};
use nutridecode_core::domain::preferences::{entities::UserPreferences, ports::PreferenceService};

#[derive(Debug, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct GetPreferencesResponse {
    pub data: UserPreferences,
}

#[utoipa::path(
    get,
    path = "",
    tag = "preferences",
    summary = "Get dietary preferences",
    description = "The user's stored dietary profile, or the default profile when none was saved",
    responses(
        (status = 200, body = GetPreferencesResponse)
    ),
)]
pub async fn get_preferences(
    State(state): State<AppState>,
    Extension(user): Extension<UserContext>,
) -> Result<Response<GetPreferencesResponse>, ApiError> {
    let preferences = state
        .service
        .get_preferences(user.user_id)
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(GetPreferencesResponse { data: preferences }))
}
