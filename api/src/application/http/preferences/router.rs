use super::handlers::{
    get_preferences::{__path_get_preferences, get_preferences},
    update_preferences::{__path_update_preferences, update_preferences},
};
use crate::application::{http::server::app_state::AppState, user_context::user_context_middleware};
use axum::{Router, middleware, routing::get};
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(paths(get_preferences, update_preferences))]
pub struct PreferencesApiDoc;

pub fn preferences_routes(state: AppState) -> Router<AppState> {
    Router::new()
        .route(
            &format!("{}/preferences", state.args.server.root_path),
            get(get_preferences).put(update_preferences),
        )
        .layer(middleware::from_fn(user_context_middleware))
}
