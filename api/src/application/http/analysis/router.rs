use super::handlers::{
    analyze_label::{__path_analyze_label, analyze_label},
    get_analysis::{__path_get_analysis, get_analysis},
    get_analysis_history::{__path_get_analysis_history, get_analysis_history},
};
use crate::application::{http::server::app_state::AppState, user_context::user_context_middleware};
use axum::{
    Router, middleware,
    routing::{get, post},
};
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(paths(analyze_label, get_analysis_history, get_analysis))]
pub struct AnalysisApiDoc;

pub fn analysis_routes(state: AppState) -> Router<AppState> {
    Router::new()
        .route(
            &format!("{}/analysis", state.args.server.root_path),
            post(analyze_label).get(get_analysis_history),
        )
        .route(
            &format!("{}/analysis/{{analysis_id}}", state.args.server.root_path),
            get(get_analysis),
        )
        .layer(middleware::from_fn(user_context_middleware))
}
