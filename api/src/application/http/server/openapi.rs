use crate::application::http::{
    analysis::router::AnalysisApiDoc, preferences::router::PreferencesApiDoc,
};
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(
    info(
        title = "NutriDecode API"
    ),
    nest(
        (path = "/analysis", api = AnalysisApiDoc),
        (path = "/preferences", api = PreferencesApiDoc),
    )
)]
pub struct ApiDoc;
