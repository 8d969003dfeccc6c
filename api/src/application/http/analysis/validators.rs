use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};
use validator::Validate;

/// Body of a label analysis request: the raw document returned by the
/// label-extraction service plus an opaque reference to the captured image.
#[derive(Debug, Serialize, Deserialize, ToSchema, Validate)]
pub struct AnalyzeLabelRequest {
    #[schema(value_type = Object)]
    pub document: serde_json::Value,

    #[validate(length(max = 1024, message = "image_ref must be at most 1024 characters"))]
    pub image_ref: Option<String>,
}

#[derive(Debug, Serialize, Deserialize, IntoParams, ToSchema)]
#[into_params(parameter_in = Query)]
pub struct GetAnalysisHistoryParams {
    /// Inclusive lower bound on the record's creation time (RFC 3339).
    pub from: Option<DateTime<Utc>>,
    /// Inclusive upper bound on the record's creation time (RFC 3339).
    pub to: Option<DateTime<Utc>>,
    #[schema(example = 0)]
    pub offset: Option<u32>,
    #[schema(example = 20)]
    pub limit: Option<u32>,
}
