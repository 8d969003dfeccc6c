use chrono::{DateTime, Utc};
use serde_json::Value;

#[derive(Debug, Clone)]
pub struct AnalyzeLabelInput {
    /// Raw document from the label-extraction service, untrusted until it
    /// passes the parse boundary.
    pub document: Value,
    pub image_ref: Option<String>,
}

#[derive(Debug, Clone, Default)]
pub struct GetAnalysisHistoryInput {
    pub filter: GetAnalysisHistoryFilter,
}

/// Time-range and pagination filter for history retrieval.
#[derive(Debug, Clone, Default)]
pub struct GetAnalysisHistoryFilter {
    pub from: Option<DateTime<Utc>>,
    pub to: Option<DateTime<Utc>>,
    pub offset: Option<u32>,
    pub limit: Option<u32>,
}
