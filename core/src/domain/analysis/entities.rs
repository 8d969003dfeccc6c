use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::domain::{
    common::generate_timestamp, label::entities::FoodLabelRecord, scoring::entities::ScoreResult,
};

/// One persisted analysis: the normalized label, the score computed for it
/// and an opaque reference to the captured image (owned by the caller's
/// storage, never dereferenced here).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct AnalysisRecord {
    pub id: Uuid,
    pub user_id: Uuid,
    pub image_ref: Option<String>,
    pub label: FoodLabelRecord,
    pub score: ScoreResult,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl AnalysisRecord {
    pub fn new(
        user_id: Uuid,
        image_ref: Option<String>,
        label: FoodLabelRecord,
        score: ScoreResult,
    ) -> Self {
        let (now, timestamp) = generate_timestamp();

        Self {
            id: Uuid::new_v7(timestamp),
            user_id,
            image_ref,
            label,
            score,
            created_at: now,
            updated_at: now,
        }
    }
}
