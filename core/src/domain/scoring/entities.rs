use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Outcome of evaluating one label record against a user's preferences.
/// Transient: built per request, never mutated afterwards.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct ScoreResult {
    /// Integer in [0, 100].
    pub health_score: i64,
    /// One entry per ingredient, in label disclosure order.
    pub ingredient_classifications: Vec<IngredientClassification>,
    pub compliance_report: ComplianceReport,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct IngredientClassification {
    pub ingredient: String,
    pub tier: Tier,
}

/// Qualitative bucket for an ingredient, used by the presentation layer for
/// color coding: favorable=green, neutral=yellow, concerning=red.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum Tier {
    Favorable,
    Neutral,
    Concerning,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize, ToSchema)]
pub struct ComplianceReport {
    pub violations: Vec<String>,
    pub warnings: Vec<String>,
    pub allergen_conflicts: Vec<String>,
}

impl ComplianceReport {
    pub fn is_empty(&self) -> bool {
        self.violations.is_empty() && self.warnings.is_empty() && self.allergen_conflicts.is_empty()
    }
}
