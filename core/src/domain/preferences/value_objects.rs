use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::domain::preferences::entities::{AllergenSensitivity, MacroPreferences};

/// Partial update for a user's stored preferences. `None` fields are left
/// untouched.
#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema)]
pub struct UpdatePreferencesInput {
    pub dietary_restrictions: Option<Vec<String>>,
    pub preferred_diets: Option<Vec<String>>,
    pub allergen_alerts: Option<Vec<String>>,
    pub allergen_sensitivity: Option<AllergenSensitivity>,
    pub health_goals: Option<Vec<String>>,
    pub macro_preferences: Option<MacroPreferences>,
    pub ingredients_to_avoid: Option<Vec<String>>,
    pub preferred_ingredients: Option<Vec<String>>,
    pub eco_conscious: Option<bool>,
}
