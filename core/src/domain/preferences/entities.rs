use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::domain::{common::generate_timestamp, preferences::value_objects::UpdatePreferencesInput};

/// Stored dietary profile of a user. When a user has never saved one, the
/// defaults apply; scoring never fails because preferences are unset.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct UserPreferences {
    pub id: Uuid,
    pub user_id: Uuid,
    pub dietary_restrictions: Vec<String>,
    pub preferred_diets: Vec<String>,
    pub allergen_alerts: Vec<String>,
    pub allergen_sensitivity: AllergenSensitivity,
    pub health_goals: Vec<String>,
    pub macro_preferences: MacroPreferences,
    pub ingredients_to_avoid: Vec<String>,
    pub preferred_ingredients: Vec<String>,
    pub eco_conscious: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum AllergenSensitivity {
    Low,
    #[default]
    Medium,
    High,
}

/// Target macro split in percentage points. The defaults are the 30/40/30
/// protein/carbs/fats split.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct MacroPreferences {
    pub protein: f64,
    pub carbs: f64,
    pub fats: f64,
}

impl Default for MacroPreferences {
    fn default() -> Self {
        Self {
            protein: 30.0,
            carbs: 40.0,
            fats: 30.0,
        }
    }
}

impl Default for UserPreferences {
    fn default() -> Self {
        Self::default_for(Uuid::nil())
    }
}

impl UserPreferences {
    /// Well-defined default profile: medium sensitivity, 30/40/30 macro
    /// split, every list empty.
    pub fn default_for(user_id: Uuid) -> Self {
        let (now, timestamp) = generate_timestamp();

        Self {
            id: Uuid::new_v7(timestamp),
            user_id,
            dietary_restrictions: Vec::new(),
            preferred_diets: Vec::new(),
            allergen_alerts: Vec::new(),
            allergen_sensitivity: AllergenSensitivity::Medium,
            health_goals: Vec::new(),
            macro_preferences: MacroPreferences::default(),
            ingredients_to_avoid: Vec::new(),
            preferred_ingredients: Vec::new(),
            eco_conscious: false,
            created_at: now,
            updated_at: now,
        }
    }

    /// Partial update: unset input fields keep their current values.
    pub fn apply(&mut self, input: UpdatePreferencesInput) {
        let (now, _) = generate_timestamp();

        if let Some(v) = input.dietary_restrictions {
            self.dietary_restrictions = v;
        }
        if let Some(v) = input.preferred_diets {
            self.preferred_diets = v;
        }
        if let Some(v) = input.allergen_alerts {
            self.allergen_alerts = v;
        }
        if let Some(v) = input.allergen_sensitivity {
            self.allergen_sensitivity = v;
        }
        if let Some(v) = input.health_goals {
            self.health_goals = v;
        }
        if let Some(v) = input.macro_preferences {
            self.macro_preferences = v;
        }
        if let Some(v) = input.ingredients_to_avoid {
            self.ingredients_to_avoid = v;
        }
        if let Some(v) = input.preferred_ingredients {
            self.preferred_ingredients = v;
        }
        if let Some(v) = input.eco_conscious {
            self.eco_conscious = v;
        }
        self.updated_at = now;
    }
}

pub const DIETARY_RESTRICTIONS: &[&str] = &[
    "Vegetarian",
    "Vegan",
    "Gluten-Free",
    "Dairy-Free",
    "Kosher",
    "Halal",
    "Nut-Free",
    "Low-Carb",
    "Keto",
    "Paleo",
];

pub const COMMON_ALLERGENS: &[&str] = &[
    "Milk",
    "Eggs",
    "Fish",
    "Shellfish",
    "Tree Nuts",
    "Peanuts",
    "Wheat",
    "Soybeans",
];

pub const HEALTH_GOALS: &[&str] = &[
    "Weight Loss",
    "Weight Gain",
    "Muscle Building",
    "Heart Health",
    "Better Sleep",
    "More Energy",
    "Digestive Health",
    "Blood Sugar Control",
];
