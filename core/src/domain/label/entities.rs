use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Structured extraction of a food package's printed information, as
/// produced by the external label-extraction service and normalized at the
/// parse boundary in [`crate::domain::label::schema`].
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize, ToSchema)]
pub struct FoodLabelRecord {
    pub product_name: String,
    pub ingredients: Ingredients,
    pub allergens: Allergens,
    pub nutritional_info: NutritionalInfo,
    pub health_claims: Vec<String>,
    pub packaging: Packaging,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize, ToSchema)]
pub struct Ingredients {
    /// Ingredients in label disclosure order. Order is display-relevant and
    /// preserved end to end; scoring only looks at substring membership.
    pub list: Vec<String>,
    pub preservatives: Vec<String>,
    pub additives: Vec<String>,
    pub antioxidants: Vec<String>,
    pub stabilizers: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize, ToSchema)]
pub struct Allergens {
    pub declared: Vec<String>,
    pub may_contain: Vec<String>,
}

/// Canonical nutrition shape: a per-serving / per-100g pair, either side
/// optional. Flat records from older extraction revisions are normalized
/// into `per_100g` at the parse boundary.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize, ToSchema)]
pub struct NutritionalInfo {
    pub per_serving: Option<NutritionFacts>,
    pub per_100g: Option<NutritionFacts>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize, ToSchema)]
pub struct NutritionFacts {
    pub calories: f64,
    pub protein: f64,
    pub carbs: f64,
    pub fats: Fats,
    pub sugar: f64,
    pub salt: f64,
    pub omega3: f64,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize, ToSchema)]
pub struct Fats {
    pub total: f64,
    pub saturated: f64,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize, ToSchema)]
pub struct Packaging {
    pub materials: Vec<String>,
    pub recycling_info: String,
    pub sustainability_claims: Vec<String>,
    pub certifications: Vec<String>,
}

impl NutritionalInfo {
    /// Per-serving facts when the label discloses them, per-100g otherwise.
    /// The scoring adjustments read through this accessor.
    pub fn effective(&self) -> Option<&NutritionFacts> {
        self.per_serving.as_ref().or(self.per_100g.as_ref())
    }
}
