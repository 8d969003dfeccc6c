use crate::domain::{
    common::ScoringConfig,
    label::entities::FoodLabelRecord,
    preferences::entities::{AllergenSensitivity, UserPreferences},
    scoring::entities::{ComplianceReport, IngredientClassification, ScoreResult, Tier},
};

/// Baseline for a nutritionally average product.
const BASE_SCORE: i64 = 65;

/// Unsaturated-fat sources rewarded by the score. Extensible, but keep the
/// classifier reference sets disjoint when extending.
const UNSATURATED_OIL_SOURCES: &[&str] = &["rapeseed oil"];

const CONCERNING_INGREDIENTS: &[&str] = &["edta", "sugar", "salt"];
const NEUTRAL_INGREDIENTS: &[&str] = &["water", "spirit vinegar", "lemon juice concentrate"];
const FAVORABLE_INGREDIENTS: &[&str] = &["rapeseed oil", "egg", "paprika extract"];

/// Deterministic scoring over a normalized label record. Pure and
/// stateless: no I/O, no logging, no retained state between calls, safe to
/// invoke concurrently.
#[derive(Debug, Clone, Default)]
pub struct ScoringEngine {
    config: ScoringConfig,
}

impl ScoringEngine {
    pub fn new(config: ScoringConfig) -> Self {
        Self { config }
    }

    /// Full evaluation: score, per-ingredient tiers in label order, and the
    /// compliance report. Absent preferences fall back to the defaults, so
    /// evaluation never fails merely because preferences are unset.
    pub fn evaluate(
        &self,
        record: &FoodLabelRecord,
        preferences: Option<&UserPreferences>,
    ) -> ScoreResult {
        let defaults;
        let preferences = match preferences {
            Some(preferences) => preferences,
            None => {
                defaults = UserPreferences::default();
                &defaults
            }
        };

        let ingredient_classifications = record
            .ingredients
            .list
            .iter()
            .map(|ingredient| IngredientClassification {
                ingredient: ingredient.clone(),
                tier: classify_ingredient(ingredient),
            })
            .collect();

        ScoreResult {
            health_score: compute_health_score(record),
            ingredient_classifications,
            compliance_report: self.evaluate_compliance(record, preferences),
        }
    }

    /// Non-fatal mismatches and hard conflicts between a label record and
    /// the user's stored preferences. Allergen matching treats an alert as
    /// matched when the label's allergen entry contains the alert term,
    /// case-insensitively.
    pub fn evaluate_compliance(
        &self,
        record: &FoodLabelRecord,
        preferences: &UserPreferences,
    ) -> ComplianceReport {
        let mut report = ComplianceReport::default();

        let declared = record.allergens.declared.iter();
        let may_contain = record.allergens.may_contain.iter();
        for allergen in declared.chain(may_contain) {
            let matched = preferences
                .allergen_alerts
                .iter()
                .any(|alert| contains_ignore_case(allergen, alert));

            if matched && !report.allergen_conflicts.contains(allergen) {
                report.allergen_conflicts.push(allergen.clone());
            }
        }

        for ingredient in &record.ingredients.list {
            let avoided = preferences
                .ingredients_to_avoid
                .iter()
                .any(|avoid| contains_ignore_case(ingredient, avoid));

            if avoided {
                report
                    .violations
                    .push(format!("{ingredient} is on your avoid list"));
            }
        }

        for restriction in &preferences.dietary_restrictions {
            let keywords = self.config.restrictions.excluded_keywords(restriction);

            let ingredients = record.ingredients.list.iter();
            let declared = record.allergens.declared.iter();
            for item in ingredients.chain(declared) {
                let excluded = keywords
                    .iter()
                    .any(|keyword| contains_ignore_case(item, keyword));

                if excluded {
                    let violation = format!("{item} conflicts with {restriction}");
                    if !report.violations.contains(&violation) {
                        report.violations.push(violation);
                    }
                }
            }
        }

        self.check_macro_alignment(record, preferences, &mut report);

        if preferences.allergen_sensitivity == AllergenSensitivity::High
            && !record.allergens.may_contain.is_empty()
        {
            report.warnings.push(format!(
                "May contain traces: {}",
                record.allergens.may_contain.join(", ")
            ));
        }

        if preferences.eco_conscious
            && record.packaging.sustainability_claims.is_empty()
            && record.packaging.certifications.is_empty()
        {
            report
                .warnings
                .push("No sustainability claims or certifications on packaging".to_string());
        }

        report
    }

    fn check_macro_alignment(
        &self,
        record: &FoodLabelRecord,
        preferences: &UserPreferences,
        report: &mut ComplianceReport,
    ) {
        let Some(facts) = record.nutritional_info.effective() else {
            return;
        };

        let total = facts.protein + facts.carbs + facts.fats.total;
        if total <= 0.0 {
            return;
        }

        let targets = &preferences.macro_preferences;
        let shares = [
            ("Protein", facts.protein / total * 100.0, targets.protein),
            ("Carbs", facts.carbs / total * 100.0, targets.carbs),
            ("Fats", facts.fats.total / total * 100.0, targets.fats),
        ];

        for (name, share, target) in shares {
            if (share - target).abs() > self.config.macro_tolerance_pct {
                report.warnings.push(format!(
                    "{name} share {share:.0}% deviates from your {target:.0}% target"
                ));
            }
        }
    }
}

/// Health score in [0, 100]: baseline 65 plus a fixed set of additive
/// adjustments, each triggered independently, so application order never
/// changes the sum. Missing nutrition blocks skip their adjustments.
pub fn compute_health_score(record: &FoodLabelRecord) -> i64 {
    let mut score = BASE_SCORE;

    let has_unsaturated_oil = record
        .ingredients
        .list
        .iter()
        .any(|ingredient| contains_any(ingredient, UNSATURATED_OIL_SOURCES));
    if has_unsaturated_oil {
        score += 15;
    }

    if !record.ingredients.preservatives.is_empty() {
        score -= 10;
    }

    if let Some(facts) = record.nutritional_info.effective() {
        if facts.calories > 100.0 {
            score -= 10;
        }
        if facts.sugar > 0.0 {
            score -= 5;
        }
    }

    let has_eco_claim = record
        .packaging
        .sustainability_claims
        .iter()
        .any(|claim| contains_any(claim, &["recycled", "sustainable"]));
    if has_eco_claim {
        score += 10;
    }

    if !record.packaging.certifications.is_empty() {
        score += 5;
    }

    let has_omega_claim = record
        .health_claims
        .iter()
        .any(|claim| contains_any(claim, &["omega"]));
    if has_omega_claim {
        score += 5;
    }

    score.clamp(0, 100)
}

/// Lookup-table classifier over three disjoint reference sets, checked in
/// precedence order: concerning, then neutral, then favorable. Unknown
/// ingredients merge into the neutral tier.
pub fn classify_ingredient(ingredient: &str) -> Tier {
    if contains_any(ingredient, CONCERNING_INGREDIENTS) {
        Tier::Concerning
    } else if contains_any(ingredient, NEUTRAL_INGREDIENTS) {
        Tier::Neutral
    } else if contains_any(ingredient, FAVORABLE_INGREDIENTS) {
        Tier::Favorable
    } else {
        Tier::Neutral
    }
}

fn contains_any(haystack: &str, needles: &[&str]) -> bool {
    let haystack = haystack.to_lowercase();
    needles.iter().any(|needle| haystack.contains(needle))
}

fn contains_ignore_case(haystack: &str, needle: &str) -> bool {
    if needle.is_empty() {
        return false;
    }
    haystack.to_lowercase().contains(&needle.to_lowercase())
}
