use serde_json::Value;

use crate::domain::{
    common::entities::app_errors::CoreError,
    label::entities::{
        Allergens, Fats, FoodLabelRecord, Ingredients, NutritionFacts, NutritionalInfo, Packaging,
    },
};

/// Parse boundary for documents produced by the external label-extraction
/// service. The document is untrusted: every missing or malformed sub-field
/// degrades to its empty/zero equivalent instead of failing. Only an
/// entirely absent document is an error.
pub fn parse_label_document(document: &Value) -> Result<FoodLabelRecord, CoreError> {
    let root = match document {
        Value::Null => return Err(CoreError::MissingLabelDocument),
        Value::Object(map) => map,
        _ => {
            return Err(CoreError::Invalid(
                "label document must be a JSON object".to_string(),
            ));
        }
    };

    Ok(FoodLabelRecord {
        product_name: string_field(root.get("productName")),
        ingredients: parse_ingredients(root.get("ingredients")),
        allergens: parse_allergens(root.get("allergens")),
        nutritional_info: parse_nutritional_info(root.get("nutritionalInfo")),
        health_claims: string_list(root.get("healthClaims")),
        packaging: parse_packaging(root.get("packaging")),
    })
}

fn parse_ingredients(value: Option<&Value>) -> Ingredients {
    let obj = value.and_then(Value::as_object);
    let field = |name: &str| string_list(obj.and_then(|o| o.get(name)));

    Ingredients {
        list: field("list"),
        preservatives: field("preservatives"),
        additives: field("additives"),
        antioxidants: field("antioxidants"),
        stabilizers: field("stabilizers"),
    }
}

fn parse_allergens(value: Option<&Value>) -> Allergens {
    let obj = value.and_then(Value::as_object);

    Allergens {
        declared: string_list(obj.and_then(|o| o.get("declared"))),
        may_contain: string_list(obj.and_then(|o| o.get("mayContain"))),
    }
}

/// Accepts both nutrition shapes the extraction service has produced over
/// time: the `{perServing, per100g}` pair, or a flat per-100g record, which
/// is normalized into the `per_100g` slot.
fn parse_nutritional_info(value: Option<&Value>) -> NutritionalInfo {
    let Some(obj) = value.and_then(Value::as_object) else {
        return NutritionalInfo::default();
    };

    let per_serving = obj.get("perServing");
    let per_100g = obj.get("per100g");

    if per_serving.is_some() || per_100g.is_some() {
        return NutritionalInfo {
            per_serving: per_serving.map(parse_nutrition_facts),
            per_100g: per_100g.map(parse_nutrition_facts),
        };
    }

    NutritionalInfo {
        per_serving: None,
        per_100g: Some(parse_nutrition_facts(&Value::Object(obj.clone()))),
    }
}

fn parse_nutrition_facts(value: &Value) -> NutritionFacts {
    let obj = value.as_object();
    let field = |name: &str| number_field(obj.and_then(|o| o.get(name)));

    NutritionFacts {
        calories: field("calories"),
        protein: field("protein"),
        carbs: field("carbs"),
        fats: parse_fats(obj.and_then(|o| o.get("fats"))),
        sugar: field("sugar"),
        salt: field("salt"),
        omega3: field("omega3"),
    }
}

/// `fats` is an object in the detailed shape and a bare number in the flat
/// one; a bare number counts as total fat with no saturated breakdown.
fn parse_fats(value: Option<&Value>) -> Fats {
    match value {
        Some(Value::Object(obj)) => Fats {
            total: number_field(obj.get("total")),
            saturated: number_field(obj.get("saturated")),
        },
        Some(other) => Fats {
            total: number_field(Some(other)),
            saturated: 0.0,
        },
        None => Fats::default(),
    }
}

fn parse_packaging(value: Option<&Value>) -> Packaging {
    let obj = value.and_then(Value::as_object);

    Packaging {
        materials: string_list(obj.and_then(|o| o.get("materials"))),
        recycling_info: string_field(obj.and_then(|o| o.get("recyclingInfo"))),
        sustainability_claims: string_list(obj.and_then(|o| o.get("sustainabilityClaims"))),
        certifications: string_list(obj.and_then(|o| o.get("certifications"))),
    }
}

fn string_field(value: Option<&Value>) -> String {
    value
        .and_then(Value::as_str)
        .map(str::to_string)
        .unwrap_or_default()
}

fn string_list(value: Option<&Value>) -> Vec<String> {
    value
        .and_then(Value::as_array)
        .map(|items| {
            items
                .iter()
                .filter_map(Value::as_str)
                .map(str::to_string)
                .collect()
        })
        .unwrap_or_default()
}

/// Nutritional quantities are non-negative by invariant; negative or
/// non-numeric values degrade to zero.
fn number_field(value: Option<&Value>) -> f64 {
    value
        .and_then(Value::as_f64)
        .filter(|n| n.is_finite())
        .map(|n| n.max(0.0))
        .unwrap_or(0.0)
}

#[cfg(test)]
mod tests {
    use serde_json::{Value, json};

    use super::parse_label_document;
    use crate::domain::common::entities::app_errors::CoreError;

    #[test]
    fn null_document_is_rejected() {
        let err = parse_label_document(&Value::Null).unwrap_err();
        assert_eq!(err, CoreError::MissingLabelDocument);
    }

    #[test]
    fn non_object_document_is_rejected() {
        let err = parse_label_document(&json!("mayonnaise")).unwrap_err();
        assert!(matches!(err, CoreError::Invalid(_)));
    }

    #[test]
    fn empty_object_degrades_to_defaults() {
        let record = parse_label_document(&json!({})).unwrap();

        assert_eq!(record.product_name, "");
        assert!(record.ingredients.list.is_empty());
        assert!(record.allergens.declared.is_empty());
        assert!(record.nutritional_info.effective().is_none());
        assert!(record.health_claims.is_empty());
    }

    #[test]
    fn detailed_document_parses_all_sections() {
        let record = parse_label_document(&json!({
            "productName": "Classic Mayonnaise",
            "ingredients": {
                "list": ["Rapeseed Oil (78%)", "Water", "Free-range Egg"],
                "preservatives": ["EDTA"],
                "additives": [],
                "antioxidants": [],
                "stabilizers": ["Xanthan Gum"]
            },
            "allergens": {
                "declared": ["Egg"],
                "mayContain": ["Mustard"]
            },
            "nutritionalInfo": {
                "perServing": {
                    "calories": 104,
                    "protein": 0.1,
                    "carbs": 0.2,
                    "fats": { "total": 11.3, "saturated": 0.9 },
                    "sugar": 0.2,
                    "salt": 0.2,
                    "omega3": 1.0
                },
                "per100g": {
                    "calories": 721,
                    "protein": 0.6,
                    "carbs": 1.4,
                    "fats": { "total": 78.6, "saturated": 6.0 },
                    "sugar": 1.3,
                    "salt": 1.5,
                    "omega3": 7.2
                }
            },
            "healthClaims": ["Rich in Omega-3"],
            "packaging": {
                "materials": ["Glass jar"],
                "recyclingInfo": "Widely recycled",
                "sustainabilityClaims": ["Made from 100% recycled material"],
                "certifications": ["Vegetarian Society"]
            }
        }))
        .unwrap();

        assert_eq!(record.product_name, "Classic Mayonnaise");
        assert_eq!(record.ingredients.list.len(), 3);
        assert_eq!(record.allergens.may_contain, vec!["Mustard"]);

        let per_serving = record.nutritional_info.per_serving.as_ref().unwrap();
        assert_eq!(per_serving.calories, 104.0);
        assert_eq!(per_serving.fats.saturated, 0.9);
        assert_eq!(record.packaging.certifications, vec!["Vegetarian Society"]);
    }

    #[test]
    fn flat_nutrition_normalizes_to_per_100g() {
        let record = parse_label_document(&json!({
            "nutritionalInfo": {
                "calories": 320,
                "protein": 12,
                "carbs": 40,
                "fats": 9.5,
                "sugar": 3
            }
        }))
        .unwrap();

        assert!(record.nutritional_info.per_serving.is_none());
        let per_100g = record.nutritional_info.per_100g.as_ref().unwrap();
        assert_eq!(per_100g.calories, 320.0);
        assert_eq!(per_100g.fats.total, 9.5);
        assert_eq!(per_100g.fats.saturated, 0.0);
        // effective() falls back to per-100g when no serving block exists
        assert_eq!(record.nutritional_info.effective().unwrap().sugar, 3.0);
    }

    #[test]
    fn malformed_values_degrade_instead_of_failing() {
        let record = parse_label_document(&json!({
            "productName": 42,
            "ingredients": { "list": ["Water", 7, null] },
            "nutritionalInfo": {
                "perServing": {
                    "calories": -50,
                    "protein": "lots",
                    "sugar": null
                }
            }
        }))
        .unwrap();

        assert_eq!(record.product_name, "");
        assert_eq!(record.ingredients.list, vec!["Water"]);

        let per_serving = record.nutritional_info.per_serving.as_ref().unwrap();
        assert_eq!(per_serving.calories, 0.0);
        assert_eq!(per_serving.protein, 0.0);
        assert_eq!(per_serving.sugar, 0.0);
    }
}
