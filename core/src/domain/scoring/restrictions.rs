/// Mapping from a named dietary restriction to the ingredient keywords it
/// excludes. The mapping is a configuration table rather than hard-coded
/// logic so deployments can extend it without touching the engine.
#[derive(Debug, Clone)]
pub struct RestrictionCatalog {
    entries: Vec<RestrictionEntry>,
}

#[derive(Debug, Clone)]
pub struct RestrictionEntry {
    pub restriction: String,
    pub excluded_keywords: Vec<String>,
}

impl RestrictionCatalog {
    pub fn new(entries: Vec<RestrictionEntry>) -> Self {
        Self { entries }
    }

    /// Excluded keywords for a restriction name, matched case-insensitively.
    pub fn excluded_keywords(&self, restriction: &str) -> &[String] {
        self.entries
            .iter()
            .find(|entry| entry.restriction.eq_ignore_ascii_case(restriction))
            .map(|entry| entry.excluded_keywords.as_slice())
            .unwrap_or(&[])
    }
}

impl Default for RestrictionCatalog {
    fn default() -> Self {
        let entry = |restriction: &str, keywords: &[&str]| RestrictionEntry {
            restriction: restriction.to_string(),
            excluded_keywords: keywords.iter().map(|k| k.to_string()).collect(),
        };

        Self::new(vec![
            entry(
                "Vegan",
                &[
                    "milk", "cream", "butter", "cheese", "whey", "yogurt", "egg", "honey", "meat",
                    "beef", "pork", "chicken", "fish", "gelatin",
                ],
            ),
            entry(
                "Vegetarian",
                &["meat", "beef", "pork", "chicken", "fish", "gelatin"],
            ),
            entry("Gluten-Free", &["wheat", "barley", "rye", "malt", "gluten"]),
            entry(
                "Dairy-Free",
                &["milk", "cream", "butter", "cheese", "whey", "yogurt", "lactose"],
            ),
            entry(
                "Nut-Free",
                &["peanut", "almond", "hazelnut", "cashew", "walnut", "pistachio", "pecan"],
            ),
        ])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lookup_is_case_insensitive() {
        let catalog = RestrictionCatalog::default();

        assert!(
            catalog
                .excluded_keywords("vegan")
                .contains(&"egg".to_string())
        );
        assert!(catalog.excluded_keywords("VEGAN").contains(&"milk".to_string()));
    }

    #[test]
    fn unknown_restriction_excludes_nothing() {
        let catalog = RestrictionCatalog::default();

        assert!(catalog.excluded_keywords("Intermittent Fasting").is_empty());
    }

    #[test]
    fn catalog_is_extensible() {
        let catalog = RestrictionCatalog::new(vec![RestrictionEntry {
            restriction: "Low-FODMAP".to_string(),
            excluded_keywords: vec!["onion".to_string(), "garlic".to_string()],
        }]);

        assert_eq!(catalog.excluded_keywords("Low-FODMAP").len(), 2);
        // replacing the catalog drops the built-in entries
        assert!(catalog.excluded_keywords("Vegan").is_empty());
    }
}
