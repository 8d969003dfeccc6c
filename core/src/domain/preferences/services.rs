use uuid::Uuid;

use crate::domain::{
    analysis::ports::AnalysisHistoryRepository,
    common::{entities::app_errors::CoreError, services::Service},
    preferences::{
        entities::UserPreferences,
        ports::{PreferenceRepository, PreferenceService},
        value_objects::UpdatePreferencesInput,
    },
};

impl<P, H> PreferenceService for Service<P, H>
where
    P: PreferenceRepository,
    H: AnalysisHistoryRepository,
{
    async fn get_preferences(&self, user_id: Uuid) -> Result<UserPreferences, CoreError> {
        let preferences = self.preference_repository.get_by_user(user_id).await?;

        Ok(preferences.unwrap_or_else(|| UserPreferences::default_for(user_id)))
    }

    async fn update_preferences(
        &self,
        user_id: Uuid,
        input: UpdatePreferencesInput,
    ) -> Result<UserPreferences, CoreError> {
        let mut preferences = self
            .preference_repository
            .get_by_user(user_id)
            .await?
            .unwrap_or_else(|| UserPreferences::default_for(user_id));

        preferences.apply(input);

        self.preference_repository.upsert(preferences).await
    }
}

#[cfg(test)]
mod tests {
    use uuid::Uuid;

    use crate::domain::{
        analysis::ports::MockAnalysisHistoryRepository,
        common::{ScoringConfig, services::Service},
        preferences::{
            entities::{AllergenSensitivity, UserPreferences},
            ports::{MockPreferenceRepository, PreferenceService},
            value_objects::UpdatePreferencesInput,
        },
    };

    fn service(
        preference_repository: MockPreferenceRepository,
    ) -> Service<MockPreferenceRepository, MockAnalysisHistoryRepository> {
        Service::new(
            preference_repository,
            MockAnalysisHistoryRepository::new(),
            ScoringConfig::default(),
        )
    }

    #[tokio::test]
    async fn missing_preferences_fall_back_to_defaults() {
        let user_id = Uuid::new_v4();
        let mut repository = MockPreferenceRepository::new();
        repository
            .expect_get_by_user()
            .returning(|_| Box::pin(async { Ok(None) }));

        let preferences = service(repository).get_preferences(user_id).await.unwrap();

        assert_eq!(preferences.user_id, user_id);
        assert_eq!(
            preferences.allergen_sensitivity,
            AllergenSensitivity::Medium
        );
        assert_eq!(preferences.macro_preferences.protein, 30.0);
        assert_eq!(preferences.macro_preferences.carbs, 40.0);
        assert!(preferences.allergen_alerts.is_empty());
    }

    #[tokio::test]
    async fn update_merges_partial_input_into_stored_profile() {
        let user_id = Uuid::new_v4();

        let mut stored = UserPreferences::default_for(user_id);
        stored.allergen_alerts = vec!["Egg".to_string()];

        let mut repository = MockPreferenceRepository::new();
        let snapshot = stored.clone();
        repository
            .expect_get_by_user()
            .returning(move |_| {
                let stored = snapshot.clone();
                Box::pin(async move { Ok(Some(stored)) })
            });
        repository
            .expect_upsert()
            .returning(|preferences| Box::pin(async move { Ok(preferences) }));

        let updated = service(repository)
            .update_preferences(
                user_id,
                UpdatePreferencesInput {
                    eco_conscious: Some(true),
                    ..Default::default()
                },
            )
            .await
            .unwrap();

        assert!(updated.eco_conscious);
        // untouched fields survive the partial update
        assert_eq!(updated.allergen_alerts, vec!["Egg"]);
    }
}
