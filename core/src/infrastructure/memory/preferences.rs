use std::{collections::HashMap, sync::Arc};

use tokio::sync::RwLock;
use uuid::Uuid;

use crate::domain::{
    common::entities::app_errors::CoreError,
    preferences::{entities::UserPreferences, ports::PreferenceRepository},
};

/// In-memory preference store. The hosted preference backend is an opaque
/// collaborator, so the in-tree adapter keeps everything in a map keyed by
/// user id.
#[derive(Debug, Clone, Default)]
pub struct InMemoryPreferenceRepository {
    store: Arc<RwLock<HashMap<Uuid, UserPreferences>>>,
}

impl InMemoryPreferenceRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

impl PreferenceRepository for InMemoryPreferenceRepository {
    async fn get_by_user(&self, user_id: Uuid) -> Result<Option<UserPreferences>, CoreError> {
        let store = self.store.read().await;

        Ok(store.get(&user_id).cloned())
    }

    async fn upsert(&self, preferences: UserPreferences) -> Result<UserPreferences, CoreError> {
        let mut store = self.store.write().await;
        store.insert(preferences.user_id, preferences.clone());

        Ok(preferences)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn upsert_then_get_round_trips() {
        let repository = InMemoryPreferenceRepository::new();
        let user_id = Uuid::new_v4();

        assert!(repository.get_by_user(user_id).await.unwrap().is_none());

        let mut preferences = UserPreferences::default_for(user_id);
        preferences.eco_conscious = true;
        repository.upsert(preferences).await.unwrap();

        let stored = repository.get_by_user(user_id).await.unwrap().unwrap();
        assert!(stored.eco_conscious);
    }

    #[tokio::test]
    async fn upsert_replaces_the_existing_profile() {
        let repository = InMemoryPreferenceRepository::new();
        let user_id = Uuid::new_v4();

        let mut preferences = UserPreferences::default_for(user_id);
        preferences.allergen_alerts = vec!["Egg".to_string()];
        repository.upsert(preferences.clone()).await.unwrap();

        preferences.allergen_alerts = vec!["Mustard".to_string()];
        repository.upsert(preferences).await.unwrap();

        let stored = repository.get_by_user(user_id).await.unwrap().unwrap();
        assert_eq!(stored.allergen_alerts, vec!["Mustard"]);
    }
}
