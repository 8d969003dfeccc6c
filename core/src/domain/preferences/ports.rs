use std::future::Future;
use uuid::Uuid;

use crate::domain::{
    common::entities::app_errors::CoreError,
    preferences::{entities::UserPreferences, value_objects::UpdatePreferencesInput},
};

/// Repository trait for the preference store
#[cfg_attr(test, mockall::automock)]
pub trait PreferenceRepository: Send + Sync {
    fn get_by_user(
        &self,
        user_id: Uuid,
    ) -> impl Future<Output = Result<Option<UserPreferences>, CoreError>> + Send;

    fn upsert(
        &self,
        preferences: UserPreferences,
    ) -> impl Future<Output = Result<UserPreferences, CoreError>> + Send;
}

/// Service trait for preference business logic
#[cfg_attr(test, mockall::automock)]
pub trait PreferenceService: Send + Sync {
    /// Returns the user's stored preferences, or the default profile when
    /// none exist. Never fails for a missing row.
    fn get_preferences(
        &self,
        user_id: Uuid,
    ) -> impl Future<Output = Result<UserPreferences, CoreError>> + Send;

    fn update_preferences(
        &self,
        user_id: Uuid,
        input: UpdatePreferencesInput,
    ) -> impl Future<Output = Result<UserPreferences, CoreError>> + Send;
}
