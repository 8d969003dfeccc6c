use chrono::{DateTime, Utc};
use uuid::{NoContext, Timestamp, Uuid};

pub mod entities;
pub mod services;

use crate::domain::scoring::restrictions::RestrictionCatalog;

/// Injected configuration for the core. Never held as process-wide mutable
/// state; the api binary builds one from its arguments and hands it to
/// [`crate::application::create_service`].
#[derive(Clone, Debug, Default)]
pub struct NutriDecodeConfig {
    pub scoring: ScoringConfig,
}

#[derive(Clone, Debug)]
pub struct ScoringConfig {
    /// Allowed deviation, in percentage points, between a label's macro
    /// split and the user's macro targets before a warning is emitted.
    pub macro_tolerance_pct: f64,
    pub restrictions: RestrictionCatalog,
}

impl Default for ScoringConfig {
    fn default() -> Self {
        Self {
            macro_tolerance_pct: 15.0,
            restrictions: RestrictionCatalog::default(),
        }
    }
}

pub fn generate_timestamp() -> (DateTime<Utc>, Timestamp) {
    let now = Utc::now();
    let seconds = now.timestamp().try_into().unwrap_or(0);
    let timestamp = Timestamp::from_unix(NoContext, seconds, 0);

    (now, timestamp)
}

pub fn generate_uuid_v7() -> Uuid {
    let (_, timestamp) = generate_timestamp();
    Uuid::new_v7(timestamp)
}
