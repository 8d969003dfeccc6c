use crate::domain::{
    analysis::ports::AnalysisHistoryRepository, common::ScoringConfig,
    preferences::ports::PreferenceRepository,
};

/// Shared service carrying every port the application services need.
/// The domain service traits are implemented on this struct, one module at
/// a time, so a single instance serves the whole API.
#[derive(Debug, Clone)]
pub struct Service<P, H>
where
    P: PreferenceRepository,
    H: AnalysisHistoryRepository,
{
    pub(crate) preference_repository: P,
    pub(crate) analysis_history_repository: H,
    pub(crate) scoring_config: ScoringConfig,
}

impl<P, H> Service<P, H>
where
    P: PreferenceRepository,
    H: AnalysisHistoryRepository,
{
    pub fn new(
        preference_repository: P,
        analysis_history_repository: H,
        scoring_config: ScoringConfig,
    ) -> Self {
        Self {
            preference_repository,
            analysis_history_repository,
            scoring_config,
        }
    }
}
