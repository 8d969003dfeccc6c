use crate::{
    domain::common::{NutriDecodeConfig, services::Service},
    infrastructure::memory::{InMemoryAnalysisHistoryRepository, InMemoryPreferenceRepository},
};

/// Concrete service the api binary runs: the shared [`Service`] wired with
/// the in-memory adapters. The hosted persistence backends are opaque
/// collaborators, so nothing heavier lives in-tree.
pub type NutriDecodeService = Service<InMemoryPreferenceRepository, InMemoryAnalysisHistoryRepository>;

pub async fn create_service(config: NutriDecodeConfig) -> Result<NutriDecodeService, anyhow::Error> {
    let preference_repository = InMemoryPreferenceRepository::new();
    let analysis_history_repository = InMemoryAnalysisHistoryRepository::new();

    Ok(Service::new(
        preference_repository,
        analysis_history_repository,
        config.scoring,
    ))
}
