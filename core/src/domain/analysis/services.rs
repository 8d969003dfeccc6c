use uuid::Uuid;

use crate::domain::{
    analysis::{
        entities::AnalysisRecord,
        ports::{AnalysisHistoryRepository, AnalysisService},
        value_objects::{AnalyzeLabelInput, GetAnalysisHistoryInput},
    },
    common::{entities::app_errors::CoreError, services::Service},
    label::schema::parse_label_document,
    preferences::ports::{PreferenceRepository, PreferenceService},
    scoring::engine::ScoringEngine,
};

impl<P, H> AnalysisService for Service<P, H>
where
    P: PreferenceRepository,
    H: AnalysisHistoryRepository,
{
    async fn analyze_label(
        &self,
        user_id: Uuid,
        input: AnalyzeLabelInput,
    ) -> Result<AnalysisRecord, CoreError> {
        // 1. Normalize the untrusted extraction document at the boundary
        let label = parse_label_document(&input.document)?;

        // 2. Personalize against stored preferences, defaults when unset
        let preferences = self.get_preferences(user_id).await?;

        // 3. Score. The engine is pure; everything around it owns the I/O
        let engine = ScoringEngine::new(self.scoring_config.clone());
        let score = engine.evaluate(&label, Some(&preferences));

        tracing::debug!(
            product_name = %label.product_name,
            health_score = score.health_score,
            "scored label"
        );

        // 4. Persist and hand the record back to the caller
        let record = AnalysisRecord::new(user_id, input.image_ref, label, score);

        self.analysis_history_repository.create(record).await
    }

    async fn get_analysis_history(
        &self,
        user_id: Uuid,
        input: GetAnalysisHistoryInput,
    ) -> Result<Vec<AnalysisRecord>, CoreError> {
        self.analysis_history_repository
            .get_by_user(user_id, input.filter)
            .await
    }

    async fn get_analysis(
        &self,
        user_id: Uuid,
        analysis_id: Uuid,
    ) -> Result<AnalysisRecord, CoreError> {
        self.analysis_history_repository
            .get_by_id(analysis_id, user_id)
            .await?
            .ok_or(CoreError::NotFound)
    }
}
