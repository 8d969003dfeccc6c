use std::{collections::HashMap, sync::Arc};

use tokio::sync::RwLock;
use uuid::Uuid;

use crate::domain::{
    analysis::{
        entities::AnalysisRecord, ports::AnalysisHistoryRepository,
        value_objects::GetAnalysisHistoryFilter,
    },
    common::entities::app_errors::CoreError,
};

/// In-memory history store with the retrieval semantics the API relies on:
/// per-user isolation, newest-first ordering, time-range filtering and
/// offset/limit pagination.
#[derive(Debug, Clone, Default)]
pub struct InMemoryAnalysisHistoryRepository {
    store: Arc<RwLock<HashMap<Uuid, Vec<AnalysisRecord>>>>,
}

impl InMemoryAnalysisHistoryRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

impl AnalysisHistoryRepository for InMemoryAnalysisHistoryRepository {
    async fn create(&self, record: AnalysisRecord) -> Result<AnalysisRecord, CoreError> {
        let mut store = self.store.write().await;
        store
            .entry(record.user_id)
            .or_default()
            .push(record.clone());

        Ok(record)
    }

    async fn get_by_id(
        &self,
        analysis_id: Uuid,
        user_id: Uuid,
    ) -> Result<Option<AnalysisRecord>, CoreError> {
        let store = self.store.read().await;

        let record = store
            .get(&user_id)
            .and_then(|records| records.iter().find(|r| r.id == analysis_id))
            .cloned();

        Ok(record)
    }

    async fn get_by_user(
        &self,
        user_id: Uuid,
        filter: GetAnalysisHistoryFilter,
    ) -> Result<Vec<AnalysisRecord>, CoreError> {
        let store = self.store.read().await;

        let mut records: Vec<AnalysisRecord> = store
            .get(&user_id)
            .map(|records| {
                records
                    .iter()
                    .filter(|r| filter.from.is_none_or(|from| r.created_at >= from))
                    .filter(|r| filter.to.is_none_or(|to| r.created_at <= to))
                    .cloned()
                    .collect()
            })
            .unwrap_or_default();

        records.sort_by(|a, b| b.created_at.cmp(&a.created_at));

        let offset = filter.offset.unwrap_or(0) as usize;
        let limit = filter.limit.map(|l| l as usize).unwrap_or(usize::MAX);

        Ok(records.into_iter().skip(offset).take(limit).collect())
    }
}

#[cfg(test)]
mod tests {
    use chrono::{Duration, Utc};

    use super::*;
    use crate::domain::{label::entities::FoodLabelRecord, scoring::engine::ScoringEngine};

    fn record_for(user_id: Uuid) -> AnalysisRecord {
        let label = FoodLabelRecord::default();
        let score = ScoringEngine::default().evaluate(&label, None);

        AnalysisRecord::new(user_id, None, label, score)
    }

    #[tokio::test]
    async fn history_is_isolated_per_user() {
        let repository = InMemoryAnalysisHistoryRepository::new();
        let alice = Uuid::new_v4();
        let bob = Uuid::new_v4();

        let record = repository.create(record_for(alice)).await.unwrap();

        assert!(
            repository
                .get_by_id(record.id, bob)
                .await
                .unwrap()
                .is_none()
        );
        assert_eq!(
            repository
                .get_by_user(alice, Default::default())
                .await
                .unwrap()
                .len(),
            1
        );
    }

    #[tokio::test]
    async fn time_range_filter_bounds_the_results() {
        let repository = InMemoryAnalysisHistoryRepository::new();
        let user_id = Uuid::new_v4();

        let mut old = record_for(user_id);
        old.created_at = Utc::now() - Duration::days(30);
        repository.create(old).await.unwrap();
        repository.create(record_for(user_id)).await.unwrap();

        let filter = GetAnalysisHistoryFilter {
            from: Some(Utc::now() - Duration::days(7)),
            ..Default::default()
        };

        let records = repository.get_by_user(user_id, filter).await.unwrap();
        assert_eq!(records.len(), 1);
    }

    #[tokio::test]
    async fn results_come_back_newest_first_with_pagination() {
        let repository = InMemoryAnalysisHistoryRepository::new();
        let user_id = Uuid::new_v4();

        let mut first = record_for(user_id);
        first.created_at = Utc::now() - Duration::hours(2);
        let mut second = record_for(user_id);
        second.created_at = Utc::now() - Duration::hours(1);
        let third = record_for(user_id);

        let third_id = third.id;
        let second_id = second.id;

        repository.create(first).await.unwrap();
        repository.create(second).await.unwrap();
        repository.create(third).await.unwrap();

        let filter = GetAnalysisHistoryFilter {
            limit: Some(2),
            ..Default::default()
        };
        let records = repository.get_by_user(user_id, filter).await.unwrap();

        assert_eq!(records.len(), 2);
        assert_eq!(records[0].id, third_id);
        assert_eq!(records[1].id, second_id);
    }
}
