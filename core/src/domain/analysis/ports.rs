use std::future::Future;
use uuid::Uuid;

use crate::domain::{
    analysis::{
        entities::AnalysisRecord,
        value_objects::{AnalyzeLabelInput, GetAnalysisHistoryFilter, GetAnalysisHistoryInput},
    },
    common::entities::app_errors::CoreError,
};

/// Repository trait for the analysis history store
#[cfg_attr(test, mockall::automock)]
pub trait AnalysisHistoryRepository: Send + Sync {
    fn create(
        &self,
        record: AnalysisRecord,
    ) -> impl Future<Output = Result<AnalysisRecord, CoreError>> + Send;

    fn get_by_id(
        &self,
        analysis_id: Uuid,
        user_id: Uuid,
    ) -> impl Future<Output = Result<Option<AnalysisRecord>, CoreError>> + Send;

    /// Records for one user, newest first, restricted by the filter's time
    /// range and pagination.
    fn get_by_user(
        &self,
        user_id: Uuid,
        filter: GetAnalysisHistoryFilter,
    ) -> impl Future<Output = Result<Vec<AnalysisRecord>, CoreError>> + Send;
}

/// Service trait for label analysis business logic
#[cfg_attr(test, mockall::automock)]
pub trait AnalysisService: Send + Sync {
    fn analyze_label(
        &self,
        user_id: Uuid,
        input: AnalyzeLabelInput,
    ) -> impl Future<Output = Result<AnalysisRecord, CoreError>> + Send;

    fn get_analysis_history(
        &self,
        user_id: Uuid,
        input: GetAnalysisHistoryInput,
    ) -> impl Future<Output = Result<Vec<AnalysisRecord>, CoreError>> + Send;

    fn get_analysis(
        &self,
        user_id: Uuid,
        analysis_id: Uuid,
    ) -> impl Future<Output = Result<AnalysisRecord, CoreError>> + Send;
}
