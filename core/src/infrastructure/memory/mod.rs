pub mod analysis;
pub mod preferences;

pub use analysis::InMemoryAnalysisHistoryRepository;
pub use preferences::InMemoryPreferenceRepository;
