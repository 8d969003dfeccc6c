pub mod analyze_label;
pub mod get_analysis;
pub mod get_analysis_history;
