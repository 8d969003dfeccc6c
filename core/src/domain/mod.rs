pub mod analysis;
pub mod common;
pub mod label;
pub mod preferences;
pub mod scoring;
