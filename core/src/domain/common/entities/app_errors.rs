use thiserror::Error;

/// Error taxonomy of the core. Soft data problems (missing sub-fields,
/// empty collections, out-of-range numbers) are normalized at the parse
/// boundary and never surface as errors.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum CoreError {
    #[error("Label document is missing")]
    MissingLabelDocument,

    #[error("Invalid input: {0}")]
    Invalid(String),

    #[error("Resource not found")]
    NotFound,

    #[error("Internal server error")]
    InternalServerError,
}
