use thiserror::Error;

/// Library-level error type.
///
/// Filtering and metrics never fail; these variants come from loading a
/// dataset or from checking a query against a listing's declared fields.
#[derive(Debug, Error)]
pub enum PortalError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Duplicate id '{id}' in {listing}")]
    DuplicateId { listing: &'static str, id: String },

    #[error("Unknown {kind} value: '{value}'")]
    UnknownVariant { kind: &'static str, value: String },

    #[error("Field '{field}' is not a filter of {listing}")]
    UndeclaredField { listing: &'static str, field: String },

    #[error("The {0} listing has no searchable fields")]
    NotSearchable(&'static str),
}
