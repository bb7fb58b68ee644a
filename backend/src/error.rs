//! Error types for the census accessor layer.
//!
//! This module defines one error enum per concern:
//!
//! - [`RecordError`] - row-cardinality failures at accessor construction
//! - [`AccessError`] - field lookups and parameter validation
//! - [`LoaderError`] - reading the census CSV tables from disk
//! - [`ProfileError`] - view-model assembly (record or access failures)
//!
//! Error conversion is automatic via `From` implementations,
//! allowing `?` to work across error boundaries. Validation errors are
//! raised at accessor construction and surface directly to the caller;
//! nothing below the API layer catches them.

use thiserror::Error;

// =============================================================================
// Record Cardinality Errors
// =============================================================================

/// A dataset handed to an accessor did not resolve to exactly one row.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RecordError {
    /// No rows matched the requested area.
    #[error("record is empty: no rows in dataset")]
    Empty,

    /// More than one row matched; the area lookup is ambiguous.
    #[error("record is ambiguous: {0} rows in dataset")]
    Ambiguous(usize),
}

// =============================================================================
// Field Access Errors
// =============================================================================

/// Errors from field lookups and accessor parameters.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum AccessError {
    /// The requested column does not exist in this dataset variant.
    #[error("missing field: {0}")]
    MissingField(String),

    /// The column exists but its value is not numeric.
    #[error("field '{field}' is not numeric: '{value}'")]
    NonNumeric { field: String, value: String },

    /// An age band outside the fixed vocabulary.
    #[error("invalid age band '{0}'")]
    InvalidAgeBand(String),

    /// An ancestry name outside the fixed vocabulary.
    #[error("unknown ancestry '{0}'")]
    UnknownAncestry(String),
}

// =============================================================================
// Loader Errors
// =============================================================================

/// Errors while loading the per-domain census tables.
#[derive(Debug, Error)]
pub enum LoaderError {
    /// Failed to read a file.
    #[error("failed to read table: {0}")]
    Io(#[from] std::io::Error),

    /// CSV parsing failed.
    #[error("invalid CSV: {0}")]
    Csv(#[from] csv::Error),

    /// The table has no header row or is missing the area-code column.
    #[error("table '{table}' is missing column '{column}'")]
    MissingKeyColumn { table: String, column: String },
}

// =============================================================================
// Profile Errors (view-model assembly)
// =============================================================================

/// Errors raised while computing an area view-model.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ProfileError {
    /// Record cardinality failure.
    #[error(transparent)]
    Record(#[from] RecordError),

    /// Field lookup or parameter failure.
    #[error(transparent)]
    Access(#[from] AccessError),
}

// =============================================================================
// Result Type Aliases
// =============================================================================

/// Result type for record construction.
pub type RecordResult<T> = Result<T, RecordError>;

/// Result type for field lookups and derivations.
pub type AccessResult<T> = Result<T, AccessError>;

/// Result type for table loading.
pub type LoaderResult<T> = Result<T, LoaderError>;

/// Result type for view-model assembly.
pub type ProfileResult<T> = Result<T, ProfileError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_record_error_messages() {
        assert!(RecordError::Empty.to_string().contains("empty"));
        assert!(RecordError::Ambiguous(3).to_string().contains("3 rows"));
    }

    #[test]
    fn test_access_error_conversion_chain() {
        let err = AccessError::MissingField("Tot_P_P".into());
        let profile_err: ProfileError = err.into();
        assert!(profile_err.to_string().contains("Tot_P_P"));

        let err: ProfileError = RecordError::Empty.into();
        assert!(matches!(err, ProfileError::Record(RecordError::Empty)));
    }

    #[test]
    fn test_non_numeric_format() {
        let err = AccessError::NonNumeric {
            field: "Tot_P_M".into(),
            value: "abc".into(),
        };
        let msg = err.to_string();
        assert!(msg.contains("Tot_P_M"));
        assert!(msg.contains("abc"));
    }
}
