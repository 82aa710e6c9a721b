//! Error types for the csvmask pipeline.
//!
//! This module defines a hierarchy of error types:
//!
//! - [`CsvError`] - loading and serialization errors
//! - [`MaskError`] - masking pass errors
//! - [`PipelineError`] - top-level orchestration errors
//!
//! Error conversion is automatic via `From` implementations,
//! allowing `?` to work across error boundaries.

use thiserror::Error;

// =============================================================================
// CSV Errors
// =============================================================================

/// Errors while loading or writing a delimited file.
#[derive(Debug, Error)]
pub enum CsvError {
    /// File could not be read or written.
    #[error("File error: {0}")]
    Io(#[from] std::io::Error),

    /// Input file contains no header line.
    #[error("CSV file is empty")]
    EmptyFile,

    /// The same column name appears twice in the header.
    #[error("Duplicate column '{0}' in header")]
    DuplicateHeader(String),

    /// A data line carries fewer fields than the header declares.
    #[error("Line {line}: expected {expected} fields, found {found}")]
    MalformedRow {
        line: usize,
        expected: usize,
        found: usize,
    },
}

// =============================================================================
// Masking Errors
// =============================================================================

/// Errors during the masking pass.
#[derive(Debug, Error)]
pub enum MaskError {
    /// Requested mode has no registered strategy.
    #[error("Unknown masking mode: {0}")]
    UnknownMode(String),

    /// A record lacks a column the pass requires.
    #[error("Record {row} is missing required column '{column}'")]
    MissingColumn { row: usize, column: String },
}

// =============================================================================
// Pipeline Errors (top-level)
// =============================================================================

/// Top-level pipeline errors.
///
/// This is the main error type returned by [`crate::mask::pipeline::encode`].
#[derive(Debug, Error)]
pub enum PipelineError {
    /// CSV loading or serialization error.
    #[error("CSV error: {0}")]
    Csv(#[from] CsvError),

    /// Masking error.
    #[error("Masking error: {0}")]
    Mask(#[from] MaskError),
}

// =============================================================================
// Result Type Aliases
// =============================================================================

/// Result type for CSV operations.
pub type CsvResult<T> = Result<T, CsvError>;

/// Result type for masking operations.
pub type MaskResult<T> = Result<T, MaskError>;

/// Result type for pipeline operations.
pub type PipelineResult<T> = Result<T, PipelineError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_conversion_chain() {
        // CsvError -> PipelineError
        let csv_err = CsvError::EmptyFile;
        let pipeline_err: PipelineError = csv_err.into();
        assert!(pipeline_err.to_string().contains("empty"));

        // MaskError -> PipelineError
        let mask_err = MaskError::UnknownMode("rot13".into());
        let pipeline_err: PipelineError = mask_err.into();
        assert!(pipeline_err.to_string().contains("rot13"));
    }

    #[test]
    fn test_malformed_row_format() {
        let err = CsvError::MalformedRow {
            line: 4,
            expected: 3,
            found: 2,
        };
        let msg = err.to_string();
        assert!(msg.contains("Line 4"));
        assert!(msg.contains("expected 3"));
        assert!(msg.contains("found 2"));
    }

    #[test]
    fn test_missing_column_format() {
        let err = MaskError::MissingColumn {
            row: 1,
            column: "Name".into(),
        };
        let msg = err.to_string();
        assert!(msg.contains("Record 1"));
        assert!(msg.contains("'Name'"));
    }
}
