//! # csvmask - sensitive-column masking for delimited files
//!
//! csvmask parses a delimited file, obfuscates the personally identifiable
//! columns (`Name`, `Email`), replaces the numeric `Billing` values with
//! the column average, and writes the result to a new file.
//!
//! ## Architecture
//!
//! ```text
//! ┌──────────┐     ┌──────────┐     ┌──────────────┐     ┌────────────┐
//! │ CSV File │────▶│  Parser  │────▶│ Mask Engine  │────▶│ Masked CSV │
//! │          │     │ (auto-   │     │ (stats pass  │     │            │
//! │          │     │  enc)    │     │  + strategy) │     │            │
//! └──────────┘     └──────────┘     └──────────────┘     └────────────┘
//! ```
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use csvmask::encode;
//! use std::path::Path;
//!
//! encode(
//!     Path::new("customers.csv"),
//!     Path::new("masked_customers.csv"),
//!     "character_matching",
//! )?;
//! ```
//!
//! ## Modules
//!
//! - [`error`] - Hierarchical error types
//! - [`models`] - Domain models (Table, Record)
//! - [`parser`] - Table loading with auto-detection
//! - [`stats`] - Column statistics
//! - [`mask`] - Strategies, masking pass, and pipeline
//! - [`writer`] - Serialization back to the delimited format
//! - [`logs`] - Console progress output

// Core modules
pub mod error;
pub mod models;

// Parsing
pub mod parser;

// Statistics
pub mod stats;

// Masking
pub mod mask;

// Serialization
pub mod writer;

// Console output
pub mod logs;

// =============================================================================
// Re-exports - Error types
// =============================================================================

pub use error::{CsvError, CsvResult, MaskError, MaskResult, PipelineError, PipelineResult};

// =============================================================================
// Re-exports - Models
// =============================================================================

pub use models::{Record, Table};

// =============================================================================
// Re-exports - Parsing
// =============================================================================

pub use parser::{
    decode_content, detect_delimiter, detect_encoding, load_csv, load_csv_auto, parse_table,
    LoadResult,
};

// =============================================================================
// Re-exports - Statistics
// =============================================================================

pub use stats::{compute_stats, ColumnStats};

// =============================================================================
// Re-exports - Masking
// =============================================================================

pub use mask::{
    available_modes, encode, encode_with_options, is_numeric_value, mask, EncodeOptions,
    EncodeSummary, MaskConfig, MaskEngine, MaskReport, MaskStrategy, BILLING_COLUMN, EMAIL_COLUMN,
    MASKING_CHARACTER, NAME_COLUMN, STRUCTURAL_CHARACTERS,
};

// =============================================================================
// Re-exports - Serialization
// =============================================================================

pub use writer::{to_csv_string, write_csv};
