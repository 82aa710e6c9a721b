//! High-level pipeline: load, mask, serialize.
//!
//! This is the composition a caller usually wants: parse the input file,
//! run one masking pass, write the masked table back out.
//!
//! # Example
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

use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::error::PipelineResult;
use crate::logs::{log_info, log_success, log_warning};
use crate::parser::load_csv;
use crate::stats::ColumnStats;
use crate::writer::write_csv;

use super::engine::MaskEngine;
use super::strategy::MaskConfig;

/// Options for the encode pipeline.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EncodeOptions {
    /// Field delimiter for both input and output.
    #[serde(default = "default_delimiter")]
    pub delimiter: char,

    /// Masking mode to apply.
    #[serde(default = "default_mode")]
    pub mode: String,

    /// Masking configuration.
    #[serde(default)]
    pub mask: MaskConfig,
}

fn default_delimiter() -> char {
    ','
}

fn default_mode() -> String {
    "character_matching".to_string()
}

impl Default for EncodeOptions {
    fn default() -> Self {
        Self {
            delimiter: default_delimiter(),
            mode: default_mode(),
            mask: MaskConfig::default(),
        }
    }
}

/// Result of a completed encode run.
#[derive(Debug, Clone)]
pub struct EncodeSummary {
    /// Column names of the processed table.
    pub headers: Vec<String>,
    /// Number of data rows written.
    pub row_count: usize,
    /// Name-length statistics.
    pub name_stats: ColumnStats,
    /// Billing statistics; the average was substituted into the output.
    pub billing_stats: ColumnStats,
}

/// Load `input`, mask it, and write the result to `output`.
pub fn encode_with_options(
    input: &Path,
    output: &Path,
    options: &EncodeOptions,
) -> PipelineResult<EncodeSummary> {
    log_info(format!("Reading {}", input.display()));
    let mut table = load_csv(input, options.delimiter)?;
    log_success(format!(
        "Loaded {} rows, {} columns",
        table.row_count(),
        table.headers().len()
    ));
    if table.is_empty() {
        log_warning("No data rows found");
    }

    let engine = MaskEngine::new(options.mask.clone());
    let report = engine.mask(&mut table, &options.mode)?;

    write_csv(&table, output, options.delimiter)?;
    log_success(format!("Masked output written to {}", output.display()));

    Ok(EncodeSummary {
        headers: table.headers().to_vec(),
        row_count: table.row_count(),
        name_stats: report.name,
        billing_stats: report.billing,
    })
}

/// Convenience composition with the default delimiter and configuration.
pub fn encode(input: &Path, output: &Path, mode: &str) -> PipelineResult<()> {
    let options = EncodeOptions {
        mode: mode.to_string(),
        ..EncodeOptions::default()
    };
    encode_with_options(input, output, &options).map(|_| ())
}
