//! Masking module.
//!
//! This module handles the masking side of the pipeline:
//! - `strategy`: registered masking strategies and configuration
//! - `engine`: the in-place masking pass over a loaded table
//! - `pipeline`: load → mask → write composition

pub mod engine;
pub mod pipeline;
pub mod strategy;

pub use engine::{
    is_numeric_value, mask, MaskEngine, MaskReport, BILLING_COLUMN, EMAIL_COLUMN, NAME_COLUMN,
};
pub use pipeline::{encode, encode_with_options, EncodeOptions, EncodeSummary};
pub use strategy::{
    available_modes, MaskConfig, MaskStrategy, MASKING_CHARACTER, STRUCTURAL_CHARACTERS,
};
