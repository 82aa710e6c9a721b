//! Masking strategies and configuration.
//!
//! Strategies are registered in an explicit mode-name map and resolved at
//! call time; an unknown name is rejected before any record is touched.

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Character written in place of masked input characters.
pub const MASKING_CHARACTER: char = 'X';

/// Characters preserved unmasked to retain a value's visual shape.
pub const STRUCTURAL_CHARACTERS: [char; 7] = ['@', '.', ',', '-', '/', ' ', '_'];

/// Registered strategies, keyed by the mode name used at call time.
static STRATEGIES: Lazy<HashMap<&'static str, MaskStrategy>> = Lazy::new(|| {
    let mut modes = HashMap::new();
    modes.insert("character_matching", MaskStrategy::CharacterMatching);
    modes
});

/// List the registered mode names.
pub fn available_modes() -> Vec<&'static str> {
    let mut modes: Vec<&'static str> = STRATEGIES.keys().copied().collect();
    modes.sort_unstable();
    modes
}

// =============================================================================
// Configuration
// =============================================================================

/// Configuration for a masking pass.
///
/// Defaults reproduce the standard masking: `X` as the mask character and
/// the structural set `@ . , - / space _`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MaskConfig {
    /// Replacement for masked input characters.
    #[serde(default = "default_mask_char")]
    pub mask_char: char,

    /// Characters kept as-is to preserve the value's shape.
    #[serde(default = "default_structural_chars")]
    pub structural_chars: Vec<char>,
}

fn default_mask_char() -> char {
    MASKING_CHARACTER
}

fn default_structural_chars() -> Vec<char> {
    STRUCTURAL_CHARACTERS.to_vec()
}

impl Default for MaskConfig {
    fn default() -> Self {
        Self {
            mask_char: default_mask_char(),
            structural_chars: default_structural_chars(),
        }
    }
}

impl MaskConfig {
    /// Parse a configuration from a JSON string.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }
}

// =============================================================================
// Strategies
// =============================================================================

/// A masking strategy transforms one field value into its obfuscated form.
///
/// Strategies are pure and stateless: the same value and configuration
/// always produce the same output, and the empty string maps to itself.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MaskStrategy {
    /// Keep structural characters, replace everything else with the mask
    /// character. Preserves the shape of emails and names while
    /// obliterating the identifying characters.
    CharacterMatching,
}

impl MaskStrategy {
    /// Resolve a mode name to its registered strategy.
    pub fn from_mode(mode: &str) -> Option<Self> {
        STRATEGIES.get(mode).copied()
    }

    /// The mode name this strategy is registered under.
    pub fn mode(&self) -> &'static str {
        match self {
            Self::CharacterMatching => "character_matching",
        }
    }

    /// Apply the strategy to a single value.
    pub fn apply(&self, value: &str, config: &MaskConfig) -> String {
        match self {
            Self::CharacterMatching => value
                .chars()
                .map(|c| {
                    if config.structural_chars.contains(&c) {
                        c
                    } else {
                        config.mask_char
                    }
                })
                .collect(),
        }
    }
}
