//! Error types for hideout validation and CLI parsing.
//!
//! Styling and tooltip binding never fail; errors only surface where a
//! hideout enters the crate from outside.

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum HideoutError {
    #[error("weight table mismatch: {thresholds} thresholds need {} weights, got {weights}", .thresholds + 1)]
    WeightTableMismatch { thresholds: usize, weights: usize },

    #[error("weight classes must be ascending (class {index} is below class {})", .index.saturating_sub(1))]
    UnsortedThresholds { index: usize },

    #[error("weight class {index} is not a finite number")]
    NonFiniteThreshold { index: usize },

    #[error("{field} must be within 0.0..=1.0, got {value}")]
    OpacityOutOfRange { field: &'static str, value: f64 },
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown layer kind '{0}' (expected segments, tracks, nodes or network)")]
pub struct UnknownLayerKind(pub String);
