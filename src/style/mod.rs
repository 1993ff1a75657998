//! Line Styling
//!
//! Computes the style descriptors handed to the map engine for line features.
//!
//! ## Components
//! - `classify`: visit-count thresholds → line weight
//! - `resolver`: base styles for matched segments and GPX tracks
//! - `overlay`: hover override layered on whatever style is active

pub mod classify;
pub mod overlay;
pub mod resolver;

pub use classify::{classify, validate_weight_table};
pub use overlay::{apply_hover_override, hover_controls, HoverControls, HOVER_WEIGHT};
pub use resolver::{is_selected, resolve_segment_style, resolve_track_style};

use serde::{Deserialize, Serialize};

/// Style of one line feature, as consumed by the renderer's draw call.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StyleDescriptor {
    pub color: String,
    pub weight: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub opacity: Option<f64>,
}

impl StyleDescriptor {
    pub fn new(color: impl Into<String>, weight: f64) -> Self {
        Self {
            color: color.into(),
            weight,
            opacity: None,
        }
    }

    pub fn with_opacity(color: impl Into<String>, weight: f64, opacity: f64) -> Self {
        Self {
            color: color.into(),
            weight,
            opacity: Some(opacity),
        }
    }
}
