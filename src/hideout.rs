//! Hideout: the style context threaded into every styling and tooltip call.
//!
//! Deserialized from the JSON bundle the map layers carry. Every key is
//! optional; missing keys fall back to the application palette.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;
use std::fs;
use std::path::Path;

use crate::error::HideoutError;
use crate::palette::{
    COLOR_SEGMENT, COLOR_TRACK_CARTO_VOYAGER, COLOR_TRACK_SELECTED, SELECTED_KEY,
    TOOLTIP_OPACITY_UNFOCUSED, WEIGHTS_SEGMENT, WEIGHT_CLASSES_SEGMENT,
};
use crate::style::classify::validate_weight_table;
use crate::tooltip::TooltipTable;

/// Most layers use four or five weight classes.
pub type WeightTable = SmallVec<[f64; 8]>;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Hideout {
    /// Ascending visit-count thresholds.
    pub weight_classes: WeightTable,
    /// Line weights, one more than `weight_classes`.
    pub weights: WeightTable,
    /// Segment color.
    pub color: String,
    /// Track color for the active base layer.
    pub base_color: String,
    pub selected_color: String,
    /// Whether a selected track is emphasised.
    pub track_focus: bool,
    pub selected_id: Option<String>,
    /// Name of the feature property compared against `selected_id`.
    pub selected_key: Option<String>,
    pub tooltips: TooltipTable,
    pub tooltip_opacity: f64,
}

impl Default for Hideout {
    fn default() -> Self {
        Self {
            weight_classes: SmallVec::from_slice(&WEIGHT_CLASSES_SEGMENT),
            weights: SmallVec::from_slice(&WEIGHTS_SEGMENT),
            color: COLOR_SEGMENT.to_string(),
            base_color: COLOR_TRACK_CARTO_VOYAGER.to_string(),
            selected_color: COLOR_TRACK_SELECTED.to_string(),
            track_focus: false,
            selected_id: None,
            selected_key: Some(SELECTED_KEY.to_string()),
            tooltips: TooltipTable::default(),
            tooltip_opacity: TOOLTIP_OPACITY_UNFOCUSED,
        }
    }
}

impl Hideout {
    /// Parse and validate a hideout from JSON text.
    pub fn from_json_str(json: &str) -> Result<Self> {
        let hideout: Hideout =
            serde_json::from_str(json).with_context(|| "Failed to parse hideout JSON")?;

        if let Err(e) = hideout.validate() {
            tracing::warn!("Rejected hideout: {}", e);
            return Err(anyhow::Error::new(e).context("Invalid hideout"));
        }

        tracing::debug!(
            "Parsed hideout ({} weight classes, {} tooltips, focus={})",
            hideout.weight_classes.len(),
            hideout.tooltips.len(),
            hideout.track_focus
        );

        Ok(hideout)
    }

    /// Load a hideout from a JSON file.
    pub fn load(path: &Path) -> Result<Self> {
        let contents = fs::read_to_string(path)
            .with_context(|| format!("Failed to read hideout file: {:?}", path))?;

        let hideout = Self::from_json_str(&contents)
            .with_context(|| format!("Failed to load hideout from {:?}", path))?;

        tracing::info!("Loaded hideout from {:?}", path);
        Ok(hideout)
    }

    /// Check the invariants styling relies on.
    pub fn validate(&self) -> Result<(), HideoutError> {
        validate_weight_table(&self.weight_classes, &self.weights)?;

        if !(0.0..=1.0).contains(&self.tooltip_opacity) {
            return Err(HideoutError::OpacityOutOfRange {
                field: "tooltip_opacity",
                value: self.tooltip_opacity,
            });
        }

        Ok(())
    }

    /// `(selected_key, selected_id)` when a track selection should be drawn.
    ///
    /// Requires track focus and a non-empty key and id.
    pub fn selection_target(&self) -> Option<(&str, &str)> {
        if !self.track_focus {
            return None;
        }

        let key = self.selected_key.as_deref().filter(|k| !k.is_empty())?;
        let id = self.selected_id.as_deref().filter(|id| !id.is_empty())?;
        Some((key, id))
    }
}
