//! Palette and Layer Constants
//!
//! Colors, weight classes and static styles shared by every map layer.
//! Values match the ones the map application threads into its layers.

use crate::style::StyleDescriptor;

// ============================================================================
// Colors
// ============================================================================

/// Background cycling node network.
pub const COLOR_NETWORK: &str = "#7f8c8d";

/// Track color on the "Carto Light" base layer.
pub const COLOR_TRACK_CARTO_LIGHT: &str = "#FC4C02";

/// Track color on every other base layer (Carto Voyager).
pub const COLOR_TRACK_CARTO_VOYAGER: &str = "#D62728";

/// Selected track color. Carried in the hideout but not applied to tracks.
pub const COLOR_TRACK_SELECTED: &str = "#A3FF12";

/// Matched segments (fixed, not metric-dependent).
pub const COLOR_SEGMENT: &str = "#33A7AA";

pub const COLOR_HIGHLIGHT_SEGMENT: &str = "red";
pub const COLOR_HIGHLIGHT_NODE: &str = "purple";

/// Base layer name that switches tracks to the light-map color.
pub const BASE_LAYER_CARTO_LIGHT: &str = "Carto Light";

// ============================================================================
// Segment weight classes
// ============================================================================

/// Visit-count thresholds for segment line weights.
pub const WEIGHT_CLASSES_SEGMENT: [f64; 4] = [1.0, 5.0, 10.0, 20.0];

/// Line weights paired with `WEIGHT_CLASSES_SEGMENT` (one more than the thresholds).
pub const WEIGHTS_SEGMENT: [f64; 5] = [2.0, 4.0, 6.0, 8.0, 10.0];

/// Line weight used for highlighted segments/nodes.
pub const HIGHLIGHT_WEIGHT: f64 = 8.0;

// ============================================================================
// Selection / tooltips
// ============================================================================

/// Feature property used to identify the selected track.
pub const SELECTED_KEY: &str = "track_uid";

/// Tooltip opacity while track focus is enabled.
pub const TOOLTIP_OPACITY_FOCUSED: f64 = 0.9;

/// Tooltips are hidden (but still bound) while track focus is disabled.
pub const TOOLTIP_OPACITY_UNFOCUSED: f64 = 0.0;

/// Pick the track color for the active base layer.
pub fn track_color_for_base_layer(base_layer: &str) -> &'static str {
    if base_layer == BASE_LAYER_CARTO_LIGHT {
        COLOR_TRACK_CARTO_LIGHT
    } else {
        COLOR_TRACK_CARTO_VOYAGER
    }
}

/// Static style of the background node network layer.
pub fn network_style() -> StyleDescriptor {
    StyleDescriptor::with_opacity(COLOR_NETWORK, 1.0, 0.6)
}

/// Style of segments picked from the segment table.
pub fn highlight_segment_style() -> StyleDescriptor {
    StyleDescriptor::new(COLOR_HIGHLIGHT_SEGMENT, HIGHLIGHT_WEIGHT)
}

/// Style of segments connected to nodes picked from the node table.
pub fn highlight_node_style() -> StyleDescriptor {
    StyleDescriptor::new(COLOR_HIGHLIGHT_NODE, HIGHLIGHT_WEIGHT)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_track_color_for_base_layer() {
        assert_eq!(track_color_for_base_layer("Carto Light"), COLOR_TRACK_CARTO_LIGHT);
        assert_eq!(track_color_for_base_layer("Carto Voyager Lite"), COLOR_TRACK_CARTO_VOYAGER);
        assert_eq!(track_color_for_base_layer(""), COLOR_TRACK_CARTO_VOYAGER);
    }

    #[test]
    fn test_segment_tables_are_paired() {
        assert_eq!(WEIGHTS_SEGMENT.len(), WEIGHT_CLASSES_SEGMENT.len() + 1);
    }

    #[test]
    fn test_static_styles() {
        let network = network_style();
        assert_eq!(network.color, COLOR_NETWORK);
        assert_eq!(network.opacity, Some(0.6));

        let highlight = highlight_segment_style();
        assert_eq!(highlight.color, "red");
        assert_eq!(highlight.weight, 8.0);
        assert_eq!(highlight.opacity, None);

        assert_eq!(highlight_node_style().color, "purple");
    }
}
