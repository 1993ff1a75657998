//! Hover overlay for the track layer.
//!
//! The overlay never recomputes from feature attributes: it widens whatever
//! style is currently drawn. The map engine keeps the pre-hover descriptor
//! and restores it when the pointer leaves.

use crate::style::StyleDescriptor;

pub const HOVER_WEIGHT: f64 = 8.0;

/// Copy of `current` with the hover weight; every other field is preserved.
pub fn apply_hover_override(current: &StyleDescriptor) -> StyleDescriptor {
    StyleDescriptor {
        weight: HOVER_WEIGHT,
        ..current.clone()
    }
}

/// Track-layer interaction switches derived from the "show hover" toggle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HoverControls {
    /// Install [`apply_hover_override`] as the layer's hover style.
    pub hover_enabled: bool,
    /// Zoom to a track's bounds when it is clicked.
    pub zoom_to_bounds_on_click: bool,
}

/// Controls for the track layer, or `None` while there is no track data to
/// attach them to (the layer keeps its current settings).
pub fn hover_controls(hover_enabled: bool, has_tracks: bool) -> Option<HoverControls> {
    if !has_tracks {
        return None;
    }

    Some(HoverControls {
        hover_enabled,
        zoom_to_bounds_on_click: hover_enabled,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hover_widens_only() {
        let selected = StyleDescriptor::with_opacity("#D62728", 8.0, 0.5);
        let base = StyleDescriptor::with_opacity("#D62728", 1.0, 0.6);

        let hovered = apply_hover_override(&base);
        assert_eq!(hovered, StyleDescriptor::with_opacity("#D62728", 8.0, 0.6));

        // Selection overrides survive the hover
        assert_eq!(apply_hover_override(&selected).opacity, Some(0.5));
    }

    #[test]
    fn test_hover_is_idempotent() {
        let base = StyleDescriptor::new("#33A7AA", 2.0);
        let once = apply_hover_override(&base);
        let twice = apply_hover_override(&once);

        assert_eq!(once, twice);
        assert_eq!(twice.weight, HOVER_WEIGHT);
        assert_eq!(twice.color, "#33A7AA");
        assert_eq!(twice.opacity, None);
    }

    #[test]
    fn test_input_style_is_untouched() {
        let base = StyleDescriptor::with_opacity("#D62728", 1.0, 0.6);
        let snapshot = base.clone();
        let _ = apply_hover_override(&base);
        assert_eq!(base, snapshot);
    }

    #[test]
    fn test_hover_controls() {
        assert_eq!(hover_controls(true, false), None);
        assert_eq!(
            hover_controls(true, true),
            Some(HoverControls { hover_enabled: true, zoom_to_bounds_on_click: true })
        );
        assert_eq!(
            hover_controls(false, true),
            Some(HoverControls { hover_enabled: false, zoom_to_bounds_on_click: false })
        );
    }
}
