//! Base styles for segment and track layers.

use crate::feature::{Feature, METRIC_KEY};
use crate::hideout::Hideout;
use crate::style::classify::classify;
use crate::style::StyleDescriptor;

pub const TRACK_BASE_WEIGHT: f64 = 1.0;
pub const TRACK_BASE_OPACITY: f64 = 0.6;
pub const TRACK_SELECTED_WEIGHT: f64 = 8.0;
pub const TRACK_SELECTED_OPACITY: f64 = 0.5;

/// Style of a matched network segment.
///
/// Color is fixed per layer; weight follows the segment's visit count
/// (`count_track`, missing → 0) through the hideout's weight classes.
pub fn resolve_segment_style(feature: &Feature, hideout: &Hideout) -> StyleDescriptor {
    let visits = feature.get_f64(METRIC_KEY).unwrap_or(0.0);
    let weight = classify(visits, &hideout.weight_classes, &hideout.weights);

    StyleDescriptor::new(hideout.color.clone(), weight)
}

/// Style of a GPX track.
///
/// Every track gets the thin, translucent base style. With track focus on,
/// the selected track is widened and made slightly more transparent; its
/// color stays the base color (`selected_color` is not applied).
pub fn resolve_track_style(feature: &Feature, hideout: &Hideout) -> StyleDescriptor {
    let base = StyleDescriptor::with_opacity(
        hideout.base_color.clone(),
        TRACK_BASE_WEIGHT,
        TRACK_BASE_OPACITY,
    );

    if is_selected(feature, hideout) {
        return StyleDescriptor {
            weight: TRACK_SELECTED_WEIGHT,
            opacity: Some(TRACK_SELECTED_OPACITY),
            ..base
        };
    }

    base
}

/// Whether `feature` is the hideout's focused selection.
///
/// The property named by `selected_key` is read through
/// [`Feature::key_string`] and compared as a string, so a numeric `17`
/// matches a selected id of `"17"`. Every feature sharing the selected id
/// is highlighted.
pub fn is_selected(feature: &Feature, hideout: &Hideout) -> bool {
    match hideout.selection_target() {
        Some((key, id)) => feature.key_string(key).as_deref() == Some(id),
        None => false,
    }
}
