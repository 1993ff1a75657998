//! Track selection state.
//!
//! Clicking a track selects it while track focus is enabled. The selection
//! is stored outside the styling functions: every transition produces the
//! next selected id, and [`refresh_track_hideout`] folds it into a fresh
//! hideout for the track layer.

use crate::feature::Feature;
use crate::hideout::Hideout;
use crate::palette::{
    track_color_for_base_layer, SELECTED_KEY, TOOLTIP_OPACITY_FOCUSED, TOOLTIP_OPACITY_UNFOCUSED,
};
use crate::tooltip::TooltipTable;

/// Inputs that fired for one selection update (several may fire together).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SelectionTrigger {
    /// A track in the track layer was clicked.
    LayerClick,
    /// The map itself was clicked (fires alongside `LayerClick`).
    MapClick,
    /// The track-focus toggle changed.
    FocusToggle,
}

#[derive(Debug, Clone, Copy)]
pub struct SelectionEvent<'a> {
    pub focus_enabled: bool,
    /// Most recently clicked track, if any click has happened yet.
    pub clicked_track: Option<&'a Feature>,
    pub triggers: &'a [SelectionTrigger],
    /// Keep the selection until another track is clicked or focus is disabled.
    pub keep_selection_active: bool,
    /// Whether a map click landed close to the clicked track. Computed by
    /// the caller; only consulted when `keep_selection_active` is false.
    pub near_selected: bool,
}

/// Selected track id after `event`.
pub fn next_selection(event: &SelectionEvent<'_>) -> Option<String> {
    if !event.focus_enabled {
        return None;
    }

    let selected_id = event.clicked_track?.key_string(SELECTED_KEY)?;

    if event.triggers.contains(&SelectionTrigger::LayerClick) {
        return Some(selected_id);
    }

    if event.triggers.contains(&SelectionTrigger::MapClick)
        && (event.keep_selection_active || event.near_selected)
    {
        return Some(selected_id);
    }

    None
}

/// Next track-layer hideout for the current selection and UI state.
///
/// `current` is left untouched; segment settings and `selected_key` carry over.
pub fn refresh_track_hideout(
    current: &Hideout,
    selected_id: Option<String>,
    focus_enabled: bool,
    base_layer: &str,
    tooltips: TooltipTable,
) -> Hideout {
    let tooltip_opacity = if focus_enabled {
        TOOLTIP_OPACITY_FOCUSED
    } else {
        TOOLTIP_OPACITY_UNFOCUSED
    };

    tracing::debug!(
        "Refreshing track hideout (selected={:?}, focus={}, base_layer={})",
        selected_id,
        focus_enabled,
        base_layer
    );

    Hideout {
        selected_id,
        track_focus: focus_enabled,
        base_color: track_color_for_base_layer(base_layer).to_string(),
        tooltips,
        tooltip_opacity,
        ..current.clone()
    }
}
