//! Tooltip Binding
//!
//! Tooltip HTML is precomputed per track uid by the data pipeline (see
//! `content`). At render time each track feature looks up its uid and, when
//! an entry exists, binds it to the feature's layer element.
//!
//! Aggregated segments and nodes carry their own tooltip: either a
//! `tooltip` property written by the pipeline, or one built from the
//! feature's summary columns.

pub mod content;

pub use content::{
    kpi_tooltip_html, node_feature_tooltip, node_tooltip_html, segment_feature_tooltip,
    segment_tooltip_html, track_tooltip_html, NodeSummary, SegmentSummary,
};

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

use crate::feature::{Feature, TOOLTIP_ID_KEY};

/// Feature property holding tooltip HTML written by the data pipeline.
pub const TOOLTIP_PROPERTY: &str = "tooltip";

/// Map engine's default tooltip opacity, used for segment and node tooltips.
pub const FEATURE_TOOLTIP_OPACITY: f64 = 0.9;

/// Where the tooltip opens relative to the feature.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TooltipDirection {
    /// Track tooltips.
    #[default]
    Top,
    /// Engine picks the side; segment and node tooltips.
    Auto,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TooltipOptions {
    pub direction: TooltipDirection,
    pub opacity: f64,
}

/// A tooltip attached to a layer element.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TooltipBinding {
    pub content: String,
    pub options: TooltipOptions,
}

/// Rendering-engine element that can carry a tooltip.
pub trait TooltipLayer {
    fn bind_tooltip(&mut self, content: &str, options: TooltipOptions);
}

/// In-memory layer element that records the tooltip bound to it.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct LayerHandle {
    tooltip: Option<TooltipBinding>,
}

impl LayerHandle {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn tooltip(&self) -> Option<&TooltipBinding> {
        self.tooltip.as_ref()
    }

    pub fn into_tooltip(self) -> Option<TooltipBinding> {
        self.tooltip
    }
}

impl TooltipLayer for LayerHandle {
    fn bind_tooltip(&mut self, content: &str, options: TooltipOptions) {
        self.tooltip = Some(TooltipBinding {
            content: content.to_string(),
            options,
        });
    }
}

/// Track uid → tooltip HTML.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TooltipTable(FxHashMap<String, String>);

impl TooltipTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Content for `uid`; empty entries count as missing.
    pub fn get(&self, uid: &str) -> Option<&str> {
        self.0
            .get(uid)
            .map(String::as_str)
            .filter(|content| !content.is_empty())
    }

    pub fn insert(&mut self, uid: impl Into<String>, content: impl Into<String>) {
        self.0.insert(uid.into(), content.into());
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Build the table for a set of track features, keyed by `track_uid`.
    ///
    /// Tracks without a uid or without the properties the tooltip needs are skipped.
    pub fn from_tracks<'a>(tracks: impl IntoIterator<Item = &'a Feature>) -> Self {
        let mut table = Self::new();
        let mut skipped = 0usize;

        for track in tracks {
            match (track.key_string(TOOLTIP_ID_KEY), track_tooltip_html(track)) {
                (Some(uid), Some(html)) => table.insert(uid, html),
                _ => skipped += 1,
            }
        }

        tracing::debug!(
            "Built tooltip table ({} tracks, {} skipped)",
            table.len(),
            skipped
        );
        table
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for TooltipTable {
    fn from_iter<T: IntoIterator<Item = (K, V)>>(iter: T) -> Self {
        Self(
            iter.into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        )
    }
}

/// Attach the precomputed tooltip for `feature` to `layer`, anchored above it.
///
/// No-op when the feature has no `track_uid` or the table has no content
/// for it. Returns whether a tooltip was bound.
pub fn bind_tooltip<L>(feature: &Feature, layer: &mut L, table: &TooltipTable, opacity: f64) -> bool
where
    L: TooltipLayer + ?Sized,
{
    let Some(uid) = feature.key_string(TOOLTIP_ID_KEY) else {
        return false;
    };
    let Some(content) = table.get(&uid) else {
        return false;
    };

    layer.bind_tooltip(
        content,
        TooltipOptions {
            direction: TooltipDirection::Top,
            opacity,
        },
    );
    true
}

/// Attach a segment or node feature's own tooltip to `layer`.
///
/// A non-empty `tooltip` property wins; otherwise `build` derives the HTML
/// from the feature's summary columns. Returns whether a tooltip was bound.
pub fn bind_feature_tooltip<L, F>(feature: &Feature, layer: &mut L, build: F) -> bool
where
    L: TooltipLayer + ?Sized,
    F: FnOnce(&Feature) -> Option<String>,
{
    let content = match feature.get_str(TOOLTIP_PROPERTY).filter(|s| !s.is_empty()) {
        Some(precomputed) => precomputed.to_string(),
        None => match build(feature) {
            Some(html) => html,
            None => return false,
        },
    };

    layer.bind_tooltip(
        &content,
        TooltipOptions {
            direction: TooltipDirection::Auto,
            opacity: FEATURE_TOOLTIP_OPACITY,
        },
    );
    true
}
