//! Per-feature render dispatch.
//!
//! Mirrors how the map engine drives this crate for each layer: nodes get a
//! badge marker, segments, tracks and the background network get a line
//! style. Segments and nodes bind their own tooltip. Tracks bind theirs from
//! the hideout's table and, when hovered, receive the hover overlay on top of
//! the style just resolved.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::UnknownLayerKind;
use crate::feature::{Feature, FeatureCollection};
use crate::hideout::Hideout;
use crate::marker::{render_label_marker, MarkerVisual};
use crate::palette::network_style;
use crate::style::{apply_hover_override, resolve_segment_style, resolve_track_style, StyleDescriptor};
use crate::tooltip::{
    bind_feature_tooltip, bind_tooltip, node_feature_tooltip, segment_feature_tooltip, LayerHandle,
    TooltipBinding, TooltipLayer,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LayerKind {
    /// Matched network segments, weighted by visit count.
    Segments,
    /// Uploaded GPX tracks, selectable and hoverable.
    Tracks,
    /// Network nodes, drawn as label badges.
    Nodes,
    /// Background cycling node network, one static style.
    Network,
}

impl LayerKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            LayerKind::Segments => "segments",
            LayerKind::Tracks => "tracks",
            LayerKind::Nodes => "nodes",
            LayerKind::Network => "network",
        }
    }
}

impl fmt::Display for LayerKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for LayerKind {
    type Err = UnknownLayerKind;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "segments" | "segment" => Ok(LayerKind::Segments),
            "tracks" | "track" | "gpx" => Ok(LayerKind::Tracks),
            "nodes" | "node" => Ok(LayerKind::Nodes),
            "network" | "rcn" => Ok(LayerKind::Network),
            _ => Err(UnknownLayerKind(s.to_string())),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum RenderedFeature {
    Marker {
        marker: MarkerVisual,
    },
    Line {
        style: StyleDescriptor,
        #[serde(skip_serializing_if = "Option::is_none")]
        hover_style: Option<StyleDescriptor>,
    },
}

impl RenderedFeature {
    /// Style currently drawn: the hover style while hovered, else the base.
    pub fn active_style(&self) -> Option<&StyleDescriptor> {
        match self {
            RenderedFeature::Marker { .. } => None,
            RenderedFeature::Line { style, hover_style } => hover_style.as_ref().or(Some(style)),
        }
    }
}

/// Render one feature of a `kind` layer.
///
/// Order for tracks: style, then tooltip, then hover overlay. Only tracks
/// react to `hovered`.
pub fn render_feature<L>(
    kind: LayerKind,
    feature: &Feature,
    hideout: &Hideout,
    layer: &mut L,
    hovered: bool,
) -> RenderedFeature
where
    L: TooltipLayer + ?Sized,
{
    match kind {
        LayerKind::Nodes => {
            let marker = render_label_marker(feature);
            bind_feature_tooltip(feature, layer, node_feature_tooltip);

            RenderedFeature::Marker { marker }
        }
        LayerKind::Segments => {
            let style = resolve_segment_style(feature, hideout);
            bind_feature_tooltip(feature, layer, segment_feature_tooltip);

            RenderedFeature::Line {
                style,
                hover_style: None,
            }
        }
        LayerKind::Tracks => {
            let style = resolve_track_style(feature, hideout);
            bind_tooltip(feature, layer, &hideout.tooltips, hideout.tooltip_opacity);
            let hover_style = hovered.then(|| apply_hover_override(&style));

            RenderedFeature::Line { style, hover_style }
        }
        LayerKind::Network => RenderedFeature::Line {
            style: network_style(),
            hover_style: None,
        },
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RenderedEntry {
    #[serde(flatten)]
    pub feature: RenderedFeature,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tooltip: Option<TooltipBinding>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RenderedLayer {
    pub kind: LayerKind,
    pub entries: Vec<RenderedEntry>,
}

impl RenderedLayer {
    pub fn tooltip_count(&self) -> usize {
        self.entries.iter().filter(|e| e.tooltip.is_some()).count()
    }
}

/// Render every feature of a collection as one unhovered layer.
pub fn render_collection(
    kind: LayerKind,
    collection: &FeatureCollection,
    hideout: &Hideout,
) -> RenderedLayer {
    let entries: Vec<RenderedEntry> = collection
        .features
        .iter()
        .map(|feature| {
            let mut handle = LayerHandle::new();
            let rendered = render_feature(kind, feature, hideout, &mut handle, false);
            RenderedEntry {
                feature: rendered,
                tooltip: handle.into_tooltip(),
            }
        })
        .collect();

    let layer = RenderedLayer { kind, entries };

    tracing::info!(
        "Rendered {} layer: {} features, {} tooltips",
        kind,
        layer.entries.len(),
        layer.tooltip_count()
    );

    layer
}
