//! Highlight overlays for rows picked in the segment and node tables.
//!
//! Picking segments draws them in the segment highlight color; picking nodes
//! draws every segment that starts or ends at one of them in the node
//! highlight color. Both overlays zoom the map to their bounds.

use rustc_hash::FxHashSet;
use serde::Serialize;

use crate::feature::FeatureCollection;
use crate::palette::{highlight_node_style, highlight_segment_style};
use crate::style::StyleDescriptor;

/// OSM way id of a segment.
pub const OSM_ID_KEY: &str = "osm_id";
/// OSM node ids at either end of a segment.
pub const OSM_ID_FROM_KEY: &str = "osm_id_from";
pub const OSM_ID_TO_KEY: &str = "osm_id_to";

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HighlightLayer {
    pub style: StyleDescriptor,
    pub zoom_to_bounds: bool,
    pub features: FeatureCollection,
}

/// Segments whose `osm_id` is among `selected_ids`.
///
/// `None` when nothing is selected or no segment matches.
pub fn highlight_segments<S: AsRef<str>>(
    segments: &FeatureCollection,
    selected_ids: &[S],
) -> Option<HighlightLayer> {
    highlight_matching(segments, selected_ids, &[OSM_ID_KEY], highlight_segment_style())
}

/// Segments starting or ending at one of `node_ids`.
///
/// `None` when nothing is selected or no segment touches the nodes.
pub fn highlight_segments_for_nodes<S: AsRef<str>>(
    segments: &FeatureCollection,
    node_ids: &[S],
) -> Option<HighlightLayer> {
    highlight_matching(
        segments,
        node_ids,
        &[OSM_ID_FROM_KEY, OSM_ID_TO_KEY],
        highlight_node_style(),
    )
}

fn highlight_matching<S: AsRef<str>>(
    segments: &FeatureCollection,
    ids: &[S],
    keys: &[&str],
    style: StyleDescriptor,
) -> Option<HighlightLayer> {
    if ids.is_empty() {
        return None;
    }

    let wanted: FxHashSet<&str> = ids.iter().map(AsRef::as_ref).collect();
    let features: FeatureCollection = segments
        .features
        .iter()
        .filter(|feature| {
            keys.iter().any(|key| {
                feature
                    .key_string(key)
                    .is_some_and(|id| wanted.contains(id.as_str()))
            })
        })
        .cloned()
        .collect();

    if features.is_empty() {
        return None;
    }

    tracing::debug!(
        "Highlighting {} of {} segments in {}",
        features.len(),
        segments.len(),
        style.color
    );

    Some(HighlightLayer {
        style,
        zoom_to_bounds: true,
        features,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::feature::Feature;
    use serde_json::json;

    fn segments() -> FeatureCollection {
        [
            Feature::from_properties([
                ("osm_id", json!(1001)),
                ("osm_id_from", json!(11)),
                ("osm_id_to", json!(12)),
            ]),
            Feature::from_properties([
                ("osm_id", json!(1002)),
                ("osm_id_from", json!(12)),
                ("osm_id_to", json!(13)),
            ]),
            Feature::from_properties([
                ("osm_id", json!(1003)),
                ("osm_id_from", json!(14)),
                ("osm_id_to", json!(15)),
            ]),
            Feature::from_properties([("ref", json!("no ids"))]),
        ]
        .into_iter()
        .collect()
    }

    fn osm_ids(layer: &HighlightLayer) -> Vec<String> {
        layer
            .features
            .features
            .iter()
            .filter_map(|f| f.key_string(OSM_ID_KEY))
            .collect()
    }

    #[test]
    fn test_selected_segments_are_red() {
        let layer = highlight_segments(&segments(), &["1001", "1003"]).unwrap();

        assert_eq!(layer.style, StyleDescriptor::new("red", 8.0));
        assert!(layer.zoom_to_bounds);
        assert_eq!(osm_ids(&layer), vec!["1001", "1003"]);
    }

    #[test]
    fn test_node_selection_matches_either_end() {
        let layer = highlight_segments_for_nodes(&segments(), &["12".to_string()]).unwrap();

        assert_eq!(layer.style, StyleDescriptor::new("purple", 8.0));
        assert_eq!(osm_ids(&layer), vec!["1001", "1002"]);

        let layer = highlight_segments_for_nodes(&segments(), &["15"]).unwrap();
        assert_eq!(osm_ids(&layer), vec!["1003"]);
    }

    #[test]
    fn test_empty_selection_or_no_match_is_none() {
        let none: [&str; 0] = [];
        assert!(highlight_segments(&segments(), &none).is_none());
        assert!(highlight_segments_for_nodes(&segments(), &none).is_none());
        assert!(highlight_segments(&segments(), &["9999"]).is_none());
        assert!(highlight_segments_for_nodes(&FeatureCollection::default(), &["12"]).is_none());
    }

    #[test]
    fn test_segment_ids_do_not_match_node_ends() {
        // 12 is a node id here, never a segment id
        assert!(highlight_segments(&segments(), &["12"]).is_none());
    }

    #[test]
    fn test_layer_json_shape() {
        let layer = highlight_segments(&segments(), &["1002"]).unwrap();
        let value = serde_json::to_value(&layer).unwrap();

        assert_eq!(value["style"], json!({"color": "red", "weight": 8.0}));
        assert_eq!(value["zoom_to_bounds"], json!(true));
        assert_eq!(value["features"]["features"][0]["properties"]["osm_id"], json!(1002));
    }
}
