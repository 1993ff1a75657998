//! Tooltip HTML builders.
//!
//! Two layouts:
//! - KPI tooltips for aggregated segments and nodes: a large header line
//!   followed by one small `name: value` line per KPI
//! - Track tooltips: name, date, distance and source file, plus a hint
//!   that clicking zooms to the track

use chrono::{DateTime, NaiveDate, NaiveDateTime};

use crate::feature::{Feature, LABEL_KEY, METRIC_KEY};
use crate::utils::html::{escape_html, styled_span};

const LABEL_COLOR: &str = "#999";
const VALUE_COLOR: &str = "#000";

/// Network reference of an aggregated segment.
const SEGMENT_REF_KEY: &str = "ref";

/// Header line plus one line per KPI, joined by `<br>`.
pub fn kpi_tooltip_html(prefix: &str, label: &str, kpis: &[(&str, String)]) -> String {
    let mut lines = Vec::with_capacity(kpis.len() + 1);

    lines.push(format!(
        "{}{}<br>",
        styled_span(prefix, LABEL_COLOR, 14, false),
        styled_span(label, VALUE_COLOR, 16, true)
    ));

    for (name, value) in kpis {
        lines.push(format!(
            "{}<b style=\"color: {}; font-size: 11px;\">{}</b>",
            styled_span(&format!("{}: ", name), LABEL_COLOR, 11, false),
            VALUE_COLOR,
            escape_html(value)
        ));
    }

    lines.join("<br>")
}

/// Aggregated visits of one network segment.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SegmentSummary {
    pub reference: String,
    pub count_track: u64,
    pub first_date: String,
    pub last_date: String,
    pub length_km: f64,
    /// Best overlap fraction (0.0..=1.0) of any track with this segment.
    pub max_overlap: f64,
}

impl SegmentSummary {
    /// Read a summary from an aggregated segment feature; missing values default.
    pub fn from_feature(feature: &Feature) -> Self {
        Self {
            reference: feature.display_string(SEGMENT_REF_KEY).unwrap_or_default(),
            count_track: count_property(feature),
            first_date: feature.display_string("first_date").unwrap_or_default(),
            last_date: feature.display_string("last_date").unwrap_or_default(),
            length_km: feature.get_f64("length_km").unwrap_or(0.0),
            max_overlap: feature.get_f64("max_overlap_percentage").unwrap_or(0.0),
        }
    }
}

/// Aggregated visits of one network node.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct NodeSummary {
    pub rcn_ref: String,
    pub count_track: u64,
    pub first_date: String,
    pub last_date: String,
}

impl NodeSummary {
    pub fn from_feature(feature: &Feature) -> Self {
        Self {
            rcn_ref: feature.display_string(LABEL_KEY).unwrap_or_default(),
            count_track: count_property(feature),
            first_date: feature.display_string("first_date").unwrap_or_default(),
            last_date: feature.display_string("last_date").unwrap_or_default(),
        }
    }
}

fn count_property(feature: &Feature) -> u64 {
    feature
        .get_f64(METRIC_KEY)
        .filter(|v| *v > 0.0)
        .map(|v| v as u64)
        .unwrap_or(0)
}

pub fn segment_tooltip_html(segment: &SegmentSummary) -> String {
    kpi_tooltip_html(
        "Segment ",
        &segment.reference,
        &[
            ("Visits (Tracks)", segment.count_track.to_string()),
            ("First visit", segment.first_date.clone()),
            ("Last visit", segment.last_date.clone()),
            ("Length", format!("{:.1} km", segment.length_km)),
            ("Best match (%)", format!("{:.0}%", 100.0 * segment.max_overlap)),
        ],
    )
}

pub fn node_tooltip_html(node: &NodeSummary) -> String {
    kpi_tooltip_html(
        "Node ",
        &node.rcn_ref,
        &[
            ("Visits (GPX)", node.count_track.to_string()),
            ("First visit", node.first_date.clone()),
            ("Last visit", node.last_date.clone()),
        ],
    )
}

/// Segment tooltip for a feature with a `ref`; `None` without one.
pub fn segment_feature_tooltip(feature: &Feature) -> Option<String> {
    feature.display_string(SEGMENT_REF_KEY)?;
    Some(segment_tooltip_html(&SegmentSummary::from_feature(feature)))
}

/// Node tooltip for a feature with an `rcn_ref`; `None` without one.
pub fn node_feature_tooltip(feature: &Feature) -> Option<String> {
    feature.display_string(LABEL_KEY)?;
    Some(node_tooltip_html(&NodeSummary::from_feature(feature)))
}

/// Tooltip for one GPX track.
///
/// Needs `track_name`, `track_date`, `track_length` (km) and `gpx_name`;
/// returns `None` if any is missing.
pub fn track_tooltip_html(track: &Feature) -> Option<String> {
    let name = track.display_string("track_name")?;
    let date = format_track_date(track.get_str("track_date")?);
    let length_km = track.get_f64("track_length")?;
    let gpx_name = track.display_string("gpx_name")?;

    let mut html = String::with_capacity(768);
    html.push_str("<div style=\"line-height:1.4\">");
    html.push_str(&styled_span("Track ", LABEL_COLOR, 14, false));
    html.push_str(&styled_span(&name, VALUE_COLOR, 16, true));
    html.push_str("<br><br>");
    html.push_str(&styled_span("Date: ", LABEL_COLOR, 11, false));
    html.push_str(&styled_span(&date, VALUE_COLOR, 11, true));
    html.push_str("<br>");
    html.push_str(&styled_span("Distance: ", LABEL_COLOR, 11, false));
    html.push_str(&styled_span(&format!("{:.2} km", length_km), VALUE_COLOR, 11, true));
    html.push_str("<br>");
    html.push_str(&styled_span("File: ", LABEL_COLOR, 11, false));
    html.push_str(&styled_span(&gpx_name, VALUE_COLOR, 11, true));
    html.push_str("<br><br>");
    html.push_str(
        "<i style=\"color: #999; font-size: 14px;\">Click to zoom in on this track</i>",
    );
    html.push_str("</div>");

    Some(html)
}

/// Format an ISO date or datetime as `YYYY-MM-DD`.
///
/// Unparseable input falls back to its first ten characters.
pub fn format_track_date(raw: &str) -> String {
    const DATE_FORMAT: &str = "%Y-%m-%d";

    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return dt.format(DATE_FORMAT).to_string();
    }

    for pattern in ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S%.f"] {
        if let Ok(dt) = NaiveDateTime::parse_from_str(raw, pattern) {
            return dt.format(DATE_FORMAT).to_string();
        }
    }

    if let Ok(date) = NaiveDate::parse_from_str(raw, DATE_FORMAT) {
        return date.format(DATE_FORMAT).to_string();
    }

    raw.chars().take(10).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn track() -> Feature {
        Feature::from_properties([
            ("track_uid", json!("trk-1")),
            ("track_name", json!("Morning <loop>")),
            ("track_date", json!("2025-09-22T07:45:00+02:00")),
            ("track_length", json!(42.318)),
            ("gpx_name", json!("ride.gpx")),
        ])
    }

    #[test]
    fn test_format_track_date() {
        assert_eq!(format_track_date("2025-09-22T07:45:00+02:00"), "2025-09-22");
        assert_eq!(format_track_date("2025-09-22T07:45:00"), "2025-09-22");
        assert_eq!(format_track_date("2025-09-22 07:45:00.123"), "2025-09-22");
        assert_eq!(format_track_date("2025-09-22"), "2025-09-22");
        assert_eq!(format_track_date("2025/09/22 morning"), "2025/09/22");
        assert_eq!(format_track_date("short"), "short");
    }

    #[test]
    fn test_track_tooltip() {
        let html = track_tooltip_html(&track()).unwrap();

        assert!(html.starts_with("<div style=\"line-height:1.4\">"));
        assert!(html.contains("Morning &lt;loop&gt;"));
        assert!(html.contains(">2025-09-22</span>"));
        assert!(html.contains(">42.32 km</span>"));
        assert!(html.contains(">ride.gpx</span>"));
        assert!(html.contains("Click to zoom in on this track"));
        assert!(html.ends_with("</div>"));
    }

    #[test]
    fn test_track_tooltip_requires_fields() {
        let mut feature = track();
        feature.properties.remove("track_length");
        assert!(track_tooltip_html(&feature).is_none());
    }

    #[test]
    fn test_kpi_tooltip_layout() {
        let html = kpi_tooltip_html("Node ", "12", &[("Visits (GPX)", "3".to_string())]);
        assert_eq!(
            html,
            "<span style=\"color: #999; font-size: 14px;\">Node </span>\
             <span style=\"color: #000; font-size: 16px; font-weight: bold;\">12</span><br>\
             <br>\
             <span style=\"color: #999; font-size: 11px;\">Visits (GPX): </span>\
             <b style=\"color: #000; font-size: 11px;\">3</b>"
        );
    }

    #[test]
    fn test_segment_tooltip() {
        let segment = SegmentSummary::from_feature(&Feature::from_properties([
            ("ref", json!("12-14")),
            ("count_track", json!(5)),
            ("first_date", json!("2024-04-01")),
            ("last_date", json!("2025-08-30")),
            ("length_km", json!(3.46)),
            ("max_overlap_percentage", json!(0.874)),
        ]));

        assert_eq!(segment.count_track, 5);
        let html = segment_tooltip_html(&segment);
        assert!(html.contains(">Segment </span>"));
        assert!(html.contains(">12-14</span>"));
        assert!(html.contains("Visits (Tracks): </span><b style=\"color: #000; font-size: 11px;\">5</b>"));
        assert!(html.contains(">3.5 km</b>"));
        assert!(html.contains(">87%</b>"));
    }

    #[test]
    fn test_feature_tooltips_need_a_reference() {
        let unreferenced = Feature::from_properties([("count_track", json!(4))]);
        assert!(segment_feature_tooltip(&unreferenced).is_none());
        assert!(node_feature_tooltip(&unreferenced).is_none());

        let segment = Feature::from_properties([("ref", json!("3-9")), ("count_track", json!(4))]);
        let html = segment_feature_tooltip(&segment).unwrap();
        assert!(html.contains(">3-9</span>"));
        assert!(html.contains(">4</b>"));
    }

    #[test]
    fn test_node_tooltip() {
        let node = NodeSummary {
            rcn_ref: "7".to_string(),
            count_track: 2,
            first_date: "2024-01-01".to_string(),
            last_date: "2024-02-01".to_string(),
        };
        let html = node_tooltip_html(&node);
        assert!(html.contains(">Node </span>"));
        assert!(html.contains("Visits (GPX): "));
        assert_eq!(html.matches("<br>").count(), 4);
    }
}
