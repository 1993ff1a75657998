//! Node label markers.
//!
//! Network nodes are drawn as round badges showing the node's reference
//! number instead of the default pin icon.

use serde::Serialize;

use crate::feature::{Feature, LABEL_KEY};
use crate::palette::COLOR_SEGMENT;
use crate::utils::html::escape_html;

pub const MARKER_CLASS_NAME: &str = "custom-label-icon";
pub const MARKER_SIZE: [u32; 2] = [40, 40];
pub const MARKER_ANCHOR: [u32; 2] = [MARKER_SIZE[0] / 2, MARKER_SIZE[1] / 2];

const BADGE_BACKGROUND: &str = "#FEFDEF";
const BADGE_TEXT_COLOR: &str = "black";
const BADGE_FONT_SIZE_PX: u32 = 16;
const BADGE_FONT_FAMILY: &str = "'Trebuchet MS', sans-serif";
const BADGE_BORDER: &str = "4px solid";

/// Div-icon description of a badge marker.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MarkerVisual {
    pub class_name: &'static str,
    pub label: String,
    pub html: String,
    pub icon_size: [u32; 2],
    pub icon_anchor: [u32; 2],
}

/// Badge for a point feature, labelled with its `rcn_ref` (empty if absent).
pub fn render_label_marker(feature: &Feature) -> MarkerVisual {
    let label = feature.key_string(LABEL_KEY).unwrap_or_default();

    MarkerVisual {
        class_name: MARKER_CLASS_NAME,
        html: badge_html(&label),
        label,
        icon_size: MARKER_SIZE,
        icon_anchor: MARKER_ANCHOR,
    }
}

fn badge_html(label: &str) -> String {
    let mut html = String::with_capacity(512);
    html.push_str("<div style=\"");
    html.push_str(&format!("background-color: {}; ", BADGE_BACKGROUND));
    html.push_str(&format!("color: {}; ", BADGE_TEXT_COLOR));
    html.push_str(&format!("width: {}px; ", MARKER_SIZE[0]));
    html.push_str(&format!("height: {}px; ", MARKER_SIZE[1]));
    html.push_str("display: flex; align-items: center; justify-content: center; ");
    html.push_str("border-radius: 50%; ");
    html.push_str("font-weight: bold; ");
    html.push_str(&format!("font-size: {}px; ", BADGE_FONT_SIZE_PX));
    html.push_str(&format!("font-family: {}; ", BADGE_FONT_FAMILY));
    html.push_str(&format!("border: {} {};", BADGE_BORDER, COLOR_SEGMENT));
    html.push_str("\">");
    html.push_str(&escape_html(label));
    html.push_str("</div>");
    html
}
