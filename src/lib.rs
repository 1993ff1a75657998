//! Track Map Styling
//!
//! Visual presentation of the features drawn on the track/node-network map:
//! line styles, hover overlays, node badges and track tooltips.
//!
//! Every entry point is a pure function of a feature and a [`Hideout`]
//! (the style context each map layer carries); the only mutation is binding
//! a tooltip onto the layer handle passed in.
//!
//! - `style/`: threshold classifier, segment/track styles, hover overlay
//! - `marker`: node label badges
//! - `tooltip/`: tooltip tables, binding and HTML content
//! - `selection`: click-driven track selection and hideout refresh
//! - `highlight`: segment overlays for rows picked in the data tables
//! - `render`: per-layer dispatch in render-then-interact order

pub mod error;
pub mod feature;
pub mod hideout;
pub mod highlight;
pub mod marker;
pub mod palette;
pub mod render;
pub mod selection;
pub mod style;
pub mod tooltip;
pub mod utils;

// Re-export commonly used types
pub use error::{HideoutError, UnknownLayerKind};
pub use feature::{Feature, FeatureCollection};
pub use hideout::Hideout;
pub use highlight::{highlight_segments, highlight_segments_for_nodes, HighlightLayer};
pub use marker::{render_label_marker, MarkerVisual};
pub use render::{render_collection, render_feature, LayerKind, RenderedFeature, RenderedLayer};
pub use selection::{next_selection, refresh_track_hideout, SelectionEvent, SelectionTrigger};
pub use style::{
    apply_hover_override, classify, resolve_segment_style, resolve_track_style, StyleDescriptor,
};
pub use tooltip::{bind_tooltip, LayerHandle, TooltipLayer, TooltipOptions, TooltipTable};
