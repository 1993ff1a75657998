//! Utility modules shared by markers and tooltips.

pub mod html;

pub use html::{escape_html, styled_span};
