//! Inline-HTML helpers shared by markers and tooltips.

/// Escape text for embedding inside HTML element content or attribute values.
pub fn escape_html(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(ch),
        }
    }
    escaped
}

/// `<span>` with inline color and font size, content escaped.
pub fn styled_span(text: &str, color: &str, font_size_px: u32, bold: bool) -> String {
    let weight = if bold { " font-weight: bold;" } else { "" };
    format!(
        "<span style=\"color: {}; font-size: {}px;{}\">{}</span>",
        color,
        font_size_px,
        weight,
        escape_html(text)
    )
}
