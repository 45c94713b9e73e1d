//! Sighting point data and popup sanitization.

use crate::api::WireLocation;

/// A geocoded historical bear-detection record.
#[derive(Debug, Clone, PartialEq)]
pub struct SightingPoint {
    /// Latitude in degrees.
    pub latitude: f64,
    /// Longitude in degrees.
    pub longitude: f64,
    /// Popup text. Plain text only; backend markup is sanitized on ingest.
    pub popup: String,
}

impl SightingPoint {
    /// Convert a wire location, sanitizing the popup markup.
    pub fn from_wire(wire: WireLocation) -> Self {
        Self {
            latitude: wire.lat,
            longitude: wire.lng,
            popup: sanitize_popup(&wire.popup_html),
        }
    }
}

/// Reduce a popup HTML fragment to plain text.
///
/// Tags are stripped, the common entities are decoded, and runs of
/// whitespace collapse to single spaces. The backend historically shipped
/// raw HTML straight into the page; the CLI never renders markup.
pub fn sanitize_popup(html: &str) -> String {
    let mut text = String::with_capacity(html.len());
    let mut in_tag = false;

    for ch in html.chars() {
        match ch {
            '<' => in_tag = true,
            '>' => {
                if in_tag {
                    in_tag = false;
                    // Tag boundaries act as separators so "<b>a</b><br>b"
                    // doesn't fuse words together.
                    text.push(' ');
                } else {
                    text.push(ch);
                }
            }
            _ if !in_tag => text.push(ch),
            _ => {}
        }
    }

    // `&amp;` decodes last so `&amp;lt;` comes out as `&lt;`, not `<`.
    let decoded = text
        .replace("&lt;", "<")
        .replace("&gt;", ">")
        .replace("&quot;", "\"")
        .replace("&#39;", "'")
        .replace("&nbsp;", " ")
        .replace("&amp;", "&");

    decoded.split_whitespace().collect::<Vec<_>>().join(" ")
}
