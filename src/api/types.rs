//! Wire types for the detection service.
//!
//! The backend's response shapes drifted across deployment generations
//! (per-frame video arrays, differently named coordinate fields). This module
//! pins one canonical contract and versions it; older shapes are not
//! silently accepted.

use crate::error::{Error, Result};
use chrono::NaiveDate;
use serde::Deserialize;
use serde_json::Value;

/// Canonical wire contract version implemented by this client.
pub const WIRE_VERSION: &str = "1";

/// Successful image detection payload.
#[derive(Debug, Clone, Deserialize)]
pub struct ImageDetection {
    /// Whether a bear was found in the image.
    pub bear_detected: bool,
    /// Highest detection confidence, 0.0 to 1.0.
    pub confidence: f32,
    /// Annotated JPEG, base64-encoded. Absent when the backend skipped
    /// rendering.
    #[serde(default)]
    pub processed_image: Option<String>,
}

/// Successful video analysis payload (terminal summary only).
#[derive(Debug, Clone, Deserialize)]
pub struct VideoDetection {
    /// Whether the backend dispatched a warning alert.
    pub alert_sent: bool,
    /// Longest run of consecutive bear-positive footage, in seconds.
    pub max_consecutive_duration_seconds: f64,
}

/// Successful map points payload.
#[derive(Debug, Clone, Deserialize)]
pub struct MapPoints {
    /// Sighting locations.
    #[serde(default)]
    pub locations: Vec<WireLocation>,
}

/// A single sighting location on the wire.
#[derive(Debug, Clone, Deserialize)]
pub struct WireLocation {
    /// Latitude in degrees.
    pub lat: f64,
    /// Longitude in degrees.
    pub lng: f64,
    /// Popup markup from the backend. Sanitized to plain text before use.
    #[serde(default)]
    pub popup_html: String,
}

/// Optional date range for the map points query.
#[derive(Debug, Clone, Copy, Default)]
pub struct DateRange {
    /// Inclusive start date.
    pub start: Option<NaiveDate>,
    /// Inclusive end date.
    pub end: Option<NaiveDate>,
}

impl DateRange {
    /// Query-string pairs for this range, ISO `YYYY-MM-DD` values.
    pub fn query_pairs(&self) -> Vec<(&'static str, String)> {
        let mut pairs = Vec::new();
        if let Some(start) = self.start {
            pairs.push(("start", start.to_string()));
        }
        if let Some(end) = self.end {
            pairs.push(("end", end.to_string()));
        }
        pairs
    }
}

/// Envelope every contract-v1 response carries.
#[derive(Debug, Deserialize)]
struct Envelope {
    success: bool,
}

/// Classify an HTTP response into a typed payload or an error.
///
/// Order of precedence: a JSON body carrying `success: false` wins (its
/// `error` field becomes the user-facing message), then a non-2xx status,
/// then a JSON parse failure. A 2xx body without `success: true` is rejected
/// as an invalid response rather than silently accepted as a drifted shape.
pub fn classify_response<T: serde::de::DeserializeOwned>(
    url: &str,
    status: u16,
    body: &str,
) -> Result<T> {
    let value: Option<Value> = serde_json::from_str(body).ok();

    if let Some(v) = &value
        && v.get("success").and_then(Value::as_bool) == Some(false)
    {
        let message = v
            .get("error")
            .and_then(Value::as_str)
            .unwrap_or("the server reported an unspecified failure")
            .to_string();
        return Err(Error::ServerRejected { message });
    }

    if !(200..300).contains(&status) {
        return Err(Error::ServerStatus { status });
    }

    let envelope: Envelope = serde_json::from_str(body).map_err(|e| Error::InvalidResponse {
        url: url.to_string(),
        source: e,
    })?;
    // `success: false` was handled above, so a parsed envelope is positive.
    debug_assert!(envelope.success);

    serde_json::from_str(body).map_err(|e| Error::InvalidResponse {
        url: url.to_string(),
        source: e,
    })
}
