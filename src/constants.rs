//! Application-wide constants.
//!
//! All magic numbers and strings are defined here to ensure consistency
//! and make changes easy to track.

/// Application name used for config directories and user-facing messages.
pub const APP_NAME: &str = "bearwatch";

/// Default base URL of the detection service.
pub const DEFAULT_API_BASE_URL: &str = "https://bear-detection-backend2.onrender.com";

/// Default connect timeout for API requests, in seconds.
pub const DEFAULT_CONNECT_TIMEOUT_SECS: u64 = 30;

/// Default overall request timeout, in seconds.
///
/// Video uploads can be large and the backend analyzes them synchronously,
/// so the ceiling is generous. Configurable via `[api] request_timeout_secs`.
pub const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 300;

/// API endpoint paths, wire contract version 1.
pub mod endpoints {
    /// Image detection endpoint (multipart POST, field `image`).
    pub const DETECT_IMAGE: &str = "/api/detect";
    /// Video detection endpoint (multipart POST, field `video`).
    pub const DETECT_VIDEO: &str = "/api/detect-video";
    /// Sighting map points endpoint (GET, optional `start`/`end` query).
    pub const MAP_POINTS: &str = "/api/map-points";
}

/// Multipart form field names expected by the backend.
pub mod form_fields {
    /// Field name for image uploads.
    pub const IMAGE: &str = "image";
    /// Field name for video uploads.
    pub const VIDEO: &str = "video";
}

/// Confidence value bounds.
pub mod confidence {
    /// Minimum valid confidence value.
    pub const MIN: f32 = 0.0;
    /// Maximum valid confidence value.
    pub const MAX: f32 = 1.0;
}

/// Fallback MIME type when the file extension is unrecognized.
pub const OCTET_STREAM: &str = "application/octet-stream";

/// Default file name suffix for saved annotated images.
pub const ANNOTATED_SUFFIX: &str = ".detected.jpg";
