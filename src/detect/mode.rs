//! Detection mode selection.

use crate::constants::{endpoints, form_fields};

/// Whether the current workflow targets a single image or a video.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DetectionMode {
    /// Single-image detection.
    Image,
    /// Video analysis.
    Video,
}

impl DetectionMode {
    /// API endpoint path bound to this mode.
    pub fn endpoint(self) -> &'static str {
        match self {
            Self::Image => endpoints::DETECT_IMAGE,
            Self::Video => endpoints::DETECT_VIDEO,
        }
    }

    /// Multipart form field name the backend expects for this mode.
    pub fn form_field(self) -> &'static str {
        match self {
            Self::Image => form_fields::IMAGE,
            Self::Video => form_fields::VIDEO,
        }
    }
}

impl std::fmt::Display for DetectionMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Image => write!(f, "image"),
            Self::Video => write!(f, "video"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mode_endpoint_binding() {
        assert_eq!(DetectionMode::Image.endpoint(), "/api/detect");
        assert_eq!(DetectionMode::Video.endpoint(), "/api/detect-video");
    }

    #[test]
    fn test_mode_form_field_binding() {
        assert_eq!(DetectionMode::Image.form_field(), "image");
        assert_eq!(DetectionMode::Video.form_field(), "video");
    }
}
