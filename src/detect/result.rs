//! Normalized detection results and message synthesis.

use super::mode::DetectionMode;
use crate::api::{ImageDetection, VideoDetection};
use crate::constants::confidence;
use crate::error::{Error, Result};
use base64::{Engine as _, engine::general_purpose::STANDARD as B64};

/// Lifecycle of a single detection request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RequestState {
    /// No request issued yet, or the session was reset.
    #[default]
    Idle,
    /// A request has been issued and has not settled.
    InFlight,
    /// The last request completed with a result.
    Succeeded,
    /// The last request completed with an error.
    Failed,
}

/// User-facing failure description for a completed submission.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ErrorInfo {
    /// Human-readable message derived from the transport or server failure.
    pub message: String,
}

impl ErrorInfo {
    /// Wrap a message.
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

/// Normalized outcome of a completed detection, tagged by the mode active at
/// submission time.
#[derive(Debug, Clone, PartialEq)]
pub enum DetectionResult {
    /// Image detection outcome.
    Image {
        /// Whether a bear was found.
        bear_detected: bool,
        /// Highest detection confidence, clamped to 0.0..=1.0.
        confidence: f32,
        /// Decoded annotated JPEG, when the backend returned one.
        processed_image: Option<Vec<u8>>,
        /// Message synthesized client-side; server wording is not trusted.
        message: String,
    },
    /// Video analysis outcome (terminal summary only).
    Video {
        /// Whether the backend dispatched a warning alert.
        alert_sent: bool,
        /// Longest run of consecutive bear-positive footage, in seconds.
        max_consecutive_duration_seconds: f64,
    },
}

impl DetectionResult {
    /// The mode this result belongs to.
    pub fn mode(&self) -> DetectionMode {
        match self {
            Self::Image { .. } => DetectionMode::Image,
            Self::Video { .. } => DetectionMode::Video,
        }
    }

    /// Map an image wire payload into a normalized result.
    ///
    /// Decodes the base64 annotated image and synthesizes the user-facing
    /// message from the detection flag and confidence.
    pub fn from_image(wire: ImageDetection) -> Result<Self> {
        let clamped = wire.confidence.clamp(confidence::MIN, confidence::MAX);
        let processed_image = wire
            .processed_image
            .map(|data| B64.decode(data).map_err(|e| Error::ImageDecode { source: e }))
            .transpose()?;

        Ok(Self::Image {
            bear_detected: wire.bear_detected,
            confidence: clamped,
            processed_image,
            message: image_message(wire.bear_detected, clamped),
        })
    }

    /// Map a video wire payload into a normalized result.
    pub fn from_video(wire: VideoDetection) -> Self {
        Self::Video {
            alert_sent: wire.alert_sent,
            max_consecutive_duration_seconds: wire.max_consecutive_duration_seconds,
        }
    }
}

/// Synthesize the image-mode result message.
///
/// Deterministic given `(bear_detected, confidence)`; confidence is rounded
/// to the nearest whole percent.
pub fn image_message(bear_detected: bool, confidence: f32) -> String {
    if bear_detected {
        #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
        let percent = (f64::from(confidence) * 100.0).round() as u32;
        format!("Formosan black bear detected with {percent}% confidence")
    } else {
        "No Formosan black bear detected in the image".to_string()
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::float_cmp, clippy::panic)]
mod tests {
    use super::*;

    #[test]
    fn test_image_message_rounds_to_whole_percent() {
        assert!(image_message(true, 0.873).contains("87%"));
        assert!(image_message(true, 0.925).contains("93%"));
        assert!(image_message(true, 1.0).contains("100%"));
    }

    #[test]
    fn test_image_message_negative_case_has_no_percent() {
        let message = image_message(false, 0.4);
        assert!(!message.contains('%'));
        assert!(message.contains("No"));
    }

    #[test]
    fn test_from_image_decodes_processed_image() {
        let wire = ImageDetection {
            bear_detected: true,
            confidence: 0.92,
            processed_image: Some("aGVsbG8=".to_string()),
        };
        let result = DetectionResult::from_image(wire).unwrap();
        match result {
            DetectionResult::Image {
                bear_detected,
                confidence,
                processed_image,
                message,
            } => {
                assert!(bear_detected);
                assert_eq!(confidence, 0.92);
                assert_eq!(processed_image.as_deref(), Some(b"hello".as_slice()));
                assert!(message.contains("92%"));
            }
            DetectionResult::Video { .. } => panic!("wrong variant"),
        }
    }

    #[test]
    fn test_from_image_rejects_bad_base64() {
        let wire = ImageDetection {
            bear_detected: true,
            confidence: 0.5,
            processed_image: Some("not!!base64".to_string()),
        };
        assert!(matches!(
            DetectionResult::from_image(wire),
            Err(Error::ImageDecode { .. })
        ));
    }

    #[test]
    fn test_from_image_clamps_confidence() {
        let wire = ImageDetection {
            bear_detected: true,
            confidence: 1.7,
            processed_image: None,
        };
        let result = DetectionResult::from_image(wire).unwrap();
        match result {
            DetectionResult::Image { confidence, .. } => assert_eq!(confidence, 1.0),
            DetectionResult::Video { .. } => panic!("wrong variant"),
        }
    }

    #[test]
    fn test_result_mode_tag() {
        let video = DetectionResult::from_video(VideoDetection {
            alert_sent: false,
            max_consecutive_duration_seconds: 1.4,
        });
        assert_eq!(video.mode(), DetectionMode::Video);
    }
}
