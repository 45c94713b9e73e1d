//! Terminal rendering of detection results.

use crate::constants::ANNOTATED_SUFFIX;
use crate::detect::DetectionResult;
use crate::error::{Error, Result};
use std::path::{Path, PathBuf};

/// Print a completed detection result.
pub fn report_result(result: &DetectionResult) {
    match result {
        DetectionResult::Image {
            bear_detected,
            confidence,
            processed_image,
            message,
        } => {
            if *bear_detected {
                println!("⚠ {message}");
            } else {
                println!("✓ {message}");
            }
            println!("  Confidence: {confidence:.2}");
            if processed_image.is_some() {
                println!("  Annotated image available (use --save-annotated to write it)");
            }
        }
        DetectionResult::Video {
            alert_sent,
            max_consecutive_duration_seconds,
        } => {
            if *alert_sent {
                println!("⚠ Bear warning triggered; an alert was sent");
            } else {
                println!("✓ No bear warning triggered");
            }
            println!(
                "  Longest consecutive bear presence: {max_consecutive_duration_seconds:.1}s"
            );
        }
    }
}

/// Default annotated-image path for an input file.
///
/// `photo.png` becomes `photo.detected.jpg` in the same directory.
pub fn annotated_path_for(input: &Path) -> PathBuf {
    let stem = input
        .file_stem()
        .map_or_else(|| "output".to_string(), |s| s.to_string_lossy().into_owned());
    input.with_file_name(format!("{stem}{ANNOTATED_SUFFIX}"))
}

/// Write the annotated JPEG returned by the service.
pub fn save_annotated_image(bytes: &[u8], path: &Path) -> Result<()> {
    std::fs::write(path, bytes).map_err(|e| Error::OutputWrite {
        path: path.to_path_buf(),
        source: e,
    })
}
