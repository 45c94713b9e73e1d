//! MIME type inference for uploads.

use crate::constants::OCTET_STREAM;
use std::path::Path;

/// Guess the MIME type of an upload from its file extension.
///
/// Covers the image and video formats the detection backend accepts; the
/// backend sniffs content anyway, so an unknown extension falls back to
/// `application/octet-stream` rather than failing.
pub fn guess_mime(path: &Path) -> &'static str {
    let extension = path
        .extension()
        .map(|e| e.to_string_lossy().to_lowercase());

    match extension.as_deref() {
        Some("jpg" | "jpeg") => "image/jpeg",
        Some("png") => "image/png",
        Some("gif") => "image/gif",
        Some("bmp") => "image/bmp",
        Some("webp") => "image/webp",
        Some("mp4") => "video/mp4",
        Some("mov") => "video/quicktime",
        Some("avi") => "video/x-msvideo",
        Some("mkv") => "video/x-matroska",
        Some("webm") => "video/webm",
        _ => OCTET_STREAM,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_guess_mime_images() {
        assert_eq!(guess_mime(Path::new("photo.jpg")), "image/jpeg");
        assert_eq!(guess_mime(Path::new("PHOTO.JPEG")), "image/jpeg");
        assert_eq!(guess_mime(Path::new("shot.png")), "image/png");
    }

    #[test]
    fn test_guess_mime_videos() {
        assert_eq!(guess_mime(Path::new("clip.mp4")), "video/mp4");
        assert_eq!(guess_mime(Path::new("clip.MOV")), "video/quicktime");
    }

    #[test]
    fn test_guess_mime_unknown_falls_back() {
        assert_eq!(guess_mime(Path::new("data.bin")), OCTET_STREAM);
        assert_eq!(guess_mime(Path::new("no_extension")), OCTET_STREAM);
    }
}
