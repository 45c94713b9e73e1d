//! HTTP interface to the remote detection service.

mod client;
mod types;

pub use client::HttpApi;
pub use types::{
    DateRange, ImageDetection, MapPoints, VideoDetection, WIRE_VERSION, WireLocation,
    classify_response,
};

use crate::detect::SelectedFile;
use crate::error::Result;
use async_trait::async_trait;

/// Backend seam for the detection service.
///
/// The production implementation is [`HttpApi`]; tests substitute a fake to
/// exercise the submission workflow without a network.
#[async_trait]
pub trait DetectionApi: Send + Sync {
    /// Submit an image for detection.
    async fn detect_image(&self, file: &SelectedFile) -> Result<ImageDetection>;

    /// Submit a video for analysis.
    async fn detect_video(&self, file: &SelectedFile) -> Result<VideoDetection>;

    /// Fetch historical sighting points, optionally constrained to a date
    /// range.
    async fn map_points(&self, range: Option<&DateRange>) -> Result<MapPoints>;
}
