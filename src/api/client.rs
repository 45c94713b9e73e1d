//! Reqwest-backed detection service client.

use super::DetectionApi;
use super::types::{DateRange, ImageDetection, MapPoints, VideoDetection, classify_response};
use crate::config::ApiConfig;
use crate::constants::endpoints;
use crate::detect::{DetectionMode, SelectedFile};
use crate::error::{Error, Result};
use async_trait::async_trait;
use reqwest::Client;
use reqwest::multipart::{Form, Part};
use std::time::Duration;
use tracing::debug;

/// HTTP client for the detection service.
#[derive(Debug, Clone)]
pub struct HttpApi {
    client: Client,
    base_url: String,
}

impl HttpApi {
    /// Build a client from API configuration.
    pub fn from_config(config: &ApiConfig) -> Result<Self> {
        let client = Client::builder()
            .connect_timeout(Duration::from_secs(config.connect_timeout_secs))
            .timeout(Duration::from_secs(config.request_timeout_secs))
            .build()
            .map_err(|e| Error::Internal {
                message: format!("Failed to create HTTP client: {e}"),
            })?;

        let base_url = config.base_url.trim_end_matches('/').to_string();
        debug!(
            "detection client ready (wire contract v{}, base {base_url})",
            super::WIRE_VERSION
        );

        Ok(Self { client, base_url })
    }

    fn url(&self, path: &str) -> String {
        format!("{}{path}", self.base_url)
    }

    /// POST a single file as a multipart form and parse the typed payload.
    async fn post_multipart<T: serde::de::DeserializeOwned>(
        &self,
        path: &str,
        field: &'static str,
        file: &SelectedFile,
    ) -> Result<T> {
        let url = self.url(path);
        debug!("POST {url} ({field}: {}, {} bytes)", file.name, file.bytes.len());

        let part = Part::bytes(file.bytes.clone())
            .file_name(file.name.clone())
            .mime_str(&file.mime)
            .map_err(|e| Error::Internal {
                message: format!("Failed to build multipart body: {e}"),
            })?;
        let form = Form::new().part(field, part);

        let response = self
            .client
            .post(&url)
            .multipart(form)
            .send()
            .await
            .map_err(|e| Error::RequestFailed {
                url: url.clone(),
                source: Box::new(e),
            })?;

        let status = response.status().as_u16();
        let body = response.text().await.map_err(|e| Error::RequestFailed {
            url: url.clone(),
            source: Box::new(e),
        })?;

        classify_response(&url, status, &body)
    }
}

#[async_trait]
impl DetectionApi for HttpApi {
    async fn detect_image(&self, file: &SelectedFile) -> Result<ImageDetection> {
        let mode = DetectionMode::Image;
        self.post_multipart(mode.endpoint(), mode.form_field(), file)
            .await
    }

    async fn detect_video(&self, file: &SelectedFile) -> Result<VideoDetection> {
        let mode = DetectionMode::Video;
        self.post_multipart(mode.endpoint(), mode.form_field(), file)
            .await
    }

    async fn map_points(&self, range: Option<&DateRange>) -> Result<MapPoints> {
        let url = self.url(endpoints::MAP_POINTS);
        let query = range.map(DateRange::query_pairs).unwrap_or_default();
        debug!("GET {url} ({} query pairs)", query.len());

        let response = self
            .client
            .get(&url)
            .query(&query)
            .send()
            .await
            .map_err(|e| Error::RequestFailed {
                url: url.clone(),
                source: Box::new(e),
            })?;

        let status = response.status().as_u16();
        let body = response.text().await.map_err(|e| Error::RequestFailed {
            url: url.clone(),
            source: Box::new(e),
        })?;

        classify_response(&url, status, &body)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_base_url_trailing_slash_stripped() {
        let config = ApiConfig {
            base_url: "http://localhost:5001/".to_string(),
            ..ApiConfig::default()
        };
        let api = HttpApi::from_config(&config).unwrap();
        assert_eq!(api.url("/api/detect"), "http://localhost:5001/api/detect");
    }

    #[test]
    fn test_default_config_builds_client() {
        assert!(HttpApi::from_config(&ApiConfig::default()).is_ok());
    }
}
