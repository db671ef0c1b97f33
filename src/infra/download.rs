//! HTTP download functionality
//!
//! Downloads archives into memory with progress reporting. No retry and no
//! checksum policy: failures propagate to the caller unmodified.

use futures::StreamExt;
use indicatif::{ProgressBar, ProgressStyle};
use std::path::Path;
use std::time::Duration;

use crate::error::{DownloadError, ExtractionError};
use crate::infra::extract;

/// Metadata about a completed download
#[derive(Debug, Clone)]
pub struct DownloadMetadata {
    /// URL the payload was fetched from
    pub url: String,
    /// HTTP status code of the response
    pub status: u16,
    /// Content length advertised by the server, if any
    pub content_length: Option<u64>,
}

/// Fetches archives over HTTP and extracts them
#[derive(Debug, Clone)]
pub struct ArchiveFetcher {
    /// HTTP client
    client: reqwest::Client,
    /// Render progress bars while downloading/extracting
    show_progress: bool,
}

impl ArchiveFetcher {
    /// Create a new fetcher with progress reporting enabled
    pub fn new() -> Self {
        Self::with_progress(true)
    }

    /// Create a fetcher, choosing whether progress bars are rendered
    pub fn with_progress(show_progress: bool) -> Self {
        Self {
            client: reqwest::Client::builder()
                .timeout(Duration::from_secs(300))
                .connect_timeout(Duration::from_secs(30))
                .build()
                .unwrap_or_else(|_| reqwest::Client::new()),
            show_progress,
        }
    }

    /// Download a resource into memory, reporting progress under `label`
    ///
    /// # Returns
    /// Response metadata and the complete payload.
    pub async fn download_with_progress(
        &self,
        url: &str,
        label: &str,
    ) -> Result<(DownloadMetadata, Vec<u8>), DownloadError> {
        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|e| DownloadError::NetworkError {
                url: url.to_string(),
                error: e.to_string(),
            })?;

        let status = response.status();
        if !status.is_success() {
            return Err(DownloadError::HttpStatus {
                url: url.to_string(),
                status: status.as_u16(),
            });
        }

        let content_length = response.content_length();
        let bar = self.download_bar(content_length.unwrap_or(0), label);

        let mut payload: Vec<u8> = Vec::with_capacity(
            usize::try_from(content_length.unwrap_or(0)).unwrap_or(0),
        );
        let mut stream = response.bytes_stream();

        while let Some(chunk_result) = stream.next().await {
            let chunk = chunk_result.map_err(|e| DownloadError::NetworkError {
                url: url.to_string(),
                error: e.to_string(),
            })?;

            payload.extend_from_slice(&chunk);
            if let Some(bar) = &bar {
                bar.set_position(payload.len() as u64);
            }
        }

        if let Some(bar) = &bar {
            bar.finish_and_clear();
        }

        tracing::debug!(url = %url, size = payload.len(), "downloaded archive");

        Ok((
            DownloadMetadata {
                url: url.to_string(),
                status: status.as_u16(),
                content_length,
            },
            payload,
        ))
    }

    /// Extract a downloaded payload into `dest_dir`
    ///
    /// The archive format is chosen from the `archive_name` suffix, and the
    /// extracted root directory is renamed to `extracted_name`.
    pub fn extract(
        &self,
        payload: &[u8],
        archive_name: &str,
        dest_dir: &Path,
        extracted_name: &str,
        label: &str,
    ) -> Result<(), ExtractionError> {
        let spinner = self.extract_spinner(&format!("{label} {archive_name}"));

        let result = extract::extract_archive(payload, archive_name, dest_dir, extracted_name);

        if let Some(spinner) = &spinner {
            spinner.finish_and_clear();
        }

        result
    }

    fn download_bar(&self, total: u64, label: &str) -> Option<ProgressBar> {
        if !self.show_progress {
            return None;
        }
        let pb = ProgressBar::new(total);
        pb.set_style(
            ProgressStyle::default_bar()
                .template("{spinner:.green} {msg} [{bar:40.cyan/blue}] {bytes}/{total_bytes} ({eta})")
                .expect("Invalid progress bar template")
                .progress_chars("█▓▒░"),
        );
        pb.set_message(label.to_string());
        Some(pb)
    }

    fn extract_spinner(&self, message: &str) -> Option<ProgressBar> {
        if !self.show_progress {
            return None;
        }
        let pb = ProgressBar::new_spinner();
        pb.set_style(
            ProgressStyle::default_spinner()
                .tick_chars("⠋⠙⠹⠸⠼⠴⠦⠧⠇⠏")
                .template("{spinner:.blue} {msg}")
                .expect("Invalid spinner template"),
        );
        pb.set_message(message.to_string());
        pb.enable_steady_tick(Duration::from_millis(80));
        Some(pb)
    }
}

impl Default for ArchiveFetcher {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wiremock::matchers::{method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    #[tokio::test]
    async fn test_download_success() {
        let mock_server = MockServer::start().await;
        let content = b"archive payload";

        Mock::given(method("GET"))
            .and(path("/zig.tar.xz"))
            .respond_with(ResponseTemplate::new(200).set_body_bytes(content.to_vec()))
            .mount(&mock_server)
            .await;

        let fetcher = ArchiveFetcher::with_progress(false);
        let (metadata, payload) = fetcher
            .download_with_progress(&format!("{}/zig.tar.xz", mock_server.uri()), "Downloading")
            .await
            .unwrap();

        assert_eq!(metadata.status, 200);
        assert_eq!(payload, content);
    }

    #[tokio::test]
    async fn test_download_http_error_status() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/missing.tar.xz"))
            .respond_with(ResponseTemplate::new(404))
            .mount(&mock_server)
            .await;

        let fetcher = ArchiveFetcher::with_progress(false);
        let err = fetcher
            .download_with_progress(
                &format!("{}/missing.tar.xz", mock_server.uri()),
                "Downloading",
            )
            .await
            .unwrap_err();

        assert!(matches!(
            err,
            DownloadError::HttpStatus { status: 404, .. }
        ));
    }

    #[tokio::test]
    async fn test_download_unreachable_server() {
        let fetcher = ArchiveFetcher::with_progress(false);
        // Reserved port with nothing listening
        let err = fetcher
            .download_with_progress("http://127.0.0.1:1/zig.tar.xz", "Downloading")
            .await
            .unwrap_err();

        assert!(matches!(err, DownloadError::NetworkError { .. }));
    }
}
