use serde::{Deserialize, Serialize};

/// A remote call failed. Transport problems and non-success statuses are
/// handled identically by callers: log and move on.
#[derive(Debug, thiserror::Error)]
pub enum BackendError {
    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),
    #[error("backend returned {0}")]
    Status(reqwest::StatusCode),
}

#[derive(Debug, Deserialize)]
struct AudioFilesResponse {
    files: Vec<String>,
}

#[derive(Debug, Serialize)]
struct PlayAudioRequest {
    file: String,
}

/// HTTP client for the recorder service.
///
/// Cheap to clone; clones share the underlying connection pool.
#[derive(Debug, Clone)]
pub struct BackendClient {
    http: reqwest::Client,
    base_url: String,
}

impl BackendClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self {
            http: reqwest::Client::new(),
            base_url,
        }
    }

    fn url(&self, path: &str) -> String {
        format!("{}{path}", self.base_url)
    }

    fn check(resp: reqwest::Response) -> Result<reqwest::Response, BackendError> {
        if resp.status().is_success() {
            Ok(resp)
        } else {
            Err(BackendError::Status(resp.status()))
        }
    }

    /// Fetch the current list of captured audio files, in server order.
    pub async fn list_files(&self) -> Result<Vec<String>, BackendError> {
        let resp = self.http.get(self.url("/api/audio-files")).send().await?;
        let resp = Self::check(resp)?;
        let body: AudioFilesResponse = resp.json().await?;
        Ok(body.files)
    }

    /// Ask the service to begin sound-activated capture.
    pub async fn start_recording(&self) -> Result<(), BackendError> {
        let resp = self.http.post(self.url("/api/start-recording")).send().await?;
        Self::check(resp)?;
        Ok(())
    }

    /// Ask the service to end capture.
    pub async fn stop_recording(&self) -> Result<(), BackendError> {
        let resp = self.http.post(self.url("/api/stop-recording")).send().await?;
        Self::check(resp)?;
        Ok(())
    }

    /// Ask the service to play `file` on its own output. The response body
    /// is ignored.
    pub async fn play_audio(&self, file: &str) -> Result<(), BackendError> {
        let body = PlayAudioRequest {
            file: file.to_string(),
        };
        let resp = self
            .http
            .post(self.url("/api/play-audio"))
            .json(&body)
            .send()
            .await?;
        Self::check(resp)?;
        Ok(())
    }
}
