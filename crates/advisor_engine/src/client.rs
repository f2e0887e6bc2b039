use std::time::Duration;

use advisor_core::{AnalysisResult, Submission};
use advisor_logging::{advisor_debug, advisor_info, advisor_warn};
use futures_util::StreamExt;
use url::Url;

use crate::decode::{decode_success, extract_error_message};
use crate::form::{build_form, part_names};
use crate::{AnalysisError, FailureKind};

pub const DEFAULT_ENDPOINT: &str = "http://localhost:8000";
pub const ANALYZE_PATH: &str = "analyze-profile";

#[derive(Debug, Clone)]
pub struct ClientSettings {
    /// Base URL of the analysis service; the analyze path is appended.
    pub endpoint: String,
    pub connect_timeout: Duration,
    /// `None` waits for the service indefinitely.
    pub request_timeout: Option<Duration>,
    pub max_response_bytes: u64,
}

impl Default for ClientSettings {
    fn default() -> Self {
        Self {
            endpoint: DEFAULT_ENDPOINT.to_string(),
            connect_timeout: Duration::from_secs(10),
            request_timeout: None,
            max_response_bytes: 5 * 1024 * 1024,
        }
    }
}

#[async_trait::async_trait]
pub trait AnalysisClient: Send + Sync {
    async fn analyze(&self, submission: &Submission) -> Result<AnalysisResult, AnalysisError>;
}

#[derive(Debug, Clone)]
pub struct ReqwestAnalysisClient {
    settings: ClientSettings,
}

impl ReqwestAnalysisClient {
    pub fn new(settings: ClientSettings) -> Self {
        Self { settings }
    }

    /// Full URL requests are posted to.
    pub fn analyze_url(&self) -> Result<Url, AnalysisError> {
        let mut base = self.settings.endpoint.trim().to_string();
        if !base.ends_with('/') {
            base.push('/');
        }
        let url = Url::parse(&base)
            .and_then(|base| base.join(ANALYZE_PATH))
            .map_err(|err| AnalysisError::new(FailureKind::InvalidEndpoint, err.to_string()))?;
        match url.scheme() {
            "http" | "https" => Ok(url),
            scheme => Err(AnalysisError::new(
                FailureKind::InvalidEndpoint,
                format!("unsupported scheme {scheme}"),
            )),
        }
    }

    fn build_client(&self) -> Result<reqwest::Client, AnalysisError> {
        let mut builder = reqwest::Client::builder().connect_timeout(self.settings.connect_timeout);
        if let Some(timeout) = self.settings.request_timeout {
            builder = builder.timeout(timeout);
        }
        builder
            .build()
            .map_err(|err| AnalysisError::new(FailureKind::Network, err.to_string()))
    }

    async fn read_body(&self, response: reqwest::Response) -> Result<Vec<u8>, AnalysisError> {
        let max_bytes = self.settings.max_response_bytes;
        if let Some(content_len) = response.content_length() {
            if content_len > max_bytes {
                return Err(AnalysisError::new(
                    FailureKind::TooLarge {
                        max_bytes,
                        actual: Some(content_len),
                    },
                    "response too large",
                ));
            }
        }

        let mut body = Vec::new();
        let mut stream = response.bytes_stream();
        while let Some(chunk) = stream.next().await {
            let chunk = chunk.map_err(map_reqwest_error)?;
            let next_len = body.len() as u64 + chunk.len() as u64;
            if next_len > max_bytes {
                return Err(AnalysisError::new(
                    FailureKind::TooLarge {
                        max_bytes,
                        actual: Some(next_len),
                    },
                    "response too large",
                ));
            }
            body.extend_from_slice(&chunk);
        }
        Ok(body)
    }
}

#[async_trait::async_trait]
impl AnalysisClient for ReqwestAnalysisClient {
    async fn analyze(&self, submission: &Submission) -> Result<AnalysisResult, AnalysisError> {
        let url = self.analyze_url()?;
        let client = self.build_client()?;
        let form = build_form(submission).await?;
        advisor_info!("POST {} parts={:?}", url, part_names(submission));

        let response = client
            .post(url)
            .multipart(form)
            .send()
            .await
            .map_err(map_reqwest_error)?;

        let status = response.status();
        advisor_debug!("Analysis response status {}", status);

        if !status.is_success() {
            let server_message = match self.read_body(response).await {
                Ok(body) => extract_error_message(&body),
                Err(err) => {
                    advisor_warn!("Could not read error body: {}", err);
                    None
                }
            };
            return Err(
                AnalysisError::new(FailureKind::HttpStatus(status.as_u16()), status.to_string())
                    .with_server_message(server_message),
            );
        }

        let body = self.read_body(response).await?;
        decode_success(&body).map_err(|err| err.with_server_message(extract_error_message(&body)))
    }
}

fn map_reqwest_error(err: reqwest::Error) -> AnalysisError {
    if err.is_timeout() {
        return AnalysisError::new(FailureKind::Timeout, err.to_string());
    }
    AnalysisError::new(FailureKind::Network, err.to_string())
}
