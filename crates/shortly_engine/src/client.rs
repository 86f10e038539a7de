use std::time::Duration;

use shortly_logging::{shortly_debug, shortly_info};
use url::Url;

use crate::{FailureKind, ShortenError, ShortenRequest, ShortenResponse};

/// Base URL used when no deployment setting is supplied.
pub const DEFAULT_API_URL: &str = "http://localhost:8080";

#[derive(Debug, Clone)]
pub struct ClientSettings {
    pub base_url: String,
    pub connect_timeout: Duration,
    pub request_timeout: Duration,
}

impl Default for ClientSettings {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_API_URL.to_string(),
            connect_timeout: Duration::from_secs(5),
            request_timeout: Duration::from_secs(10),
        }
    }
}

/// Single-attempt access to the remote shortening service.
#[async_trait::async_trait]
pub trait ShorteningClient: Send + Sync {
    async fn submit(&self, long_url: &str) -> Result<ShortenResponse, ShortenError>;

    /// Whether the service reports itself healthy. Informational only.
    async fn check_health(&self) -> Result<bool, ShortenError>;
}

#[derive(Debug, Clone)]
pub struct ReqwestShorteningClient {
    settings: ClientSettings,
    client: reqwest::Client,
}

impl ReqwestShorteningClient {
    pub fn new(settings: ClientSettings) -> Result<Self, ShortenError> {
        let client = reqwest::Client::builder()
            .connect_timeout(settings.connect_timeout)
            .timeout(settings.request_timeout)
            .build()
            .map_err(|err| ShortenError::new(FailureKind::Network, err.to_string()))?;
        Ok(Self { settings, client })
    }

    pub fn settings(&self) -> &ClientSettings {
        &self.settings
    }

    fn endpoint(&self, path: &str) -> Result<Url, ShortenError> {
        let base = self.settings.base_url.trim_end_matches('/');
        Url::parse(&format!("{base}/{path}"))
            .map_err(|err| ShortenError::new(FailureKind::InvalidEndpoint, err.to_string()))
    }
}

#[async_trait::async_trait]
impl ShorteningClient for ReqwestShorteningClient {
    async fn submit(&self, long_url: &str) -> Result<ShortenResponse, ShortenError> {
        let endpoint = self.endpoint("shorten")?;
        shortly_info!("POST {} url_len={}", endpoint, long_url.len());

        let response = self
            .client
            .post(endpoint)
            .json(&ShortenRequest { url: long_url })
            .send()
            .await
            .map_err(map_reqwest_error)?;

        let status = response.status();
        if !status.is_success() {
            return Err(ShortenError::new(
                FailureKind::HttpStatus(status.as_u16()),
                status.to_string(),
            ));
        }

        let body = response.bytes().await.map_err(map_reqwest_error)?;
        let parsed: ShortenResponse = serde_json::from_slice(&body)
            .map_err(|err| ShortenError::new(FailureKind::MalformedResponse, err.to_string()))?;
        if parsed.short_url.trim().is_empty() {
            return Err(ShortenError::new(
                FailureKind::MalformedResponse,
                "empty short_url",
            ));
        }

        shortly_debug!("shortened url_len={} -> {}", long_url.len(), parsed.short_url);
        Ok(parsed)
    }

    /// Probes `GET {base_url}/health`; `Ok(false)` means the service answered
    /// with a non-2xx status.
    async fn check_health(&self) -> Result<bool, ShortenError> {
        let endpoint = self.endpoint("health")?;
        let response = self
            .client
            .get(endpoint)
            .send()
            .await
            .map_err(map_reqwest_error)?;
        Ok(response.status().is_success())
    }
}

fn map_reqwest_error(err: reqwest::Error) -> ShortenError {
    if err.is_timeout() {
        return ShortenError::new(FailureKind::Timeout, err.to_string());
    }
    ShortenError::new(FailureKind::Network, err.to_string())
}
