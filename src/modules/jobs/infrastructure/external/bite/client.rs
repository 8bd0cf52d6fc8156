use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use std::time::Duration;
use tracing::debug;

use crate::modules::jobs::domain::JobsSettings;
use crate::shared::errors::{AppError, AppResult};

use super::dto::JobAdsResponse;
use super::query::{build_query, query_string};

/// Production advertisements endpoint.
pub const BITE_API_URL: &str = "https://jobs.b-ite.com/adsapi/jobads";

#[derive(Debug, Clone)]
pub struct BiteClientConfig {
    pub base_url: String,
    /// Request timeout; the transport default is deliberately not relied on.
    pub timeout_secs: u64,
    pub user_agent: String,
}

impl Default for BiteClientConfig {
    fn default() -> Self {
        Self {
            base_url: BITE_API_URL.to_string(),
            timeout_secs: 30,
            user_agent: "bite-jobs/0.1".to_string(),
        }
    }
}

/// Seam over the b-ite advertisements API.
///
/// Failures surface as typed errors here; the fail-soft policy (degrade to
/// an empty listing) lives in the service, so direct callers can still
/// tell "upstream unreachable" apart from "no jobs available".
#[async_trait]
pub trait JobAdsApi: Send + Sync {
    async fn fetch_job_ads(&self, settings: &JobsSettings) -> AppResult<JobAdsResponse>;
}

pub struct BiteClient {
    client: Client,
    base_url: String,
}

impl BiteClient {
    pub fn new() -> AppResult<Self> {
        Self::with_config(BiteClientConfig::default())
    }

    pub fn with_config(config: BiteClientConfig) -> AppResult<Self> {
        let client = create_http_client(config.timeout_secs, &config.user_agent)?;

        Ok(Self {
            client,
            base_url: config.base_url,
        })
    }
}

/// Create an HTTP client with consistent timeout and user agent.
fn create_http_client(timeout_secs: u64, user_agent: &str) -> AppResult<Client> {
    Client::builder()
        .timeout(Duration::from_secs(timeout_secs))
        .user_agent(user_agent)
        .build()
        .map_err(|e| AppError::ExternalServiceError(format!("Failed to create HTTP client: {}", e)))
}

/// Handle HTTP response status codes consistently.
fn handle_response_status(status: StatusCode) -> AppResult<()> {
    match status {
        StatusCode::OK => Ok(()),
        StatusCode::TOO_MANY_REQUESTS => Err(AppError::RateLimitError(
            "b-ite rate limit exceeded".to_string(),
        )),
        StatusCode::NOT_FOUND => Err(AppError::NotFound("Resource not found".to_string())),
        StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN => Err(AppError::Unauthorized(
            "Not authorized to access the b-ite API".to_string(),
        )),
        StatusCode::BAD_REQUEST => {
            Err(AppError::ApiError("Bad request to the b-ite API".to_string()))
        }
        status if status.is_server_error() => Err(AppError::ExternalServiceError(
            "b-ite service unavailable".to_string(),
        )),
        status => Err(AppError::ApiError(format!(
            "Unexpected status code from b-ite: {}",
            status
        ))),
    }
}

#[async_trait]
impl JobAdsApi for BiteClient {
    async fn fetch_job_ads(&self, settings: &JobsSettings) -> AppResult<JobAdsResponse> {
        let params = build_query(settings);
        debug!(
            "Fetching job ads from {}?{}",
            self.base_url,
            query_string(&params)
        );

        let response = self.client.get(&self.base_url).query(&params).send().await?;
        handle_response_status(response.status())?;

        let body = response.text().await?;
        decode_response(&body)
    }
}

/// Decode a response body; a malformed body is a serialization error.
fn decode_response(body: &str) -> AppResult<JobAdsResponse> {
    Ok(serde_json::from_str(body)?)
}
