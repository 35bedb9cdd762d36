//! Blocking HTTP transport for the AutoTrain backend.

use std::time::Duration;

use serde_json::Value;

use crate::error::AutotrainError;

/// Default backend base URL.
pub const DEFAULT_API_BASE: &str = "https://api.autotrain.huggingface.co";

/// Default request timeout, in seconds.
pub const DEFAULT_TIMEOUT_SECS: u64 = 60;

/// Something that can POST a JSON payload and return the decoded JSON reply.
pub trait HttpPost {
    fn post_json(&self, path: &str, payload: &Value, token: &str) -> Result<Value, AutotrainError>;
}

/// Connection settings for the backend.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BackendConfig {
    pub api_base: String,
    pub timeout: Duration,
}

impl Default for BackendConfig {
    fn default() -> Self {
        Self {
            api_base: DEFAULT_API_BASE.to_string(),
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
        }
    }
}

/// ureq-backed client for the AutoTrain backend API.
pub struct BackendClient {
    config: BackendConfig,
    agent: ureq::Agent,
}

impl BackendClient {
    pub fn new(config: BackendConfig) -> Self {
        let agent_config = ureq::Agent::config_builder()
            .timeout_global(Some(config.timeout))
            .build();
        let agent: ureq::Agent = agent_config.into();

        Self { config, agent }
    }

    /// Joins the base URL and an absolute endpoint path.
    pub fn endpoint_url(&self, path: &str) -> Result<url::Url, AutotrainError> {
        let joined = format!(
            "{}/{}",
            self.config.api_base.trim_end_matches('/'),
            path.trim_start_matches('/')
        );
        url::Url::parse(&joined).map_err(|source| AutotrainError::Http {
            url: joined.clone(),
            message: format!("invalid URL: {source}"),
        })
    }
}

impl HttpPost for BackendClient {
    fn post_json(&self, path: &str, payload: &Value, token: &str) -> Result<Value, AutotrainError> {
        let url = self.endpoint_url(path)?;
        log::debug!("POST {url}");

        let http_err = |message: String| AutotrainError::Http {
            url: url.to_string(),
            message,
        };

        let mut response = self
            .agent
            .post(url.as_str())
            .header("Authorization", &format!("Bearer {token}"))
            .send_json(payload)
            .map_err(|source| http_err(source.to_string()))?;

        response
            .body_mut()
            .read_json::<Value>()
            .map_err(|source| http_err(format!("invalid JSON body: {source}")))
    }
}
