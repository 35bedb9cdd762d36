//! Credential and identity resolution against the Hugging Face Hub.

use std::time::Duration;

use hf_hub::Cache;
use serde_json::Value;

use crate::error::AutotrainError;

/// Default Hub endpoint used for `whoami` lookups.
pub const DEFAULT_HUB_ENDPOINT: &str = "https://huggingface.co";

/// Picks the token to use: an explicit value wins, otherwise the token stored
/// by `huggingface-cli login` (honouring `HF_HOME`).
pub fn resolve_token(explicit: Option<&str>) -> Option<String> {
    explicit
        .map(str::trim)
        .filter(|token| !token.is_empty())
        .map(str::to_string)
        .or_else(|| Cache::from_env().token())
}

/// Asks the Hub who owns `token` and returns the account name.
pub fn whoami(hub_endpoint: &str, token: &str) -> Result<String, AutotrainError> {
    let url = format!("{}/api/whoami-v2", hub_endpoint.trim_end_matches('/'));
    log::debug!("GET {url}");

    let config = ureq::Agent::config_builder()
        .timeout_global(Some(Duration::from_secs(10)))
        .build();
    let agent: ureq::Agent = config.into();

    let mut response = agent
        .get(&url)
        .header("Authorization", &format!("Bearer {token}"))
        .call()
        .map_err(|source| AutotrainError::Auth(format!("{url}: {source}")))?;

    let body = response
        .body_mut()
        .read_json::<Value>()
        .map_err(|source| AutotrainError::Auth(format!("invalid whoami response: {source}")))?;

    username_from_whoami(&body)
}

fn username_from_whoami(body: &Value) -> Result<String, AutotrainError> {
    body.get("name")
        .and_then(Value::as_str)
        .filter(|name| !name.is_empty())
        .map(str::to_string)
        .ok_or_else(|| AutotrainError::Auth("whoami response has no account name".to_string()))
}
