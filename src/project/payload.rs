//! Wire types for the project-creation endpoint.

use serde::{Deserialize, Serialize};

use super::derive::JobParams;

/// Body POSTed to `/projects/create`.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct CreateProjectPayload {
    pub username: String,
    pub proj_name: String,
    pub task: u32,
    pub config: ProjectConfig,
}

/// The `config` section of [`CreateProjectPayload`].
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct ProjectConfig {
    pub advanced: bool,
    pub language: String,
    pub max_models: u64,
    /// Serialized as `null` when absent.
    pub hub_model: Option<String>,
    pub params: Vec<JobParams>,
}

/// Reply from `/projects/create`.
#[derive(Clone, Debug, Deserialize, PartialEq, Eq)]
pub struct CreateProjectResponse {
    pub proj_name: String,
    pub created: bool,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn payload_matches_wire_shape() {
        let payload = CreateProjectPayload {
            username: "alice".to_string(),
            proj_name: "demo".to_string(),
            task: 1,
            config: ProjectConfig {
                advanced: true,
                language: "en".to_string(),
                max_models: 5,
                hub_model: None,
                params: vec![],
            },
        };

        assert_eq!(
            serde_json::to_value(&payload).expect("serialize"),
            json!({
                "username": "alice",
                "proj_name": "demo",
                "task": 1,
                "config": {
                    "advanced": true,
                    "language": "en",
                    "max_models": 5,
                    "hub_model": null,
                    "params": []
                }
            })
        );
    }

    #[test]
    fn response_ignores_extra_fields() {
        let response: CreateProjectResponse = serde_json::from_value(json!({
            "proj_name": "demo",
            "created": true,
            "id": 123
        }))
        .expect("parse");
        assert_eq!(response.proj_name, "demo");
        assert!(response.created);
    }
}
