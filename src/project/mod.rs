//! AutoTrain project requests.
//!
//! A [`ProjectRequest`] holds raw, user-supplied parameters. [`Project::new`]
//! validates it and derives the implicit fields; [`Project::create`] builds the
//! payload and submits it exactly once.

pub mod derive;
pub mod payload;

pub use derive::{derive_job_config, DerivedConfig, JobParams};
pub use payload::{CreateProjectPayload, CreateProjectResponse, ProjectConfig};

use serde_json::Value;

use crate::error::AutotrainError;
use crate::http::HttpPost;
use crate::languages::{self, UNKNOWN_LANGUAGE};
use crate::tasks;

/// Backend path for project creation.
pub const CREATE_PROJECT_PATH: &str = "/projects/create";

/// Raw parameters for a new project, before validation.
#[derive(Clone, Debug, Default)]
pub struct ProjectRequest {
    pub token: Option<String>,
    pub name: String,
    pub username: String,
    pub task: String,
    pub hub_model: Option<String>,
    pub job_params: Vec<JobParams>,
}

/// A validated project request, ready to be submitted.
#[derive(Debug)]
pub struct Project {
    token: String,
    name: String,
    username: String,
    task: String,
    hub_model: Option<String>,
    job_params: Vec<JobParams>,
    language: String,
    max_models: u64,
}

impl Project {
    /// Validates `request` and derives `language` and `max_models`.
    ///
    /// # Errors
    /// [`AutotrainError::MissingCredential`], [`AutotrainError::InvalidJobParams`]
    /// or [`AutotrainError::MissingMaxModels`].
    pub fn new(request: ProjectRequest) -> Result<Self, AutotrainError> {
        let token = request
            .token
            .filter(|token| !token.trim().is_empty())
            .ok_or(AutotrainError::MissingCredential)?;

        let derived = derive_job_config(request.hub_model.as_deref(), &request.job_params)?;

        Ok(Self {
            token,
            name: request.name,
            username: request.username,
            task: request.task,
            hub_model: request.hub_model,
            job_params: derived.params,
            language: derived.language,
            max_models: derived.max_models,
        })
    }

    /// Replaces the owner, e.g. once it has been looked up from the token.
    pub fn with_username(mut self, username: String) -> Self {
        self.username = username;
        self
    }

    pub fn token(&self) -> &str {
        &self.token
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn language(&self) -> &str {
        &self.language
    }

    pub fn max_models(&self) -> u64 {
        self.max_models
    }

    pub fn job_params(&self) -> &[JobParams] {
        &self.job_params
    }

    /// Resolves the task and language and assembles the outbound payload.
    ///
    /// # Errors
    /// [`AutotrainError::UnknownTask`] or [`AutotrainError::UnsupportedLanguage`].
    pub fn payload(&self) -> Result<CreateProjectPayload, AutotrainError> {
        let task_id = tasks::task_id(&self.task).ok_or_else(|| AutotrainError::UnknownTask {
            task: self.task.clone(),
            valid: tasks::task_names(),
        })?;

        let language = if self.hub_model.is_some() {
            UNKNOWN_LANGUAGE.to_string()
        } else {
            languages::normalize(&self.language)
        };

        if !languages::is_supported(&language) {
            return Err(AutotrainError::UnsupportedLanguage(language));
        }

        Ok(CreateProjectPayload {
            username: self.username.clone(),
            proj_name: self.name.clone(),
            task: task_id,
            config: ProjectConfig {
                advanced: true,
                language,
                max_models: self.max_models,
                hub_model: self.hub_model.clone(),
                params: self.job_params.clone(),
            },
        })
    }

    /// Submits the project and returns the created project name.
    ///
    /// All validation runs before the request is sent. Consumes the project:
    /// a request is submitted at most once.
    ///
    /// # Errors
    /// Payload errors from [`Project::payload`], transport errors from
    /// `client`, [`AutotrainError::MalformedResponse`] or
    /// [`AutotrainError::ProjectAlreadyExists`].
    pub fn create<C: HttpPost + ?Sized>(self, client: &C) -> Result<String, AutotrainError> {
        let payload = self.payload()?;
        let body = serde_json::to_value(&payload)?;

        log::info!("{body}");
        let reply = client.post_json(CREATE_PROJECT_PATH, &body, &self.token)?;

        interpret_response(reply)
    }
}

fn interpret_response(reply: Value) -> Result<String, AutotrainError> {
    let response: CreateProjectResponse = serde_json::from_value(reply)
        .map_err(|source| AutotrainError::MalformedResponse(source.to_string()))?;

    if response.created {
        log::info!("created project {}", response.proj_name);
        Ok(response.proj_name)
    } else {
        Err(AutotrainError::ProjectAlreadyExists {
            proj_name: response.proj_name,
        })
    }
}
