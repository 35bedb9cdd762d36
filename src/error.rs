use std::path::PathBuf;
use thiserror::Error;

/// The main error type for autotrain-client operations.
#[derive(Debug, Error)]
pub enum AutotrainError {
    #[error("No credentials found. Please login using `huggingface-cli login` or pass --token")]
    MissingCredential,

    #[error("Invalid job parameters: {0}")]
    InvalidJobParams(String),

    #[error("Please specify max_models in job params when using an AutoTrain model")]
    MissingMaxModels,

    #[error("Invalid task '{task}'. Please choose one of: {}", valid.join(", "))]
    UnknownTask { task: String, valid: Vec<String> },

    #[error("Unsupported language '{0}'. Run 'autotrain languages' for the supported list")]
    UnsupportedLanguage(String),

    #[error("Project with name {proj_name} already exists")]
    ProjectAlreadyExists { proj_name: String },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse job params from {path}: {message}")]
    ParamsParse { path: PathBuf, message: String },

    #[error("Invalid --param '{0}' (expected key=value)")]
    InvalidParamArg(String),

    #[error("HTTP request to {url} failed: {message}")]
    Http { url: String, message: String },

    #[error("Failed to encode payload: {0}")]
    PayloadEncode(#[from] serde_json::Error),

    #[error("Malformed response from backend: {0}")]
    MalformedResponse(String),

    #[error("Authentication failed: {0}")]
    Auth(String),
}
