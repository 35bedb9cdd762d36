//! Derivation of implicit project fields from job parameters.
//!
//! When a single job-parameter set is supplied without a hub model, the
//! language and model-count keys are lifted out of that set into top-level
//! project fields. The caller's parameters are never mutated; a cleaned copy
//! is returned instead.

use serde_json::{Map, Value};

use crate::error::AutotrainError;
use crate::languages::UNKNOWN_LANGUAGE;

/// A single job-parameter set.
pub type JobParams = Map<String, Value>;

pub const SOURCE_LANGUAGE_KEY: &str = "source_language";
pub const TARGET_LANGUAGE_KEY: &str = "target_language";
pub const MAX_MODELS_KEY: &str = "max_models";

/// Model count used when none is derived.
pub const DEFAULT_MAX_MODELS: u64 = 1;

/// Fields derived from the job parameters, plus the cleaned parameter sets.
#[derive(Clone, Debug, PartialEq)]
pub struct DerivedConfig {
    pub language: String,
    pub max_models: u64,
    pub params: Vec<JobParams>,
}

/// Computes `language`, `max_models` and the cleaned parameter sets.
///
/// # Errors
/// - [`AutotrainError::InvalidJobParams`] if a hub model is given without job
///   parameters, or a consumed key has the wrong type.
/// - [`AutotrainError::MissingMaxModels`] if the single parameter set names a
///   `source_language` but no `max_models`.
pub fn derive_job_config(
    hub_model: Option<&str>,
    job_params: &[JobParams],
) -> Result<DerivedConfig, AutotrainError> {
    if hub_model.is_some() && job_params.is_empty() {
        return Err(AutotrainError::InvalidJobParams(
            "job parameters are required when a hub model is specified".to_string(),
        ));
    }

    let single = match job_params {
        [only] if hub_model.is_none() => only,
        _ => {
            return Ok(DerivedConfig {
                language: UNKNOWN_LANGUAGE.to_string(),
                max_models: DEFAULT_MAX_MODELS,
                params: job_params.to_vec(),
            })
        }
    };

    let mut entry = single.clone();
    // Captured before any removal so the max_models guard sees the original set.
    let has_source = entry.contains_key(SOURCE_LANGUAGE_KEY);
    let has_target = entry.contains_key(TARGET_LANGUAGE_KEY);

    let language = match (has_source, has_target) {
        (true, false) => string_param(&mut entry, SOURCE_LANGUAGE_KEY)?,
        (true, true) => {
            let source = string_param(&mut entry, SOURCE_LANGUAGE_KEY)?;
            let target = string_param(&mut entry, TARGET_LANGUAGE_KEY)?;
            format!("{target}2{source}")
        }
        _ => UNKNOWN_LANGUAGE.to_string(),
    };

    let max_models = match entry.remove(MAX_MODELS_KEY) {
        Some(value) => parse_max_models(&value)?,
        None if has_source => return Err(AutotrainError::MissingMaxModels),
        None => DEFAULT_MAX_MODELS,
    };

    log::debug!("derived language={language} max_models={max_models}");

    Ok(DerivedConfig {
        language,
        max_models,
        params: vec![entry],
    })
}

fn string_param(entry: &mut JobParams, key: &str) -> Result<String, AutotrainError> {
    match entry.remove(key) {
        Some(Value::String(value)) => Ok(value),
        Some(other) => Err(AutotrainError::InvalidJobParams(format!(
            "{key} must be a string, got {other}"
        ))),
        None => Err(AutotrainError::InvalidJobParams(format!("{key} is missing"))),
    }
}

fn parse_max_models(value: &Value) -> Result<u64, AutotrainError> {
    let parsed = match value {
        Value::Number(number) => number.as_u64(),
        Value::String(text) => text.trim().parse::<u64>().ok(),
        _ => None,
    };

    parsed.ok_or_else(|| {
        AutotrainError::InvalidJobParams(format!(
            "{MAX_MODELS_KEY} must be a non-negative integer, got {value}"
        ))
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn params(value: Value) -> JobParams {
        match value {
            Value::Object(map) => map,
            other => panic!("expected object, got {other}"),
        }
    }

    #[test]
    fn source_language_only() {
        let input = vec![params(json!({"source_language": "en", "max_models": 5}))];
        let derived = derive_job_config(None, &input).expect("derive");

        assert_eq!(derived.language, "en");
        assert_eq!(derived.max_models, 5);
        assert!(!derived.params[0].contains_key("source_language"));
        assert!(!derived.params[0].contains_key("max_models"));
    }

    #[test]
    fn source_and_target_language_pair_target_first() {
        let input = vec![params(json!({
            "source_language": "en",
            "target_language": "fr",
            "max_models": 3,
            "num_epochs": 2
        }))];
        let derived = derive_job_config(None, &input).expect("derive");

        assert_eq!(derived.language, "fr2en");
        assert_eq!(derived.max_models, 3);
        assert_eq!(derived.params, vec![params(json!({"num_epochs": 2}))]);
    }

    #[test]
    fn source_without_max_models_fails() {
        let input = vec![params(json!({"source_language": "en"}))];
        let err = derive_job_config(None, &input).expect_err("should fail");
        assert!(matches!(err, AutotrainError::MissingMaxModels));
    }

    #[test]
    fn pair_without_max_models_fails() {
        let input = vec![params(json!({"source_language": "en", "target_language": "de"}))];
        let err = derive_job_config(None, &input).expect_err("should fail");
        assert!(matches!(err, AutotrainError::MissingMaxModels));
    }

    #[test]
    fn empty_params_default() {
        let derived = derive_job_config(None, &[]).expect("derive");
        assert_eq!(derived.language, "unk");
        assert_eq!(derived.max_models, 1);
        assert!(derived.params.is_empty());
    }

    #[test]
    fn hub_model_without_params_fails() {
        let err = derive_job_config(Some("org/model"), &[]).expect_err("should fail");
        assert!(matches!(err, AutotrainError::InvalidJobParams(_)));
    }

    #[test]
    fn hub_model_leaves_params_untouched() {
        let input = vec![params(json!({"source_language": "en", "max_models": 4}))];
        let derived = derive_job_config(Some("org/model"), &input).expect("derive");

        assert_eq!(derived.language, "unk");
        assert_eq!(derived.max_models, 1);
        assert_eq!(derived.params, input);
    }

    #[test]
    fn multiple_sets_are_not_derived() {
        let input = vec![
            params(json!({"source_language": "en"})),
            params(json!({"source_language": "de"})),
        ];
        let derived = derive_job_config(None, &input).expect("derive");

        assert_eq!(derived.language, "unk");
        assert_eq!(derived.max_models, 1);
        assert_eq!(derived.params, input);
    }

    #[test]
    fn unpaired_target_language_is_kept() {
        let input = vec![params(json!({"target_language": "fr", "max_models": 2}))];
        let derived = derive_job_config(None, &input).expect("derive");

        assert_eq!(derived.language, "unk");
        assert_eq!(derived.max_models, 2);
        assert_eq!(derived.params, vec![params(json!({"target_language": "fr"}))]);
    }

    #[test]
    fn no_language_no_max_models_defaults() {
        let input = vec![params(json!({"lr": 0.001}))];
        let derived = derive_job_config(None, &input).expect("derive");

        assert_eq!(derived.language, "unk");
        assert_eq!(derived.max_models, 1);
        assert_eq!(derived.params, input);
    }

    #[test]
    fn caller_input_is_not_mutated() {
        let input = vec![params(json!({"source_language": "en", "max_models": 5}))];
        let snapshot = input.clone();
        derive_job_config(None, &input).expect("derive");
        assert_eq!(input, snapshot);
    }

    #[test]
    fn max_models_accepts_integer_strings() {
        let input = vec![params(json!({"source_language": "en", "max_models": "7"}))];
        let derived = derive_job_config(None, &input).expect("derive");
        assert_eq!(derived.max_models, 7);
    }

    #[test]
    fn max_models_rejects_non_integers() {
        for bad in [json!(-1), json!(2.5), json!("many"), json!(null)] {
            let input = vec![params(json!({"max_models": bad}))];
            let err = derive_job_config(None, &input).expect_err("should fail");
            assert!(matches!(err, AutotrainError::InvalidJobParams(_)));
        }
    }

    #[test]
    fn non_string_language_is_rejected() {
        let input = vec![params(json!({"source_language": 42, "max_models": 1}))];
        let err = derive_job_config(None, &input).expect_err("should fail");
        match err {
            AutotrainError::InvalidJobParams(message) => {
                assert!(message.contains("source_language"));
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }
}
