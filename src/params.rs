//! Loading job parameters from files and `key=value` arguments.

use std::fs;
use std::path::Path;

use serde_json::Value;

use crate::error::AutotrainError;
use crate::project::JobParams;

/// Parses a `key=value` argument.
///
/// The value is read as JSON when it parses (`5`, `true`, `[1,2]`), otherwise
/// it is kept as a plain string.
pub fn parse_param_pair(arg: &str) -> Result<(String, Value), AutotrainError> {
    let (key, raw) = arg
        .split_once('=')
        .ok_or_else(|| AutotrainError::InvalidParamArg(arg.to_string()))?;

    let key = key.trim();
    if key.is_empty() {
        return Err(AutotrainError::InvalidParamArg(arg.to_string()));
    }

    let value = serde_json::from_str(raw).unwrap_or_else(|_| Value::String(raw.to_string()));
    Ok((key.to_string(), value))
}

/// Builds one job-parameter set from `key=value` arguments. Later keys win.
pub fn params_from_pairs<S: AsRef<str>>(pairs: &[S]) -> Result<JobParams, AutotrainError> {
    let mut params = JobParams::new();
    for pair in pairs {
        let (key, value) = parse_param_pair(pair.as_ref())?;
        params.insert(key, value);
    }
    Ok(params)
}

/// Reads job-parameter sets from a JSON or YAML file.
///
/// `.yaml`/`.yml` files are parsed as YAML, everything else as JSON. The top
/// level is either a single mapping or a list of mappings.
pub fn read_job_params(path: &Path) -> Result<Vec<JobParams>, AutotrainError> {
    let text = fs::read_to_string(path)?;
    let parse_err = |message: String| AutotrainError::ParamsParse {
        path: path.to_path_buf(),
        message,
    };

    let is_yaml = path
        .extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| ext.eq_ignore_ascii_case("yaml") || ext.eq_ignore_ascii_case("yml"))
        .unwrap_or(false);

    let value: Value = if is_yaml {
        serde_yaml::from_str(&text).map_err(|source| parse_err(source.to_string()))?
    } else {
        serde_json::from_str(&text).map_err(|source| parse_err(source.to_string()))?
    };

    job_params_from_value(value).map_err(parse_err)
}

fn job_params_from_value(value: Value) -> Result<Vec<JobParams>, String> {
    match value {
        Value::Object(map) => Ok(vec![map]),
        Value::Array(items) => items
            .into_iter()
            .enumerate()
            .map(|(idx, item)| match item {
                Value::Object(map) => Ok(map),
                other => Err(format!("entry {idx} is not a mapping: {other}")),
            })
            .collect(),
        other => Err(format!("expected a mapping or a list of mappings, found {other}")),
    }
}
