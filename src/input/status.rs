//! JSON status collaborator: documents fetched per shift range, holding
//! pre-aggregated equipment state records.

use crate::errors::{AppError, AppResult};
use serde_json::Value;
use std::fs;
use std::path::Path;

/// Extract the record array from a status document. Accepts a bare array
/// or an object carrying it under `data` or `rows`.
pub fn extract_records(json: &str) -> AppResult<Vec<Value>> {
    let root: Value = serde_json::from_str(json)?;

    if let Value::Array(arr) = root {
        return Ok(arr);
    }

    for key in ["data", "rows"] {
        if let Some(Value::Array(arr)) = root.get(key) {
            return Ok(arr.clone());
        }
    }

    Err(AppError::Other(
        "status document has no record array (expected a JSON array, or an object with `data` or `rows`)"
            .to_string(),
    ))
}

pub fn read_status_records(path: &Path) -> AppResult<Vec<Value>> {
    let json = fs::read_to_string(path)?;
    extract_records(&json)
}
