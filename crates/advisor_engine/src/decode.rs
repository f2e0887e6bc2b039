use advisor_core::AnalysisResult;
use serde::Deserialize;
use serde_json::Value;

use crate::{AnalysisError, FailureKind};

#[derive(Debug, Deserialize)]
struct SuccessEnvelope {
    data: AnalysisResult,
}

/// Decode a 2xx body: the analysis lives under `data`.
pub fn decode_success(body: &[u8]) -> Result<AnalysisResult, AnalysisError> {
    serde_json::from_slice::<SuccessEnvelope>(body)
        .map(|envelope| envelope.data)
        .map_err(|err| AnalysisError::new(FailureKind::InvalidResponse, err.to_string()))
}

/// Pull a non-empty string `message` out of an error body, if there is one.
pub fn extract_error_message(body: &[u8]) -> Option<String> {
    let value: Value = serde_json::from_slice(body).ok()?;
    value
        .get("message")
        .and_then(Value::as_str)
        .filter(|message| !message.is_empty())
        .map(ToOwned::to_owned)
}
