//! Parse phase: webview JSON → document model.

pub mod types;

pub use types::*;

use thiserror::Error;

/// Failure at the JSON boundary.
///
/// Everything past this point is diagnosed through the
/// `NormalizationContext` instead of being returned as an error.
#[derive(Debug, Error)]
pub enum ParseError {
    #[error("Failed to parse workflow JSON: {0}")]
    Json(#[from] serde_json::Error),
}

/// Deserialize a workflow JSON string into a `Workflow` document.
pub fn parse(json: &str) -> Result<Workflow, ParseError> {
    Ok(serde_json::from_str(json)?)
}
