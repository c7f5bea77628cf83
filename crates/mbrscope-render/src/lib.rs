//! # mbrscope-render
//!
//! Consumers of the core's [`MbrAnalysisResult`]: plain-text report,
//! annotated hex dump view, and JSON/YAML serialization. Rendering never
//! changes the result; every format is a projection of the same structure.

pub mod text;

use mbrscope_core::MbrAnalysisResult;
use thiserror::Error;

pub use text::{issues, render_hex_dump, render_text, warnings};

/// Rendering error type
#[derive(Error, Debug)]
pub enum RenderError {
    #[error("JSON serialization failed: {0}")]
    Json(#[from] serde_json::Error),

    #[error("YAML serialization failed: {0}")]
    Yaml(#[from] serde_yaml::Error),
}

/// Serialize the full result as pretty-printed JSON
pub fn render_json(result: &MbrAnalysisResult) -> Result<String, RenderError> {
    Ok(serde_json::to_string_pretty(result)?)
}

/// Serialize the full result as YAML
pub fn render_yaml(result: &MbrAnalysisResult) -> Result<String, RenderError> {
    Ok(serde_yaml::to_string(result)?)
}
