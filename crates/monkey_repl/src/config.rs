//! REPL options and their JSON config file.
//!
//! Every field has a default, so an empty object (or no file at all) gives
//! the classic behaviour: a `>> ` prompt and one plain-text token per line.

use crate::error::ReplError;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// The prompt printed before each line is read.
pub const PROMPT: &str = ">> ";

/// How tokens are written.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// `Kind "literal"`, one token per line.
    #[default]
    Text,
    /// One JSON object per token.
    Json,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ReplOptions {
    pub prompt: String,
    pub format: OutputFormat,
    /// Append each token's byte span in text output.
    pub show_spans: bool,
    /// Report invalid characters after each line's tokens.
    pub show_diagnostics: bool,
    /// Highlight illegal tokens with ANSI colours.
    pub color: bool,
}

impl Default for ReplOptions {
    fn default() -> Self {
        Self {
            prompt: PROMPT.to_string(),
            format: OutputFormat::Text,
            show_spans: false,
            show_diagnostics: false,
            color: false,
        }
    }
}

/// Parse REPL options from a JSON string.
pub fn parse_options(content: &str) -> Result<ReplOptions, serde_json::Error> {
    serde_json::from_str(content)
}

/// Load REPL options from a JSON file.
pub fn load_options(path: &Path) -> Result<ReplOptions, ReplError> {
    let content = std::fs::read_to_string(path).map_err(|source| ReplError::ConfigRead {
        path: path.to_path_buf(),
        source,
    })?;
    let options = parse_options(&content).map_err(|source| ReplError::ConfigParse {
        path: path.to_path_buf(),
        source,
    })?;
    tracing::debug!(path = %path.display(), ?options, "loaded repl options");
    Ok(options)
}
