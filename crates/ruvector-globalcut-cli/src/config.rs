//! CLI configuration

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Settings read from a JSON config file; command-line flags win over them
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Vertex name that seeds every phase
    pub start_vertex: Option<String>,
    /// Stop after the first zero-weight phase
    pub stop_at_zero: bool,
    /// Input format (adjacency, matrix)
    pub input_format: String,
    /// Output format (text, json)
    pub output_format: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            start_vertex: None,
            stop_at_zero: false,
            input_format: "adjacency".to_string(),
            output_format: "text".to_string(),
        }
    }
}

impl Config {
    /// Load from `path`, or defaults when no path is given
    pub fn load(path: Option<PathBuf>) -> Result<Self> {
        let Some(path) = path else {
            return Ok(Self::default());
        };

        let text = std::fs::read_to_string(&path)
            .with_context(|| format!("Failed to read config file {}", path.display()))?;
        let config = serde_json::from_str(&text)
            .with_context(|| format!("Failed to parse config file {}", path.display()))?;

        tracing::debug!(path = %path.display(), ?config, "loaded configuration");
        Ok(config)
    }
}
