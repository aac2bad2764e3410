//! Configuration module

use anyhow::{Context, Result};
use ictus_core::{LinePolicy, StressScope};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::commands::annotate::{MarkerStyle, OutputFormat};

/// CLI configuration structure
#[derive(Debug, Deserialize, Serialize, Default)]
pub struct CliConfig {
    /// Annotation configuration
    #[serde(default)]
    pub annotation: AnnotationConfig,

    /// Output configuration
    #[serde(default)]
    pub output: OutputConfig,
}

/// Annotation-related configuration
#[derive(Debug, Deserialize, Serialize)]
#[serde(default)]
pub struct AnnotationConfig {
    /// Built-in profile code
    pub profile: String,

    /// External profile file, used in place of `profile` when set
    pub profile_config: Option<PathBuf>,

    /// Stress marker style
    pub marker: MarkerStyle,

    /// CSS class of the HTML marker
    pub html_class: String,

    /// Line policy override
    pub policy: Option<LinePolicy>,

    /// Stress scope override
    pub scope: Option<StressScope>,
}

impl Default for AnnotationConfig {
    fn default() -> Self {
        Self {
            profile: ictus_core::api::defaults::PROFILE.to_string(),
            profile_config: None,
            marker: MarkerStyle::Html,
            html_class: ictus_core::StressMarker::DEFAULT_CLASS.to_string(),
            policy: None,
            scope: None,
        }
    }
}

/// Output-related configuration
#[derive(Debug, Deserialize, Serialize, Default)]
#[serde(default)]
pub struct OutputConfig {
    /// Default output format
    pub format: OutputFormat,
}

impl CliConfig {
    /// Load configuration from a TOML file
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        toml::from_str(&content)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))
    }
}
