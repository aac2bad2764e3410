//! Profiles: the diacritic tables, caesura markers and stress policy for
//! one writing convention
//!
//! Built-in profiles are embedded TOML files parsed once per process.
//! External profiles use the same format and are validated on load.

pub mod loader;
pub mod types;

pub use loader::{get_profile_config, list_available_profiles};
pub use types::{
    CaesuraConfig, FoldingPair, MetadataConfig, ProfileConfig, StressConfig, VowelConfig,
};

use std::fmt;
use std::path::Path;
use std::sync::Arc;

use super::classifier::{DiacriticClassifier, VowelClassifier, VowelTables};
use super::error::DomainError;
use super::normalizer::Normalizer;
use super::policy::{LinePolicy, StressScope};

/// Runtime form of a profile, ready for annotation
#[derive(Clone)]
pub struct Profile {
    code: String,
    name: String,
    classifier: Arc<dyn VowelClassifier>,
    normalizer: Normalizer,
    policy: LinePolicy,
    scope: StressScope,
}

impl fmt::Debug for Profile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Profile")
            .field("code", &self.code)
            .field("name", &self.name)
            .field("caesura_markers", &self.normalizer.caesura_markers())
            .field("policy", &self.policy)
            .field("scope", &self.scope)
            .finish_non_exhaustive()
    }
}

impl Profile {
    /// Load a built-in profile by code
    pub fn from_code(code: &str) -> Result<Self, DomainError> {
        let config = get_profile_config(code)?;
        Self::from_config(config)
    }

    /// Load a profile from an external TOML file
    pub fn from_file(path: &Path, profile_code: Option<&str>) -> Result<Self, DomainError> {
        let config = Self::read_config(path, profile_code)?;
        Self::from_config(&config)
    }

    /// Read and validate an external profile without compiling it
    pub fn read_config(
        path: &Path,
        profile_code: Option<&str>,
    ) -> Result<ProfileConfig, DomainError> {
        let content = std::fs::read_to_string(path).map_err(|e| {
            DomainError::ConfigurationError(format!(
                "Failed to read file '{}': {}",
                path.display(),
                e
            ))
        })?;

        let mut config: ProfileConfig = toml::from_str(&content).map_err(|e| {
            DomainError::ConfigurationError(format!(
                "Failed to parse TOML from '{}': {}",
                path.display(),
                e
            ))
        })?;

        if let Some(code) = profile_code {
            config.metadata.code = code.to_string();
        }

        config.validate()?;
        Ok(config)
    }

    /// Compile a profile from configuration
    pub fn from_config(config: &ProfileConfig) -> Result<Self, DomainError> {
        config.validate()?;

        let tables = VowelTables::from_config(&config.vowels);

        Ok(Self {
            code: config.metadata.code.clone(),
            name: config.metadata.name.clone(),
            classifier: Arc::new(DiacriticClassifier::new(tables)),
            normalizer: Normalizer::new(config.caesura.markers.clone()),
            policy: config.stress.policy,
            scope: config.stress.scope,
        })
    }

    /// Use a caller-supplied classifier in place of the table-driven one
    pub fn with_classifier(mut self, classifier: Arc<dyn VowelClassifier>) -> Self {
        self.classifier = classifier;
        self
    }

    /// Profile code
    pub fn code(&self) -> &str {
        &self.code
    }

    /// Human-readable name
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Shared vowel classifier
    pub fn classifier(&self) -> &Arc<dyn VowelClassifier> {
        &self.classifier
    }

    /// Line normalizer with this profile's caesura markers
    pub fn normalizer(&self) -> &Normalizer {
        &self.normalizer
    }

    /// Default line policy
    pub fn policy(&self) -> LinePolicy {
        self.policy
    }

    /// Default stress scope
    pub fn scope(&self) -> StressScope {
        self.scope
    }
}
