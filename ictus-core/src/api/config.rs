//! Configuration API for annotation

use std::path::Path;

use crate::api::{Error, Result};
use crate::domain::profile::{get_profile_config, Profile, ProfileConfig};
use crate::domain::{LinePolicy, StressMarker, StressScope};

/// Default configuration constants
pub mod defaults {
    /// Built-in profile used when none is requested
    pub const PROFILE: &str = "la";
}

/// Where the profile comes from
#[derive(Debug, Clone, PartialEq)]
pub enum ProfileSource {
    /// Embedded profile, by code
    BuiltIn(String),
    /// Caller-provided (e.g. loaded from an external file)
    Custom(Box<ProfileConfig>),
}

/// Annotation configuration
#[derive(Debug, Clone)]
pub struct Config {
    pub(crate) profile: ProfileSource,
    pub(crate) marker: StressMarker,
    pub(crate) policy: Option<LinePolicy>,
    pub(crate) scope: Option<StressScope>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            profile: ProfileSource::BuiltIn(defaults::PROFILE.to_string()),
            marker: StressMarker::default(),
            policy: None,
            scope: None,
        }
    }
}

impl Config {
    /// Create a configuration builder
    pub fn builder() -> ConfigBuilder {
        ConfigBuilder::default()
    }

    /// Profile source
    pub fn profile(&self) -> &ProfileSource {
        &self.profile
    }

    /// Stress marker inserted into the output
    pub fn marker(&self) -> &StressMarker {
        &self.marker
    }

    /// Line policy override, if any
    pub fn policy(&self) -> Option<LinePolicy> {
        self.policy
    }

    /// Stress scope override, if any
    pub fn scope(&self) -> Option<StressScope> {
        self.scope
    }

    /// Validate the configuration
    pub(crate) fn validate(&self) -> Result<()> {
        if self.marker.open().is_empty() || self.marker.close().is_empty() {
            return Err(Error::Configuration(
                "stress marker needs both opening and closing text".into(),
            ));
        }

        match &self.profile {
            ProfileSource::BuiltIn(code) if code.trim().is_empty() => Err(Error::Configuration(
                "profile code must not be empty".into(),
            )),
            ProfileSource::BuiltIn(code) => {
                get_profile_config(code)?;
                Ok(())
            }
            ProfileSource::Custom(config) => {
                config.validate()?;
                Ok(())
            }
        }
    }

    /// Compile the configured profile
    pub(crate) fn load_profile(&self) -> Result<Profile> {
        let profile = match &self.profile {
            ProfileSource::BuiltIn(code) => Profile::from_code(code)?,
            ProfileSource::Custom(config) => Profile::from_config(config)?,
        };
        Ok(profile)
    }
}

/// Fluent builder for configuration
#[derive(Debug, Default)]
pub struct ConfigBuilder {
    profile: Option<ProfileSource>,
    marker: Option<StressMarker>,
    policy: Option<LinePolicy>,
    scope: Option<StressScope>,
}

impl ConfigBuilder {
    /// Create a new configuration builder
    pub fn new() -> Self {
        Self::default()
    }

    /// Use a built-in profile by code
    pub fn profile(mut self, code: impl Into<String>) -> Self {
        self.profile = Some(ProfileSource::BuiltIn(code.into()));
        self
    }

    /// Use a caller-provided profile
    pub fn custom_profile(mut self, config: ProfileConfig) -> Self {
        self.profile = Some(ProfileSource::Custom(Box::new(config)));
        self
    }

    /// Load a profile from an external TOML file
    pub fn profile_file(
        mut self,
        path: impl AsRef<Path>,
        profile_code: Option<&str>,
    ) -> Result<Self> {
        let config = Profile::read_config(path.as_ref(), profile_code)?;
        self.profile = Some(ProfileSource::Custom(Box::new(config)));
        Ok(self)
    }

    /// Set the stress marker
    pub fn marker(mut self, marker: StressMarker) -> Self {
        self.marker = Some(marker);
        self
    }

    /// Override the profile's line policy
    pub fn policy(mut self, policy: LinePolicy) -> Self {
        self.policy = Some(policy);
        self
    }

    /// Override the profile's stress scope
    pub fn scope(mut self, scope: StressScope) -> Self {
        self.scope = Some(scope);
        self
    }

    /// Build the configuration
    pub fn build(self) -> Result<Config> {
        let defaults = Config::default();
        let config = Config {
            profile: self.profile.unwrap_or(defaults.profile),
            marker: self.marker.unwrap_or(defaults.marker),
            policy: self.policy,
            scope: self.scope,
        };

        config.validate()?;
        Ok(config)
    }
}
