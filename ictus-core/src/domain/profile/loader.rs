use super::types::ProfileConfig;
use crate::domain::error::DomainError;
use std::collections::HashMap;
use std::sync::OnceLock;

static PROFILE_CONFIGS: OnceLock<Result<HashMap<String, ProfileConfig>, String>> = OnceLock::new();

macro_rules! embed_profile_config {
    ($code:expr, $path:expr) => {
        ($code, include_str!($path))
    };
}

fn load_embedded_configs() -> Result<HashMap<String, ProfileConfig>, DomainError> {
    let mut configs = HashMap::new();

    let embedded_configs = [
        embed_profile_config!("la", "../../../configs/profiles/latin.toml"),
        embed_profile_config!(
            "la-circumflex",
            "../../../configs/profiles/latin_circumflex.toml"
        ),
    ];

    for (code, toml_content) in embedded_configs {
        let config: ProfileConfig = toml::from_str(toml_content).map_err(|e| {
            DomainError::ConfigurationError(format!("Failed to parse {code} profile: {e}"))
        })?;

        if config.metadata.code != code {
            return Err(DomainError::ConfigurationError(format!(
                "Profile code mismatch: expected {}, got {}",
                code, config.metadata.code
            )));
        }

        config.validate()?;
        configs.insert(code.to_string(), config);
    }

    Ok(configs)
}

fn embedded_configs() -> Result<&'static HashMap<String, ProfileConfig>, DomainError> {
    PROFILE_CONFIGS
        .get_or_init(|| load_embedded_configs().map_err(|e| e.to_string()))
        .as_ref()
        .map_err(|msg| DomainError::ConfigurationError(msg.clone()))
}

pub fn get_profile_config(code: &str) -> Result<&'static ProfileConfig, DomainError> {
    embedded_configs()?
        .get(code)
        .ok_or_else(|| DomainError::UnsupportedProfile(code.to_string()))
}

/// Codes of the built-in profiles, sorted
pub fn list_available_profiles() -> Vec<&'static str> {
    let mut codes: Vec<&'static str> = match embedded_configs() {
        Ok(configs) => configs.keys().map(|s| s.as_str()).collect(),
        Err(e) => {
            log::error!("{e}");
            Vec::new()
        }
    };
    codes.sort_unstable();
    codes
}
