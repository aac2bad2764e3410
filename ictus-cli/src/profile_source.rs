//! Where the CLI takes its vowel profile from

use std::path::PathBuf;

/// Source of the vowel profile
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProfileSource {
    /// Built-in profile by code
    BuiltIn(String),
    /// External configuration file
    External {
        /// Path to the configuration file
        path: PathBuf,
        /// Optional profile code override
        profile_code: Option<String>,
    },
}

impl ProfileSource {
    /// Get the display name for the profile source
    pub fn display_name(&self) -> String {
        match self {
            ProfileSource::BuiltIn(code) => format!("Built-in: {code}"),
            ProfileSource::External { path, profile_code } => match profile_code {
                Some(code) => format!("External: {} (code: {})", path.display(), code),
                None => format!("External: {}", path.display()),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_names() {
        assert_eq!(
            ProfileSource::BuiltIn("la".to_string()).display_name(),
            "Built-in: la"
        );

        let external = ProfileSource::External {
            path: PathBuf::from("profiles/acute.toml"),
            profile_code: Some("la-acute".to_string()),
        };
        assert_eq!(
            external.display_name(),
            "External: profiles/acute.toml (code: la-acute)"
        );
    }
}
