use serde::{Deserialize, Serialize};
use std::collections::HashSet;

use crate::domain::classifier::VowelTables;
use crate::domain::error::DomainError;
use crate::domain::policy::{LinePolicy, StressScope};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProfileConfig {
    pub metadata: MetadataConfig,
    pub vowels: VowelConfig,
    #[serde(default)]
    pub caesura: CaesuraConfig,
    #[serde(default)]
    pub stress: StressConfig,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MetadataConfig {
    pub code: String,
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VowelConfig {
    pub base: Vec<char>,
    pub long: Vec<char>,
    #[serde(default)]
    pub short: Vec<char>,
    #[serde(default)]
    pub folding: Vec<FoldingPair>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct FoldingPair {
    pub from: char,
    pub to: char,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CaesuraConfig {
    #[serde(default = "default_caesura_markers")]
    pub markers: Vec<String>,
}

impl Default for CaesuraConfig {
    fn default() -> Self {
        Self {
            markers: default_caesura_markers(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct StressConfig {
    #[serde(default)]
    pub policy: LinePolicy,
    #[serde(default)]
    pub scope: StressScope,
}

fn default_caesura_markers() -> Vec<String> {
    vec!["‖".to_string(), "|".to_string()]
}

impl ProfileConfig {
    /// Validate configuration
    pub fn validate(&self) -> Result<(), DomainError> {
        if self.metadata.code.trim().is_empty() {
            return Err(DomainError::InvalidProfile(
                "profile code must not be empty".to_string(),
            ));
        }

        if self.vowels.base.is_empty() {
            return Err(DomainError::InvalidProfile(
                "no base vowels defined".to_string(),
            ));
        }

        if self.vowels.long.is_empty() {
            return Err(DomainError::InvalidProfile(
                "no long vowels defined".to_string(),
            ));
        }

        let long: HashSet<char> = self.vowels.long.iter().copied().collect();
        if let Some(ch) = self.vowels.short.iter().find(|ch| long.contains(ch)) {
            return Err(DomainError::InvalidProfile(format!(
                "'{ch}' is listed as both long and short"
            )));
        }

        if let Some(pair) = self.vowels.folding.iter().find(|p| !p.to.is_alphabetic()) {
            return Err(DomainError::InvalidProfile(format!(
                "'{}' folds to '{}', which is not a letter",
                pair.from, pair.to
            )));
        }

        let tables = VowelTables::from_config(&self.vowels);
        if let Some(ch) = self
            .vowels
            .long
            .iter()
            .chain(&self.vowels.short)
            .find(|&&ch| !tables.is_base_vowel(tables.base_letter(ch)))
        {
            return Err(DomainError::InvalidProfile(format!(
                "'{ch}' does not reduce to a base vowel"
            )));
        }

        if self.caesura.markers.iter().any(|m| m.is_empty()) {
            return Err(DomainError::InvalidProfile(
                "caesura markers must not be empty".to_string(),
            ));
        }

        // A marker made of letters would be cut out of words
        if let Some(marker) = self
            .caesura
            .markers
            .iter()
            .find(|m| m.chars().any(char::is_alphabetic))
        {
            return Err(DomainError::InvalidProfile(format!(
                "caesura marker '{marker}' contains letters"
            )));
        }

        Ok(())
    }
}
