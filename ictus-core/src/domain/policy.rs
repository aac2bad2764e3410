//! Per-line decision whether stress annotation applies

use serde::{Deserialize, Serialize};
use std::fmt;

use super::normalizer::Normalizer;

/// Which lines receive stress marks
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum LinePolicy {
    /// A reference line containing a caesura marker is exempt
    #[default]
    Caesura,
    /// Every second line (odd zero-based index) is exempt
    Alternate,
    /// No line is exempt
    EveryLine,
}

impl LinePolicy {
    /// Decide whether the line at `index` should be stressed
    pub fn should_stress(
        &self,
        index: usize,
        reference_line: &str,
        normalizer: &Normalizer,
    ) -> bool {
        match self {
            LinePolicy::Caesura => !normalizer.has_caesura(reference_line),
            LinePolicy::Alternate => index % 2 == 0,
            LinePolicy::EveryLine => true,
        }
    }

    /// Kebab-case name, as used in profiles and on the command line
    pub fn as_str(&self) -> &'static str {
        match self {
            LinePolicy::Caesura => "caesura",
            LinePolicy::Alternate => "alternate",
            LinePolicy::EveryLine => "every-line",
        }
    }
}

impl fmt::Display for LinePolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Which words of a stressed line are eligible
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum StressScope {
    /// Every aligned word
    #[default]
    EveryWord,
    /// Only the first word of the line
    FirstWord,
}

impl StressScope {
    /// Whether the word at `word_index` (zero-based, within the line) is eligible
    pub fn includes(&self, word_index: usize) -> bool {
        match self {
            StressScope::EveryWord => true,
            StressScope::FirstWord => word_index == 0,
        }
    }

    /// Kebab-case name, as used in profiles and on the command line
    pub fn as_str(&self) -> &'static str {
        match self {
            StressScope::EveryWord => "every-word",
            StressScope::FirstWord => "first-word",
        }
    }
}

impl fmt::Display for StressScope {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn normalizer() -> Normalizer {
        Normalizer::new(vec!["‖".to_string(), "|".to_string()])
    }

    #[test]
    fn test_caesura_policy() {
        let n = normalizer();
        assert!(LinePolicy::Caesura.should_stress(0, "ārma virumque", &n));
        assert!(!LinePolicy::Caesura.should_stress(0, "ārma ‖ virumque", &n));
        assert!(!LinePolicy::Caesura.should_stress(3, "ārma || virumque", &n));
    }

    #[test]
    fn test_alternate_policy_ignores_markers() {
        let n = normalizer();
        assert!(LinePolicy::Alternate.should_stress(0, "ārma ‖ virumque", &n));
        assert!(!LinePolicy::Alternate.should_stress(1, "ārma virumque", &n));
        assert!(LinePolicy::Alternate.should_stress(2, "ārma virumque", &n));
    }

    #[test]
    fn test_every_line_policy() {
        let n = normalizer();
        assert!(LinePolicy::EveryLine.should_stress(1, "ārma ‖ virumque", &n));
    }

    #[test]
    fn test_scope() {
        assert!(StressScope::EveryWord.includes(5));
        assert!(StressScope::FirstWord.includes(0));
        assert!(!StressScope::FirstWord.includes(1));
    }

    #[test]
    fn test_policy_deserialize_kebab_case() {
        #[derive(Deserialize)]
        struct Wrapper {
            policy: LinePolicy,
            scope: StressScope,
        }

        let parsed: Wrapper =
            toml::from_str("policy = \"every-line\"\nscope = \"first-word\"").unwrap();
        assert_eq!(parsed.policy, LinePolicy::EveryLine);
        assert_eq!(parsed.scope, StressScope::FirstWord);
        assert_eq!(parsed.policy.to_string(), "every-line");
    }
}
