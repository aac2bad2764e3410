//! The annotation pass

use std::time::Instant;

use crate::api::output::{
    AnnotatedLine, LineStatus, Output, ProcessingMetadata, ProcessingStats, Segment,
    WordAnnotation, WordOutcome,
};
use crate::api::{Config, Input, Result};
use crate::domain::tokenizer::words;
use crate::domain::{
    locate_stress, target_grapheme, tokenize, LinePolicy, Profile, StressMarker, StressScope,
    VowelClassifier,
};

/// Applies reference stress positions onto plain text
///
/// Immutable once built; share it freely between threads.
pub struct Annotator {
    profile: Profile,
    marker: StressMarker,
    policy: LinePolicy,
    scope: StressScope,
    config: Config,
}

impl Annotator {
    /// Create an annotator with the default configuration
    pub fn new() -> Self {
        Self::with_config(Config::default()).expect("Default config should always be valid")
    }

    /// Create an annotator with custom configuration
    pub fn with_config(config: Config) -> Result<Self> {
        config.validate()?;
        let profile = config.load_profile()?;

        Ok(Self {
            policy: config.policy.unwrap_or_else(|| profile.policy()),
            scope: config.scope.unwrap_or_else(|| profile.scope()),
            marker: config.marker.clone(),
            profile,
            config,
        })
    }

    /// Create an annotator for a built-in profile
    pub fn with_profile(code: impl Into<String>) -> Result<Self> {
        let config = Config::builder().profile(code).build()?;
        Self::with_config(config)
    }

    /// Get the current configuration
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Compiled profile in use
    pub fn profile(&self) -> &Profile {
        &self.profile
    }

    /// Effective line policy
    pub fn policy(&self) -> LinePolicy {
        self.policy
    }

    /// Effective stress scope
    pub fn scope(&self) -> StressScope {
        self.scope
    }

    /// Read both inputs and annotate
    pub fn process(&self, reference: Input, input: Input) -> Result<Output> {
        let reference = reference.into_text()?;
        let input = input.into_text()?;
        Ok(self.annotate_text(&reference, &input))
    }

    /// Annotate `input` with the stress positions of `reference`, keeping
    /// the per-line detail
    pub fn annotate_text(&self, reference: &str, input: &str) -> Output {
        let start = Instant::now();

        let reference_lines: Vec<&str> = reference.split('\n').collect();
        let input_lines: Vec<&str> = input.split('\n').collect();
        let line_count = reference_lines.len().max(input_lines.len());

        let lines: Vec<AnnotatedLine> = (0..line_count)
            .map(|index| {
                self.annotate_line(
                    index,
                    reference_lines.get(index).copied(),
                    input_lines.get(index).copied(),
                )
            })
            .collect();

        let stats = ProcessingStats::from_lines(&lines);
        log::debug!(
            "annotated {} lines: {} of {} words stressed, {} fallbacks",
            stats.lines,
            stats.stressed_words,
            stats.words,
            stats.fallback_words
        );

        Output {
            lines,
            metadata: ProcessingMetadata {
                duration: start.elapsed(),
                profile: self.profile.code().to_string(),
                stats,
            },
        }
    }

    /// Annotate and return only the text
    pub fn annotate(&self, reference: &str, input: &str) -> String {
        self.annotate_text(reference, input).text()
    }

    /// Annotate one line pair
    pub fn annotate_line(
        &self,
        index: usize,
        reference: Option<&str>,
        input: Option<&str>,
    ) -> AnnotatedLine {
        let normalizer = self.profile.normalizer();
        let classifier = self.profile.classifier().as_ref();

        let reference = reference
            .map(|line| normalizer.normalize_line(line))
            .unwrap_or_default();
        let input = input
            .map(|line| normalizer.normalize_line(&self.marker.strip(line)))
            .unwrap_or_default();

        if reference.is_empty() || input.is_empty() {
            log::trace!("line {index}: no counterpart, passing input through");
            let plain = classifier.strip_diacritics(&input);
            let segments = tokenize(&plain)
                .into_iter()
                .map(|token| {
                    if token.is_word {
                        Segment::Word(plain_word(
                            token.text.to_string(),
                            None,
                            WordOutcome::Unmatched,
                        ))
                    } else {
                        Segment::Text(token.text.to_string())
                    }
                })
                .collect();
            return AnnotatedLine::new(index, LineStatus::Unpaired, segments, &self.marker);
        }

        let should_stress = self.policy.should_stress(index, &reference, normalizer);
        let reference = normalizer.strip_caesura(&reference);
        let reference_tokens = tokenize(&reference);
        let mut reference_words = words(&reference_tokens);

        let mut segments = Vec::new();
        let mut word_index = 0;
        for token in tokenize(&input) {
            let plain = classifier.strip_diacritics(token.text);
            if !token.is_word {
                segments.push(Segment::Text(plain));
                continue;
            }

            let eligible = should_stress && self.scope.includes(word_index);
            let annotation = annotate_word(classifier, plain, reference_words.next(), eligible);
            if annotation.outcome == WordOutcome::VowelMismatch {
                log::debug!(
                    "line {index}: '{}' has too few vowels for reference '{}'",
                    annotation.text,
                    annotation.reference.as_deref().unwrap_or_default()
                );
            }
            segments.push(Segment::Word(annotation));
            word_index += 1;
        }

        let status = if should_stress {
            LineStatus::Annotated
        } else {
            LineStatus::Exempt
        };
        AnnotatedLine::new(index, status, segments, &self.marker)
    }
}

impl Default for Annotator {
    fn default() -> Self {
        Self::new()
    }
}

fn plain_word(text: String, reference: Option<&str>, outcome: WordOutcome) -> WordAnnotation {
    WordAnnotation {
        text,
        reference: reference.map(str::to_string),
        vowel_ordinal: None,
        stressed: None,
        outcome,
    }
}

fn annotate_word(
    classifier: &dyn VowelClassifier,
    plain: String,
    reference: Option<&str>,
    eligible: bool,
) -> WordAnnotation {
    if !eligible {
        return plain_word(plain, reference, WordOutcome::Exempt);
    }
    let Some(reference_word) = reference else {
        return plain_word(plain, None, WordOutcome::Unmatched);
    };
    let Some(ordinal) = locate_stress(classifier, reference_word) else {
        return plain_word(plain, reference, WordOutcome::NoLongVowel);
    };

    let stressed = target_grapheme(classifier, &plain, ordinal);
    WordAnnotation {
        outcome: if stressed.is_some() {
            WordOutcome::Stressed
        } else {
            WordOutcome::VowelMismatch
        },
        text: plain,
        reference: Some(reference_word.to_string()),
        vowel_ordinal: Some(ordinal),
        stressed,
    }
}
