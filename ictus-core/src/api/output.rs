//! Annotation results

use std::time::Duration;

use crate::domain::{render_word, verbatim, Escape, StressMarker};

/// Annotated text with per-line detail
#[derive(Debug, Clone)]
#[cfg_attr(feature = "json", derive(serde::Serialize))]
pub struct Output {
    /// One entry per processed line pair
    pub lines: Vec<AnnotatedLine>,
    /// Processing metadata
    pub metadata: ProcessingMetadata,
}

/// Result for one line pair
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "json", derive(serde::Serialize))]
pub struct AnnotatedLine {
    /// Zero-based line index
    pub index: usize,
    /// How the line was treated
    pub status: LineStatus,
    /// Verbatim text and words, in order
    pub segments: Vec<Segment>,
    /// Rendered line with the configured marker
    pub text: String,
}

/// How a line was treated
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "json", derive(serde::Serialize))]
#[cfg_attr(feature = "json", serde(rename_all = "snake_case"))]
pub enum LineStatus {
    /// Words were eligible for stress
    Annotated,
    /// The line policy exempted the line
    Exempt,
    /// The reference or input line was missing or blank
    Unpaired,
}

/// A piece of an output line
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "json", derive(serde::Serialize))]
#[cfg_attr(feature = "json", serde(rename_all = "snake_case"))]
pub enum Segment {
    /// Punctuation and whitespace, copied through
    Text(String),
    /// A word of the input line
    Word(WordAnnotation),
}

/// Outcome for one input word
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "json", derive(serde::Serialize))]
pub struct WordAnnotation {
    /// The input word without diacritics
    pub text: String,
    /// Aligned reference word, if any
    pub reference: Option<String>,
    /// Ordinal of the first long vowel of the reference word
    pub vowel_ordinal: Option<usize>,
    /// Grapheme index of the stressed vowel in `text`
    pub stressed: Option<usize>,
    /// Why the word was or was not stressed
    pub outcome: WordOutcome,
}

/// Why a word was or was not stressed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "json", derive(serde::Serialize))]
#[cfg_attr(feature = "json", serde(rename_all = "snake_case"))]
pub enum WordOutcome {
    /// Marker inserted
    Stressed,
    /// The reference word has no long vowel
    NoLongVowel,
    /// The input word has fewer vowels than the reference position requires
    VowelMismatch,
    /// No reference word left on this line
    Unmatched,
    /// Line exempt, or word outside the stress scope
    Exempt,
}

impl WordOutcome {
    /// Whether this outcome is a fallback from a failed alignment
    pub fn is_fallback(&self) -> bool {
        matches!(
            self,
            WordOutcome::VowelMismatch | WordOutcome::Unmatched | WordOutcome::NoLongVowel
        )
    }
}

/// Metadata about the processing
#[derive(Debug, Clone)]
#[cfg_attr(feature = "json", derive(serde::Serialize))]
pub struct ProcessingMetadata {
    /// Total processing duration
    pub duration: Duration,
    /// Code of the profile used
    pub profile: String,
    /// Counters
    pub stats: ProcessingStats,
}

/// Annotation counters
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "json", derive(serde::Serialize))]
pub struct ProcessingStats {
    /// Line pairs processed
    pub lines: usize,
    /// Lines exempted by the line policy
    pub exempt_lines: usize,
    /// Lines without a counterpart
    pub unpaired_lines: usize,
    /// Input words seen
    pub words: usize,
    /// Words that received a marker
    pub stressed_words: usize,
    /// Words left plain because alignment fell short
    pub fallback_words: usize,
}

impl WordAnnotation {
    /// Render the word with `marker`, escaping its text with `escape`
    pub fn render(&self, marker: &StressMarker, escape: Escape) -> String {
        render_word(&self.text, self.stressed, marker, escape)
    }
}

impl AnnotatedLine {
    pub(crate) fn new(
        index: usize,
        status: LineStatus,
        segments: Vec<Segment>,
        marker: &StressMarker,
    ) -> Self {
        let mut line = Self {
            index,
            status,
            segments,
            text: String::new(),
        };
        line.text = line.render(marker, verbatim);
        line
    }

    /// Words of the line, in order
    pub fn words(&self) -> impl Iterator<Item = &WordAnnotation> {
        self.segments.iter().filter_map(|segment| match segment {
            Segment::Word(word) => Some(word),
            Segment::Text(_) => None,
        })
    }

    /// Render the line with another marker and escaping
    pub fn render(&self, marker: &StressMarker, escape: Escape) -> String {
        let mut out = String::new();
        for segment in &self.segments {
            match segment {
                Segment::Text(text) => out.push_str(&escape(text)),
                Segment::Word(word) => out.push_str(&word.render(marker, escape)),
            }
        }
        out
    }

    /// Line text without any marker
    pub fn plain_text(&self) -> String {
        let mut out = String::new();
        for segment in &self.segments {
            match segment {
                Segment::Text(text) => out.push_str(text),
                Segment::Word(word) => out.push_str(&word.text),
            }
        }
        out
    }
}

impl ProcessingStats {
    pub(crate) fn from_lines(lines: &[AnnotatedLine]) -> Self {
        let mut stats = Self {
            lines: lines.len(),
            ..Self::default()
        };

        for line in lines {
            match line.status {
                LineStatus::Exempt => stats.exempt_lines += 1,
                LineStatus::Unpaired => stats.unpaired_lines += 1,
                LineStatus::Annotated => {}
            }

            for word in line.words() {
                stats.words += 1;
                if word.outcome == WordOutcome::Stressed {
                    stats.stressed_words += 1;
                } else if line.status != LineStatus::Unpaired && word.outcome.is_fallback() {
                    stats.fallback_words += 1;
                }
            }
        }

        stats
    }
}

impl Output {
    /// Annotated text, lines joined with `\n`
    pub fn text(&self) -> String {
        self.lines
            .iter()
            .map(|line| line.text.as_str())
            .collect::<Vec<_>>()
            .join("\n")
    }

    /// Render every line with another marker and escaping
    pub fn render(&self, marker: &StressMarker, escape: Escape) -> String {
        self.lines
            .iter()
            .map(|line| line.render(marker, escape))
            .collect::<Vec<_>>()
            .join("\n")
    }

    /// Serialize to pretty-printed JSON
    #[cfg(feature = "json")]
    pub fn to_json(&self) -> crate::api::Result<String> {
        serde_json::to_string_pretty(self)
            .map_err(|e| {
                crate::api::Error::Infrastructure(format!("JSON serialization failed: {e}"))
            })
    }
}
