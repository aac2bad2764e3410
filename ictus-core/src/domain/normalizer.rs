//! Text canonicalization ahead of comparison
//!
//! Reference and input texts may arrive in either Unicode composition form
//! (`ā` as U+0101, or `a` followed by U+0304). Everything downstream compares
//! precomposed characters, so lines are NFC-composed here first.

use unicode_normalization::UnicodeNormalization;

/// Canonicalizes lines and recognizes caesura markers
#[derive(Debug, Clone)]
pub struct Normalizer {
    caesura_markers: Vec<String>,
}

impl Normalizer {
    /// Create a normalizer recognizing the given caesura markers
    ///
    /// Markers are composed the same way as the text they are searched in.
    /// Empty markers are ignored.
    pub fn new(caesura_markers: Vec<String>) -> Self {
        let caesura_markers = caesura_markers
            .into_iter()
            .filter(|m| !m.is_empty())
            .map(|m| m.nfc().collect())
            .collect();

        Self { caesura_markers }
    }

    /// Compose combining marks into precomposed letters (NFC)
    pub fn normalize(&self, text: &str) -> String {
        text.nfc().collect()
    }

    /// NFC-compose a single line and trim surrounding whitespace
    ///
    /// Trimming also removes the `\r` left behind by CRLF line endings.
    pub fn normalize_line(&self, line: &str) -> String {
        line.trim().nfc().collect()
    }

    /// Whether the line contains any caesura marker
    pub fn has_caesura(&self, line: &str) -> bool {
        self.caesura_markers
            .iter()
            .any(|marker| line.contains(marker.as_str()))
    }

    /// Replace each caesura marker with a space
    ///
    /// The words on either side stay separate, so positional word alignment
    /// is the same with or without the marker.
    pub fn strip_caesura(&self, line: &str) -> String {
        let mut stripped = line.to_string();
        for marker in &self.caesura_markers {
            if stripped.contains(marker.as_str()) {
                stripped = stripped.replace(marker.as_str(), " ");
            }
        }
        stripped
    }

    /// Configured caesura markers
    pub fn caesura_markers(&self) -> &[String] {
        &self.caesura_markers
    }
}
