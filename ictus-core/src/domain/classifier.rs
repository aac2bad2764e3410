//! Vowel and vowel-length classification
//!
//! Classification is table driven. The tables come from a profile and are
//! immutable once built; the classifier is shared behind an `Arc`.

use std::collections::{HashMap, HashSet};
use unicode_normalization::char::{decompose_canonical, is_combining_mark};
use unicode_normalization::UnicodeNormalization;

use super::profile::types::VowelConfig;

/// Classification of a character with respect to vowel length
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum VowelClass {
    /// Vowel carrying a long mark (macron); bears stress
    Long,
    /// Vowel carrying a short mark (breve)
    Short,
    /// Vowel without a length mark
    Plain,
    /// Consonant, punctuation, whitespace or anything else
    Other,
}

/// Pure vowel classification logic
pub trait VowelClassifier: Send + Sync {
    /// Classify a single character
    fn classify_char(&self, ch: char) -> VowelClass;

    /// Return `text` with every diacritic removed
    fn strip_diacritics(&self, text: &str) -> String;

    /// Classify a grapheme cluster by its (composed) leading character
    fn classify(&self, grapheme: &str) -> VowelClass {
        let mut chars = grapheme.chars();
        let Some(first) = chars.next() else {
            return VowelClass::Other;
        };

        if chars.next().is_none() {
            return self.classify_char(first);
        }

        match grapheme.nfc().next() {
            Some(composed) => self.classify_char(composed),
            None => VowelClass::Other,
        }
    }

    /// Check if the grapheme is a vowel of any length
    fn is_vowel(&self, grapheme: &str) -> bool {
        !matches!(self.classify(grapheme), VowelClass::Other)
    }

    /// Check if the grapheme is a long vowel
    fn is_long_vowel(&self, grapheme: &str) -> bool {
        matches!(self.classify(grapheme), VowelClass::Long)
    }

    /// Check if the grapheme is a short-marked vowel
    fn is_short_vowel(&self, grapheme: &str) -> bool {
        matches!(self.classify(grapheme), VowelClass::Short)
    }
}

/// Enumerated character sets driving classification
#[derive(Debug, Clone, Default)]
pub struct VowelTables {
    base: HashSet<char>,
    long: HashSet<char>,
    short: HashSet<char>,
    folding: HashMap<char, char>,
}

impl VowelTables {
    /// Build tables from explicit sets
    ///
    /// Base vowels are stored lowercase and matched case-insensitively.
    pub fn new(
        base: impl IntoIterator<Item = char>,
        long: impl IntoIterator<Item = char>,
        short: impl IntoIterator<Item = char>,
        folding: impl IntoIterator<Item = (char, char)>,
    ) -> Self {
        Self {
            base: base.into_iter().map(lowercase).collect(),
            long: long.into_iter().collect(),
            short: short.into_iter().collect(),
            folding: folding.into_iter().collect(),
        }
    }

    /// Build tables from the `[vowels]` section of a profile
    pub fn from_config(config: &VowelConfig) -> Self {
        Self::new(
            config.base.iter().copied(),
            config.long.iter().copied(),
            config.short.iter().copied(),
            config.folding.iter().map(|pair| (pair.from, pair.to)),
        )
    }

    /// The plain letter underneath `ch`
    ///
    /// Explicit folding wins; otherwise the first non-combining character of
    /// the canonical decomposition.
    pub fn base_letter(&self, ch: char) -> char {
        if let Some(&folded) = self.folding.get(&ch) {
            return folded;
        }

        let mut base = None;
        decompose_canonical(ch, |c| {
            if base.is_none() && !is_combining_mark(c) {
                base = Some(c);
            }
        });
        base.unwrap_or(ch)
    }

    /// Whether `ch` (already reduced to a base letter) is a base vowel
    pub fn is_base_vowel(&self, ch: char) -> bool {
        self.base.contains(&lowercase(ch))
    }

    /// Whether `ch` is in the long-vowel set
    pub fn is_long(&self, ch: char) -> bool {
        self.long.contains(&ch)
    }

    /// Whether `ch` is in the short-vowel set
    pub fn is_short(&self, ch: char) -> bool {
        self.short.contains(&ch)
    }

    fn fold(&self, ch: char) -> char {
        self.folding.get(&ch).copied().unwrap_or(ch)
    }
}

fn lowercase(ch: char) -> char {
    ch.to_lowercase().next().unwrap_or(ch)
}

/// Classifier backed by [`VowelTables`]
#[derive(Debug, Clone)]
pub struct DiacriticClassifier {
    tables: VowelTables,
}

impl DiacriticClassifier {
    /// Create a classifier over the given tables
    pub fn new(tables: VowelTables) -> Self {
        Self { tables }
    }

    /// Access the underlying tables
    pub fn tables(&self) -> &VowelTables {
        &self.tables
    }
}

impl VowelClassifier for DiacriticClassifier {
    fn classify_char(&self, ch: char) -> VowelClass {
        if self.tables.is_long(ch) {
            VowelClass::Long
        } else if self.tables.is_short(ch) {
            VowelClass::Short
        } else if self.tables.is_base_vowel(self.tables.base_letter(ch)) {
            VowelClass::Plain
        } else {
            VowelClass::Other
        }
    }

    fn strip_diacritics(&self, text: &str) -> String {
        text.chars()
            .map(|ch| self.tables.fold(ch))
            .nfd()
            .filter(|ch| !is_combining_mark(*ch))
            .nfc()
            .collect()
    }
}
