//! Locating the stressed vowel and marking it

use std::borrow::Cow;
use std::fmt;

use serde::{Deserialize, Serialize};
use unicode_segmentation::UnicodeSegmentation;

use super::classifier::{VowelClass, VowelClassifier};

/// Escaping applied to text pieces while rendering
pub type Escape = for<'a> fn(&'a str) -> Cow<'a, str>;

/// Identity escaping: text is emitted as is
pub fn verbatim(text: &str) -> Cow<'_, str> {
    Cow::Borrowed(text)
}

/// Textual annotation wrapped around exactly one grapheme
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StressMarker {
    open: String,
    close: String,
}

impl StressMarker {
    /// CSS class used by the default marker
    pub const DEFAULT_CLASS: &'static str = "stressed";

    /// Marker with arbitrary opening and closing text
    pub fn new(open: impl Into<String>, close: impl Into<String>) -> Self {
        Self {
            open: open.into(),
            close: close.into(),
        }
    }

    /// `<span class="...">x</span>`
    pub fn html(class: &str) -> Self {
        Self::new(format!("<span class=\"{class}\">"), "</span>")
    }

    /// `‹x›`
    pub fn guillemets() -> Self {
        Self::new("‹", "›")
    }

    /// Opening text
    pub fn open(&self) -> &str {
        &self.open
    }

    /// Closing text
    pub fn close(&self) -> &str {
        &self.close
    }

    /// Wrap a single grapheme
    pub fn wrap(&self, grapheme: &str) -> String {
        format!("{}{}{}", self.open, grapheme, self.close)
    }

    /// Unwrap marker spans, keeping the wrapped grapheme
    ///
    /// Only an exact `open`, one grapheme, `close` sequence counts as a span.
    /// Lone opening or closing text is ordinary punctuation and stays.
    pub fn strip(&self, text: &str) -> String {
        if self.open.is_empty() || self.close.is_empty() || !text.contains(self.open.as_str()) {
            return text.to_string();
        }

        let mut out = String::with_capacity(text.len());
        let mut rest = text;
        while let Some(start) = rest.find(self.open.as_str()) {
            let inner = &rest[start + self.open.len()..];
            let wrapped = inner
                .graphemes(true)
                .next()
                .filter(|grapheme| inner[grapheme.len()..].starts_with(self.close.as_str()));

            match wrapped {
                Some(grapheme) => {
                    out.push_str(&rest[..start]);
                    out.push_str(grapheme);
                    rest = &inner[grapheme.len() + self.close.len()..];
                }
                None => {
                    let end = start + self.open.len();
                    out.push_str(&rest[..end]);
                    rest = &rest[end..];
                }
            }
        }
        out.push_str(rest);
        out
    }

    /// Number of opening markers in `text`
    pub fn count_in(&self, text: &str) -> usize {
        if self.open.is_empty() {
            return 0;
        }
        text.matches(self.open.as_str()).count()
    }
}

impl Default for StressMarker {
    fn default() -> Self {
        Self::html(Self::DEFAULT_CLASS)
    }
}

impl fmt::Display for StressMarker {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}x{}", self.open, self.close)
    }
}

/// Ordinal (among the word's vowels) of the first long vowel
///
/// Returns `None` when the word has no long vowel; such words are never
/// stressed.
pub fn locate_stress(classifier: &dyn VowelClassifier, reference_word: &str) -> Option<usize> {
    let mut vowels = 0;
    for grapheme in reference_word.graphemes(true) {
        match classifier.classify(grapheme) {
            VowelClass::Long => return Some(vowels),
            VowelClass::Short | VowelClass::Plain => vowels += 1,
            VowelClass::Other => {}
        }
    }
    None
}

/// Grapheme index of the `ordinal`-th vowel of `word`, if it has that many
pub fn target_grapheme(
    classifier: &dyn VowelClassifier,
    word: &str,
    ordinal: usize,
) -> Option<usize> {
    word.graphemes(true)
        .enumerate()
        .filter(|(_, g)| classifier.is_vowel(g))
        .nth(ordinal)
        .map(|(index, _)| index)
}

/// Render `word` with the grapheme at `target` wrapped in `marker`
///
/// `escape` is applied to every piece of the word, never to the marker.
pub fn render_word(
    word: &str,
    target: Option<usize>,
    marker: &StressMarker,
    escape: Escape,
) -> String {
    let Some(target) = target else {
        return escape(word).into_owned();
    };

    let mut out = String::with_capacity(word.len() + marker.open.len() + marker.close.len());
    for (index, grapheme) in word.graphemes(true).enumerate() {
        if index == target {
            out.push_str(&marker.open);
            out.push_str(&escape(grapheme));
            out.push_str(&marker.close);
        } else {
            out.push_str(&escape(grapheme));
        }
    }
    out
}

/// Wrap the `ordinal`-th vowel of `plain_word` in `marker`
///
/// With no ordinal, or when the word has too few vowels, the word comes back
/// unchanged.
pub fn apply_stress(
    classifier: &dyn VowelClassifier,
    plain_word: &str,
    ordinal: Option<usize>,
    marker: &StressMarker,
) -> String {
    let target = ordinal.and_then(|ordinal| target_grapheme(classifier, plain_word, ordinal));
    render_word(plain_word, target, marker, verbatim)
}
