//! Lossless word/non-word tokenization

use unicode_normalization::char::is_combining_mark;

/// A maximal run of word characters, or of non-word characters
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Token<'a> {
    /// Slice of the line this token covers
    pub text: &'a str,
    /// Whether the run consists of word characters
    pub is_word: bool,
}

/// Letters of any script, plus combining marks so that a decomposed
/// `a` + U+0304 stays inside its word.
pub fn is_word_char(ch: char) -> bool {
    ch.is_alphabetic() || is_combining_mark(ch)
}

/// Split a line into alternating word and non-word runs
///
/// Concatenating the texts of the returned tokens yields `line` exactly.
pub fn tokenize(line: &str) -> Vec<Token<'_>> {
    let mut tokens = Vec::new();
    let mut start = 0;
    let mut current: Option<bool> = None;

    for (offset, ch) in line.char_indices() {
        let is_word = is_word_char(ch);
        match current {
            Some(kind) if kind != is_word => {
                tokens.push(Token {
                    text: &line[start..offset],
                    is_word: kind,
                });
                start = offset;
                current = Some(is_word);
            }
            Some(_) => {}
            None => current = Some(is_word),
        }
    }

    if let Some(kind) = current {
        tokens.push(Token {
            text: &line[start..],
            is_word: kind,
        });
    }

    tokens
}

/// Iterate over the word tokens only, in order
pub fn words<'a>(tokens: &'a [Token<'a>]) -> impl Iterator<Item = &'a str> + 'a {
    tokens.iter().filter(|t| t.is_word).map(|t| t.text)
}
