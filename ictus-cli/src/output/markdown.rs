//! Markdown output formatter

use super::OutputFormatter;
use anyhow::Result;
use ictus_core::{Output, StressMarker};
use std::borrow::Cow;
use std::io::Write;

/// Markdown formatter - numbered verse lines with stressed vowels in bold
pub struct MarkdownFormatter<W: Write> {
    writer: W,
    marker: StressMarker,
    line_count: usize,
    stressed_words: usize,
}

impl<W: Write> MarkdownFormatter<W> {
    /// Create a new markdown formatter
    pub fn new(writer: W) -> Self {
        Self {
            writer,
            marker: StressMarker::new("**", "**"),
            line_count: 0,
            stressed_words: 0,
        }
    }
}

impl<W: Write + Send + Sync> OutputFormatter for MarkdownFormatter<W> {
    fn format_document(&mut self, source: &str, output: &Output) -> Result<()> {
        writeln!(self.writer, "## {}", escape_markdown(source))?;
        writeln!(self.writer)?;

        // A final newline in the input leaves an empty last line
        let lines = match output.lines.split_last() {
            Some((last, rest)) if last.text.is_empty() => rest,
            _ => &output.lines[..],
        };

        for line in lines {
            let text = line.render(&self.marker, escape_markdown);
            if text.trim().is_empty() {
                writeln!(self.writer, "{}.", line.index + 1)?;
            } else {
                writeln!(self.writer, "{}. {}", line.index + 1, text.trim())?;
            }
        }
        writeln!(self.writer)?;

        self.line_count += lines.len();
        self.stressed_words += output.metadata.stats.stressed_words;
        Ok(())
    }

    fn finish(&mut self) -> Result<()> {
        writeln!(self.writer, "---")?;
        writeln!(
            self.writer,
            "*Total lines: {}, stressed words: {}*",
            self.line_count, self.stressed_words
        )?;
        self.writer.flush()?;
        Ok(())
    }
}

fn escape_markdown(text: &str) -> Cow<'_, str> {
    const SPECIAL: [char; 8] = ['\\', '*', '_', '`', '[', ']', '#', '<'];

    if !text.contains(SPECIAL) {
        return Cow::Borrowed(text);
    }

    let mut escaped = String::with_capacity(text.len() + 4);
    for ch in text.chars() {
        if SPECIAL.contains(&ch) {
            escaped.push('\\');
        }
        escaped.push(ch);
    }
    Cow::Owned(escaped)
}
