//! JSON output formatter

use super::OutputFormatter;
use anyhow::Result;
use ictus_core::{AnnotatedLine, Output, ProcessingStats};
use serde::Serialize;
use std::io::Write;

/// JSON formatter - outputs one entry per document as a JSON array
pub struct JsonFormatter<W: Write> {
    writer: W,
    documents: Vec<DocumentData>,
}

/// Data structure for JSON output
#[derive(Debug, Serialize)]
pub struct DocumentData {
    /// Input file name, or `<stdin>`
    pub source: String,
    /// Code of the profile used
    pub profile: String,
    /// Annotated text with the configured marker
    pub text: String,
    /// Per-line detail
    pub lines: Vec<AnnotatedLine>,
    /// Counters
    pub stats: ProcessingStats,
    /// Processing time in microseconds
    pub duration_us: u128,
}

impl<W: Write> JsonFormatter<W> {
    /// Create a new JSON formatter
    pub fn new(writer: W) -> Self {
        Self {
            writer,
            documents: Vec::new(),
        }
    }
}

impl<W: Write + Send + Sync> OutputFormatter for JsonFormatter<W> {
    fn format_document(&mut self, source: &str, output: &Output) -> Result<()> {
        self.documents.push(DocumentData {
            source: source.to_string(),
            profile: output.metadata.profile.clone(),
            text: output.text(),
            lines: output.lines.clone(),
            stats: output.metadata.stats.clone(),
            duration_us: output.metadata.duration.as_micros(),
        });
        Ok(())
    }

    fn finish(&mut self) -> Result<()> {
        serde_json::to_writer_pretty(&mut self.writer, &self.documents)?;
        writeln!(self.writer)?;
        self.writer.flush()?;
        Ok(())
    }
}
