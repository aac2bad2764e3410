//! Plain text output formatter

use super::OutputFormatter;
use anyhow::Result;
use ictus_core::Output;
use std::io::Write;

/// Text formatter - writes the annotated text line for line
pub struct TextFormatter<W: Write> {
    writer: W,
    with_headers: bool,
    documents: usize,
}

impl<W: Write> TextFormatter<W> {
    /// Create a new text formatter; `with_headers` names each document
    pub fn new(writer: W, with_headers: bool) -> Self {
        Self {
            writer,
            with_headers,
            documents: 0,
        }
    }
}

impl<W: Write + Send + Sync> OutputFormatter for TextFormatter<W> {
    fn format_document(&mut self, source: &str, output: &Output) -> Result<()> {
        if self.with_headers {
            if self.documents > 0 {
                writeln!(self.writer)?;
            }
            writeln!(self.writer, "==> {source} <==")?;
        }
        self.documents += 1;

        let text = output.text();
        write!(self.writer, "{text}")?;
        if !text.ends_with('\n') {
            writeln!(self.writer)?;
        }
        Ok(())
    }

    fn finish(&mut self) -> Result<()> {
        self.writer.flush()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::output::test_support::sample_output;

    #[test]
    fn test_single_document() {
        let mut buffer = Vec::new();
        {
            let mut formatter = TextFormatter::new(&mut buffer, false);
            formatter.format_document("aeneis.txt", &sample_output()).unwrap();
            formatter.finish().unwrap();
        }

        assert_eq!(
            String::from_utf8(buffer).unwrap(),
            "‹a›rma vir‹u›mque <can‹o›>\nTroiae qui\n"
        );
    }

    #[test]
    fn test_headers_between_documents() {
        let mut buffer = Vec::new();
        {
            let mut formatter = TextFormatter::new(&mut buffer, true);
            formatter.format_document("a.txt", &sample_output()).unwrap();
            formatter.format_document("b.txt", &sample_output()).unwrap();
            formatter.finish().unwrap();
        }

        let text = String::from_utf8(buffer).unwrap();
        assert!(text.starts_with("==> a.txt <==\n‹a›rma"));
        assert!(text.contains("Troiae qui\n\n==> b.txt <==\n"));
    }

    #[test]
    fn test_trailing_newline_is_not_doubled() {
        let output = ictus_core::Annotator::new().annotate_text("ārma\n", "arma\n");
        let mut buffer = Vec::new();
        {
            let mut formatter = TextFormatter::new(&mut buffer, false);
            formatter.format_document("-", &output).unwrap();
        }

        assert_eq!(
            String::from_utf8(buffer).unwrap(),
            "<span class=\"stressed\">a</span>rma\n"
        );
    }
}
