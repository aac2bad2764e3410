//! HTML output formatter

use super::OutputFormatter;
use anyhow::Result;
use ictus_core::{Output, StressMarker};
use std::borrow::Cow;
use std::io::Write;

/// HTML formatter - writes one standalone document with a section per input
pub struct HtmlFormatter<W: Write> {
    writer: W,
    class: String,
    marker: StressMarker,
    sections: Vec<String>,
}

impl<W: Write> HtmlFormatter<W> {
    /// Create a new HTML formatter; `class` styles the stressed vowels
    pub fn new(writer: W, class: &str) -> Self {
        let class = escape_html(class).into_owned();
        Self {
            writer,
            marker: StressMarker::html(&class),
            class,
            sections: Vec::new(),
        }
    }
}

impl<W: Write + Send + Sync> OutputFormatter for HtmlFormatter<W> {
    fn format_document(&mut self, source: &str, output: &Output) -> Result<()> {
        let mut section = format!(
            "<section>\n<h2>{}</h2>\n<div class=\"verse\">\n",
            escape_html(source)
        );
        for line in &output.lines {
            section.push_str(&line.render(&self.marker, escape_html));
            section.push_str("<br>\n");
        }
        section.push_str("</div>\n</section>\n");

        self.sections.push(section);
        Ok(())
    }

    fn finish(&mut self) -> Result<()> {
        writeln!(self.writer, "<!DOCTYPE html>")?;
        writeln!(self.writer, "<html>")?;
        writeln!(self.writer, "<head>")?;
        writeln!(self.writer, "<meta charset=\"utf-8\">")?;
        writeln!(self.writer, "<title>ictus</title>")?;
        writeln!(
            self.writer,
            "<style>.{} {{ color: #b22222; font-weight: bold; }} .verse {{ white-space: pre-wrap; }}</style>",
            self.class
        )?;
        writeln!(self.writer, "</head>")?;
        writeln!(self.writer, "<body>")?;
        for section in &self.sections {
            write!(self.writer, "{section}")?;
        }
        writeln!(self.writer, "</body>")?;
        writeln!(self.writer, "</html>")?;
        self.writer.flush()?;
        Ok(())
    }
}

/// Escape text for HTML element content and attribute values
pub fn escape_html(text: &str) -> Cow<'_, str> {
    if !text.contains(['&', '<', '>', '"', '\'']) {
        return Cow::Borrowed(text);
    }

    let mut escaped = String::with_capacity(text.len() + 8);
    for ch in text.chars() {
        match ch {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(ch),
        }
    }
    Cow::Owned(escaped)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::output::test_support::sample_output;

    #[test]
    fn test_escape_html() {
        assert!(matches!(escape_html("arma"), Cow::Borrowed("arma")));
        assert_eq!(escape_html("<a & 'b'>"), "&lt;a &amp; &#39;b&#39;&gt;");
    }

    #[test]
    fn test_document_structure() {
        let mut buffer = Vec::new();
        {
            let mut formatter = HtmlFormatter::new(&mut buffer, "stressed");
            formatter.format_document("aeneis & co.txt", &sample_output()).unwrap();
            formatter.finish().unwrap();
        }

        let html = String::from_utf8(buffer).unwrap();
        assert!(html.starts_with("<!DOCTYPE html>\n"));
        assert!(html.contains(".stressed { color"));
        assert!(html.contains("<h2>aeneis &amp; co.txt</h2>"));
        assert!(html.contains(
            "<span class=\"stressed\">a</span>rma vir<span class=\"stressed\">u</span>mque \
             &lt;can<span class=\"stressed\">o</span>&gt;<br>"
        ));
        assert!(html.contains("Troiae qui<br>"));
        assert!(html.trim_end().ends_with("</html>"));
    }

    #[test]
    fn test_class_attribute_is_escaped() {
        let mut buffer = Vec::new();
        {
            let mut formatter = HtmlFormatter::new(&mut buffer, "a\"b");
            formatter.format_document("aeneis.txt", &sample_output()).unwrap();
            formatter.finish().unwrap();
        }

        let html = String::from_utf8(buffer).unwrap();
        assert!(html.contains("<span class=\"a&quot;b\">a</span>rma"));
        assert!(!html.contains("class=\"a\"b\""));
    }
}
