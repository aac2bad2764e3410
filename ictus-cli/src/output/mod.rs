//! Output formatting module

use anyhow::Result;
use ictus_core::Output;

/// Trait for output formatters
pub trait OutputFormatter: Send + Sync {
    /// Format and output one annotated document
    fn format_document(&mut self, source: &str, output: &Output) -> Result<()>;

    /// Finalize output (e.g., close the JSON array)
    fn finish(&mut self) -> Result<()>;
}

pub mod html;
pub mod json;
pub mod markdown;
pub mod text;

pub use html::HtmlFormatter;
pub use json::JsonFormatter;
pub use markdown::MarkdownFormatter;
pub use text::TextFormatter;
