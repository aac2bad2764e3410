//! Public annotation API
//!
//! [`Annotator`] ties a profile, a stress marker and a line policy together
//! and runs the whole pass; [`Output`] keeps the per-line and per-word detail
//! for callers that render or report on it.

mod config;
mod error;
mod input;
mod output;
mod processor;

#[cfg(test)]
mod tests;

pub use config::{defaults, Config, ConfigBuilder, ProfileSource};
pub use error::{Error, Result};
pub use input::Input;
pub use output::{
    AnnotatedLine, LineStatus, Output, ProcessingMetadata, ProcessingStats, Segment,
    WordAnnotation, WordOutcome,
};
pub use processor::Annotator;
