//! Stress annotation for quantitative verse
//!
//! A reference text marks vowel length with diacritics (macron for long,
//! breve for short). This crate carries the resulting stress positions over
//! to a parallel plain text: words are aligned by position, the first long
//! vowel of each reference word gives a vowel ordinal, and the vowel with the
//! same ordinal in the plain word is wrapped in a stress marker. Punctuation
//! and spacing of the plain text are kept as they are.
//!
//! # Architecture
//!
//! - **Domain layer**: normalization, vowel classification, tokenization,
//!   stress location and profiles (pure, no I/O)
//! - **API layer**: configuration, input handling and the [`Annotator`]
//!
//! # Example
//!
//! ```rust
//! use ictus_core::{Annotator, Config, StressMarker};
//!
//! let config = Config::builder()
//!     .marker(StressMarker::guillemets())
//!     .build()
//!     .unwrap();
//! let annotator = Annotator::with_config(config).unwrap();
//!
//! let text = annotator.annotate("ārma virūmque canō", "arma virumque cano");
//! assert_eq!(text, "‹a›rma vir‹u›mque can‹o›");
//! ```

pub mod api;
pub mod domain;

pub use api::{
    AnnotatedLine, Annotator, Config, ConfigBuilder, Error as ApiError, Input, LineStatus,
    Output, ProcessingMetadata, ProcessingStats, Segment, WordAnnotation, WordOutcome,
};
pub use domain::{
    DomainError, LinePolicy, Profile, ProfileConfig, StressMarker, StressScope, VowelClass,
    VowelClassifier,
};

/// Annotate `input_text` with the stress positions of `reference_text`,
/// using the built-in Latin profile and the HTML span marker
pub fn annotate(reference_text: &str, input_text: &str) -> String {
    Annotator::new().annotate(reference_text, input_text)
}
