//! Domain layer: the annotation building blocks
//!
//! Everything here is pure. Lines go through the [`normalizer`], are split by
//! the [`tokenizer`], vowels are judged by the [`classifier`], and the
//! [`stress`] module finds and marks the stressed vowel. [`policy`] decides
//! which lines and words take part; [`profile`] bundles the tables.

pub mod classifier;
pub mod error;
pub mod normalizer;
pub mod policy;
pub mod profile;
pub mod stress;
pub mod tokenizer;

pub use classifier::{DiacriticClassifier, VowelClass, VowelClassifier, VowelTables};
pub use error::DomainError;
pub use normalizer::Normalizer;
pub use policy::{LinePolicy, StressScope};
pub use profile::{Profile, ProfileConfig};
pub use stress::{
    apply_stress, locate_stress, render_word, target_grapheme, verbatim, Escape, StressMarker,
};
pub use tokenizer::{tokenize, Token};
