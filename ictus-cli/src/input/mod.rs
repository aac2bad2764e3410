//! Input handling module

pub mod file_reader;
pub mod glob_resolver;

pub use file_reader::FileReader;
pub use glob_resolver::resolve_patterns;

use anyhow::Result;
use std::io;
use std::path::PathBuf;

/// Argument that selects standard input
pub const STDIN: &str = "-";

/// One text to annotate
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputSource {
    /// Standard input
    Stdin,
    /// A file on disk
    File(PathBuf),
}

impl InputSource {
    /// Name used in logs, progress and output headers
    pub fn display_name(&self) -> String {
        match self {
            InputSource::Stdin => "<stdin>".to_string(),
            InputSource::File(path) => path.display().to_string(),
        }
    }

    /// Read the whole text
    pub fn read(&self) -> Result<String> {
        match self {
            InputSource::Stdin => FileReader::read_stream(io::stdin().lock()),
            InputSource::File(path) => FileReader::read_text(path),
        }
    }
}

/// Resolve `-i` arguments; `-` is standard input, anything else a glob pattern
///
/// Standard input comes first, followed by the matched files in sorted order.
pub fn resolve_inputs(arguments: &[String]) -> Result<Vec<InputSource>> {
    let (stdin, patterns): (Vec<&String>, Vec<&String>) =
        arguments.iter().partition(|arg| arg.as_str() == STDIN);

    let mut inputs = Vec::new();
    if !stdin.is_empty() {
        inputs.push(InputSource::Stdin);
    }

    if !patterns.is_empty() {
        let patterns: Vec<String> = patterns.into_iter().cloned().collect();
        inputs.extend(resolve_patterns(&patterns)?.into_iter().map(InputSource::File));
    }

    Ok(inputs)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_stdin_only() {
        let inputs = resolve_inputs(&["-".to_string(), "-".to_string()]).unwrap();
        assert_eq!(inputs, vec![InputSource::Stdin]);
        assert_eq!(inputs[0].display_name(), "<stdin>");
    }

    #[test]
    fn test_stdin_and_files() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("ecloga.txt");
        fs::write(&path, "tityre tu").unwrap();

        let inputs = resolve_inputs(&[path.display().to_string(), "-".to_string()]).unwrap();
        assert_eq!(inputs, vec![InputSource::Stdin, InputSource::File(path.clone())]);
        assert_eq!(inputs[1].read().unwrap(), "tityre tu");
    }
}
