//! File pattern resolution using glob

use anyhow::{Context, Result};
use glob::glob;
use std::path::PathBuf;

use crate::error::CliError;

/// Resolve file patterns to actual file paths
pub fn resolve_patterns(patterns: &[String]) -> Result<Vec<PathBuf>> {
    let mut files = Vec::new();

    for pattern in patterns {
        let paths = glob(pattern).map_err(|_| CliError::InvalidPattern(pattern.clone()))?;

        for path_result in paths {
            let path =
                path_result.with_context(|| format!("Error resolving pattern: {}", pattern))?;

            if path.is_file() {
                files.push(path);
            }
        }
    }

    if files.is_empty() {
        anyhow::bail!("No files found matching the provided patterns");
    }

    // Remove duplicates and sort
    files.sort();
    files.dedup();

    Ok(files)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_resolve_glob_sorted_and_deduplicated() {
        let dir = TempDir::new().unwrap();
        for name in ["liber2.txt", "liber1.txt", "notes.md"] {
            fs::write(dir.path().join(name), "arma").unwrap();
        }

        let pattern = dir.path().join("liber*.txt").display().to_string();
        let exact = dir.path().join("liber1.txt").display().to_string();
        let files = resolve_patterns(&[pattern, exact]).unwrap();

        let names: Vec<_> = files
            .iter()
            .map(|p| p.file_name().unwrap().to_str().unwrap().to_string())
            .collect();
        assert_eq!(names, vec!["liber1.txt", "liber2.txt"]);
    }

    #[test]
    fn test_no_matches() {
        let dir = TempDir::new().unwrap();
        let pattern = dir.path().join("*.txt").display().to_string();

        let err = resolve_patterns(&[pattern]).unwrap_err();
        assert_eq!(err.to_string(), "No files found matching the provided patterns");
    }

    #[test]
    fn test_invalid_pattern() {
        let err = resolve_patterns(&["[invalid".to_string()]).unwrap_err();
        assert_eq!(err.to_string(), "Invalid file pattern: [invalid");
    }
}
