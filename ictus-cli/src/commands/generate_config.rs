//! Generate config command implementation

use anyhow::{Context, Result};
use clap::Args;
use std::path::PathBuf;

/// Arguments for the generate-config command
#[derive(Debug, Args)]
pub struct GenerateConfigArgs {
    /// Profile code for the new configuration
    #[arg(short = 'p', long, value_name = "CODE", required = true)]
    pub profile_code: String,

    /// Output file path
    #[arg(short, long, value_name = "FILE", required = true)]
    pub output: PathBuf,
}

impl GenerateConfigArgs {
    /// Execute the generate-config command
    pub fn execute(&self) -> Result<()> {
        use std::fs;

        println!("Generating profile configuration template...");
        println!("  Profile code: {}", self.profile_code);
        println!("  Output file: {}", self.output.display());

        let template = self.generate_template();

        fs::write(&self.output, template)
            .with_context(|| format!("Failed to write to {}", self.output.display()))?;

        println!("✓ Configuration template generated successfully!");
        println!();
        println!("Next steps:");
        println!("1. Edit the vowel sets and caesura markers");
        println!("2. Validate your configuration:");
        println!("   ictus validate -c {}", self.output.display());
        println!("3. Use it for annotation:");
        println!(
            "   ictus annotate -r reference.txt -i input.txt --profile-config {}",
            self.output.display()
        );

        Ok(())
    }

    /// Generate template configuration content
    fn generate_template(&self) -> String {
        // Rendered as a TOML string so quotes and backslashes in the code survive
        let code = toml::Value::String(self.profile_code.clone()).to_string();
        format!(
            r#"# Custom vowel profile

[metadata]
code = {code}
name = "Custom Profile"

[vowels]
# Plain vowel letters, matched case-insensitively once diacritics are removed
base = ["a", "e", "i", "o", "u", "y"]

# Vowels marked long in the reference text; the first one in a word carries stress
long = ["Ā", "ā", "Ē", "ē", "Ī", "ī", "Ō", "ō", "Ū", "ū", "Ȳ", "ȳ"]

# Vowels marked short (optional)
short = ["Ă", "ă", "Ĕ", "ĕ", "Ĭ", "ĭ", "Ŏ", "ŏ", "Ŭ", "ŭ"]

# Characters to map onto a base letter before diacritics are removed (optional)
folding = [
    # Example: {{ from = "ў", to = "y" }}
]

[caesura]
# Reference lines containing one of these are treated per the line policy
markers = ["‖", "|"]

[stress]
# caesura | alternate | every-line
policy = "caesura"
# every-word | first-word
scope = "every-word"
"#
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ictus_core::Profile;
    use tempfile::TempDir;

    #[test]
    fn test_generated_template_is_valid() {
        let dir = TempDir::new().unwrap();
        let output = dir.path().join("custom.toml");
        let args = GenerateConfigArgs {
            profile_code: "la-custom".to_string(),
            output: output.clone(),
        };

        args.execute().unwrap();

        let profile = Profile::from_file(&output, None).unwrap();
        assert_eq!(profile.code(), "la-custom");
        assert_eq!(profile.name(), "Custom Profile");
    }

    #[test]
    fn test_code_with_toml_syntax_round_trips() {
        let dir = TempDir::new().unwrap();
        let output = dir.path().join("custom.toml");
        let code = "la \"x\" \\ y # z";
        let args = GenerateConfigArgs {
            profile_code: code.to_string(),
            output: output.clone(),
        };

        args.execute().unwrap();

        let profile = Profile::from_file(&output, None).unwrap();
        assert_eq!(profile.code(), code);
    }

    #[test]
    fn test_generate_into_missing_directory() {
        let dir = TempDir::new().unwrap();
        let args = GenerateConfigArgs {
            profile_code: "x".to_string(),
            output: dir.path().join("missing").join("custom.toml"),
        };

        let err = args.execute().unwrap_err();
        assert!(err.to_string().contains("Failed to write to"));
    }
}
