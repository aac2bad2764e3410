//! Validate command implementation

use anyhow::Result;
use clap::Args;
use ictus_core::Profile;
use std::path::PathBuf;

/// Arguments for the validate command
#[derive(Debug, Args)]
pub struct ValidateArgs {
    /// Path to the profile configuration file to validate
    #[arg(short = 'c', long, value_name = "FILE", required = true)]
    pub profile_config: PathBuf,
}

impl ValidateArgs {
    /// Execute the validate command
    pub fn execute(&self) -> Result<()> {
        println!(
            "Validating profile configuration: {}",
            self.profile_config.display()
        );

        match Profile::from_file(&self.profile_config, None) {
            Ok(profile) => {
                println!("✓ Configuration is valid!");
                println!("  Profile code: {}", profile.code());
                println!("  Profile name: {}", profile.name());
                println!("  Line policy:  {}", profile.policy());
                println!("  Stress scope: {}", profile.scope());
                println!(
                    "  Caesura markers: {}",
                    profile.normalizer().caesura_markers().join(" ")
                );
                Ok(())
            }
            Err(e) => {
                println!("✗ Configuration is invalid!");
                println!("  Error: {e}");
                Err(anyhow::anyhow!("Validation failed: {}", e))
            }
        }
    }
}
