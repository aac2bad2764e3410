//! CLI command implementations

use anyhow::Result;
use clap::Subcommand;

pub mod annotate;
pub mod generate_config;
pub mod validate;

/// Available CLI commands
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Mark stressed vowels in plain text using a reference text
    Annotate(annotate::AnnotateArgs),

    /// Validate an external profile configuration file
    Validate(validate::ValidateArgs),

    /// Generate a profile configuration template
    GenerateConfig(generate_config::GenerateConfigArgs),

    /// List available components
    List {
        #[command(subcommand)]
        subcommand: ListCommands,
    },
}

/// List subcommands
#[derive(Debug, Subcommand)]
pub enum ListCommands {
    /// List built-in vowel profiles
    Profiles,

    /// List available output formats
    Formats,
}

impl Commands {
    /// Run the selected command
    pub fn execute(&self) -> Result<()> {
        match self {
            Commands::Annotate(args) => args.execute(),
            Commands::Validate(args) => args.execute(),
            Commands::GenerateConfig(args) => args.execute(),
            Commands::List { subcommand } => subcommand.execute(),
        }
    }
}

impl ListCommands {
    /// Print the requested listing to stdout
    pub fn execute(&self) -> Result<()> {
        match self {
            ListCommands::Profiles => {
                println!("Built-in profiles:");
                for code in ictus_core::domain::profile::list_available_profiles() {
                    let config = ictus_core::domain::profile::get_profile_config(code)?;
                    println!("  {:<16} {}", code, config.metadata.name);
                }
            }
            ListCommands::Formats => {
                println!("Output formats:");
                for format in annotate::OutputFormat::ALL {
                    println!("  {:<10} {}", format.as_str(), format.description());
                }
            }
        }
        Ok(())
    }
}
