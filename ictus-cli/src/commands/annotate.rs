//! Annotate command implementation

use anyhow::{Context, Result};
use clap::Args;
use ictus_core::{Annotator, Config, LinePolicy, StressMarker, StressScope};
use serde::{Deserialize, Serialize};
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::PathBuf;

use crate::config::CliConfig;
use crate::error::CliError;
use crate::input::{resolve_inputs, FileReader};
use crate::output::{
    HtmlFormatter, JsonFormatter, MarkdownFormatter, OutputFormatter, TextFormatter,
};
use crate::profile_source::ProfileSource;
use crate::progress::ProgressReporter;

/// Arguments for the annotate command
#[derive(Debug, Args)]
pub struct AnnotateArgs {
    /// Reference text with macrons (long) and breves (short)
    #[arg(short, long, value_name = "FILE")]
    pub reference: PathBuf,

    /// Plain input files or patterns (supports glob, "-" reads stdin)
    #[arg(short, long, value_name = "FILE/PATTERN", required = true)]
    pub input: Vec<String>,

    /// Output file (default: stdout)
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// Output format [default: text]
    #[arg(short, long, value_enum)]
    pub format: Option<OutputFormat>,

    /// Built-in vowel profile [default: la]
    #[arg(short, long, value_name = "CODE", conflicts_with = "profile_config")]
    pub profile: Option<String>,

    /// External profile configuration file (TOML)
    #[arg(long, value_name = "FILE")]
    pub profile_config: Option<PathBuf>,

    /// Override the code of the external profile
    #[arg(long, value_name = "CODE", requires = "profile_config")]
    pub profile_code: Option<String>,

    /// Stress marker used in text and JSON output [default: html]
    #[arg(long, value_enum)]
    pub marker: Option<MarkerStyle>,

    /// CSS class of the HTML marker [default: stressed]
    #[arg(long, value_name = "CLASS")]
    pub html_class: Option<String>,

    /// Which lines receive stress marks (overrides the profile)
    #[arg(long, value_enum)]
    pub policy: Option<PolicyArg>,

    /// Which words of a line receive stress marks (overrides the profile)
    #[arg(long, value_enum)]
    pub scope: Option<ScopeArg>,

    /// Configuration file
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Suppress progress output
    #[arg(short, long)]
    pub quiet: bool,

    /// Increase verbosity
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

/// Supported output formats
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum OutputFormat {
    /// Annotated text, line for line
    #[default]
    Text,
    /// Standalone HTML document with styled stress spans
    Html,
    /// JSON array of documents with per-word detail
    Json,
    /// Markdown with numbered lines and bold stressed vowels
    Markdown,
}

impl OutputFormat {
    /// Every format, in listing order
    pub const ALL: [OutputFormat; 4] = [
        OutputFormat::Text,
        OutputFormat::Html,
        OutputFormat::Json,
        OutputFormat::Markdown,
    ];

    /// Name accepted by `--format`
    pub fn as_str(&self) -> &'static str {
        match self {
            OutputFormat::Text => "text",
            OutputFormat::Html => "html",
            OutputFormat::Json => "json",
            OutputFormat::Markdown => "markdown",
        }
    }

    /// One-line description for `list formats`
    pub fn description(&self) -> &'static str {
        match self {
            OutputFormat::Text => "Annotated text, line for line",
            OutputFormat::Html => "Standalone HTML document with styled stress spans",
            OutputFormat::Json => "Per-line and per-word annotation detail",
            OutputFormat::Markdown => "Numbered lines with stressed vowels in bold",
        }
    }
}

/// Stress marker styles
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum MarkerStyle {
    /// `<span class="stressed">a</span>`
    #[default]
    Html,
    /// `‹a›`
    Guillemets,
}

impl MarkerStyle {
    /// Build the marker, using `class` for the HTML span
    pub fn marker(&self, class: &str) -> StressMarker {
        match self {
            MarkerStyle::Html => StressMarker::html(class),
            MarkerStyle::Guillemets => StressMarker::guillemets(),
        }
    }
}

/// Line policy names on the command line
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum PolicyArg {
    /// Skip lines whose reference carries a caesura marker
    Caesura,
    /// Skip every second line
    Alternate,
    /// Stress every line
    EveryLine,
}

impl From<PolicyArg> for LinePolicy {
    fn from(arg: PolicyArg) -> Self {
        match arg {
            PolicyArg::Caesura => LinePolicy::Caesura,
            PolicyArg::Alternate => LinePolicy::Alternate,
            PolicyArg::EveryLine => LinePolicy::EveryLine,
        }
    }
}

/// Stress scope names on the command line
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum ScopeArg {
    /// Stress every aligned word
    EveryWord,
    /// Stress only the first word of a line
    FirstWord,
}

impl From<ScopeArg> for StressScope {
    fn from(arg: ScopeArg) -> Self {
        match arg {
            ScopeArg::EveryWord => StressScope::EveryWord,
            ScopeArg::FirstWord => StressScope::FirstWord,
        }
    }
}

impl AnnotateArgs {
    /// Execute the annotate command
    pub fn execute(&self) -> Result<()> {
        self.init_logging()?;

        log::info!("Starting annotation");
        log::debug!("Arguments: {:?}", self);

        let file_config = match &self.config {
            Some(path) => CliConfig::from_file(path)?,
            None => CliConfig::default(),
        };

        let source = self.profile_source(&file_config);
        log::info!("Using profile {}", source.display_name());
        let annotator = self.build_annotator(&source, &file_config)?;

        let reference = self.read_reference()?;
        let inputs = resolve_inputs(&self.input)?;
        log::info!("Found {} input(s) to annotate", inputs.len());

        let format = self.format.unwrap_or(file_config.output.format);
        let html_class = self
            .html_class
            .clone()
            .unwrap_or_else(|| file_config.annotation.html_class.clone());
        let mut formatter = self.create_formatter(format, &html_class, inputs.len() > 1)?;

        let mut progress = ProgressReporter::new(self.quiet || inputs.len() < 2);
        progress.init_files(inputs.len() as u64);

        for input in &inputs {
            let name = input.display_name();
            let text = input.read()?;
            if text.trim().is_empty() {
                return Err(CliError::MissingInput(format!("input text {name}")).into());
            }

            let output = annotator.annotate_text(&reference, &text);
            let stats = &output.metadata.stats;
            log::info!(
                "{}: {} lines, {} of {} words stressed, {} fallbacks",
                name,
                stats.lines,
                stats.stressed_words,
                stats.words,
                stats.fallback_words
            );

            formatter
                .format_document(&name, &output)
                .with_context(|| format!("Failed to write output for {name}"))?;
            progress.file_completed(&name);
        }

        progress.finish();
        formatter.finish()?;

        Ok(())
    }

    /// Initialize logging based on verbosity level
    fn init_logging(&self) -> Result<()> {
        let log_level = match self.verbose {
            0 => "warn",
            1 => "info",
            2 => "debug",
            _ => "trace",
        };

        if !self.quiet {
            // A logger may already be installed when commands run in-process
            let _ = env_logger::Builder::from_env(
                env_logger::Env::default().default_filter_or(log_level),
            )
            .try_init();
        }

        Ok(())
    }

    /// Command-line profile flags win over the configuration file
    fn profile_source(&self, file_config: &CliConfig) -> ProfileSource {
        if let Some(path) = &self.profile_config {
            return ProfileSource::External {
                path: path.clone(),
                profile_code: self.profile_code.clone(),
            };
        }

        if let Some(code) = &self.profile {
            return ProfileSource::BuiltIn(code.clone());
        }

        match &file_config.annotation.profile_config {
            Some(path) => ProfileSource::External {
                path: path.clone(),
                profile_code: None,
            },
            None => ProfileSource::BuiltIn(file_config.annotation.profile.clone()),
        }
    }

    fn build_annotator(
        &self,
        source: &ProfileSource,
        file_config: &CliConfig,
    ) -> Result<Annotator> {
        let settings = &file_config.annotation;
        let mut builder = Config::builder();

        builder = match source {
            ProfileSource::BuiltIn(code) => builder.profile(code.clone()),
            ProfileSource::External { path, profile_code } => builder
                .profile_file(path, profile_code.as_deref())
                .with_context(|| {
                    format!("Failed to load profile configuration: {}", path.display())
                })?,
        };

        let style = self.marker.unwrap_or(settings.marker);
        let class = self.html_class.as_deref().unwrap_or(&settings.html_class);
        builder = builder.marker(style.marker(class));

        if let Some(policy) = self.policy.map(LinePolicy::from).or(settings.policy) {
            builder = builder.policy(policy);
        }
        if let Some(scope) = self.scope.map(StressScope::from).or(settings.scope) {
            builder = builder.scope(scope);
        }

        let config = builder.build().map_err(CliError::from)?;
        let annotator = Annotator::with_config(config).map_err(CliError::from)?;
        log::debug!(
            "Profile {} with policy {} and scope {}",
            annotator.profile().code(),
            annotator.policy(),
            annotator.scope()
        );

        Ok(annotator)
    }

    fn read_reference(&self) -> Result<String> {
        if !self.reference.is_file() {
            return Err(CliError::FileNotFound(self.reference.display().to_string()).into());
        }

        let reference = FileReader::read_text(&self.reference)?;
        if reference.trim().is_empty() {
            return Err(CliError::MissingInput("reference text".to_string()).into());
        }

        Ok(reference)
    }

    fn create_formatter(
        &self,
        format: OutputFormat,
        html_class: &str,
        with_headers: bool,
    ) -> Result<Box<dyn OutputFormatter>> {
        let writer: Box<dyn Write + Send + Sync> = match &self.output {
            Some(path) => {
                let file = File::create(path)
                    .with_context(|| format!("Failed to create output file: {}", path.display()))?;
                Box::new(BufWriter::new(file))
            }
            None => Box::new(io::stdout()),
        };

        Ok(match format {
            OutputFormat::Text => Box::new(TextFormatter::new(writer, with_headers)),
            OutputFormat::Html => Box::new(HtmlFormatter::new(writer, html_class)),
            OutputFormat::Json => Box::new(JsonFormatter::new(writer)),
            OutputFormat::Markdown => Box::new(MarkdownFormatter::new(writer)),
        })
    }
}
