use anyhow::{Context, Result};
use colored::Colorize;
use std::path::PathBuf;

use crate::cli::OutputFormat;
use crate::config::{self, ConfigOverrides};
use crate::convert::convert;
use crate::core::ConversionOutcome;
use crate::project::is_project_root;

pub const NO_FILES_MESSAGE: &str = "No files found to process with current settings.";

pub struct ConvertConfig {
    pub source: PathBuf,
    pub destination: PathBuf,
    pub config_file: Option<PathBuf>,
    pub overrides: ConfigOverrides,
    pub format: OutputFormat,
    pub allow_any_dir: bool,
}

/// Run a conversion and print its summary.
///
/// Returns the outcome so the caller can choose the exit status.
pub fn handle_convert(config: ConvertConfig) -> Result<ConversionOutcome> {
    if !config.source.is_dir() {
        anyhow::bail!(
            "Source directory does not exist: {}",
            config.source.display()
        );
    }
    if !config.allow_any_dir && !is_project_root(&config.source) {
        anyhow::bail!(
            "{} is not a project root. Expected one of:\n  \
             - A .sln file (for .NET solutions)\n  \
             - An angular.json or package.json file (for Angular projects)\n\
             Use --allow-any-dir to convert it anyway.",
            config.source.display()
        );
    }

    let file_config = match &config.config_file {
        Some(path) => config::load_config_file(path)
            .with_context(|| format!("Failed to load config from {}", path.display()))?,
        None => config::load_config(&config.source),
    };
    let options = config
        .overrides
        .apply(file_config)
        .into_options(&config.destination);
    log::info!(
        "Converting {} into {} ({} layout)",
        config.source.display(),
        config.destination.display(),
        options.layout
    );

    let outcome = convert(&config.source, &options).context("Conversion aborted")?;

    match config.format {
        OutputFormat::Terminal => print!("{}", render_summary(&outcome)),
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&outcome)?),
    }

    Ok(outcome)
}

/// Human-readable summary of a run
pub fn render_summary(outcome: &ConversionOutcome) -> String {
    if outcome.is_empty() {
        return format!("{}\n", NO_FILES_MESSAGE.yellow());
    }

    let mut out = String::new();
    out.push_str(&format!("{}\n", "Conversion complete".bold()));
    out.push_str(&format!("  Total files:  {}\n", outcome.total));
    out.push_str(&format!(
        "  Converted:    {}\n",
        outcome.succeeded.to_string().green()
    ));

    let failed = outcome.failed.to_string();
    let failed = if outcome.has_failures() {
        failed.red().bold()
    } else {
        failed.normal()
    };
    out.push_str(&format!("  Errors:       {}\n", failed));

    if !outcome.errors.is_empty() {
        out.push_str(&format!("\n{}\n", "Errors:".red().bold()));
        for error in &outcome.errors {
            out.push_str(&format!("  - {}\n", error));
        }
    }
    out
}
