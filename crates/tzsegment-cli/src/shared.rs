use std::fs;
use std::path::Path;

use anyhow::Context;
use chrono::NaiveDate;
use serde::Serialize;
use tracing::debug;
use tzsegment_core::{ClassifierConfig, TemporalClassifier};

use crate::cli::ClassifierArgs;
use crate::error::{CliError, CliResult, OutputFormat};

pub fn parse_reference_date(s: &str) -> CliResult<NaiveDate> {
    NaiveDate::parse_from_str(s.trim(), "%Y-%m-%d").map_err(|e| {
        CliError::input(format!(
            "Invalid date '{}': {}. Expected: YYYY-MM-DD",
            s, e
        ))
    })
}

fn load_config(path: &Path) -> anyhow::Result<ClassifierConfig> {
    let text = fs::read_to_string(path)
        .with_context(|| format!("Failed to read config file '{}'", path.display()))?;
    let config = ClassifierConfig::from_json(&text)
        .with_context(|| format!("Invalid config file '{}'", path.display()))?;
    Ok(config)
}

/// Merge the config file (if any) with explicit flags, flags winning.
pub fn resolve_config(args: &ClassifierArgs) -> CliResult<ClassifierConfig> {
    let mut config = match &args.config {
        Some(path) => load_config(path).map_err(|e| CliError::input(format!("{e:#}")))?,
        None => ClassifierConfig::default(),
    };

    if let Some(tz) = &args.tz {
        config.timezone = tz.clone();
    }
    if let Some(width) = args.width {
        config.segment_minutes = width;
    }

    debug!(?config, "resolved classifier config");
    Ok(config)
}

pub fn build_classifier(args: &ClassifierArgs) -> CliResult<TemporalClassifier> {
    Ok(resolve_config(args)?.build()?)
}

/// Print one value as pretty JSON, or fall back to the text renderer.
pub fn emit<T: Serialize>(
    value: &T,
    output_format: OutputFormat,
    text: impl FnOnce(&T),
) -> CliResult<()> {
    match output_format {
        OutputFormat::Json => {
            let json = serde_json::to_string_pretty(value)
                .map_err(|e| CliError::runtime(format!("Failed to serialize JSON: {}", e)))?;
            println!("{}", json);
        }
        OutputFormat::Text => text(value),
    }
    Ok(())
}
