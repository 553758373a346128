use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::process::ExitCode;

use tracing::debug;
use tzsegment_core::parse::timestamp_value;
use tzsegment_core::{Classification, TemporalClassifier, TimestampFormat};

use crate::cli::ClassifyArgs;
use crate::error::{CliError, CliResult, EXIT_SUCCESS, OutputFormat};
use crate::shared::build_classifier;

pub fn run_classify(args: ClassifyArgs, output_format: OutputFormat) -> CliResult<ExitCode> {
    let classifier = build_classifier(&args.classifier)?;
    let format: TimestampFormat = args.format.parse()?;

    let reader: Box<dyn BufRead> = if args.stdin || args.input == "-" {
        Box::new(io::stdin().lock())
    } else {
        let file = File::open(&args.input).map_err(|e| {
            CliError::runtime(format!("Failed to open file '{}': {}", args.input, e))
        })?;
        Box::new(BufReader::new(file))
    };

    for line in reader.lines() {
        let line = line.map_err(|e| CliError::runtime(format!("Failed to read line: {}", e)))?;
        let trimmed = line.trim();

        if trimmed.is_empty() || trimmed.starts_with('#') {
            continue;
        }

        let result = classify_line(trimmed, &classifier, format)?;
        debug!(input = trimmed, segment = result.segment, "classified");

        match output_format {
            OutputFormat::Json => {
                let json = serde_json::to_string(&result)
                    .map_err(|e| CliError::runtime(format!("Failed to serialize JSON: {}", e)))?;
                println!("{}", json);
            }
            OutputFormat::Text => {
                println!(
                    "{} -> {} {} #{} {}",
                    result.input, result.local, result.day_type, result.segment, result.label
                );
            }
        }
    }

    Ok(ExitCode::from(EXIT_SUCCESS))
}

// The CLI is strict: a line that does not parse is an input error, not a fallback.
fn classify_line(
    input: &str,
    classifier: &TemporalClassifier,
    format: TimestampFormat,
) -> CliResult<Classification> {
    let value = timestamp_value(input, format)
        .map_err(|e| CliError::input(format!("Error processing '{}': {}", input, e)))?;

    classifier.classify(input, &value).ok_or_else(|| {
        CliError::input(format!(
            "Error processing '{}': not a valid {} timestamp",
            input, format
        ))
    })
}
