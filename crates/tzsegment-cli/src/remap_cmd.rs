use std::process::ExitCode;

use serde::Serialize;
use tzsegment_core::format_segment_label;

use crate::cli::RemapArgs;
use crate::error::{CliResult, EXIT_SUCCESS, OutputFormat};
use crate::shared::{build_classifier, emit, parse_reference_date};

#[derive(Debug, Serialize)]
struct RemapResult {
    tz: String,
    reference_date: String,
    width: u32,
    offset_minutes: i64,
    offset_segments: i64,
    utc_index: u32,
    local_index: u32,
    utc_label: String,
    local_label: String,
}

pub fn run_remap(args: RemapArgs, output_format: OutputFormat) -> CliResult<ExitCode> {
    let classifier = build_classifier(&args.classifier)?;
    let reference_date = parse_reference_date(&args.date)?;
    let width = classifier.width();

    let (utc_index, local_index) = if args.inverse {
        let local = width.normalize(args.utc_index);
        (classifier.remap_local_index(args.utc_index, reference_date), local)
    } else {
        let utc = width.normalize(args.utc_index);
        (utc, classifier.remap_utc_index(args.utc_index, reference_date))
    };

    let result = RemapResult {
        tz: classifier.tz().to_string(),
        reference_date: reference_date.format("%Y-%m-%d").to_string(),
        width: width.minutes(),
        offset_minutes: classifier.utc_offset_minutes(reference_date),
        offset_segments: classifier.offset_segments(reference_date),
        utc_index,
        local_index,
        utc_label: format_segment_label(Some(utc_index.into()), width),
        local_label: format_segment_label(Some(local_index.into()), width),
    };

    emit(&result, output_format, |r| {
        println!(
            "{} {} UTC #{} ({}) -> local #{} ({}), offset {} min / {} segments",
            r.reference_date,
            r.tz,
            r.utc_index,
            r.utc_label,
            r.local_index,
            r.local_label,
            r.offset_minutes,
            r.offset_segments
        );
    })?;

    Ok(ExitCode::from(EXIT_SUCCESS))
}
