use std::process::ExitCode;

use serde::Serialize;
use tzsegment_core::{SegmentWidth, format_segment_label, format_segment_label_with_index};

use crate::cli::LabelArgs;
use crate::error::{CliResult, EXIT_SUCCESS, OutputFormat};
use crate::shared::emit;

#[derive(Debug, Serialize)]
struct LabelResult {
    index: Option<u32>,
    width: u32,
    label: String,
}

pub fn run_label(args: LabelArgs, output_format: OutputFormat) -> CliResult<ExitCode> {
    let width = SegmentWidth::new(args.width)?;

    let label = if args.with_index {
        format_segment_label_with_index(args.index, width)
    } else {
        format_segment_label(args.index, width)
    };

    let result = LabelResult {
        index: args.index.map(|i| width.normalize(i)),
        width: width.minutes(),
        label,
    };

    emit(&result, output_format, |r| println!("{}", r.label))?;

    Ok(ExitCode::from(EXIT_SUCCESS))
}
