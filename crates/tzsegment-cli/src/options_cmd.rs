use std::process::ExitCode;

use serde::Serialize;
use tzsegment_core::{DAY_TYPE_OPTIONS, DayTypeOption, MONTH_OPTIONS, MonthOption};

use crate::cli::OptionsArgs;
use crate::error::{CliResult, EXIT_SUCCESS, OutputFormat};
use crate::shared::emit;

#[derive(Debug, Serialize)]
struct OptionLists {
    months: &'static [MonthOption],
    day_types: &'static [DayTypeOption],
}

pub fn run_options(_args: OptionsArgs, output_format: OutputFormat) -> CliResult<ExitCode> {
    let lists = OptionLists {
        months: &MONTH_OPTIONS,
        day_types: &DAY_TYPE_OPTIONS,
    };

    emit(&lists, output_format, |lists| {
        for month in lists.months {
            println!("month {:>2}: {}", month.value, month.label);
        }
        for option in lists.day_types {
            let code = option.value.query_value().unwrap_or("-");
            println!("day_type {}: {}", code, option.label);
        }
    })?;

    Ok(ExitCode::from(EXIT_SUCCESS))
}
