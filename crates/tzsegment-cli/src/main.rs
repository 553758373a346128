use std::process::ExitCode;

use clap::Parser;
use tracing::debug;
use tracing_subscriber::EnvFilter;

mod classify_cmd;
mod cli;
mod error;
mod label_cmd;
mod options_cmd;
mod remap_cmd;
mod shared;

use classify_cmd::run_classify;
use cli::{Cli, Commands};
use error::{CliResult, OutputFormat, output_format_hint, parse_output_format, render_error};
use label_cmd::run_label;
use options_cmd::run_options;
use remap_cmd::run_remap;

fn init_logging(verbose: bool) {
    // RUST_LOG wins unless --verbose asks for debug explicitly
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn dispatch<A>(
    args: A,
    output_format: &str,
    run: impl FnOnce(A, OutputFormat) -> CliResult<ExitCode>,
) -> ExitCode {
    let fallback = output_format_hint(output_format);
    let output_format = match parse_output_format(output_format) {
        Ok(format) => format,
        Err(err) => return render_error(&err, fallback),
    };

    match run(args, output_format) {
        Ok(code) => code,
        Err(err) => render_error(&err, output_format),
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    debug!("Parsed CLI args: {:?}", cli);

    match cli.command {
        Commands::Classify(args) => {
            let format = args.output_format.clone();
            dispatch(args, &format, run_classify)
        }
        Commands::Label(args) => {
            let format = args.output_format.clone();
            dispatch(args, &format, run_label)
        }
        Commands::Remap(args) => {
            let format = args.output_format.clone();
            dispatch(args, &format, run_remap)
        }
        Commands::Options(args) => {
            let format = args.output_format.clone();
            dispatch(args, &format, run_options)
        }
    }
}
