use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// DST-aware day-type and temporal segment tool
#[derive(Parser, Debug)]
#[command(name = "tzsegment", version)]
#[command(about = "DST-aware day-type and temporal segment tool")]
pub struct Cli {
    /// Enable verbose (debug) logging
    #[arg(long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Classify timestamps into day type and temporal segment
    Classify(ClassifyArgs),
    /// Render the clock range of a segment index
    Label(LabelArgs),
    /// Map a UTC-based segment index into a timezone for a reference date
    Remap(RemapArgs),
    /// Print the month and day-type option lists
    Options(OptionsArgs),
}

/// Timezone and width selection shared by the classifier subcommands.
#[derive(clap::Args, Debug)]
pub struct ClassifierArgs {
    /// IANA timezone (default: America/Santiago)
    #[arg(short, long)]
    pub tz: Option<String>,

    /// Segment width in minutes, must divide 1440 (default: 15)
    #[arg(short, long)]
    pub width: Option<u32>,

    /// JSON config file with `timezone` and `segment_minutes`
    #[arg(long)]
    pub config: Option<PathBuf>,
}

#[derive(clap::Args, Debug)]
pub struct ClassifyArgs {
    #[command(flatten)]
    pub classifier: ClassifierArgs,

    /// Input format: auto, epoch_ms, epoch_s, iso8601
    #[arg(short = 'f', long, default_value = "auto")]
    pub format: String,

    /// Output format: json, text
    #[arg(long, default_value = "text")]
    pub output_format: String,

    /// Input file path (use - for stdin)
    #[arg(long, default_value = "-")]
    pub input: String,

    /// Read from stdin
    #[arg(long)]
    pub stdin: bool,
}

#[derive(clap::Args, Debug)]
pub struct LabelArgs {
    /// Segment index; omit to render "no selection"
    #[arg(short, long, allow_negative_numbers = true)]
    pub index: Option<i64>,

    /// Segment width in minutes
    #[arg(short, long, default_value_t = 15)]
    pub width: u32,

    /// Append the index in parentheses
    #[arg(long)]
    pub with_index: bool,

    /// Output format: json, text
    #[arg(long, default_value = "text")]
    pub output_format: String,
}

#[derive(clap::Args, Debug)]
pub struct RemapArgs {
    #[command(flatten)]
    pub classifier: ClassifierArgs,

    /// UTC-based segment index to remap (the local index with --inverse)
    #[arg(long, allow_negative_numbers = true)]
    pub utc_index: i64,

    /// Reference date (YYYY-MM-DD, UTC calendar date)
    #[arg(long)]
    pub date: String,

    /// Treat the index as local and map it back to UTC
    #[arg(long)]
    pub inverse: bool,

    /// Output format: json, text
    #[arg(long, default_value = "json")]
    pub output_format: String,
}

#[derive(clap::Args, Debug)]
pub struct OptionsArgs {
    /// Output format: json, text
    #[arg(long, default_value = "json")]
    pub output_format: String,
}
