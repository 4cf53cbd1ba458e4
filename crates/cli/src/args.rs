// crates/cli/src/args.rs
use std::path::PathBuf;

use clap::{ArgAction, Args, Parser, ValueHint};
use log::LevelFilter;
use perf_post_engine::config::{
    AVERAGE_OUTPUT, AVERAGE_PREFIX, DEFAULT_FIRST, DEFAULT_LAST, REFORMAT_OUTPUT_PREFIX,
    REFORMAT_PREFIX,
};

/// Which numbered files to read.
#[derive(Args, Debug, Clone)]
pub struct SeriesOptions {
    /// Directory holding the numbered files (default: working directory)
    #[arg(short = 'C', long, value_hint = ValueHint::DirPath, help_heading = "Input")]
    pub dir: Option<PathBuf>,

    /// First file index
    #[arg(long, default_value_t = DEFAULT_FIRST, help_heading = "Input")]
    pub first: u32,

    /// Last file index (inclusive)
    #[arg(long, default_value_t = DEFAULT_LAST, help_heading = "Input")]
    pub last: u32,
}

#[derive(Args, Debug, Clone, Default)]
pub struct LogOptions {
    /// More log output on stderr (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = ArgAction::Count, help_heading = "Logging")]
    pub verbose: u8,

    /// Only log errors
    #[arg(short, long, conflicts_with = "verbose", help_heading = "Logging")]
    pub quiet: bool,
}

impl LogOptions {
    #[must_use]
    pub const fn level_filter(&self) -> LevelFilter {
        if self.quiet {
            return LevelFilter::Error;
        }
        match self.verbose {
            0 => LevelFilter::Warn,
            1 => LevelFilter::Info,
            2 => LevelFilter::Debug,
            _ => LevelFilter::Trace,
        }
    }
}

/// Pair each line's second token with its line number.
#[derive(Parser, Debug, Clone)]
#[command(
    name = "reformat",
    version = crate::VERSION,
    about = "Rewrite rs1.txt..rs10.txt as `<line> <second token>` into out_rs*.txt"
)]
pub struct ReformatArgs {
    #[command(flatten)]
    pub series: SeriesOptions,

    /// Input file prefix
    #[arg(long, default_value = REFORMAT_PREFIX, help_heading = "Input")]
    pub prefix: String,

    /// Prefix prepended to each input file name to name its output
    #[arg(long, default_value = REFORMAT_OUTPUT_PREFIX, help_heading = "Output")]
    pub output_prefix: String,

    #[command(flatten)]
    pub log: LogOptions,
}

/// Average values sharing an index across result files.
#[derive(Parser, Debug, Clone)]
#[command(
    name = "average",
    version = crate::VERSION,
    about = "Average rc1.txt..rc10.txt by index into rc.txt"
)]
pub struct AverageArgs {
    #[command(flatten)]
    pub series: SeriesOptions,

    /// Input file prefix
    #[arg(long, default_value = AVERAGE_PREFIX, help_heading = "Input")]
    pub prefix: String,

    /// Output file, relative to --dir unless absolute
    #[arg(short, long, default_value = AVERAGE_OUTPUT, value_hint = ValueHint::FilePath, help_heading = "Output")]
    pub output: PathBuf,

    #[command(flatten)]
    pub log: LogOptions,
}
