// crates/cli/src/app.rs
use crate::args::{AverageArgs, ReformatArgs};
use crate::config::{AverageConfig, ReformatConfig};
use crate::error::Result;
use crate::presentation;
use perf_post_engine::{AverageSummary, ReformatSummary, average, reformat};

/// Run the reformatter, printing a notice per file as it goes.
///
/// # Errors
///
/// Invalid arguments or any fatal engine error.
pub fn run_reformat(args: ReformatArgs) -> Result<ReformatSummary> {
    let config = ReformatConfig::try_from(args)?;
    log::debug!("reformat config: {config:?}");
    Ok(reformat::run(&config, presentation::print_reformat_event)?)
}

/// Run the averager. Prints nothing on success.
///
/// # Errors
///
/// Invalid arguments or any fatal engine error.
pub fn run_average(args: AverageArgs) -> Result<AverageSummary> {
    let config = AverageConfig::try_from(args)?;
    log::debug!("average config: {config:?}");
    Ok(average::run(&config)?)
}
