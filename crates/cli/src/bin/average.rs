use clap::Parser;
use perf_post_cli::args::AverageArgs;
use perf_post_cli::{app, logging, presentation};
use std::process::ExitCode;

fn main() -> ExitCode {
    let args = AverageArgs::parse();

    if let Err(e) = logging::init(&args.log) {
        presentation::print_error(&e);
        return ExitCode::FAILURE;
    }

    match app::run_average(args) {
        Ok(_) => ExitCode::SUCCESS,
        Err(e) => {
            presentation::print_error(&e);
            ExitCode::FAILURE
        }
    }
}
