// crates/cli/src/presentation.rs
use crate::error::AppError;
use perf_post_engine::ReformatEvent;

/// Console notice for one reformat step.
#[must_use]
pub fn reformat_notice(event: ReformatEvent<'_>) -> String {
    match event {
        ReformatEvent::Skipped(input) => format!("Skipping {}, not found.", input.display()),
        ReformatEvent::Processed(file) => format!(
            "Processed {} → {}",
            file.input.display(),
            file.output.display()
        ),
    }
}

pub fn print_reformat_event(event: ReformatEvent<'_>) {
    println!("{}", reformat_notice(event));
}

pub fn print_error(err: &AppError) {
    eprintln!("Error: {err}");
}
