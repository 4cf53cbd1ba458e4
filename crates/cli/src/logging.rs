// crates/cli/src/logging.rs
use crate::args::LogOptions;
use crate::error::Result;
use std::io::Write;

/// Install the stderr logger. `RUST_LOG` takes precedence over the flags.
///
/// # Errors
///
/// Fails if a logger was already installed.
pub fn init(options: &LogOptions) -> Result<()> {
    let mut builder = env_logger::Builder::new();
    builder.filter_level(options.level_filter());
    builder.parse_default_env();
    builder.format(|buf, record| {
        writeln!(buf, "[{}] {}: {}", record.level(), record.target(), record.args())
    });
    builder.try_init()?;
    Ok(())
}
