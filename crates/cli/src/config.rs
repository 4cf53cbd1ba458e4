// crates/cli/src/config.rs
use crate::args::{AverageArgs, ReformatArgs, SeriesOptions};
use crate::error::AppError;
pub use perf_post_engine::config::{
    AverageConfig, AverageConfigBuilder, FileSeries, FileSeriesBuilder, ReformatConfig,
    ReformatConfigBuilder,
};

impl TryFrom<ReformatArgs> for ReformatConfig {
    type Error = AppError;

    fn try_from(args: ReformatArgs) -> Result<Self, Self::Error> {
        if args.output_prefix.is_empty() {
            return Err(AppError::Config(
                "--output-prefix must not be empty".to_string(),
            ));
        }

        ReformatConfigBuilder::default()
            .series(series_from_options(&args.series, args.prefix)?)
            .output_prefix(args.output_prefix)
            .build()
            .map_err(|e| AppError::Config(e.to_string()))
    }
}

impl TryFrom<AverageArgs> for AverageConfig {
    type Error = AppError;

    fn try_from(args: AverageArgs) -> Result<Self, Self::Error> {
        AverageConfigBuilder::default()
            .series(series_from_options(&args.series, args.prefix)?)
            .output(args.output)
            .build()
            .map_err(|e| AppError::Config(e.to_string()))
    }
}

fn series_from_options(options: &SeriesOptions, prefix: String) -> Result<FileSeries, AppError> {
    let mut builder = FileSeriesBuilder::default();
    builder
        .prefix(prefix)
        .first(options.first)
        .last(options.last);
    if let Some(dir) = &options.dir {
        builder.dir(dir.clone());
    }
    builder.build().map_err(|e| AppError::Config(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;
    use std::path::PathBuf;

    #[test]
    fn defaults_reproduce_literal_names() {
        let config = ReformatConfig::try_from(ReformatArgs::parse_from(["reformat"])).unwrap();
        assert_eq!(config, ReformatConfig::default());
        assert_eq!(config.series.path(1), PathBuf::from("rs1.txt"));
        assert_eq!(config.output_path(1), PathBuf::from("out_rs1.txt"));

        let config = AverageConfig::try_from(AverageArgs::parse_from(["average"])).unwrap();
        assert_eq!(config, AverageConfig::default());
        assert_eq!(config.output_path(), PathBuf::from("rc.txt"));
    }

    #[test]
    fn dir_applies_to_inputs_and_output() {
        let config =
            AverageConfig::try_from(AverageArgs::parse_from(["average", "--dir", "runs"])).unwrap();
        assert_eq!(config.series.path(10), PathBuf::from("runs").join("rc10.txt"));
        assert_eq!(config.output_path(), PathBuf::from("runs").join("rc.txt"));
    }

    #[test]
    fn inverted_range_is_rejected() {
        let args = ReformatArgs::parse_from(["reformat", "--first", "8", "--last", "2"]);
        let err = ReformatConfig::try_from(args).unwrap_err();
        assert!(matches!(err, AppError::Config(_)));
    }

    #[test]
    fn empty_output_prefix_is_rejected() {
        let args = ReformatArgs::parse_from(["reformat", "--output-prefix", ""]);
        assert!(ReformatConfig::try_from(args).is_err());
    }
}
