use derive_builder::Builder;
use serde::{Deserialize, Serialize};
use std::ops::RangeInclusive;
use std::path::{Path, PathBuf};

pub const DEFAULT_FIRST: u32 = 1;
pub const DEFAULT_LAST: u32 = 10;
pub const DEFAULT_EXTENSION: &str = "txt";

pub const REFORMAT_PREFIX: &str = "rs";
pub const REFORMAT_OUTPUT_PREFIX: &str = "out_";
pub const AVERAGE_PREFIX: &str = "rc";
pub const AVERAGE_OUTPUT: &str = "rc.txt";

/// A run of numbered files: `{dir}/{prefix}{i}.{extension}` for `i` in `first..=last`.
#[derive(Debug, Clone, PartialEq, Eq, Builder, Serialize, Deserialize)]
#[builder(setter(into), build_fn(validate = "Self::validate"))]
pub struct FileSeries {
    /// Empty means the working directory; paths then stay bare file names.
    #[builder(default)]
    pub dir: PathBuf,
    pub prefix: String,
    #[builder(default = "DEFAULT_FIRST")]
    pub first: u32,
    #[builder(default = "DEFAULT_LAST")]
    pub last: u32,
    #[builder(default = "DEFAULT_EXTENSION.to_string()")]
    pub extension: String,
}

impl FileSeriesBuilder {
    fn validate(&self) -> Result<(), String> {
        let first = self.first.unwrap_or(DEFAULT_FIRST);
        let last = self.last.unwrap_or(DEFAULT_LAST);
        if first > last {
            return Err(format!("empty file range {first}..={last}"));
        }
        if self.prefix.as_deref().is_some_and(str::is_empty) {
            return Err("file prefix must not be empty".to_string());
        }
        Ok(())
    }
}

impl FileSeries {
    /// Series `{prefix}1.txt` … `{prefix}10.txt` in the working directory.
    #[must_use]
    pub fn named(prefix: &str) -> Self {
        Self {
            dir: PathBuf::new(),
            prefix: prefix.to_string(),
            first: DEFAULT_FIRST,
            last: DEFAULT_LAST,
            extension: DEFAULT_EXTENSION.to_string(),
        }
    }

    #[must_use]
    pub fn indices(&self) -> RangeInclusive<u32> {
        self.first..=self.last
    }

    #[must_use]
    pub fn file_name(&self, index: u32) -> String {
        if self.extension.is_empty() {
            format!("{}{index}", self.prefix)
        } else {
            format!("{}{index}.{}", self.prefix, self.extension)
        }
    }

    #[must_use]
    pub fn path(&self, index: u32) -> PathBuf {
        self.dir.join(self.file_name(index))
    }

    /// Paths in ascending index order.
    pub fn paths(&self) -> impl Iterator<Item = (u32, PathBuf)> + '_ {
        self.indices().map(|i| (i, self.path(i)))
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Builder, Serialize, Deserialize)]
#[builder(setter(into))]
pub struct ReformatConfig {
    #[builder(default = "FileSeries::named(REFORMAT_PREFIX)")]
    pub series: FileSeries,
    #[builder(default = "REFORMAT_OUTPUT_PREFIX.to_string()")]
    pub output_prefix: String,
}

impl Default for ReformatConfig {
    fn default() -> Self {
        Self {
            series: FileSeries::named(REFORMAT_PREFIX),
            output_prefix: REFORMAT_OUTPUT_PREFIX.to_string(),
        }
    }
}

impl ReformatConfig {
    /// Output sits next to its input: `rs3.txt` becomes `out_rs3.txt`.
    #[must_use]
    pub fn output_path(&self, index: u32) -> PathBuf {
        let name = format!("{}{}", self.output_prefix, self.series.file_name(index));
        self.series.dir.join(name)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Builder, Serialize, Deserialize)]
#[builder(setter(into))]
pub struct AverageConfig {
    #[builder(default = "FileSeries::named(AVERAGE_PREFIX)")]
    pub series: FileSeries,
    /// Resolved against the series directory unless absolute.
    #[builder(default = "PathBuf::from(AVERAGE_OUTPUT)")]
    pub output: PathBuf,
}

impl Default for AverageConfig {
    fn default() -> Self {
        Self {
            series: FileSeries::named(AVERAGE_PREFIX),
            output: PathBuf::from(AVERAGE_OUTPUT),
        }
    }
}

impl AverageConfig {
    #[must_use]
    pub fn output_path(&self) -> PathBuf {
        resolve(&self.series.dir, &self.output)
    }
}

fn resolve(dir: &Path, file: &Path) -> PathBuf {
    if file.is_absolute() {
        file.to_path_buf()
    } else {
        dir.join(file)
    }
}
