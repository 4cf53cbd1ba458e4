use crate::config::AverageConfig;
use crate::error::{EngineError, Result, SampleError};
use crate::repr::format_float;
use crate::text::{self, Lines};
use log::{debug, info, trace};
use serde::Serialize;
use std::collections::BTreeMap;
use std::fs::File;
use std::io::{self, BufRead, BufReader, BufWriter, ErrorKind, Write};
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Sample {
    pub index: i64,
    pub value: f64,
}

impl Sample {
    /// Parse an `<index> <value>` line.
    ///
    /// Lines that do not have exactly two tokens yield `Ok(None)`.
    ///
    /// # Errors
    ///
    /// A two-token line whose index is not an integer or whose value is not
    /// a float.
    pub fn parse(line: &str) -> std::result::Result<Option<Self>, SampleError> {
        let mut tokens = text::tokens(line);
        let (Some(index), Some(value), None) = (tokens.next(), tokens.next(), tokens.next())
        else {
            return Ok(None);
        };

        let index = index
            .parse::<i64>()
            .map_err(|source| SampleError::InvalidIndex {
                token: index.to_string(),
                source,
            })?;
        let value = value
            .parse::<f64>()
            .map_err(|source| SampleError::InvalidValue {
                token: value.to_string(),
                source,
            })?;

        Ok(Some(Self { index, value }))
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct ReadReport {
    pub lines: usize,
    pub samples: usize,
}

/// Every value seen so far, grouped by index.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Aggregate {
    values: BTreeMap<i64, Vec<f64>>,
}

impl Aggregate {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, sample: Sample) {
        self.values
            .entry(sample.index)
            .or_default()
            .push(sample.value);
    }

    /// Distinct indices.
    #[must_use]
    pub fn len(&self) -> usize {
        self.values.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// `(index, mean)` in ascending index order.
    pub fn means(&self) -> impl Iterator<Item = (i64, f64)> + '_ {
        self.values
            .iter()
            .map(|(&index, values)| (index, mean(values)))
    }

    /// Fold every sample line of `reader` into the aggregate.
    ///
    /// # Errors
    ///
    /// `FileRead` on I/O failure, `InvalidSample` on the first unparsable
    /// two-token line. `path` labels both.
    pub fn extend_from_reader<R: BufRead>(&mut self, reader: R, path: &Path) -> Result<ReadReport> {
        let mut report = ReadReport::default();
        let mut lines = Lines::new(reader);

        while let Some(line) = lines.next_line().map_err(|source| EngineError::FileRead {
            path: path.to_path_buf(),
            source,
        })? {
            report.lines += 1;

            match Sample::parse(line) {
                Ok(Some(sample)) => {
                    self.insert(sample);
                    report.samples += 1;
                }
                Ok(None) => trace!("{}:{}: not a sample line", path.display(), report.lines),
                Err(source) => {
                    return Err(EngineError::InvalidSample {
                        path: path.to_path_buf(),
                        line: report.lines,
                        source,
                    });
                }
            }
        }

        Ok(report)
    }

    /// Write one `<index> <mean>` line per index.
    ///
    /// # Errors
    ///
    /// Propagates writer failures.
    pub fn write_means<W: Write>(&self, writer: &mut W) -> io::Result<()> {
        for (index, mean) in self.means() {
            writeln!(writer, "{index} {}", format_float(mean))?;
        }
        Ok(())
    }
}

impl Extend<Sample> for Aggregate {
    fn extend<I: IntoIterator<Item = Sample>>(&mut self, iter: I) {
        for sample in iter {
            self.insert(sample);
        }
    }
}

#[allow(clippy::cast_precision_loss)]
fn mean(values: &[f64]) -> f64 {
    compensated_sum(values) / values.len() as f64
}

/// Neumaier summation: exact for sums whose rounding error fits one `f64`.
fn compensated_sum(values: &[f64]) -> f64 {
    let mut sum = 0.0_f64;
    let mut compensation = 0.0_f64;
    for &value in values {
        let total = sum + value;
        if sum.abs() >= value.abs() {
            compensation += (sum - total) + value;
        } else {
            compensation += (value - total) + sum;
        }
        sum = total;
    }
    // A non-finite correction would turn an overflowed sum into NaN.
    if compensation != 0.0 && compensation.is_finite() {
        sum += compensation;
    }
    sum
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct AverageSummary {
    pub files: usize,
    pub lines: usize,
    pub samples: usize,
    pub indices: usize,
    pub output: PathBuf,
}

impl AverageSummary {
    #[must_use]
    pub const fn skipped_lines(&self) -> usize {
        self.lines - self.samples
    }
}

/// Average the whole series into the configured output file.
///
/// The output is only created once every input has been read.
///
/// # Errors
///
/// `MissingInput` for an absent series file, `InvalidSample` for a bad
/// token, `FileRead`/`FileWrite` for other I/O failures.
pub fn run(config: &AverageConfig) -> Result<AverageSummary> {
    let mut aggregate = Aggregate::new();
    let mut summary = AverageSummary::default();

    for (_, path) in config.series.paths() {
        let report = read_file(&mut aggregate, &path)?;
        debug!(
            "{}: {} sample(s) from {} line(s)",
            path.display(),
            report.samples,
            report.lines
        );
        summary.files += 1;
        summary.lines += report.lines;
        summary.samples += report.samples;
    }

    if aggregate.is_empty() {
        debug!("no samples in {} file(s)", summary.files);
    }
    let output = config.output_path();
    write_file(&aggregate, &output)?;

    summary.indices = aggregate.len();
    summary.output = output;
    info!(
        "averaged {} index(es) from {} file(s) into {}",
        summary.indices,
        summary.files,
        summary.output.display()
    );
    if let Ok(json) = serde_json::to_string(&summary) {
        debug!("average summary: {json}");
    }

    Ok(summary)
}

fn read_file(aggregate: &mut Aggregate, path: &Path) -> Result<ReadReport> {
    let file = text::open_input(path).map_err(|source| match source.kind() {
        ErrorKind::NotFound => EngineError::MissingInput {
            path: path.to_path_buf(),
        },
        _ => EngineError::FileRead {
            path: path.to_path_buf(),
            source,
        },
    })?;
    aggregate.extend_from_reader(BufReader::new(file), path)
}

fn write_file(aggregate: &Aggregate, path: &Path) -> Result<()> {
    let to_write_error = |source| EngineError::FileWrite {
        path: path.to_path_buf(),
        source,
    };
    let file = File::create(path).map_err(to_write_error)?;
    let mut writer = BufWriter::new(file);
    aggregate.write_means(&mut writer).map_err(to_write_error)?;
    writer.flush().map_err(to_write_error)
}
