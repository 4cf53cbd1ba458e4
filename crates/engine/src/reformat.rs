use crate::config::ReformatConfig;
use crate::error::{EngineError, Result};
use crate::text::{self, Lines};
use log::{debug, info, trace};
use serde::Serialize;
use std::fmt;
use std::fs::File;
use std::io::{BufRead, BufReader, BufWriter, Write};
use std::path::{Path, PathBuf};

/// One emitted output line: the 1-based input position and the line's second token.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Record<'a> {
    pub line_number: usize,
    pub value: &'a str,
}

impl<'a> Record<'a> {
    /// `None` for lines with fewer than two whitespace-separated tokens.
    #[must_use]
    pub fn from_line(line_number: usize, line: &'a str) -> Option<Self> {
        text::tokens(line)
            .nth(1)
            .map(|value| Self { line_number, value })
    }
}

impl fmt::Display for Record<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.line_number, self.value)
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct FileReport {
    pub lines: usize,
    pub records: usize,
}

impl FileReport {
    #[must_use]
    pub const fn dropped(&self) -> usize {
        self.lines - self.records
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProcessedFile {
    pub index: u32,
    pub input: PathBuf,
    pub output: PathBuf,
    pub report: FileReport,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ReformatSummary {
    pub processed: Vec<ProcessedFile>,
    pub skipped: Vec<PathBuf>,
}

/// Progress notification, delivered as each index of the series is handled.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReformatEvent<'a> {
    Skipped(&'a Path),
    Processed(&'a ProcessedFile),
}

/// Reformat every present file of the series.
///
/// Missing inputs are reported through `on_event` and skipped.
///
/// # Errors
///
/// Any read or write failure on a present file aborts the run. Files
/// handled before the failure keep their output.
pub fn run<F>(config: &ReformatConfig, mut on_event: F) -> Result<ReformatSummary>
where
    F: FnMut(ReformatEvent<'_>),
{
    let mut summary = ReformatSummary::default();

    for (index, input) in config.series.paths() {
        if !input.exists() {
            debug!("{} not found, skipping", input.display());
            on_event(ReformatEvent::Skipped(&input));
            summary.skipped.push(input);
            continue;
        }

        let output = config.output_path(index);
        if output == input {
            return Err(EngineError::Config(format!(
                "output would overwrite its input '{}'",
                input.display()
            )));
        }

        let report = reformat_file(&input, &output)?;
        let processed = ProcessedFile {
            index,
            input,
            output,
            report,
        };
        on_event(ReformatEvent::Processed(&processed));
        summary.processed.push(processed);
    }

    info!(
        "reformatted {} file(s), skipped {}",
        summary.processed.len(),
        summary.skipped.len()
    );
    if let Ok(json) = serde_json::to_string(&summary) {
        debug!("reformat summary: {json}");
    }

    Ok(summary)
}

/// Reformat `input` into `output`, truncating any previous output.
///
/// # Errors
///
/// Returns `FileRead` if `input` cannot be opened or read, `FileWrite` if
/// `output` cannot be created or written.
pub fn reformat_file(input: &Path, output: &Path) -> Result<FileReport> {
    let reader = text::open_input(input).map_err(|source| EngineError::FileRead {
        path: input.to_path_buf(),
        source,
    })?;
    let writer = File::create(output).map_err(|source| EngineError::FileWrite {
        path: output.to_path_buf(),
        source,
    })?;
    debug!("{} -> {}", input.display(), output.display());

    let mut writer = BufWriter::new(writer);
    let report = reformat_lines(BufReader::new(reader), &mut writer, input, output)?;
    writer.flush().map_err(|source| EngineError::FileWrite {
        path: output.to_path_buf(),
        source,
    })?;

    Ok(report)
}

/// Core line loop. `input`/`output` only label errors.
///
/// # Errors
///
/// Read failures (including invalid UTF-8) map to `FileRead`, write
/// failures to `FileWrite`.
pub fn reformat_lines<R: BufRead, W: Write>(
    reader: R,
    writer: &mut W,
    input: &Path,
    output: &Path,
) -> Result<FileReport> {
    let mut report = FileReport::default();
    let mut lines = Lines::new(reader);

    while let Some(line) = lines.next_line().map_err(|source| EngineError::FileRead {
        path: input.to_path_buf(),
        source,
    })? {
        report.lines += 1;

        let Some(record) = Record::from_line(report.lines, line) else {
            trace!("{}:{}: fewer than two tokens", input.display(), report.lines);
            continue;
        };
        writeln!(writer, "{record}").map_err(|source| EngineError::FileWrite {
            path: output.to_path_buf(),
            source,
        })?;
        report.records += 1;
    }

    Ok(report)
}
