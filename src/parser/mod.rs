//! Log file parsing: test records, scenario blocks, and file walking
//!
//! The input is a line-oriented text format. A file is a sequence of
//! scenario blocks separated by blank lines; a block is a run of test
//! records, each a title line followed by comma-separated metric rows and
//! terminated by a blank line. Parsing is strict: the format carries fixed
//! assumptions and any violation aborts the whole analysis.

use crate::{
    error::{AppError, Result},
    models::{MetricRow, TestRecord},
    types::SECOND,
};
use std::path::Path;

/// Minimum remaining lines required at the start of a scenario block:
/// four full records of six lines plus separators, less the final blank.
pub const MIN_BLOCK_LINES: usize = (6 + 1) * 4 - 1;

/// Minimum remaining lines required at the start of a test record
pub const MIN_RECORD_LINES: usize = 6;

/// Row index of the timestamp row within a record
const TIMESTAMP_ROW: usize = 1;
/// Row index of the throughput placeholder row
const THROUGHPUT_ROW: usize = 4;
/// Row index of the serial error count row
const SERIAL_ROW: usize = 5;

/// A parsed scenario block with its consumed line count
#[derive(Debug, Clone)]
pub struct ScenarioBlock {
    /// Test records of this block, in file order
    pub records: Vec<TestRecord>,
    /// Lines consumed from the input slice, including the trailing blank
    pub consumed: usize,
}

impl ScenarioBlock {
    /// Scenario label shared by the block, taken from its first record
    pub fn scenario(&self) -> &str {
        self.records
            .first()
            .map(|r| r.scenario.as_str())
            .unwrap_or("")
    }
}

/// Read all lines of a log file, stripping line terminators
pub fn read_lines(path: &Path) -> Result<Vec<String>> {
    let contents = std::fs::read_to_string(path)
        .map_err(|e| AppError::io(format!("Failed to read {}: {}", path.display(), e)))?;
    Ok(contents.lines().map(str::to_string).collect())
}

/// Split a whole file into scenario blocks
///
/// Skips blank lines between blocks and delegates to
/// [`parse_scenario_block`], advancing by each block's consumed count.
pub fn parse_file(lines: &[String]) -> Result<Vec<ScenarioBlock>> {
    let mut blocks = Vec::new();
    let mut i = 0;

    while i < lines.len() {
        if lines[i].is_empty() {
            i += 1;
            continue;
        }
        let block = parse_scenario_block(&lines[i..])?;
        i += block.consumed;
        blocks.push(block);
    }

    Ok(blocks)
}

/// Parse one scenario block from the start of `lines`
///
/// Repeatedly parses test records while lines remain and the current line
/// is non-blank; a blank line ends the block and is consumed. The input
/// slice must hold at least [`MIN_BLOCK_LINES`] lines.
pub fn parse_scenario_block(lines: &[String]) -> Result<ScenarioBlock> {
    if lines.len() < MIN_BLOCK_LINES {
        return Err(AppError::validation(format!(
            "scenario block needs at least {} remaining lines, found {}",
            MIN_BLOCK_LINES,
            lines.len()
        )));
    }

    let mut records = Vec::new();
    let mut i = 0;

    while i < lines.len() {
        if lines[i].is_empty() {
            i += 1;
            break;
        }
        let (record, consumed) = parse_test_record(&lines[i..])?;
        i += consumed;
        records.push(record);
    }

    Ok(ScenarioBlock {
        records,
        consumed: i,
    })
}

/// Parse one test record from the start of `lines`
///
/// Returns the record and the number of lines consumed, including the
/// trailing blank line if present. The input slice must hold at least
/// [`MIN_RECORD_LINES`] lines.
pub fn parse_test_record(lines: &[String]) -> Result<(TestRecord, usize)> {
    if lines.len() < MIN_RECORD_LINES {
        return Err(AppError::validation(format!(
            "test record needs at least {} remaining lines, found {}",
            MIN_RECORD_LINES,
            lines.len()
        )));
    }

    let (scenario, title, load) = parse_title(&lines[0])?;

    let mut timescale: Vec<f64> = Vec::new();
    let mut rows = Vec::new();
    let mut i = 1;

    while i < lines.len() {
        let line = &lines[i];
        if line.is_empty() {
            i += 1;
            break;
        }

        let (label, cells) = split_row(line);

        match i {
            TIMESTAMP_ROW => {
                timescale = parse_int_cells(&cells, &label)?
                    .into_iter()
                    .map(|ns| ns as f64 / SECOND as f64)
                    .collect();
            }
            SERIAL_ROW => {
                let values = parse_int_cells(&cells, &label)?;
                rows.push(MetricRow::SerialErrors { label, values });
            }
            THROUGHPUT_ROW => {
                // Values of the placeholder row are recomputed, never read
                rows.push(MetricRow::ThroughputPlaceholder { label });
            }
            _ => {
                let values: Vec<f64> = parse_float_cells(&cells, &label)?
                    .into_iter()
                    .map(|v| v / SECOND as f64)
                    .collect();
                rows.push(classify_float_row(label, values, timescale.len())?);
            }
        }

        i += 1;
    }

    Ok((
        TestRecord {
            scenario,
            title,
            load,
            timescale,
            rows,
        },
        i,
    ))
}

/// Parse a record title line: `"<Label> (<Description>: <load>)"`
///
/// Returns the scenario label, the parenthetical title, and the load value.
fn parse_title(line: &str) -> Result<(String, String, u64)> {
    let (scenario, rest) = line
        .split_once(" (")
        .ok_or_else(|| AppError::parse(format!("title line missing \" (\": {:?}", line)))?;

    let end = rest
        .find(')')
        .ok_or_else(|| AppError::parse(format!("title line missing \")\": {:?}", line)))?;
    let title = &rest[..end];

    let pos = title
        .find(": ")
        .ok_or_else(|| AppError::parse(format!("title missing \": \" before load: {:?}", title)))?;
    let load = title[pos + 2..]
        .trim()
        .parse::<u64>()
        .map_err(|e| AppError::parse(format!("invalid load in title {:?}: {}", title, e)))?;

    Ok((scenario.to_string(), title.to_string(), load))
}

/// Split a metric row into its label cell and value cells
fn split_row(line: &str) -> (String, Vec<&str>) {
    let mut cells = line.split(',');
    let label = cells.next().unwrap_or("").to_string();
    (label, cells.collect())
}

/// Classify a float row as packet delay or retransmission counts
///
/// A label whose bracketed unit mentions "ns" must carry the "Packet delay"
/// prefix; delay rows must match the timestamp row's sample count since
/// each delay pairs with a send time.
fn classify_float_row(label: String, values: Vec<f64>, sample_count: usize) -> Result<MetricRow> {
    let unit = label.split_once(" [").map(|(_, unit)| unit);

    if let Some(unit) = unit {
        if unit.contains("ns") {
            let prefix = label.split_once(" [").map(|(p, _)| p).unwrap_or("");
            if prefix != "Packet delay" {
                return Err(AppError::parse(format!(
                    "nanosecond row must be labeled \"Packet delay\", found {:?}",
                    prefix
                )));
            }
            if values.len() != sample_count {
                return Err(AppError::parse(format!(
                    "packet delay row has {} values for {} timestamps",
                    values.len(),
                    sample_count
                )));
            }
            return Ok(MetricRow::Delay { label, values });
        }
    }

    Ok(MetricRow::Retransmissions { label, values })
}

/// Parse integer value cells, reporting the offending row label on failure
fn parse_int_cells(cells: &[&str], label: &str) -> Result<Vec<i64>> {
    cells
        .iter()
        .map(|cell| {
            cell.trim()
                .parse::<i64>()
                .map_err(|e| AppError::parse(format!("row {:?}: invalid integer {:?}: {}", label, cell, e)))
        })
        .collect()
}

/// Parse float value cells, reporting the offending row label on failure
fn parse_float_cells(cells: &[&str], label: &str) -> Result<Vec<f64>> {
    cells
        .iter()
        .map(|cell| {
            cell.trim()
                .parse::<f64>()
                .map_err(|e| AppError::parse(format!("row {:?}: invalid number {:?}: {}", label, cell, e)))
        })
        .collect()
}
