//! End-to-end analysis pipeline tests
//!
//! Drives the library API the way the binary does: read a log file,
//! parse its scenario blocks, analyze each one, and format the results.

use simlog_analyzer::{
    analyzer::{analyze_block, ConsoleLine},
    output::{OutputFormatter, PlainFormatter},
    parser::{parse_file, read_lines},
    ThroughputCurve,
};
use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;

fn write_sample_log(records: usize) -> (TempDir, PathBuf) {
    let mut content = String::new();
    for i in 0..records {
        content.push_str(&format!("Dense mesh (load test: {})\n", (i + 1) * 10));
        content.push_str("send time,0,1000000000,2000000000\n");
        content.push_str("# Retransmissions [count],0,1000000000,0\n");
        content.push_str("Packet delay [ns],500000000,250000000,125000000\n");
        content.push_str("Throughput [b/ms],0,0,0\n");
        content.push_str("serial errors,0,1,2\n");
        content.push('\n');
    }

    let dir = TempDir::new().unwrap();
    let path = dir.path().join("run.log");
    fs::write(&path, &content).unwrap();
    (dir, path)
}

#[test]
fn test_full_pipeline_over_one_block() {
    let (_dir, path) = write_sample_log(4);

    let lines = read_lines(&path).unwrap();
    let blocks = parse_file(&lines).unwrap();
    assert_eq!(blocks.len(), 1);
    assert_eq!(blocks[0].records.len(), 4);

    let analysis = analyze_block(&blocks[0], 0.95);
    assert_eq!(analysis.scenario, "Dense mesh");
    assert_eq!(
        analysis.chart_title,
        "Network performance in Scenario: Dense mesh"
    );
    // Three plot series per record: retransmissions, delay, throughput.
    assert_eq!(analysis.all_curves().count(), 12);
}

#[test]
fn test_pipeline_console_lines_match_source_rows() {
    let (_dir, path) = write_sample_log(1);

    let lines = read_lines(&path).unwrap();
    let blocks = parse_file(&lines).unwrap();
    let analysis = analyze_block(&blocks[0], 0.95);
    let record = &analysis.records[0];
    assert_eq!(record.title, "load test: 10");

    // Console lines preserve the row order of the file: retransmissions,
    // delay, throughput, serial errors.
    assert_eq!(record.console.len(), 4);
    match &record.console[0] {
        ConsoleLine::Interval { label, interval, .. } => {
            assert_eq!(label, "# Retransm. load test: 10");
            assert_eq!(interval.lower, 0.0);
            assert_eq!(interval.upper, 1.0);
        }
        other => panic!("unexpected line: {:?}", other),
    }
    match &record.console[1] {
        ConsoleLine::Interval { label, interval, .. } => {
            assert_eq!(label, "Delay [s] load test: 10");
            assert_eq!(interval.lower, 0.125);
            assert_eq!(interval.upper, 0.5);
        }
        other => panic!("unexpected line: {:?}", other),
    }
    match &record.console[2] {
        ConsoleLine::Interval { label, unit, .. } => {
            assert_eq!(label, "Throughput [b/ms] load test: 10");
            assert_eq!(unit.as_deref(), Some("b/s"));
        }
        other => panic!("unexpected line: {:?}", other),
    }
    match &record.console[3] {
        ConsoleLine::SerialErrors { title, values } => {
            assert_eq!(title, "load test: 10");
            assert_eq!(values, &[0, 1, 2]);
        }
        other => panic!("unexpected line: {:?}", other),
    }
}

#[test]
fn test_pipeline_throughput_reconstruction() {
    let (_dir, path) = write_sample_log(1);

    let lines = read_lines(&path).unwrap();
    let blocks = parse_file(&lines).unwrap();
    let analysis = analyze_block(&blocks[0], 0.95);

    let thrp = analysis
        .records[0]
        .curves
        .iter()
        .find(|c| c.label.contains("Thrp"))
        .unwrap();
    assert_eq!(thrp.points.len(), ThroughputCurve::BUCKET_COUNT);

    // First sample: sent at 0 s with 0.5 s delay, spread over 501 buckets
    // with weight 1/500 each, scaled by the load of 10.
    assert!((thrp.points[0].1 - 10.0 / 500.0).abs() < 1e-12);
    // Bucket past the last covered millisecond stays empty.
    assert_eq!(thrp.points[2200].1, 0.0);
    // Time axis spans the 60 s observation window.
    assert_eq!(thrp.points[0].0, 0.0);
    assert!((thrp.points.last().unwrap().0 - 60.0).abs() < 1e-9);
}

#[test]
fn test_pipeline_formatted_output() {
    let (_dir, path) = write_sample_log(1);

    let lines = read_lines(&path).unwrap();
    let blocks = parse_file(&lines).unwrap();
    let analysis = analyze_block(&blocks[0], 0.95);

    let formatter = PlainFormatter::new();
    let rendered: Vec<String> = analysis.records[0]
        .console
        .iter()
        .map(|line| formatter.format_console_line(line))
        .collect();

    assert_eq!(
        rendered[1],
        "Delay [s] load test: 10  95% of the data is within  (0.125, 0.5)"
    );
    assert_eq!(
        rendered[3],
        "# serial comm. errors  load test: 10 :  [0 1 2]"
    );
}

#[test]
fn test_pipeline_multiple_blocks() {
    let mut content = String::new();
    for scenario in ["Dense mesh", "Sparse mesh"] {
        for load in [10, 20, 30, 40] {
            content.push_str(&format!("{} (load test: {})\n", scenario, load));
            content.push_str("send time,0,1000000000,2000000000\n");
            content.push_str("# Retransmissions [count],0,0,0\n");
            content.push_str("Packet delay [ns],500000000,250000000,125000000\n");
            content.push_str("Throughput [b/ms],0,0,0\n");
            content.push_str("serial errors,0,0,0\n");
            content.push('\n');
        }
        content.push('\n');
    }

    let dir = TempDir::new().unwrap();
    let path = dir.path().join("run.log");
    fs::write(&path, &content).unwrap();

    let lines = read_lines(&path).unwrap();
    let blocks = parse_file(&lines).unwrap();
    assert_eq!(blocks.len(), 2);
    assert_eq!(blocks[0].scenario(), "Dense mesh");
    assert_eq!(blocks[1].scenario(), "Sparse mesh");

    let second = analyze_block(&blocks[1], 0.99);
    assert_eq!(second.records.len(), 4);
    for record in &second.records {
        match &record.console[1] {
            ConsoleLine::Interval { interval, .. } => assert_eq!(interval.level, 0.99),
            other => panic!("unexpected line: {:?}", other),
        }
    }
}
