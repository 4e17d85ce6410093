//! Integration tests for the telemetry core
//!
//! These tests verify:
//! - Level tagging for file, writer and custom sinks
//! - Transaction ordering, commit-once and cross-sink delivery
//! - Write failure degradation
//! - Configuration driven settings

use parking_lot::Mutex;
use std::fs;
use std::io;
use std::sync::Arc;
use telemetry::prelude::*;
use telemetry::{config, logf};
use tempfile::TempDir;

const CONTENT: &str = "the quick brown fox jumps over the lazy dog";
const MORE_CONTENT: &str = "พยัญชนะ(⟨б⟩, ⟨в⟩, ⟨г⟩, ⟨д⟩, ⟨ж⟩, ⟨з⟩, ⟨к⟩, ⟨л⟩)";

struct ErrorSink;

impl OutputSink for ErrorSink {
    fn write(&self, _record: &[u8]) -> io::Result<usize> {
        Err(io::Error::new(io::ErrorKind::Other, "intentional write error"))
    }

    fn name(&self) -> &str {
        "error"
    }
}

fn capture_diagnostics() -> (Diagnostics, Arc<Mutex<Vec<String>>>) {
    let lines = Arc::new(Mutex::new(Vec::new()));
    let lines_clone = Arc::clone(&lines);
    let diagnostics = Diagnostics::with_callback(Arc::new(move |line: &str| {
        lines_clone.lock().push(line.to_string());
    }));
    (diagnostics, lines)
}

fn all_levels() -> Vec<Level> {
    vec![
        Level::NoLevel,
        Level::Error,
        Level::Warn,
        Level::Info,
        Level::Debug,
        Level::custom("CRITICAL"),
    ]
}

#[test]
fn test_file_levels() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let log_file = temp_dir.path().join("levels.log");

    for level in all_levels() {
        fs::write(&log_file, b"").expect("Failed to truncate log file");

        let out = Emitter::file(&log_file).expect("Failed to open file sink");
        out.with_level(level.clone()).log(CONTENT);
        out.with_level(level.clone()).log(MORE_CONTENT);

        let content = fs::read_to_string(&log_file).expect("Failed to read log file");
        let tag = level.type_tag();
        assert!(content.contains(&format!("{} {}\n", tag, CONTENT)));
        assert!(content.contains(&format!("{} {}\n", tag, MORE_CONTENT)));
        assert_eq!(content.lines().count(), 2);
    }
}

#[test]
fn test_writer_sink_levels() {
    for level in all_levels() {
        let sink = Arc::new(WriterSink::new(Vec::new()));
        let out = Emitter::from_shared(sink.clone());
        out.with_level(level.clone()).log(CONTENT);

        drop(out);
        let sink = Arc::try_unwrap(sink).ok().expect("sink still shared");
        let written = String::from_utf8(sink.into_inner()).expect("utf-8 output");
        let expected = format!("{} {}\n", level.type_tag(), CONTENT);
        assert!(written.ends_with(&expected));
    }
}

#[test]
fn test_empty_content_with_info() {
    let sink = MemorySink::new();
    Emitter::new(sink.clone()).info().log("");

    let written = sink.contents_string();
    assert!(written.ends_with("INFO \n"));
    assert_eq!(written.matches('\n').count(), 1);
}

#[test]
fn test_record_layout_with_metadata() {
    let sink = MemorySink::new();
    let out = Emitter::new(sink.clone())
        .with_settings(Settings::new().with_timestamp_pattern("%Y"))
        .with_field("something", "clean");

    out.info().log("WORLD");

    let written = sink.contents_string();
    let (year, rest) = written.split_once(' ').expect("timestamp segment");
    assert_eq!(year.len(), 4);
    assert!(year.chars().all(|c| c.is_ascii_digit()));
    assert_eq!(rest, "INFO something:clean WORLD\n");
}

#[test]
fn test_logf_formats_content_only() {
    let sink = MemorySink::new();
    let out = Emitter::new(sink.clone()).warn();
    logf!(out, "{} of {} workers idle", 3, 8);

    assert!(sink.contents_string().ends_with("WARN 3 of 8 workers idle\n"));
}

#[test]
fn test_transaction_to_file() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let log_file = temp_dir.path().join("tx.log");

    let to_file = Emitter::file(&log_file).expect("Failed to open file sink");
    let mut tx = Transaction::begin();
    tx.append(&to_file.info().with_content("l1"));
    tx.append(&to_file.with_level(Level::custom("MAJOR")).with_content("l2"));
    tx.append(&to_file.warn().with_content("l3"));

    // Nothing is written before the flush
    assert_eq!(fs::read_to_string(&log_file).expect("read"), "");

    assert_eq!(tx.flush(), CommitOutcome::Flushed { written: 3, failed: 0 });

    let content = fs::read_to_string(&log_file).expect("Failed to read log file");
    let lines: Vec<&str> = content.lines().collect();
    assert_eq!(lines.len(), 3);

    let marker = format!("| TRANSACTION - {} |", tx.id());
    assert!(lines.iter().all(|line| line.contains(&marker)));
    assert!(lines[0].ends_with(&format!("{} INFO l1", marker)));
    assert!(lines[1].ends_with(&format!("{} MAJOR l2", marker)));
    assert!(lines[2].ends_with(&format!("{} WARN l3", marker)));
}

#[test]
fn test_transaction_commit_once_on_file() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let log_file = temp_dir.path().join("tx_once.log");

    let to_file = Emitter::file(&log_file).expect("Failed to open file sink");
    let mut tx = Transaction::begin();
    tx.append(&to_file.debug().with_content("only once"));

    tx.flush();
    tx.flush();
    tx.append(&to_file.debug().with_content("too late"));
    tx.flush();

    let content = fs::read_to_string(&log_file).expect("Failed to read log file");
    assert_eq!(content.matches("only once").count(), 1);
    assert!(!content.contains("too late"));
}

#[test]
fn test_cross_sink_transaction() {
    let x = MemorySink::new();
    let y = MemorySink::new();

    let mut tx = Transaction::begin_with_metadata(Metadata::new().with_field("order", 42));
    tx.append(&Emitter::new(x.clone()).info().with_content("to x"));
    tx.append(&Emitter::new(y.clone()).warn().with_content("to y"));
    tx.flush();

    let x_written = x.contents_string();
    let y_written = y.contents_string();

    assert!(x_written.ends_with("INFO order:42 to x\n"));
    assert!(!x_written.contains("to y"));
    assert!(y_written.ends_with("WARN order:42 to y\n"));
    assert!(!y_written.contains("to x"));
    assert_eq!(x.write_count(), 1);
    assert_eq!(y.write_count(), 1);
}

#[test]
fn test_write_failure_degradation() {
    let (diagnostics, lines) = capture_diagnostics();

    let out = Emitter::new(ErrorSink).with_diagnostics(diagnostics.clone());
    out.error().log("the database is on fire");

    let mut tx = Transaction::begin().with_diagnostics(diagnostics);
    tx.append(&out.info().with_content("queued then lost"));
    assert_eq!(tx.flush(), CommitOutcome::Flushed { written: 0, failed: 1 });

    let lines = lines.lock();
    assert!(lines[0].contains("the database is on fire"));
    assert!(lines[0].contains("intentional write error"));
    assert!(lines[1].contains("queued then lost"));
    assert!(lines[1].contains("intentional write error"));
}

#[test]
fn test_settings_from_config_file() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let config_file = temp_dir.path().join("telemetry.json");
    fs::write(
        &config_file,
        r#"{ "formatting": {
                "log": { "formatting_disabled": true },
                "tx": { "timestamp": "%Y" }
           } }"#,
    )
    .expect("Failed to write config");

    let (diagnostics, lines) = capture_diagnostics();
    let cfg = config::load_or_default(&config_file, &diagnostics);

    let sink = MemorySink::new();
    let out = Emitter::new(sink.clone()).with_settings(cfg.log_settings(&diagnostics));
    out.info().log("raw line");
    assert_eq!(sink.contents(), b"raw line".to_vec());

    sink.clear();
    let mut tx = Transaction::begin().with_settings(cfg.tx_settings(&diagnostics));
    tx.append(&out.info().with_content("formatted"));
    tx.flush();

    let written = sink.contents_string();
    let expected = format!("| TRANSACTION - {} | INFO formatted\n", tx.id());
    assert!(written.ends_with(&expected));
    assert!(lines.lock().is_empty());
}

#[test]
fn test_missing_config_falls_back_to_defaults() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let (diagnostics, lines) = capture_diagnostics();

    let cfg = config::load_or_default(temp_dir.path().join("absent.json"), &diagnostics);

    assert_eq!(cfg, TelemetryConfig::default());
    assert_eq!(lines.lock().len(), 1);
}
