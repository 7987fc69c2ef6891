//! End-to-end emission tests against the capture sink

use glyphlog_core::{
    log_e, CaptureSink, LogConfig, Logger, Severity, SourceLocation,
};
use std::sync::Arc;

fn capture_logger(config: LogConfig) -> (Logger, CaptureSink) {
    let capture = CaptureSink::new();
    let logger = Logger::with_sink(config, Arc::new(capture.clone()));
    (logger, capture)
}

fn main_location() -> SourceLocation {
    SourceLocation::new("/src/App/Main.ext", 42, 1, "run")
}

#[test]
fn test_error_scenario_exact_line() {
    let (logger, capture) = capture_logger(LogConfig::default().with_enabled(true));
    logger.error(format_args!("boom"), &main_location());
    assert_eq!(capture.lines(), vec![" Main.ext 第42行 run\n [‼️] boom \n"]);
}

#[test]
fn test_disabled_logger_writes_nothing() {
    let (logger, capture) = capture_logger(LogConfig::default().with_enabled(false));
    logger.error(format_args!("boom"), &main_location());
    logger.severe(format_args!("meltdown"), &main_location());
    assert!(capture.is_empty());
}

#[test]
fn test_all_severities_render_their_symbol() {
    let (logger, capture) = capture_logger(LogConfig::default().with_enabled(true));
    for severity in Severity::ALL {
        logger.emit(severity, format_args!("msg"), &main_location());
    }
    let lines = capture.lines();
    assert_eq!(lines.len(), Severity::ALL.len());
    for (line, severity) in lines.iter().zip(Severity::ALL) {
        assert!(
            line.contains(severity.symbol()),
            "line {:?} missing symbol for {:?}",
            line,
            severity
        );
    }
}

#[test]
fn test_convenience_methods_match_emit() {
    let (logger, capture) = capture_logger(LogConfig::default().with_enabled(true));
    let loc = main_location();
    logger.error(format_args!("m"), &loc);
    logger.info(format_args!("m"), &loc);
    logger.debug(format_args!("m"), &loc);
    logger.verbose(format_args!("m"), &loc);
    logger.warn(format_args!("m"), &loc);
    logger.severe(format_args!("m"), &loc);

    let via_methods = capture.lines();
    capture.clear();
    for severity in Severity::ALL {
        logger.emit(severity, format_args!("m"), &loc);
    }
    assert_eq!(via_methods, capture.lines());
}

#[test]
fn test_identical_calls_produce_identical_lines() {
    let (logger, capture) = capture_logger(LogConfig::default().with_enabled(true));
    let loc = main_location();
    logger.info(format_args!("twice"), &loc);
    logger.info(format_args!("twice"), &loc);
    let lines = capture.lines();
    assert_eq!(lines.len(), 2);
    assert_eq!(lines[0], lines[1]);
}

#[test]
fn test_timestamp_prefix_when_enabled() {
    let config = LogConfig::default()
        .with_enabled(true)
        .with_show_timestamp(true)
        .with_timestamp_pattern("%Y")
        .unwrap();
    let (logger, capture) = capture_logger(config);
    logger.info(format_args!("hello"), &main_location());

    let lines = capture.lines();
    let body = " Main.ext 第42行 run\n [ℹ️] hello \n";
    assert!(lines[0].ends_with(body));
    let prefix = &lines[0][..lines[0].len() - body.len()];
    assert_eq!(prefix.len(), 4);
    assert!(prefix.chars().all(|c| c.is_ascii_digit()));
}

#[test]
fn test_no_timestamp_segment_when_disabled() {
    let config = LogConfig::default()
        .with_enabled(true)
        .with_show_timestamp(false);
    let (logger, capture) = capture_logger(config);
    logger.debug(format_args!("quiet"), &main_location());
    assert_eq!(capture.lines(), vec![" Main.ext 第42行 run\n [💬] quiet \n"]);
}

#[test]
fn test_path_without_separator_used_whole() {
    let (logger, capture) = capture_logger(LogConfig::default().with_enabled(true));
    logger.info(
        format_args!("m"),
        &SourceLocation::new("nofile", 7, 1, "go"),
    );
    assert_eq!(capture.lines(), vec![" nofile 第7行 go\n [ℹ️] m \n"]);
}

#[test]
fn test_macro_captures_call_site() {
    let (logger, capture) = capture_logger(LogConfig::default().with_enabled(true));
    log_e!(logger, "boom {}", 1);
    let lines = capture.lines();
    assert_eq!(lines.len(), 1);
    assert!(lines[0].contains("emit_format_tests.rs"));
    assert!(lines[0].contains("test_macro_captures_call_site"));
    assert!(lines[0].contains("[‼️] boom 1"));
}

#[test]
fn test_macro_on_disabled_logger_is_noop() {
    let (logger, capture) = capture_logger(LogConfig::default().with_enabled(false));
    log_e!(logger, "boom");
    assert!(capture.is_empty());
}
