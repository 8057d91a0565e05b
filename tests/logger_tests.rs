// Dispatch behavior of the public Logger API
use sevlog::labels::LabelTable;
use sevlog::logger::Logger;
use sevlog::severity::Severity;

fn fixture_logger() -> Logger {
    Logger::new(
        "",
        LabelTable::new("Info! ", "Debug! ", "Error: ", "Warning: "),
    )
}

#[test]
fn test_dispatch_formats_header_label_message() {
    let logger = fixture_logger();
    let mut out = Vec::new();
    logger
        .write_line(&mut out, Severity::Info, "The executable started!")
        .unwrap();
    assert_eq!(
        String::from_utf8(out).unwrap(),
        "Info! The executable started!\n"
    );
}

#[test]
fn test_dispatch_with_nonempty_header() {
    let logger = Logger::new(
        "[fixture] ",
        LabelTable::new("Info! ", "Debug! ", "Error: ", "Warning: "),
    );
    let mut out = Vec::new();
    logger
        .write_line(&mut out, Severity::Error, "The executable has stopped")
        .unwrap();
    assert_eq!(
        String::from_utf8(out).unwrap(),
        "[fixture] Error: The executable has stopped\n"
    );
}

#[test]
fn test_every_valid_code_writes_one_line() {
    let logger = fixture_logger();
    for severity in Severity::ALL {
        let mut out = Vec::new();
        let mut err = Vec::new();
        logger
            .dispatch_code_to(&mut out, &mut err, "message", severity.code())
            .unwrap();
        let expected = format!("{}\n", logger.format_line(severity, "message"));
        assert_eq!(String::from_utf8(out).unwrap(), expected);
        assert!(err.is_empty(), "no diagnostic for {severity}");
    }
}

#[test]
fn test_code_at_count_boundary_is_rejected() {
    let logger = fixture_logger();
    let mut out = Vec::new();
    let mut err = Vec::new();
    logger
        .dispatch_code_to(&mut out, &mut err, "oops", Severity::COUNT as i64)
        .unwrap();
    assert!(out.is_empty(), "success stream must stay untouched");
    assert_eq!(
        String::from_utf8(err).unwrap(),
        "Severity out of range (4) for message oops\n"
    );
}

#[test]
fn test_large_code_diagnostic_includes_code_and_message() {
    let logger = fixture_logger();
    let mut out = Vec::new();
    let mut err = Vec::new();
    logger
        .dispatch_code_to(&mut out, &mut err, "too big", 1000)
        .unwrap();
    assert_eq!(
        String::from_utf8(err).unwrap(),
        "Severity out of range (1000) for message too big\n"
    );
}

#[test]
fn test_wrapper_codes_match_dispatch_codes() {
    // info/debug/error/warn are dispatch with the fixed code; the formatted
    // result must equal the raw-code path at the corresponding code
    let logger = fixture_logger();
    let cases = [
        (Severity::Info, 0),
        (Severity::Debug, 1),
        (Severity::Error, 2),
        (Severity::Warn, 3),
    ];
    for (severity, code) in cases {
        let mut out = Vec::new();
        let mut err = Vec::new();
        logger
            .dispatch_code_to(&mut out, &mut err, "m", code)
            .unwrap();
        assert_eq!(
            String::from_utf8(out).unwrap(),
            format!("{}\n", logger.format_line(severity, "m"))
        );
    }
}

#[test]
fn test_reinitialize_takes_effect_for_subsequent_dispatch() {
    let mut logger = fixture_logger();
    logger.reinitialize(
        "app: ",
        LabelTable::new("[I] ", "[D] ", "[E] ", "[W] "),
    );

    let mut out = Vec::new();
    logger
        .write_line(&mut out, Severity::Warn, "rotated")
        .unwrap();
    assert_eq!(String::from_utf8(out).unwrap(), "app: [W] rotated\n");
}

#[test]
fn test_empty_message_still_emits_line() {
    let logger = fixture_logger();
    let mut out = Vec::new();
    logger.write_line(&mut out, Severity::Debug, "").unwrap();
    assert_eq!(String::from_utf8(out).unwrap(), "Debug! \n");
}

/// Writer that always fails, for exercising error propagation
struct BrokenWriter;

impl std::io::Write for BrokenWriter {
    fn write(&mut self, _buf: &[u8]) -> std::io::Result<usize> {
        Err(std::io::Error::new(
            std::io::ErrorKind::BrokenPipe,
            "stream closed",
        ))
    }

    fn flush(&mut self) -> std::io::Result<()> {
        Ok(())
    }
}

#[test]
fn test_write_line_propagates_stream_failure() {
    let logger = fixture_logger();
    let result = logger.write_line(&mut BrokenWriter, Severity::Info, "m");
    assert!(result.is_err(), "writer failure must surface");
}

#[test]
fn test_dispatch_code_propagates_stream_failure() {
    let logger = fixture_logger();
    let mut err = Vec::new();
    let result = logger.dispatch_code_to(&mut BrokenWriter, &mut err, "m", 0);
    assert_eq!(
        result.unwrap_err().kind(),
        std::io::ErrorKind::BrokenPipe
    );
}

#[test]
fn test_positional_table_matches_fixture_order() {
    // Positional construction, indexed by severity code
    let logger = Logger::new(
        "",
        LabelTable::from_slice(&["Info! ", "Debug! ", "Error: ", "Warning: "]),
    );
    assert_eq!(
        logger.format_line(Severity::Error, "The executable has stopped"),
        "Error: The executable has stopped"
    );
    assert_eq!(
        logger.format_line(Severity::Warn, "The executable is about to stop"),
        "Warning: The executable is about to stop"
    );
}
