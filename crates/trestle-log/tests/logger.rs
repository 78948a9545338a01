use std::io::{self, Write};
use std::sync::{Arc, Mutex};

use trestle_log::{Level, Logger, OutputMode};

/// A `Write` sink the test can read back after handing it to the logger.
#[derive(Clone, Default)]
struct SharedBuf(Arc<Mutex<Vec<u8>>>);

impl SharedBuf {
    fn contents(&self) -> String {
        String::from_utf8(self.0.lock().unwrap().clone()).unwrap()
    }
}

impl Write for SharedBuf {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.0.lock().unwrap().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

fn captured_logger(mode: OutputMode) -> (Logger, SharedBuf) {
    let buf = SharedBuf::default();
    let mut logger = Logger::with_sink(buf.clone());
    logger.set_output_mode(mode);
    (logger, buf)
}

#[test]
fn info_is_dimmed_in_term_mode() {
    let (mut logger, buf) = captured_logger(OutputMode::Term);

    logger.info("test");

    assert_eq!(buf.contents(), "\x1b[2mtest\x1b[0m\n");
}

#[test]
fn text_mode_writes_plain_lines() {
    let (mut logger, buf) = captured_logger(OutputMode::Text);

    logger.info("test");

    assert_eq!(buf.contents(), "test\n");
}

#[test]
fn debug_is_suppressed_at_the_default_threshold() {
    let (mut logger, buf) = captured_logger(OutputMode::Text);

    logger.debug("hidden");

    assert_eq!(buf.contents(), "");
}

#[test]
fn lowering_the_threshold_reveals_debug() {
    let (mut logger, buf) = captured_logger(OutputMode::Text);
    logger.set_level(Level::Debug);

    logger.debug("visible");

    assert_eq!(buf.contents(), "visible\n");
}

#[test]
fn warn_is_yellow_in_term_mode() {
    let (mut logger, buf) = captured_logger(OutputMode::Term);

    logger.warn("watch out");

    assert_eq!(buf.contents(), "\x1b[33mwatch out\x1b[0m\n");
}

#[test]
fn error_is_red_in_term_mode() {
    let (mut logger, buf) = captured_logger(OutputMode::Term);

    logger.error("boom");

    assert_eq!(buf.contents(), "\x1b[31mboom\x1b[0m\n");
}

#[test]
fn critical_is_styled_and_always_emitted() {
    let (mut logger, buf) = captured_logger(OutputMode::Term);
    logger.set_level(Level::Critical);

    logger.critical("meltdown");

    let out = buf.contents();
    assert!(out.starts_with("\x1b["));
    assert!(out.contains("meltdown"));
    assert!(out.ends_with("\x1b[0m\n"));
}

#[test]
fn log_error_writes_the_plain_message() {
    let (mut logger, buf) = captured_logger(OutputMode::Term);
    let err = io::Error::other("exception");

    logger.log_error(&err);

    assert_eq!(buf.contents(), "exception\n");
}

#[test]
fn log_error_walks_the_source_chain() {
    #[derive(Debug)]
    struct Outer(io::Error);

    impl std::fmt::Display for Outer {
        fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
            f.write_str("render failed")
        }
    }

    impl std::error::Error for Outer {
        fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
            Some(&self.0)
        }
    }

    let (mut logger, buf) = captured_logger(OutputMode::Term);
    let err = Outer(io::Error::other("disk full"));

    logger.log_error(&err);

    assert_eq!(buf.contents(), "render failed\ncaused by: disk full\n");
}

#[test]
fn output_passes_rendered_tables_through_untouched() {
    let mut table = trestle::Table::new();
    table.set_headers(vec!["Name", "Age"]);
    table.add_row(vec!["Alice", "30"]);
    let rendered = table.render().unwrap();

    let (mut logger, buf) = captured_logger(OutputMode::Term);
    logger.output(&rendered);

    assert_eq!(buf.contents(), rendered);
}

#[test]
fn output_ignores_the_threshold() {
    let (mut logger, buf) = captured_logger(OutputMode::Text);
    logger.set_level(Level::Critical);

    logger.output("raw\n");

    assert_eq!(buf.contents(), "raw\n");
}
