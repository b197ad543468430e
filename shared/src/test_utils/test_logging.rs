use env_logger::Builder;
use log::{Level, LevelFilter, Log, Metadata, Record};
use std::sync::{Mutex, Once};

static INIT: Once = Once::new();
static CAPTURED: Mutex<Vec<CapturedLog>> = Mutex::new(Vec::new());

/// One log line recorded during a test run
#[derive(Clone, Debug)]
pub struct CapturedLog {
    pub level: Level,
    pub target: String,
    pub message: String,
}

// Records Warn and above for assertions, forwards everything to env_logger
struct CapturingLogger {
    inner: env_logger::Logger,
}

impl Log for CapturingLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= Level::Warn || self.inner.enabled(metadata)
    }

    fn log(&self, record: &Record) {
        if record.level() <= Level::Warn {
            if let Ok(mut captured) = CAPTURED.lock() {
                captured.push(CapturedLog {
                    level: record.level(),
                    target: record.target().to_string(),
                    message: record.args().to_string(),
                });
            }
        }
        self.inner.log(record);
    }

    fn flush(&self) {
        self.inner.flush();
    }
}

/// Initialize test logging with appropriate log level
///
/// Console output stays at Error unless LOG_LEVEL asks for more; warnings
/// and errors are always captured for [`logged`].
/// Usage: Call init_test_logging() at the beginning of each test helper.
pub fn init_test_logging() {
    INIT.call_once(|| {
        let level_filter = match std::env::var("LOG_LEVEL").as_deref() {
            Ok("warn") => LevelFilter::Warn,
            Ok("info") => LevelFilter::Info,
            Ok("debug") => LevelFilter::Debug,
            Ok("trace") => LevelFilter::Trace,
            _ => LevelFilter::Error,
        };

        let inner = Builder::from_default_env()
            .filter_level(level_filter)
            .is_test(true)
            .build();

        // set_boxed_logger fails if another harness got there first
        if log::set_boxed_logger(Box::new(CapturingLogger { inner })).is_ok() {
            log::set_max_level(level_filter.max(LevelFilter::Warn));
        }
    });
}

/// Captured lines at `level` whose message contains `needle`.
///
/// Tests run in parallel and share the logger, so match on something
/// unique to the test.
pub fn logged(level: Level, needle: &str) -> Vec<CapturedLog> {
    CAPTURED
        .lock()
        .map(|captured| {
            captured
                .iter()
                .filter(|log| log.level == level && log.message.contains(needle))
                .cloned()
                .collect()
        })
        .unwrap_or_default()
}
