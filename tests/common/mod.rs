//! Shared utilities for integration tests.

use std::io;
use std::sync::{Arc, Mutex};

use hello_log::config::LoggingConfig;
use hello_log::observability::subscriber;
use tracing_subscriber::fmt::MakeWriter;

/// In-memory sink that records everything the subscriber writes.
#[derive(Clone, Default)]
pub struct CapturedOutput(Arc<Mutex<Vec<u8>>>);

impl CapturedOutput {
    pub fn contents(&self) -> String {
        String::from_utf8(self.0.lock().unwrap().clone()).unwrap()
    }

    pub fn lines(&self) -> Vec<String> {
        self.contents().lines().map(str::to_owned).collect()
    }
}

impl io::Write for CapturedOutput {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.0.lock().unwrap().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

impl<'a> MakeWriter<'a> for CapturedOutput {
    type Writer = CapturedOutput;

    fn make_writer(&'a self) -> Self::Writer {
        self.clone()
    }
}

/// Run `f` under a scoped subscriber built from `level` and return what it wrote.
pub fn capture(level: &str, f: impl FnOnce()) -> CapturedOutput {
    let output = CapturedOutput::default();
    let sub = subscriber(&LoggingConfig::with_level(level), output.clone()).unwrap();
    tracing::subscriber::with_default(sub, f);
    output
}
