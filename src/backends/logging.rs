//! Log sinks for the [`Logger`] capability.

use std::fs::OpenOptions;
use std::io::Write;
use std::path::{Path, PathBuf};

use tracing::{error, info, warn};

use crate::framework::Logger;

/// Forwards business log lines to the process-wide `tracing` subscriber.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingLogger;

impl Logger for TracingLogger {
    fn info(&self, message: &str) {
        info!(sink = "tracing", "{}", message);
    }

    fn error(&self, message: &str) {
        error!(sink = "tracing", "{}", message);
    }
}

/// Appends business log lines to a file, one per call.
///
/// The file is opened per write so no handle is held between calls. When the file
/// can not be written the line is dropped and a `warn!` is emitted instead.
#[derive(Debug, Clone)]
pub struct FileLogger {
    path: PathBuf,
}

impl FileLogger {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn append(&self, level: &str, message: &str) {
        let written = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)
            .and_then(|mut file| writeln!(file, "[{}] {}", level, message));
        if let Err(e) = written {
            warn!(path = %self.path.display(), error = %e, "Dropped log line");
        }
    }
}

impl Logger for FileLogger {
    fn info(&self, message: &str) {
        self.append("INFO", message);
    }

    fn error(&self, message: &str) {
        self.append("ERROR", message);
    }
}
