//! File sink implementation

use crate::core::{OutputSink, Result, TelemetryError};
use parking_lot::Mutex;
use std::fs::{File, OpenOptions};
use std::io::{self, Write};
use std::path::{Path, PathBuf};

/// Appends records to a file.
///
/// The file is opened in append mode and every record goes out in a single
/// `write_all` under an internal lock, so concurrent emitters sharing one
/// `FileSink` never interleave partial records.
pub struct FileSink {
    path: PathBuf,
    file: Mutex<File>,
    #[cfg(feature = "file")]
    process_lock: bool,
}

impl FileSink {
    /// Open (or create) `path` for appending
    pub fn open(path: impl Into<PathBuf>) -> Result<Self> {
        let path = path.into();
        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&path)
            .map_err(|e| {
                TelemetryError::io_operation(
                    "opening log file",
                    format!("cannot open '{}' for appending", path.display()),
                    e,
                )
            })?;

        Ok(Self {
            path,
            file: Mutex::new(file),
            #[cfg(feature = "file")]
            process_lock: false,
        })
    }

    /// Also hold an exclusive advisory lock on the file while writing, so
    /// other processes appending to the same file are serialized as well
    ///
    /// # Examples
    ///
    /// ```no_run
    /// use telemetry::FileSink;
    ///
    /// let sink = FileSink::open("/var/log/app.log")
    ///     .unwrap()
    ///     .with_process_lock(true);
    /// ```
    #[cfg(feature = "file")]
    #[must_use]
    pub fn with_process_lock(mut self, enabled: bool) -> Self {
        self.process_lock = enabled;
        self
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl OutputSink for FileSink {
    fn write(&self, record: &[u8]) -> io::Result<usize> {
        let mut file = self.file.lock();

        #[cfg(feature = "file")]
        if self.process_lock {
            fs2::FileExt::lock_exclusive(&*file)?;
            let written = file.write_all(record);
            let unlocked = fs2::FileExt::unlock(&*file);
            written?;
            unlocked?;
            return Ok(record.len());
        }

        file.write_all(record)?;
        Ok(record.len())
    }

    fn name(&self) -> &str {
        "file"
    }
}
