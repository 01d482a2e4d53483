//! The append-only setup log.

use std::fs::{File, OpenOptions};
use std::io::Write;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

/// Sink for status messages and captured command output.
///
/// The handle is opened once at process start and held for the whole run.
/// Every write is flushed immediately.
pub struct SetupLog {
    path: PathBuf,
    file: File,
}

impl SetupLog {
    pub fn open(path: &Path) -> Result<Self> {
        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(path)
            .with_context(|| format!("failed to open log file {}", path.display()))?;

        Ok(Self {
            path: path.to_path_buf(),
            file,
        })
    }

    /// Write a status line to the sink and echo it to the console.
    pub fn message(&mut self, text: &str) -> Result<()> {
        writeln!(self.file, "{text}").context("failed to write to setup log")?;
        self.file.flush().context("failed to flush setup log")?;
        println!("{text}");
        Ok(())
    }

    /// Append captured command output verbatim, with no framing.
    pub fn append(&mut self, text: &str) -> Result<()> {
        self.file
            .write_all(text.as_bytes())
            .context("failed to write to setup log")?;
        self.file.flush().context("failed to flush setup log")?;
        Ok(())
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[test]
    fn message_appends_line_and_output_stays_verbatim() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("setup.log");

        let mut log = SetupLog::open(&path).unwrap();
        log.message("Running updates").unwrap();
        log.append("raw output\nsecond line\n").unwrap();
        log.append("no trailing newline").unwrap();

        let content = fs::read_to_string(&path).unwrap();
        assert_eq!(
            content,
            "Running updates\nraw output\nsecond line\nno trailing newline"
        );
    }

    #[test]
    fn reopening_appends_instead_of_truncating() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("setup.log");

        SetupLog::open(&path).unwrap().message("first").unwrap();
        SetupLog::open(&path).unwrap().message("second").unwrap();

        let content = fs::read_to_string(&path).unwrap();
        assert_eq!(content, "first\nsecond\n");
    }
}
