//! Log file writer (timestamped plain-text snapshots)

use crate::collector::ProcessRecord;
use chrono::{DateTime, Local};
use std::fmt::Write as _;
use std::fs;
use std::io;
use std::path::PathBuf;
use tracing::info;

const BORDER_WIDTH: usize = 80;

pub struct LogWriter {
    directory: PathBuf,
    prefix: String,
}

impl LogWriter {
    pub fn new(directory: impl Into<PathBuf>, prefix: impl Into<String>) -> Self {
        Self {
            directory: directory.into(),
            prefix: prefix.into(),
        }
    }

    /// Write one snapshot to a new timestamped file, creating the target
    /// directory if needed. Returns the path of the created file.
    pub fn write_snapshot(&self, records: &[ProcessRecord]) -> io::Result<PathBuf> {
        fs::create_dir_all(&self.directory)?;

        let now = Local::now();
        let path = self.unique_path(&now.format("%Y%m%d_%H%M%S").to_string());

        // Render everything up front so the file appears in one write and
        // an interrupt can never leave it half-written.
        fs::write(&path, render(records, &now))?;
        info!("Log created: {}", path.display());
        Ok(path)
    }

    fn unique_path(&self, stamp: &str) -> PathBuf {
        let path = self.directory.join(format!("{}_{}.log", self.prefix, stamp));
        if !path.exists() {
            return path;
        }
        // A second write within the same wall-clock second gets a counter
        // suffix instead of clobbering the earlier file.
        for n in 1u32.. {
            let candidate = self
                .directory
                .join(format!("{}_{}_{}.log", self.prefix, stamp, n));
            if !candidate.exists() {
                return candidate;
            }
        }
        unreachable!()
    }
}

fn render(records: &[ProcessRecord], created: &DateTime<Local>) -> String {
    let border = "-".repeat(BORDER_WIDTH);
    let mut out = String::new();
    let _ = writeln!(out, "{}", border);
    let _ = writeln!(out, "            System Process Log");
    let _ = writeln!(
        out,
        "    Log created at : {}",
        created.format("%a %b %e %H:%M:%S %Y")
    );
    let _ = writeln!(out, "{}", border);
    let _ = writeln!(out);

    for record in records {
        let _ = writeln!(
            out,
            "PID: {:<8} Name: {:<25} User: {:<15} Memory: {:.2} MB",
            record.pid,
            record.name,
            record.user.as_deref().unwrap_or(""),
            record.memory_mb(),
        );
    }

    let _ = writeln!(out);
    let _ = writeln!(out, "{}", border);
    out
}
