use crate::app::formatter::OutputGenerator;
use crate::app::models::FileRecord;
use crate::app::progress::progress_bar;
use anyhow::{Context, Result};
use chrono::NaiveDateTime;
use std::fs::{self, OpenOptions};
use std::io::{BufWriter, Write};
use std::path::PathBuf;

pub struct OutputWriter {
    output_dir: PathBuf,
    prefix: Option<String>,
    quiet: bool,
}

impl OutputWriter {
    pub fn new(output_dir: impl Into<PathBuf>, prefix: Option<String>) -> Self {
        Self {
            output_dir: output_dir.into(),
            prefix,
            quiet: false,
        }
    }

    #[must_use]
    pub fn with_quiet(mut self, quiet: bool) -> Self {
        self.quiet = quiet;
        self
    }

    /// Writes all records to a new file named after `timestamp`.
    pub fn write_at(&self, records: &[FileRecord], timestamp: &NaiveDateTime) -> Result<PathBuf> {
        fs::create_dir_all(&self.output_dir).context(format!(
            "Failed to create output directory {:?}",
            self.output_dir
        ))?;

        let path = self.available_path(timestamp);
        let file = OpenOptions::new()
            .write(true)
            .create_new(true)
            .open(&path)
            .context(format!("Failed to create {:?}", path))?;
        let mut out = BufWriter::new(file);

        let pb = progress_bar(records.len(), "Writing output", self.quiet);
        for record in records {
            out.write_all(OutputGenerator::file_block(record).as_bytes())
                .context(format!("Failed to write {:?}", path))?;
            pb.inc(1);
        }
        out.flush().context(format!("Failed to write {:?}", path))?;
        pb.finish_and_clear();

        Ok(path)
    }

    /// First free name for `timestamp`; a second run in the same second gets
    /// `_2`, then `_3`, inserted before the extension.
    fn available_path(&self, timestamp: &NaiveDateTime) -> PathBuf {
        let name = OutputGenerator::output_file_name(self.prefix.as_deref(), timestamp);
        let candidate = self.output_dir.join(&name);
        if !candidate.exists() {
            return candidate;
        }

        let stem = name.trim_end_matches(".txt");
        (2..)
            .map(|n| self.output_dir.join(format!("{}_{}.txt", stem, n)))
            .find(|path| !path.exists())
            .unwrap_or(candidate)
    }
}
