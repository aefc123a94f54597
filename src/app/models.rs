use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

/// Represents the final configuration after merging presets and CLI args.
#[derive(Debug, Clone)]
pub struct ScanConfig {
    pub start_dir: PathBuf,
    pub output_dir: PathBuf,
    /// Suffixes a file name must end with to be picked up.
    pub extensions: Vec<String>,
    /// Substrings that disqualify any path containing them.
    pub excluded_paths: Vec<String>,
    /// Exact file names that are never picked up.
    pub excluded_files: Vec<String>,
    /// Glob patterns over the file name that are never picked up.
    pub excluded_globs: Vec<String>,
    pub prefix: Option<String>,
    pub quiet: bool,
    pub respect_gitignore: bool,
}

/// A single file read during the collection walk.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileRecord {
    pub relative_path: String,
    pub content: String,
    pub line_count: usize,
}

impl FileRecord {
    pub fn new(relative_path: impl Into<String>, content: String) -> Self {
        let line_count = count_lines(&content);
        Self {
            relative_path: relative_path.into(),
            content,
            line_count,
        }
    }

    /// Final `.suffix` of the file name, or an empty string when there is none.
    pub fn extension(&self) -> String {
        Path::new(&self.relative_path)
            .extension()
            .map(|ext| format!(".{}", ext.to_string_lossy()))
            .unwrap_or_default()
    }
}

/// Newline count plus one, so an empty file still counts as a single line.
pub fn count_lines(content: &str) -> usize {
    content.bytes().filter(|&b| b == b'\n').count() + 1
}

/// Totals reported once collection has finished.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RunSummary {
    pub files_processed: usize,
    pub files_skipped: usize,
    pub total_lines: usize,
    pub files_by_extension: BTreeMap<String, usize>,
}

impl RunSummary {
    pub fn from_records(records: &[FileRecord], files_skipped: usize) -> Self {
        let mut files_by_extension = BTreeMap::new();
        for record in records {
            *files_by_extension.entry(record.extension()).or_insert(0) += 1;
        }

        Self {
            files_processed: records.len(),
            files_skipped,
            total_lines: records.iter().map(|r| r.line_count).sum(),
            files_by_extension,
        }
    }
}
