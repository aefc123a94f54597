use crate::app::models::{FileRecord, RunSummary, ScanConfig};
use crate::app::progress::progress_bar;
use anyhow::{Context, Result};
use globset::{Glob, GlobSet, GlobSetBuilder};
use ignore::{DirEntry, Walk, WalkBuilder};
use pathdiff::diff_paths;
use std::cmp::Ordering;
use std::fs;
use std::path::{Path, PathBuf};

pub struct Scanner {
    root: PathBuf,
    extensions: Vec<String>,
    excluded_paths: Vec<String>,
    excluded_files: GlobSet,
    respect_gitignore: bool,
    quiet: bool,
}

impl Scanner {
    pub fn new(config: &ScanConfig) -> Result<Self> {
        Ok(Self {
            root: config.start_dir.clone(),
            extensions: config.extensions.clone(),
            excluded_paths: config.excluded_paths.clone(),
            excluded_files: build_excluded_files(&config.excluded_files, &config.excluded_globs)?,
            respect_gitignore: config.respect_gitignore,
            quiet: config.quiet,
        })
    }

    /// Number of files the collection walk is expected to visit. Only the
    /// directory and file-name rules apply here.
    pub fn count_matching(&self) -> usize {
        self.walk()
            .filter_map(|result| self.entry_or_warn(result))
            .filter(|entry| self.is_candidate(entry))
            .count()
    }

    /// Reads every candidate file, in walk order. Files whose relative path
    /// hits an exclusion are dropped; unreadable files are logged and counted
    /// as skipped.
    pub fn collect(&self, expected: usize) -> (Vec<FileRecord>, RunSummary) {
        let pb = progress_bar(expected, "Processing files", self.quiet);
        let mut records = Vec::new();
        let mut skipped = 0;

        for result in self.walk() {
            let Some(entry) = self.entry_or_warn(result) else {
                continue;
            };
            if !self.is_candidate(&entry) {
                continue;
            }

            let relative = self.relative_path(entry.path());
            if self.is_excluded_path(&relative) {
                log::debug!("Skipping {} (excluded relative path)", relative);
                continue;
            }

            match fs::read_to_string(entry.path()) {
                Ok(content) => records.push(FileRecord::new(relative, content)),
                Err(err) => {
                    pb.suspend(|| log::error!("Error reading file {}: {}", relative, err));
                    skipped += 1;
                }
            }
            pb.inc(1);
        }

        pb.finish_and_clear();
        let summary = RunSummary::from_records(&records, skipped);
        (records, summary)
    }

    fn walk(&self) -> Walk {
        let excluded = self.excluded_paths.clone();

        // Plain recursive listing unless .gitignore support is asked for
        WalkBuilder::new(&self.root)
            .standard_filters(false)
            .git_ignore(self.respect_gitignore)
            .require_git(false)
            .sort_by_file_path(files_first)
            .filter_entry(move |entry| {
                let is_dir = entry.file_type().is_some_and(|ft| ft.is_dir());
                !(is_dir && contains_any(&entry.path().to_string_lossy(), &excluded))
            })
            .build()
    }

    fn entry_or_warn(&self, result: Result<DirEntry, ignore::Error>) -> Option<DirEntry> {
        match result {
            Ok(entry) => Some(entry),
            Err(err) => {
                log::warn!("Error walking entry: {}", err);
                None
            }
        }
    }

    fn is_candidate(&self, entry: &DirEntry) -> bool {
        let path = entry.path();
        if !path.is_file() {
            return false;
        }

        // Also covers the start directory, which the walk never prunes
        let parent_excluded = path
            .parent()
            .is_some_and(|dir| contains_any(&dir.to_string_lossy(), &self.excluded_paths));
        if parent_excluded {
            return false;
        }

        let name = entry.file_name();
        let name_str = name.to_string_lossy();
        self.extensions.iter().any(|ext| name_str.ends_with(ext.as_str()))
            && !self.excluded_files.is_match(name)
    }

    fn is_excluded_path(&self, relative: &str) -> bool {
        contains_any(relative, &self.excluded_paths)
    }

    /// Path relative to the start directory with `/` separators.
    fn relative_path(&self, path: &Path) -> String {
        let relative = diff_paths(path, &self.root).unwrap_or_else(|| path.to_path_buf());
        relative.to_string_lossy().replace('\\', "/")
    }
}

fn contains_any(haystack: &str, needles: &[String]) -> bool {
    needles.iter().any(|needle| haystack.contains(needle.as_str()))
}

/// A directory's own files come before its subdirectories, each group sorted
/// by name.
fn files_first(a: &Path, b: &Path) -> Ordering {
    (a.is_dir(), a.file_name()).cmp(&(b.is_dir(), b.file_name()))
}

/// Exact file names are escaped so characters like `[` or `{` match
/// literally; only `globs` are compiled as patterns.
fn build_excluded_files(names: &[String], globs: &[String]) -> Result<GlobSet> {
    let mut builder = GlobSetBuilder::new();
    for name in names {
        builder.add(
            Glob::new(&globset::escape(name))
                .context(format!("Invalid file name: {}", name))?,
        );
    }
    for pat in globs {
        builder.add(Glob::new(pat).context(format!("Invalid file pattern: {}", pat))?);
    }
    Ok(builder.build()?)
}
