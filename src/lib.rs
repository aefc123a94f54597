//! Recursively gathers project files by extension, skipping excluded paths
//! and file names, and concatenates them into a single timestamped text file
//! with a `### <relative path>` header per file.

pub mod app;
