use crate::app::models::{FileRecord, RunSummary};
use chrono::NaiveDateTime;

pub const FILE_SEPARATOR: &str = "\n\n\n\n";

pub struct OutputGenerator;

impl OutputGenerator {
    /// `[prefix_]consolidated_code_<YYYYMMDD_HHMMSS>.txt`
    pub fn output_file_name(prefix: Option<&str>, timestamp: &NaiveDateTime) -> String {
        let name = format!("consolidated_code_{}.txt", timestamp.format("%Y%m%d_%H%M%S"));
        match prefix {
            Some(prefix) => format!("{}_{}", prefix, name),
            None => name,
        }
    }

    pub fn file_block(record: &FileRecord) -> String {
        format!(
            "### {}\n{}{}",
            record.relative_path, record.content, FILE_SEPARATOR
        )
    }

    pub fn generate_summary(summary: &RunSummary, records: &[FileRecord]) -> String {
        let mut out = String::from("\nConsolidation Summary:\n");
        out.push_str("----------------------\n");
        out.push_str(&format!("Total files processed: {}\n", summary.files_processed));
        out.push_str(&format!("Total lines of code: {}\n", summary.total_lines));
        if summary.files_skipped > 0 {
            out.push_str(&format!(
                "Files skipped (read errors): {}\n",
                summary.files_skipped
            ));
        }

        out.push_str("\nFiles by extension:\n");
        for (ext, count) in &summary.files_by_extension {
            out.push_str(&format!("  {}: {} files\n", ext, count));
        }

        out.push_str("\nProcessed files:\n");
        for record in records {
            out.push_str(&format!(
                "  {} ({} lines)\n",
                record.relative_path, record.line_count
            ));
        }

        out
    }
}
