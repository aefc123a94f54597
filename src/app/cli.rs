use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(
    author,
    version,
    about = "Consolidate project files into a single timestamped text file",
    after_help = "Example: code_consolidator --dir /path/to/project --prefix=project_chat --excludes=test,temp"
)]
pub struct Cli {
    /// Starting directory for file processing
    #[arg(short = 'd', long)]
    pub dir: PathBuf,

    /// Output directory for the consolidated file (default: "output" next to the executable)
    #[arg(short = 'o', long)]
    pub output: Option<PathBuf>,

    /// Prefix for the output filename
    #[arg(short = 'p', long)]
    pub prefix: Option<String>,

    /// File extensions to include [default: .js .html .css .json .md]
    #[arg(short = 'e', long, num_args = 1..)]
    pub extensions: Option<Vec<String>>,

    /// Path substrings to exclude [default: node_modules coverage venv .git logs logs_test]
    #[arg(short = 'x', long = "exclude_paths", alias = "exclude-paths", num_args = 1..)]
    pub exclude_paths: Option<Vec<String>>,

    /// Comma-separated list of additional terms to exclude from file paths
    #[arg(long, value_delimiter = ',')]
    pub excludes: Option<Vec<String>>,

    /// Comma-separated list of exact filenames to exclude
    #[arg(long, value_delimiter = ',')]
    pub exclude_files: Option<Vec<String>>,

    /// Comma-separated list of filename globs to exclude (e.g. '*.min.js')
    #[arg(long, value_delimiter = ',')]
    pub exclude_globs: Option<Vec<String>>,

    /// Use a predefined set of options from presets.toml
    #[arg(long)]
    pub preset: Option<String>,

    /// Hide progress bars
    #[arg(short = 'q', long)]
    pub quiet: bool,

    /// Skip files ignored by .gitignore
    #[arg(long)]
    pub gitignore: bool,
}
