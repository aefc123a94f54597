use crate::app::cli::Cli;
use crate::app::models::ScanConfig;
use anyhow::{Context, Result};
use serde::Deserialize;
use std::collections::HashMap;
use std::env;
use std::fs;
use std::path::{Path, PathBuf};

pub const DEFAULT_EXTENSIONS: &[&str] = &[".js", ".html", ".css", ".json", ".md"];
pub const DEFAULT_EXCLUDE_PATHS: &[&str] =
    &["node_modules", "coverage", "venv", ".git", "logs", "logs_test"];
pub const DEFAULT_EXCLUDE_FILES: &[&str] = &["package-lock.json"];

#[derive(Deserialize, Debug)]
struct PresetsFile {
    #[serde(flatten)]
    presets: HashMap<String, PresetConfig>,
}

#[derive(Deserialize, Debug, Clone, Default)]
pub struct PresetConfig {
    pub extensions: Option<Vec<String>>,
    pub exclude_paths: Option<Vec<String>>,
    pub excludes: Option<Vec<String>>,
    pub exclude_files: Option<Vec<String>>,
    pub exclude_globs: Option<Vec<String>>,
    pub prefix: Option<String>,
    pub output: Option<PathBuf>,
}

fn presets_path() -> Result<PathBuf> {
    let home = dirs::home_dir().context("Could not determine home directory")?;
    Ok(home
        .join(".config")
        .join("code_consolidator")
        .join("presets.toml"))
}

pub fn load_presets_file(path: &Path) -> Result<HashMap<String, PresetConfig>> {
    if !path.exists() {
        return Ok(HashMap::new());
    }

    let content =
        fs::read_to_string(path).context(format!("Failed to read presets at {:?}", path))?;
    parse_presets(&content)
}

fn parse_presets(content: &str) -> Result<HashMap<String, PresetConfig>> {
    let parsed: PresetsFile = toml::from_str(content).context("Failed to parse presets.toml")?;
    Ok(parsed.presets)
}

/// Preset values come first, CLI values are appended; blanks are dropped and
/// duplicates removed keeping the first occurrence.
fn merge_vecs(preset_vec: Option<Vec<String>>, cli_vec: Option<Vec<String>>) -> Vec<String> {
    let mut combined = preset_vec.unwrap_or_default();
    if let Some(mut cli_items) = cli_vec {
        combined.append(&mut cli_items);
    }
    let mut seen = std::collections::HashSet::new();
    combined
        .into_iter()
        .map(|item| item.trim().to_string())
        .filter(|item| !item.is_empty())
        .filter(|item| seen.insert(item.clone()))
        .collect()
}

fn or_defaults(values: Vec<String>, defaults: &[&str]) -> Vec<String> {
    if values.is_empty() {
        defaults.iter().map(|s| s.to_string()).collect()
    } else {
        values
    }
}

/// `output` directory next to the running executable.
fn default_output_dir() -> Result<PathBuf> {
    let exe = env::current_exe().context("Failed to locate the running executable")?;
    let exe_dir = exe
        .parent()
        .context("Executable path has no parent directory")?;
    Ok(exe_dir.join("output"))
}

/// Name used to auto-select a preset when `--preset` is not given.
fn project_name(start_dir: &Path) -> Option<String> {
    let resolved = start_dir.canonicalize().ok()?;
    resolved
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
}

pub fn resolve_config(cli: Cli) -> Result<ScanConfig> {
    let presets = load_presets_file(&presets_path()?)?;
    resolve_with_presets(cli, &presets)
}

pub fn resolve_with_presets(
    cli: Cli,
    presets: &HashMap<String, PresetConfig>,
) -> Result<ScanConfig> {
    // Determine preset to use: CLI flag > Auto-detect > None
    let detected = project_name(&cli.dir);
    let preset_key = cli.preset.as_deref().or(detected.as_deref());
    if let Some(name) = cli.preset.as_deref() {
        if !presets.contains_key(name) {
            log::warn!("Preset '{}' not found, using defaults", name);
        }
    }
    let preset = preset_key
        .and_then(|k| presets.get(k))
        .cloned()
        .unwrap_or_default();

    let extensions = or_defaults(
        merge_vecs(preset.extensions, cli.extensions),
        DEFAULT_EXTENSIONS,
    );

    let mut excluded_paths = or_defaults(
        merge_vecs(preset.exclude_paths, cli.exclude_paths),
        DEFAULT_EXCLUDE_PATHS,
    );
    excluded_paths = merge_vecs(
        Some(excluded_paths),
        Some(merge_vecs(preset.excludes, cli.excludes)),
    );

    let defaults = DEFAULT_EXCLUDE_FILES.iter().map(|s| s.to_string()).collect();
    let excluded_files = merge_vecs(
        Some(defaults),
        Some(merge_vecs(preset.exclude_files, cli.exclude_files)),
    );
    let excluded_globs = merge_vecs(preset.exclude_globs, cli.exclude_globs);

    let output_dir = match cli.output.or(preset.output) {
        Some(dir) => dir,
        None => default_output_dir()?,
    };

    Ok(ScanConfig {
        start_dir: cli.dir,
        output_dir,
        extensions,
        excluded_paths,
        excluded_files,
        excluded_globs,
        prefix: cli.prefix.or(preset.prefix).filter(|p| !p.is_empty()),
        quiet: cli.quiet,
        respect_gitignore: cli.gitignore,
    })
}
