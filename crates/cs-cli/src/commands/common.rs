//! Shared helpers for CLI commands

use crate::cli::GlobalArgs;
use anyhow::{Context, Result};
use cs_core::{Config, ProjectLayout};
use std::fmt;
use std::path::{Path, PathBuf};

/// Error type representing a non-zero process exit code.
///
/// Use `return Err(ExitCode(N).into())` instead of `std::process::exit(N)`
/// so that RAII destructors run and cleanup happens properly.
#[derive(Debug)]
pub(crate) struct ExitCode(pub(crate) i32);

impl fmt::Display for ExitCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // Control flow only; main.rs maps it to the process status.
        write!(f, "")
    }
}

impl std::error::Error for ExitCode {}

/// Load the configuration and resolve the project layout.
///
/// With `contracts_only` the project root is the parent of that directory
/// and the config file is looked up there; `--config` always wins.
pub(crate) fn load_project(
    global: &GlobalArgs,
    contracts_only: Option<&str>,
) -> Result<(Config, ProjectLayout)> {
    let contracts_dir = contracts_only.map(PathBuf::from);
    let root = match &contracts_dir {
        Some(dir) => dir
            .parent()
            .filter(|p| !p.as_os_str().is_empty())
            .map(Path::to_path_buf)
            .unwrap_or_else(|| PathBuf::from(".")),
        None => PathBuf::from(&global.project_dir),
    };

    let config = load_config(global, &root)?;

    let layout = match &contracts_dir {
        Some(dir) => ProjectLayout::for_contracts_dir(dir, &config.layout),
        None => ProjectLayout::locate(&root, &config.layout),
    }
    .context("Failed to resolve project layout")?;

    log::debug!("Project root: {}", layout.root.display());
    Ok((config, layout))
}

fn load_config(global: &GlobalArgs, root: &Path) -> Result<Config> {
    match &global.config {
        Some(path) => Config::load(Path::new(path))
            .with_context(|| format!("Failed to load config from {}", path)),
        None => Config::load_from_dir(root).context("Failed to load config"),
    }
}

/// Calculate column widths for a table given headers and row data.
///
/// For each column, returns the maximum width across the header and all
/// row values so that data aligns when printed with left-padding.
pub(crate) fn calculate_column_widths(headers: &[&str], rows: &[Vec<String>]) -> Vec<usize> {
    let mut widths: Vec<usize> = headers.iter().map(|h| h.len()).collect();
    for row in rows {
        for (w, cell) in widths.iter_mut().zip(row.iter()) {
            *w = (*w).max(cell.len());
        }
    }
    widths
}

/// Format a left-aligned table: header row, dashed separator, data rows.
///
/// Columns are separated by two spaces and trailing padding is trimmed.
pub(crate) fn format_table(headers: &[&str], rows: &[Vec<String>]) -> String {
    let widths = calculate_column_widths(headers, rows);
    let render = |cells: Vec<String>| -> String {
        cells
            .iter()
            .zip(&widths)
            .map(|(cell, &w)| format!("{:<width$}", cell, width = w))
            .collect::<Vec<_>>()
            .join("  ")
            .trim_end()
            .to_string()
    };

    let mut lines = vec![
        render(headers.iter().map(|h| h.to_string()).collect()),
        render(widths.iter().map(|&w| "-".repeat(w)).collect()),
    ];
    lines.extend(rows.iter().map(|row| render(row.clone())));
    lines.join("\n")
}

#[cfg(test)]
#[path = "common_test.rs"]
mod tests;
