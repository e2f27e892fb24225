mod csv;
mod json;

use crate::db::pool::DbPool;
use crate::db::queries::{load_all_votes, load_votes_between};
use crate::errors::{AppError, AppResult};
use crate::ui::messages::success;
use crate::utils::date::parse_range;
use clap::ValueEnum;
use std::path::Path;

/// Completion message shared by all formats.
pub(crate) fn notify_export_success(label: &str, path: &Path) {
    success(format!("{label} export completed: {}", path.display()));
}

#[derive(Clone, Debug, ValueEnum)]
pub enum ExportFormat {
    Csv,
    Json,
}

impl ExportFormat {
    pub fn as_str(&self) -> &'static str {
        match self {
            ExportFormat::Csv => "csv",
            ExportFormat::Json => "json",
        }
    }
}

/// Dump vote rows to a file, optionally filtered with the range grammar
/// (YYYY, YYYY-MM, YYYY-MM-DD, or A:B pairs).
pub fn export_votes(
    pool: &mut DbPool,
    format: &ExportFormat,
    file: &str,
    range: Option<&str>,
    force: bool,
) -> AppResult<()> {
    let path = Path::new(file);

    if path.exists() && !force {
        return Err(AppError::Export(format!(
            "file already exists: {} (use --force to overwrite)",
            path.display()
        )));
    }

    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        std::fs::create_dir_all(parent)?;
    }

    let votes = match range {
        Some(r) => {
            let (from, to) = parse_range(r)?;
            load_votes_between(pool, &from, &to)?
        }
        None => load_all_votes(pool)?,
    };

    match format {
        ExportFormat::Csv => {
            csv::write_csv(file, &votes)?;
            notify_export_success("CSV", path);
        }
        ExportFormat::Json => {
            json::write_json(file, &votes)?;
            notify_export_success("JSON", path);
        }
    }

    Ok(())
}
