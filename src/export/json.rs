use crate::errors::{AppError, AppResult};
use crate::models::vote::Vote;

/// Write vote rows as pretty-printed JSON.
pub fn write_json(path: &str, votes: &[Vote]) -> AppResult<()> {
    let json = serde_json::to_string_pretty(votes)
        .map_err(|e| AppError::Export(e.to_string()))?;
    std::fs::write(path, json)?;
    Ok(())
}
