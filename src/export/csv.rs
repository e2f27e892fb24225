use crate::errors::AppResult;
use crate::models::vote::Vote;

/// Write vote rows as CSV with an explicit header.
pub fn write_csv(path: &str, votes: &[Vote]) -> AppResult<()> {
    let mut wtr = csv::Writer::from_path(path)?;

    wtr.write_record(["id", "post_id", "user", "pro", "contra", "time"])?;

    for v in votes {
        wtr.write_record([
            v.id.to_string(),
            v.post_id.to_string(),
            v.user.clone(),
            if v.pro { "1" } else { "0" }.to_string(),
            if v.contra { "1" } else { "0" }.to_string(),
            v.time_str(),
        ])?;
    }

    wtr.flush()?;
    Ok(())
}
