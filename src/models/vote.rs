use chrono::{Datelike, NaiveDate, NaiveDateTime};
use serde::Serialize;

/// A single pro/contra vote row. Rows are append-only: once stored they
/// are never updated or deleted.
#[derive(Debug, Clone, Serialize)]
pub struct Vote {
    pub id: i64,
    pub post_id: i64,    // ⇔ votes.post_id
    pub user: String,    // ⇔ votes.user (opaque voter token, may be empty)
    pub pro: bool,       // ⇔ votes.pro (0|1)
    pub contra: bool,    // ⇔ votes.contra (0|1)
    pub time: NaiveDateTime, // ⇔ votes.time (TEXT "YYYY-MM-DD HH:MM:SS")
}

impl Vote {
    pub fn date(&self) -> NaiveDate {
        self.time.date()
    }

    pub fn year(&self) -> i32 {
        self.time.year()
    }

    pub fn time_str(&self) -> String {
        self.time.format("%Y-%m-%d %H:%M:%S").to_string()
    }
}

/// Aggregated pro/contra totals for one post, as returned by the
/// GROUP BY query behind the rankings.
#[derive(Debug, Clone, Copy)]
pub struct VoteTotals {
    pub pro: u64,
    pub contra: u64,
}

impl VoteTotals {
    pub fn net(&self) -> i64 {
        self.pro as i64 - self.contra as i64
    }
}
