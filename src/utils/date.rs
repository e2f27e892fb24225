use crate::errors::{AppError, AppResult};
use chrono::{Datelike, NaiveDate, NaiveDateTime, Weekday};

pub fn today() -> NaiveDate {
    chrono::Local::now().date_naive()
}

pub fn now() -> NaiveDateTime {
    chrono::Local::now().naive_local()
}

pub fn parse_date(s: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(s, "%Y-%m-%d").ok()
}

/// Parse a vote timestamp; seconds are optional on input.
pub fn parse_datetime(s: &str) -> Option<NaiveDateTime> {
    NaiveDateTime::parse_from_str(s, "%Y-%m-%d %H:%M:%S")
        .or_else(|_| NaiveDateTime::parse_from_str(s, "%Y-%m-%d %H:%M"))
        .ok()
}

/// Every day of [from, to], inclusive. Empty when from > to.
pub fn days_between(from: &NaiveDate, to: &NaiveDate) -> Vec<NaiveDate> {
    let mut out = Vec::new();
    let mut d = *from;

    while d <= *to {
        out.push(d);
        match d.succ_opt() {
            Some(next) => d = next,
            None => break,
        }
    }

    out
}

/// Every day of one month.
pub fn all_days_of_month(year: i32, month: u32) -> AppResult<Vec<NaiveDate>> {
    let first = NaiveDate::from_ymd_opt(year, month, 1)
        .ok_or_else(|| AppError::InvalidDate(format!("{year}-{month:02}")))?;

    let mut out = Vec::new();
    let mut d = first;
    while d.month() == month {
        out.push(d);
        match d.succ_opt() {
            Some(next) => d = next,
            None => break,
        }
    }

    Ok(out)
}

/// The seven days of the ISO week (Monday first) containing `anchor`.
pub fn iso_week_days(anchor: &NaiveDate) -> Vec<NaiveDate> {
    let week = anchor.iso_week();
    let monday = NaiveDate::from_isoywd_opt(week.year(), week.week(), Weekday::Mon)
        .unwrap_or(*anchor);

    (0..7)
        .filter_map(|i| monday.checked_add_days(chrono::Days::new(i)))
        .collect()
}

/// Parse a period or range argument.
///
/// Supported:
/// - YYYY
/// - YYYY-MM
/// - YYYY-MM-DD
/// - YYYY:YYYY
/// - YYYY-MM:YYYY-MM
/// - YYYY-MM-DD:YYYY-MM-DD
pub fn parse_range(r: &str) -> AppResult<(NaiveDate, NaiveDate)> {
    if let Some((start_raw, end_raw)) = r.split_once(':') {
        let start = start_raw.trim();
        let end = end_raw.trim();

        if start.len() != end.len() {
            return Err(AppError::InvalidRange(
                "start and end must have the same format".to_string(),
            ));
        }

        let (from, _) = parse_single(start)?;
        let (_, to) = parse_single(end)?;

        if from > to {
            return Err(AppError::InvalidRange(format!("{start} is after {end}")));
        }

        Ok((from, to))
    } else {
        parse_single(r.trim())
    }
}

/// One period token expanded to its first and last day.
fn parse_single(p: &str) -> AppResult<(NaiveDate, NaiveDate)> {
    match p.len() {
        // YYYY
        4 => {
            let y: i32 = p
                .parse()
                .map_err(|_| AppError::InvalidRange(format!("invalid year: {p}")))?;
            let d1 = NaiveDate::from_ymd_opt(y, 1, 1)
                .ok_or_else(|| AppError::InvalidRange(format!("invalid year: {p}")))?;
            let d2 = NaiveDate::from_ymd_opt(y, 12, 31)
                .ok_or_else(|| AppError::InvalidRange(format!("invalid year: {p}")))?;
            Ok((d1, d2))
        }
        // YYYY-MM
        7 => {
            let bad = || AppError::InvalidRange(format!("invalid month: {p}"));
            let y: i32 = p.get(0..4).ok_or_else(bad)?.parse().map_err(|_| bad())?;
            let m: u32 = p.get(5..7).ok_or_else(bad)?.parse().map_err(|_| bad())?;

            let days = all_days_of_month(y, m)
                .map_err(|_| AppError::InvalidRange(format!("invalid month: {p}")))?;
            match (days.first(), days.last()) {
                (Some(first), Some(last)) => Ok((*first, *last)),
                _ => Err(AppError::InvalidRange(format!("invalid month: {p}"))),
            }
        }
        // YYYY-MM-DD
        10 => {
            let d = NaiveDate::parse_from_str(p, "%Y-%m-%d")
                .map_err(|_| AppError::InvalidRange(format!("invalid date: {p}")))?;
            Ok((d, d))
        }
        _ => Err(AppError::InvalidRange(format!(
            "unsupported format: {p}"
        ))),
    }
}

/// Human-readable distance between two timestamps: "1 min", "3 hours",
/// "2 weeks", "5 months", "1 year". Never less than one minute.
pub fn human_time_diff(from: NaiveDateTime, to: NaiveDateTime) -> String {
    const MINUTE: i64 = 60;
    const HOUR: i64 = 3600;
    const DAY: i64 = 86_400;
    const WEEK: i64 = 7 * DAY;
    const MONTH: i64 = 30 * DAY;
    const YEAR: i64 = 365 * DAY;

    let secs = (to - from).num_seconds().max(0);

    let (count, unit, units) = if secs < HOUR {
        (secs as f64 / MINUTE as f64, "min", "mins")
    } else if secs < DAY {
        (secs as f64 / HOUR as f64, "hour", "hours")
    } else if secs < WEEK {
        (secs as f64 / DAY as f64, "day", "days")
    } else if secs < MONTH {
        (secs as f64 / WEEK as f64, "week", "weeks")
    } else if secs < YEAR {
        (secs as f64 / MONTH as f64, "month", "months")
    } else {
        (secs as f64 / YEAR as f64, "year", "years")
    };

    let n = count.round().max(1.0) as i64;
    if n == 1 {
        format!("1 {unit}")
    } else {
        format!("{n} {units}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(s: &str) -> NaiveDate {
        parse_date(s).expect("valid test date")
    }

    #[test]
    fn range_single_year() {
        let (from, to) = parse_range("2025").expect("range");
        assert_eq!(from, date("2025-01-01"));
        assert_eq!(to, date("2025-12-31"));
    }

    #[test]
    fn range_single_month_handles_leap_years() {
        let (from, to) = parse_range("2024-02").expect("range");
        assert_eq!(from, date("2024-02-01"));
        assert_eq!(to, date("2024-02-29"));
    }

    #[test]
    fn range_pair_of_dates() {
        let (from, to) = parse_range("2026-01-05:2026-01-10").expect("range");
        assert_eq!(from, date("2026-01-05"));
        assert_eq!(to, date("2026-01-10"));
    }

    #[test]
    fn range_rejects_mixed_precision_and_garbage() {
        assert!(parse_range("2026:2026-05").is_err());
        assert!(parse_range("2026-5").is_err());
        assert!(parse_range("yesterday-ish").is_err());
    }

    #[test]
    fn range_rejects_non_ascii_without_panicking() {
        // 7 bytes, but the last slice boundary falls inside the é
        assert!(parse_range("0123é5").is_err());
        assert!(parse_range("202é-05").is_err());
        assert!(parse_range("2026-é5:2026-05").is_err());
    }

    #[test]
    fn range_rejects_inverted_bounds() {
        assert!(parse_range("2026-02:2026-01").is_err());
    }

    #[test]
    fn iso_week_starts_on_monday() {
        // 2026-08-26 is a Wednesday
        let days = iso_week_days(&date("2026-08-26"));
        assert_eq!(days.len(), 7);
        assert_eq!(days[0], date("2026-08-24"));
        assert_eq!(days[6], date("2026-08-30"));
    }

    #[test]
    fn month_days_include_last_day() {
        let days = all_days_of_month(2026, 4).expect("days");
        assert_eq!(days.len(), 30);
        assert_eq!(days[29], date("2026-04-30"));
    }

    #[test]
    fn human_diff_units() {
        let base = date("2026-08-26").and_hms_opt(12, 0, 0).expect("time");
        let diff = |secs: i64| {
            human_time_diff(base - chrono::Duration::seconds(secs), base)
        };

        assert_eq!(diff(30), "1 min");
        assert_eq!(diff(120), "2 mins");
        assert_eq!(diff(3 * 3600), "3 hours");
        assert_eq!(diff(3 * 86_400), "3 days");
        assert_eq!(diff(14 * 86_400), "2 weeks");
        assert_eq!(diff(70 * 86_400), "2 months");
        assert_eq!(diff(800 * 86_400), "2 years");
    }
}
