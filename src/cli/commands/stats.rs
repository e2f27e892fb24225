use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::chart::StatsResponse;
use crate::core::stats;
use crate::db::pool::DbPool;
use crate::db::queries::{load_all_votes, load_votes_between};
use crate::errors::{AppError, AppResult};
use crate::utils::date;
use chrono::Datelike;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Stats {
        period,
        year,
        month,
        range,
        now,
    } = cmd
    {
        let mut pool = DbPool::new(&cfg.database)?;

        // Reference date standing in for "today".
        let anchor = match now {
            Some(s) => date::parse_date(s).ok_or_else(|| AppError::InvalidDate(s.clone()))?,
            None => date::today(),
        };

        let colors = cfg.chart_colors();

        let response: StatsResponse = if let Some(r) = range {
            let (from, to) = date::parse_range(r)?;
            let days = date::days_between(&from, &to);
            let votes = load_votes_between(&mut pool, &from, &to)?;
            stats::stats_range(&votes, &days, &colors)
        } else {
            match period.as_deref().unwrap_or("total") {
                "today" => {
                    let votes = load_votes_between(&mut pool, &anchor, &anchor)?;
                    stats::stats_doughnut(&votes, &colors)
                }
                "yesterday" => {
                    let day = anchor
                        .pred_opt()
                        .ok_or_else(|| AppError::InvalidDate(anchor.to_string()))?;
                    let votes = load_votes_between(&mut pool, &day, &day)?;
                    stats::stats_doughnut(&votes, &colors)
                }
                "week" => {
                    let days = date::iso_week_days(&anchor);
                    let votes = load_votes_between(&mut pool, &days[0], &days[6])?;
                    stats::stats_week(&votes, &days, &colors)
                }
                "month" => {
                    let y = year.unwrap_or_else(|| anchor.year());
                    let m = month.unwrap_or_else(|| anchor.month());
                    let days = date::all_days_of_month(y, m)?;
                    let votes = load_votes_between(
                        &mut pool,
                        &days[0],
                        days.last().unwrap_or(&days[0]),
                    )?;
                    stats::stats_month(&votes, &days, &colors)
                }
                "year" => {
                    let y = year.unwrap_or_else(|| anchor.year());
                    let from = chrono::NaiveDate::from_ymd_opt(y, 1, 1)
                        .ok_or_else(|| AppError::InvalidDate(y.to_string()))?;
                    let to = chrono::NaiveDate::from_ymd_opt(y, 12, 31)
                        .ok_or_else(|| AppError::InvalidDate(y.to_string()))?;
                    let votes = load_votes_between(&mut pool, &from, &to)?;
                    stats::stats_year(&votes, y, &colors)
                }
                "total" => {
                    let votes = load_all_votes(&mut pool)?;
                    stats::stats_doughnut(&votes, &colors)
                }
                other => return Err(AppError::InvalidPeriod(other.to_string())),
            }
        };

        let json = serde_json::to_string_pretty(&response)
            .map_err(|e| AppError::Other(e.to_string()))?;
        println!("{json}");
    }

    Ok(())
}
