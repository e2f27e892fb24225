//! Pure aggregation logic: turn flat vote rows into bucketed series and
//! chart payloads. No database access here; the commands load the rows
//! and pass them in together with the explicit date parameters.

use crate::core::chart::{ChartColors, ChartPayload, StatsResponse};
use crate::models::vote::Vote;
use chrono::{Datelike, NaiveDate};

/// Round to two decimals, like the percentage display expects.
pub fn round2(v: f64) -> f64 {
    (v * 100.0).round() / 100.0
}

/// Share of `part` against `part + other`, in percent, rounded to two
/// decimals. A zero `part` yields 0 even when `other` is also zero.
pub fn percentage(part: u64, other: u64) -> f64 {
    if part == 0 {
        return 0.0;
    }
    round2((part as f64 / (part + other) as f64) * 100.0)
}

/// Display form of a percentage: two decimals with a trailing `.00`
/// stripped, so 70.00 prints as "70" and 66.67 stays "66.67".
pub fn format_percent(v: f64) -> String {
    let s = format!("{:.2}", v);
    s.strip_suffix(".00").map(str::to_string).unwrap_or(s)
}

/// Unbucketed pro/contra totals over a slice of rows.
pub fn totals(votes: &[Vote]) -> (u64, u64) {
    let pro = votes.iter().filter(|v| v.pro).count() as u64;
    let contra = votes.iter().filter(|v| v.contra).count() as u64;
    (pro, contra)
}

/// Sum votes into one bucket per calendar day. Rows outside `days` are
/// ignored (the queries already filter to the span, this is the guard).
pub fn day_buckets(votes: &[Vote], days: &[NaiveDate]) -> (Vec<u64>, Vec<u64>) {
    let mut pro = vec![0u64; days.len()];
    let mut contra = vec![0u64; days.len()];

    for vote in votes {
        if let Some(i) = days.iter().position(|d| *d == vote.date()) {
            if vote.pro {
                pro[i] += 1;
            }
            if vote.contra {
                contra[i] += 1;
            }
        }
    }

    (pro, contra)
}

/// Sum votes into twelve month buckets of one year.
pub fn month_buckets(votes: &[Vote], year: i32) -> (Vec<u64>, Vec<u64>) {
    let mut pro = vec![0u64; 12];
    let mut contra = vec![0u64; 12];

    for vote in votes {
        if vote.year() != year {
            continue;
        }
        let i = (vote.time.month() - 1) as usize;
        if vote.pro {
            pro[i] += 1;
        }
        if vote.contra {
            contra[i] += 1;
        }
    }

    (pro, contra)
}

/// Doughnut payload for a single day (today / yesterday) or for the
/// all-time totals: one dataset, two slices.
pub fn stats_doughnut(votes: &[Vote], colors: &ChartColors) -> StatsResponse {
    if votes.is_empty() {
        return StatsResponse::no_entries();
    }

    let (pro, contra) = totals(votes);
    StatsResponse::Chart(ChartPayload::doughnut(pro, contra, colors))
}

/// Stacked bar payload for one ISO week: seven day buckets labelled with
/// short weekday names (Mon … Sun).
pub fn stats_week(votes: &[Vote], days: &[NaiveDate], colors: &ChartColors) -> StatsResponse {
    if votes.is_empty() {
        return StatsResponse::no_entries();
    }

    let labels = days.iter().map(|d| d.format("%a").to_string()).collect();
    let (pro, contra) = day_buckets(votes, days);
    StatsResponse::Chart(ChartPayload::bars(labels, pro, contra, true, colors))
}

/// Stacked bar payload over every day of one month, labels like "1 Jan".
pub fn stats_month(votes: &[Vote], days: &[NaiveDate], colors: &ChartColors) -> StatsResponse {
    if votes.is_empty() {
        return StatsResponse::no_entries();
    }

    let labels = days.iter().map(day_label).collect();
    let (pro, contra) = day_buckets(votes, days);
    StatsResponse::Chart(ChartPayload::bars(labels, pro, contra, true, colors))
}

/// Stacked bar payload with twelve month buckets (Jan … Dec).
pub fn stats_year(votes: &[Vote], year: i32, colors: &ChartColors) -> StatsResponse {
    if votes.is_empty() {
        return StatsResponse::no_entries();
    }

    let labels = (1..=12)
        .map(|m| {
            // from_ymd_opt only fails on an invalid month, and 1..=12 is valid
            NaiveDate::from_ymd_opt(year, m, 1)
                .map(|d| d.format("%b").to_string())
                .unwrap_or_default()
        })
        .collect();

    let (pro, contra) = month_buckets(votes, year);
    StatsResponse::Chart(ChartPayload::bars(labels, pro, contra, true, colors))
}

/// Unstacked bar payload over an inclusive day range, labels like "1 Jan".
pub fn stats_range(votes: &[Vote], days: &[NaiveDate], colors: &ChartColors) -> StatsResponse {
    if votes.is_empty() {
        return StatsResponse::no_entries();
    }

    let labels = days.iter().map(day_label).collect();
    let (pro, contra) = day_buckets(votes, days);
    StatsResponse::Chart(ChartPayload::bars(labels, pro, contra, false, colors))
}

fn day_label(d: &NaiveDate) -> String {
    d.format("%-d %b").to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::chart::StatsResponse;
    use crate::utils::date::days_between;
    use chrono::NaiveDateTime;

    fn colors() -> ChartColors {
        ChartColors {
            pro: "#88c057".to_string(),
            contra: "#ed7161".to_string(),
        }
    }

    fn vote(id: i64, pro: bool, time: &str) -> Vote {
        Vote {
            id,
            post_id: 1,
            user: String::new(),
            pro,
            contra: !pro,
            time: NaiveDateTime::parse_from_str(time, "%Y-%m-%d %H:%M:%S")
                .expect("valid test time"),
        }
    }

    fn date(s: &str) -> NaiveDate {
        NaiveDate::parse_from_str(s, "%Y-%m-%d").expect("valid test date")
    }

    #[test]
    fn bucketed_sums_equal_totals() {
        let votes = vec![
            vote(1, true, "2026-03-02 08:00:00"),
            vote(2, true, "2026-03-02 12:30:00"),
            vote(3, false, "2026-03-04 09:15:00"),
            vote(4, true, "2026-03-07 22:00:00"),
            vote(5, false, "2026-03-07 23:59:59"),
        ];
        let days = days_between(&date("2026-03-02"), &date("2026-03-08"));

        let (pro, contra) = day_buckets(&votes, &days);
        let (pro_total, contra_total) = totals(&votes);

        assert_eq!(pro.iter().sum::<u64>(), pro_total);
        assert_eq!(contra.iter().sum::<u64>(), contra_total);
        assert_eq!(pro_total, 3);
        assert_eq!(contra_total, 2);
    }

    #[test]
    fn month_buckets_cover_all_twelve_months() {
        let votes = vec![
            vote(1, true, "2026-01-15 08:00:00"),
            vote(2, false, "2026-06-01 10:00:00"),
            vote(3, true, "2026-12-31 23:00:00"),
            vote(4, true, "2025-12-31 23:00:00"), // wrong year, ignored
        ];

        let (pro, contra) = month_buckets(&votes, 2026);

        assert_eq!(pro.len(), 12);
        assert_eq!(pro[0], 1);
        assert_eq!(contra[5], 1);
        assert_eq!(pro[11], 1);
        assert_eq!(pro.iter().sum::<u64>() + contra.iter().sum::<u64>(), 3);
    }

    #[test]
    fn percentages_sum_to_hundred() {
        let pro = percentage(7, 3);
        let contra = percentage(3, 7);
        assert!((pro + contra - 100.0).abs() < 0.01);

        // thirds round to 66.67 / 33.33
        assert_eq!(percentage(2, 1), 66.67);
        assert_eq!(percentage(1, 2), 33.33);
    }

    #[test]
    fn percentage_of_zero_count_is_zero() {
        assert_eq!(percentage(0, 5), 0.0);
        assert_eq!(percentage(0, 0), 0.0);
    }

    #[test]
    fn percent_display_strips_trailing_zeroes() {
        assert_eq!(format_percent(70.0), "70");
        assert_eq!(format_percent(66.67), "66.67");
        assert_eq!(format_percent(0.0), "0");
    }

    #[test]
    fn empty_rows_yield_error_payload() {
        let resp = stats_doughnut(&[], &colors());
        assert!(resp.is_error());

        let json = serde_json::to_value(&resp).expect("serialize");
        assert_eq!(json["status"], "error");
        assert_eq!(json["message"], "No entries found");
    }

    #[test]
    fn week_payload_has_seven_buckets_and_weekday_labels() {
        let days = days_between(&date("2026-03-02"), &date("2026-03-08")); // Mon..Sun
        let votes = vec![vote(1, true, "2026-03-03 10:00:00")];

        let resp = stats_week(&votes, &days, &colors());
        let json = serde_json::to_value(&resp).expect("serialize");

        assert_eq!(json["type"], "bar");
        assert_eq!(json["data"]["labels"].as_array().map(|a| a.len()), Some(7));
        assert_eq!(json["data"]["labels"][0], "Mon");
        assert_eq!(json["data"]["datasets"][0]["label"], "Pro");
        // Tuesday bucket carries the single pro vote
        assert_eq!(json["data"]["datasets"][0]["data"][1], 1);
        assert_eq!(json["options"]["scales"]["xAxes"][0]["stacked"], true);
    }

    #[test]
    fn doughnut_payload_shape() {
        let votes = vec![
            vote(1, true, "2026-03-02 08:00:00"),
            vote(2, false, "2026-03-02 09:00:00"),
        ];
        let resp = stats_doughnut(&votes, &colors());
        let json = serde_json::to_value(&resp).expect("serialize");

        assert_eq!(json["type"], "doughnut");
        assert_eq!(json["data"]["labels"][0], "Pro");
        assert_eq!(json["data"]["datasets"][0]["data"][0], 1);
        assert_eq!(json["data"]["datasets"][0]["data"][1], 1);
        assert_eq!(json["data"]["datasets"][0]["backgroundColor"][0], "#88c057");
        assert_eq!(json["options"]["legend"]["position"], "bottom");
    }

    #[test]
    fn range_chart_is_unstacked() {
        let days = days_between(&date("2026-03-01"), &date("2026-03-03"));
        let votes = vec![vote(1, true, "2026-03-01 08:00:00")];

        let resp = stats_range(&votes, &days, &colors());
        match resp {
            StatsResponse::Chart(payload) => assert!(payload.options.scales.is_none()),
            StatsResponse::Error(_) => panic!("expected chart payload"),
        }
    }
}
