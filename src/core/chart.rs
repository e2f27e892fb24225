//! Chart.js-compatible response payloads.
//!
//! The stats commands do not render anything themselves: they shape the
//! aggregated counts into the JSON structure a Chart.js consumer feeds
//! straight into `new Chart(...)`. Empty result sets become the uniform
//! error payload instead of a chart.

use serde::Serialize;

/// Colors used for the pro/contra datasets.
#[derive(Debug, Clone)]
pub struct ChartColors {
    pub pro: String,
    pub contra: String,
}

/// What a stats query hands back to the consumer: either a chart payload
/// or the uniform `{status, message}` error object.
#[derive(Debug, Clone, Serialize)]
#[serde(untagged)]
pub enum StatsResponse {
    Chart(ChartPayload),
    Error(ErrorPayload),
}

impl StatsResponse {
    /// The only error class on the aggregation surface: no rows found.
    pub fn no_entries() -> Self {
        StatsResponse::Error(ErrorPayload {
            status: "error".to_string(),
            message: "No entries found".to_string(),
        })
    }

    pub fn is_error(&self) -> bool {
        matches!(self, StatsResponse::Error(_))
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct ErrorPayload {
    pub status: String,
    pub message: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct ChartPayload {
    #[serde(rename = "type")]
    pub kind: ChartKind,
    pub data: ChartData,
    pub options: ChartOptions,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ChartKind {
    Doughnut,
    Bar,
}

#[derive(Debug, Clone, Serialize)]
pub struct ChartData {
    pub datasets: Vec<Dataset>,
    pub labels: Vec<String>,
}

#[derive(Debug, Clone, Serialize)]
pub struct Dataset {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
    pub data: Vec<u64>,
    #[serde(rename = "backgroundColor")]
    pub background_color: BackgroundColor,
}

/// Doughnut datasets color per slice, bar datasets use one color.
#[derive(Debug, Clone, Serialize)]
#[serde(untagged)]
pub enum BackgroundColor {
    Single(String),
    PerSlice(Vec<String>),
}

#[derive(Debug, Clone, Serialize)]
pub struct ChartOptions {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub scales: Option<Scales>,
    pub legend: Legend,
}

#[derive(Debug, Clone, Serialize)]
pub struct Scales {
    #[serde(rename = "xAxes")]
    pub x_axes: Vec<Axis>,
    #[serde(rename = "yAxes")]
    pub y_axes: Vec<Axis>,
}

#[derive(Debug, Clone, Serialize)]
pub struct Axis {
    pub stacked: bool,
}

#[derive(Debug, Clone, Serialize)]
pub struct Legend {
    pub position: String,
}

impl ChartPayload {
    /// One doughnut with two slices: total pro and total contra.
    pub fn doughnut(pro: u64, contra: u64, colors: &ChartColors) -> Self {
        ChartPayload {
            kind: ChartKind::Doughnut,
            data: ChartData {
                datasets: vec![Dataset {
                    label: None,
                    data: vec![pro, contra],
                    background_color: BackgroundColor::PerSlice(vec![
                        colors.pro.clone(),
                        colors.contra.clone(),
                    ]),
                }],
                labels: vec!["Pro".to_string(), "Contra".to_string()],
            },
            options: ChartOptions {
                scales: None,
                legend: Legend {
                    position: "bottom".to_string(),
                },
            },
        }
    }

    /// Two bar series (pro, contra) over the given bucket labels.
    /// `stacked` adds the stacked x/y axes the weekly/monthly/yearly
    /// charts use; range charts stay unstacked.
    pub fn bars(
        labels: Vec<String>,
        pro: Vec<u64>,
        contra: Vec<u64>,
        stacked: bool,
        colors: &ChartColors,
    ) -> Self {
        let scales = stacked.then(|| Scales {
            x_axes: vec![Axis { stacked: true }],
            y_axes: vec![Axis { stacked: true }],
        });

        ChartPayload {
            kind: ChartKind::Bar,
            data: ChartData {
                datasets: vec![
                    Dataset {
                        label: Some("Pro".to_string()),
                        data: pro,
                        background_color: BackgroundColor::Single(colors.pro.clone()),
                    },
                    Dataset {
                        label: Some("Contra".to_string()),
                        data: contra,
                        background_color: BackgroundColor::Single(colors.contra.clone()),
                    },
                ],
                labels,
            },
            options: ChartOptions {
                scales,
                legend: Legend {
                    position: "bottom".to_string(),
                },
            },
        }
    }
}
