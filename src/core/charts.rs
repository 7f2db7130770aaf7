//! Aggregation of filtered launch rows into chart figures.
//!
//! Figures serialise to the JSON shape Plotly.js accepts for
//! `Plotly.react(element, figure.data, figure.layout)`.

use crate::core::{LaunchRecord, Outcome, SiteSelection};
use serde::Serialize;

pub const FAILURE_COLOR: &str = "red";
pub const SUCCESS_COLOR: &str = "green";

/// Plotly's default qualitative palette, assigned to booster categories in
/// order of first appearance.
pub const QUALITATIVE_PALETTE: [&str; 10] = [
    "#636EFA", "#EF553B", "#00CC96", "#AB63FA", "#FFA15A", "#19D3F3", "#FF6692", "#B6E880",
    "#FF97FF", "#FECB52",
];

pub const PAYLOAD_AXIS_TITLE: &str = "Payload Mass (kg)";
pub const OUTCOME_AXIS_TITLE: &str = "Launch Success";
pub const BOOSTER_LEGEND_TITLE: &str = "Booster Version Category";

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct OutcomeCounts {
    pub failure: usize,
    pub success: usize,
}

impl OutcomeCounts {
    pub fn total(&self) -> usize {
        self.failure + self.success
    }

    pub fn get(&self, outcome: Outcome) -> usize {
        match outcome {
            Outcome::Failure => self.failure,
            Outcome::Success => self.success,
        }
    }
}

pub fn count_outcomes(rows: &[&LaunchRecord]) -> OutcomeCounts {
    rows.iter().fold(OutcomeCounts::default(), |mut counts, r| {
        match r.outcome {
            Outcome::Failure => counts.failure += 1,
            Outcome::Success => counts.success += 1,
        }
        counts
    })
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Figure {
    pub data: Vec<Trace>,
    pub layout: Layout,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum Trace {
    Pie(PieTrace),
    Scatter(ScatterTrace),
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PieTrace {
    pub labels: Vec<String>,
    pub values: Vec<usize>,
    pub marker: PieMarker,
    /// Keeps slices in the order given instead of Plotly re-sorting them.
    pub sort: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PieMarker {
    pub colors: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScatterTrace {
    pub name: String,
    pub mode: String,
    pub x: Vec<f64>,
    pub y: Vec<u8>,
    pub marker: ScatterMarker,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScatterMarker {
    pub color: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Layout {
    pub title: Title,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub xaxis: Option<Axis>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub yaxis: Option<Axis>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub legend: Option<Legend>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Title {
    pub text: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Axis {
    pub title: Title,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tickvals: Option<Vec<u8>>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Legend {
    pub title: Title,
}

impl Title {
    fn new(text: impl Into<String>) -> Self {
        Self { text: text.into() }
    }
}

impl Figure {
    pub fn title(&self) -> &str {
        &self.layout.title.text
    }

    /// Number of plotted scatter points across all traces.
    pub fn point_count(&self) -> usize {
        self.data
            .iter()
            .map(|t| match t {
                Trace::Scatter(s) => s.x.len(),
                Trace::Pie(_) => 0,
            })
            .sum()
    }

    /// Sum of all pie slice values.
    pub fn slice_total(&self) -> usize {
        self.data
            .iter()
            .map(|t| match t {
                Trace::Pie(p) => p.values.iter().sum(),
                Trace::Scatter(_) => 0,
            })
            .sum()
    }
}

pub fn pie_title(site: &SiteSelection) -> String {
    match site {
        SiteSelection::All => "Total Success vs. Failure for All Sites".to_string(),
        SiteSelection::Site(name) => format!("Success vs. Failure for {}", name),
    }
}

pub fn scatter_title(site: &SiteSelection) -> String {
    format!("Payload vs. Launch Success for {}", site)
}

fn outcome_color(outcome: Outcome) -> &'static str {
    match outcome {
        Outcome::Failure => FAILURE_COLOR,
        Outcome::Success => SUCCESS_COLOR,
    }
}

/// Success/failure proportion chart. Outcomes with no rows get no slice;
/// the larger count comes first and ties keep failure first.
pub fn pie_chart(site: &SiteSelection, rows: &[&LaunchRecord]) -> Figure {
    let counts = count_outcomes(rows);

    let mut outcomes: Vec<Outcome> = [Outcome::Failure, Outcome::Success]
        .into_iter()
        .filter(|o| counts.get(*o) > 0)
        .collect();
    outcomes.sort_by(|a, b| counts.get(*b).cmp(&counts.get(*a)));

    let trace = PieTrace {
        labels: outcomes.iter().map(|o| o.label().to_string()).collect(),
        values: outcomes.iter().map(|o| counts.get(*o)).collect(),
        marker: PieMarker {
            colors: outcomes.iter().map(|o| outcome_color(*o).to_string()).collect(),
        },
        sort: false,
    };

    Figure {
        data: vec![Trace::Pie(trace)],
        layout: Layout {
            title: Title::new(pie_title(site)),
            xaxis: None,
            yaxis: None,
            legend: Some(Legend {
                title: Title::new(OUTCOME_AXIS_TITLE),
            }),
        },
    }
}

/// Payload-vs-outcome chart with one trace per booster version category.
pub fn scatter_chart(site: &SiteSelection, rows: &[&LaunchRecord]) -> Figure {
    let mut traces: Vec<ScatterTrace> = Vec::new();

    for row in rows {
        let index = match traces
            .iter()
            .position(|t| t.name == row.booster_version_category)
        {
            Some(index) => index,
            None => {
                let color = QUALITATIVE_PALETTE[traces.len() % QUALITATIVE_PALETTE.len()];
                traces.push(ScatterTrace {
                    name: row.booster_version_category.clone(),
                    mode: "markers".to_string(),
                    x: Vec::new(),
                    y: Vec::new(),
                    marker: ScatterMarker {
                        color: color.to_string(),
                    },
                });
                traces.len() - 1
            }
        };
        traces[index].x.push(row.payload_mass_kg);
        traces[index].y.push(row.outcome.class());
    }

    Figure {
        data: traces.into_iter().map(Trace::Scatter).collect(),
        layout: Layout {
            title: Title::new(scatter_title(site)),
            xaxis: Some(Axis {
                title: Title::new(PAYLOAD_AXIS_TITLE),
                tickvals: None,
            }),
            yaxis: Some(Axis {
                title: Title::new(OUTCOME_AXIS_TITLE),
                tickvals: Some(vec![0, 1]),
            }),
            legend: Some(Legend {
                title: Title::new(BOOSTER_LEGEND_TITLE),
            }),
        },
    }
}
