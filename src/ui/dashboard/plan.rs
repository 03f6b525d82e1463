//! Render plan construction
//!
//! One render pass re-derives the full ordered list of dashboard sections
//! from the current state. The pass is a pure function of the state, which
//! keeps the whole dashboard sequence testable without a terminal: build a
//! synthetic state, build the plan, assert on the sections.
//!
//! When chart extraction fails the pass halts at that point, keeping the
//! sections produced so far and ending with a single `Fault` section; a
//! failed load halts the pass before anything renders.

use super::state::DashboardState;
use super::utils::balloon_frame;
use crate::consts::cli_consts::{CAPTION, HOSPITAL_LOCATIONS, SAMPLE_PLOT_POINTS, columns};
use crate::data::DataFormat;
use crate::error::DataError;
use crate::patient::BmiReport;
use crate::vitals::Alert;
use std::fmt::Display;

/// File named by the scripted exception. Never actually opened.
const DEMO_MISSING_FILE: &str = "patient_data.csv";

/// Chart sequence over the uploaded data: (title, conventional column, mark).
const CHART_SPECS: [(&str, &str, ChartKind); 3] = [
    ("Blood Pressure Over Time", columns::BLOOD_PRESSURE, ChartKind::Line),
    ("Heart Rate Over Time", columns::HEART_RATE, ChartKind::Line),
    ("Weight Trend", columns::WEIGHT, ChartKind::Area),
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChartKind {
    Line,
    Area,
}

impl ChartKind {
    pub fn as_str(self) -> &'static str {
        match self {
            ChartKind::Line => "line",
            ChartKind::Area => "area",
        }
    }
}

/// One section of a render pass, in display order.
#[derive(Debug, Clone, PartialEq)]
pub enum Section {
    Table {
        format: DataFormat,
        source: String,
        columns: Vec<String>,
        row_count: usize,
    },
    PatientForm {
        submitted: Option<BmiReport>,
    },
    SummaryMetrics,
    Chart {
        title: String,
        kind: ChartKind,
        points: Vec<(f64, f64)>,
    },
    Sliders {
        blood_pressure: u16,
        heart_rate: u16,
    },
    Progress {
        percent: u8,
    },
    Alerts {
        alerts: Vec<Alert>,
    },
    SamplePlot {
        points: Vec<(f64, f64)>,
    },
    Map {
        points: Vec<(f64, f64)>,
    },
    ThemePicker {
        name: String,
        hex: String,
    },
    ErrorDemo {
        kind: &'static str,
        message: String,
    },
    Celebration {
        frame: String,
    },
    Caption {
        text: String,
    },
    /// The pass halted here; nothing after this renders.
    Fault {
        message: String,
    },
}

/// Re-execute the full dashboard sequence against the current state.
pub fn build_render_plan(state: &DashboardState) -> Vec<Section> {
    let mut plan = Vec::new();

    // A failed load surfaces exactly like the host runtime's crash page:
    // the whole pass is the error.
    if let Some(error) = &state.load_error {
        plan.push(Section::Fault {
            message: error.to_string(),
        });
        return plan;
    }

    if let Some(dataset) = &state.dataset {
        plan.push(Section::Table {
            format: dataset.format,
            source: dataset.source.clone(),
            columns: dataset.columns.clone(),
            row_count: dataset.row_count(),
        });
    }

    plan.push(Section::PatientForm {
        submitted: state.last_submission.clone(),
    });

    plan.push(Section::SummaryMetrics);

    if let Some(dataset) = &state.dataset {
        for (title, column, kind) in CHART_SPECS {
            match dataset.series(column) {
                Ok(points) => plan.push(Section::Chart {
                    title: title.to_string(),
                    kind,
                    points,
                }),
                Err(error) => {
                    plan.push(Section::Fault {
                        message: error.to_string(),
                    });
                    return plan;
                }
            }
        }
    }

    plan.push(Section::Sliders {
        blood_pressure: state.vitals.blood_pressure,
        heart_rate: state.vitals.heart_rate,
    });

    plan.push(Section::Progress {
        percent: state.progress,
    });

    let alerts = state.vitals.alerts();
    if !alerts.is_empty() {
        plan.push(Section::Alerts { alerts });
    }

    plan.push(Section::SamplePlot {
        points: SAMPLE_PLOT_POINTS.to_vec(),
    });

    plan.push(Section::Map {
        points: HOSPITAL_LOCATIONS.to_vec(),
    });

    let (name, hex) = state.theme();
    plan.push(Section::ThemePicker {
        name: name.to_string(),
        hex: hex.to_string(),
    });

    // Scripted exception: constructed fresh on every pass, displayed once,
    // regardless of whether a file was loaded.
    let demo = DataError::FileNotFound(DEMO_MISSING_FILE.to_string());
    plan.push(Section::ErrorDemo {
        kind: demo.kind(),
        message: demo.to_string(),
    });

    plan.push(Section::Celebration {
        frame: balloon_frame(state.tick).to_string(),
    });

    plan.push(Section::Caption {
        text: CAPTION.to_string(),
    });

    plan
}

impl Display for Section {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Section::Table {
                format,
                source,
                columns,
                row_count,
            } => write!(
                f,
                "[TABLE] {} rows x {} columns from {} ({})",
                row_count,
                columns.len(),
                source,
                format
            ),
            Section::PatientForm { submitted } => match submitted {
                Some(report) => write!(
                    f,
                    "[FORM] submitted: {} | BMI {:.2}",
                    report.name, report.bmi
                ),
                None => write!(f, "[FORM] awaiting submission"),
            },
            Section::SummaryMetrics => write!(f, "[METRICS] canned summary values"),
            Section::Chart { title, kind, points } => write!(
                f,
                "[CHART] {} ({}, {} points)",
                title,
                kind.as_str(),
                points.len()
            ),
            Section::Sliders {
                blood_pressure,
                heart_rate,
            } => write!(
                f,
                "[SLIDERS] blood pressure {}/80 | heart rate {} bpm",
                blood_pressure, heart_rate
            ),
            Section::Progress { percent } => write!(f, "[PROGRESS] {}%", percent),
            Section::Alerts { alerts } => {
                write!(f, "[ALERTS]")?;
                for alert in alerts {
                    write!(f, " {}: {}", alert.severity, alert.message)?;
                }
                Ok(())
            }
            Section::SamplePlot { points } => {
                write!(f, "[PLOT] sample chart with {} points", points.len())
            }
            Section::Map { points } => write!(f, "[MAP] {} hospital locations", points.len()),
            Section::ThemePicker { name, hex } => write!(f, "[THEME] {} {}", name, hex),
            Section::ErrorDemo { kind, message } => {
                write!(f, "[ERROR-DEMO] {}: {}", kind, message)
            }
            Section::Celebration { frame } => write!(f, "[CELEBRATION] {}", frame),
            Section::Caption { text } => write!(f, "[CAPTION] {}", text),
            Section::Fault { message } => write!(f, "[FAULT] {}", message),
        }
    }
}
