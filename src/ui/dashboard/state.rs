//! Dashboard state management
//!
//! Contains the main dashboard state struct and related enums

use crate::consts::cli_consts::{MAX_ACTIVITY_LOGS, THEME_PALETTE};
use crate::data::Dataset;
use crate::error::DataError;
use crate::events::Event;
use crate::patient::{BmiReport, PatientForm};
use crate::ui::app::UIConfig;
use crate::vitals::SimulatedVitals;
use crate::workers::loader::DataUpdate;

use std::collections::VecDeque;
use std::time::Instant;

/// Interactive widgets in focus order. Tab and Shift-Tab walk this ring.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Focus {
    FormName,
    FormAge,
    FormGender,
    FormWeight,
    FormHeight,
    FormSubmit,
    BloodPressure,
    HeartRate,
    VitalsUpdate,
    Theme,
}

impl Focus {
    const RING: [Focus; 10] = [
        Focus::FormName,
        Focus::FormAge,
        Focus::FormGender,
        Focus::FormWeight,
        Focus::FormHeight,
        Focus::FormSubmit,
        Focus::BloodPressure,
        Focus::HeartRate,
        Focus::VitalsUpdate,
        Focus::Theme,
    ];

    pub fn next(self) -> Self {
        let at = Self::RING.iter().position(|focus| *focus == self).unwrap_or(0);
        Self::RING[(at + 1) % Self::RING.len()]
    }

    pub fn prev(self) -> Self {
        let at = Self::RING.iter().position(|focus| *focus == self).unwrap_or(0);
        Self::RING[(at + Self::RING.len() - 1) % Self::RING.len()]
    }

    /// The name field captures printable keys while focused.
    pub fn is_text_entry(self) -> bool {
        matches!(self, Focus::FormName)
    }
}

/// State behind one full render pass. Every interaction mutates this and
/// the next frame re-renders the entire dashboard from it.
#[derive(Debug)]
pub struct DashboardState {
    /// Data file being displayed, if any.
    pub data_path: Option<String>,
    /// The start time of the application, used for computing uptime.
    pub start_time: Instant,
    /// Uploaded dataset, once the loader delivers it.
    pub dataset: Option<Dataset>,
    /// Failure from the most recent load attempt. Halts the render pass.
    pub load_error: Option<DataError>,
    /// Patient information form being edited.
    pub form: PatientForm,
    /// Outcome of the last form submission.
    pub last_submission: Option<BmiReport>,
    /// Simulated vitals slider values.
    pub vitals: SimulatedVitals,
    /// Readings echoed by the last "update" press: (blood pressure, heart rate).
    pub last_vitals_report: Option<(String, String)>,
    /// Selected entry in the theme palette.
    pub theme_index: usize,
    /// Cosmetic progress indicator, 0 to 100.
    pub progress: u8,
    /// Widget with keyboard focus.
    pub focus: Focus,
    /// Queue of events waiting to be processed
    pub pending_events: VecDeque<Event>,
    /// Activity logs for display
    pub activity_logs: VecDeque<Event>,
    /// Animation tick counter
    pub tick: usize,
    /// Whether to enable background colors
    pub with_background_color: bool,
}

impl DashboardState {
    /// Creates a new instance of the dashboard state.
    pub fn new(start_time: Instant, ui_config: UIConfig) -> Self {
        Self {
            data_path: ui_config.data_path,
            start_time,
            dataset: None,
            load_error: None,
            form: PatientForm::default(),
            last_submission: None,
            vitals: SimulatedVitals::default(),
            last_vitals_report: None,
            theme_index: ui_config.theme_index % THEME_PALETTE.len(),
            progress: 0,
            focus: Focus::FormName,
            pending_events: VecDeque::new(),
            activity_logs: VecDeque::new(),
            tick: 0,
            with_background_color: ui_config.with_background_color,
        }
    }

    /// Selected theme palette entry: (name, hex).
    pub fn theme(&self) -> (&'static str, &'static str) {
        THEME_PALETTE[self.theme_index % THEME_PALETTE.len()]
    }

    /// Add an event to activity logs with size limit
    pub fn add_to_activity_log(&mut self, event: Event) {
        if self.activity_logs.len() >= MAX_ACTIVITY_LOGS {
            self.activity_logs.pop_front();
        }
        self.activity_logs.push_back(event);
    }

    /// Add an event to the processing queue
    pub fn add_event(&mut self, event: Event) {
        self.pending_events.push_back(event);
    }

    /// Apply the outcome of a load attempt. A failure clears the dataset:
    /// the pass halts on the error until a reload succeeds.
    pub fn apply_data_update(&mut self, update: DataUpdate) {
        match update {
            Ok(dataset) => {
                self.dataset = Some(dataset);
                self.load_error = None;
            }
            Err(error) => {
                self.dataset = None;
                self.load_error = Some(error);
            }
        }
    }
}
