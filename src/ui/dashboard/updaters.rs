//! Dashboard state update logic
//!
//! Contains all methods for updating dashboard state from ticks, events and
//! key presses

use super::state::{DashboardState, Focus};
use crate::consts::cli_consts::{THEME_PALETTE, progress};
use crate::events::Event;
use crate::patient::BmiReport;

use crossterm::event::KeyCode;

impl DashboardState {
    /// Update the dashboard state with a new tick: advance the cosmetic
    /// progress indicator and fold queued events into the activity log.
    pub fn update(&mut self) {
        self.tick += 1;
        self.advance_progress();

        while let Some(event) = self.pending_events.pop_front() {
            self.add_to_activity_log(event);
        }
    }

    /// Monotone progress, saturating at 100. Never resets, never cancels.
    fn advance_progress(&mut self) {
        self.progress = self
            .progress
            .saturating_add(progress::STEP_PER_TICK)
            .min(progress::COMPLETE);
    }

    /// Route a key press to the focused widget. Every press re-renders the
    /// full dashboard on the next frame.
    pub fn handle_key(&mut self, code: KeyCode) {
        match code {
            KeyCode::Tab => self.focus = self.focus.next(),
            KeyCode::BackTab => self.focus = self.focus.prev(),
            KeyCode::Left | KeyCode::Down => self.adjust_focused(-1),
            KeyCode::Right | KeyCode::Up => self.adjust_focused(1),
            KeyCode::Enter => self.activate_focused(),
            KeyCode::Backspace if self.focus.is_text_entry() => self.form.pop_name_char(),
            KeyCode::Char(c) if self.focus.is_text_entry() => self.form.push_name_char(c),
            _ => {}
        }
    }

    fn adjust_focused(&mut self, direction: i16) {
        match self.focus {
            Focus::FormAge => self.form.adjust_age(direction),
            Focus::FormGender => self.form.gender = self.form.gender.next(),
            Focus::FormWeight => self.form.adjust_weight(direction),
            Focus::FormHeight => self.form.adjust_height(direction),
            Focus::BloodPressure => self.vitals.adjust_blood_pressure(direction),
            Focus::HeartRate => self.vitals.adjust_heart_rate(direction),
            Focus::Theme => self.cycle_theme(direction),
            Focus::FormName | Focus::FormSubmit | Focus::VitalsUpdate => {}
        }
    }

    fn activate_focused(&mut self) {
        match self.focus {
            Focus::FormSubmit => self.submit_form(),
            Focus::VitalsUpdate => self.report_vitals(),
            Focus::FormGender => self.form.gender = self.form.gender.next(),
            Focus::Theme => self.cycle_theme(1),
            _ => {}
        }
    }

    /// Form submission: record the BMI report and a success event.
    fn submit_form(&mut self) {
        let report = BmiReport {
            name: self.form.name.clone(),
            bmi: self.form.bmi(),
        };
        self.add_event(Event::form_submitted(format!(
            "Patient {} added successfully!",
            report.name
        )));
        self.last_submission = Some(report);
    }

    /// The "update health data" button: echo the current slider values.
    fn report_vitals(&mut self) {
        let blood_pressure = self.vitals.blood_pressure_reading();
        let heart_rate = self.vitals.heart_rate_reading();
        self.add_event(Event::vitals_reported(format!(
            "Simulated Blood Pressure: {}",
            blood_pressure
        )));
        self.add_event(Event::vitals_reported(format!(
            "Simulated Heart Rate: {}",
            heart_rate
        )));
        self.last_vitals_report = Some((blood_pressure, heart_rate));
    }

    fn cycle_theme(&mut self, direction: i16) {
        let len = THEME_PALETTE.len();
        self.theme_index = (self.theme_index + len).wrapping_add_signed(direction as isize) % len;
        let (_, hex) = self.theme();
        self.add_event(Event::theme_picked(format!("Selected theme color: {}", hex)));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::events::EventType;
    use crate::ui::app::UIConfig;
    use std::time::Instant;

    fn state() -> DashboardState {
        DashboardState::new(Instant::now(), UIConfig::new(false, 0, None))
    }

    #[test]
    fn progress_is_monotone_and_saturates() {
        let mut state = state();
        let mut last = state.progress;
        for _ in 0..120 {
            state.update();
            assert!(state.progress >= last);
            last = state.progress;
        }
        assert_eq!(state.progress, 100);
    }

    #[test]
    fn update_folds_pending_events_into_the_log() {
        let mut state = state();
        state.add_event(Event::vitals_reported("Simulated Heart Rate: 72 bpm".into()));
        assert_eq!(state.activity_logs.len(), 0);

        state.update();
        assert_eq!(state.pending_events.len(), 0);
        assert_eq!(state.activity_logs.len(), 1);
    }

    #[test]
    fn tab_walks_the_focus_ring() {
        let mut state = state();
        assert_eq!(state.focus, Focus::FormName);
        state.handle_key(KeyCode::Tab);
        assert_eq!(state.focus, Focus::FormAge);
        state.handle_key(KeyCode::BackTab);
        assert_eq!(state.focus, Focus::FormName);
        state.handle_key(KeyCode::BackTab);
        assert_eq!(state.focus, Focus::Theme);
    }

    #[test]
    fn submit_records_bmi_and_success_event() {
        let mut state = state();
        for c in "Ada".chars() {
            state.handle_key(KeyCode::Char(c));
        }
        state.focus = Focus::FormSubmit;
        state.handle_key(KeyCode::Enter);

        let report = state.last_submission.as_ref().expect("submission");
        assert_eq!(report.name, "Ada");
        assert_eq!(report.bmi, 24.22);

        state.update();
        let event = state.activity_logs.back().expect("event");
        assert_eq!(event.event_type, EventType::Success);
        assert_eq!(event.msg, "Patient Ada added successfully!");
    }

    #[test]
    fn update_button_echoes_current_slider_values() {
        let mut state = state();
        state.focus = Focus::BloodPressure;
        state.handle_key(KeyCode::Right);
        state.focus = Focus::VitalsUpdate;
        state.handle_key(KeyCode::Enter);

        let (blood_pressure, heart_rate) =
            state.last_vitals_report.clone().expect("vitals report");
        assert_eq!(blood_pressure, "121/80");
        assert_eq!(heart_rate, "72 bpm");

        state.update();
        assert!(
            state
                .activity_logs
                .iter()
                .any(|event| event.msg == "Simulated Blood Pressure: 121/80")
        );
    }

    #[test]
    fn slider_keys_clamp_at_widget_bounds() {
        let mut state = state();
        state.focus = Focus::HeartRate;
        for _ in 0..200 {
            state.handle_key(KeyCode::Up);
        }
        assert_eq!(state.vitals.heart_rate, 150);
    }

    #[test]
    fn theme_cycling_wraps_and_reports_the_hex() {
        let mut state = state();
        state.focus = Focus::Theme;
        state.handle_key(KeyCode::Left);
        assert_eq!(state.theme_index, THEME_PALETTE.len() - 1);

        state.handle_key(KeyCode::Right);
        assert_eq!(state.theme_index, 0);

        state.update();
        let event = state.activity_logs.back().expect("event");
        assert_eq!(event.msg, "Selected theme color: #00f900");
    }

    #[test]
    fn typing_is_captured_only_by_the_name_field() {
        let mut state = state();
        state.focus = Focus::HeartRate;
        state.handle_key(KeyCode::Char('x'));
        assert_eq!(state.form.name, "");

        state.focus = Focus::FormName;
        state.handle_key(KeyCode::Char('x'));
        state.handle_key(KeyCode::Backspace);
        assert_eq!(state.form.name, "");
    }
}
