//! Simulated vitals sliders and threshold alerts.

use crate::consts::cli_consts::simulated;

/// Slider-driven example values. Not derived from any real patient data
/// source; values live only in dashboard state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SimulatedVitals {
    /// Systolic blood pressure, mmHg.
    pub blood_pressure: u16,
    /// Heart rate, bpm.
    pub heart_rate: u16,
}

impl Default for SimulatedVitals {
    fn default() -> Self {
        Self {
            blood_pressure: simulated::BLOOD_PRESSURE_DEFAULT,
            heart_rate: simulated::HEART_RATE_DEFAULT,
        }
    }
}

impl SimulatedVitals {
    pub fn adjust_blood_pressure(&mut self, delta: i16) {
        self.blood_pressure = shift(self.blood_pressure, delta, simulated::BLOOD_PRESSURE_RANGE);
    }

    pub fn adjust_heart_rate(&mut self, delta: i16) {
        self.heart_rate = shift(self.heart_rate, delta, simulated::HEART_RATE_RANGE);
    }

    /// Evaluate the alert thresholds against the slider values.
    pub fn alerts(&self) -> Vec<Alert> {
        let mut alerts = Vec::new();
        if self.blood_pressure > simulated::BLOOD_PRESSURE_WARNING_LIMIT {
            alerts.push(Alert::warning("High blood pressure detected!"));
        }
        let (low, high) = simulated::HEART_RATE_NORMAL_RANGE;
        if self.heart_rate < low || self.heart_rate > high {
            alerts.push(Alert::error("Abnormal heart rate!"));
        }
        alerts
    }

    /// Display reading for the blood pressure slider, e.g. "141/80".
    pub fn blood_pressure_reading(&self) -> String {
        format!("{}/80", self.blood_pressure)
    }

    /// Display reading for the heart rate slider, e.g. "72 bpm".
    pub fn heart_rate_reading(&self) -> String {
        format!("{} bpm", self.heart_rate)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, strum::Display)]
pub enum AlertSeverity {
    Warning,
    Error,
}

/// A banner raised by a threshold rule.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Alert {
    pub severity: AlertSeverity,
    pub message: String,
}

impl Alert {
    fn warning(message: &str) -> Self {
        Self {
            severity: AlertSeverity::Warning,
            message: message.to_string(),
        }
    }

    fn error(message: &str) -> Self {
        Self {
            severity: AlertSeverity::Error,
            message: message.to_string(),
        }
    }
}

fn shift(value: u16, delta: i16, (min, max): (u16, u16)) -> u16 {
    let shifted = i32::from(value) + i32::from(delta);
    shifted.clamp(i32::from(min), i32::from(max)) as u16
}

#[cfg(test)]
mod tests {
    use super::*;

    fn vitals(blood_pressure: u16, heart_rate: u16) -> SimulatedVitals {
        SimulatedVitals {
            blood_pressure,
            heart_rate,
        }
    }

    #[test]
    fn defaults_raise_no_alerts() {
        assert!(SimulatedVitals::default().alerts().is_empty());
    }

    #[test]
    fn blood_pressure_warning_fires_strictly_above_140() {
        assert!(vitals(140, 72).alerts().is_empty());

        let alerts = vitals(141, 72).alerts();
        assert_eq!(alerts.len(), 1);
        assert_eq!(alerts[0].severity, AlertSeverity::Warning);
        assert_eq!(alerts[0].message, "High blood pressure detected!");
    }

    #[test]
    fn heart_rate_error_fires_outside_60_to_100() {
        assert!(vitals(120, 60).alerts().is_empty());
        assert!(vitals(120, 100).alerts().is_empty());

        for heart_rate in [59, 101] {
            let alerts = vitals(120, heart_rate).alerts();
            assert_eq!(alerts.len(), 1);
            assert_eq!(alerts[0].severity, AlertSeverity::Error);
            assert_eq!(alerts[0].message, "Abnormal heart rate!");
        }
    }

    #[test]
    fn both_alerts_can_fire_together() {
        let alerts = vitals(150, 50).alerts();
        assert_eq!(alerts.len(), 2);
        assert_eq!(alerts[0].severity, AlertSeverity::Warning);
        assert_eq!(alerts[1].severity, AlertSeverity::Error);
    }

    #[test]
    fn slider_edits_clamp_at_range_bounds() {
        let mut vitals = SimulatedVitals::default();
        vitals.adjust_blood_pressure(500);
        assert_eq!(vitals.blood_pressure, 180);
        vitals.adjust_blood_pressure(-500);
        assert_eq!(vitals.blood_pressure, 80);

        vitals.adjust_heart_rate(500);
        assert_eq!(vitals.heart_rate, 150);
        vitals.adjust_heart_rate(-500);
        assert_eq!(vitals.heart_rate, 50);
    }

    #[test]
    fn slider_readings_format_for_display() {
        let vitals = vitals(141, 72);
        assert_eq!(vitals.blood_pressure_reading(), "141/80");
        assert_eq!(vitals.heart_rate_reading(), "72 bpm");
    }
}
