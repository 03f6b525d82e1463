//! Event System
//!
//! Types and implementations for dashboard interaction events

use crate::error::LogLevel;
use crate::logging::should_log_with_env;
use chrono::Local;
use std::fmt::Display;

#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum Source {
    /// Worker that reads and parses the uploaded data file.
    Loader,
    /// The patient information form.
    Form,
    /// The simulated vitals controls.
    Vitals,
    /// The theme color picker.
    Theme,
}

#[derive(Debug, Copy, Clone, Eq, PartialEq, strum::Display)]
pub enum EventType {
    Success,
    Error,
    Info,
    Refresh,
}

#[derive(Debug, Clone, Eq, PartialEq)]
pub struct Event {
    pub source: Source,
    pub msg: String,
    pub timestamp: String,
    pub event_type: EventType,
    pub log_level: LogLevel,
}

impl Event {
    fn new(source: Source, msg: String, event_type: EventType, log_level: LogLevel) -> Self {
        Self {
            source,
            msg,
            timestamp: Local::now().format("%Y-%m-%d %H:%M:%S").to_string(),
            event_type,
            log_level,
        }
    }

    pub fn loader_with_level(msg: String, event_type: EventType, log_level: LogLevel) -> Self {
        Self::new(Source::Loader, msg, event_type, log_level)
    }

    pub fn form_submitted(msg: String) -> Self {
        Self::new(Source::Form, msg, EventType::Success, LogLevel::Info)
    }

    pub fn vitals_reported(msg: String) -> Self {
        Self::new(Source::Vitals, msg, EventType::Info, LogLevel::Info)
    }

    pub fn theme_picked(msg: String) -> Self {
        Self::new(Source::Theme, msg, EventType::Info, LogLevel::Info)
    }

    pub fn should_display(&self) -> bool {
        // Always show success events and info level events
        if self.event_type == EventType::Success || self.log_level >= LogLevel::Info {
            return true;
        }
        should_log_with_env(self.log_level)
    }
}

impl Display for Event {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} [{}] {}", self.event_type, self.timestamp, self.msg)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn success_events_always_display() {
        let event = Event::form_submitted("Patient Ada added successfully!".to_string());
        assert!(event.should_display());
    }

    #[test]
    fn info_level_events_display() {
        let event = Event::loader_with_level(
            "Loaded 3 rows".to_string(),
            EventType::Refresh,
            LogLevel::Info,
        );
        assert!(event.should_display());
    }

    #[test]
    fn display_format_contains_type_and_message() {
        let event = Event::vitals_reported("Simulated Heart Rate: 72 bpm".to_string());
        let rendered = event.to_string();
        assert!(rendered.starts_with("Info ["));
        assert!(rendered.ends_with("Simulated Heart Rate: 72 bpm"));
    }
}
