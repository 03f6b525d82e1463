pub mod cli_consts {
    //! Dashboard Configuration Constants
    //!
    //! This module contains all configuration constants for the dashboard,
    //! organized by functional area for clarity and maintainability.

    // =============================================================================
    // QUEUE CONFIGURATION
    // =============================================================================

    /// The maximum number of events to keep in the activity logs.
    pub const MAX_ACTIVITY_LOGS: usize = 100;

    /// Maximum event buffer size for the loader worker channel.
    pub const EVENT_QUEUE_SIZE: usize = 100;

    // =============================================================================
    // PATIENT FORM CONFIGURATION
    // =============================================================================

    /// Bounds for the patient form inputs. Numeric edits clamp at these
    /// limits; there is no other validation.
    pub mod form {
        /// Age input range, in years.
        pub const AGE_RANGE: (u8, u8) = (0, 120);

        /// Weight slider range, in kilograms.
        pub const WEIGHT_RANGE: (u16, u16) = (30, 150);

        /// Weight slider starting position.
        pub const WEIGHT_DEFAULT: u16 = 70;

        /// Height slider range, in centimeters.
        pub const HEIGHT_RANGE: (u16, u16) = (100, 220);

        /// Height slider starting position.
        pub const HEIGHT_DEFAULT: u16 = 170;
    }

    // =============================================================================
    // SIMULATED VITALS CONFIGURATION
    // =============================================================================

    /// Ranges and alert thresholds for the simulated vitals sliders.
    /// Alerts evaluate against the sliders, never against uploaded data.
    pub mod simulated {
        /// Systolic blood pressure slider range, in mmHg.
        pub const BLOOD_PRESSURE_RANGE: (u16, u16) = (80, 180);

        /// Blood pressure slider starting position.
        pub const BLOOD_PRESSURE_DEFAULT: u16 = 120;

        /// Values strictly above this show the high blood pressure warning.
        pub const BLOOD_PRESSURE_WARNING_LIMIT: u16 = 140;

        /// Heart rate slider range, in bpm.
        pub const HEART_RATE_RANGE: (u16, u16) = (50, 150);

        /// Heart rate slider starting position.
        pub const HEART_RATE_DEFAULT: u16 = 72;

        /// Inclusive band of heart rates that raise no alert.
        pub const HEART_RATE_NORMAL_RANGE: (u16, u16) = (60, 100);
    }

    // =============================================================================
    // DISPLAY CONFIGURATION
    // =============================================================================

    /// Canned summary metrics: (label, value, delta). These are example
    /// values and are never derived from uploaded or form data.
    pub const SUMMARY_METRICS: [(&str, &str, &str); 3] = [
        ("Blood Pressure", "120/80", "-2"),
        ("Heart Rate", "72 bpm", "+1 bpm"),
        ("Temperature", "37°C", ""),
    ];

    /// Points for the static example chart, independent of any patient data.
    pub const SAMPLE_PLOT_POINTS: [(f64, f64); 4] =
        [(1.0, 10.0), (2.0, 20.0), (3.0, 25.0), (4.0, 30.0)];

    /// Fixed (latitude, longitude) pairs for the hospital map. Always three
    /// points, regardless of uploaded data.
    pub const HOSPITAL_LOCATIONS: [(f64, f64); 3] = [
        (37.7749, -122.4194),
        (37.7849, -122.4094),
        (37.7649, -122.4294),
    ];

    /// Theme palette for the color picker: (name, hex). The first entry is
    /// the default selection.
    pub const THEME_PALETTE: [(&str, &str); 6] = [
        ("Green", "#00f900"),
        ("Teal", "#00c2a8"),
        ("Blue", "#2e86de"),
        ("Violet", "#8e5bd8"),
        ("Amber", "#ffb142"),
        ("Rose", "#ff5e7e"),
    ];

    /// Footer caption shown on every render pass.
    pub const CAPTION: &str = "This dashboard is for demo purposes only.";

    /// Cosmetic progress configuration.
    pub mod progress {
        /// Amount the progress indicator advances per UI tick.
        pub const STEP_PER_TICK: u8 = 2;

        /// Progress saturates here and never resets.
        pub const COMPLETE: u8 = 100;
    }

    // =============================================================================
    // DATA CONVENTIONS
    // =============================================================================

    /// Conventional column names expected (but not validated) in uploaded
    /// data files.
    pub mod columns {
        pub const DATE: &str = "Date";
        pub const BLOOD_PRESSURE: &str = "Blood Pressure";
        pub const HEART_RATE: &str = "Heart Rate";
        pub const WEIGHT: &str = "Weight";
    }
}
