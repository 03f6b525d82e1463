//! Main application state and UI loop
//!
//! Contains the App struct and main UI event handling logic

use crate::config::Config;
use crate::events::Event as WorkerEvent;
use crate::ui::dashboard::{DashboardState, render_dashboard};
use crate::ui::splash::render_splash;
use crate::workers::loader::DataUpdate;
use crossterm::event::{self, Event, KeyCode};
use ratatui::{Frame, Terminal, backend::Backend};
use std::path::PathBuf;
use std::time::{Duration, Instant};
use tokio::sync::{broadcast, mpsc};

/// UI configuration data grouped by concern
#[derive(Debug, Clone)]
pub struct UIConfig {
    pub with_background_color: bool,
    pub theme_index: usize,
    pub data_path: Option<String>,
}

impl UIConfig {
    pub fn new(with_background_color: bool, theme_index: usize, data_path: Option<String>) -> Self {
        Self {
            with_background_color,
            theme_index,
            data_path,
        }
    }
}

/// The different screens in the application.
#[derive(Debug)]
pub enum Screen {
    /// Splash screen shown at the start of the application.
    Splash,
    /// Dashboard screen displaying the full render pass.
    Dashboard(Box<DashboardState>),
}

/// Application state
#[derive(Debug)]
pub struct App {
    /// The start time of the application, used for computing uptime.
    start_time: Instant,

    /// The current screen being displayed in the application.
    current_screen: Screen,

    /// Receives events from the loader worker and widgets.
    event_receiver: mpsc::Receiver<WorkerEvent>,

    /// Receives parsed datasets (or load failures) from the loader.
    data_receiver: mpsc::Receiver<DataUpdate>,

    /// Asks the loader worker to re-read the data file.
    reload_sender: mpsc::Sender<()>,

    /// Broadcasts shutdown signal to worker threads.
    shutdown_sender: broadcast::Sender<()>,

    /// Display configuration for the dashboard.
    ui_config: UIConfig,

    /// Persisted configuration, saved with the selected theme on exit.
    config: Config,

    /// Where the configuration is saved.
    config_path: PathBuf,
}

impl App {
    /// Creates a new instance of the application.
    pub fn new(
        event_receiver: mpsc::Receiver<WorkerEvent>,
        data_receiver: mpsc::Receiver<DataUpdate>,
        reload_sender: mpsc::Sender<()>,
        shutdown_sender: broadcast::Sender<()>,
        ui_config: UIConfig,
        config: Config,
        config_path: PathBuf,
    ) -> Self {
        Self {
            start_time: Instant::now(),
            current_screen: Screen::Splash,
            event_receiver,
            data_receiver,
            reload_sender,
            shutdown_sender,
            ui_config,
            config,
            config_path,
        }
    }

    fn open_dashboard(&mut self) {
        let state = DashboardState::new(self.start_time, self.ui_config.clone());
        self.current_screen = Screen::Dashboard(Box::new(state));
    }

    /// Persist the selected theme (and data path) for the next session.
    /// Saving is best-effort; a failure only costs the preference.
    fn save_config(&self) {
        if let Screen::Dashboard(state) = &self.current_screen {
            let config = Config::new(state.theme().1.to_string(), self.config.data_path.clone());
            let _ = config.save(&self.config_path);
        }
    }
}

/// Runs the application UI in a loop, handling events and rendering the appropriate screen.
pub async fn run<B: Backend>(terminal: &mut Terminal<B>, mut app: App) -> std::io::Result<()> {
    let splash_start = Instant::now();
    let splash_duration = Duration::from_secs(2);

    // UI event loop
    loop {
        // Queue all incoming worker traffic; channels buffer while the
        // splash screen is still up.
        if let Screen::Dashboard(state) = &mut app.current_screen {
            while let Ok(event) = app.event_receiver.try_recv() {
                state.add_event(event);
            }
            while let Ok(update) = app.data_receiver.try_recv() {
                state.apply_data_update(update);
            }
            // Update the dashboard with a new tick
            state.update();
        }

        terminal.draw(|f| render(f, &app.current_screen))?;

        // Handle splash-to-dashboard transition
        if let Screen::Splash = app.current_screen {
            if splash_start.elapsed() >= splash_duration {
                app.open_dashboard();
                continue;
            }
        }

        // Poll for key events
        if event::poll(Duration::from_millis(100))? {
            if let Event::Key(key) = event::read()? {
                // Skip events that are not KeyEventKind::Press
                if key.kind == event::KeyEventKind::Release {
                    continue;
                }

                // The name field captures printable keys, so `q` only quits
                // when no text entry is active. Esc always quits.
                let text_entry = match &app.current_screen {
                    Screen::Dashboard(state) => state.focus.is_text_entry(),
                    Screen::Splash => false,
                };
                let quit = key.code == KeyCode::Esc
                    || (key.code == KeyCode::Char('q') && !text_entry);
                if quit {
                    app.save_config();
                    // Send shutdown signal to workers
                    let _ = app.shutdown_sender.send(());
                    return Ok(());
                }

                match &mut app.current_screen {
                    Screen::Splash => {
                        // Any key press will skip the splash screen
                        app.open_dashboard();
                    }
                    Screen::Dashboard(state) => {
                        if key.code == KeyCode::Char('r') && !state.focus.is_text_entry() {
                            let _ = app.reload_sender.try_send(());
                        } else {
                            state.handle_key(key.code);
                        }
                    }
                }
            }
        }
    }
}

/// Renders the current screen based on the application state.
fn render(f: &mut Frame, screen: &Screen) {
    match screen {
        Screen::Splash => render_splash(f),
        Screen::Dashboard(state) => render_dashboard(f, state),
    }
}
