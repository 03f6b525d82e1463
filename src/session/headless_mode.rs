//! Headless mode execution
//!
//! Runs a single render pass without a terminal: the plan's sections print
//! as lines of text, followed by the activity log. Used by the integration
//! tests and for quick inspection over a plain console.

use super::{
    SessionData,
    messages::{print_session_exit_success, print_session_shutdown, print_session_starting},
};
use crate::ui::UIConfig;
use crate::ui::dashboard::{DashboardState, build_render_plan};
use std::error::Error;
use std::time::{Duration, Instant};

/// How long to wait for the loader's first result before rendering anyway.
const FIRST_LOAD_TIMEOUT: Duration = Duration::from_secs(5);

pub async fn run_headless_mode(mut session: SessionData) -> Result<(), Box<dyn Error>> {
    let data_path_text = session
        .data_path
        .as_deref()
        .map(|path| path.display().to_string());

    // Print session start message
    print_session_starting("headless", data_path_text.as_deref());

    let ui_config = UIConfig::new(false, session.config.theme_index(), data_path_text);
    let mut state = DashboardState::new(Instant::now(), ui_config);

    // Wait for the loader's verdict on the data file, then drain whatever
    // events it produced along the way.
    if session.data_path.is_some() {
        if let Ok(Some(update)) =
            tokio::time::timeout(FIRST_LOAD_TIMEOUT, session.data_receiver.recv()).await
        {
            state.apply_data_update(update);
        }
    }
    while let Ok(event) = session.event_receiver.try_recv() {
        state.add_event(event);
    }
    state.update();

    // One full render pass, one line per section
    let plan = build_render_plan(&state);
    for section in &plan {
        println!("{}", section);
    }
    for event in &state.activity_logs {
        if event.should_display() {
            println!("{}", event);
        }
    }

    let _ = session.shutdown_sender.send(());

    // Wait for workers to finish
    print_session_shutdown();
    for handle in session.join_handles {
        let _ = handle.await;
    }
    print_session_exit_success();

    Ok(())
}
