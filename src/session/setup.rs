//! Session setup and initialization

use crate::config::Config;
use crate::consts::cli_consts::EVENT_QUEUE_SIZE;
use crate::events::Event;
use crate::workers::loader::{DataUpdate, start_loader};
use std::path::PathBuf;
use tokio::sync::{broadcast, mpsc};
use tokio::task::JoinHandle;

/// Session data for both TUI and headless modes
#[derive(Debug)]
pub struct SessionData {
    /// Event receiver for worker events
    pub event_receiver: mpsc::Receiver<Event>,
    /// Receiver for parsed datasets (or load failures)
    pub data_receiver: mpsc::Receiver<DataUpdate>,
    /// Asks the loader worker to re-read the data file
    pub reload_sender: mpsc::Sender<()>,
    /// Shutdown sender to stop all workers
    pub shutdown_sender: broadcast::Sender<()>,
    /// Join handles for worker tasks
    pub join_handles: Vec<JoinHandle<()>>,
    /// Data file being displayed, if any
    pub data_path: Option<PathBuf>,
    /// Loaded configuration (theme, default data path)
    pub config: Config,
}

/// Sets up a dashboard session.
///
/// This function handles the common setup required for both TUI and
/// headless modes:
/// 1. Resolves the data file (`--data` wins over the configured default)
/// 2. Creates the event, data, reload and shutdown channels
/// 3. Spawns the loader worker
///
/// # Arguments
/// * `data` - Data file from the command line, if any
/// * `config` - Loaded configuration
pub fn setup_session(data: Option<PathBuf>, config: Config) -> SessionData {
    let data_path = data.or_else(|| config.data_path.as_ref().map(PathBuf::from));

    let (event_sender, event_receiver) = mpsc::channel(EVENT_QUEUE_SIZE);
    let (data_sender, data_receiver) = mpsc::channel(1);
    let (reload_sender, reload_receiver) = mpsc::channel(1);

    // Create shutdown channel - only one shutdown signal needed
    let (shutdown_sender, _) = broadcast::channel(1);

    let loader = start_loader(
        data_path.clone(),
        event_sender,
        data_sender,
        reload_receiver,
        shutdown_sender.subscribe(),
    );

    SessionData {
        event_receiver,
        data_receiver,
        reload_sender,
        shutdown_sender,
        join_handles: vec![loader],
        data_path,
        config,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn cli_data_path_wins_over_configured_default() {
        let config = Config::new("#00f900".to_string(), Some("from-config.csv".to_string()));
        let session = setup_session(Some(PathBuf::from("from-cli.csv")), config);
        assert_eq!(session.data_path, Some(PathBuf::from("from-cli.csv")));

        let _ = session.shutdown_sender.send(());
        for handle in session.join_handles {
            let _ = handle.await;
        }
    }

    #[tokio::test]
    async fn configured_default_applies_without_cli_path() {
        let config = Config::new("#00f900".to_string(), Some("from-config.csv".to_string()));
        let session = setup_session(None, config);
        assert_eq!(session.data_path, Some(PathBuf::from("from-config.csv")));

        let _ = session.shutdown_sender.send(());
        for handle in session.join_handles {
            let _ = handle.await;
        }
    }
}
