//! Data loader worker.
//!
//! Owns all data-file I/O: loads the dataset at startup and again on each
//! reload request, reporting outcomes as events and shipping parsed
//! datasets over the data channel.

use crate::data::{Dataset, load_dataset};
use crate::error::{DataError, ErrorClassifier, LogLevel};
use crate::events::{Event, EventType};
use std::path::PathBuf;
use tokio::sync::{broadcast, mpsc};
use tokio::task::JoinHandle;

/// Outcome of one load attempt, delivered to the UI.
pub type DataUpdate = Result<Dataset, DataError>;

pub fn start_loader(
    data_path: Option<PathBuf>,
    event_sender: mpsc::Sender<Event>,
    data_sender: mpsc::Sender<DataUpdate>,
    mut reload_receiver: mpsc::Receiver<()>,
    mut shutdown: broadcast::Receiver<()>,
) -> JoinHandle<()> {
    tokio::spawn(async move {
        let classifier = ErrorClassifier::new();

        let Some(path) = data_path else {
            let _ = event_sender
                .send(Event::loader_with_level(
                    "No data file supplied; table and chart panels stay hidden".to_string(),
                    EventType::Info,
                    LogLevel::Info,
                ))
                .await;
            return;
        };

        load_and_report(&path, &classifier, &event_sender, &data_sender).await;

        loop {
            tokio::select! {
                request = reload_receiver.recv() => {
                    match request {
                        Some(()) => {
                            let _ = event_sender
                                .send(Event::loader_with_level(
                                    format!("Reloading {}", path.display()),
                                    EventType::Refresh,
                                    LogLevel::Info,
                                ))
                                .await;
                            load_and_report(&path, &classifier, &event_sender, &data_sender).await;
                        }
                        None => break,
                    }
                }
                _ = shutdown.recv() => break,
            }
        }
    })
}

async fn load_and_report(
    path: &std::path::Path,
    classifier: &ErrorClassifier,
    event_sender: &mpsc::Sender<Event>,
    data_sender: &mpsc::Sender<DataUpdate>,
) {
    // The read is small and synchronous; every interaction re-renders from
    // the in-memory dataset afterwards.
    match load_dataset(path) {
        Ok(dataset) => {
            let _ = event_sender
                .send(Event::loader_with_level(
                    format!(
                        "Loaded {} rows from {} ({})",
                        dataset.row_count(),
                        dataset.source,
                        dataset.format
                    ),
                    EventType::Success,
                    LogLevel::Info,
                ))
                .await;
            let _ = data_sender.send(Ok(dataset)).await;
        }
        Err(error) => {
            let log_level = classifier.classify_load_error(&error);
            let _ = event_sender
                .send(Event::loader_with_level(
                    error.to_string(),
                    EventType::Error,
                    log_level,
                ))
                .await;
            let _ = data_sender.send(Err(error)).await;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::consts::cli_consts::EVENT_QUEUE_SIZE;
    use std::io::Write;

    #[tokio::test]
    async fn loader_reports_success_and_ships_dataset() {
        let mut fixture = tempfile::Builder::new()
            .suffix(".csv")
            .tempfile()
            .expect("fixture");
        fixture
            .write_all(b"Date,Heart Rate\n2024-03-01,72\n")
            .expect("write fixture");

        let (event_sender, mut event_receiver) = mpsc::channel(EVENT_QUEUE_SIZE);
        let (data_sender, mut data_receiver) = mpsc::channel(1);
        let (reload_sender, reload_receiver) = mpsc::channel(1);
        let (shutdown_sender, _) = broadcast::channel(1);

        let handle = start_loader(
            Some(fixture.path().to_path_buf()),
            event_sender,
            data_sender,
            reload_receiver,
            shutdown_sender.subscribe(),
        );

        let update = data_receiver.recv().await.expect("data update");
        let dataset = update.expect("dataset");
        assert_eq!(dataset.row_count(), 1);

        let event = event_receiver.recv().await.expect("event");
        assert_eq!(event.event_type, EventType::Success);
        assert!(event.msg.contains("Loaded 1 rows"));

        drop(reload_sender);
        let _ = shutdown_sender.send(());
        handle.await.expect("worker exits");
    }

    #[tokio::test]
    async fn loader_reports_parse_failures() {
        let mut fixture = tempfile::Builder::new()
            .suffix(".json")
            .tempfile()
            .expect("fixture");
        fixture.write_all(b"not json").expect("write fixture");

        let (event_sender, mut event_receiver) = mpsc::channel(EVENT_QUEUE_SIZE);
        let (data_sender, mut data_receiver) = mpsc::channel(1);
        let (_reload_sender, reload_receiver) = mpsc::channel(1);
        let (shutdown_sender, _) = broadcast::channel(1);

        let handle = start_loader(
            Some(fixture.path().to_path_buf()),
            event_sender,
            data_sender,
            reload_receiver,
            shutdown_sender.subscribe(),
        );

        let update = data_receiver.recv().await.expect("data update");
        assert!(matches!(update, Err(DataError::MalformedJson { .. })));

        let event = event_receiver.recv().await.expect("event");
        assert_eq!(event.event_type, EventType::Error);

        let _ = shutdown_sender.send(());
        handle.await.expect("worker exits");
    }

    #[tokio::test]
    async fn loader_without_data_path_only_logs() {
        let (event_sender, mut event_receiver) = mpsc::channel(EVENT_QUEUE_SIZE);
        let (data_sender, mut data_receiver) = mpsc::channel(1);
        let (_reload_sender, reload_receiver) = mpsc::channel(1);
        let (shutdown_sender, _) = broadcast::channel(1);

        let handle = start_loader(
            None,
            event_sender,
            data_sender,
            reload_receiver,
            shutdown_sender.subscribe(),
        );
        handle.await.expect("worker exits");

        let event = event_receiver.recv().await.expect("event");
        assert!(event.msg.contains("No data file supplied"));
        assert!(data_receiver.recv().await.is_none());
    }
}
