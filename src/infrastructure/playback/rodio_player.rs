//! Rodio-based playback adapter
//!
//! Renders the recorded WAV file through the default output device. The
//! output stream lives on a dedicated thread because `rodio::OutputStream`
//! is not `Send`; natural end of media is reported on the backend event
//! channel, a user-initiated stop is not.

use std::fs::File;
use std::io::BufReader;
use std::path::Path;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use async_trait::async_trait;
use rodio::{Decoder, OutputStream, Sink};
use tokio::sync::oneshot;

use crate::application::ports::{BackendEvent, BackendEventSender, PlaybackBackend, PlaybackError};

/// Playback adapter using rodio
pub struct RodioPlayback {
    /// Playback session state
    is_active: Arc<AtomicBool>,
    /// Raised by `stop` to end the session early
    stop_requested: Arc<AtomicBool>,
    events: BackendEventSender,
}

impl RodioPlayback {
    /// Create a new rodio-based playback adapter
    pub fn new(events: BackendEventSender) -> Self {
        Self {
            is_active: Arc::new(AtomicBool::new(false)),
            stop_requested: Arc::new(AtomicBool::new(false)),
            events,
        }
    }
}

#[async_trait]
impl PlaybackBackend for RodioPlayback {
    async fn play(&self, source: &Path) -> Result<(), PlaybackError> {
        if self.is_active.load(Ordering::SeqCst) {
            return Err(PlaybackError::StartFailed(
                "Playback already in progress".to_string(),
            ));
        }

        if !source.is_file() {
            return Err(PlaybackError::Unreadable(format!(
                "{} does not exist",
                source.display()
            )));
        }

        self.stop_requested.store(false, Ordering::SeqCst);
        self.is_active.store(true, Ordering::SeqCst);

        let path = source.to_path_buf();
        let is_active = Arc::clone(&self.is_active);
        let stop_requested = Arc::clone(&self.stop_requested);
        let events = self.events.clone();

        let (ready_tx, ready_rx) = oneshot::channel::<Result<(), PlaybackError>>();

        // The output stream must be created and dropped on one thread
        std::thread::spawn(move || {
            let startup = (|| {
                let (stream, handle) = OutputStream::try_default()
                    .map_err(|e| PlaybackError::NoOutputDevice(e.to_string()))?;

                let sink = Sink::try_new(&handle)
                    .map_err(|e| PlaybackError::StartFailed(e.to_string()))?;

                let file = File::open(&path)
                    .map_err(|e| PlaybackError::Unreadable(e.to_string()))?;
                let decoder = Decoder::new(BufReader::new(file))
                    .map_err(|e| PlaybackError::Unreadable(e.to_string()))?;

                sink.append(decoder);
                sink.play();

                Ok::<(OutputStream, Sink), PlaybackError>((stream, sink))
            })();

            let (_stream, sink) = match startup {
                Ok(parts) => {
                    let _ = ready_tx.send(Ok(()));
                    parts
                }
                Err(e) => {
                    is_active.store(false, Ordering::SeqCst);
                    let _ = ready_tx.send(Err(e));
                    return;
                }
            };

            // Poll for either the stop request or the natural end
            while !stop_requested.load(Ordering::SeqCst) && !sink.empty() {
                std::thread::sleep(std::time::Duration::from_millis(50));
            }

            let finished_naturally = sink.empty() && !stop_requested.load(Ordering::SeqCst);
            sink.stop();
            is_active.store(false, Ordering::SeqCst);

            if finished_naturally {
                let _ = events.send(BackendEvent::PlaybackFinished);
            }
        });

        match ready_rx.await {
            Ok(result) => result,
            Err(_) => {
                self.is_active.store(false, Ordering::SeqCst);
                Err(PlaybackError::StartFailed(
                    "Playback thread exited before startup".into(),
                ))
            }
        }
    }

    async fn stop(&self) -> Result<(), PlaybackError> {
        if !self.is_active.load(Ordering::SeqCst) {
            return Err(PlaybackError::StartFailed(
                "No playback in progress".to_string(),
            ));
        }

        self.stop_requested.store(true, Ordering::SeqCst);
        Ok(())
    }

    fn is_active(&self) -> bool {
        self.is_active.load(Ordering::SeqCst)
    }
}
