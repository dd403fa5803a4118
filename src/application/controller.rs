//! Recorder controller use case
//!
//! Owns at most one capture session and at most one playback session and
//! exposes the four tap operations. All failures from the backends are
//! logged and swallowed here; none of the operations return errors, a
//! failed start simply leaves the corresponding session idle.

use std::path::PathBuf;

use tokio::sync::watch;

use crate::domain::permission::PermissionState;
use crate::domain::recording::CaptureSettings;
use crate::domain::session::{reduce, Event, Snapshot};

use super::ports::{BackendEvent, CaptureBackend, PlaybackBackend};

/// Recorder controller.
///
/// State lives in a `watch` channel as an immutable [`Snapshot`]; every
/// operation folds an [`Event`] into it through the domain reducer and
/// publishes the result. The UI only ever observes snapshots.
pub struct RecorderController<C, P>
where
    C: CaptureBackend,
    P: PlaybackBackend,
{
    capture: C,
    playback: P,
    output: PathBuf,
    settings: CaptureSettings,
    snapshot_tx: watch::Sender<Snapshot>,
}

impl<C, P> RecorderController<C, P>
where
    C: CaptureBackend,
    P: PlaybackBackend,
{
    /// Create a controller writing recordings to the fixed `output` path.
    pub fn new(capture: C, playback: P, output: PathBuf, settings: CaptureSettings) -> Self {
        let (snapshot_tx, _) = watch::channel(Snapshot::default());
        Self {
            capture,
            playback,
            output,
            settings,
            snapshot_tx,
        }
    }

    /// Subscribe to state snapshots
    pub fn subscribe(&self) -> watch::Receiver<Snapshot> {
        self.snapshot_tx.subscribe()
    }

    /// Get the current state snapshot
    pub fn snapshot(&self) -> Snapshot {
        self.snapshot_tx.borrow().clone()
    }

    fn apply(&self, event: Event) {
        let next = reduce(&self.snapshot_tx.borrow(), event);
        self.snapshot_tx.send_replace(next);
    }

    /// Start a new recording, overwriting the output file.
    ///
    /// No-op while already recording, so a double tap never creates a
    /// second capture handle. On backend failure the session stays idle.
    pub async fn start_recording(&self) {
        if self.snapshot().is_recording {
            log::debug!("start_recording ignored: already recording");
            return;
        }

        match self.capture.start(&self.output, self.settings).await {
            Ok(()) => self.apply(Event::RecordingStarted {
                output: self.output.clone(),
            }),
            Err(e) => log::warn!("Could not start recording: {}", e),
        }
    }

    /// Stop the active recording. No-op when idle.
    pub async fn stop_recording(&self) {
        if !self.snapshot().is_recording {
            return;
        }

        if let Err(e) = self.capture.stop().await {
            log::warn!("Could not stop recording cleanly: {}", e);
        }
        self.apply(Event::RecordingStopped);
    }

    /// Play back the last recording.
    ///
    /// No-op when no recording exists yet or playback is already active.
    /// On backend failure the session stays idle.
    pub async fn play_recording(&self) {
        let snapshot = self.snapshot();
        if snapshot.is_playing {
            log::debug!("play_recording ignored: already playing");
            return;
        }
        let Some(source) = snapshot.last_recording else {
            log::debug!("play_recording ignored: nothing recorded yet");
            return;
        };

        match self.playback.play(&source).await {
            Ok(()) => self.apply(Event::PlaybackStarted),
            Err(e) => log::warn!("Could not play recording: {}", e),
        }
    }

    /// Stop active playback. No-op when idle.
    pub async fn stop_playing(&self) {
        if !self.snapshot().is_playing {
            return;
        }

        if let Err(e) = self.playback.stop().await {
            log::warn!("Could not stop playback cleanly: {}", e);
        }
        self.apply(Event::PlaybackStopped);
    }

    /// Record the resolved permission state in the snapshot
    pub fn permission_resolved(&self, state: PermissionState) {
        self.apply(Event::PermissionResolved(state));
    }

    /// Consume one event from the backend event channel.
    ///
    /// Called from the UI event loop; this is the only path by which
    /// backend threads influence application state.
    pub fn handle_backend_event(&self, event: BackendEvent) {
        match event {
            BackendEvent::PlaybackFinished => self.apply(Event::PlaybackFinished),
            BackendEvent::CaptureFailed(reason) => {
                log::warn!("Capture stream failed: {}", reason);
                self.apply(Event::RecordingStopped);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use std::path::Path;
    use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};

    use async_trait::async_trait;

    use super::*;
    use crate::application::ports::{CaptureError, PlaybackError};

    #[derive(Default)]
    struct MockCapture {
        starts: AtomicUsize,
        stops: AtomicUsize,
        active: AtomicBool,
        fail_start: bool,
    }

    impl MockCapture {
        fn failing() -> Self {
            Self {
                fail_start: true,
                ..Self::default()
            }
        }
    }

    #[async_trait]
    impl CaptureBackend for MockCapture {
        async fn start(
            &self,
            _output: &Path,
            _settings: CaptureSettings,
        ) -> Result<(), CaptureError> {
            if self.fail_start {
                return Err(CaptureError::NoInputDevice);
            }
            self.starts.fetch_add(1, Ordering::SeqCst);
            self.active.store(true, Ordering::SeqCst);
            Ok(())
        }

        async fn stop(&self) -> Result<(), CaptureError> {
            self.stops.fetch_add(1, Ordering::SeqCst);
            self.active.store(false, Ordering::SeqCst);
            Ok(())
        }

        fn is_active(&self) -> bool {
            self.active.load(Ordering::SeqCst)
        }
    }

    #[derive(Default)]
    struct MockPlayback {
        plays: AtomicUsize,
        stops: AtomicUsize,
        fail_play: bool,
    }

    impl MockPlayback {
        fn failing() -> Self {
            Self {
                fail_play: true,
                ..Self::default()
            }
        }
    }

    #[async_trait]
    impl PlaybackBackend for MockPlayback {
        async fn play(&self, _source: &Path) -> Result<(), PlaybackError> {
            if self.fail_play {
                return Err(PlaybackError::NoOutputDevice("mock".into()));
            }
            self.plays.fetch_add(1, Ordering::SeqCst);
            Ok(())
        }

        async fn stop(&self) -> Result<(), PlaybackError> {
            self.stops.fetch_add(1, Ordering::SeqCst);
            Ok(())
        }

        fn is_active(&self) -> bool {
            self.plays.load(Ordering::SeqCst) > self.stops.load(Ordering::SeqCst)
        }
    }

    fn controller(
        capture: MockCapture,
        playback: MockPlayback,
    ) -> RecorderController<MockCapture, MockPlayback> {
        RecorderController::new(
            capture,
            playback,
            PathBuf::from("/tmp/memo.wav"),
            CaptureSettings::default(),
        )
    }

    #[tokio::test]
    async fn start_stop_tracks_calls_exactly() {
        let c = controller(MockCapture::default(), MockPlayback::default());

        c.start_recording().await;
        assert!(c.snapshot().is_recording);

        c.stop_recording().await;
        assert!(!c.snapshot().is_recording);
    }

    #[tokio::test]
    async fn double_start_does_not_duplicate_capture_handles() {
        let c = controller(MockCapture::default(), MockPlayback::default());

        c.start_recording().await;
        c.start_recording().await;

        assert!(c.snapshot().is_recording);
        assert_eq!(c.capture.starts.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn stop_when_idle_is_noop() {
        let c = controller(MockCapture::default(), MockPlayback::default());

        c.stop_recording().await;
        c.stop_playing().await;

        assert_eq!(c.capture.stops.load(Ordering::SeqCst), 0);
        assert_eq!(c.playback.stops.load(Ordering::SeqCst), 0);
        assert_eq!(c.snapshot(), Snapshot::default());
    }

    #[tokio::test]
    async fn play_without_recording_is_noop() {
        let c = controller(MockCapture::default(), MockPlayback::default());

        c.play_recording().await;

        assert!(!c.snapshot().is_playing);
        assert_eq!(c.playback.plays.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn failed_capture_start_leaves_idle() {
        let c = controller(MockCapture::failing(), MockPlayback::default());

        c.start_recording().await;

        assert!(!c.snapshot().is_recording);
        assert!(!c.snapshot().has_recording());
    }

    #[tokio::test]
    async fn failed_playback_start_leaves_idle() {
        let c = controller(MockCapture::default(), MockPlayback::failing());
        c.start_recording().await;
        c.stop_recording().await;

        c.play_recording().await;

        assert!(!c.snapshot().is_playing);
    }

    #[tokio::test]
    async fn natural_completion_clears_playing_without_stop_call() {
        let c = controller(MockCapture::default(), MockPlayback::default());
        c.start_recording().await;
        c.stop_recording().await;
        c.play_recording().await;
        assert!(c.snapshot().is_playing);

        c.handle_backend_event(BackendEvent::PlaybackFinished);

        assert!(!c.snapshot().is_playing);
        assert_eq!(c.playback.stops.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn capture_failure_event_clears_recording() {
        let c = controller(MockCapture::default(), MockPlayback::default());
        c.start_recording().await;

        c.handle_backend_event(BackendEvent::CaptureFailed("stream error".into()));

        assert!(!c.snapshot().is_recording);
    }

    #[tokio::test]
    async fn full_record_play_scenario() {
        let c = controller(MockCapture::default(), MockPlayback::default());

        c.start_recording().await;
        assert!(c.snapshot().is_recording);

        c.stop_recording().await;
        assert!(!c.snapshot().is_recording);

        c.play_recording().await;
        assert!(c.snapshot().is_playing);

        c.handle_backend_event(BackendEvent::PlaybackFinished);
        assert!(!c.snapshot().is_playing);
    }

    #[tokio::test]
    async fn subscribers_observe_snapshots() {
        let c = controller(MockCapture::default(), MockPlayback::default());
        let mut rx = c.subscribe();

        c.start_recording().await;

        assert!(rx.has_changed().unwrap());
        assert!(rx.borrow_and_update().is_recording);
    }
}
