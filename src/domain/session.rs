//! Recorder state snapshot and event reducer
//!
//! The recorder keeps no mutable shared flags. Every change is an [`Event`]
//! folded into an immutable [`Snapshot`] by the pure [`reduce`] function;
//! the UI subscribes to snapshots and never touches state directly.

use std::path::PathBuf;

use crate::domain::permission::PermissionState;

/// Immutable view of the recorder state published to the UI.
///
/// Recording and playback are two independent two-state machines:
///
///   idle --RecordingStarted--> recording --RecordingStopped--> idle
///   idle --PlaybackStarted--> playing --PlaybackStopped/Finished--> idle
///
/// They are deliberately not cross-synchronized; starting a recording
/// while playback runs is permitted.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Snapshot {
    /// A capture session is active
    pub is_recording: bool,
    /// A playback session is active
    pub is_playing: bool,
    /// Output path of the most recent recording, if any was ever started
    pub last_recording: Option<PathBuf>,
    /// Microphone authorization state
    pub permission: PermissionState,
}

impl Snapshot {
    /// True once at least one recording has been started, i.e. a
    /// recorded file exists to play back.
    pub fn has_recording(&self) -> bool {
        self.last_recording.is_some()
    }
}

/// Events that drive the recorder state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    /// Capture began writing to the given output path
    RecordingStarted { output: PathBuf },
    /// Capture was halted, by the user or by a backend failure
    RecordingStopped,
    /// Playback of the last recording began
    PlaybackStarted,
    /// Playback was halted by the user
    PlaybackStopped,
    /// Playback reached the natural end of the media
    PlaybackFinished,
    /// The permission probe resolved
    PermissionResolved(PermissionState),
}

/// Fold one event into the current snapshot.
///
/// Pure function of (snapshot, event); events that do not apply to the
/// current state leave the snapshot unchanged apart from their own field.
pub fn reduce(current: &Snapshot, event: Event) -> Snapshot {
    let mut next = current.clone();
    match event {
        Event::RecordingStarted { output } => {
            next.is_recording = true;
            next.last_recording = Some(output);
        }
        Event::RecordingStopped => {
            next.is_recording = false;
        }
        Event::PlaybackStarted => {
            next.is_playing = true;
        }
        Event::PlaybackStopped | Event::PlaybackFinished => {
            next.is_playing = false;
        }
        Event::PermissionResolved(state) => {
            next.permission = state;
        }
    }
    next
}
