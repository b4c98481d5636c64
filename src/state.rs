use std::time::Duration;

use crate::timer::AdvanceTimer;

#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum PlaybackPhase {
    Playing, // Current slide is up and an auto-advance is scheduled
    Paused,  // Held by the user, nothing scheduled
    Ended,   // Advanced past the last slide, stays on it for good
}

/// Mutable state of one playback session. Only the controller writes it.
#[derive(Debug)]
pub struct PlaybackState {
    pub(crate) current_index: usize,
    pub(crate) paused: bool,
    pub(crate) ended: bool,
    pub(crate) pending_advance: AdvanceTimer,
    pub(crate) slide_duration: Duration,
}

impl PlaybackState {
    pub fn new(slide_duration: Duration) -> Self {
        Self {
            current_index: 0,
            paused: false,
            ended: false,
            pending_advance: AdvanceTimer::new(),
            slide_duration,
        }
    }

    pub fn phase(&self) -> PlaybackPhase {
        if self.paused {
            PlaybackPhase::Paused
        } else if self.ended {
            PlaybackPhase::Ended
        } else {
            PlaybackPhase::Playing
        }
    }
}
