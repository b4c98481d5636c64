//! Slide playback state machine.
//!
//! `PlaybackController` owns the session's [`PlaybackState`], the derived
//! [`ProgressTrack`] and an observer that renders slides. Every transition
//! updates the state, tells the progress track and the observer, and only
//! then returns, so nobody sees a new timer next to an old index.

use std::time::Duration;

use tracing::{debug, info};

use crate::config::PlaybackConfig;
use crate::deck::Deck;
use crate::input::{Command, InputEvent};
use crate::progress::ProgressTrack;
use crate::slide::Slide;
use crate::state::{PlaybackPhase, PlaybackState};
use crate::timer::TimerHandle;

/// Receives playback notifications synchronously, before the transition
/// that caused them returns.
pub trait PlaybackObserver {
    fn slide_changed(&mut self, index: usize, slide: &Slide);

    fn paused(&mut self, _index: usize) {}

    fn resumed(&mut self, _index: usize) {}

    fn ended(&mut self, _index: usize) {}
}

impl PlaybackObserver for () {
    fn slide_changed(&mut self, _index: usize, _slide: &Slide) {}
}

/// What a single call did to the session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Transition {
    Showing(usize),
    Paused(usize),
    Resumed(usize),
    Ended(usize),
    Ignored,
}

pub struct PlaybackController<O = ()> {
    deck: Deck,
    state: PlaybackState,
    progress: ProgressTrack,
    observer: O,
    clock: Duration,
}

impl<O: PlaybackObserver> PlaybackController<O> {
    /// Starts a session: slide 0 is shown and its advance scheduled before
    /// this returns.
    pub fn new(deck: Deck, config: PlaybackConfig, observer: O) -> Self {
        let slide_duration = config.slide_duration();
        info!(slides = deck.len(), ?slide_duration, "starting playback");

        let mut controller = Self {
            progress: ProgressTrack::new(deck.len(), slide_duration),
            state: PlaybackState::new(slide_duration),
            deck,
            observer,
            clock: Duration::ZERO,
        };
        controller.show(0);
        controller
    }

    /// Moves to `index`. Past the end of the deck this ends playback and
    /// stays on the current slide.
    pub fn go_to(&mut self, index: usize) -> Transition {
        if index >= self.deck.len() {
            debug!(index, len = self.deck.len(), "navigation past the end of the deck");
            return self.end();
        }
        self.show(index)
    }

    /// Moves by `delta` slides. A target before the first slide is ignored.
    pub fn go_to_relative(&mut self, delta: isize) -> Transition {
        match self.state.current_index.checked_add_signed(delta) {
            Some(index) => self.go_to(index),
            None => {
                debug!(
                    delta,
                    current = self.state.current_index,
                    "navigation before the first slide"
                );
                Transition::Ignored
            }
        }
    }

    pub fn advance(&mut self) -> Transition {
        self.go_to(self.state.current_index + 1)
    }

    /// Steps back one slide. On the first slide this restarts it.
    pub fn retreat(&mut self) -> Transition {
        match self.state.current_index {
            0 => self.show(0),
            index => self.show(index - 1),
        }
    }

    /// Stops the auto-advance. Elapsed time on the current slide is not
    /// kept.
    pub fn pause(&mut self) -> Transition {
        if self.state.paused {
            return Transition::Ignored;
        }
        self.state.paused = true;
        self.state.pending_advance.cancel();

        let index = self.state.current_index;
        debug!(index, "paused");
        self.progress.on_pause(self.clock);
        self.observer.paused(index);
        Transition::Paused(index)
    }

    /// Restarts the auto-advance with a full slide duration from now.
    pub fn resume(&mut self) -> Transition {
        if !self.state.paused {
            return Transition::Ignored;
        }
        self.state.paused = false;

        let index = self.state.current_index;
        if !self.state.ended {
            self.schedule_advance();
        }
        debug!(index, ended = self.state.ended, "resumed");
        self.progress.on_resume(self.clock);
        self.observer.resumed(index);
        Transition::Resumed(index)
    }

    pub fn apply(&mut self, command: Command) -> Transition {
        match command {
            Command::Advance => self.advance(),
            Command::Retreat => self.retreat(),
            Command::GoTo(index) => self.go_to(index),
            Command::Pause => self.pause(),
            Command::Resume => self.resume(),
        }
    }

    pub fn handle_input(&mut self, event: InputEvent) -> Transition {
        self.apply(Command::from(event))
    }

    /// Advances the session clock by one frame and fires the pending
    /// advance if it is due.
    pub fn tick(&mut self, dt: Duration) -> Option<Transition> {
        self.clock += dt;
        let handle = self.state.pending_advance.expired(self.clock)?;
        Some(self.fire(handle))
    }

    /// Runs the advance scheduled under `handle`. A handle that has been
    /// cancelled or replaced since is ignored.
    pub fn fire(&mut self, handle: TimerHandle) -> Transition {
        if !self.state.pending_advance.take_if_current(handle) {
            debug!(?handle, "ignoring stale advance");
            return Transition::Ignored;
        }
        self.advance()
    }

    /// Tears the session down. No advance fires afterwards.
    pub fn shutdown(&mut self) {
        self.state.pending_advance.cancel();
        self.state.ended = true;
        info!(index = self.state.current_index, "playback stopped");
    }

    pub fn current_index(&self) -> usize {
        self.state.current_index
    }

    pub fn is_paused(&self) -> bool {
        self.state.paused
    }

    pub fn phase(&self) -> PlaybackPhase {
        self.state.phase()
    }

    pub fn pending_advance(&self) -> Option<TimerHandle> {
        self.state.pending_advance.pending()
    }

    /// Time left before the pending advance fires.
    pub fn remaining(&self) -> Option<Duration> {
        self.state.pending_advance.remaining(self.clock)
    }

    pub fn now(&self) -> Duration {
        self.clock
    }

    pub fn deck(&self) -> &Deck {
        &self.deck
    }

    pub fn progress(&self) -> &ProgressTrack {
        &self.progress
    }

    pub fn observer(&self) -> &O {
        &self.observer
    }

    pub fn observer_mut(&mut self) -> &mut O {
        &mut self.observer
    }

    fn show(&mut self, index: usize) -> Transition {
        self.state.current_index = index;
        self.state.paused = false;
        self.state.ended = false;
        self.schedule_advance();

        debug!(index, id = %self.deck.slides()[index].id, "showing slide");
        self.progress.on_index_changed(index, self.clock);
        self.observer.slide_changed(index, &self.deck.slides()[index]);
        Transition::Showing(index)
    }

    fn end(&mut self) -> Transition {
        self.state.pending_advance.cancel();
        let index = self.state.current_index;
        if !self.state.ended {
            self.state.ended = true;
            info!(index, "end of deck");
            self.observer.ended(index);
        }
        Transition::Ended(index)
    }

    fn schedule_advance(&mut self) {
        self.state
            .pending_advance
            .reschedule(self.clock, self.state.slide_duration);
    }
}
