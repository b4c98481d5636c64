//! Per-slide progress indicators.
//!
//! Indicator states are recomputed from `(current, paused, len)` on every
//! query instead of being stored per bar. The only thing the track keeps is
//! the fill animation of the active bar.

use std::time::Duration;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IndicatorState {
    Pending,
    Active { paused: bool },
    Completed,
}

impl IndicatorState {
    pub fn is_active(&self) -> bool {
        matches!(self, IndicatorState::Active { .. })
    }
}

pub fn indicator_state(index: usize, current: usize, paused: bool) -> IndicatorState {
    if index < current {
        IndicatorState::Completed
    } else if index == current {
        IndicatorState::Active { paused }
    } else {
        IndicatorState::Pending
    }
}

pub fn indicator_states(current: usize, paused: bool, len: usize) -> Vec<IndicatorState> {
    (0..len).map(|i| indicator_state(i, current, paused)).collect()
}

/// One bar of the strip, ready to draw. `fill` is in `0.0..=1.0`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Indicator {
    pub state: IndicatorState,
    pub fill: f32,
}

/// Linear fill of the active bar, measured on the session clock.
#[derive(Debug, Clone, Copy)]
struct FillAnimation {
    started_at: Duration,
    paused_at: Option<Duration>,
    paused_for: Duration,
}

impl FillAnimation {
    fn start(now: Duration) -> Self {
        Self {
            started_at: now,
            paused_at: None,
            paused_for: Duration::ZERO,
        }
    }

    fn elapsed(&self, now: Duration) -> Duration {
        let until = self.paused_at.unwrap_or(now);
        until
            .saturating_sub(self.started_at)
            .saturating_sub(self.paused_for)
    }
}

#[derive(Debug)]
pub struct ProgressTrack {
    len: usize,
    current: usize,
    paused: bool,
    duration: Duration,
    fill: FillAnimation,
}

impl ProgressTrack {
    pub fn new(len: usize, duration: Duration) -> Self {
        Self {
            len,
            current: 0,
            paused: false,
            duration,
            fill: FillAnimation::start(Duration::ZERO),
        }
    }

    /// Everything before `new_index` snaps to full, everything after to
    /// empty, and the bar at `new_index` starts filling from empty.
    pub fn on_index_changed(&mut self, new_index: usize, now: Duration) {
        debug_assert!(new_index < self.len);
        self.current = new_index;
        self.paused = false;
        self.fill = FillAnimation::start(now);
    }

    pub fn jump_to(&mut self, index: usize, now: Duration) {
        self.on_index_changed(index, now);
    }

    /// Freezes the active fill where it is.
    pub fn on_pause(&mut self, now: Duration) {
        if self.paused {
            return;
        }
        self.paused = true;
        self.fill.paused_at = Some(now);
    }

    /// Continues the active fill from where it froze. The bar may therefore
    /// reach full before the controller's restarted timer fires; it then
    /// holds at full until the index changes.
    pub fn on_resume(&mut self, now: Duration) {
        if !self.paused {
            return;
        }
        self.paused = false;
        if let Some(paused_at) = self.fill.paused_at.take() {
            self.fill.paused_for += now.saturating_sub(paused_at);
        }
    }

    pub fn current(&self) -> usize {
        self.current
    }

    pub fn is_paused(&self) -> bool {
        self.paused
    }

    pub fn states(&self) -> Vec<IndicatorState> {
        indicator_states(self.current, self.paused, self.len)
    }

    /// Fill fraction of the active bar at `now`.
    pub fn active_fill(&self, now: Duration) -> f32 {
        let elapsed = self.fill.elapsed(now).as_secs_f32();
        (elapsed / self.duration.as_secs_f32()).clamp(0.0, 1.0)
    }

    pub fn indicators(&self, now: Duration) -> Vec<Indicator> {
        let active_fill = self.active_fill(now);
        self.states()
            .into_iter()
            .map(|state| {
                let fill = match state {
                    IndicatorState::Completed => 1.0,
                    IndicatorState::Active { .. } => active_fill,
                    IndicatorState::Pending => 0.0,
                };
                Indicator { state, fill }
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const DURATION: Duration = Duration::from_millis(5000);

    fn ms(value: u64) -> Duration {
        Duration::from_millis(value)
    }

    #[test]
    fn states_split_around_current() {
        use IndicatorState::*;
        assert_eq!(
            indicator_states(2, false, 5),
            vec![Completed, Completed, Active { paused: false }, Pending, Pending]
        );
        assert_eq!(indicator_states(0, true, 1), vec![Active { paused: true }]);
    }

    #[test]
    fn active_fill_is_linear_and_clamped() {
        let mut track = ProgressTrack::new(3, DURATION);
        track.on_index_changed(1, ms(1000));

        assert_eq!(track.active_fill(ms(1000)), 0.0);
        assert!((track.active_fill(ms(3500)) - 0.5).abs() < 1e-6);
        assert_eq!(track.active_fill(ms(60_000)), 1.0);

        let fills: Vec<f32> = track.indicators(ms(3500)).iter().map(|i| i.fill).collect();
        assert_eq!(fills[0], 1.0);
        assert!((fills[1] - 0.5).abs() < 1e-6);
        assert_eq!(fills[2], 0.0);
    }

    #[test]
    fn pause_freezes_and_resume_continues_partial_fill() {
        let mut track = ProgressTrack::new(2, DURATION);
        track.on_index_changed(0, ms(0));

        track.on_pause(ms(1000));
        track.on_pause(ms(2000));
        assert!(track.is_paused());
        assert!((track.active_fill(ms(4000)) - 0.2).abs() < 1e-6);
        assert_eq!(track.states()[0], IndicatorState::Active { paused: true });

        track.on_resume(ms(4000));
        assert!(!track.is_paused());
        assert!((track.active_fill(ms(4000)) - 0.2).abs() < 1e-6);
        assert!((track.active_fill(ms(5000)) - 0.4).abs() < 1e-6);
    }

    #[test]
    fn index_change_restarts_fill_and_clears_pause() {
        let mut track = ProgressTrack::new(2, DURATION);
        track.on_index_changed(0, ms(0));
        track.on_pause(ms(2500));

        track.jump_to(0, ms(3000));
        assert!(!track.is_paused());
        assert_eq!(track.active_fill(ms(3000)), 0.0);
    }
}
