//! Story-style slideshow playback.
//!
//! The [`controller::PlaybackController`] owns which slide is showing, the
//! single pending auto-advance and the pause flag. [`progress::ProgressTrack`]
//! is derived from it, and slide drawing hangs off a
//! [`controller::PlaybackObserver`].

pub mod config;
pub mod constants;
pub mod content;
pub mod controller;
pub mod deck;
pub mod error;
pub mod input;
pub mod progress;
pub mod slide;
pub mod state;
pub mod theme;
pub mod timer;

pub use config::{Cli, PlaybackConfig};
pub use controller::{PlaybackController, PlaybackObserver, Transition};
pub use deck::{Deck, DeckMeta};
pub use error::{Error, Result};
pub use slide::{Slide, SlideKind};
pub use state::PlaybackPhase;
