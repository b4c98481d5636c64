use std::path::PathBuf;
use std::time::Duration;

use clap::Parser;

use crate::constants::*;
use crate::error::{Error, Result};

/// Story-style slideshow presenter.
#[derive(Debug, Parser)]
#[command(name = "storyshow", version)]
pub struct Cli {
    /// Deck file (JSON) with the slides to present
    pub deck: PathBuf,

    /// How long each slide stays up before auto-advancing
    #[arg(long, default_value_t = DEFAULT_SLIDE_DURATION_MS)]
    pub slide_duration_ms: u64,

    /// Window width in pixels
    #[arg(long, default_value_t = RENDER_WIDTH / 2)]
    pub width: i32,

    /// Window height in pixels
    #[arg(long, default_value_t = RENDER_HEIGHT / 2)]
    pub height: i32,

    /// Target frames per second
    #[arg(long, default_value_t = FPS)]
    pub fps: u32,
}

impl Cli {
    pub fn playback_config(&self) -> Result<PlaybackConfig> {
        PlaybackConfig::new(Duration::from_millis(self.slide_duration_ms))
    }
}

/// Session-wide playback settings, constant once playback starts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PlaybackConfig {
    slide_duration: Duration,
}

impl PlaybackConfig {
    pub fn new(slide_duration: Duration) -> Result<Self> {
        if slide_duration.is_zero() {
            return Err(Error::InvalidDuration);
        }
        Ok(Self { slide_duration })
    }

    pub fn slide_duration(&self) -> Duration {
        self.slide_duration
    }
}

impl Default for PlaybackConfig {
    fn default() -> Self {
        Self {
            slide_duration: Duration::from_millis(DEFAULT_SLIDE_DURATION_MS),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_to_five_seconds() {
        let cli = Cli::try_parse_from(["storyshow", "deck.json"]).unwrap();
        assert_eq!(cli.deck, PathBuf::from("deck.json"));
        assert_eq!(cli.playback_config().unwrap(), PlaybackConfig::default());
        assert_eq!(PlaybackConfig::default().slide_duration(), Duration::from_millis(5000));
    }

    #[test]
    fn rejects_zero_duration() {
        let cli =
            Cli::try_parse_from(["storyshow", "deck.json", "--slide-duration-ms", "0"]).unwrap();
        assert!(matches!(cli.playback_config(), Err(Error::InvalidDuration)));
    }

    #[test]
    fn deck_argument_is_required() {
        assert!(Cli::try_parse_from(["storyshow"]).is_err());
    }
}
