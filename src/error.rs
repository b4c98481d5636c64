use std::path::PathBuf;

use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

/// Failures surfaced while setting up a playback session.
///
/// Navigation never fails: out-of-range requests are ignored or end
/// playback, so nothing in here is produced once a session is running.
#[derive(Debug, Error)]
pub enum Error {
    #[error("deck data missing: {}", .0.display())]
    MissingData(PathBuf),

    #[error("deck contains no slides")]
    EmptyDeck,

    #[error("duplicate slide id `{0}`")]
    DuplicateSlideId(String),

    #[error("failed to read {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("malformed deck data: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("slide duration must be greater than zero")]
    InvalidDuration,
}
