use thiserror::Error;

#[derive(Debug, Error)]
pub enum PlayerError {
    #[error("track index {index} out of range (catalog has {len} tracks)")]
    TrackOutOfRange { index: usize, len: usize },
    #[error("failed to open audio {path}: {reason}")]
    AudioOpen { path: String, reason: String },
    #[error("playback failed: {0}")]
    Playback(String),
    #[error("model: {0}")]
    Model(String),
}

pub type Result<T> = std::result::Result<T, PlayerError>;
