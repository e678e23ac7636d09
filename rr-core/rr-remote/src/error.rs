//! Error types for rr-remote

use core::fmt;

/// Error type for remote control operations
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RemoteError {
    /// A player command arrived while no player is running
    PlayerNotRunning,
    /// The player process could not be started
    PlayerSpawn(String),
    /// Reading from or writing to the player process failed
    PlayerIo(String),
    /// The speech command could not be run
    Speech(String),
    /// The serial connection failed
    Serial(String),
}

impl fmt::Display for RemoteError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RemoteError::PlayerNotRunning => write!(f, "Player is not running"),
            RemoteError::PlayerSpawn(msg) => write!(f, "Failed to start player: {msg}"),
            RemoteError::PlayerIo(msg) => write!(f, "Player I/O error: {msg}"),
            RemoteError::Speech(msg) => write!(f, "Speech error: {msg}"),
            RemoteError::Serial(msg) => write!(f, "Serial error: {msg}"),
        }
    }
}

impl std::error::Error for RemoteError {}
