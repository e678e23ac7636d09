//! Player process abstraction
//!
//! The session talks to the radio player through [`PlayerHandle`], and gets
//! a new handle from a [`PlayerLauncher`] every time the player is switched
//! on. [`ProcessLauncher`] runs the real player; [`FakeLauncher`] is an
//! in-memory stand-in for tests.

pub mod fake;
pub mod process;

pub use fake::{FakeLauncher, FakePlayer};
pub use process::{PlayerConfig, ProcessLauncher, ProcessPlayer};

use crate::error::RemoteError;

/// A running player instance
pub trait PlayerHandle {
    /// Write keystrokes to the player's standard input
    fn send(&mut self, keys: &str) -> Result<(), RemoteError>;

    /// Next queued line of player output, if any (non-blocking)
    fn try_read_line(&mut self) -> Option<String>;

    /// Terminate the player
    fn kill(&mut self) -> Result<(), RemoteError>;
}

/// Starts player instances
pub trait PlayerLauncher {
    type Player: PlayerHandle;

    fn launch(&mut self) -> Result<Self::Player, RemoteError>;
}
