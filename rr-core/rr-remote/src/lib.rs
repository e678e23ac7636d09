//! Remote control core for a command-line radio player.
//!
//! This crate turns single-character button codes coming from a serial
//! remote into keystrokes for a radio player subprocess. It provides:
//! - Input decoding with a digit accumulator
//! - The command model and its keystroke translation
//! - Player process management with a background output drainer
//! - Spoken feedback through an external command
//! - The session object and the blocking input loop that drives it

pub mod command;
pub mod error;
pub mod input;
pub mod player;
pub mod reader;
pub mod session;
pub mod speech;
pub mod station;

pub use command::Command;
pub use error::RemoteError;
pub use input::{Framing, InputDecoder, InputEvent};
pub use player::{
    FakeLauncher, FakePlayer, PlayerConfig, PlayerHandle, PlayerLauncher, ProcessLauncher,
    ProcessPlayer,
};
pub use reader::run_input_loop;
pub use session::{Session, SessionOptions};
pub use speech::{LogSpeaker, RecordingSpeaker, ShellSpeaker, Speaker, SpeechConfig};
