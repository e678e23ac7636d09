use clap::{Parser, ValueEnum};
use rr_remote::Framing;

/// Byte the remote sends for the Enter button
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Terminator {
    /// Carriage return
    Cr,
    /// Line feed
    Lf,
}

impl From<Terminator> for Framing {
    fn from(terminator: Terminator) -> Self {
        match terminator {
            Terminator::Cr => Framing::Cr,
            Terminator::Lf => Framing::Lf,
        }
    }
}

#[derive(Parser, Debug)]
#[command(name = "radio-remote", version, about = "Control a command-line radio player from a serial remote")]
pub struct Args {
    /// Serial device the remote is attached to
    #[arg(long, default_value = "/dev/ttyAMA0")]
    pub port: String,

    /// Serial baud rate
    #[arg(long, default_value_t = 9600)]
    pub baud: u32,

    /// Serial read timeout in milliseconds
    #[arg(long, default_value_t = 3000)]
    pub read_timeout_ms: u64,

    /// End-of-number byte sent by the remote
    #[arg(long, value_enum, default_value_t = Terminator::Cr)]
    pub terminator: Terminator,

    /// Player program
    #[arg(long, default_value = "pianobar")]
    pub player: String,

    /// Extra argument for the player (repeatable)
    #[arg(long = "player-arg", allow_hyphen_values = true)]
    pub player_args: Vec<String>,

    /// Player output lines to skip after start
    #[arg(long, default_value_t = 6)]
    pub banner_lines: usize,

    /// Milliseconds to wait for the station list after requesting it
    #[arg(long, default_value_t = 0)]
    pub station_settle_ms: u64,

    /// Text-to-speech command; the phrase is appended as the last argument
    #[arg(long, default_value = "sudo ./speech.sh")]
    pub speech: String,

    /// Log phrases instead of speaking them
    #[arg(long)]
    pub mute: bool,
}
