//! Remote control session
//!
//! Owns the player while it runs and turns input events into player
//! keystrokes and spoken feedback.

use crate::command::Command;
use crate::error::RemoteError;
use crate::input::InputEvent;
use crate::player::{PlayerHandle, PlayerLauncher};
use crate::speech::Speaker;
use crate::station::station_name;
use std::thread;
use std::time::Duration;

/// Spoken once the remote is listening
pub const READY_PHRASE: &str = "Remote radio running";
/// Spoken before the player starts
pub const PLAYING_PHRASE: &str = "Playing radio";
/// Spoken after the player stops
pub const GOODBYE_PHRASE: &str = "Good bye";
/// Spoken after the station list
pub const STATION_PROMPT_PHRASE: &str = "Please enter a station number";

/// Tunables for a [`Session`]
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SessionOptions {
    /// Wait between requesting the station list and reading it
    pub station_settle: Duration,
}

/// One remote control session
pub struct Session<L: PlayerLauncher, S: Speaker> {
    launcher: L,
    speaker: S,
    player: Option<L::Player>,
    options: SessionOptions,
}

impl<L: PlayerLauncher, S: Speaker> Session<L, S> {
    /// Create a session with the player switched off
    pub fn new(launcher: L, speaker: S, options: SessionOptions) -> Self {
        Self {
            launcher,
            speaker,
            player: None,
            options,
        }
    }

    pub fn is_running(&self) -> bool {
        self.player.is_some()
    }

    pub fn speaker(&self) -> &S {
        &self.speaker
    }

    /// Say a phrase; speech failures are logged, never returned
    pub fn announce(&mut self, text: &str) {
        say(&mut self.speaker, text);
    }

    /// Act on one decoded input event
    pub fn handle(&mut self, event: InputEvent) -> Result<(), RemoteError> {
        match event {
            InputEvent::Toggle => self.toggle(),
            InputEvent::Dispatch(entry) => self.execute(&entry),
        }
    }

    /// Start the player if it is off, stop it if it is on
    pub fn toggle(&mut self) -> Result<(), RemoteError> {
        if self.is_running() {
            self.stop()
        } else {
            self.start()
        }
    }

    pub fn start(&mut self) -> Result<(), RemoteError> {
        if self.is_running() {
            return Ok(());
        }
        self.announce(PLAYING_PHRASE);
        let player = self.launcher.launch()?;
        self.player = Some(player);
        log::info!("Player started");
        Ok(())
    }

    pub fn stop(&mut self) -> Result<(), RemoteError> {
        let Some(mut player) = self.player.take() else {
            return Ok(());
        };
        player.kill()?;
        log::info!("Player stopped");
        self.announce(GOODBYE_PHRASE);
        Ok(())
    }

    /// Translate a dispatched entry and run it against the player
    ///
    /// Unrecognized entries are ignored. Anything else fails with
    /// [`RemoteError::PlayerNotRunning`] while the player is off.
    pub fn execute(&mut self, entry: &str) -> Result<(), RemoteError> {
        log::info!("entry = {entry:?}");
        let command = Command::parse(entry);
        if !command.needs_player() {
            log::debug!("No player keys for {entry:?}");
            return Ok(());
        }

        match command {
            Command::ListStations => {
                self.list_stations()?;
                Ok(())
            }
            command => {
                let player = self.player.as_mut().ok_or(RemoteError::PlayerNotRunning)?;
                match command.keystrokes() {
                    Some(keys) => player.send(&keys),
                    None => Ok(()),
                }
            }
        }
    }

    /// Read the station list out loud
    ///
    /// Returns how many stations were announced. Polling stops at the first
    /// empty read, so this never waits on the player.
    pub fn list_stations(&mut self) -> Result<usize, RemoteError> {
        let player = self.player.as_mut().ok_or(RemoteError::PlayerNotRunning)?;

        let mut stale = 0;
        while player.try_read_line().is_some() {
            stale += 1;
        }
        if stale > 0 {
            log::debug!("Dropped {stale} stale output lines");
        }

        player.send("p")?;
        player.send("s")?;

        if !self.options.station_settle.is_zero() {
            thread::sleep(self.options.station_settle);
        }

        let mut count = 0;
        while let Some(line) = player.try_read_line() {
            let name = station_name(&line);
            say(&mut self.speaker, &format!("{name}.  Number {count}"));
            count += 1;
        }

        self.announce(STATION_PROMPT_PHRASE);
        Ok(count)
    }
}

fn say<S: Speaker>(speaker: &mut S, text: &str) {
    if let Err(e) = speaker.say(text) {
        log::warn!("Could not say {text:?}: {e}");
    }
}
