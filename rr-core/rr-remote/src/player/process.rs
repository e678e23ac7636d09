//! Player running as a child process
//!
//! Keystrokes go to the child's stdin. Its stdout is drained by a detached
//! background thread into an unbounded channel, so the session can poll
//! output without ever blocking.

use crate::error::RemoteError;
use crate::player::{PlayerHandle, PlayerLauncher};
use crossbeam_channel::{Receiver, Sender, TryRecvError};
use std::io::{BufRead, BufReader, Read, Write};
use std::process::{Child, ChildStdin, Command, Stdio};
use std::thread;

/// Number of start-up lines pianobar prints before it is ready.
const DEFAULT_BANNER_LINES: usize = 6;

/// How to start the player
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlayerConfig {
    /// Player executable
    pub program: String,
    /// Extra arguments
    pub args: Vec<String>,
    /// Lines of output discarded right after start
    pub banner_lines: usize,
}

impl Default for PlayerConfig {
    fn default() -> Self {
        Self {
            program: "pianobar".to_string(),
            args: Vec::new(),
            banner_lines: DEFAULT_BANNER_LINES,
        }
    }
}

/// Launches [`ProcessPlayer`]s from a [`PlayerConfig`]
#[derive(Debug, Clone, Default)]
pub struct ProcessLauncher {
    config: PlayerConfig,
}

impl ProcessLauncher {
    pub fn new(config: PlayerConfig) -> Self {
        Self { config }
    }
}

impl PlayerLauncher for ProcessLauncher {
    type Player = ProcessPlayer;

    fn launch(&mut self) -> Result<ProcessPlayer, RemoteError> {
        ProcessPlayer::spawn(&self.config)
    }
}

/// A live player child process
pub struct ProcessPlayer {
    child: Child,
    stdin: ChildStdin,
    output: Receiver<String>,
}

impl ProcessPlayer {
    /// Start the player and its output drainer
    ///
    /// Blocks until the banner lines have been read, then hands the rest
    /// of stdout to the drainer thread.
    pub fn spawn(config: &PlayerConfig) -> Result<Self, RemoteError> {
        log::info!("Starting player: {} {:?}", config.program, config.args);

        let mut child = Command::new(&config.program)
            .args(&config.args)
            .stdin(Stdio::piped())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .spawn()
            .map_err(|e| RemoteError::PlayerSpawn(format!("{}: {e}", config.program)))?;

        let stdin = child
            .stdin
            .take()
            .ok_or_else(|| RemoteError::PlayerSpawn("stdin was not captured".to_string()))?;
        let stdout = child
            .stdout
            .take()
            .ok_or_else(|| RemoteError::PlayerSpawn("stdout was not captured".to_string()))?;

        let mut reader = BufReader::new(stdout);
        for _ in 0..config.banner_lines {
            match read_line(&mut reader)? {
                Some(line) => log::debug!("Skipping banner: {}", line.trim_end()),
                None => break,
            }
        }

        let (tx, rx) = crossbeam_channel::unbounded();
        thread::Builder::new()
            .name("player-output".to_string())
            .spawn(move || drain_output(reader, tx))
            .map_err(|e| RemoteError::PlayerSpawn(format!("output thread: {e}")))?;

        log::info!("Player running as pid {}", child.id());
        Ok(Self {
            child,
            stdin,
            output: rx,
        })
    }
}

impl PlayerHandle for ProcessPlayer {
    fn send(&mut self, keys: &str) -> Result<(), RemoteError> {
        log::debug!("Sending keys {keys:?}");
        self.stdin
            .write_all(keys.as_bytes())
            .and_then(|()| self.stdin.flush())
            .map_err(|e| RemoteError::PlayerIo(format!("write to player: {e}")))
    }

    fn try_read_line(&mut self) -> Option<String> {
        match self.output.try_recv() {
            Ok(line) => Some(line),
            Err(TryRecvError::Empty) | Err(TryRecvError::Disconnected) => None,
        }
    }

    fn kill(&mut self) -> Result<(), RemoteError> {
        self.child
            .kill()
            .map_err(|e| RemoteError::PlayerIo(format!("kill player: {e}")))?;
        let status = self
            .child
            .wait()
            .map_err(|e| RemoteError::PlayerIo(format!("wait for player: {e}")))?;
        log::info!("Player exited: {status}");
        Ok(())
    }
}

/// Read one line, lossily decoded, terminator included
///
/// Returns `None` at end of stream.
fn read_line<R: Read>(reader: &mut BufReader<R>) -> Result<Option<String>, RemoteError> {
    let mut bytes = Vec::new();
    let n = reader
        .read_until(b'\n', &mut bytes)
        .map_err(|e| RemoteError::PlayerIo(format!("read from player: {e}")))?;
    if n == 0 {
        Ok(None)
    } else {
        Ok(Some(String::from_utf8_lossy(&bytes).into_owned()))
    }
}

/// Push every output line onto the channel until stdout closes
fn drain_output<R: Read>(mut reader: BufReader<R>, tx: Sender<String>) {
    loop {
        match read_line(&mut reader) {
            Ok(Some(line)) => {
                if tx.send(line).is_err() {
                    // Player handle dropped
                    break;
                }
            }
            Ok(None) => break,
            Err(e) => {
                log::debug!("{e}");
                break;
            }
        }
    }
    log::debug!("Player output closed");
}
