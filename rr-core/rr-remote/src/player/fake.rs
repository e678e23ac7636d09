//! Fake player for testing
//!
//! Records every keystroke sequence it receives and serves scripted output
//! lines instead of running a real player. All players launched from one
//! [`FakeLauncher`] share its state, so a test can keep a clone of the
//! launcher and inspect what the session did.

use crate::error::RemoteError;
use crate::player::{PlayerHandle, PlayerLauncher};
use std::collections::VecDeque;
use std::sync::{Arc, Mutex, MutexGuard};

#[derive(Debug, Default)]
struct FakeState {
    launches: usize,
    kills: usize,
    sent: Vec<String>,
    output: VecDeque<String>,
    responses: Vec<(String, Vec<String>)>,
    fail_launch: bool,
}

/// Launcher handing out [`FakePlayer`]s
#[derive(Debug, Clone, Default)]
pub struct FakeLauncher {
    state: Arc<Mutex<FakeState>>,
}

impl FakeLauncher {
    pub fn new() -> Self {
        Self::default()
    }

    fn state(&self) -> MutexGuard<'_, FakeState> {
        lock(&self.state)
    }

    /// Make every further launch fail
    pub fn fail_launches(&self) {
        self.state().fail_launch = true;
    }

    /// Queue a line as if the player had just printed it
    pub fn push_output(&self, line: &str) {
        self.state().output.push_back(line.to_string());
    }

    /// Print `lines` whenever exactly `keys` are sent
    pub fn respond_to(&self, keys: &str, lines: &[&str]) {
        let lines = lines.iter().map(|l| l.to_string()).collect();
        self.state().responses.push((keys.to_string(), lines));
    }

    /// Every keystroke sequence sent so far, in order
    pub fn sent(&self) -> Vec<String> {
        self.state().sent.clone()
    }

    pub fn launches(&self) -> usize {
        self.state().launches
    }

    pub fn kills(&self) -> usize {
        self.state().kills
    }

    /// Lines still waiting to be read
    pub fn pending_output(&self) -> usize {
        self.state().output.len()
    }
}

impl PlayerLauncher for FakeLauncher {
    type Player = FakePlayer;

    fn launch(&mut self) -> Result<FakePlayer, RemoteError> {
        let mut state = self.state();
        if state.fail_launch {
            return Err(RemoteError::PlayerSpawn("fake launch failure".to_string()));
        }
        state.launches += 1;
        Ok(FakePlayer {
            state: self.state.clone(),
            alive: true,
        })
    }
}

/// In-memory player
#[derive(Debug)]
pub struct FakePlayer {
    state: Arc<Mutex<FakeState>>,
    alive: bool,
}

impl PlayerHandle for FakePlayer {
    fn send(&mut self, keys: &str) -> Result<(), RemoteError> {
        if !self.alive {
            return Err(RemoteError::PlayerIo("broken pipe".to_string()));
        }
        let mut state = lock(&self.state);
        state.sent.push(keys.to_string());
        let replies: Vec<String> = state
            .responses
            .iter()
            .filter(|(trigger, _)| trigger == keys)
            .flat_map(|(_, lines)| lines.iter().cloned())
            .collect();
        state.output.extend(replies);
        Ok(())
    }

    fn try_read_line(&mut self) -> Option<String> {
        lock(&self.state).output.pop_front()
    }

    fn kill(&mut self) -> Result<(), RemoteError> {
        self.alive = false;
        lock(&self.state).kills += 1;
        Ok(())
    }
}

fn lock(state: &Mutex<FakeState>) -> MutexGuard<'_, FakeState> {
    state.lock().unwrap_or_else(|e| e.into_inner())
}
