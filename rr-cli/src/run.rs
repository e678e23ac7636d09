//! Remote entry point
//!
//! Builds the session from the configuration and hands it to the input
//! loop. Only returns on failure.

use crate::config::RemoteConfig;
use crate::messages;
use crate::serial::open_serial_port;
use anyhow::{Context, Result};
use rr_remote::session::READY_PHRASE;
use rr_remote::{
    InputDecoder, LogSpeaker, ProcessLauncher, Session, ShellSpeaker, Speaker, run_input_loop,
};

pub fn run(config: RemoteConfig) -> Result<()> {
    let speaker: Box<dyn Speaker> = match &config.speech {
        Some(speech) => Box::new(ShellSpeaker::new(speech.clone())),
        None => Box::new(LogSpeaker),
    };
    let launcher = ProcessLauncher::new(config.player.clone());
    let mut session = Session::new(launcher, speaker, config.session.clone());

    let port = open_serial_port(&config.serial)?;

    messages::print_ready(&config);
    session.announce(READY_PHRASE);

    let mut decoder = InputDecoder::new(config.framing);
    match run_input_loop(port, &mut decoder, &mut session) {
        Ok(never) => match never {},
        Err(e) => Err(e).context("Remote stopped"),
    }
}
