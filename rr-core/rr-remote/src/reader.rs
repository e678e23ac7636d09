//! Blocking input loop
//!
//! Reads the serial stream one byte at a time and drives the session. There
//! is no clean way out: the loop only returns when something fails.

use crate::error::RemoteError;
use crate::input::InputDecoder;
use crate::player::PlayerLauncher;
use crate::session::Session;
use crate::speech::Speaker;
use std::convert::Infallible;
use std::io::{ErrorKind, Read};

/// Run the remote until the input or the session fails
///
/// Read timeouts count as "no button pressed" and are skipped. End of
/// stream is treated as a lost connection.
pub fn run_input_loop<R, L, S>(
    mut source: R,
    decoder: &mut InputDecoder,
    session: &mut Session<L, S>,
) -> Result<Infallible, RemoteError>
where
    R: Read,
    L: PlayerLauncher,
    S: Speaker,
{
    let mut byte = [0u8; 1];
    loop {
        match source.read(&mut byte) {
            Ok(0) => return Err(RemoteError::Serial("connection closed".to_string())),
            Ok(_) => {
                log::debug!("rcv = {:?}", byte[0] as char);
                if let Some(event) = decoder.feed(byte[0]) {
                    session.handle(event)?;
                }
            }
            Err(e)
                if matches!(
                    e.kind(),
                    ErrorKind::TimedOut | ErrorKind::WouldBlock | ErrorKind::Interrupted
                ) =>
            {
                continue;
            }
            Err(e) => return Err(RemoteError::Serial(e.to_string())),
        }
    }
}
