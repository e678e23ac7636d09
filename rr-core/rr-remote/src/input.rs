//! Serial input decoding
//!
//! The remote sends one ASCII byte per button press. Digits are collected
//! into an accumulator until a terminator arrives; everything else is
//! dispatched immediately.

/// Starts or stops the player.
pub const TOGGLE: u8 = b'p';

/// Discards the digits entered so far.
pub const CANCEL: u8 = b'c';

/// Which byte ends a digit sequence
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Framing {
    /// Carriage return (`\r`)
    #[default]
    Cr,
    /// Line feed (`\n`)
    Lf,
}

impl Framing {
    pub fn terminator(self) -> u8 {
        match self {
            Framing::Cr => b'\r',
            Framing::Lf => b'\n',
        }
    }
}

/// Event produced by [`InputDecoder::feed`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputEvent {
    /// Start the player if stopped, stop it if running
    Toggle,
    /// Hand this entry to the command translator
    Dispatch(String),
}

/// Turns the raw byte stream into input events
#[derive(Debug, Default)]
pub struct InputDecoder {
    framing: Framing,
    buffer: String,
}

impl InputDecoder {
    pub fn new(framing: Framing) -> Self {
        Self {
            framing,
            buffer: String::new(),
        }
    }

    /// Digits collected since the last terminator, cancel or dispatch
    pub fn buffer(&self) -> &str {
        &self.buffer
    }

    /// Feed one received byte
    ///
    /// Returns the event to act on, or `None` when the byte only changed
    /// the accumulator.
    pub fn feed(&mut self, byte: u8) -> Option<InputEvent> {
        match byte {
            TOGGLE => Some(InputEvent::Toggle),
            b'0'..=b'9' => {
                self.buffer.push(byte as char);
                log::info!("buffer = {}", self.buffer);
                None
            }
            CANCEL => {
                self.buffer.clear();
                None
            }
            b if b == self.framing.terminator() => {
                Some(InputEvent::Dispatch(core::mem::take(&mut self.buffer)))
            }
            other => {
                self.buffer.clear();
                Some(InputEvent::Dispatch((other as char).to_string()))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn feed_all(decoder: &mut InputDecoder, bytes: &[u8]) -> Vec<InputEvent> {
        bytes.iter().filter_map(|&b| decoder.feed(b)).collect()
    }

    #[test]
    fn test_digits_then_terminator_dispatches_number() {
        let mut decoder = InputDecoder::new(Framing::Cr);
        let events = feed_all(&mut decoder, b"12\r");
        assert_eq!(events, vec![InputEvent::Dispatch("12".to_string())]);
        assert_eq!(decoder.buffer(), "");
    }

    #[test]
    fn test_terminator_with_empty_buffer_dispatches_empty_entry() {
        let mut decoder = InputDecoder::new(Framing::Cr);
        assert_eq!(decoder.feed(b'\r'), Some(InputEvent::Dispatch(String::new())));
    }

    #[test]
    fn test_cancel_clears_buffer() {
        let mut decoder = InputDecoder::new(Framing::Cr);
        assert!(feed_all(&mut decoder, b"4711c").is_empty());
        assert_eq!(decoder.buffer(), "");

        // Nothing left over for the next terminator
        assert_eq!(decoder.feed(b'\r'), Some(InputEvent::Dispatch(String::new())));
    }

    #[test]
    fn test_control_letter_dispatches_immediately() {
        let mut decoder = InputDecoder::new(Framing::Cr);
        assert_eq!(decoder.feed(b'v'), Some(InputEvent::Dispatch("v".to_string())));
        assert_eq!(decoder.buffer(), "");
    }

    #[test]
    fn test_control_letter_discards_pending_digits() {
        let mut decoder = InputDecoder::new(Framing::Cr);
        let events = feed_all(&mut decoder, b"3+\r");
        assert_eq!(
            events,
            vec![
                InputEvent::Dispatch("+".to_string()),
                InputEvent::Dispatch(String::new()),
            ]
        );
    }

    #[test]
    fn test_toggle_keeps_buffer() {
        let mut decoder = InputDecoder::new(Framing::Cr);
        decoder.feed(b'5');
        assert_eq!(decoder.feed(TOGGLE), Some(InputEvent::Toggle));
        assert_eq!(decoder.buffer(), "5");
    }

    #[test]
    fn test_lf_framing() {
        let mut decoder = InputDecoder::new(Framing::Lf);
        let events = feed_all(&mut decoder, b"07\r\n");
        // CR is an ordinary byte under LF framing
        assert_eq!(
            events,
            vec![
                InputEvent::Dispatch("\r".to_string()),
                InputEvent::Dispatch(String::new()),
            ]
        );

        let events = feed_all(&mut decoder, b"07\n");
        assert_eq!(events, vec![InputEvent::Dispatch("07".to_string())]);
    }
}
