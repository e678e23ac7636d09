//! Spoken feedback
//!
//! Phrases are spoken by an external text-to-speech command that takes the
//! text as its last argument.

use crate::error::RemoteError;
use std::process::Command;

/// Something that can say a phrase out loud
pub trait Speaker {
    fn say(&mut self, text: &str) -> Result<(), RemoteError>;
}

/// External speech command
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SpeechConfig {
    pub program: String,
    /// Arguments placed before the phrase
    pub args: Vec<String>,
}

impl Default for SpeechConfig {
    fn default() -> Self {
        Self {
            program: "sudo".to_string(),
            args: vec!["./speech.sh".to_string()],
        }
    }
}

impl SpeechConfig {
    /// Build from a whitespace separated command line, e.g. `"sudo ./speech.sh"`
    ///
    /// Returns `None` for a blank command line.
    pub fn from_command_line(command_line: &str) -> Option<Self> {
        let mut words = command_line.split_whitespace().map(str::to_string);
        let program = words.next()?;
        Some(Self {
            program,
            args: words.collect(),
        })
    }
}

/// Speaks by running the configured command and waiting for it
#[derive(Debug, Clone, Default)]
pub struct ShellSpeaker {
    config: SpeechConfig,
}

impl ShellSpeaker {
    pub fn new(config: SpeechConfig) -> Self {
        Self { config }
    }
}

impl Speaker for ShellSpeaker {
    fn say(&mut self, text: &str) -> Result<(), RemoteError> {
        log::info!("Saying: {text}");
        let status = Command::new(&self.config.program)
            .args(&self.config.args)
            .arg(text)
            .status()
            .map_err(|e| RemoteError::Speech(format!("{}: {e}", self.config.program)))?;
        if !status.success() {
            log::warn!("Speech command {} exited with {status}", self.config.program);
        }
        Ok(())
    }
}

impl<S: Speaker + ?Sized> Speaker for Box<S> {
    fn say(&mut self, text: &str) -> Result<(), RemoteError> {
        (**self).say(text)
    }
}

/// Only logs phrases
#[derive(Debug, Clone, Copy, Default)]
pub struct LogSpeaker;

impl Speaker for LogSpeaker {
    fn say(&mut self, text: &str) -> Result<(), RemoteError> {
        log::info!("(muted) {text}");
        Ok(())
    }
}

/// Keeps phrases in memory instead of speaking them
#[derive(Debug, Clone, Default)]
pub struct RecordingSpeaker {
    phrases: Vec<String>,
}

impl RecordingSpeaker {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn phrases(&self) -> &[String] {
        &self.phrases
    }
}

impl Speaker for RecordingSpeaker {
    fn say(&mut self, text: &str) -> Result<(), RemoteError> {
        log::debug!("Recording phrase: {text}");
        self.phrases.push(text.to_string());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_command_line() {
        assert_eq!(
            SpeechConfig::from_command_line("sudo ./speech.sh"),
            Some(SpeechConfig::default())
        );
        assert_eq!(
            SpeechConfig::from_command_line("  espeak  "),
            Some(SpeechConfig {
                program: "espeak".to_string(),
                args: Vec::new(),
            })
        );
        assert_eq!(SpeechConfig::from_command_line("   "), None);
    }

    #[test]
    fn test_recording_speaker_keeps_order() {
        let mut speaker = RecordingSpeaker::new();
        speaker.say("one").unwrap();
        speaker.say("two").unwrap();
        assert_eq!(speaker.phrases(), ["one", "two"]);
    }

    #[test_log::test]
    fn test_log_speaker_never_fails() {
        let mut speaker = LogSpeaker;
        assert_eq!(speaker.say("Playing radio"), Ok(()));
        assert_eq!(speaker.say(""), Ok(()));
    }

    #[test]
    fn test_boxed_speaker_forwards() {
        let mut speaker = Box::new(RecordingSpeaker::new());
        Speaker::say(&mut speaker, "Good bye").unwrap();
        assert_eq!(speaker.phrases(), ["Good bye"]);

        let mut speaker: Box<dyn Speaker> = Box::new(LogSpeaker);
        assert_eq!(speaker.say("Good bye"), Ok(()));
    }

    #[cfg(unix)]
    #[test_log::test]
    fn test_failing_speech_command_is_not_an_error() {
        let mut speaker = ShellSpeaker::new(SpeechConfig {
            program: "false".to_string(),
            args: Vec::new(),
        });
        assert_eq!(speaker.say("hello"), Ok(()));
    }

    #[test]
    fn test_missing_speech_command() {
        let mut speaker = ShellSpeaker::new(SpeechConfig {
            program: "/nonexistent/speech.sh".to_string(),
            args: Vec::new(),
        });
        assert!(matches!(speaker.say("hello"), Err(RemoteError::Speech(_))));
    }
}
