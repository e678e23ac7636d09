//! Runtime configuration built from the command line

use crate::args::Args;
use anyhow::{Result, bail};
use rr_remote::{Framing, PlayerConfig, SessionOptions, SpeechConfig};
use std::time::Duration;

/// Serial port settings
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SerialConfig {
    pub port_name: String,
    pub baud_rate: u32,
    pub timeout: Duration,
}

/// Everything needed to run the remote
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RemoteConfig {
    pub serial: SerialConfig,
    pub framing: Framing,
    pub player: PlayerConfig,
    /// `None` when muted
    pub speech: Option<SpeechConfig>,
    pub session: SessionOptions,
}

impl RemoteConfig {
    pub fn from_args(args: Args) -> Result<Self> {
        if args.player.trim().is_empty() {
            bail!("Player program must not be empty");
        }

        let speech = if args.mute {
            None
        } else {
            match SpeechConfig::from_command_line(&args.speech) {
                Some(speech) => Some(speech),
                None => bail!("Speech command must not be empty (use --mute to disable speech)"),
            }
        };

        Ok(Self {
            serial: SerialConfig {
                port_name: args.port,
                baud_rate: args.baud,
                timeout: Duration::from_millis(args.read_timeout_ms),
            },
            framing: args.terminator.into(),
            player: PlayerConfig {
                program: args.player,
                args: args.player_args,
                banner_lines: args.banner_lines,
            },
            speech,
            session: SessionOptions {
                station_settle: Duration::from_millis(args.station_settle_ms),
            },
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    fn parse(argv: &[&str]) -> Result<RemoteConfig> {
        let args = Args::try_parse_from(argv)?;
        RemoteConfig::from_args(args)
    }

    #[test]
    fn test_defaults() {
        let config = parse(&["radio-remote"]).unwrap();
        assert_eq!(
            config.serial,
            SerialConfig {
                port_name: "/dev/ttyAMA0".to_string(),
                baud_rate: 9600,
                timeout: Duration::from_secs(3),
            }
        );
        assert_eq!(config.framing, Framing::Cr);
        assert_eq!(config.player, PlayerConfig::default());
        assert_eq!(config.speech, Some(SpeechConfig::default()));
        assert_eq!(config.session, SessionOptions::default());
    }

    #[test]
    fn test_overrides() {
        let config = parse(&[
            "radio-remote",
            "--port",
            "/dev/ttyUSB0",
            "--baud",
            "115200",
            "--terminator",
            "lf",
            "--player",
            "mpc",
            "--player-arg",
            "-q",
            "--player-arg",
            "idle",
            "--banner-lines",
            "0",
            "--station-settle-ms",
            "750",
            "--speech",
            "espeak -v en",
        ])
        .unwrap();

        assert_eq!(config.serial.port_name, "/dev/ttyUSB0");
        assert_eq!(config.serial.baud_rate, 115200);
        assert_eq!(config.framing, Framing::Lf);
        assert_eq!(config.player.program, "mpc");
        assert_eq!(config.player.args, ["-q", "idle"]);
        assert_eq!(config.player.banner_lines, 0);
        assert_eq!(config.session.station_settle, Duration::from_millis(750));
        assert_eq!(
            config.speech,
            Some(SpeechConfig {
                program: "espeak".to_string(),
                args: vec!["-v".to_string(), "en".to_string()],
            })
        );
    }

    #[test]
    fn test_mute_disables_speech() {
        let config = parse(&["radio-remote", "--mute", "--speech", ""]).unwrap();
        assert_eq!(config.speech, None);
    }

    #[test]
    fn test_blank_speech_command_is_rejected() {
        assert!(parse(&["radio-remote", "--speech", "  "]).is_err());
    }

    #[test]
    fn test_unknown_terminator_is_rejected() {
        assert!(Args::try_parse_from(["radio-remote", "--terminator", "crlf"]).is_err());
    }
}
