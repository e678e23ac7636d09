//! Player commands and their keystroke translation

/// Entry that requests the spoken station list
pub const LIST_STATIONS_ENTRY: &str = "00";

/// A command decoded from one dispatched input entry
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    VolumeUp,
    VolumeDown,
    NextTrack,
    /// Ban the current track and skip it
    BanTrack,
    /// Pause/resume, used as mute
    Pause,
    /// Announce every station, then prompt for a number
    ListStations,
    /// Switch to the station with this index
    SelectStation(String),
    /// Anything the player has no keystroke for
    Unrecognized(String),
}

impl Command {
    /// Translate a dispatched entry into a command
    pub fn parse(entry: &str) -> Self {
        match entry {
            "+" => Command::VolumeUp,
            "-" => Command::VolumeDown,
            "^" => Command::NextTrack,
            "v" => Command::BanTrack,
            "m" => Command::Pause,
            LIST_STATIONS_ENTRY => Command::ListStations,
            digits if !digits.is_empty() && digits.bytes().all(|b| b.is_ascii_digit()) => {
                Command::SelectStation(digits.to_string())
            }
            other => Command::Unrecognized(other.to_string()),
        }
    }

    /// Keystrokes to write to the player's stdin
    ///
    /// `None` for commands that are not a plain keystroke sequence.
    pub fn keystrokes(&self) -> Option<String> {
        match self {
            Command::VolumeUp => Some(")".to_string()),
            Command::VolumeDown => Some("(".to_string()),
            Command::NextTrack => Some("n".to_string()),
            Command::BanTrack => Some("-".to_string()),
            Command::Pause => Some("p".to_string()),
            // Leave any open prompt, open the station prompt, answer it
            Command::SelectStation(digits) => Some(format!("\ns{digits}\n")),
            Command::ListStations | Command::Unrecognized(_) => None,
        }
    }

    /// Whether running this command needs a live player
    pub fn needs_player(&self) -> bool {
        !matches!(self, Command::Unrecognized(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_single_character_commands() {
        assert_eq!(Command::parse("+").keystrokes().as_deref(), Some(")"));
        assert_eq!(Command::parse("-").keystrokes().as_deref(), Some("("));
        assert_eq!(Command::parse("^").keystrokes().as_deref(), Some("n"));
        assert_eq!(Command::parse("v").keystrokes().as_deref(), Some("-"));
        assert_eq!(Command::parse("m").keystrokes().as_deref(), Some("p"));
    }

    #[test]
    fn test_double_zero_lists_stations() {
        assert_eq!(Command::parse("00"), Command::ListStations);
        assert_eq!(Command::ListStations.keystrokes(), None);
    }

    #[test]
    fn test_numeric_entry_selects_station() {
        let command = Command::parse("12");
        assert_eq!(command, Command::SelectStation("12".to_string()));
        assert_eq!(command.keystrokes().as_deref(), Some("\ns12\n"));

        assert_eq!(
            Command::parse("0"),
            Command::SelectStation("0".to_string())
        );
        assert_eq!(
            Command::parse("000"),
            Command::SelectStation("000".to_string())
        );
    }

    #[test]
    fn test_unrecognized_entries() {
        for entry in ["", "x", "\n", "1a", "++"] {
            let command = Command::parse(entry);
            assert_eq!(command, Command::Unrecognized(entry.to_string()));
            assert_eq!(command.keystrokes(), None);
            assert!(!command.needs_player());
        }
    }
}
