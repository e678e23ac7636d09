//! Station list output parsing

/// Extract the station name from one line of the player's station list
///
/// The name is whatever follows the last run of two spaces, e.g.
/// `"\t  3) q   Jazz Radio\n"` gives `"Jazz Radio"`. Lines without a double
/// space are returned whole. The line terminator is never part of the name.
pub fn station_name(line: &str) -> &str {
    let line = line.trim_end_matches(['\n', '\r']);
    match line.rfind("  ") {
        Some(pos) => &line[pos + 2..],
        None => line,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_station_list_line() {
        assert_eq!(station_name("\t  3) q   Jazz Radio\n"), "Jazz Radio");
        assert_eq!(station_name("\t 12)     QuickMix\r\n"), "QuickMix");
    }

    #[test]
    fn test_name_with_single_spaces_is_kept_whole() {
        assert_eq!(
            station_name("  0)  Today's Hits Radio\n"),
            "Today's Hits Radio"
        );
    }

    #[test]
    fn test_line_without_double_space() {
        assert_eq!(station_name("Thumbprint\n"), "Thumbprint");
        assert_eq!(station_name(""), "");
    }
}
