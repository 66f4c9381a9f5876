//! Terminal capabilities and the colors each rendering role uses.
//!
//! Renderers ask for a [`ColorPalette`] and never read the environment
//! themselves.

/// What the attached terminal can display.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TerminalCaps {
    /// ANSI color sequences are honoured.
    pub color: bool,
    /// Box-drawing characters render correctly.
    pub unicode: bool,
}

impl TerminalCaps {
    /// Read capabilities from the process environment.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Color is off when `NO_COLOR` is set (https://no-color.org/) or
    /// `TERM=dumb`. Unicode needs a UTF-8 `LC_ALL` or `LANG`.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let dumb_term = lookup("TERM").is_some_and(|term| term.eq_ignore_ascii_case("dumb"));
        let color = lookup("NO_COLOR").is_none() && !dumb_term;
        let unicode = ["LC_ALL", "LANG"]
            .into_iter()
            .any(|key| lookup(key).is_some_and(|value| value.to_uppercase().contains("UTF")));
        Self { color, unicode }
    }
}

const fn ansi(enabled: bool, sequence: &'static str) -> &'static str {
    if enabled {
        sequence
    } else {
        ""
    }
}

/// Escape sequences by rendering role; every field is empty when color is
/// off.
#[derive(Debug, Clone, Copy)]
pub struct ColorPalette {
    pub reset: &'static str,
    /// Reverse-video tag on the first airport of a trip.
    pub tag_origin: &'static str,
    /// Reverse-video tag on connecting airports.
    pub tag_stop: &'static str,
    /// Reverse-video tag on the final airport of a trip.
    pub tag_destination: &'static str,
    /// Airport codes.
    pub code: &'static str,
    /// Names and separators.
    pub muted: &'static str,
    /// Airline codes.
    pub airline: &'static str,
    /// Counts and totals.
    pub count: &'static str,
    /// Headline figures such as total distance.
    pub accent: &'static str,
}

impl ColorPalette {
    #[must_use]
    pub const fn new(color: bool) -> Self {
        Self {
            reset: ansi(color, "\x1b[0m"),
            tag_origin: ansi(color, "\x1b[1;7;32m"),
            tag_stop: ansi(color, "\x1b[1;7;36m"),
            tag_destination: ansi(color, "\x1b[1;7;35m"),
            code: ansi(color, "\x1b[1;97m"),
            muted: ansi(color, "\x1b[90m"),
            airline: ansi(color, "\x1b[36m"),
            count: ansi(color, "\x1b[32m"),
            accent: ansi(color, "\x1b[38;5;208m"),
        }
    }

    /// Palette matching the current terminal.
    #[must_use]
    pub fn for_terminal() -> Self {
        Self::new(TerminalCaps::from_env().color)
    }
}

/// Render `n` with comma-separated groups of three digits.
///
/// ```
/// # use flightnet_cli::terminal::group_thousands;
/// assert_eq!(group_thousands(999), "999");
/// assert_eq!(group_thousands(12345), "12,345");
/// ```
#[must_use]
pub fn group_thousands(n: u64) -> String {
    let digits = n.to_string();
    let lead = match digits.len() % 3 {
        0 => 3,
        rem => rem,
    };
    let mut grouped = String::from(&digits[..lead]);
    for start in (lead..digits.len()).step_by(3) {
        grouped.push(',');
        grouped.push_str(&digits[start..start + 3]);
    }
    grouped
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    fn caps(vars: &[(&str, &str)]) -> TerminalCaps {
        let env: HashMap<String, String> = vars
            .iter()
            .map(|(key, value)| (key.to_string(), value.to_string()))
            .collect();
        TerminalCaps::from_lookup(|key| env.get(key).cloned())
    }

    #[test]
    fn thousands_are_grouped() {
        assert_eq!(group_thousands(0), "0");
        assert_eq!(group_thousands(999), "999");
        assert_eq!(group_thousands(1000), "1,000");
        assert_eq!(group_thousands(123_456), "123,456");
        assert_eq!(group_thousands(1_234_567), "1,234,567");
        assert_eq!(group_thousands(u64::MAX), "18,446,744,073,709,551,615");
    }

    #[test]
    fn disabled_palette_has_no_escapes() {
        let off = ColorPalette::new(false);
        assert!(off.reset.is_empty());
        assert!(off.tag_destination.is_empty());
        assert!(ColorPalette::new(true).airline.starts_with('\x1b'));
    }

    #[test]
    fn color_follows_no_color_and_term() {
        assert!(caps(&[("TERM", "xterm-256color")]).color);
        assert!(!caps(&[("NO_COLOR", "1")]).color);
        assert!(!caps(&[("NO_COLOR", "")]).color);
        assert!(!caps(&[("TERM", "DUMB")]).color);
    }

    #[test]
    fn unicode_needs_utf8_locale() {
        assert!(caps(&[("LANG", "en_US.UTF-8")]).unicode);
        assert!(caps(&[("LANG", "C"), ("LC_ALL", "pt_PT.utf8")]).unicode);
        assert!(!caps(&[("LANG", "C")]).unicode);
        assert!(!caps(&[]).unicode);
    }
}
