use crate::constants::*;
use crate::slide::ThemeHints;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Parses `#RRGGBB` or `#RGB`. The leading `#` is optional.
    pub fn parse_hex(value: &str) -> Option<Self> {
        let hex = value.trim().trim_start_matches('#');
        if !hex.bytes().all(|b| b.is_ascii_hexdigit()) {
            return None;
        }
        let channel = |s: &str| u8::from_str_radix(s, 16).ok();
        match hex.len() {
            6 => Some(Self::new(channel(&hex[0..2])?, channel(&hex[2..4])?, channel(&hex[4..6])?)),
            3 => {
                let short = |i: usize| channel(&hex[i..i + 1]).map(|v| v * 17);
                Some(Self::new(short(0)?, short(1)?, short(2)?))
            }
            _ => None,
        }
    }
}

/// Colors a slide is painted with.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Theme {
    pub background: Rgb,
    pub text: Rgb,
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            background: default_color(DEFAULT_BG_COLOR),
            text: default_color(DEFAULT_TEXT_COLOR),
        }
    }
}

impl Theme {
    /// Resolves the slide's hints, falling back per color when a hint is
    /// absent or not a valid hex color.
    pub fn from_hints(hints: &ThemeHints<'_>) -> Self {
        let fallback = Self::default();
        Self {
            background: hints.bg_color.and_then(Rgb::parse_hex).unwrap_or(fallback.background),
            text: hints.text_color.and_then(Rgb::parse_hex).unwrap_or(fallback.text),
        }
    }
}

fn default_color(hex: &str) -> Rgb {
    Rgb::parse_hex(hex).unwrap_or(Rgb::new(0, 0, 0))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_long_and_short_hex() {
        assert_eq!(Rgb::parse_hex("#6200EA"), Some(Rgb::new(0x62, 0x00, 0xEA)));
        assert_eq!(Rgb::parse_hex("03dac6"), Some(Rgb::new(0x03, 0xDA, 0xC6)));
        assert_eq!(Rgb::parse_hex("#fff"), Some(Rgb::new(255, 255, 255)));
        assert_eq!(Rgb::parse_hex("#12345"), None);
        assert_eq!(Rgb::parse_hex("#zzzzzz"), None);
        assert_eq!(Rgb::parse_hex("#ééé"), None);
        assert_eq!(Rgb::parse_hex("+1+2+3"), None);
        assert_eq!(Rgb::parse_hex("#+f+"), None);
    }

    #[test]
    fn falls_back_per_color() {
        let theme = Theme::from_hints(&ThemeHints {
            bg_color: Some("#FFC107"),
            text_color: Some("not-a-color"),
        });
        assert_eq!(theme.background, Rgb::new(0xFF, 0xC1, 0x07));
        assert_eq!(theme.text, Rgb::new(255, 255, 255));

        let unset = Theme::from_hints(&ThemeHints::default());
        assert_eq!(unset.background, Rgb::new(0x12, 0x12, 0x12));

        let signed = Theme::from_hints(&ThemeHints {
            bg_color: Some("#+1+2+3"),
            text_color: None,
        });
        assert_eq!(signed, Theme::default());
    }
}
