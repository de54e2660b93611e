//! Terminal attribute codes.
//!
//! Styles, foreground colors and background colors are plain SGR numbers.
//! The newtypes accept any integer so callers can pass codes this crate has
//! no constant for; the constants cover the standard 16-color palette.

use std::fmt;

use crate::error::ParseError;

/// A text rendering flag such as bold or underline.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Style(pub u64);

/// A foreground (text) color code.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Foreground(pub u64);

/// A background color code.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Background(pub u64);

impl Style {
    /// Reset all attributes.
    pub const REGULAR: Style = Style(0);
    pub const BOLD: Style = Style(1);
    pub const DIM: Style = Style(2);
    /// Not rendered by some terminals.
    pub const ITALIC: Style = Style(3);
    /// Not rendered by some terminals.
    pub const UNDERLINE: Style = Style(4);

    /// The raw SGR code.
    pub fn code(self) -> u64 {
        self.0
    }

    /// Resolve a style name like `bold` or `underline`.
    pub fn from_name(name: &str) -> Option<Style> {
        match name.trim().to_lowercase().as_str() {
            "regular" | "reset" => Some(Style::REGULAR),
            "bold" | "b" => Some(Style::BOLD),
            "dim" | "d" => Some(Style::DIM),
            "italic" | "i" => Some(Style::ITALIC),
            "underline" | "u" => Some(Style::UNDERLINE),
            _ => None,
        }
    }
}

impl Foreground {
    /// Reset the foreground to the terminal default.
    pub const REGULAR: Foreground = Foreground(39);
    pub const BLACK: Foreground = Foreground(30);
    pub const RED: Foreground = Foreground(31);
    pub const GREEN: Foreground = Foreground(32);
    pub const YELLOW: Foreground = Foreground(33);
    pub const BLUE: Foreground = Foreground(34);
    pub const MAGENTA: Foreground = Foreground(35);
    pub const CYAN: Foreground = Foreground(36);
    pub const WHITE: Foreground = Foreground(37);
    pub const HI_BLACK: Foreground = Foreground(90);
    pub const HI_RED: Foreground = Foreground(91);
    pub const HI_GREEN: Foreground = Foreground(92);
    pub const HI_YELLOW: Foreground = Foreground(93);
    pub const HI_BLUE: Foreground = Foreground(94);
    pub const HI_MAGENTA: Foreground = Foreground(95);
    pub const HI_CYAN: Foreground = Foreground(96);
    pub const HI_WHITE: Foreground = Foreground(97);

    /// The raw SGR code.
    pub fn code(self) -> u64 {
        self.0
    }

    /// Resolve a color name like `red` or `bright_blue`.
    pub fn from_name(name: &str) -> Option<Foreground> {
        match parse_color_name(name)? {
            ColorName::Default => Some(Foreground::REGULAR),
            ColorName::Normal(index) => Some(Foreground(30 + index)),
            ColorName::Bright(index) => Some(Foreground(90 + index)),
        }
    }
}

impl Background {
    /// Reset the background to the terminal default.
    pub const REGULAR: Background = Background(49);
    pub const BLACK: Background = Background(40);
    pub const RED: Background = Background(41);
    pub const GREEN: Background = Background(42);
    pub const YELLOW: Background = Background(43);
    pub const BLUE: Background = Background(44);
    pub const MAGENTA: Background = Background(45);
    pub const CYAN: Background = Background(46);
    pub const WHITE: Background = Background(47);
    pub const HI_BLACK: Background = Background(100);
    pub const HI_RED: Background = Background(101);
    pub const HI_GREEN: Background = Background(102);
    pub const HI_YELLOW: Background = Background(103);
    pub const HI_BLUE: Background = Background(104);
    pub const HI_MAGENTA: Background = Background(105);
    pub const HI_CYAN: Background = Background(106);
    pub const HI_WHITE: Background = Background(107);

    /// The raw SGR code.
    pub fn code(self) -> u64 {
        self.0
    }

    /// Resolve a color name like `red` or `bright_blue`.
    pub fn from_name(name: &str) -> Option<Background> {
        match parse_color_name(name)? {
            ColorName::Default => Some(Background::REGULAR),
            ColorName::Normal(index) => Some(Background(40 + index)),
            ColorName::Bright(index) => Some(Background(100 + index)),
        }
    }
}

impl Default for Foreground {
    fn default() -> Self {
        Foreground::REGULAR
    }
}

impl Default for Background {
    fn default() -> Self {
        Background::REGULAR
    }
}

impl fmt::Display for Style {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl fmt::Display for Foreground {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl fmt::Display for Background {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Position of a color within the 8-color palette.
enum ColorName {
    Default,
    Normal(u64),
    Bright(u64),
}

fn parse_color_name(name: &str) -> Option<ColorName> {
    let name = name.trim().to_lowercase();

    if matches!(name.as_str(), "default" | "regular") {
        return Some(ColorName::Default);
    }

    let (base, bright) = match name
        .strip_prefix("bright_")
        .or_else(|| name.strip_prefix("hi_"))
    {
        Some(rest) => (rest, true),
        None => (name.as_str(), false),
    };

    let index = match base {
        "black" => 0,
        "red" => 1,
        "green" => 2,
        "yellow" => 3,
        "blue" => 4,
        "magenta" => 5,
        "cyan" => 6,
        "white" => 7,
        _ => return None,
    };

    Some(if bright {
        ColorName::Bright(index)
    } else {
        ColorName::Normal(index)
    })
}

/// A complete attribute set: ordered styles plus one foreground and one
/// background.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Attributes {
    /// Style codes, in the order they are emitted.
    pub styles: Vec<Style>,
    /// Foreground color.
    pub foreground: Foreground,
    /// Background color.
    pub background: Background,
}

impl Attributes {
    /// Create an attribute set from its parts.
    pub fn new(
        foreground: Foreground,
        background: Background,
        styles: impl IntoIterator<Item = Style>,
    ) -> Self {
        Self {
            styles: styles.into_iter().collect(),
            foreground,
            background,
        }
    }

    /// Parse a description like `"bold red on blue"`.
    ///
    /// Style words are kept in the order they appear. The last foreground
    /// color and the last `on <color>` win.
    ///
    /// # Examples
    ///
    /// ```
    /// use palette::{Attributes, Background, Foreground, Style};
    ///
    /// let attrs = Attributes::parse("bold white on blue").unwrap();
    /// assert_eq!(attrs.styles, vec![Style::BOLD]);
    /// assert_eq!(attrs.foreground, Foreground::WHITE);
    /// assert_eq!(attrs.background, Background::BLUE);
    /// ```
    pub fn parse(input: &str) -> Result<Self, ParseError> {
        let input = input.trim();
        if input.is_empty() {
            return Err(ParseError::Empty);
        }

        let mut attrs = Attributes::default();
        let mut words = input.split_whitespace();

        while let Some(word) = words.next() {
            if word.eq_ignore_ascii_case("on") {
                let color = words.next().ok_or(ParseError::MissingBackground)?;
                attrs.background = Background::from_name(color)
                    .ok_or_else(|| ParseError::UnknownColor(color.to_string()))?;
                continue;
            }

            if let Some(style) = Style::from_name(word) {
                attrs.styles.push(style);
                continue;
            }

            if let Some(foreground) = Foreground::from_name(word) {
                attrs.foreground = foreground;
                continue;
            }

            return Err(ParseError::UnknownStyle(word.to_string()));
        }

        Ok(attrs)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_is_decimal_code() {
        assert_eq!(Style::BOLD.to_string(), "1");
        assert_eq!(Foreground::HI_WHITE.to_string(), "97");
        assert_eq!(Background::HI_BLACK.to_string(), "100");
    }

    #[test]
    fn color_names_map_to_both_planes() {
        assert_eq!(Foreground::from_name("red"), Some(Foreground::RED));
        assert_eq!(Background::from_name("red"), Some(Background::RED));
        assert_eq!(Foreground::from_name("bright_cyan"), Some(Foreground::HI_CYAN));
        assert_eq!(Background::from_name("hi_cyan"), Some(Background::HI_CYAN));
        assert_eq!(Foreground::from_name("default"), Some(Foreground::REGULAR));
        assert_eq!(Background::from_name("Regular"), Some(Background::REGULAR));
        assert_eq!(Foreground::from_name("teal"), None);
    }

    #[test]
    fn style_names() {
        assert_eq!(Style::from_name("bold"), Some(Style::BOLD));
        assert_eq!(Style::from_name("U"), Some(Style::UNDERLINE));
        assert_eq!(Style::from_name("blink"), None);
    }

    #[test]
    fn parse_keeps_style_order() {
        let attrs = Attributes::parse("underline bold").unwrap();
        assert_eq!(attrs.styles, vec![Style::UNDERLINE, Style::BOLD]);
        assert_eq!(attrs.foreground, Foreground::REGULAR);
        assert_eq!(attrs.background, Background::REGULAR);
    }

    #[test]
    fn parse_background_only() {
        let attrs = Attributes::parse("on bright_yellow").unwrap();
        assert!(attrs.styles.is_empty());
        assert_eq!(attrs.background, Background::HI_YELLOW);
    }

    #[test]
    fn parse_errors() {
        assert_eq!(Attributes::parse("  "), Err(ParseError::Empty));
        assert_eq!(Attributes::parse("red on"), Err(ParseError::MissingBackground));
        assert_eq!(
            Attributes::parse("on teal"),
            Err(ParseError::UnknownColor("teal".into()))
        );
        assert_eq!(
            Attributes::parse("bold sparkly"),
            Err(ParseError::UnknownStyle("sparkly".into()))
        );
    }
}
