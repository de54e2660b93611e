//! Tests for attribute codes and name lookup.

use palette::{Attributes, Background, Foreground, ParseError, Style};

// ============================================================================
// Codes
// ============================================================================

#[test]
fn standard_codes() {
    assert_eq!(Style::REGULAR.code(), 0);
    assert_eq!(Style::UNDERLINE.code(), 4);
    assert_eq!(Foreground::REGULAR.code(), 39);
    assert_eq!(Foreground::BLACK.code(), 30);
    assert_eq!(Foreground::HI_WHITE.code(), 97);
    assert_eq!(Background::REGULAR.code(), 49);
    assert_eq!(Background::WHITE.code(), 47);
    assert_eq!(Background::HI_RED.code(), 101);
}

#[test]
fn defaults_are_terminal_defaults() {
    assert_eq!(Foreground::default(), Foreground::REGULAR);
    assert_eq!(Background::default(), Background::REGULAR);
    assert_eq!(Attributes::default().styles, Vec::<Style>::new());
}

// ============================================================================
// Names
// ============================================================================

#[test]
fn all_basic_names_resolve() {
    let names = [
        "black", "red", "green", "yellow", "blue", "magenta", "cyan", "white",
    ];

    for (index, name) in names.into_iter().enumerate() {
        let index = index as u64;
        assert_eq!(Foreground::from_name(name), Some(Foreground(30 + index)), "{name}");
        assert_eq!(Background::from_name(name), Some(Background(40 + index)), "{name}");

        let bright = format!("bright_{name}");
        assert_eq!(Foreground::from_name(&bright), Some(Foreground(90 + index)), "{bright}");
        assert_eq!(Background::from_name(&bright), Some(Background(100 + index)), "{bright}");
    }
}

#[test]
fn names_ignore_case_and_whitespace() {
    assert_eq!(Foreground::from_name("  RED "), Some(Foreground::RED));
    assert_eq!(Style::from_name("\tItalic"), Some(Style::ITALIC));
}

#[test]
fn parse_full_description() {
    let attrs = Attributes::parse("dim italic hi_green on bright_black").unwrap();
    assert_eq!(attrs.styles, vec![Style::DIM, Style::ITALIC]);
    assert_eq!(attrs.foreground, Foreground::HI_GREEN);
    assert_eq!(attrs.background, Background::HI_BLACK);
}

#[test]
fn parse_last_color_wins() {
    let attrs = Attributes::parse("red blue on white on black").unwrap();
    assert_eq!(attrs.foreground, Foreground::BLUE);
    assert_eq!(attrs.background, Background::BLACK);
}

#[test]
fn parse_errors_display() {
    assert_eq!(
        Attributes::parse("on").unwrap_err().to_string(),
        "missing background color after 'on'"
    );
    assert_eq!(
        Attributes::parse("glow").unwrap_err(),
        ParseError::UnknownStyle("glow".to_string())
    );
}
