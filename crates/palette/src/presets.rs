//! Ready-made printers for common message kinds.

use crate::attr::{Background, Foreground, Style};
use crate::printer::Printer;
use crate::sink;

impl Printer {
    /// Default colors, regular style.
    pub fn regular() -> Self {
        Printer::new(Foreground::REGULAR, Background::REGULAR, [Style::REGULAR])
    }

    /// Bold green.
    pub fn success() -> Self {
        Printer::new(Foreground::GREEN, Background::REGULAR, [Style::BOLD])
    }

    /// Bold blue.
    pub fn info() -> Self {
        Printer::new(Foreground::BLUE, Background::REGULAR, [Style::BOLD])
    }

    /// Bold yellow.
    pub fn warning() -> Self {
        Printer::new(Foreground::YELLOW, Background::REGULAR, [Style::BOLD])
    }

    /// Bold red, written to standard error.
    pub fn error() -> Self {
        let mut printer = Printer::new(Foreground::RED, Background::REGULAR, [Style::BOLD]);
        printer.writer = sink::stderr();
        printer
    }
}
