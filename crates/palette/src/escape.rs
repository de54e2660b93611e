//! Start and end escape sequences.
//!
//! The start marker selects every configured attribute in a single SGR
//! sequence: `ESC [ style; ... fg ; bg m`. The end marker resets them.

use std::fmt::Write;

use crate::attr::{Background, Foreground, Style};

/// Which reset sequence closes a styled span.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum EndMarker {
    /// `ESC[0m`
    #[default]
    Reset,
    /// `ESC[0;0;0m`, emitted by older releases.
    Legacy,
}

impl EndMarker {
    pub fn as_str(self) -> &'static str {
        match self {
            EndMarker::Reset => "\x1b[0m",
            EndMarker::Legacy => "\x1b[0;0;0m",
        }
    }
}

/// The pair of sequences wrapped around every styled span.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Markers {
    start: String,
    end: &'static str,
}

impl Markers {
    /// Build the markers for the given attributes.
    ///
    /// # Examples
    ///
    /// ```
    /// use palette::{Background, EndMarker, Foreground, Markers, Style};
    ///
    /// let markers = Markers::new(
    ///     &[Style::BOLD],
    ///     Foreground::RED,
    ///     Background::REGULAR,
    ///     EndMarker::Reset,
    /// );
    /// assert_eq!(markers.start(), "\x1b[1;31;49m");
    /// assert_eq!(markers.end(), "\x1b[0m");
    /// ```
    pub fn new(
        styles: &[Style],
        foreground: Foreground,
        background: Background,
        end: EndMarker,
    ) -> Self {
        // "ESC[" + "m" plus up to four bytes per code.
        let mut start = String::with_capacity(3 + 4 * (styles.len() + 2));
        start.push_str("\x1b[");
        for style in styles {
            // Writing to a String cannot fail.
            let _ = write!(start, "{style};");
        }
        let _ = write!(start, "{foreground};{background}m");

        Self {
            start,
            end: end.as_str(),
        }
    }

    pub fn start(&self) -> &str {
        &self.start
    }

    pub fn end(&self) -> &str {
        self.end
    }

    /// Combined length of both markers in bytes.
    pub fn overhead(&self) -> usize {
        self.start.len() + self.end.len()
    }

    /// Append `start + content + end` to `out`.
    pub fn wrap_into(&self, out: &mut String, content: &str) {
        out.push_str(&self.start);
        out.push_str(content);
        out.push_str(self.end);
    }
}
