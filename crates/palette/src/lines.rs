//! Line segmentation for multi-line output.
//!
//! Every visual line gets its own start and end markers so colors survive
//! pagers, logs and copy-paste. Segments keep their `\n`, so joining them
//! gives back the input unchanged.

/// The line terminator. A preceding `\r` is treated as content.
pub const TERMINATOR: char = '\n';

/// One line of text together with its terminator, if it had one.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Segment<'a> {
    raw: &'a str,
}

impl<'a> Segment<'a> {
    /// The segment exactly as it appears in the input.
    pub fn as_str(&self) -> &'a str {
        self.raw
    }

    /// Split into content and terminator (`""` for the final unterminated
    /// line).
    pub fn split_terminator(&self) -> (&'a str, &'a str) {
        match self.raw.strip_suffix(TERMINATOR) {
            Some(content) => (content, &self.raw[content.len()..]),
            None => (self.raw, ""),
        }
    }
}

/// Returns true if `text` spans more than one segment boundary.
pub fn is_multiline(text: &str) -> bool {
    text.contains(TERMINATOR)
}

/// Split `text` after each terminator.
///
/// A trailing terminator does not produce an empty final segment.
///
/// # Examples
///
/// ```
/// use palette::lines::segments;
///
/// let parts: Vec<_> = segments("a\nb\n").map(|s| s.as_str()).collect();
/// assert_eq!(parts, ["a\n", "b\n"]);
/// ```
pub fn segments(text: &str) -> impl Iterator<Item = Segment<'_>> {
    text.split_inclusive(TERMINATOR).map(|raw| Segment { raw })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn raw(text: &str) -> Vec<&str> {
        segments(text).map(|s| s.as_str()).collect()
    }

    #[test]
    fn trailing_terminator_has_no_empty_segment() {
        assert_eq!(raw("line1\nline2\n"), ["line1\n", "line2\n"]);
    }

    #[test]
    fn unterminated_last_line_is_kept() {
        assert_eq!(raw("line1\nline2"), ["line1\n", "line2"]);
    }

    #[test]
    fn blank_lines_are_segments() {
        assert_eq!(raw("\n\nx"), ["\n", "\n", "x"]);
    }

    #[test]
    fn empty_text_has_no_segments() {
        assert!(raw("").is_empty());
    }

    #[test]
    fn segments_rejoin_to_input() {
        for text in ["a\nb", "a\n\nb\n", "\n", "héllo\r\nwörld\n"] {
            assert_eq!(raw(text).concat(), text);
        }
    }

    #[test]
    fn split_terminator_keeps_carriage_return() {
        let parts: Vec<_> = segments("a\r\nb")
            .map(|s| s.split_terminator())
            .collect();
        assert_eq!(parts, [("a\r", "\n"), ("b", "")]);
    }

    #[test]
    fn multiline_detection() {
        assert!(!is_multiline("single"));
        assert!(is_multiline("trailing\n"));
    }
}
