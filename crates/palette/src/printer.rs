//! The styled printer.
//!
//! A [`Printer`] owns a sink and an attribute set. Each print interpolates
//! its template once, wraps the result in escape markers derived from the
//! current attributes, and hands the whole styled string to the sink in a
//! single write loop.

use std::borrow::Cow;
use std::fmt;
use std::io::{self, Write};

use crate::attr::{Attributes, Background, Foreground, Style};
use crate::error::PrintError;
use crate::escape::{EndMarker, Markers};
use crate::lines;
use crate::sink::{self, Sink};

/// Writes text wrapped in terminal attribute sequences.
///
/// Setters take `&mut self` and return it, so configuration chains:
///
/// ```
/// use palette::{Background, Foreground, Printer, SharedBuffer, Style};
///
/// let buffer = SharedBuffer::new();
/// let mut printer = Printer::new(Foreground::GREEN, Background::REGULAR, [Style::BOLD]);
/// printer.set_writer(buffer.clone()).set_length(2);
///
/// palette::print_styled!(printer, "OK {}", "done").unwrap();
/// assert_eq!(buffer.contents(), "\x1b[1;32;49mOK\x1b[0m done");
/// ```
pub struct Printer {
    pub(crate) writer: Sink,
    styles: Vec<Style>,
    foreground: Foreground,
    background: Background,
    /// Leading characters to style; 0 styles everything.
    length: usize,
    end_marker: EndMarker,
}

impl Printer {
    /// Create a printer writing to standard output.
    pub fn new(
        foreground: Foreground,
        background: Background,
        styles: impl IntoIterator<Item = Style>,
    ) -> Self {
        Self {
            writer: sink::stdout(),
            styles: styles.into_iter().collect(),
            foreground,
            background,
            length: 0,
            end_marker: EndMarker::default(),
        }
    }

    /// Create a printer writing to standard output from a parsed attribute set.
    pub fn from_attributes(attrs: Attributes) -> Self {
        let Attributes {
            styles,
            foreground,
            background,
        } = attrs;
        Self::new(foreground, background, styles)
    }

    pub fn set_writer(&mut self, writer: impl Write + Send + 'static) -> &mut Self {
        self.writer = Box::new(writer);
        self
    }

    /// Replace the whole style list.
    pub fn set_styles(&mut self, styles: impl IntoIterator<Item = Style>) -> &mut Self {
        self.styles = styles.into_iter().collect();
        self
    }

    pub fn set_foreground(&mut self, foreground: Foreground) -> &mut Self {
        self.foreground = foreground;
        self
    }

    pub fn set_background(&mut self, background: Background) -> &mut Self {
        self.background = background;
        self
    }

    /// Style only the first `length` characters of each print; the rest is
    /// written plain. `0` styles the whole text.
    pub fn set_length(&mut self, length: usize) -> &mut Self {
        self.length = length;
        self
    }

    pub fn set_end_marker(&mut self, end_marker: EndMarker) -> &mut Self {
        self.end_marker = end_marker;
        self
    }

    pub fn styles(&self) -> &[Style] {
        &self.styles
    }

    pub fn foreground(&self) -> Foreground {
        self.foreground
    }

    pub fn background(&self) -> Background {
        self.background
    }

    pub fn length(&self) -> usize {
        self.length
    }

    pub fn end_marker(&self) -> EndMarker {
        self.end_marker
    }

    /// The markers the next print will use.
    pub fn markers(&self) -> Markers {
        Markers::new(
            &self.styles,
            self.foreground,
            self.background,
            self.end_marker,
        )
    }

    /// Compose the styled form of `text` without writing it.
    ///
    /// With a prefix length set, the first `length` characters are wrapped
    /// and the remainder follows unstyled. Otherwise every line is wrapped
    /// on its own, with its `\n` kept outside the markers.
    pub fn render(&self, text: &str) -> Result<String, PrintError> {
        let markers = self.markers();

        if self.length > 0 {
            return self.render_prefix(text, &markers);
        }

        if !lines::is_multiline(text) {
            let mut out = String::with_capacity(text.len() + markers.overhead());
            markers.wrap_into(&mut out, text);
            return Ok(out);
        }

        let mut out = String::with_capacity(text.len() + 2 * markers.overhead());
        for segment in lines::segments(text) {
            let (content, terminator) = segment.split_terminator();
            markers.wrap_into(&mut out, content);
            out.push_str(terminator);
        }
        Ok(out)
    }

    fn render_prefix(&self, text: &str, markers: &Markers) -> Result<String, PrintError> {
        let input = text.chars().count();
        if self.length > input {
            return Err(PrintError::LengthExceedsInput {
                length: self.length,
                input,
            });
        }

        // Character count to byte offset, so multi-byte text splits cleanly.
        let split = text
            .char_indices()
            .nth(self.length)
            .map_or(text.len(), |(offset, _)| offset);
        let (styled, plain) = text.split_at(split);

        let mut out = String::with_capacity(text.len() + markers.overhead());
        markers.wrap_into(&mut out, styled);
        out.push_str(plain);
        Ok(out)
    }

    /// Interpolate `args`, style the result and write it to the sink.
    ///
    /// Returns the number of bytes written. Usually called through
    /// [`print_styled!`](crate::print_styled).
    pub fn print(&mut self, args: fmt::Arguments<'_>) -> Result<usize, PrintError> {
        let text = match args.as_str() {
            Some(literal) => Cow::Borrowed(literal),
            None => Cow::Owned(fmt::format(args)),
        };
        self.print_str(&text)
    }

    /// Style `text` as is and write it to the sink.
    pub fn print_str(&mut self, text: &str) -> Result<usize, PrintError> {
        let output = self.render(text).inspect_err(|err| {
            log::debug!("palette: not printing: {err}");
        })?;

        let written = write_counted(&mut self.writer, output.as_bytes()).inspect_err(|err| {
            log::debug!("palette: {err}");
        })?;

        log::trace!(
            "palette: wrote {written} bytes, {} line(s)",
            lines::segments(text).count()
        );
        Ok(written)
    }
}

impl fmt::Debug for Printer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Printer")
            .field("styles", &self.styles)
            .field("foreground", &self.foreground)
            .field("background", &self.background)
            .field("length", &self.length)
            .field("end_marker", &self.end_marker)
            .finish_non_exhaustive()
    }
}

/// Write all of `buf`, counting what the sink accepted before any failure.
fn write_counted(writer: &mut dyn Write, mut buf: &[u8]) -> Result<usize, PrintError> {
    let mut written = 0;

    while !buf.is_empty() {
        match writer.write(buf) {
            Ok(0) => {
                return Err(PrintError::Sink {
                    written,
                    source: io::Error::new(
                        io::ErrorKind::WriteZero,
                        "failed to write whole buffer",
                    ),
                });
            }
            Ok(n) => {
                written += n;
                buf = &buf[n..];
            }
            Err(err) if err.kind() == io::ErrorKind::Interrupted => {}
            Err(source) => return Err(PrintError::Sink { written, source }),
        }
    }

    writer
        .flush()
        .map_err(|source| PrintError::Sink { written, source })?;
    Ok(written)
}

/// Print with `format!`-style arguments.
///
/// Expands to `printer.print(format_args!(...))` and returns its result.
///
/// ```
/// use palette::{Background, Foreground, Printer, SharedBuffer};
///
/// let buffer = SharedBuffer::new();
/// let mut printer = Printer::new(Foreground::BLUE, Background::REGULAR, []);
/// printer.set_writer(buffer.clone());
/// palette::print_styled!(printer, "{} items", 3).unwrap();
/// assert_eq!(buffer.contents(), "\x1b[34;49m3 items\x1b[0m");
/// ```
#[macro_export]
macro_rules! print_styled {
    ($printer:expr, $($arg:tt)*) => {
        $printer.print(::std::format_args!($($arg)*))
    };
}
