//! ANSI colors and styles for terminal output.
//!
//! This crate wraps text in SGR escape sequences and writes it to a sink.
//! A [`Printer`] holds the attributes (an ordered style list, one foreground
//! and one background) and emits:
//!
//! - `ESC[` + `style;`... + `fg;bg` + `m` before each styled span
//! - `ESC[0m` after it
//!
//! Multi-line text is wrapped line by line so every line carries its own
//! markers. A prefix length styles only the leading characters and leaves
//! the rest plain.
//!
//! # Usage
//!
//! ```
//! use palette::{Background, Foreground, Printer, SharedBuffer, Style};
//!
//! let buffer = SharedBuffer::new();
//! let mut printer = Printer::new(Foreground::GREEN, Background::REGULAR, [Style::BOLD]);
//! printer.set_writer(buffer.clone());
//!
//! palette::print_styled!(printer, "line{}\nline{}\n", 1, 2).unwrap();
//! assert_eq!(
//!     buffer.contents(),
//!     "\x1b[1;32;49mline1\x1b[0m\n\x1b[1;32;49mline2\x1b[0m\n",
//! );
//! ```
//!
//! The crate only emits sequences. It does not detect terminal capabilities
//! or parse existing escapes.

pub mod attr;
pub mod error;
pub mod escape;
pub mod lines;
mod presets;
pub mod printer;
pub mod sink;

// Re-export main types at crate root
pub use attr::{Attributes, Background, Foreground, Style};
pub use error::{ParseError, PrintError};
pub use escape::{EndMarker, Markers};
pub use printer::Printer;
pub use sink::SharedBuffer;
