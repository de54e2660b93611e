//! Colored terminal output.
//!
//! Re-exports the [`palette`] crate and adds the pieces an application needs
//! around it: a file logger for diagnostics and an error type that covers
//! printing, attribute parsing and logger setup.

pub mod error;
pub mod log_init;

pub use error::{PaletteError, Result};
pub use log_init::init_logger;
pub use palette::{
    Attributes, Background, EndMarker, Foreground, Markers, ParseError, PrintError, Printer,
    SharedBuffer, Style, lines, print_styled, sink,
};

// Re-export the log crate so users can use palette_rs::log::info!, etc.
pub use log;
