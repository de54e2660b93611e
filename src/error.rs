use thiserror::Error;

#[derive(Error, Debug)]
pub enum PaletteError {
    #[error("Print error: {0}")]
    Print(#[from] palette::PrintError),

    #[error("Attribute error: {0}")]
    Attributes(#[from] palette::ParseError),

    #[error("Logger error: {0}")]
    Logger(#[from] log::SetLoggerError),
}

// Create a type alias for convenience
pub type Result<T> = std::result::Result<T, PaletteError>;
