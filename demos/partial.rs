//! Chained configuration, partial coloring and attribute descriptions.
//!
//! Run with `cargo run --example partial`.

use palette_rs::log::info;
use palette_rs::{Attributes, Background, Foreground, PrintError, Printer, Style, init_logger};

fn main() -> palette_rs::Result<()> {
    init_logger("palette.log")?;

    let mut printer = Printer::new(Foreground::WHITE, Background::RED, [Style::BOLD]);
    printer.set_length(5);
    printer.print_str("ERROR something failed\n")?;

    printer
        .set_foreground(Foreground::BLACK)
        .set_background(Background::YELLOW)
        .set_length(4);
    printer.print_str("WARN disk almost full\n")?;

    // A prefix longer than the text is rejected; fall back to plain output.
    printer.set_length(50);
    if let Err(err @ PrintError::LengthExceedsInput { .. }) = printer.print_str("short\n") {
        info!("falling back to plain output: {err}");
        println!("short");
    }

    let mut described = Printer::from_attributes(Attributes::parse("underline cyan")?);
    described.print_str("described by name\n")?;

    Ok(())
}
