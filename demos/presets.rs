//! Print one message with each preset printer.
//!
//! Run with `cargo run --example presets`. Diagnostics go to `palette.log`.

use palette_rs::{Printer, init_logger, print_styled};

fn main() -> palette_rs::Result<()> {
    init_logger("palette.log")?;

    print_styled!(Printer::regular(), "regular: {}\n", "nothing special")?;
    print_styled!(Printer::success(), "success: {} files copied\n", 12)?;
    print_styled!(Printer::info(), "info: cache at {}\n", "/tmp/cache")?;
    print_styled!(Printer::warning(), "warning: {}% disk used\n", 91)?;
    print_styled!(Printer::error(), "error: first line\nerror: second line\n")?;

    Ok(())
}
