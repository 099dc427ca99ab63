use std::io::{self, Write};

use log::debug;

/// Number of `#` slots in the bar.
pub const BAR_WIDTH: u32 = 60;

/**
Console progress bar.

Draws `[....]`, moves the cursor back to just after the `[` and then prints a
`#` every `height / BAR_WIDTH` rows, overwriting the dots. The first row
always prints a mark. When `height` isn't a multiple of [`BAR_WIDTH`] the bar
can run a few marks past the closing bracket; this is cosmetic.

Output is best-effort: write errors are logged and otherwise ignored so they
can never interrupt a render.
*/
pub struct Progress<W: Write> {
    out: W,
    stride: u32,
}

impl<W: Write> Progress<W> {
    pub fn new(out: W, height: u32) -> Self {
        Self {
            out,
            stride: (height / BAR_WIDTH).max(1),
        }
    }

    pub fn begin(&mut self) {
        let dots = ".".repeat(BAR_WIDTH as usize);
        self.emit(format_args!("[{}]\r[", dots));
    }

    /// Called once per row, in row order.
    pub fn row(&mut self, y: u32) {
        if y % self.stride == 0 {
            self.emit(format_args!("#"));
        }
    }

    pub fn finish(&mut self) {
        self.emit(format_args!("] done.\n"));
    }

    pub fn into_inner(self) -> W {
        self.out
    }

    fn emit(&mut self, args: std::fmt::Arguments) {
        if let Err(err) = self.write_and_flush(args) {
            debug!("progress output failed: {}", err);
        }
    }

    fn write_and_flush(&mut self, args: std::fmt::Arguments) -> io::Result<()> {
        self.out.write_fmt(args)?;
        self.out.flush()
    }
}
