/*!
Binary PPM (`P6`) output.

A P6 file is a short text header followed by raw `r g b` bytes for every
pixel, row-major from the top-left. There is no framing or row padding, so a
pixel's position in the image is determined entirely by its byte offset.
[`Writer`] only accepts whole rows and checks the row count on
[`Writer::finish`], which keeps that offset mapping intact.

Rows are written as `&[Rgb]` and cast to bytes with
[`bytemuck`](https://docs.rs/bytemuck/latest/bytemuck/), because [`Rgb`] has
the same layout as a P6 pixel.
*/

use std::{
    fs::File,
    io::{BufWriter, Write},
    path::Path,
};

use log::debug;

use crate::{error::Error, pixel::Rgb, screen};

/// Largest channel value; every channel fits in one byte.
pub const MAX_VALUE: u8 = 255;

pub fn header(size: screen::Size) -> String {
    format!("P6\n{} {}\n{}\n", size.width, size.height, MAX_VALUE)
}

pub struct Writer<W: Write> {
    sink: W,
    size: screen::Size,
    rows_written: u32,
}

impl<W: Write> Writer<W> {
    /// Write the header to `sink`. Pixel rows follow with [`Writer::write_row`].
    pub fn new(mut sink: W, size: screen::Size) -> Result<Self, Error> {
        sink.write_all(header(size).as_bytes())?;
        Ok(Self {
            sink,
            size,
            rows_written: 0,
        })
    }

    pub fn size(&self) -> screen::Size {
        self.size
    }

    pub fn write_row(&mut self, row: &[Rgb]) -> Result<(), Error> {
        let expected = self.size.width as usize;
        if row.len() != expected {
            return Err(Error::RowLength {
                expected,
                actual: row.len(),
            });
        }
        if self.rows_written == self.size.height {
            return Err(Error::Incomplete {
                expected: self.size.height,
                actual: self.rows_written + 1,
            });
        }

        self.sink.write_all(bytemuck::cast_slice(row))?;
        self.rows_written += 1;
        Ok(())
    }

    /// Flush and hand back the sink. Fails if fewer rows than the image height were written.
    pub fn finish(mut self) -> Result<W, Error> {
        if self.rows_written != self.size.height {
            return Err(Error::Incomplete {
                expected: self.size.height,
                actual: self.rows_written,
            });
        }
        self.sink.flush()?;
        Ok(self.sink)
    }
}

/// Create (or truncate) the file at `path` and write the header.
pub fn create(path: impl AsRef<Path>, size: screen::Size) -> Result<Writer<BufWriter<File>>, Error> {
    let path = path.as_ref();
    let file = File::create(path).map_err(|source| Error::OutputUnavailable {
        path: path.to_path_buf(),
        source,
    })?;
    debug!("opened {} for {:?}", path.display(), size);
    Writer::new(BufWriter::new(file), size)
}
