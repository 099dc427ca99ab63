use std::{io, path::PathBuf};

use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("cannot open {} for writing: {source}", path.display())]
    OutputUnavailable {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("failed to write image data: {0}")]
    Write(#[from] io::Error),
    #[error("row has {actual} pixels, expected {expected}")]
    RowLength { expected: usize, actual: usize },
    #[error("image has {actual} rows, expected {expected}")]
    Incomplete { expected: u32, actual: u32 },
}
