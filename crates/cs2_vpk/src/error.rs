//! Error types that can be emitted from this library

use std::path::PathBuf;

use miette::Diagnostic;
use thiserror::Error;

/// Error type for library
#[derive(Error, Diagnostic, Debug)]
pub enum Error {
    /// Transparent wrapper for [`std::io::Error`]
    #[error(transparent)]
    IOError(#[from] std::io::Error),

    /// Transparent wrapper for [`binrw::Error`] values that are not plain I/O failures
    #[error(transparent)]
    BinRWError(binrw::Error),

    /// unable to open shard {shard} at {path}
    #[error("unable to open shard {shard} at {path}")]
    ShardIo {
        shard: u16,
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// shard {shard} holds {available} bytes, cannot read {length} bytes at offset {offset}
    #[error("shard {shard} holds {available} bytes, cannot read {length} bytes at offset {offset}")]
    ShortRead {
        shard: u16,
        offset: u32,
        length: u32,
        available: u64,
    },

    /// Transparent wrapper for [`FormatError`]
    #[error(transparent)]
    Format(#[from] FormatError),
}

impl From<binrw::Error> for Error {
    fn from(value: binrw::Error) -> Self {
        match value {
            binrw::Error::Io(e) => Error::IOError(e),
            other => Error::BinRWError(other),
        }
    }
}

/// Error type to provide further information when the directory tree is structurally invalid
#[derive(Error, Diagnostic, Debug)]
pub enum FormatError {
    /// string starting at offset {0} runs past the end of the file
    #[error("string starting at offset {0} runs past the end of the file")]
    UnterminatedString(u64),

    /// preload data of {path} declares {declared} bytes but only {available} remain
    #[error("preload data of {path} declares {declared} bytes but only {available} remain")]
    PreloadOverrun {
        path: String,
        declared: u16,
        available: u64,
    },

    /// entry {path} has terminator {found:#06x} at offset {offset}
    #[error("entry {path} has terminator {found:#06x} at offset {offset}, expected 0xffff")]
    InvalidTerminator { path: String, offset: u64, found: u16 },

    /// {0} is not a directory file name ending in `_dir.vpk`
    #[error("{0} is not a directory file name ending in `_dir.vpk`")]
    InvalidIndexName(PathBuf),
}

/// Generic result type with crate's Error as its error variant
pub type Result<T> = core::result::Result<T, Error>;
