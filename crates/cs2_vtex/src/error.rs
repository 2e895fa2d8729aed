//! Error types that can be emitted from this library
//!

use miette::Diagnostic;
use thiserror::Error;

/// Error type for library
#[derive(Error, Diagnostic, Debug)]
pub enum Error {
    /// Transparent wrapper for [`FormatError`]
    #[error(transparent)]
    Format(#[from] FormatError),

    /// payload did not decompress to {expected} bytes: {reason}
    #[error("payload did not decompress to {expected} bytes: {reason}")]
    Decompression { expected: usize, reason: String },
}

/// Error type to provide further information when a texture is structurally invalid
#[derive(Error, Diagnostic, Debug)]
pub enum FormatError {
    /// texture of {0} bytes is too short to hold a header size
    #[error("texture of {0} bytes is too short to hold a header size")]
    Truncated(usize),

    /// header claims {header_size} bytes but the texture only holds {length}
    #[error("header claims {header_size} bytes but the texture only holds {length}")]
    HeaderOverrun { header_size: u32, length: usize },
}

/// Generic result type with crate's Error as its error variant
pub type Result<T> = core::result::Result<T, Error>;
