//! # VTEX_C Format Documentation
//!
//! This crate decodes the compiled radar textures (`.vtex_c`) shipped with *Counter-Strike 2*. Only the
//! single layout the overview radars use is supported: a 1024×1024 RGBA8888 image stored as one LZ4 block.
//!
//! ## File Structure
//!
//! A compiled texture consists of a header block, followed by the compressed pixel payload which runs to the
//! end of the file.
//!
//! | Offset (bytes) | Field                  | Description                                                |
//! |----------------|------------------------|------------------------------------------------------------|
//! | 0x0000         | Header Size            | 4 bytes: Number of bytes preceding the pixel payload       |
//! | 0x0004         | Header Content         | (Header Size - 4) bytes: Resource blocks, never parsed     |
//! | Header Size    | Payload                | Remaining bytes: LZ4 block compressed pixel data           |
//!
//! ### Payload
//!
//! The payload carries no size field of its own. It decompresses to exactly 1024 × 1024 × 4 = 4,194,304
//! bytes of row-major RGBA8888 pixels; any other outcome is treated as a corrupt texture.
//!
//! ## Additional Information
//!
//! - **File Extension**: `.vtex_c`
//! - **Endianness**: Little-endian for all multi-byte integers
//!

pub mod error;
pub mod read;
pub mod types;

pub use read::decode;
pub use types::PixelBuffer;
