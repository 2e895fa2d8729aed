//! Decoding compiled textures into pixels
//!

use byteorder::{LittleEndian, ReadBytesExt};
use tracing::{debug, instrument};

use crate::{
    error::{Error, FormatError, Result},
    types::{PixelBuffer, DECODED_SIZE},
};

/// Decode a compiled radar texture.
///
/// The leading little-endian `u32` gives the size of everything before the pixel payload; the header
/// itself is skipped without being parsed. The payload must decompress to exactly one 1024×1024 RGBA8888
/// image, otherwise nothing is returned.
///
/// ```no_run
/// fn radar_size(blob: &[u8]) -> cs2_vtex::error::Result<(u32, u32)> {
///     let pixels = cs2_vtex::decode(blob)?;
///     Ok((pixels.width(), pixels.height()))
/// }
/// ```
#[instrument(skip_all, fields(length = blob.len()), err)]
pub fn decode(blob: &[u8]) -> Result<PixelBuffer> {
    let mut cursor = blob;
    let header_size = cursor
        .read_u32::<LittleEndian>()
        .map_err(|_| FormatError::Truncated(blob.len()))?;

    if header_size as usize > blob.len() {
        return Err(FormatError::HeaderOverrun {
            header_size,
            length: blob.len(),
        }
        .into());
    }

    let payload = &blob[header_size as usize..];
    debug!(header_size, payload = payload.len(), "located pixel payload");

    let mut pixels = vec![0; DECODED_SIZE];
    let written = lz4_flex::block::decompress_into(payload, &mut pixels).map_err(|e| {
        Error::Decompression {
            expected: DECODED_SIZE,
            reason: e.to_string(),
        }
    })?;

    if written != DECODED_SIZE {
        return Err(Error::Decompression {
            expected: DECODED_SIZE,
            reason: format!("payload produced {written} bytes"),
        });
    }

    Ok(PixelBuffer::from_decoded(pixels))
}
