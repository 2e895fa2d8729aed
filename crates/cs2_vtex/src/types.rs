use derive_more::derive::Deref;

/// Width of every decoded radar texture
pub const TEXTURE_WIDTH: u32 = 1024;

/// Height of every decoded radar texture
pub const TEXTURE_HEIGHT: u32 = 1024;

/// Red, green, blue and alpha, one byte each
pub const BYTES_PER_PIXEL: usize = 4;

/// Size of the decompressed payload
pub const DECODED_SIZE: usize = TEXTURE_WIDTH as usize * TEXTURE_HEIGHT as usize * BYTES_PER_PIXEL;

/// A decoded texture, row-major RGBA8888
///
/// Dereferences to the raw pixel bytes.
#[derive(Clone, PartialEq, Eq, Deref)]
pub struct PixelBuffer {
    width: u32,
    height: u32,
    #[deref(forward)]
    data: Vec<u8>,
}

impl PixelBuffer {
    /// Wraps fully decoded pixel data, which must hold exactly [`DECODED_SIZE`] bytes.
    pub(crate) fn from_decoded(data: Vec<u8>) -> Self {
        debug_assert_eq!(data.len(), DECODED_SIZE);
        Self {
            width: TEXTURE_WIDTH,
            height: TEXTURE_HEIGHT,
            data,
        }
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    /// Number of pixels in the buffer
    pub fn pixel_count(&self) -> usize {
        self.data.len() / BYTES_PER_PIXEL
    }

    /// RGBA value at column `x` of row `y`, `None` outside the image
    pub fn pixel(&self, x: u32, y: u32) -> Option<[u8; 4]> {
        if x >= self.width || y >= self.height {
            return None;
        }
        let start = (y as usize * self.width as usize + x as usize) * BYTES_PER_PIXEL;
        self.data[start..start + BYTES_PER_PIXEL].try_into().ok()
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.data
    }

    /// Give up the buffer, returning the raw RGBA bytes
    pub fn into_raw(self) -> Vec<u8> {
        self.data
    }
}

impl std::fmt::Debug for PixelBuffer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PixelBuffer")
            .field("width", &self.width)
            .field("height", &self.height)
            .field("bytes", &self.data.len())
            .finish()
    }
}
