//! Read-only view over a decoded RGBA frame.

use crate::error::ConfigurationError;

/// Bytes per RGBA pixel.
pub const BYTES_PER_PIXEL: usize = 4;

/// A borrowed RGBA pixel buffer (row-major, top to bottom).
///
/// The decoder owns the bytes; the renderer only reads them for the
/// duration of one render.
#[derive(Debug, Clone, Copy)]
pub struct RgbaFrame<'a> {
    data: &'a [u8],
    width: u32,
    height: u32,
}

impl<'a> RgbaFrame<'a> {
    /// Wrap a pixel buffer, checking dimensions and buffer length.
    ///
    /// # Errors
    /// * `InvalidSourceDimensions` - width or height is zero
    /// * `BufferTooSmall` - `data` holds fewer than `width * height * 4` bytes
    pub fn new(data: &'a [u8], width: u32, height: u32) -> Result<Self, ConfigurationError> {
        if width == 0 || height == 0 {
            return Err(ConfigurationError::InvalidSourceDimensions { width, height });
        }
        let expected = frame_len(width, height);
        if data.len() < expected {
            return Err(ConfigurationError::BufferTooSmall {
                expected,
                actual: data.len(),
            });
        }
        Ok(Self {
            data,
            width,
            height,
        })
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    /// RGB channels of the pixel at (x, y). Alpha is ignored.
    ///
    /// Coordinates must be inside the frame.
    #[inline]
    pub fn rgb(&self, x: u32, y: u32) -> [u8; 3] {
        let idx = (y as usize * self.width as usize + x as usize) * BYTES_PER_PIXEL;
        [self.data[idx], self.data[idx + 1], self.data[idx + 2]]
    }
}

/// Byte length of an RGBA buffer of the given size.
pub fn frame_len(width: u32, height: u32) -> usize {
    width as usize * height as usize * BYTES_PER_PIXEL
}
