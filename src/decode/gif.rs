//! GIF decoding via the `image` crate.

use std::io::Cursor;
use std::path::Path;

use image::codecs::gif::GifDecoder;
use image::{AnimationDecoder, Delay, ImageDecoder, RgbaImage};

use super::{DecodeError, FrameInfo, FrameSource};

/// A fully decoded GIF.
///
/// Every frame is composited onto the logical screen, so each buffer is a
/// complete `width * height` RGBA image.
pub struct GifSource {
    width: u32,
    height: u32,
    frames: Vec<RgbaImage>,
    delays: Vec<u32>,
}

impl std::fmt::Debug for GifSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GifSource")
            .field("width", &self.width)
            .field("height", &self.height)
            .field("frames", &self.frames.len())
            .finish_non_exhaustive()
    }
}

impl GifSource {
    /// Read and decode a GIF file.
    pub fn open(path: impl AsRef<Path>) -> Result<Self, DecodeError> {
        let path = path.as_ref();
        let bytes = std::fs::read(path).map_err(|e| DecodeError::Io {
            path: path.to_path_buf(),
            source: e,
        })?;
        log::debug!("Read {} bytes from {}", bytes.len(), path.display());
        Self::from_bytes(&bytes)
    }

    /// Decode a GIF held in memory.
    ///
    /// All frames are decoded up front, so a malformed stream fails here
    /// rather than part-way through playback.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, DecodeError> {
        let decoder = GifDecoder::new(Cursor::new(bytes))?;
        let (width, height) = decoder.dimensions();

        let frames = decoder.into_frames().collect_frames()?;
        if frames.is_empty() {
            return Err(DecodeError::NoFrames);
        }

        let mut buffers = Vec::with_capacity(frames.len());
        let mut delays = Vec::with_capacity(frames.len());
        for frame in frames {
            delays.push(delay_to_centis(frame.delay()));
            buffers.push(frame.into_buffer());
        }

        log::info!(
            "Decoded GIF: {}x{}, {} frame(s)",
            width,
            height,
            buffers.len()
        );

        Ok(Self {
            width,
            height,
            frames: buffers,
            delays,
        })
    }

    fn check_index(&self, index: usize) -> Result<(), DecodeError> {
        if index < self.frames.len() {
            Ok(())
        } else {
            Err(DecodeError::FrameOutOfRange {
                index,
                count: self.frames.len(),
            })
        }
    }
}

/// Convert a frame delay to hundredths of a second, rounding to nearest.
fn delay_to_centis(delay: Delay) -> u32 {
    let (numer, denom) = delay.numer_denom_ms();
    if denom == 0 {
        return 0;
    }
    let numer = numer as u64;
    let denom = denom as u64;
    ((numer + 5 * denom) / (10 * denom)) as u32
}

impl FrameSource for GifSource {
    fn frame_count(&self) -> usize {
        self.frames.len()
    }

    fn width(&self) -> u32 {
        self.width
    }

    fn height(&self) -> u32 {
        self.height
    }

    fn frame_info(&self, index: usize) -> Result<FrameInfo, DecodeError> {
        self.check_index(index)?;
        Ok(FrameInfo {
            delay: self.delays[index],
        })
    }

    fn decode_frame(&mut self, index: usize, out: &mut Vec<u8>) -> Result<(), DecodeError> {
        self.check_index(index)?;
        let raw = self.frames[index].as_raw();
        let expected = crate::frame::frame_len(self.width, self.height);
        if raw.len() != expected {
            return Err(DecodeError::BufferMismatch {
                index,
                expected,
                actual: raw.len(),
            });
        }
        out.clear();
        out.extend_from_slice(raw);
        Ok(())
    }
}
