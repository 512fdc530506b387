//! Decoded frame sources.
//!
//! The renderer never parses GIF bytes itself. It pulls frames through the
//! [`FrameSource`] trait:
//!
//! - [`GifSource`] - decodes a GIF with the `image` crate
//! - [`MemorySource`] - wraps RGBA buffers decoded elsewhere

mod gif;
mod memory;

use std::path::PathBuf;

pub use gif::GifSource;
pub use memory::{MemoryFrame, MemorySource};

/// Per-frame metadata reported by a source.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FrameInfo {
    /// Display delay in hundredths of a second (GIF-native units)
    pub delay: u32,
}

/// Access to the frames of a decoded animation.
///
/// Width and height are constant across frames, and `frame_count` is at
/// least 1 for any source that constructed successfully.
pub trait FrameSource {
    fn frame_count(&self) -> usize;

    fn width(&self) -> u32;

    fn height(&self) -> u32;

    /// Metadata for the frame at `index`.
    fn frame_info(&self, index: usize) -> Result<FrameInfo, DecodeError>;

    /// Fill `out` with `width * height * 4` RGBA bytes for the frame at `index`.
    ///
    /// `out` is cleared first, so callers can reuse one buffer per session.
    fn decode_frame(&mut self, index: usize, out: &mut Vec<u8>) -> Result<(), DecodeError>;
}

/// Errors produced while reading or decoding frames.
#[derive(Debug, thiserror::Error)]
pub enum DecodeError {
    #[error("failed to read '{}': {source}", path.display())]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("malformed image data: {0}")]
    Malformed(#[from] image::ImageError),

    #[error("animation contains no frames")]
    NoFrames,

    #[error("frame {index} out of range ({count} frames)")]
    FrameOutOfRange { index: usize, count: usize },

    #[error("frame {index} holds {actual} bytes, expected {expected}")]
    BufferMismatch {
        index: usize,
        expected: usize,
        actual: usize,
    },
}
