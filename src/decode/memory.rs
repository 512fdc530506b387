//! In-memory frame source.

use super::{DecodeError, FrameInfo, FrameSource};
use crate::error::{ConfigurationError, RenderError};
use crate::frame::frame_len;

/// One pre-decoded RGBA frame.
#[derive(Debug, Clone)]
pub struct MemoryFrame {
    /// RGBA bytes, `width * height * 4` long
    pub data: Vec<u8>,
    /// Delay in hundredths of a second
    pub delay: u32,
}

impl MemoryFrame {
    pub fn new(data: Vec<u8>, delay: u32) -> Self {
        Self { data, delay }
    }
}

/// Frame source over buffers that were decoded elsewhere.
#[derive(Debug, Clone)]
pub struct MemorySource {
    width: u32,
    height: u32,
    frames: Vec<MemoryFrame>,
}

impl MemorySource {
    /// Build a source, validating dimensions and every buffer length.
    ///
    /// # Errors
    /// * `DecodeError::NoFrames` - `frames` is empty
    /// * `DecodeError::BufferMismatch` - a buffer has the wrong length
    /// * `ConfigurationError::InvalidSourceDimensions` - zero width or height
    pub fn new(
        width: u32,
        height: u32,
        frames: Vec<MemoryFrame>,
    ) -> Result<Self, RenderError> {
        if width == 0 || height == 0 {
            return Err(ConfigurationError::InvalidSourceDimensions { width, height }.into());
        }
        if frames.is_empty() {
            return Err(DecodeError::NoFrames.into());
        }
        let expected = frame_len(width, height);
        for (index, frame) in frames.iter().enumerate() {
            if frame.data.len() != expected {
                return Err(DecodeError::BufferMismatch {
                    index,
                    expected,
                    actual: frame.data.len(),
                }
                .into());
            }
        }
        Ok(Self {
            width,
            height,
            frames,
        })
    }

    fn get(&self, index: usize) -> Result<&MemoryFrame, DecodeError> {
        self.frames.get(index).ok_or(DecodeError::FrameOutOfRange {
            index,
            count: self.frames.len(),
        })
    }
}

impl FrameSource for MemorySource {
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
        self.get(index).map(|f| FrameInfo { delay: f.delay })
    }

    fn decode_frame(&mut self, index: usize, out: &mut Vec<u8>) -> Result<(), DecodeError> {
        let frame = self.get(index)?;
        out.clear();
        out.extend_from_slice(&frame.data);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_validates() {
        assert!(matches!(
            MemorySource::new(0, 1, vec![MemoryFrame::new(vec![], 0)]),
            Err(RenderError::Configuration(_))
        ));
        assert!(matches!(
            MemorySource::new(1, 1, vec![]),
            Err(RenderError::Decode(DecodeError::NoFrames))
        ));
        assert!(matches!(
            MemorySource::new(
                1,
                1,
                vec![
                    MemoryFrame::new(vec![0; 4], 0),
                    MemoryFrame::new(vec![0; 3], 0)
                ]
            ),
            Err(RenderError::Decode(DecodeError::BufferMismatch {
                index: 1,
                expected: 4,
                actual: 3
            }))
        ));
    }

    #[test]
    fn test_decode_and_info() {
        let mut source = MemorySource::new(
            1,
            1,
            vec![
                MemoryFrame::new(vec![1, 2, 3, 4], 8),
                MemoryFrame::new(vec![5, 6, 7, 8], 12),
            ],
        )
        .unwrap();
        assert_eq!(source.frame_count(), 2);
        assert_eq!(source.frame_info(1).unwrap(), FrameInfo { delay: 12 });

        let mut buf = vec![9; 32];
        source.decode_frame(1, &mut buf).unwrap();
        assert_eq!(buf, vec![5, 6, 7, 8]);
    }

    #[test]
    fn test_out_of_range() {
        let mut source =
            MemorySource::new(1, 1, vec![MemoryFrame::new(vec![0; 4], 0)]).unwrap();
        let mut buf = Vec::new();
        assert!(matches!(
            source.decode_frame(3, &mut buf),
            Err(DecodeError::FrameOutOfRange { index: 3, count: 1 })
        ));
        assert!(source.frame_info(1).is_err());
    }
}
