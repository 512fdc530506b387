//! Frame sequencing and display timing for one viewing session.
//!
//! [`AnimationSequencer`] owns the decoded source, the detail profile and the
//! current frame index. It answers "render frame i" requests synchronously;
//! [`crate::session::Session`] moves it onto a worker thread when requests
//! arrive asynchronously.

use crate::ascii::{render_frame_cancellable, DetailProfile, OutputGrid};
use crate::decode::FrameSource;
use crate::error::RenderError;
use crate::frame::RgbaFrame;

/// Milliseconds per GIF delay unit (1/100 s).
pub const MS_PER_DELAY_UNIT: u32 = 10;

/// Result of the initial render pushed at session start.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InitialRender {
    pub art: String,
    /// Source width in pixels
    pub display_width: u32,
    /// Source height in pixels
    pub display_height: u32,
    pub frame_count: usize,
}

/// One rendered animation frame.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedFrame {
    /// Normalized frame index in `[0, frame_count)`
    pub index: usize,
    pub art: String,
    /// How long to display this frame, in milliseconds
    pub delay_ms: u32,
}

/// Map any requested index, negative or past the end, into `[0, frame_count)`.
///
/// `frame_count` must be at least 1.
pub fn normalize_index(index: i64, frame_count: usize) -> usize {
    index.rem_euclid(frame_count as i64) as usize
}

/// Convert a delay in hundredths of a second to milliseconds.
pub fn delay_to_ms(delay_units: u32) -> u32 {
    delay_units.saturating_mul(MS_PER_DELAY_UNIT)
}

/// Renders frames of one animation on request.
pub struct AnimationSequencer<S> {
    source: S,
    profile: DetailProfile,
    grid: OutputGrid,
    current: usize,
    /// Decode buffer reused across requests
    buffer: Vec<u8>,
}

impl<S: std::fmt::Debug> std::fmt::Debug for AnimationSequencer<S> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AnimationSequencer")
            .field("source", &self.source)
            .field("grid", &self.grid)
            .field("current", &self.current)
            .finish_non_exhaustive()
    }
}

impl<S: FrameSource> AnimationSequencer<S> {
    /// Create a sequencer for a decoded source.
    ///
    /// Validates the source dimensions and output grid before any frame
    /// is sampled.
    ///
    /// # Errors
    /// * `ConfigurationError::InvalidSourceDimensions` - zero width or height
    /// * `ConfigurationError::EmptyGrid` - the profile yields no rows
    /// * `ConfigurationError::GridTooTall` - the profile yields too many rows
    /// * `DecodeError::NoFrames` - the source reports zero frames
    pub fn new(source: S, profile: DetailProfile) -> Result<Self, RenderError> {
        let grid = OutputGrid::for_source(source.width(), source.height(), &profile)?;
        if source.frame_count() == 0 {
            return Err(crate::decode::DecodeError::NoFrames.into());
        }

        log::debug!(
            "Sequencer ready: {}x{} source, {} frame(s), {}x{} grid",
            source.width(),
            source.height(),
            source.frame_count(),
            grid.width,
            grid.height
        );

        Ok(Self {
            source,
            profile,
            grid,
            current: 0,
            buffer: Vec::new(),
        })
    }

    pub fn frame_count(&self) -> usize {
        self.source.frame_count()
    }

    pub fn current_frame(&self) -> usize {
        self.current
    }

    pub fn grid(&self) -> OutputGrid {
        self.grid
    }

    pub fn profile(&self) -> &DetailProfile {
        &self.profile
    }

    pub fn source(&self) -> &S {
        &self.source
    }

    /// Render frame 0 and reset the current index.
    pub fn render_initial(&mut self) -> Result<InitialRender, RenderError> {
        let frame = self.request_frame(0)?;
        Ok(InitialRender {
            art: frame.art,
            display_width: self.source.width(),
            display_height: self.source.height(),
            frame_count: self.source.frame_count(),
        })
    }

    /// Render the frame at `index`, wrapped into range.
    ///
    /// `request_frame(frame_count)` is the same as `request_frame(0)`, and
    /// `request_frame(-1)` is the last frame.
    pub fn request_frame(&mut self, index: i64) -> Result<RenderedFrame, RenderError> {
        self.request_frame_cancellable(index, || false)
    }

    /// Like [`request_frame`](Self::request_frame), but polls `is_cancelled`
    /// while rendering. The current index only moves on success.
    pub fn request_frame_cancellable<F>(
        &mut self,
        index: i64,
        is_cancelled: F,
    ) -> Result<RenderedFrame, RenderError>
    where
        F: Fn() -> bool,
    {
        let index = normalize_index(index, self.source.frame_count());
        let info = self.source.frame_info(index)?;
        self.source.decode_frame(index, &mut self.buffer)?;

        let frame = RgbaFrame::new(&self.buffer, self.source.width(), self.source.height())?;
        let art = render_frame_cancellable(&frame, &self.profile, is_cancelled)?;

        self.current = index;
        Ok(RenderedFrame {
            index,
            art,
            delay_ms: delay_to_ms(info.delay),
        })
    }

    /// Render the frame after the current one, wrapping at the end.
    pub fn next_frame(&mut self) -> Result<RenderedFrame, RenderError> {
        let next = self.current as i64 + 1;
        self.request_frame(next)
    }

    /// Render every frame once, in order.
    ///
    /// Stops at the first decode failure.
    pub fn render_all(&mut self) -> Result<Vec<RenderedFrame>, RenderError> {
        (0..self.source.frame_count() as i64)
            .map(|i| self.request_frame(i))
            .collect()
    }
}
