//! Output grid calculation with font aspect correction.

use super::profile::DetailProfile;
use crate::error::ConfigurationError;

/// Upper bound on output rows. A 1x65535 GIF at the widest tier would
/// otherwise ask for gigabytes of text.
pub const MAX_GRID_ROWS: u32 = 10_000;

/// Size of the rendered character grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OutputGrid {
    /// Columns (characters per row)
    pub width: u32,
    /// Rows
    pub height: u32,
}

impl OutputGrid {
    /// Derive the grid for a source image under a profile.
    ///
    /// The width is fixed by the profile. The height keeps the source aspect
    /// ratio and divides by the font aspect, since character cells are
    /// taller than they are wide:
    ///
    /// `height = floor(target_width * (src_height / src_width) / font_aspect)`
    ///
    /// # Errors
    /// * `InvalidSourceDimensions` - source width or height is zero
    /// * `EmptyGrid` - the formula yields zero rows (very wide sources)
    /// * `GridTooTall` - the formula yields more than [`MAX_GRID_ROWS`] rows
    pub fn for_source(
        src_width: u32,
        src_height: u32,
        profile: &DetailProfile,
    ) -> Result<Self, ConfigurationError> {
        if src_width == 0 || src_height == 0 {
            return Err(ConfigurationError::InvalidSourceDimensions {
                width: src_width,
                height: src_height,
            });
        }

        let width = profile.target_width();
        let aspect = src_height as f64 / src_width as f64;
        let rows = (width as f64 * aspect / profile.font_aspect()).floor();

        if rows < 1.0 {
            return Err(ConfigurationError::EmptyGrid {
                width: src_width,
                height: src_height,
            });
        }

        if rows > MAX_GRID_ROWS as f64 {
            return Err(ConfigurationError::GridTooTall {
                rows: rows as u64,
                max: MAX_GRID_ROWS,
            });
        }

        Ok(Self {
            width,
            height: rows as u32,
        })
    }

    /// Number of cells in the grid.
    pub fn cells(&self) -> usize {
        self.width as usize * self.height as usize
    }
}
