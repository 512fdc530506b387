//! Frame to text assembly.

use super::brightness::map_to_char;
use super::dimensions::OutputGrid;
use super::profile::DetailProfile;
use super::sample::{sample_bilinear, ScaleFactors};
use crate::error::{ConfigurationError, RenderError};
use crate::frame::RgbaFrame;

/// Render one frame as text.
///
/// Produces exactly `grid.height` rows of `grid.width` glyphs, each row
/// terminated by `\n` (including the last). Deterministic and side-effect
/// free.
///
/// # Errors
/// Returns a [`ConfigurationError`] if the frame yields an empty grid.
pub fn render_frame(frame: &RgbaFrame<'_>, profile: &DetailProfile) -> Result<String, ConfigurationError> {
    let grid = OutputGrid::for_source(frame.width(), frame.height(), profile)?;
    let mut out = String::with_capacity(text_capacity(grid));
    // No cancellation check, so no row can fail
    render_rows(frame, profile, grid, &mut out, || false);
    Ok(out)
}

/// Render one frame, polling `is_cancelled` before every row.
///
/// Used when a newer request can supersede the render in flight. A
/// cancelled render discards its partial output.
///
/// # Errors
/// * `RenderError::Configuration` - the frame yields an empty grid
/// * `RenderError::Cancelled` - `is_cancelled` returned true
pub fn render_frame_cancellable<F>(
    frame: &RgbaFrame<'_>,
    profile: &DetailProfile,
    is_cancelled: F,
) -> Result<String, RenderError>
where
    F: Fn() -> bool,
{
    let grid = OutputGrid::for_source(frame.width(), frame.height(), profile)?;
    let mut out = String::with_capacity(text_capacity(grid));
    if render_rows(frame, profile, grid, &mut out, is_cancelled) {
        Ok(out)
    } else {
        Err(RenderError::Cancelled)
    }
}

/// Append every row to `out`. Returns false if cancelled part-way.
fn render_rows<F>(
    frame: &RgbaFrame<'_>,
    profile: &DetailProfile,
    grid: OutputGrid,
    out: &mut String,
    is_cancelled: F,
) -> bool
where
    F: Fn() -> bool,
{
    let scale = ScaleFactors::new(frame.width(), frame.height(), grid);
    let ramp = profile.ramp();

    for y in 0..grid.height {
        if is_cancelled() {
            return false;
        }
        for x in 0..grid.width {
            let color = sample_bilinear(frame, x, y, scale);
            out.push(map_to_char(color, ramp));
        }
        out.push('\n');
    }
    true
}

/// Byte capacity for a grid of single-byte glyphs plus newlines.
fn text_capacity(grid: OutputGrid) -> usize {
    grid.cells() + grid.height as usize
}
