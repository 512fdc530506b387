//! Luminance and brightness-to-glyph mapping.

use super::sample::SampledColor;

/// Perceptual luminance using ITU-R BT.601 weights, in `[0.0, 255.0]`.
///
/// `Y = 0.299*R + 0.587*G + 0.114*B`
pub fn luminance(color: SampledColor) -> f64 {
    0.299 * color.r as f64 + 0.587 * color.g as f64 + 0.114 * color.b as f64
}

/// Luminance scaled by 1000, exact in integer math.
///
/// Coefficients scaled by 1000: 299 + 587 + 114 = 1000, so white is 255000.
#[inline]
fn luminance_milli(color: SampledColor) -> u32 {
    299 * color.r as u32 + 587 * color.g as u32 + 114 * color.b as u32
}

/// Ramp index for a color: `floor(Y / 255 * (levels - 1))`.
///
/// Evaluated in integer math so black lands on index 0 and white on the last
/// index with no floating-point drift. The result is clamped to the ramp.
#[inline]
pub fn char_index(color: SampledColor, levels: usize) -> usize {
    if levels == 0 {
        return 0;
    }
    let last = levels - 1;
    let idx = (luminance_milli(color) as u64 * last as u64 / 255_000) as usize;
    idx.min(last)
}

/// Pick the ramp glyph for a sampled color.
///
/// `ramp[0]` is used for black, the last glyph for white. An empty ramp
/// yields a space.
#[inline]
pub fn map_to_char(color: SampledColor, ramp: &[char]) -> char {
    if ramp.is_empty() {
        return ' ';
    }
    ramp[char_index(color, ramp.len())]
}
