//! Bilinear resampling of source pixels onto the character grid.

use super::dimensions::OutputGrid;
use crate::frame::RgbaFrame;

/// RGB color sampled for one output cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SampledColor {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl From<[u8; 3]> for SampledColor {
    fn from([r, g, b]: [u8; 3]) -> Self {
        Self { r, g, b }
    }
}

/// Source pixels per output cell, computed independently per axis.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScaleFactors {
    pub horizontal: f64,
    pub vertical: f64,
}

impl ScaleFactors {
    pub fn new(src_width: u32, src_height: u32, grid: OutputGrid) -> Self {
        Self {
            horizontal: src_width as f64 / grid.width as f64,
            vertical: src_height as f64 / grid.height as f64,
        }
    }
}

/// Sample the source color for output cell (x, y).
///
/// The cell maps to source coordinate `(x * h, y * v)`. The four surrounding
/// pixels are blended by the fractional offsets; the right/bottom neighbors
/// are clamped to the last column/row, so edge cells never read outside the
/// frame. At integer source coordinates the result is the source pixel
/// itself.
pub fn sample_bilinear(frame: &RgbaFrame<'_>, x: u32, y: u32, scale: ScaleFactors) -> SampledColor {
    let max_x = frame.width() - 1;
    let max_y = frame.height() - 1;

    let src_x = x as f64 * scale.horizontal;
    let src_y = y as f64 * scale.vertical;

    let x1 = (src_x.floor() as u32).min(max_x);
    let y1 = (src_y.floor() as u32).min(max_y);
    let x2 = (x1 + 1).min(max_x);
    let y2 = (y1 + 1).min(max_y);

    let x_frac = src_x - x1 as f64;
    let y_frac = src_y - y1 as f64;

    let p11 = frame.rgb(x1, y1);
    let p21 = frame.rgb(x2, y1);
    let p12 = frame.rgb(x1, y2);
    let p22 = frame.rgb(x2, y2);

    let mut out = [0u8; 3];
    for c in 0..3 {
        let top = p11[c] as f64 * (1.0 - x_frac) + p21[c] as f64 * x_frac;
        let bottom = p12[c] as f64 * (1.0 - x_frac) + p22[c] as f64 * x_frac;
        let value = top * (1.0 - y_frac) + bottom * y_frac;
        out[c] = value.round().clamp(0.0, 255.0) as u8;
    }

    out.into()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rgba(pixels: &[[u8; 3]]) -> Vec<u8> {
        pixels
            .iter()
            .flat_map(|&[r, g, b]| [r, g, b, 255])
            .collect()
    }

    #[test]
    fn test_integer_coordinates_are_exact() {
        let data = rgba(&[[10, 20, 30], [40, 50, 60], [70, 80, 90], [100, 110, 120]]);
        let frame = RgbaFrame::new(&data, 2, 2).unwrap();
        let scale = ScaleFactors {
            horizontal: 1.0,
            vertical: 1.0,
        };
        assert_eq!(sample_bilinear(&frame, 0, 0, scale), SampledColor::from([10, 20, 30]));
        assert_eq!(sample_bilinear(&frame, 1, 0, scale), SampledColor::from([40, 50, 60]));
        assert_eq!(sample_bilinear(&frame, 0, 1, scale), SampledColor::from([70, 80, 90]));
        assert_eq!(sample_bilinear(&frame, 1, 1, scale), SampledColor::from([100, 110, 120]));
    }

    #[test]
    fn test_midpoint_blends_horizontally() {
        // 4x1 source onto 8 columns: cell 1 maps to x = 0.5
        let data = rgba(&[[0, 0, 0], [100, 200, 255], [0, 0, 0], [0, 0, 0]]);
        let frame = RgbaFrame::new(&data, 4, 1).unwrap();
        let scale = ScaleFactors {
            horizontal: 0.5,
            vertical: 1.0,
        };
        assert_eq!(sample_bilinear(&frame, 1, 0, scale), SampledColor::from([50, 100, 128]));
    }

    #[test]
    fn test_center_of_four_pixels() {
        let data = rgba(&[[0, 0, 0], [255, 255, 255], [255, 255, 255], [0, 0, 0]]);
        let frame = RgbaFrame::new(&data, 2, 2).unwrap();
        let scale = ScaleFactors {
            horizontal: 0.5,
            vertical: 0.5,
        };
        // (0.5, 0.5) averages all four corners: 127.5 rounds up
        assert_eq!(sample_bilinear(&frame, 1, 1, scale), SampledColor::from([128, 128, 128]));
    }

    #[test]
    fn test_last_column_and_row_clamp() {
        // Scale of 1.5 on a 3x3 source puts cell 1 at 1.5 and cell 2 at 3.0
        let data = rgba(&[[9, 9, 9]; 9]);
        let frame = RgbaFrame::new(&data, 3, 3).unwrap();
        let scale = ScaleFactors {
            horizontal: 1.5,
            vertical: 1.5,
        };
        // Would index column/row 3 without the clamp
        assert_eq!(sample_bilinear(&frame, 2, 2, scale), SampledColor::from([9, 9, 9]));
        assert_eq!(sample_bilinear(&frame, 1, 1, scale), SampledColor::from([9, 9, 9]));
    }

    #[test]
    fn test_single_pixel_source() {
        let data = rgba(&[[1, 2, 3]]);
        let frame = RgbaFrame::new(&data, 1, 1).unwrap();
        let grid = OutputGrid { width: 4, height: 3 };
        let scale = ScaleFactors::new(1, 1, grid);
        for y in 0..3 {
            for x in 0..4 {
                assert_eq!(sample_bilinear(&frame, x, y, scale), SampledColor::from([1, 2, 3]));
            }
        }
    }

    #[test]
    fn test_scale_factors() {
        let scale = ScaleFactors::new(320, 240, OutputGrid { width: 80, height: 133 });
        assert_eq!(scale.horizontal, 4.0);
        assert!((scale.vertical - 240.0 / 133.0).abs() < 1e-12);
    }
}
