//! Unit tests for the frame rendering pipeline.
//!
//! These tests verify the core rendering algorithms through the public API:
//! - Output grid sizing
//! - Bilinear sampling
//! - Brightness mapping
//! - Frame assembly

use gif_ascii::ascii::*;
use gif_ascii::frame::RgbaFrame;
use gif_ascii::ConfigurationError;

fn rgba(pixels: &[[u8; 3]]) -> Vec<u8> {
    pixels
        .iter()
        .flat_map(|&[r, g, b]| [r, g, b, 255])
        .collect()
}

fn gradient(width: u32, height: u32) -> Vec<u8> {
    let mut data = Vec::with_capacity((width * height * 4) as usize);
    for y in 0..height {
        for x in 0..width {
            let v = ((x + y) * 255 / (width + height - 2).max(1)) as u8;
            data.extend_from_slice(&[v, v, v, 255]);
        }
    }
    data
}

// ==================== Grid Sizing Tests ====================

#[test]
fn test_grid_height_formula() {
    let profile = DetailProfile::new("@ ", 100, 0.5).unwrap();
    // 100 * (30 / 60) / 0.5 = 100
    let grid = OutputGrid::for_source(60, 30, &profile).unwrap();
    assert_eq!(grid.width, 100);
    assert_eq!(grid.height, 100);

    // 100 * (31 / 60) / 0.5 = 103.33
    let grid = OutputGrid::for_source(60, 31, &profile).unwrap();
    assert_eq!(grid.height, 103);
}

#[test]
fn test_grid_rejects_zero_dimensions() {
    for (w, h) in [(0, 0), (0, 5), (5, 0)] {
        assert_eq!(
            OutputGrid::for_source(w, h, &DetailProfile::default()),
            Err(ConfigurationError::InvalidSourceDimensions {
                width: w,
                height: h
            })
        );
    }
}

// ==================== Rendering Tests ====================

#[test]
fn test_checkerboard_scenario() {
    // Top-left/bottom-right black, others white. Scale factors are 1.0, so
    // every cell samples a source pixel exactly.
    let data = rgba(&[[0, 0, 0], [255, 255, 255], [255, 255, 255], [0, 0, 0]]);
    let frame = RgbaFrame::new(&data, 2, 2).unwrap();
    let profile = DetailProfile::new("# ", 2, 1.0).unwrap();

    let text = render_frame(&frame, &profile).unwrap();
    assert_eq!(text, "# \n #\n");
}

#[test]
fn test_upscale_interpolates() {
    // 2x1 black/white source stretched to 4 columns: x = 0, 0.5, 1, 1.5
    let data = rgba(&[[0, 0, 0], [255, 255, 255]]);
    let frame = RgbaFrame::new(&data, 2, 1).unwrap();
    // 4 * (1 / 2) / 2.0 = 1 row
    let profile = DetailProfile::new("@%#*+=-:. ", 4, 2.0).unwrap();

    let text = render_frame(&frame, &profile).unwrap();
    // Cell 1 samples 127.5 -> 128 -> index 4 ('+'); cell 3 clamps to the
    // white column and blends with itself.
    assert_eq!(text, "@+  \n");
}

#[test]
fn test_every_row_has_target_width() {
    let data = gradient(37, 23);
    let frame = RgbaFrame::new(&data, 37, 23).unwrap();
    for tier in DetailTier::ALL {
        let profile = tier.profile();
        let grid = OutputGrid::for_source(37, 23, &profile).unwrap();
        let text = render_frame(&frame, &profile).unwrap();

        assert_eq!(text.lines().count(), grid.height as usize);
        for line in text.lines() {
            assert_eq!(line.chars().count(), profile.target_width() as usize);
        }
        assert!(text.ends_with('\n'));
    }
}

#[test]
fn test_gradient_uses_whole_ramp() {
    let data = gradient(64, 64);
    let frame = RgbaFrame::new(&data, 64, 64).unwrap();
    let profile = DetailTier::Standard.profile();
    let text = render_frame(&frame, &profile).unwrap();

    assert!(text.starts_with('@'), "top-left of gradient is black");
    for glyph in profile.ramp() {
        assert!(text.contains(*glyph), "glyph {:?} missing", glyph);
    }
}

#[test]
fn test_alpha_is_ignored() {
    let opaque = [200, 200, 200, 255];
    let clear = [200, 200, 200, 0];
    let profile = DetailProfile::new("@%#*+=-:. ", 1, 1.0).unwrap();

    let a = render_frame(&RgbaFrame::new(&opaque, 1, 1).unwrap(), &profile).unwrap();
    let b = render_frame(&RgbaFrame::new(&clear, 1, 1).unwrap(), &profile).unwrap();
    assert_eq!(a, b);
}

// ==================== Brightness Mapping Tests ====================

#[test]
fn test_ramp_ends_for_custom_profiles() {
    for ramp in ["# ", "@%#*+=-:. ", EXTENDED_RAMP, "▓▒░ "] {
        let profile = DetailProfile::new(ramp, 10, 1.0).unwrap();
        let chars = profile.ramp();
        let black = SampledColor { r: 0, g: 0, b: 0 };
        let white = SampledColor {
            r: 255,
            g: 255,
            b: 255,
        };
        assert_eq!(map_to_char(black, chars), chars[0]);
        assert_eq!(map_to_char(white, chars), chars[chars.len() - 1]);
    }
}

#[test]
fn test_luminance_order() {
    // Green should produce highest luminance, then red, then blue
    let r = luminance(SampledColor { r: 255, g: 0, b: 0 });
    let g = luminance(SampledColor { r: 0, g: 255, b: 0 });
    let b = luminance(SampledColor { r: 0, g: 0, b: 255 });
    assert!(g > r, "green ({}) should be brighter than red ({})", g, r);
    assert!(r > b, "red ({}) should be brighter than blue ({})", r, b);
}

// ==================== Sampling Tests ====================

#[test]
fn test_sampling_exact_at_integer_coordinates() {
    let pixels: Vec<[u8; 3]> = (0..16u8).map(|i| [i * 10, 255 - i * 10, i]).collect();
    let data = rgba(&pixels);
    let frame = RgbaFrame::new(&data, 4, 4).unwrap();
    // 4x4 onto a 2x2 grid: scale 2.0, cells land on even pixels
    let scale = ScaleFactors::new(4, 4, OutputGrid { width: 2, height: 2 });
    for y in 0..2 {
        for x in 0..2 {
            let expected = pixels[(y * 2 * 4 + x * 2) as usize];
            assert_eq!(sample_bilinear(&frame, x, y, scale), SampledColor::from(expected));
        }
    }
}

#[test]
fn test_sampling_never_reads_past_edge() {
    // Buffer holds exactly width*height pixels; any out-of-bounds read panics
    let data = gradient(3, 5);
    let frame = RgbaFrame::new(&data, 3, 5).unwrap();
    let profile = DetailProfile::new("# ", 7, 0.3).unwrap();
    let grid = OutputGrid::for_source(3, 5, &profile).unwrap();
    let scale = ScaleFactors::new(3, 5, grid);
    for y in 0..grid.height {
        for x in 0..grid.width {
            sample_bilinear(&frame, x, y, scale);
        }
    }
}
