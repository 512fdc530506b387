//! Frame rendering pipeline: converts RGBA frames to character grids.
//!
//! 1. **Grid sizing** - Output columns fixed by the profile, rows derived
//!    from the source aspect ratio and font aspect ([`OutputGrid`])
//! 2. **Sampling** - Bilinear resampling of each cell ([`sample_bilinear`])
//! 3. **Brightness mapping** - BT.601 luminance quantized onto the ramp
//!    ([`map_to_char`])
//! 4. **Assembly** - Rows joined with newlines ([`render_frame`])
//!
//! # Detail tiers
//!
//! Three presets are available via [`DetailTier`]:
//! - `Standard` - 80 columns, 10-level ramp
//! - `HighResolution` - 160 columns, 10-level ramp
//! - `UltraHd` - 250 columns, 70-level ramp

mod brightness;
mod dimensions;
mod profile;
mod render;
mod sample;

pub use brightness::{char_index, luminance, map_to_char};
pub use dimensions::{OutputGrid, MAX_GRID_ROWS};
pub use profile::{DetailProfile, DetailTier, EXTENDED_RAMP, STANDARD_RAMP};
pub use render::{render_frame, render_frame_cancellable};
pub use sample::{sample_bilinear, SampledColor, ScaleFactors};
