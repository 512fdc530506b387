//! Detail tiers and the character ramps they render with.

use crate::error::ConfigurationError;

/// 10-level ramp, densest glyph first.
pub const STANDARD_RAMP: &str = "@%#*+=-:. ";

/// 70-level ramp used by the ultra-HD tier, densest glyph first.
pub const EXTENDED_RAMP: &str =
    "$@B%8&WM#*oahkbdpqwmZO0QLCJUYXzcvunxrjft/\\|()1{}[]?-_+~<>i!lI;:,\"^`'. ";

/// Named detail tier selected once per viewing session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DetailTier {
    /// 80 columns, 10-level ramp
    #[default]
    Standard,
    /// 160 columns, 10-level ramp
    HighResolution,
    /// 250 columns, 70-level ramp
    UltraHd,
}

impl DetailTier {
    /// All tiers, in increasing detail order.
    pub const ALL: [DetailTier; 3] = [
        DetailTier::Standard,
        DetailTier::HighResolution,
        DetailTier::UltraHd,
    ];

    /// Look up a tier by label.
    ///
    /// Accepts the kebab-case names plus the human-readable labels shown in
    /// pickers ("High-Resolution", "Ultra-HD"). Anything unrecognized maps
    /// to [`DetailTier::Standard`].
    pub fn from_label(label: &str) -> Self {
        let normalized: String = label
            .trim()
            .chars()
            .filter(|c| c.is_ascii_alphanumeric())
            .map(|c| c.to_ascii_lowercase())
            .collect();

        match normalized.as_str() {
            "standard" => DetailTier::Standard,
            "highresolution" | "highres" | "high" => DetailTier::HighResolution,
            "ultrahd" | "ultra" => DetailTier::UltraHd,
            _ => {
                log::warn!("Unknown detail tier '{}', using standard", label);
                DetailTier::Standard
            }
        }
    }

    /// Kebab-case name, as used in config files and on the command line.
    pub fn name(&self) -> &'static str {
        match self {
            DetailTier::Standard => "standard",
            DetailTier::HighResolution => "high-resolution",
            DetailTier::UltraHd => "ultra-hd",
        }
    }

    /// The immutable profile for this tier.
    pub fn profile(&self) -> DetailProfile {
        let (ramp, width, aspect) = match self {
            DetailTier::Standard => (STANDARD_RAMP, 80, 0.6),
            DetailTier::HighResolution => (STANDARD_RAMP, 160, 0.6),
            DetailTier::UltraHd => (EXTENDED_RAMP, 250, 0.5),
        };
        DetailProfile {
            ramp: ramp.chars().collect(),
            target_width: width,
            font_aspect: aspect,
        }
    }
}

/// Character ramp, output width and font aspect correction.
///
/// Fields are private so every value goes through [`DetailProfile::new`]
/// (or a preset) and upholds: ramp of at least 2 glyphs, `target_width > 0`,
/// `font_aspect` positive and finite.
#[derive(Debug, Clone, PartialEq)]
pub struct DetailProfile {
    ramp: Vec<char>,
    target_width: u32,
    font_aspect: f64,
}

impl DetailProfile {
    /// Build a custom profile.
    ///
    /// # Arguments
    /// * `ramp` - Glyphs ordered dark to light; `ramp[0]` is used for black
    /// * `target_width` - Output width in characters
    /// * `font_aspect` - Character cell height/width correction factor
    ///
    /// # Errors
    /// Returns a [`ConfigurationError`] if any invariant is violated.
    pub fn new(ramp: &str, target_width: u32, font_aspect: f64) -> Result<Self, ConfigurationError> {
        let ramp: Vec<char> = ramp.chars().collect();
        if ramp.len() < 2 {
            return Err(ConfigurationError::RampTooShort { len: ramp.len() });
        }
        if target_width == 0 {
            return Err(ConfigurationError::InvalidTargetWidth);
        }
        if !font_aspect.is_finite() || font_aspect <= 0.0 {
            return Err(ConfigurationError::InvalidFontAspect(font_aspect));
        }
        Ok(Self {
            ramp,
            target_width,
            font_aspect,
        })
    }

    pub fn ramp(&self) -> &[char] {
        &self.ramp
    }

    pub fn target_width(&self) -> u32 {
        self.target_width
    }

    pub fn font_aspect(&self) -> f64 {
        self.font_aspect
    }
}

impl Default for DetailProfile {
    fn default() -> Self {
        DetailTier::default().profile()
    }
}

impl From<DetailTier> for DetailProfile {
    fn from(tier: DetailTier) -> Self {
        tier.profile()
    }
}
