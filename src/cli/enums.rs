//! CLI enum types.

use clap::ValueEnum;

use crate::ascii::DetailTier;

/// Detail tier for rendering.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum Tier {
    #[default]
    Standard,
    HighResolution,
    UltraHd,
}

impl From<Tier> for DetailTier {
    fn from(t: Tier) -> Self {
        match t {
            Tier::Standard => DetailTier::Standard,
            Tier::HighResolution => DetailTier::HighResolution,
            Tier::UltraHd => DetailTier::UltraHd,
        }
    }
}
