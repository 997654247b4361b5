//! Parameter categories
//!
//! Categories group parameters for filtering and for the section banners of
//! the driver file. They play no part in validation.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Grouping tag of a parameter.
///
/// The declaration order is the enumeration order used by every filtered
/// view, so `Ord` follows it.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Category {
    General,
    Grid,
    Bathymetry,
    Time,
    Output,
    Physics,
    Breaking,
    Numerics,
    Periodic,
    SpongeLayer,
    Tides,
    Statistics,
    Stations,
    WaveMaker,
    ObsAndBrkwtr,
    HotStart,
    Parallel,
    Vessel,
    DeepDraft,
    Sediment,
    Meteo,
    Lagrangian,
}

impl Category {
    pub const ALL: [Category; 22] = [
        Category::General,
        Category::Grid,
        Category::Bathymetry,
        Category::Time,
        Category::Output,
        Category::Physics,
        Category::Breaking,
        Category::Numerics,
        Category::Periodic,
        Category::SpongeLayer,
        Category::Tides,
        Category::Statistics,
        Category::Stations,
        Category::WaveMaker,
        Category::ObsAndBrkwtr,
        Category::HotStart,
        Category::Parallel,
        Category::Vessel,
        Category::DeepDraft,
        Category::Sediment,
        Category::Meteo,
        Category::Lagrangian,
    ];

    /// Core categories, always part of a filtered view.
    pub fn is_essential(&self) -> bool {
        matches!(
            self,
            Category::General
                | Category::Grid
                | Category::Bathymetry
                | Category::Time
                | Category::Output
                | Category::Physics
                | Category::Numerics
        )
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Category::General => "GENERAL",
            Category::Grid => "GRID",
            Category::Bathymetry => "BATHYMETRY",
            Category::Time => "TIME",
            Category::Output => "OUTPUT",
            Category::Physics => "PHYSICS",
            Category::Breaking => "BREAKING",
            Category::Numerics => "NUMERICS",
            Category::Periodic => "PERIODIC",
            Category::SpongeLayer => "SPONGE_LAYER",
            Category::Tides => "TIDES",
            Category::Statistics => "STATISTICS",
            Category::Stations => "STATIONS",
            Category::WaveMaker => "WAVE_MAKER",
            Category::ObsAndBrkwtr => "OBS_AND_BRKWTR",
            Category::HotStart => "HOT_START",
            Category::Parallel => "PARALLEL",
            Category::Vessel => "VESSEL",
            Category::DeepDraft => "DEEP_DRAFT",
            Category::Sediment => "SEDIMENT",
            Category::Meteo => "METEO",
            Category::Lagrangian => "LAGRANGIAN",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Category {
    type Err = String;

    /// Accepts the banner name in any case, with `-` or `_` separators.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_uppercase().replace('-', "_");
        Category::ALL
            .iter()
            .copied()
            .find(|c| c.as_str() == wanted)
            .ok_or_else(|| format!("unknown category '{}'", s))
    }
}
