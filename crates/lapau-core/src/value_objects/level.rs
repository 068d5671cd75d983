//! User reputation tiers
//!
//! Levels are cosmetic ranks derived from post and reaction totals. A
//! tier is earned only when **both** thresholds are met.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Reputation tier, lowest to highest
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "kebab-case")]
pub enum UserLevel {
    AnakLapau,
    UrangAwak,
    TukangKieeh,
    UrangLamo,
    NiniakMamak,
    PanguluLapau,
}

/// Thresholds a tier requires
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LevelRequirement {
    pub min_posts: u32,
    pub min_reactions: u32,
}

impl UserLevel {
    /// Tiers from highest to lowest, the evaluation order
    pub const ORDERED_DESC: [UserLevel; 6] = [
        Self::PanguluLapau,
        Self::NiniakMamak,
        Self::UrangLamo,
        Self::TukangKieeh,
        Self::UrangAwak,
        Self::AnakLapau,
    ];

    /// Thresholds for this tier
    #[must_use]
    pub const fn requirement(&self) -> LevelRequirement {
        match self {
            Self::AnakLapau => LevelRequirement { min_posts: 0, min_reactions: 0 },
            Self::UrangAwak => LevelRequirement { min_posts: 5, min_reactions: 10 },
            Self::TukangKieeh => LevelRequirement { min_posts: 15, min_reactions: 50 },
            Self::UrangLamo => LevelRequirement { min_posts: 30, min_reactions: 150 },
            Self::NiniakMamak => LevelRequirement { min_posts: 50, min_reactions: 300 },
            Self::PanguluLapau => LevelRequirement { min_posts: 100, min_reactions: 500 },
        }
    }

    /// Human-readable name
    #[must_use]
    pub const fn display_name(&self) -> &'static str {
        match self {
            Self::AnakLapau => "Anak Lapau",
            Self::UrangAwak => "Urang Awak",
            Self::TukangKieeh => "Tukang Kieeh",
            Self::UrangLamo => "Urang Lamo",
            Self::NiniakMamak => "Niniak Mamak Online",
            Self::PanguluLapau => "Pangulu Lapau",
        }
    }

    /// Derive the tier for the given activity totals
    ///
    /// Evaluates tiers highest to lowest and returns the first where both
    /// thresholds are met. Total function: always yields a tier.
    #[must_use]
    pub fn for_activity(total_posts: u32, total_reactions: u32) -> Self {
        for level in Self::ORDERED_DESC {
            let req = level.requirement();
            if total_posts >= req.min_posts && total_reactions >= req.min_reactions {
                return level;
            }
        }
        Self::AnakLapau
    }
}

impl fmt::Display for UserLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}
