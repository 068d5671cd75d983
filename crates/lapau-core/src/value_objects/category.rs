//! Forum categories

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::DomainError;

/// The fixed set of forum categories
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Category {
    LapauUmum,
    OtaViral,
    SindieSarkas,
    CurhatLapau,
    PolitikLapau,
    UmkmBisnis,
    BebasBeradat,
}

impl Category {
    /// All categories in display order
    pub const ALL: [Category; 7] = [
        Self::LapauUmum,
        Self::OtaViral,
        Self::SindieSarkas,
        Self::CurhatLapau,
        Self::PolitikLapau,
        Self::UmkmBisnis,
        Self::BebasBeradat,
    ];

    /// Wire/storage identifier
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::LapauUmum => "lapau-umum",
            Self::OtaViral => "ota-viral",
            Self::SindieSarkas => "sindie-sarkas",
            Self::CurhatLapau => "curhat-lapau",
            Self::PolitikLapau => "politik-lapau",
            Self::UmkmBisnis => "umkm-bisnis",
            Self::BebasBeradat => "bebas-beradat",
        }
    }

    /// Human-readable name
    #[must_use]
    pub const fn display_name(&self) -> &'static str {
        match self {
            Self::LapauUmum => "Lapau Umum",
            Self::OtaViral => "OTA Viral",
            Self::SindieSarkas => "Sindie & Sarkas",
            Self::CurhatLapau => "Curhat Lapau",
            Self::PolitikLapau => "Politik Lapau",
            Self::UmkmBisnis => "UMKM & Bisnis",
            Self::BebasBeradat => "Bebas Tapi Beradat",
        }
    }

    /// Parse a category from caller input
    pub fn parse(s: &str) -> Result<Self, DomainError> {
        Self::ALL
            .into_iter()
            .find(|category| category.as_str() == s)
            .ok_or_else(|| DomainError::UnknownCategory(s.to_string()))
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Feed-side category selection, including the "all" sentinel
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CategoryFilter {
    /// No category restriction
    #[default]
    All,
    /// Restrict to a single category
    Only(Category),
}

impl CategoryFilter {
    /// Parse a filter from caller input, accepting the "all" sentinel
    pub fn parse(s: &str) -> Result<Self, DomainError> {
        if s == "all" {
            return Ok(Self::All);
        }
        Category::parse(s).map(Self::Only)
    }

    /// Whether a thread in `category` passes this filter
    #[must_use]
    pub fn matches(&self, category: Category) -> bool {
        match self {
            Self::All => true,
            Self::Only(only) => *only == category,
        }
    }
}
