//! Region and car sub-kind tags
//!
//! [`Region`] identifies one of the two fixed manufacturing regions.
//! It is attached to products for descriptive purposes only; variant
//! selection is resolved earlier, by which factory was chosen.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Manufacturing region for a product family
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Region {
    NorthAmerica,
    Europe,
}

impl Region {
    /// All regions, in demonstration order
    pub const ALL: [Region; 2] = [Region::NorthAmerica, Region::Europe];

    /// Human-readable region name
    #[inline]
    #[must_use]
    pub fn name(&self) -> &'static str {
        match self {
            Region::NorthAmerica => "North America",
            Region::Europe => "Europe",
        }
    }

    /// Adjectival form, as used in assembly descriptions
    #[inline]
    #[must_use]
    pub fn adjective(&self) -> &'static str {
        match self {
            Region::NorthAmerica => "North American",
            Region::Europe => "European",
        }
    }
}

impl fmt::Display for Region {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Region {
    type Err = RegionError;

    /// Parse a region from user input
    ///
    /// Accepts a handful of human spellings, case-insensitive:
    /// `"north america"`, `"north-america"`, `"na"`, `"us"` for
    /// [`Region::NorthAmerica`]; `"europe"`, `"eu"` for
    /// [`Region::Europe`].
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "north america" | "north-america" | "northamerica" | "na" | "us" => {
                Ok(Region::NorthAmerica)
            }
            "europe" | "eu" => Ok(Region::Europe),
            _ => Err(RegionError::UnknownRegion(s.to_string())),
        }
    }
}

/// Errors from region discovery
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RegionError {
    /// Input names no known manufacturing region
    #[error("unknown region: {0:?}")]
    UnknownRegion(String),
}

/// Car sub-kind within a regional family
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CarKind {
    Sedan,
    Suv,
}

impl CarKind {
    /// Both sub-kinds, in ordering sequence
    pub const ALL: [CarKind; 2] = [CarKind::Sedan, CarKind::Suv];

    /// Human-readable sub-kind name
    #[inline]
    #[must_use]
    pub fn name(&self) -> &'static str {
        match self {
            CarKind::Sedan => "Sedan",
            CarKind::Suv => "SUV",
        }
    }

    /// Indefinite article for prose ("a Sedan", "an SUV")
    #[inline]
    #[must_use]
    pub fn article(&self) -> &'static str {
        match self {
            CarKind::Sedan => "a",
            CarKind::Suv => "an",
        }
    }
}

impl fmt::Display for CarKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn region_display() {
        assert_eq!(Region::NorthAmerica.to_string(), "North America");
        assert_eq!(Region::Europe.to_string(), "Europe");
    }

    #[test]
    fn region_parse_known_spellings() {
        for s in ["north america", "North America", "NA", "us", "north-america"] {
            assert_eq!(s.parse::<Region>().unwrap(), Region::NorthAmerica);
        }
        for s in ["europe", "Europe", "EU", " eu "] {
            assert_eq!(s.parse::<Region>().unwrap(), Region::Europe);
        }
    }

    #[test]
    fn region_parse_unknown_fails() {
        let err = "atlantis".parse::<Region>().unwrap_err();
        assert_eq!(err, RegionError::UnknownRegion("atlantis".to_string()));
        assert!(err.to_string().contains("atlantis"));
    }

    #[test]
    fn car_kind_display() {
        assert_eq!(CarKind::Sedan.to_string(), "Sedan");
        assert_eq!(CarKind::Suv.to_string(), "SUV");
    }

    #[test]
    fn region_serde_round_trip() {
        let json = serde_json::to_string(&Region::NorthAmerica).unwrap();
        let back: Region = serde_json::from_str(&json).unwrap();
        assert_eq!(back, Region::NorthAmerica);
    }
}
