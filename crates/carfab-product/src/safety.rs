//! Safety-features product category
//!
//! One safety package per region, shared by both car sub-kinds.

use crate::region::Region;

/// Abstract safety-package behavior
pub trait SafetyFeatures: Send + Sync + std::fmt::Debug {
    /// Region this package is certified for
    fn region(&self) -> Region;

    /// Describe the installed safety equipment
    fn describe(&self) -> String;
}

/// North American safety package
#[derive(Debug, Clone, Copy, Default)]
pub struct NorthAmericaSafetyFeatures;

impl SafetyFeatures for NorthAmericaSafetyFeatures {
    fn region(&self) -> Region {
        Region::NorthAmerica
    }

    fn describe(&self) -> String {
        "Safety Features: Standard airbags, basic ABS, rearview camera (North America)"
            .to_string()
    }
}

/// European safety package
#[derive(Debug, Clone, Copy, Default)]
pub struct EuropeSafetyFeatures;

impl SafetyFeatures for EuropeSafetyFeatures {
    fn region(&self) -> Region {
        Region::Europe
    }

    fn describe(&self) -> String {
        "Safety Features: Multiple airbags, advanced ABS, pedestrian detection, lane assist (Europe)"
            .to_string()
    }
}
