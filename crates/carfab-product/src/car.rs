//! Car product category
//!
//! Abstract [`Car`] behavior plus the four concrete regional variants.
//! Each variant carries fixed descriptive text and nothing else.

use crate::region::{CarKind, Region};

/// Abstract car behavior
///
/// A car knows its region and sub-kind and can describe its own
/// manufacturing process. Implementations are stateless unit structs;
/// every factory request yields a fresh, independent instance.
pub trait Car: Send + Sync + std::fmt::Debug {
    /// Region this car was built for
    fn region(&self) -> Region;

    /// Car sub-kind (sedan or SUV)
    fn kind(&self) -> CarKind;

    /// Describe the manufacturing process for this variant
    fn assemble(&self) -> String;

    /// Describe category and region, e.g. `"Car Type: SUV (Europe)"`
    fn display_info(&self) -> String {
        format!("Car Type: {} ({})", self.kind(), self.region())
    }
}

/// North American sedan: comfort-oriented build
#[derive(Debug, Clone, Copy, Default)]
pub struct NorthAmericaSedan;

impl Car for NorthAmericaSedan {
    fn region(&self) -> Region {
        Region::NorthAmerica
    }

    fn kind(&self) -> CarKind {
        CarKind::Sedan
    }

    fn assemble(&self) -> String {
        "Assembling North American Sedan: Spacious interior, comfortable ride.".to_string()
    }
}

/// North American SUV: utility-oriented build
#[derive(Debug, Clone, Copy, Default)]
pub struct NorthAmericaSuv;

impl Car for NorthAmericaSuv {
    fn region(&self) -> Region {
        Region::NorthAmerica
    }

    fn kind(&self) -> CarKind {
        CarKind::Suv
    }

    fn assemble(&self) -> String {
        "Assembling North American SUV: Robust chassis, large cargo space.".to_string()
    }
}

/// European sedan: efficiency-oriented build
#[derive(Debug, Clone, Copy, Default)]
pub struct EuropeSedan;

impl Car for EuropeSedan {
    fn region(&self) -> Region {
        Region::Europe
    }

    fn kind(&self) -> CarKind {
        CarKind::Sedan
    }

    fn assemble(&self) -> String {
        "Assembling European Sedan: Fuel-efficient, agile handling, compact design.".to_string()
    }
}

/// European SUV: driver-assist-oriented build
#[derive(Debug, Clone, Copy, Default)]
pub struct EuropeSuv;

impl Car for EuropeSuv {
    fn region(&self) -> Region {
        Region::Europe
    }

    fn kind(&self) -> CarKind {
        CarKind::Suv
    }

    fn assemble(&self) -> String {
        "Assembling European SUV: Efficient powertrain, advanced driver-assist systems.".to_string()
    }
}
