//! Engine product category
//!
//! One engine variant per region, shared by both car sub-kinds.

use crate::region::Region;

/// Abstract engine behavior
pub trait Engine: Send + Sync + std::fmt::Debug {
    /// Region this engine is tuned for
    fn region(&self) -> Region;

    /// Describe the engine configuration
    fn describe(&self) -> String;
}

/// North American engine: V6 tuned for regular fuel
#[derive(Debug, Clone, Copy, Default)]
pub struct NorthAmericaEngine;

impl Engine for NorthAmericaEngine {
    fn region(&self) -> Region {
        Region::NorthAmerica
    }

    fn describe(&self) -> String {
        "Engine: V6, high displacement, optimized for regular fuel (North America)".to_string()
    }
}

/// European engine: turbocharged 4-cylinder tuned for premium fuel
#[derive(Debug, Clone, Copy, Default)]
pub struct EuropeEngine;

impl Engine for EuropeEngine {
    fn region(&self) -> Region {
        Region::Europe
    }

    fn describe(&self) -> String {
        "Engine: Turbocharged 4-cylinder, low emissions, optimized for premium fuel (Europe)"
            .to_string()
    }
}
