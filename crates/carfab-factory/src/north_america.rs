//! North American factory
//!
//! Fixed mapping to the North American product variants.

use crate::factory::ManufacturingFactory;
use carfab_product::{
    Car, Engine, NorthAmericaEngine, NorthAmericaSafetyFeatures, NorthAmericaSedan,
    NorthAmericaSuv, Region, SafetyFeatures,
};

/// Factory for the North American product family
#[derive(Debug, Clone, Copy, Default)]
pub struct NorthAmericaFactory;

impl NorthAmericaFactory {
    /// Create a new North American factory
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl ManufacturingFactory for NorthAmericaFactory {
    fn region(&self) -> Region {
        Region::NorthAmerica
    }

    fn create_sedan(&self) -> Box<dyn Car> {
        Box::new(NorthAmericaSedan)
    }

    fn create_suv(&self) -> Box<dyn Car> {
        Box::new(NorthAmericaSuv)
    }

    fn create_engine(&self) -> Box<dyn Engine> {
        Box::new(NorthAmericaEngine)
    }

    fn create_safety_features(&self) -> Box<dyn SafetyFeatures> {
        Box::new(NorthAmericaSafetyFeatures)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_product_belongs_to_north_america() {
        let factory = NorthAmericaFactory::new();
        assert_eq!(factory.create_sedan().region(), Region::NorthAmerica);
        assert_eq!(factory.create_suv().region(), Region::NorthAmerica);
        assert_eq!(factory.create_engine().region(), Region::NorthAmerica);
        assert_eq!(
            factory.create_safety_features().region(),
            Region::NorthAmerica
        );
    }

    #[test]
    fn engine_is_fresh_but_value_equal_across_calls() {
        let factory = NorthAmericaFactory::new();
        let first = factory.create_engine();
        let second = factory.create_engine();
        assert_eq!(first.describe(), second.describe());
    }
}
