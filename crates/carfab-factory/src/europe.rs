//! European factory
//!
//! Fixed mapping to the European product variants.

use crate::factory::ManufacturingFactory;
use carfab_product::{
    Car, Engine, EuropeEngine, EuropeSafetyFeatures, EuropeSedan, EuropeSuv, Region,
    SafetyFeatures,
};

/// Factory for the European product family
#[derive(Debug, Clone, Copy, Default)]
pub struct EuropeFactory;

impl EuropeFactory {
    /// Create a new European factory
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl ManufacturingFactory for EuropeFactory {
    fn region(&self) -> Region {
        Region::Europe
    }

    fn create_sedan(&self) -> Box<dyn Car> {
        Box::new(EuropeSedan)
    }

    fn create_suv(&self) -> Box<dyn Car> {
        Box::new(EuropeSuv)
    }

    fn create_engine(&self) -> Box<dyn Engine> {
        Box::new(EuropeEngine)
    }

    fn create_safety_features(&self) -> Box<dyn SafetyFeatures> {
        Box::new(EuropeSafetyFeatures)
    }
}
