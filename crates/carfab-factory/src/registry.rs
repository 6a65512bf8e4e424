//! Factory registry
//!
//! Provides [`FactoryRegistry`], a data-driven mapping from a region
//! tag to its factory constructor. Adding a region means registering
//! one constructor here; the factory trait and its clients never
//! change.

use crate::factory::ManufacturingFactory;
use crate::{EuropeFactory, NorthAmericaFactory};
use carfab_product::{Region, RegionError};

type FactoryCtor = fn() -> Box<dyn ManufacturingFactory>;

/// Registry of available regional factories
///
/// Maps region tags to factory constructors. Each lookup builds a
/// fresh factory value; factories are stateless, so this is equivalent
/// to sharing one.
#[derive(Debug, Default, Clone)]
pub struct FactoryRegistry {
    factories: Vec<(Region, FactoryCtor)>,
}

impl FactoryRegistry {
    /// Create new empty registry
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self {
            factories: Vec::new(),
        }
    }

    /// Create registry with both built-in regions, in demonstration order
    #[must_use]
    pub fn with_defaults() -> Self {
        let mut registry = Self::new();
        registry.register(Region::NorthAmerica, || Box::new(NorthAmericaFactory::new()));
        registry.register(Region::Europe, || Box::new(EuropeFactory::new()));
        registry
    }

    /// Register a factory constructor for a region
    ///
    /// A later registration for the same region replaces the earlier one.
    pub fn register(&mut self, region: Region, ctor: FactoryCtor) {
        self.factories.retain(|(r, _)| *r != region);
        self.factories.push((region, ctor));
    }

    /// Check if a region is registered
    #[inline]
    #[must_use]
    pub fn contains(&self, region: Region) -> bool {
        self.factories.iter().any(|(r, _)| *r == region)
    }

    /// Build the factory for a region
    #[must_use]
    pub fn build(&self, region: Region) -> Option<Box<dyn ManufacturingFactory>> {
        self.factories
            .iter()
            .find(|(r, _)| *r == region)
            .map(|(_, ctor)| ctor())
    }

    /// Parse a region name and build its factory
    ///
    /// # Errors
    /// Returns [`RegionError::UnknownRegion`] when the input names no
    /// registered region.
    pub fn resolve(&self, input: &str) -> Result<Box<dyn ManufacturingFactory>, RegionError> {
        let region: Region = input.parse()?;
        self.build(region)
            .ok_or_else(|| RegionError::UnknownRegion(input.to_string()))
    }

    /// List registered regions in registration order
    #[inline]
    #[must_use]
    pub fn regions(&self) -> Vec<Region> {
        self.factories.iter().map(|(r, _)| *r).collect()
    }

    /// Get number of registered regions
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.factories.len()
    }

    /// Check if registry is empty
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.factories.is_empty()
    }
}
