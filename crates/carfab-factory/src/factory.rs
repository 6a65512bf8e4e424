//! Manufacturing factory trait
//!
//! Provides the [`ManufacturingFactory`] trait, the capability contract
//! for constructing one region's complete product family.

use carfab_product::{Car, CarKind, Engine, Region, SafetyFeatures};

/// Abstract factory for one regional product family
///
/// One construction operation per product category, each taking no
/// input and returning a fresh instance of the abstract product type.
/// Every operation is total and independent: no call affects any later
/// call, and no call can fail.
///
/// # Consistency
/// All products obtained through one factory value belong to the same
/// regional family. Clients that hold a single factory handle therefore
/// never mix regions.
pub trait ManufacturingFactory: Send + Sync + std::fmt::Debug {
    /// Region whose family this factory builds (descriptive only)
    fn region(&self) -> Region;

    /// Build this region's sedan variant
    fn create_sedan(&self) -> Box<dyn Car>;

    /// Build this region's SUV variant
    fn create_suv(&self) -> Box<dyn Car>;

    /// Build this region's engine variant
    fn create_engine(&self) -> Box<dyn Engine>;

    /// Build this region's safety package
    fn create_safety_features(&self) -> Box<dyn SafetyFeatures>;

    /// Build a car by sub-kind
    fn create_car(&self, kind: CarKind) -> Box<dyn Car> {
        match kind {
            CarKind::Sedan => self.create_sedan(),
            CarKind::Suv => self.create_suv(),
        }
    }
}
