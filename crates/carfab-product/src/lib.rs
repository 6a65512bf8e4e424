//! Carfab Product System
//!
//! Regional product variants for the manufacturing demo.
//!
//! # Core Concepts
//!
//! - [`Region`]: tag naming one of the two fixed manufacturing regions
//! - [`CarKind`]: the car sub-kind (sedan or SUV)
//! - [`Car`], [`Engine`], [`SafetyFeatures`]: abstract product behaviors
//! - Concrete variants per region, e.g. [`NorthAmericaSedan`], [`EuropeEngine`]
//!
//! Every product is a stateless value: created per request, read-only,
//! discarded when the request completes. Behaviors return descriptive
//! strings; routing them to a console or log is the caller's job.
//!
//! # Example
//!
//! ```rust
//! use carfab_product::{Car, EuropeSuv, Region};
//!
//! let suv = EuropeSuv;
//! assert_eq!(suv.region(), Region::Europe);
//! assert_eq!(suv.display_info(), "Car Type: SUV (Europe)");
//! ```

#![warn(unreachable_pub)]
#![allow(missing_docs)]

// Core modules
mod car;
mod engine;
mod region;
mod safety;

// Re-exports
pub use car::{Car, EuropeSedan, EuropeSuv, NorthAmericaSedan, NorthAmericaSuv};
pub use engine::{Engine, EuropeEngine, NorthAmericaEngine};
pub use region::{CarKind, Region, RegionError};
pub use safety::{EuropeSafetyFeatures, NorthAmericaSafetyFeatures, SafetyFeatures};

/// Version of this crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

#[cfg(test)]
mod thread_safety_tests {
    use super::*;

    fn assert_send_sync<T: Send + Sync>() {}

    #[test]
    fn value_types_are_send_sync() {
        assert_send_sync::<Region>();
        assert_send_sync::<CarKind>();
        assert_send_sync::<RegionError>();
    }

    #[test]
    fn products_are_send_sync() {
        assert_send_sync::<Box<dyn Car>>();
        assert_send_sync::<Box<dyn Engine>>();
        assert_send_sync::<Box<dyn SafetyFeatures>>();
    }
}
