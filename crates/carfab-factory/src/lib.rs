//! Carfab Factory System
//!
//! Abstract-factory construction of region-consistent product families.
//!
//! # Core Concepts
//!
//! - [`ManufacturingFactory`]: one construction operation per product
//!   category, each returning the abstract product type
//! - [`NorthAmericaFactory`], [`EuropeFactory`]: concrete realizations,
//!   each a fixed mapping to one region's variants
//! - [`FactoryRegistry`]: region-tag to factory lookup
//!
//! A client that obtains every product through one factory handle can
//! never mix regional families: a North American car cannot end up
//! paired with a European engine.
//!
//! # Example
//!
//! ```rust
//! use carfab_factory::{FactoryRegistry, ManufacturingFactory};
//! use carfab_product::Region;
//!
//! let registry = FactoryRegistry::with_defaults();
//! let factory = registry.build(Region::Europe).unwrap();
//! let sedan = factory.create_sedan();
//! assert_eq!(sedan.display_info(), "Car Type: Sedan (Europe)");
//! ```

#![warn(unreachable_pub)]
#![allow(missing_docs)]

// Core modules
mod europe;
mod factory;
mod north_america;
mod registry;

// Re-exports
pub use europe::EuropeFactory;
pub use factory::ManufacturingFactory;
pub use north_america::NorthAmericaFactory;
pub use registry::FactoryRegistry;

/// Version of this crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
