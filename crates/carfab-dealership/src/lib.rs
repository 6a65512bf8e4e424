//! Carfab Dealership - composition client
//!
//! The dealership is the consumer side of the abstract factory: it
//! holds exactly one [`ManufacturingFactory`](carfab_factory::ManufacturingFactory)
//! handle and orders complete, region-consistent product bundles
//! through it. It never names a concrete product or factory type.
//!
//! # Example
//!
//! ```rust
//! use carfab_dealership::Dealership;
//! use carfab_factory::NorthAmericaFactory;
//!
//! let dealership = Dealership::new(Box::new(NorthAmericaFactory::new()));
//! let report = dealership.order_sedan();
//! for line in report.lines() {
//!     println!("{line}");
//! }
//! ```

#![warn(unreachable_pub)]
#![allow(missing_docs)]

// Core modules
mod dealership;
mod report;

// Re-exports
pub use dealership::Dealership;
pub use report::OrderReport;

/// Version of this crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
