//! Dealership client
//!
//! [`Dealership`] fulfils bundle orders against a single factory
//! handle. The handle is set at construction and never swapped, which
//! is what keeps every product in an order inside one regional family.

use crate::report::OrderReport;
use carfab_factory::ManufacturingFactory;
use carfab_product::{CarKind, Region};

/// Composition client bound to one regional factory
///
/// The dealership is polymorphic purely over the factory abstraction
/// and the abstract product behaviors; it never inspects concrete
/// types. Each order is a stateless, synchronous, single-pass request.
#[derive(Debug)]
pub struct Dealership {
    factory: Box<dyn ManufacturingFactory>,
}

impl Dealership {
    /// Bind a dealership to a factory for its whole lifetime
    #[inline]
    #[must_use]
    pub fn new(factory: Box<dyn ManufacturingFactory>) -> Self {
        Self { factory }
    }

    /// Region served by this dealership
    #[inline]
    #[must_use]
    pub fn region(&self) -> Region {
        self.factory.region()
    }

    /// Order a complete sedan bundle
    #[must_use]
    pub fn order_sedan(&self) -> OrderReport {
        self.order(CarKind::Sedan)
    }

    /// Order a complete SUV bundle
    #[must_use]
    pub fn order_suv(&self) -> OrderReport {
        self.order(CarKind::Suv)
    }

    /// Fulfil one bundle order: car + engine + safety package, all
    /// from the held factory, described in fixed order.
    fn order(&self, kind: CarKind) -> OrderReport {
        tracing::info!("Ordering {} bundle for {}", kind, self.region());

        let car = self.factory.create_car(kind);
        let engine = self.factory.create_engine();
        let safety = self.factory.create_safety_features();
        tracing::debug!(?car, ?engine, ?safety, "bundle constructed");

        let mut report = OrderReport::new(self.region(), kind);
        report.push(format!("--- Ordering {} {} ---", kind.article(), kind));
        report.push(car.display_info());
        report.push(car.assemble());
        report.push(engine.describe());
        report.push(safety.describe());
        report.push(format!("{kind} order complete."));
        report
    }
}
