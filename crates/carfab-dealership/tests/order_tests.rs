//! End-to-end bundle ordering tests
//!
//! Drives the full path the demonstration binary uses: registry lookup,
//! dealership binding, and bundle orders, asserting on the report line
//! sequences.

use carfab_dealership::Dealership;
use carfab_factory::{FactoryRegistry, ManufacturingFactory};
use carfab_product::{CarKind, Region};
use pretty_assertions::assert_eq;

fn dealership_for(region: Region) -> Dealership {
    let registry = FactoryRegistry::with_defaults();
    Dealership::new(registry.build(region).unwrap())
}

#[test]
fn north_america_sedan_scenario() {
    let report = dealership_for(Region::NorthAmerica).order_sedan();

    let lines: Vec<&str> = report.lines().collect();
    assert!(lines[1].contains("Sedan (North America)"));
    assert!(lines[2].contains("Spacious interior"));
    assert!(lines[3].contains("V6"));
    assert!(lines[4].contains("Standard airbags"));
    assert_eq!(*lines.last().unwrap(), "Sedan order complete.");
}

#[test]
fn europe_suv_scenario() {
    let report = dealership_for(Region::Europe).order_suv();

    let lines: Vec<&str> = report.lines().collect();
    assert!(lines[1].contains("SUV (Europe)"));
    assert!(lines[2].contains("Efficient powertrain"));
    assert!(lines[3].contains("Turbocharged 4-cylinder"));
    assert!(lines[4].contains("Multiple airbags"));
    assert_eq!(*lines.last().unwrap(), "SUV order complete.");
}

#[test]
fn repeated_orders_are_structurally_identical() {
    let dealership = dealership_for(Region::NorthAmerica);
    let first = dealership.order_sedan();
    let second = dealership.order_sedan();
    assert_eq!(first, second);
}

#[test]
fn engine_and_safety_do_not_depend_on_sub_kind() {
    for region in Region::ALL {
        let dealership = dealership_for(region);
        let sedan = dealership.order_sedan();
        let suv = dealership.order_suv();
        // engine and safety lines sit at fixed positions after the car lines
        assert_eq!(sedan.lines[3], suv.lines[3]);
        assert_eq!(sedan.lines[4], suv.lines[4]);
    }
}

#[test]
fn one_dealership_never_mixes_regional_families() {
    let dealership = dealership_for(Region::NorthAmerica);
    for report in [dealership.order_sedan(), dealership.order_suv()] {
        for line in report.lines() {
            assert!(!line.contains("Europe"), "leaked line: {line}");
        }
    }

    let dealership = dealership_for(Region::Europe);
    for report in [dealership.order_sedan(), dealership.order_suv()] {
        for line in report.lines() {
            assert!(!line.contains("North America"), "leaked line: {line}");
        }
    }
}

#[test]
fn full_demonstration_order_sequence() {
    let registry = FactoryRegistry::with_defaults();
    let mut reports = Vec::new();
    for region in registry.regions() {
        let dealership = Dealership::new(registry.build(region).unwrap());
        reports.push(dealership.order_sedan());
        reports.push(dealership.order_suv());
    }

    let summary: Vec<(Region, CarKind)> = reports.iter().map(|r| (r.region, r.kind)).collect();
    assert_eq!(
        summary,
        vec![
            (Region::NorthAmerica, CarKind::Sedan),
            (Region::NorthAmerica, CarKind::Suv),
            (Region::Europe, CarKind::Sedan),
            (Region::Europe, CarKind::Suv),
        ]
    );
}

#[test]
fn display_info_pattern_holds_for_every_family() {
    let registry = FactoryRegistry::with_defaults();
    for region in registry.regions() {
        let factory = registry.build(region).unwrap();
        for kind in CarKind::ALL {
            let car = factory.create_car(kind);
            assert_eq!(car.display_info(), format!("Car Type: {kind} ({region})"));
        }
    }
}
