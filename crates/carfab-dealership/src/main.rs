//! Demonstration driver
//!
//! Thin entry point: selects regions, builds factories through the
//! registry, binds a dealership per region, and routes report lines to
//! stdout. All composition logic lives in the library crates.

use anyhow::Context;
use carfab_dealership::{Dealership, OrderReport};
use carfab_factory::FactoryRegistry;
use carfab_product::Region;
use clap::{Arg, ArgAction, Command};
use tracing_subscriber::EnvFilter;

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Command::new("carfab")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Regional automobile manufacturing demonstration")
        .arg(
            Arg::new("region")
                .long("region")
                .value_name("REGION")
                .help("Run the demonstration for a single region (e.g. \"north america\", \"eu\")"),
        )
        .arg(
            Arg::new("json")
                .long("json")
                .action(ArgAction::SetTrue)
                .help("Emit order reports as a JSON array"),
        );

    let matches = cli.get_matches();

    let regions: Vec<Region> = match matches.get_one::<String>("region") {
        Some(input) => {
            let region = input
                .parse::<Region>()
                .with_context(|| format!("cannot select region {input:?}"))?;
            vec![region]
        }
        None => Region::ALL.to_vec(),
    };

    let reports = run_demo(&regions, matches.get_flag("json"));

    if matches.get_flag("json") {
        println!("{}", serde_json::to_string_pretty(&reports)?);
    }

    Ok(())
}

/// Run the fixed demonstration sequence: per region, a sedan order
/// then an SUV order, all through one dealership.
fn run_demo(regions: &[Region], quiet: bool) -> Vec<OrderReport> {
    let registry = FactoryRegistry::with_defaults();
    let mut reports = Vec::with_capacity(regions.len() * 2);

    for (i, &region) in regions.iter().enumerate() {
        if !quiet {
            if i > 0 {
                println!("\n----------------------------------------");
            }
            println!("Setting up {} Dealership...", region.adjective());
        }

        // with_defaults always covers Region::ALL
        let Some(factory) = registry.build(region) else {
            continue;
        };
        let dealership = Dealership::new(factory);

        for report in [dealership.order_sedan(), dealership.order_suv()] {
            if !quiet {
                println!("\n{report}");
            }
            reports.push(report);
        }
    }

    reports
}
