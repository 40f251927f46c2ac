use anyhow::Result;
use choroscope::Metric;

use crate::cli::{Cli, LocateArgs};

pub fn run(cli: &Cli, args: &LocateArgs) -> Result<()> {
    let metric: Metric = args.metric.into();
    let point = geo::Point::new(args.lon, args.lat);

    let counties = super::load_counties(&args.sources.counties, cli.verbose);
    let metrics = super::load_metrics(&args.sources.metrics, cli.verbose);

    // Counties without a metrics record are non-interactive: a hit on one
    // reports the same as no hit at all.
    let hit = counties.as_ref()
        .and_then(|layer| layer.locate(point))
        .and_then(|feature| {
            metrics.as_ref()
                .and_then(|table| table.get(feature.geoid()))
                .map(|record| (feature, record))
        });

    match hit {
        Some((feature, record)) => {
            println!("{}, {}", feature.name(), record.state);
            println!("{}: {}", metric.label(), record.value(metric));
        }
        None => println!("No county data at ({}, {})", args.lon, args.lat),
    }
    Ok(())
}
