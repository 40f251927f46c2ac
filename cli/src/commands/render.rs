use anyhow::Result;
use choroscope::{assert_not_stdout, render_map, CountyLayer, PendingWrite, SvgMap, Viewer};

use crate::cli::{Cli, RenderArgs};

pub fn run(cli: &Cli, args: &RenderArgs) -> Result<()> {
    assert_not_stdout(&args.output)?;

    let mut viewer = Viewer::new(SvgMap::new(args.width as f64));

    // Two independent loads, no ordering, no retry. A failed slot stays empty
    // and the render degrades (blank map / gray counties).
    if let Some(counties) = super::load_counties(&args.sources.counties, cli.verbose) {
        viewer.set_counties(counties);
    }
    if let Some(metrics) = super::load_metrics(&args.sources.metrics, cli.verbose) {
        viewer.set_metrics(metrics);
    }

    viewer.set_metric(args.metric.into());
    viewer.set_state(args.state.clone());
    viewer.set_county(args.county.clone());
    viewer.set_min_value(args.min);
    viewer.set_max_value(args.max);

    if cli.verbose > 0 {
        eprintln!(
            "[render] metric={} state={:?} county={:?} bounds={:?}..{:?}",
            viewer.filters().metric(),
            viewer.filters().state(),
            viewer.filters().county(),
            viewer.filters().min_value(),
            viewer.filters().max_value(),
        );
    }

    let empty = CountyLayer::new(Vec::new());
    let counties = viewer.counties().unwrap_or(&empty);

    let mut sink = PendingWrite::open(&args.output, args.force)?;
    render_map(&mut sink, counties, viewer.metrics(), viewer.filters(), viewer.view())?;
    sink.finalize()?;

    println!("Rendered {} counties -> {}", counties.len(), args.output.display());
    Ok(())
}
