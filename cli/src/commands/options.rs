use anyhow::Result;

use crate::cli::{Cli, OptionsArgs};

pub fn run(cli: &Cli, args: &OptionsArgs) -> Result<()> {
    // Degraded load means an empty selector, not a failure.
    let Some(metrics) = super::load_metrics(&args.sources.metrics, cli.verbose) else {
        return Ok(());
    };

    match args.state.as_deref() {
        Some(state) => {
            for county in metrics.county_options(Some(state)) {
                println!("{county}");
            }
        }
        None => {
            for state in metrics.state_options() {
                println!("{state}");
            }
        }
    }
    Ok(())
}
