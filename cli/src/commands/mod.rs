pub mod locate;
pub mod options;
pub mod render;

use choroscope::{load_bytes, read_features, CountyLayer, MetricsTable, Source};

/// Load the feature collection. Failure is logged and degrades to `None`:
/// the map simply has no features yet.
pub(crate) fn load_counties(spec: &str, verbose: u8) -> Option<CountyLayer> {
    let source = Source::parse(spec);
    if verbose > 0 { eprintln!("[load] counties <- {source}"); }

    match load_bytes(&source).and_then(|bytes| read_features(&bytes)) {
        Ok(features) => {
            if verbose > 0 { eprintln!("[load] {} county features", features.len()); }
            Some(CountyLayer::new(features))
        }
        Err(err) => {
            eprintln!("[load] error loading counties from {source}: {err:#}");
            None
        }
    }
}

/// Load the metrics table. Failure is logged and degrades to `None`:
/// counties render ungraded gray.
pub(crate) fn load_metrics(spec: &str, verbose: u8) -> Option<MetricsTable> {
    let source = Source::parse(spec);
    if verbose > 0 { eprintln!("[load] metrics <- {source}"); }

    match load_bytes(&source).and_then(|bytes| MetricsTable::from_slice(&bytes)) {
        Ok(metrics) => {
            if verbose > 0 { eprintln!("[load] {} metrics records", metrics.len()); }
            Some(metrics)
        }
        Err(err) => {
            eprintln!("[load] error loading metrics from {source}: {err:#}");
            None
        }
    }
}
