mod bbox;
mod layer;
mod metrics;

pub use layer::{CountyFeature, CountyLayer};
pub use metrics::MetricsTable;
