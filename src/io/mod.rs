mod fetch;
mod fs;
mod geojson;
mod svg;

pub use fetch::{load_bytes, Source};
pub use fs::{assert_not_stdout, PendingWrite};
pub use geojson::read_features;
pub use svg::{render_map, SvgMap};
