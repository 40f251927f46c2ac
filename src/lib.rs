#![doc = "Choroscope public API"]
mod filter;
mod io;
mod layer;
mod scale;
mod select;
mod style;
mod types;
mod viewer;

#[doc(inline)]
pub use types::{CountyRecord, Geoid, Metric};

#[doc(inline)]
pub use layer::{CountyFeature, CountyLayer, MetricsTable};

#[doc(inline)]
pub use filter::FilterState;

#[doc(inline)]
pub use scale::{color_for, Rgb, NO_DATA};

#[doc(inline)]
pub use style::{style_for, FeatureStyle};

#[doc(inline)]
pub use select::{fit_selection, match_feature, MapView, FIT_PADDING_PX};

#[doc(inline)]
pub use viewer::Viewer;

#[doc(inline)]
pub use io::{assert_not_stdout, load_bytes, read_features, render_map, PendingWrite, Source, SvgMap};
