mod proj;
mod writer;

use std::io::Write;

use anyhow::Result;
use geo::{Coord, Rect};

use crate::filter::FilterState;
use crate::layer::{CountyLayer, MetricsTable};
use crate::select::MapView;
use crate::style::{style_for, FeatureStyle};
use proj::multipolygon_to_path;
use writer::SvgWriter;

/// Default margin around the drawing, in pixels, when nothing is fitted.
const DEFAULT_MARGIN_PX: f64 = 10.0;

/// Continental-US window used before any data or fit arrives, so a viewer
/// with nothing loaded still renders a (blank) map.
fn default_window() -> Rect<f64> {
    Rect::new(Coord { x: -125.0, y: 24.0 }, Coord { x: -66.0, y: 50.0 })
}

/// The SVG rendering of the map pane: a fixed pixel width and a lon/lat
/// window. Fitting a selection narrows the window; rendering projects the
/// whole feature collection through it.
#[derive(Debug, Clone)]
pub struct SvgMap {
    width: f64,
    margin: f64,
    window: Option<Rect<f64>>,
}

impl SvgMap {
    /// Create a map pane of the given pixel width, with no window yet (the
    /// renderer falls back to the full collection bounds).
    pub fn new(width: f64) -> Self {
        Self { width, margin: DEFAULT_MARGIN_PX, window: None }
    }

    /// Get the pixel width.
    #[inline] pub fn width(&self) -> f64 { self.width }

    /// Get the current margin in pixels per side.
    #[inline] pub fn margin(&self) -> f64 { self.margin }

    /// Get the current lon/lat window, if one has been fitted.
    #[inline] pub fn window(&self) -> Option<Rect<f64>> { self.window }
}

impl MapView for SvgMap {
    /// Fit the window to the given bounds. The padding becomes the pixel
    /// margin, so the fitted geometry keeps `padding_px` pixels on each side.
    fn fit_bounds(&mut self, bounds: Rect<f64>, padding_px: f64) {
        self.window = Some(bounds);
        self.margin = padding_px;
    }
}

/// Render the choropleth to SVG: every feature as a `<path>`, fill from the
/// style resolver, suppressed features at fill-opacity 0. Features with a
/// metrics record carry a `<title>` with the popup text; features without one
/// are non-interactive and get no title.
pub fn render_map<W: Write>(
    out: W,
    layer: &CountyLayer,
    metrics: &MetricsTable,
    filters: &FilterState,
    map: &SvgMap,
) -> Result<()> {
    let mut window = map.window()
        .or_else(|| layer.bounds())
        .unwrap_or_else(default_window);
    if window.width() <= 0.0 || window.height() <= 0.0 {
        window = default_window(); // degenerate bounds can't be projected
    }

    let margin = map.margin();
    let width = map.width();
    let scale = (width - 2.0 * margin) / window.width();
    let height = window.height() * scale + 2.0 * margin;

    // lon/lat -> SVG coords (Y down)
    let project = move |coord: &Coord<f64>| -> (f64, f64) {
        let x = margin + (coord.x - window.min().x) * scale;
        let y = margin + (window.max().y - coord.y) * scale;
        (x, y)
    };

    let mut writer = SvgWriter::new(out);
    writer.write_header(width, height, margin, scale, &window)?;
    writer.write_styles()?;

    for feature in layer.iter() {
        let path = multipolygon_to_path(feature.geometry(), &project);
        let title = metrics.get(feature.geoid()).map(|record| format!(
            "{}, {}\n{}: {}",
            xml_escape(feature.name()),
            xml_escape(&record.state),
            filters.metric().label(),
            record.value(filters.metric()),
        ));

        match style_for(feature, filters, metrics) {
            FeatureStyle::Filled(fill) => write!(
                writer,
                r#"<path class="county" data-geoid="{}" style="fill:{fill}" d="{path}">"#,
                feature.geoid(),
            )?,
            FeatureStyle::Hidden => write!(
                writer,
                r#"<path class="county hidden" data-geoid="{}" d="{path}">"#,
                feature.geoid(),
            )?,
        }
        if let Some(title) = title {
            write!(writer, "<title>{title}</title>")?;
        }
        writeln!(writer, "</path>")?;
    }

    writer.write_footer()?;
    writer.flush()?;
    Ok(())
}

/// Escape text for inclusion in SVG element content.
fn xml_escape(text: &str) -> String {
    text.replace('&', "&amp;").replace('<', "&lt;").replace('>', "&gt;")
}
