//! The single-writer session tying filters, data, and the viewport together.
//!
//! Derived views recompute synchronously when their inputs change: options and
//! styles are pure recompute-on-read over the current state; the viewport fit
//! runs inside every mutation whose declared inputs feed the matcher (selected
//! state, selected county, either dataset arriving). Loads hand finished
//! values to `set_counties`/`set_metrics`, so a load completing after the
//! viewer is dropped has nothing to write to.

use geo::Point;

use crate::filter::FilterState;
use crate::layer::{CountyFeature, CountyLayer, MetricsTable};
use crate::select::{fit_selection, MapView};
use crate::style::{style_for, FeatureStyle};
use crate::types::{CountyRecord, Metric};

/// An interactive choropleth session over one map view handle.
#[derive(Debug)]
pub struct Viewer<V: MapView> {
    counties: Option<CountyLayer>,
    metrics: MetricsTable,
    filters: FilterState,
    view: V,
}

impl<V: MapView> Viewer<V> {
    /// Create a viewer around an existing map view. Both data slots start
    /// empty; a failed load simply never fills its slot.
    pub fn new(view: V) -> Self {
        Self {
            counties: None,
            metrics: MetricsTable::default(),
            filters: FilterState::new(),
            view,
        }
    }

    /// Get the loaded feature collection, if it has arrived.
    #[inline] pub fn counties(&self) -> Option<&CountyLayer> { self.counties.as_ref() }

    /// Get the metrics table (empty until loaded).
    #[inline] pub fn metrics(&self) -> &MetricsTable { &self.metrics }

    /// Get the current filter state.
    #[inline] pub fn filters(&self) -> &FilterState { &self.filters }

    /// Get the map view handle.
    #[inline] pub fn view(&self) -> &V { &self.view }

    /// Consume the viewer, returning the map view handle.
    #[inline] pub fn into_view(self) -> V { self.view }

    /// Attach the loaded feature collection. Refits: a selection made before
    /// the features arrived takes effect now.
    pub fn set_counties(&mut self, counties: CountyLayer) {
        self.counties = Some(counties);
        self.refit();
    }

    /// Attach the loaded metrics table. Refits: a late-arriving metrics fetch
    /// retroactively fits an already-active selection.
    pub fn set_metrics(&mut self, metrics: MetricsTable) {
        self.metrics = metrics;
        self.refit();
    }

    /// Switch the graded metric. Recolors on the next read; never refits.
    pub fn set_metric(&mut self, metric: Metric) {
        self.filters.set_metric(metric);
    }

    /// Select (or clear) the state. Clears the county selection and refits.
    pub fn set_state(&mut self, state: Option<String>) {
        self.filters.set_state(state);
        self.refit();
    }

    /// Select (or clear) the county, then refit.
    pub fn set_county(&mut self, county: Option<String>) {
        self.filters.set_county(county);
        self.refit();
    }

    /// Set (or clear) the lower metric bound. Restyles on read; never refits.
    pub fn set_min_value(&mut self, min: Option<f64>) {
        self.filters.set_min_value(min);
    }

    /// Set (or clear) the upper metric bound. Restyles on read; never refits.
    pub fn set_max_value(&mut self, max: Option<f64>) {
        self.filters.set_max_value(max);
    }

    /// Contents of the state selector.
    pub fn state_options(&self) -> Vec<String> {
        self.metrics.state_options()
    }

    /// Contents of the county selector for the currently selected state.
    pub fn county_options(&self) -> Vec<String> {
        self.metrics.county_options(self.filters.state())
    }

    /// Resolve styles for every feature, in collection order. O(features),
    /// recomputed in full on every call; empty until the features arrive.
    pub fn styles(&self) -> Vec<FeatureStyle> {
        match &self.counties {
            Some(layer) => layer.iter()
                .map(|feature| style_for(feature, &self.filters, &self.metrics))
                .collect(),
            None => Vec::new(),
        }
    }

    /// Hit-test a lon/lat point against the loaded counties, returning the
    /// feature and its metrics record. Counties without a record are
    /// non-interactive: they render gray but produce no popup.
    pub fn locate(&self, point: Point<f64>) -> Option<(&CountyFeature, &CountyRecord)> {
        let feature = self.counties.as_ref()?.locate(point)?;
        let record = self.metrics.get(feature.geoid())?;
        Some((feature, record))
    }

    /// Fit the viewport to the current selection, if any.
    fn refit(&mut self) {
        if let Some(layer) = &self.counties {
            fit_selection(layer, &self.metrics, &self.filters, &mut self.view);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Geoid;
    use geo::{polygon, Coord, MultiPolygon, Rect};

    #[derive(Debug, Default)]
    struct RecordingView {
        fits: Vec<Rect<f64>>,
    }

    impl MapView for RecordingView {
        fn fit_bounds(&mut self, bounds: Rect<f64>, _padding_px: f64) {
            self.fits.push(bounds);
        }
    }

    fn square(geoid: &str, name: &str, x0: f64, y0: f64, size: f64) -> CountyFeature {
        let ring = polygon![
            (x: x0, y: y0),
            (x: x0 + size, y: y0),
            (x: x0 + size, y: y0 + size),
            (x: x0, y: y0 + size),
            (x: x0, y: y0),
        ];
        CountyFeature::new(Geoid::new(geoid), name, MultiPolygon(vec![ring]))
    }

    fn layer() -> CountyLayer {
        CountyLayer::new(vec![
            square("19153", "Polk", 2.0, 1.0, 2.0),
            square("31055", "Douglas", 5.0, 5.0, 1.0),
        ])
    }

    fn metrics() -> MetricsTable {
        MetricsTable::from_slice(br#"{
            "19153": {"State":"Iowa","County":"Polk","poverty_rate":11.2,"no_diploma_pct":6.5,"unemployment_rate":3.1},
            "31055": {"State":"Nebraska","County":"Douglas","poverty_rate":10.9,"no_diploma_pct":7.1,"unemployment_rate":2.9}
        }"#).unwrap()
    }

    #[test]
    fn styles_are_empty_until_features_arrive() {
        let mut viewer = Viewer::new(RecordingView::default());
        assert!(viewer.styles().is_empty());
        viewer.set_counties(layer());
        assert_eq!(viewer.styles().len(), 2);
    }

    #[test]
    fn late_metrics_refit_an_active_selection() {
        let mut viewer = Viewer::new(RecordingView::default());
        viewer.set_counties(layer());
        viewer.set_state(Some("Iowa".into()));
        // No metrics yet: nothing to match, viewport untouched.
        assert!(viewer.view().fits.is_empty());

        viewer.set_metrics(metrics());
        assert_eq!(viewer.view().fits.len(), 1);
        assert_eq!(viewer.view().fits[0].min(), Coord { x: 2.0, y: 1.0 });
    }

    #[test]
    fn state_change_resets_county_and_its_options() {
        let mut viewer = Viewer::new(RecordingView::default());
        viewer.set_metrics(metrics());
        viewer.set_state(Some("Iowa".into()));
        viewer.set_county(Some("Polk".into()));
        assert_eq!(viewer.county_options(), vec!["Polk".to_string()]);

        viewer.set_state(Some("Nebraska".into()));
        assert_eq!(viewer.filters().county(), None);
        assert_eq!(viewer.county_options(), vec!["Douglas".to_string()]);
    }

    #[test]
    fn selection_before_data_fits_once_features_arrive() {
        let mut viewer = Viewer::new(RecordingView::default());
        viewer.set_metrics(metrics());
        viewer.set_state(Some("Nebraska".into()));
        assert!(viewer.view().fits.is_empty());

        viewer.set_counties(layer());
        assert_eq!(viewer.view().fits.len(), 1);
        assert_eq!(viewer.view().fits[0].min(), Coord { x: 5.0, y: 5.0 });
    }

    #[test]
    fn locate_skips_counties_without_metrics() {
        let mut viewer = Viewer::new(RecordingView::default());
        viewer.set_counties(CountyLayer::new(vec![square("99999", "Nowhere", 0.0, 0.0, 1.0)]));
        viewer.set_metrics(metrics());
        assert!(viewer.locate(Point::new(0.5, 0.5)).is_none());

        viewer.set_counties(layer());
        let (feature, record) = viewer.locate(Point::new(3.0, 2.0)).unwrap();
        assert_eq!(feature.name(), "Polk");
        assert_eq!(record.state, "Iowa");
    }

    #[test]
    fn metric_and_bound_changes_never_refit() {
        let mut viewer = Viewer::new(RecordingView::default());
        viewer.set_counties(layer());
        viewer.set_metrics(metrics());
        viewer.set_state(Some("Iowa".into()));
        let fits = viewer.view().fits.len();

        viewer.set_metric(Metric::UnemploymentRate);
        viewer.set_min_value(Some(1.0));
        viewer.set_max_value(Some(50.0));
        assert_eq!(viewer.view().fits.len(), fits);
    }
}
