use geo::Rect;

use crate::filter::FilterState;
use crate::layer::{CountyFeature, CountyLayer, MetricsTable};

/// Padding applied around a fitted selection, in map pixels per side.
pub const FIT_PADDING_PX: f64 = 20.0;

/// Handle to an existing map viewport. The matcher only ever directs a
/// viewport, it never rebuilds the map.
pub trait MapView {
    /// Animate/fit the viewport to the given lon/lat bounds, keeping
    /// `padding_px` map pixels of margin on each side.
    fn fit_bounds(&mut self, bounds: Rect<f64>, padding_px: f64);
}

/// Find the single feature representing the current selection, if any.
///
/// With a state and a county selected, the feature's record must match both
/// fields; with only a state, the first matching feature in collection order
/// wins (ties between a state's counties are broken by load order, nothing
/// geographic). A county without a state, or no selection at all, matches
/// nothing. Features without a metrics record never match.
pub fn match_feature<'a>(
    layer: &'a CountyLayer,
    metrics: &MetricsTable,
    filters: &FilterState,
) -> Option<&'a CountyFeature> {
    let state = filters.state()?;
    layer.iter().find(|feature| {
        let Some(record) = metrics.get(feature.geoid()) else { return false };
        if record.state != state { return false }
        match filters.county() {
            Some(county) => record.county == county,
            None => true,
        }
    })
}

/// Fit the viewport to the current selection. No match, or a match with a
/// degenerate geometry, leaves the viewport untouched (no reset to a default
/// view). Called on every change to selection or to either loaded dataset, so
/// a late-arriving metrics load retroactively fits an active selection.
pub fn fit_selection(
    layer: &CountyLayer,
    metrics: &MetricsTable,
    filters: &FilterState,
    view: &mut impl MapView,
) {
    if let Some(feature) = match_feature(layer, metrics, filters) {
        if let Some(bounds) = feature.bounds() {
            view.fit_bounds(bounds, FIT_PADDING_PX);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Geoid;
    use geo::{polygon, Coord, MultiPolygon};

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

    fn fixtures() -> (CountyLayer, MetricsTable) {
        let layer = CountyLayer::new(vec![
            square("19013", "Black Hawk", 0.0, 0.0, 1.0),
            square("19153", "Polk", 2.0, 1.0, 2.0),
            square("31055", "Douglas", 5.0, 5.0, 1.0),
        ]);
        let metrics = MetricsTable::from_slice(br#"{
            "19013": {"State":"Iowa","County":"Black Hawk","poverty_rate":16.0,"no_diploma_pct":7.8,"unemployment_rate":4.2},
            "19153": {"State":"Iowa","County":"Polk","poverty_rate":11.2,"no_diploma_pct":6.5,"unemployment_rate":3.1},
            "31055": {"State":"Nebraska","County":"Douglas","poverty_rate":10.9,"no_diploma_pct":7.1,"unemployment_rate":2.9}
        }"#).unwrap();
        (layer, metrics)
    }

    /// Records fit_bounds calls for assertions.
    #[derive(Default)]
    struct RecordingView {
        fits: Vec<(Rect<f64>, f64)>,
    }

    impl MapView for RecordingView {
        fn fit_bounds(&mut self, bounds: Rect<f64>, padding_px: f64) {
            self.fits.push((bounds, padding_px));
        }
    }

    #[test]
    fn state_and_county_match_one_feature() {
        let (layer, metrics) = fixtures();
        let mut filters = FilterState::new();
        filters.set_state(Some("Iowa".into()));
        filters.set_county(Some("Polk".into()));
        let hit = match_feature(&layer, &metrics, &filters).unwrap();
        assert_eq!(hit.geoid().as_str(), "19153");
    }

    #[test]
    fn state_only_matches_first_in_collection_order() {
        let (layer, metrics) = fixtures();
        let mut filters = FilterState::new();
        filters.set_state(Some("Iowa".into()));
        let hit = match_feature(&layer, &metrics, &filters).unwrap();
        assert_eq!(hit.geoid().as_str(), "19013");
    }

    #[test]
    fn no_selection_matches_nothing() {
        let (layer, metrics) = fixtures();
        assert!(match_feature(&layer, &metrics, &FilterState::new()).is_none());
    }

    #[test]
    fn county_from_another_state_matches_nothing() {
        let (layer, metrics) = fixtures();
        let mut filters = FilterState::new();
        filters.set_state(Some("Iowa".into()));
        filters.set_county(Some("Douglas".into()));
        assert!(match_feature(&layer, &metrics, &filters).is_none());
    }

    #[test]
    fn fit_uses_true_feature_bounds_with_fixed_padding() {
        let (layer, metrics) = fixtures();
        let mut filters = FilterState::new();
        filters.set_state(Some("Iowa".into()));
        filters.set_county(Some("Polk".into()));

        let mut view = RecordingView::default();
        fit_selection(&layer, &metrics, &filters, &mut view);

        let (bounds, padding) = view.fits[0];
        assert_eq!(bounds.min(), Coord { x: 2.0, y: 1.0 });
        assert_eq!(bounds.max(), Coord { x: 4.0, y: 3.0 });
        assert_eq!(padding, FIT_PADDING_PX);
    }

    #[test]
    fn no_match_leaves_viewport_untouched() {
        let (layer, metrics) = fixtures();
        let mut filters = FilterState::new();
        filters.set_state(Some("Ohio".into()));

        let mut view = RecordingView::default();
        fit_selection(&layer, &metrics, &filters, &mut view);
        assert!(view.fits.is_empty());
    }
}
