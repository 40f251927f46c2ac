use crate::filter::FilterState;
use crate::layer::{CountyFeature, MetricsTable};
use crate::scale::{color_for, Rgb};

/// Resolved style for one feature under the current filters. Suppressed
/// features stay on the map with fill opacity zero rather than being removed,
/// so hit-testing on hidden shapes still works (accepted quirk, see notes).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FeatureStyle {
    /// Rendered invisible: fill opacity 0.
    Hidden,
    /// Visible with a ramp (or no-data gray) fill.
    Filled(Rgb),
}

impl FeatureStyle {
    /// Check whether the feature is visible.
    #[inline]
    pub fn is_visible(&self) -> bool {
        matches!(self, FeatureStyle::Filled(_))
    }

    /// Get the fill color, if visible.
    #[inline]
    pub fn fill(&self) -> Option<Rgb> {
        match self {
            FeatureStyle::Hidden => None,
            FeatureStyle::Filled(color) => Some(*color),
        }
    }
}

/// Resolve the style for one feature. Pure over its three inputs.
///
/// Four suppression checks, AND-combined and order-independent:
/// - state filter set and the record's State differs (or there is no record),
/// - county filter set and the record's County differs (or there is no record),
/// - lower bound set and the value is strictly below it,
/// - upper bound set and the value is strictly above it.
///
/// A feature with no metrics record has no value to test, so the bound checks
/// never suppress it; absent any state/county filter it renders gray.
pub fn style_for(
    feature: &CountyFeature,
    filters: &FilterState,
    metrics: &MetricsTable,
) -> FeatureStyle {
    let record = metrics.get(feature.geoid());
    let value = record.map(|r| r.value(filters.metric()));

    if let Some(state) = filters.state() {
        if record.map(|r| r.state.as_str()) != Some(state) {
            return FeatureStyle::Hidden;
        }
    }
    if let Some(county) = filters.county() {
        if record.map(|r| r.county.as_str()) != Some(county) {
            return FeatureStyle::Hidden;
        }
    }
    if let (Some(min), Some(v)) = (filters.min_value(), value) {
        if v < min {
            return FeatureStyle::Hidden;
        }
    }
    if let (Some(max), Some(v)) = (filters.max_value(), value) {
        if v > max {
            return FeatureStyle::Hidden;
        }
    }

    FeatureStyle::Filled(color_for(value))
}
