use crate::types::Metric;

/// The five user-driven filters. One logical writer (the UI thread); everything
/// derived from this is recomputed on change, never cached across changes.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FilterState {
    metric: Metric,
    state: Option<String>,
    county: Option<String>,
    min_value: Option<f64>,
    max_value: Option<f64>,
}

impl FilterState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Get the currently graded metric.
    #[inline] pub fn metric(&self) -> Metric { self.metric }

    /// Get the selected state, if any.
    #[inline] pub fn state(&self) -> Option<&str> { self.state.as_deref() }

    /// Get the selected county, if any.
    #[inline] pub fn county(&self) -> Option<&str> { self.county.as_deref() }

    /// Get the inclusive lower bound on the metric value, if any.
    #[inline] pub fn min_value(&self) -> Option<f64> { self.min_value }

    /// Get the inclusive upper bound on the metric value, if any.
    #[inline] pub fn max_value(&self) -> Option<f64> { self.max_value }

    /// Switch the graded metric. Value bounds are kept as-is: they stay attached
    /// to raw values and are reinterpreted against the new metric's units.
    pub fn set_metric(&mut self, metric: Metric) {
        self.metric = metric;
    }

    /// Select (or clear) the state filter. Always clears the county selection:
    /// no county may persist across a state change.
    pub fn set_state(&mut self, state: Option<String>) {
        self.state = state;
        self.county = None;
    }

    /// Select (or clear) the county filter. Only meaningful once a state is
    /// selected; the matcher and resolver tolerate inconsistent combinations.
    pub fn set_county(&mut self, county: Option<String>) {
        self.county = county;
    }

    /// Set (or clear) the lower metric bound. `None` means no bound.
    pub fn set_min_value(&mut self, min: Option<f64>) {
        self.min_value = min;
    }

    /// Set (or clear) the upper metric bound. `None` means no bound.
    pub fn set_max_value(&mut self, max: Option<f64>) {
        self.max_value = max;
    }
}
