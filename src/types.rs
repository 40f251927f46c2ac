use std::{fmt, sync::Arc};

use serde::Deserialize;

/// Stable key for a county across both datasets.
/// Keep the original GEOID text (with leading zeros) but avoid repeated owned Strings.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Geoid(Arc<str>);

impl Geoid {
    pub fn new(id: &str) -> Self {
        Self(Arc::from(id))
    }

    /// Get the GEOID text, e.g. "19153" for Polk County, Iowa.
    #[inline] pub fn as_str(&self) -> &str { &self.0 }
}

impl fmt::Display for Geoid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for Geoid {
    fn from(id: &str) -> Self { Self::new(id) }
}

/// The three socioeconomic metrics a county can be graded by.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Metric {
    #[default]
    PovertyRate,
    NoDiplomaPct,
    UnemploymentRate,
}

impl Metric {
    /// Field name as it appears in county_inequity.json.
    pub fn key(&self) -> &'static str {
        match self {
            Metric::PovertyRate => "poverty_rate",
            Metric::NoDiplomaPct => "no_diploma_pct",
            Metric::UnemploymentRate => "unemployment_rate",
        }
    }

    /// Human-readable label (the JSON key with underscores spaced out).
    pub fn label(&self) -> &'static str {
        match self {
            Metric::PovertyRate => "poverty rate",
            Metric::NoDiplomaPct => "no diploma pct",
            Metric::UnemploymentRate => "unemployment rate",
        }
    }
}

impl fmt::Display for Metric {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

/// Per-county metrics record, one per GEOID in county_inequity.json.
/// Metric values are percentage points.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct CountyRecord {
    #[serde(rename = "State")]
    pub state: String,
    #[serde(rename = "County")]
    pub county: String,
    pub poverty_rate: f64,
    pub no_diploma_pct: f64,
    pub unemployment_rate: f64,
}

impl CountyRecord {
    /// Get the value of the given metric for this county.
    #[inline]
    pub fn value(&self, metric: Metric) -> f64 {
        match metric {
            Metric::PovertyRate => self.poverty_rate,
            Metric::NoDiplomaPct => self.no_diploma_pct,
            Metric::UnemploymentRate => self.unemployment_rate,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn geoid_preserves_leading_zeros() {
        assert_eq!(Geoid::new("01001").as_str(), "01001");
        assert_eq!(Geoid::new("01001").to_string(), "01001");
    }

    #[test]
    fn metric_selects_matching_field() {
        let record = CountyRecord {
            state: "Iowa".into(),
            county: "Polk".into(),
            poverty_rate: 11.2,
            no_diploma_pct: 6.5,
            unemployment_rate: 3.1,
        };
        assert_eq!(record.value(Metric::PovertyRate), 11.2);
        assert_eq!(record.value(Metric::NoDiplomaPct), 6.5);
        assert_eq!(record.value(Metric::UnemploymentRate), 3.1);
    }

    #[test]
    fn record_deserializes_with_renamed_fields() {
        let json = r#"{"State":"Iowa","County":"Polk","poverty_rate":11.2,"no_diploma_pct":6.5,"unemployment_rate":3.1}"#;
        let record: CountyRecord = serde_json::from_str(json).unwrap();
        assert_eq!(record.state, "Iowa");
        assert_eq!(record.county, "Polk");
    }
}
