use std::collections::BTreeSet;

use ahash::AHashMap;
use anyhow::{Context, Result};
use serde_json::Value;

use crate::types::{CountyRecord, Geoid};

/// The metrics side of the join: county_inequity.json keyed by GEOID.
/// Loaded once, immutable, O(1) lookup against `CountyFeature::geoid`.
#[derive(Debug, Clone, Default)]
pub struct MetricsTable {
    records: AHashMap<Geoid, CountyRecord>,
}

impl MetricsTable {
    /// Parse a metrics table from county_inequity.json bytes.
    pub fn from_slice(bytes: &[u8]) -> Result<Self> {
        let value: Value = serde_json::from_slice(bytes)
            .context("Failed to parse metrics JSON")?;
        let object = value.as_object()
            .context("Metrics JSON must be an object keyed by GEOID")?;

        let mut records = AHashMap::with_capacity(object.len());
        for (geoid, entry) in object {
            let record: CountyRecord = serde_json::from_value(entry.clone())
                .with_context(|| format!("Invalid metrics record for GEOID {geoid}"))?;
            records.insert(Geoid::new(geoid), record);
        }
        Ok(Self { records })
    }

    /// Get the number of records.
    #[inline] pub fn len(&self) -> usize { self.records.len() }

    /// Check if the table holds no records.
    #[inline] pub fn is_empty(&self) -> bool { self.records.is_empty() }

    /// Look up the record for a GEOID, if any.
    #[inline]
    pub fn get(&self, geoid: &Geoid) -> Option<&CountyRecord> {
        self.records.get(geoid)
    }

    /// Iterate all records (unordered).
    #[inline]
    pub fn records(&self) -> impl Iterator<Item = (&Geoid, &CountyRecord)> {
        self.records.iter()
    }

    /// Distinct state names across all records, sorted ascending. These are the
    /// contents of the state selector.
    pub fn state_options(&self) -> Vec<String> {
        self.records.values()
            .map(|record| record.state.as_str())
            .collect::<BTreeSet<_>>()
            .into_iter()
            .map(String::from)
            .collect()
    }

    /// County names for the given state, sorted ascending; empty when no state
    /// is selected. Names are NOT de-duplicated: each record contributes one
    /// entry, even when two GEOIDs in a state share a name.
    pub fn county_options(&self, state: Option<&str>) -> Vec<String> {
        let Some(state) = state else { return Vec::new() };
        let mut counties: Vec<String> = self.records.values()
            .filter(|record| record.state == state)
            .map(|record| record.county.clone())
            .collect();
        counties.sort();
        counties
    }
}
