//! Per-state running statistics
//!
//! Single-pass accumulation: each observation folds into the entry for
//! its state code, created on first sight. The table keeps an ordered
//! key list alongside the map so reports come out in first-seen order.

use std::collections::hash_map::Entry;
use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::types::{Observation, Timestamp};

/// Running statistics for one state code.
///
/// Sums use f64 accumulators; averages derived from tens of thousands
/// of additions are good to well under the single decimal the report
/// prints.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct StateStats {
    pub code: String,
    pub record_count: u64,
    pub humidity_sum: f64,
    pub cloud_cover_sum: f64,
    pub temperature_sum: f64,
    pub lightning_count: u64,
    pub snow_count: u64,
    pub max_temperature: f64,
    pub max_temperature_at: Timestamp,
    pub min_temperature: f64,
    pub min_temperature_at: Timestamp,
}

impl StateStats {
    /// Empty entry. Extrema start at the infinities so the first folded
    /// observation always overwrites them.
    fn new(code: &str) -> Self {
        Self {
            code: code.to_owned(),
            record_count: 0,
            humidity_sum: 0.0,
            cloud_cover_sum: 0.0,
            temperature_sum: 0.0,
            lightning_count: 0,
            snow_count: 0,
            max_temperature: f64::NEG_INFINITY,
            max_temperature_at: 0,
            min_temperature: f64::INFINITY,
            min_temperature_at: 0,
        }
    }

    fn fold(&mut self, obs: &Observation) {
        self.record_count += 1;
        self.humidity_sum += obs.humidity;
        self.cloud_cover_sum += obs.cloud_cover;
        self.temperature_sum += obs.temperature_f;

        if obs.lightning_present() {
            self.lightning_count += 1;
        }
        if obs.snow_present() {
            self.snow_count += 1;
        }

        // Strict comparisons: on an exact tie the earlier observation
        // keeps the extremum slot.
        if obs.temperature_f > self.max_temperature {
            self.max_temperature = obs.temperature_f;
            self.max_temperature_at = obs.timestamp;
        }
        if obs.temperature_f < self.min_temperature {
            self.min_temperature = obs.temperature_f;
            self.min_temperature_at = obs.timestamp;
        }
    }

    /// Combine another partial accumulation for the same state code.
    /// Equal extrema resolve to the earlier timestamp.
    fn absorb(&mut self, other: &StateStats) {
        self.record_count += other.record_count;
        self.humidity_sum += other.humidity_sum;
        self.cloud_cover_sum += other.cloud_cover_sum;
        self.temperature_sum += other.temperature_sum;
        self.lightning_count += other.lightning_count;
        self.snow_count += other.snow_count;

        if other.max_temperature > self.max_temperature
            || (other.max_temperature == self.max_temperature
                && other.max_temperature_at < self.max_temperature_at)
        {
            self.max_temperature = other.max_temperature;
            self.max_temperature_at = other.max_temperature_at;
        }
        if other.min_temperature < self.min_temperature
            || (other.min_temperature == self.min_temperature
                && other.min_temperature_at < self.min_temperature_at)
        {
            self.min_temperature = other.min_temperature;
            self.min_temperature_at = other.min_temperature_at;
        }
    }

    pub fn average_humidity(&self) -> f64 {
        self.humidity_sum / self.record_count as f64
    }

    pub fn average_temperature(&self) -> f64 {
        self.temperature_sum / self.record_count as f64
    }

    pub fn average_cloud_cover(&self) -> f64 {
        self.cloud_cover_sum / self.record_count as f64
    }
}

/// Mapping from state code to running statistics, first-seen ordered.
///
/// Grows without bound as new codes appear; never shrinks.
#[derive(Debug, Clone, Default)]
pub struct StateTable {
    stats: HashMap<String, StateStats>,
    order: Vec<String>,
}

impl StateTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Fold one observation into the entry for its state code,
    /// creating the entry first if the code is new (lookup-or-create as
    /// one logical step through the map's entry API).
    pub fn fold(&mut self, obs: &Observation) {
        match self.stats.entry(obs.state.clone()) {
            Entry::Occupied(mut occupied) => occupied.get_mut().fold(obs),
            Entry::Vacant(vacant) => {
                self.order.push(obs.state.clone());
                vacant.insert(StateStats::new(&obs.state)).fold(obs);
            }
        }
    }

    /// Merge a partial table produced from another input source.
    ///
    /// Self's first-seen order is preserved; codes unseen by self are
    /// appended in `other`'s order. Merging per-file partials in
    /// argument order therefore reproduces the ordering of a sequential
    /// pass over the same files.
    pub fn merge(&mut self, mut other: StateTable) {
        for code in other.order.drain(..) {
            let Some(incoming) = other.stats.remove(&code) else {
                continue;
            };
            match self.stats.entry(code) {
                Entry::Occupied(mut occupied) => occupied.get_mut().absorb(&incoming),
                Entry::Vacant(vacant) => {
                    self.order.push(vacant.key().clone());
                    vacant.insert(incoming);
                }
            }
        }
    }

    /// State codes in first-seen order.
    pub fn codes(&self) -> &[String] {
        &self.order
    }

    /// Entries in first-seen order.
    pub fn iter(&self) -> impl Iterator<Item = &StateStats> {
        self.order.iter().filter_map(|code| self.stats.get(code))
    }

    pub fn get(&self, code: &str) -> Option<&StateStats> {
        self.stats.get(code)
    }

    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }
}
