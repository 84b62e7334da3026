//! Aggregations behind the four reports.
//!
//! Every report is computed into a plain struct first and rendered
//! separately, so the numbers can be checked without parsing text.

pub mod duration;
pub mod station;
pub mod time;
pub mod user;

use std::collections::BTreeMap;

/// Occurrence counts keyed in ascending order.
///
/// Ties are resolved toward the smallest key, so results never depend on
/// row order.
#[derive(Debug, Clone)]
pub struct Tally<K: Ord> {
    counts: BTreeMap<K, usize>,
}

impl<K: Ord> Tally<K> {
    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    pub fn count(&self, key: &K) -> usize {
        self.counts.get(key).copied().unwrap_or(0)
    }

    pub fn first_key(&self) -> Option<&K> {
        self.counts.keys().next()
    }

    pub fn last_key(&self) -> Option<&K> {
        self.counts.keys().next_back()
    }

    /// Most frequent key and its count.
    pub fn mode(&self) -> Option<(&K, usize)> {
        let mut best: Option<(&K, usize)> = None;
        for (k, &n) in &self.counts {
            if best.is_none_or(|(_, b)| n > b) {
                best = Some((k, n));
            }
        }
        best
    }

    /// All keys by descending count, ascending key on ties.
    pub fn sorted_desc(&self) -> Vec<(&K, usize)> {
        let mut v: Vec<(&K, usize)> = self.counts.iter().map(|(k, &n)| (k, n)).collect();
        // stable sort keeps the ascending key order among equal counts
        v.sort_by(|a, b| b.1.cmp(&a.1));
        v
    }
}

impl<K: Ord> FromIterator<K> for Tally<K> {
    fn from_iter<I: IntoIterator<Item = K>>(iter: I) -> Self {
        let mut counts = BTreeMap::new();
        for k in iter {
            *counts.entry(k).or_insert(0) += 1;
        }
        Self { counts }
    }
}
