use rustc_hash::FxHashMap as HashMap;
use std::hash::Hash;

/// Counter that remembers the order in which keys were first seen.
///
/// Ranking sorts by count with a stable sort, so equal counts keep their
/// first-seen order.
#[derive(Debug, Clone)]
pub struct Tally<K> {
    index: HashMap<K, usize>,
    counts: Vec<(K, usize)>,
}

impl<K> Default for Tally<K> {
    fn default() -> Self {
        Tally {
            index: HashMap::default(),
            counts: Vec::new(),
        }
    }
}

impl<K: Hash + Eq + Copy> Tally<K> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, key: K) {
        match self.index.get(&key) {
            Some(&i) => self.counts[i].1 += 1,
            None => {
                self.index.insert(key, self.counts.len());
                self.counts.push((key, 1));
            }
        }
    }

    pub fn total(&self) -> usize {
        self.counts.iter().map(|(_, c)| c).sum()
    }

    pub fn ranked(self) -> Vec<(K, usize)> {
        let mut counts = self.counts;
        counts.sort_by(|a, b| b.1.cmp(&a.1));
        counts
    }

    pub fn top(self, n: usize) -> Vec<(K, usize)> {
        let mut ranked = self.ranked();
        ranked.truncate(n);
        ranked
    }
}

impl<K: Hash + Eq + Copy> FromIterator<K> for Tally<K> {
    fn from_iter<I: IntoIterator<Item = K>>(iter: I) -> Self {
        let mut tally = Tally::new();
        for key in iter {
            tally.add(key);
        }
        tally
    }
}
