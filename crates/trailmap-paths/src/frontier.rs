//! Cost-bucketed frontier for Dijkstra.
//!
//! Nodes are filed under their tentative cost; within one cost they come
//! back out in the order they were filed. A node is in the frontier at most
//! once: re-filing it first removes the stale entry.

use std::collections::{BTreeMap, VecDeque};

/// Min-priority queue of node indices keyed by cumulative cost, FIFO among
/// equal costs.
#[derive(Debug, Default)]
pub(crate) struct Frontier {
    buckets: BTreeMap<u64, VecDeque<usize>>,
    /// Cost each node is currently filed under, if any.
    filed: Vec<Option<u64>>,
    len: usize,
}

impl Frontier {
    /// A frontier able to hold node indices `0..nodes`.
    pub(crate) fn with_nodes(nodes: usize) -> Self {
        Self {
            buckets: BTreeMap::new(),
            filed: vec![None; nodes],
            len: 0,
        }
    }

    #[inline]
    pub(crate) fn len(&self) -> usize {
        self.len
    }

    #[inline]
    pub(crate) fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Whether `node` is currently waiting in the frontier.
    #[inline]
    pub(crate) fn contains(&self, node: usize) -> bool {
        self.filed[node].is_some()
    }

    /// File `node` under `cost`, dropping any earlier entry for it.
    pub(crate) fn file(&mut self, node: usize, cost: u64) {
        self.remove(node);
        self.buckets.entry(cost).or_default().push_back(node);
        self.filed[node] = Some(cost);
        self.len += 1;
    }

    /// Remove `node` if present. Returns whether it was filed.
    pub(crate) fn remove(&mut self, node: usize) -> bool {
        let Some(cost) = self.filed[node].take() else {
            return false;
        };
        if let Some(bucket) = self.buckets.get_mut(&cost) {
            if let Some(pos) = bucket.iter().position(|&n| n == node) {
                bucket.remove(pos);
            }
            if bucket.is_empty() {
                self.buckets.remove(&cost);
            }
        }
        self.len -= 1;
        true
    }

    /// Take the earliest-filed node of the cheapest bucket.
    pub(crate) fn pop_min(&mut self) -> Option<(usize, u64)> {
        let mut entry = self.buckets.first_entry()?;
        let cost = *entry.key();
        let node = entry.get_mut().pop_front()?;
        if entry.get().is_empty() {
            entry.remove();
        }
        self.filed[node] = None;
        self.len -= 1;
        Some((node, cost))
    }
}
