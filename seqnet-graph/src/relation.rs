//! The score relation: the lookup backend for companion-pair resolution.
//!
//! Built once per invocation from a parsed score table and read-only
//! afterwards. The hash-map-backed [`ScoreRelation`] is the authoritative
//! backend; the [`ScoreLookup`] seam stays a trait so a columnar or array
//! backend could be swapped in without touching assigner logic.

use std::collections::HashMap;

use seqnet_core::combin::nested_from_triples;
use seqnet_io::ScoreTable;

/// Resolution of a companion pair `(i, j)` to its score, if any.
pub trait ScoreLookup {
    /// The score stored for `(i, j)`, or `None` when the pair is absent.
    ///
    /// Orientation is the stored one; assigners always query with
    /// `i = min, j = max`, which matches the `i < j` convention of every
    /// supported score-file format.
    fn lookup(&self, i: usize, j: usize) -> Option<f64>;
}

/// Two-level `id1 -> id2 -> score` map with O(1) average lookup.
#[derive(Debug, Clone, Default)]
pub struct ScoreRelation {
    map: HashMap<usize, HashMap<usize, f64>>,
    len: usize,
}

impl ScoreRelation {
    /// Build the relation from a parsed score table.
    ///
    /// Duplicate `(id1, id2)` rows follow last-write-wins, matching the
    /// nested-map primitive underneath.
    pub fn from_table(table: &ScoreTable) -> Self {
        let triples: Vec<(usize, usize, f64)> = table
            .records()
            .iter()
            .map(|r| (r.id1, r.id2, r.score))
            .collect();
        let map = nested_from_triples(&triples);
        let len = map.values().map(|inner| inner.len()).sum();
        Self { map, len }
    }

    /// Number of distinct `(id1, id2)` pairs stored.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Whether the relation is empty.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }
}

impl ScoreLookup for ScoreRelation {
    fn lookup(&self, i: usize, j: usize) -> Option<f64> {
        self.map.get(&i).and_then(|inner| inner.get(&j)).copied()
    }
}
