//! Derived views over a parsed [`ScoreTable`].
//!
//! Every view is its own named method with a concrete return type:
//!
//! - [`ScoreTable::filter_pairs`] — keep rows matching a pairs-of-interest list
//! - [`ScoreTable::join_ground_truth`] — align predictor rows with a distance table
//! - [`ScoreTable::sorted_by_score`] — descending score, separation-filtered
//! - [`ScoreTable::sorted_by_id`] — ascending `(id_1, id_2)`, separation-filtered
//! - [`ScoreTable::top_partners`] — one residue's top-L scoring partners
//! - [`ScoreTable::cumulative_scores`] — normalized per-residue top-L sums

use log::warn;
use seqnet_core::combin::nested_from_triples;
use seqnet_core::SeparationBound;

use crate::score::{ScoreRecord, ScoreTable};

impl ScoreTable {
    /// Keep only rows whose `(id_1, id_2)` match a pairs-of-interest list,
    /// in the order the pairs were requested.
    ///
    /// Matching is by direct lookup keyed on both ids: a requested pair
    /// absent from the table (for instance when the predictor file uses a
    /// different index base than the request) is dropped, not an error.
    /// Drops are logged so the best-effort policy stays observable.
    pub fn filter_pairs(&self, pairs: &[(usize, usize)]) -> ScoreTable {
        let triples: Vec<(usize, usize, f64)> = self
            .records()
            .iter()
            .map(|r| (r.id1, r.id2, r.score))
            .collect();
        let map = nested_from_triples(&triples);

        let mut kept = Vec::with_capacity(pairs.len());
        for &(id1, id2) in pairs {
            match map.get(&id1).and_then(|inner| inner.get(&id2)) {
                Some(&score) => kept.push(ScoreRecord { id1, id2, score }),
                None => warn!("pair of interest ({id1}, {id2}) absent from score table, dropped"),
            }
        }
        ScoreTable::new(kept)
    }

    /// Align this table's rows with a ground-truth distance table on
    /// identical `(id_1, id_2)`, returning the two aligned tables.
    ///
    /// Rows whose ids are absent from either side are dropped (logged,
    /// non-fatal). Output order follows this table's record order.
    pub fn join_ground_truth(&self, truth: &ScoreTable) -> (ScoreTable, ScoreTable) {
        let truth_triples: Vec<(usize, usize, f64)> = truth
            .records()
            .iter()
            .map(|r| (r.id1, r.id2, r.score))
            .collect();
        let truth_map = nested_from_triples(&truth_triples);

        let mut predicted = Vec::new();
        let mut observed = Vec::new();
        for rec in self.records() {
            match truth_map.get(&rec.id1).and_then(|inner| inner.get(&rec.id2)) {
                Some(&dist) => {
                    predicted.push(rec.clone());
                    observed.push(ScoreRecord {
                        id1: rec.id1,
                        id2: rec.id2,
                        score: dist,
                    });
                }
                None => warn!(
                    "pair ({}, {}) has no ground-truth row, dropped from join",
                    rec.id1, rec.id2
                ),
            }
        }
        (ScoreTable::new(predicted), ScoreTable::new(observed))
    }

    /// Rows admitted by the separation bound, sorted by score descending.
    ///
    /// The sort is stable, so equal scores keep file order.
    pub fn sorted_by_score(&self, bound: &SeparationBound) -> ScoreTable {
        let mut kept: Vec<ScoreRecord> = self
            .records()
            .iter()
            .filter(|r| bound.admits(r.id1, r.id2))
            .cloned()
            .collect();
        kept.sort_by(|a, b| b.score.total_cmp(&a.score));
        ScoreTable::new(kept)
    }

    /// Rows admitted by the separation bound, sorted ascending by
    /// `(id_1, id_2)`.
    pub fn sorted_by_id(&self, bound: &SeparationBound) -> ScoreTable {
        let mut kept: Vec<ScoreRecord> = self
            .records()
            .iter()
            .filter(|r| bound.admits(r.id1, r.id2))
            .cloned()
            .collect();
        kept.sort_by_key(|r| (r.id1, r.id2));
        ScoreTable::new(kept)
    }

    /// The top-`l` highest-scoring partners of one residue, as
    /// `(partner_id, score)` descending by score.
    ///
    /// Both orientations count: the residue may appear as `id_1` or `id_2`.
    pub fn top_partners(&self, id: usize, l: usize) -> Vec<(usize, f64)> {
        let mut partners: Vec<(usize, f64)> = self
            .records()
            .iter()
            .filter_map(|r| {
                if r.id1 == id {
                    Some((r.id2, r.score))
                } else if r.id2 == id {
                    Some((r.id1, r.score))
                } else {
                    None
                }
            })
            .collect();
        partners.sort_by(|a, b| b.1.total_cmp(&a.1));
        partners.truncate(l);
        partners
    }

    /// Per-residue cumulative scores for residues `1..=n`.
    ///
    /// For each residue the sum of its top-`l` partner scores is normalized
    /// by the sequence-wide mean score-per-residue (total score sum / n).
    /// The result holds residue `r` at index `r - 1`. Residues with no
    /// scored partners (and the degenerate all-zero table) map to 0.
    pub fn cumulative_scores(&self, n: usize, l: usize) -> Vec<f64> {
        let total: f64 = self.records().iter().map(|r| r.score).sum();
        let mean_per_residue = if n > 0 { total / n as f64 } else { 0.0 };

        let mut per_residue: Vec<Vec<f64>> = vec![Vec::new(); n];
        for r in self.records() {
            if (1..=n).contains(&r.id1) {
                per_residue[r.id1 - 1].push(r.score);
            }
            if (1..=n).contains(&r.id2) {
                per_residue[r.id2 - 1].push(r.score);
            }
        }

        per_residue
            .into_iter()
            .map(|mut scores| {
                if mean_per_residue == 0.0 {
                    return 0.0;
                }
                scores.sort_by(|a, b| b.total_cmp(a));
                let top_sum: f64 = scores.iter().take(l).sum();
                top_sum / mean_per_residue
            })
            .collect()
    }
}
