//! Graph assigners: companion-pair generation and score resolution.
//!
//! For every window-expanded center, an assigner enumerates a
//! topology-specific set of companion index pairs and resolves each one
//! through the score lookup, appending one scalar per companion to the
//! row's feature vector in a fixed order.
//!
//! Missing scores, null window positions, out-of-range companions, and
//! reflexive companions (left == right) all contribute 0 — never an error
//! and never a skipped column, so every row keeps its full width.

use crate::enumerate::{ResiduePair, ResidueSingle};
use crate::relation::ScoreLookup;
use crate::table::{Center, FeatureRow, FeatureTable};
use crate::window::PairWindows;

use seqnet_core::combin::offset_lattice;

/// The literal bipartite offset pattern used for membrane contact features:
/// the 5×5 square of displacements around each window position.
const MEMCONP_OFFSETS: [(i64, i64); 25] = [
    (-2, -2),
    (-2, -1),
    (-2, 0),
    (-2, 1),
    (-2, 2),
    (-1, -2),
    (-1, -1),
    (-1, 0),
    (-1, 1),
    (-1, 2),
    (0, -2),
    (0, -1),
    (0, 0),
    (0, 1),
    (0, 2),
    (1, -2),
    (1, -1),
    (1, 0),
    (1, 1),
    (1, 2),
    (2, -2),
    (2, -1),
    (2, 0),
    (2, 1),
    (2, 2),
];

/// The 5-point plus shape: the center and its four axis neighbours.
const CROSS_OFFSETS: [(i64, i64); 5] = [(0, 0), (-1, 0), (1, 0), (0, -1), (0, 1)];

/// Companion-offset topology of the bipartite assigner.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum PairMode {
    /// The fixed 25-entry membrane-contact pattern.
    Memconp,
    /// The full `(2L + 1)²` lattice; `L` is the configured patch size.
    Patch,
    /// The 5-point plus shape `{(0,0), (±1,0), (0,±1)}`.
    Cross,
    /// `{(0, 0)}` only: each window position pairs with its opposite.
    Unchanged,
}

impl PairMode {
    /// The ordered offset table for this topology.
    pub fn offsets(&self, patch_size: i64) -> Vec<(i64, i64)> {
        match self {
            PairMode::Memconp => MEMCONP_OFFSETS.to_vec(),
            PairMode::Patch => offset_lattice(patch_size, 1),
            PairMode::Cross => CROSS_OFFSETS.to_vec(),
            PairMode::Unchanged => vec![(0, 0)],
        }
    }
}

/// Unipartite assignment: same-side window combinations.
///
/// For each central pair, every unordered combination of two positions
/// within the left window, then every combination within the right window
/// (never cross-side). Feature length is `2 · C(2W+1, 2)` — zero when
/// W = 0, since a one-position window has no combinations.
pub fn assign_unipartite<L: ScoreLookup + Sync>(
    pairs: &[ResiduePair],
    windows: &[PairWindows],
    lookup: &L,
) -> FeatureTable {
    debug_assert_eq!(pairs.len(), windows.len());
    let rows = map_rows(pairs, windows, |pair, win| {
        let span = win.left.len();
        let mut features = Vec::with_capacity(span * span.saturating_sub(1));
        for side in [&win.left, &win.right] {
            for x in 0..span {
                for y in (x + 1)..span {
                    features.push(resolve_companion(side[x], side[y], lookup));
                }
            }
        }
        FeatureRow {
            center: Center::Pair(pair.clone()),
            features,
        }
    });
    FeatureTable { rows }
}

/// Bipartite assignment: cross-side offset companions.
///
/// For each of the 2W+1 window positions and each offset `(dx, dy)`, the
/// companion is `(left[k] - dx, right[k] - dy)`. Companions with a null
/// window position, either index outside `[1, N]`, or `left == right`
/// (reflexive) contribute 0. Feature length is `(2W+1) · |offsets|`.
pub fn assign_bipartite<L: ScoreLookup + Sync>(
    pairs: &[ResiduePair],
    windows: &[PairWindows],
    offsets: &[(i64, i64)],
    n: usize,
    lookup: &L,
) -> FeatureTable {
    debug_assert_eq!(pairs.len(), windows.len());
    let rows = map_rows(pairs, windows, |pair, win| {
        let mut features = Vec::with_capacity(win.left.len() * offsets.len());
        for k in 0..win.left.len() {
            for &(dx, dy) in offsets {
                let v = match (win.left[k], win.right[k]) {
                    (Some(a), Some(b)) => {
                        let left = a as i64 - dx;
                        let right = b as i64 - dy;
                        if left < 1 || left > n as i64 || right < 1 || right > n as i64
                            || left == right
                        {
                            0.0
                        } else {
                            let (lo, hi) = (left.min(right) as usize, left.max(right) as usize);
                            lookup.lookup(lo, hi).unwrap_or(0.0)
                        }
                    }
                    _ => 0.0,
                };
                features.push(v);
            }
        }
        FeatureRow {
            center: Center::Pair(pair.clone()),
            features,
        }
    });
    FeatureTable { rows }
}

/// Cumulative assignment: precomputed per-residue scores over the window.
///
/// `cumulative` holds residue `r` at index `r - 1` (the mode-7 reader
/// output). Null window positions contribute 0; real values are optionally
/// passed through a sigmoid (nulls stay 0 either way). Feature length is
/// `2W + 1`.
pub fn assign_cumulative(
    singles: &[ResidueSingle],
    windows: &[Vec<Option<usize>>],
    cumulative: &[f64],
    sigmoid: bool,
) -> FeatureTable {
    debug_assert_eq!(singles.len(), windows.len());
    let rows: Vec<FeatureRow> = singles
        .iter()
        .zip(windows)
        .map(|(single, win)| {
            let features = win
                .iter()
                .map(|pos| match pos {
                    Some(idx) => {
                        let v = cumulative.get(idx - 1).copied().unwrap_or(0.0);
                        if sigmoid {
                            1.0 / (1.0 + (-v).exp())
                        } else {
                            v
                        }
                    }
                    None => 0.0,
                })
                .collect();
            FeatureRow {
                center: Center::Single(single.clone()),
                features,
            }
        })
        .collect();
    FeatureTable { rows }
}

/// Resolve one same-side companion combination.
///
/// Any null end yields 0; a present pair resolves through the canonical
/// `min -> max` orientation, with absent scores encoded as 0.
fn resolve_companion<L: ScoreLookup>(x: Option<usize>, y: Option<usize>, lookup: &L) -> f64 {
    match (x, y) {
        (Some(a), Some(b)) => lookup.lookup(a.min(b), a.max(b)).unwrap_or(0.0),
        _ => 0.0,
    }
}

/// Build one feature row per center, preserving enumeration order.
fn map_rows<F>(pairs: &[ResiduePair], windows: &[PairWindows], build: F) -> Vec<FeatureRow>
where
    F: Fn(&ResiduePair, &PairWindows) -> FeatureRow + Sync + Send,
{
    #[cfg(feature = "parallel")]
    {
        use rayon::prelude::*;
        pairs
            .par_iter()
            .zip(windows.par_iter())
            .map(|(p, w)| build(p, w))
            .collect()
    }
    #[cfg(not(feature = "parallel"))]
    pairs
        .iter()
        .zip(windows.iter())
        .map(|(p, w)| build(p, w))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::enumerate::eligible_pairs;
    use crate::relation::ScoreRelation;
    use crate::window::expand_pairs;
    use seqnet_core::combin::pairs_up_to;
    use seqnet_core::SeparationBound;
    use seqnet_io::{parse_score_str, ScoreFormat};
    use seqnet_seq::ResidueSeq;

    fn full_relation(n: usize) -> ScoreRelation {
        // score(i, j) = i + j / 100, distinct per pair
        let mut text = String::new();
        for (i, j) in pairs_up_to(n) {
            text.push_str(&format!("{} {} {}\n", i, j, i as f64 + j as f64 / 100.0));
        }
        let table = parse_score_str(&text, ScoreFormat::Generic).unwrap();
        ScoreRelation::from_table(&table)
    }

    fn score(i: usize, j: usize) -> f64 {
        i as f64 + j as f64 / 100.0
    }

    #[test]
    fn offset_table_sizes() {
        assert_eq!(PairMode::Memconp.offsets(2).len(), 25);
        assert_eq!(PairMode::Patch.offsets(2).len(), 25);
        assert_eq!(PairMode::Patch.offsets(1).len(), 9);
        assert_eq!(PairMode::Cross.offsets(2).len(), 5);
        assert_eq!(PairMode::Unchanged.offsets(2), vec![(0, 0)]);
    }

    #[test]
    fn memconp_matches_full_5x5_lattice() {
        let mut lattice = PairMode::Patch.offsets(2);
        lattice.sort();
        let mut memconp = PairMode::Memconp.offsets(0);
        memconp.sort();
        assert_eq!(memconp, lattice);
    }

    #[test]
    fn unipartite_row_width_is_fixed() {
        let seq = ResidueSeq::new("MKVLAWGSKA").unwrap();
        let pairs = eligible_pairs(&seq, &SeparationBound::unbounded());
        let windows = expand_pairs(&pairs, 2, seq.len());
        let table = assign_unipartite(&pairs, &windows, &full_relation(10));

        // 2 * C(5, 2) = 20
        assert_eq!(table.len(), 45);
        assert!(table.rows.iter().all(|r| r.features.len() == 20));
    }

    #[test]
    fn unipartite_w0_has_no_combinations() {
        let seq = ResidueSeq::new("MKVLA").unwrap();
        let pairs = eligible_pairs(&seq, &SeparationBound::unbounded());
        let windows = expand_pairs(&pairs, 0, seq.len());
        let table = assign_unipartite(&pairs, &windows, &full_relation(5));
        assert!(table.rows.iter().all(|r| r.features.is_empty()));
    }

    #[test]
    fn unipartite_interior_values() {
        // N = 10, W = 1, pair (5, 8): left [4,5,6], right [7,8,9].
        // Left combos (4,5) (4,6) (5,6); right combos (7,8) (7,9) (8,9).
        let seq = ResidueSeq::new("MKVLAWGSKA").unwrap();
        let pairs = eligible_pairs(&seq, &SeparationBound::unbounded());
        let windows = expand_pairs(&pairs, 1, seq.len());
        let table = assign_unipartite(&pairs, &windows, &full_relation(10));

        let idx = pairs
            .iter()
            .position(|p| p.fasta_id1 == 5 && p.fasta_id2 == 8)
            .unwrap();
        assert_eq!(
            table.rows[idx].features,
            vec![
                score(4, 5),
                score(4, 6),
                score(5, 6),
                score(7, 8),
                score(7, 9),
                score(8, 9),
            ]
        );
    }

    #[test]
    fn unipartite_null_handling_matches_enumeration() {
        // Pair (1, 5) with W = 2 over N = 5: left window [None, None, 1, 2, 3].
        // With a complete relation, zeros come exactly from the combinations
        // touching a null position: C(5,2) - C(3,2) = 7 on the left side.
        let seq = ResidueSeq::new("MKVLA").unwrap();
        let pairs = eligible_pairs(&seq, &SeparationBound::unbounded());
        let windows = expand_pairs(&pairs, 2, seq.len());
        let table = assign_unipartite(&pairs, &windows, &full_relation(5));

        let idx = pairs
            .iter()
            .position(|p| p.fasta_id1 == 1 && p.fasta_id2 == 5)
            .unwrap();
        let row = &table.rows[idx].features;
        assert_eq!(row.len(), 20);
        let left_zeros = row[..10].iter().filter(|&&v| v == 0.0).count();
        let right_zeros = row[10..].iter().filter(|&&v| v == 0.0).count();
        assert_eq!(left_zeros, 7);
        assert_eq!(right_zeros, 7); // right window [3, 4, 5, None, None]
    }

    #[test]
    fn bipartite_unchanged_scenario() {
        // Spec scenario: N = 10, W = 1, unchanged offsets. Pair (5, 8) has
        // companions (4,7), (5,8), (6,9) and feature length 3·1.
        let seq = ResidueSeq::new("MKVLAWGSKA").unwrap();
        let pairs = eligible_pairs(&seq, &SeparationBound::unbounded());
        let windows = expand_pairs(&pairs, 1, seq.len());
        let offsets = PairMode::Unchanged.offsets(0);
        let table = assign_bipartite(&pairs, &windows, &offsets, 10, &full_relation(10));

        assert_eq!(table.len(), 45);
        assert!(table.rows.iter().all(|r| r.features.len() == 3));

        let idx = pairs
            .iter()
            .position(|p| p.fasta_id1 == 5 && p.fasta_id2 == 8)
            .unwrap();
        assert_eq!(
            table.rows[idx].features,
            vec![score(4, 7), score(5, 8), score(6, 9)]
        );
    }

    #[test]
    fn bipartite_rejects_out_of_range_and_reflexive() {
        let seq = ResidueSeq::new("MKVLA").unwrap();
        let pairs = eligible_pairs(&seq, &SeparationBound::unbounded());
        let windows = expand_pairs(&pairs, 0, seq.len());
        let relation = full_relation(5);

        // Offset that pushes the left companion below 1 for pair (1, 2):
        // left = 1 - 1 = 0 -> out of range -> 0.
        let idx = pairs
            .iter()
            .position(|p| p.fasta_id1 == 1 && p.fasta_id2 == 2)
            .unwrap();
        let table = assign_bipartite(&pairs, &windows, &[(1, 0)], 5, &relation);
        assert_eq!(table.rows[idx].features, vec![0.0]);

        // Offset that collapses the companion to a reflexive pair:
        // left = 2 - 0 = 2, right = 2... pair (2, 3) with dy = 1 gives
        // right = 3 - 1 = 2 == left -> 0.
        let idx23 = pairs
            .iter()
            .position(|p| p.fasta_id1 == 2 && p.fasta_id2 == 3)
            .unwrap();
        let table = assign_bipartite(&pairs, &windows, &[(0, 1)], 5, &relation);
        assert_eq!(table.rows[idx23].features, vec![0.0]);
    }

    #[test]
    fn bipartite_null_window_positions_zero() {
        // Pair (1, 2) with W = 1: left window [None, 1, 2]. Every offset at
        // the null position contributes 0 regardless of the offset table.
        let seq = ResidueSeq::new("MKVLA").unwrap();
        let pairs = eligible_pairs(&seq, &SeparationBound::unbounded());
        let windows = expand_pairs(&pairs, 1, seq.len());
        let offsets = PairMode::Cross.offsets(0);
        let table = assign_bipartite(&pairs, &windows, &offsets, 5, &full_relation(5));

        let idx = pairs
            .iter()
            .position(|p| p.fasta_id1 == 1 && p.fasta_id2 == 2)
            .unwrap();
        let row = &table.rows[idx].features;
        assert_eq!(row.len(), 15);
        assert!(row[..5].iter().all(|&v| v == 0.0), "null position must zero-fill");
    }

    #[test]
    fn missing_scores_are_zero_not_skipped() {
        let seq = ResidueSeq::new("MKVLAW").unwrap();
        let pairs = eligible_pairs(&seq, &SeparationBound::unbounded());
        let windows = expand_pairs(&pairs, 1, seq.len());
        // Empty relation: every companion resolves to 0, rows keep full width.
        let empty = ScoreRelation::default();
        let table = assign_bipartite(
            &pairs,
            &windows,
            &PairMode::Memconp.offsets(0),
            6,
            &empty,
        );
        assert!(table.rows.iter().all(|r| r.features.len() == 75));
        assert!(table
            .rows
            .iter()
            .all(|r| r.features.iter().all(|&v| v == 0.0)));
    }

    #[test]
    fn assigners_are_idempotent() {
        let seq = ResidueSeq::new("MKVLAWGSKA").unwrap();
        let pairs = eligible_pairs(&seq, &SeparationBound::unbounded());
        let windows = expand_pairs(&pairs, 2, seq.len());
        let relation = full_relation(10);

        let first = assign_unipartite(&pairs, &windows, &relation);
        let second = assign_unipartite(&pairs, &windows, &relation);
        assert_eq!(first, second);

        let offsets = PairMode::Memconp.offsets(0);
        let first = assign_bipartite(&pairs, &windows, &offsets, 10, &relation);
        let second = assign_bipartite(&pairs, &windows, &offsets, 10, &relation);
        assert_eq!(first, second);
    }

    #[test]
    fn cumulative_window_and_sigmoid() {
        let seq = ResidueSeq::new("MKVLA").unwrap();
        let rows = crate::enumerate::singles(&seq);
        let windows = crate::window::expand_singles(&rows, 1, seq.len());
        let cumu = vec![0.5, 1.0, 1.5, 2.0, 2.5];

        let table = assign_cumulative(&rows, &windows, &cumu, false);
        assert_eq!(table.len(), 5);
        // residue 1: window [None, 1, 2] -> [0, 0.5, 1.0]
        assert_eq!(table.rows[0].features, vec![0.0, 0.5, 1.0]);
        // residue 3: window [2, 3, 4] -> [1.0, 1.5, 2.0]
        assert_eq!(table.rows[2].features, vec![1.0, 1.5, 2.0]);

        let squashed = assign_cumulative(&rows, &windows, &cumu, true);
        let sig = |v: f64| 1.0 / (1.0 + (-v).exp());
        assert_eq!(
            squashed.rows[2].features,
            vec![sig(1.0), sig(1.5), sig(2.0)]
        );
        // nulls stay 0 even under sigmoid
        assert_eq!(squashed.rows[0].features[0], 0.0);
    }
}
