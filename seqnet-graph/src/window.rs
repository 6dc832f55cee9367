//! Symmetric window expansion around residue centers.
//!
//! For a center index `a` and window size `W`, the window is the 2W+1
//! indices `a-W ..= a+W` in ascending order, with every index outside
//! `[1, N]` replaced by `None` — never wrapped and never clamped to the
//! boundary. The center sits at offset `W` in its own window.

use crate::enumerate::{ResiduePair, ResidueSingle};

/// The two window index sets of a central pair: left-center and
/// right-center side by side.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PairWindows {
    pub left: Vec<Option<usize>>,
    pub right: Vec<Option<usize>>,
}

/// Expand one center into its 2W+1 window indices.
pub fn expand_window(center: usize, window_size: usize, n: usize) -> Vec<Option<usize>> {
    let w = window_size as i64;
    (-w..=w)
        .map(|off| {
            let idx = center as i64 + off;
            if idx >= 1 && idx <= n as i64 {
                Some(idx as usize)
            } else {
                None
            }
        })
        .collect()
}

/// Expand every central pair into its two side-by-side window sets.
///
/// The output has one entry per input pair, in input order.
pub fn expand_pairs(pairs: &[ResiduePair], window_size: usize, n: usize) -> Vec<PairWindows> {
    pairs
        .iter()
        .map(|p| PairWindows {
            left: expand_window(p.fasta_id1, window_size, n),
            right: expand_window(p.fasta_id2, window_size, n),
        })
        .collect()
}

/// Expand every single center into its flat window.
pub fn expand_singles(
    singles: &[ResidueSingle],
    window_size: usize,
    n: usize,
) -> Vec<Vec<Option<usize>>> {
    singles
        .iter()
        .map(|s| expand_window(s.fasta_id, window_size, n))
        .collect()
}
