//! Combinatorial primitives for residue-index enumeration.
//!
//! Provides the pair and range enumerations used by the pair enumerator,
//! the symmetric offset lattices used by the bipartite patch topology, and
//! nested-map construction from flat score triples.

use std::collections::HashMap;

/// All unordered pairs `(i, j)` with `1 <= i < j <= n`, ascending by `i`
/// then `j`.
pub fn pairs_up_to(n: usize) -> Vec<(usize, usize)> {
    let mut pairs = Vec::with_capacity(n.saturating_sub(1) * n / 2);
    for i in 1..=n {
        for j in (i + 1)..=n {
            pairs.push((i, j));
        }
    }
    pairs
}

/// All pairs `(i, j)` with `1 <= i <= j <= n` (includes the diagonal),
/// ascending by `i` then `j`.
pub fn pairs_upper_triangular_inclusive(n: usize) -> Vec<(usize, usize)> {
    let mut pairs = Vec::with_capacity(n * (n + 1) / 2);
    for i in 1..=n {
        for j in i..=n {
            pairs.push((i, j));
        }
    }
    pairs
}

/// The inclusive integer range `lo..=hi` as a vector.
///
/// Returns an empty vector when `lo > hi`.
pub fn single_range(lo: usize, hi: usize) -> Vec<usize> {
    (lo..=hi).collect()
}

/// All offsets `(dx, dy)` in `[-l, l] x [-l, l]`, stepped by `step` on each
/// axis, ascending by `dx` then `dy`.
///
/// A step of 1 yields the full `(2l + 1)^2` lattice used by the bipartite
/// "patch" topology.
pub fn offset_lattice(l: i64, step: usize) -> Vec<(i64, i64)> {
    let mut offsets = Vec::new();
    for dx in (-l..=l).step_by(step.max(1)) {
        for dy in (-l..=l).step_by(step.max(1)) {
            offsets.push((dx, dy));
        }
    }
    offsets
}

/// Build a two-level map `id1 -> id2 -> score` from flat triples.
///
/// The last write wins for a duplicate `(id1, id2)`; duplicates are not an
/// error.
pub fn nested_from_triples(rows: &[(usize, usize, f64)]) -> HashMap<usize, HashMap<usize, f64>> {
    let mut map: HashMap<usize, HashMap<usize, f64>> = HashMap::new();
    for &(id1, id2, score) in rows {
        map.entry(id1).or_default().insert(id2, score);
    }
    map
}

/// Build a two-level map `id1 -> id2 -> payload` from rows with three or
/// more columns, where the payload is everything past the two ids.
///
/// Rows must have at least three columns; the first two are truncated to
/// integer ids. The last write wins for a duplicate `(id1, id2)`.
///
/// # Panics
///
/// Panics on rows with fewer than three columns. This is an internal-only
/// primitive with controlled callers; ragged input is a caller bug.
pub fn nested_from_rows(rows: &[Vec<f64>]) -> HashMap<usize, HashMap<usize, Vec<f64>>> {
    let mut map: HashMap<usize, HashMap<usize, Vec<f64>>> = HashMap::new();
    for row in rows {
        let id1 = row[0] as usize;
        let id2 = row[1] as usize;
        map.entry(id1).or_default().insert(id2, row[2..].to_vec());
    }
    map
}
