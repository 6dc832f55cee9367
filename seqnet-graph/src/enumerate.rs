//! Central pair and single enumeration.
//!
//! Produces the ordered set of residue centers the assigners iterate over:
//! every unordered index pair admitted by the separation bound (pair
//! topologies), or every residue (cumulative topology). Each center carries
//! both a fasta-id and a pdb-id slot per index; the two are equal at
//! enumeration time since no PDB remapping has occurred yet, and downstream
//! consumers may overwrite the pdb slot.

use seqnet_core::combin::pairs_up_to;
use seqnet_core::{Scored, SeparationBound};
use seqnet_seq::ResidueSeq;

/// An unordered pair of residue centers with identities and a score
/// placeholder (0 until assigned).
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ResiduePair {
    pub fasta_id1: usize,
    pub aa1: char,
    pub pdb_id1: usize,
    pub fasta_id2: usize,
    pub aa2: char,
    pub pdb_id2: usize,
    pub score: f64,
}

impl Scored for ResiduePair {
    fn score(&self) -> f64 {
        self.score
    }
}

/// A single residue center, used only by the cumulative topology.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ResidueSingle {
    pub fasta_id: usize,
    pub aa: char,
    pub pdb_id: usize,
    pub score: f64,
}

impl Scored for ResidueSingle {
    fn score(&self) -> f64 {
        self.score
    }
}

/// All residue pairs `(i, j)` with `i < j` admitted by the separation
/// bound, ascending by `(i, j)`.
///
/// An empty eligible set is returned as an empty vector, not an error;
/// callers must tolerate zero-row output.
pub fn eligible_pairs(seq: &ResidueSeq, bound: &SeparationBound) -> Vec<ResiduePair> {
    let n = seq.len();
    pairs_up_to(n)
        .into_iter()
        .filter(|&(i, j)| bound.admits(i, j))
        .map(|(i, j)| ResiduePair {
            fasta_id1: i,
            aa1: seq[i - 1] as char,
            pdb_id1: i,
            fasta_id2: j,
            aa2: seq[j - 1] as char,
            pdb_id2: j,
            score: 0.0,
        })
        .collect()
}

/// One single-center row per residue, ascending by index.
pub fn singles(seq: &ResidueSeq) -> Vec<ResidueSingle> {
    seq.iter()
        .enumerate()
        .map(|(idx, &b)| ResidueSingle {
            fasta_id: idx + 1,
            aa: b as char,
            pdb_id: idx + 1,
            score: 0.0,
        })
        .collect()
}
