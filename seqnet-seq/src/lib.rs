//! Protein sequence handling for the seqnet workspace.
//!
//! Provides [`ResidueSeq`], a validated uppercase protein sequence addressed
//! by 1-based residue indices (the biological numbering convention used by
//! every downstream seqnet component), and FASTA input glue.

pub mod fasta;
pub mod residue;

pub use fasta::{read_fasta, read_fasta_first};
pub use residue::ResidueSeq;
