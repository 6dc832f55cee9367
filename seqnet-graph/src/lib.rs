//! Windowed residue-pair feature assembly.
//!
//! `seqnet-graph` is the engine of the seqnet workspace: given a protein
//! sequence and a parsed pairwise score table, it enumerates the eligible
//! central residue pairs (or singles), slides a symmetric window over each
//! center, generates companion index pairs per a selectable graph topology,
//! and resolves every companion's score into a fixed-width feature vector.
//!
//! - [`enumerate`] — separation-bounded central pair/single enumeration
//! - [`window`] — symmetric window expansion with null sentinels
//! - [`relation`] — the hash-backed score lookup built once per invocation
//! - [`assign`] — the unipartite / bipartite / cumulative assigners
//! - [`table`] — the output feature table and its delimited writer
//! - [`pipeline`] — the orchestration entry point and its configuration

pub mod assign;
pub mod enumerate;
pub mod pipeline;
pub mod relation;
pub mod table;
pub mod window;

pub use assign::{assign_bipartite, assign_cumulative, assign_unipartite, PairMode};
pub use enumerate::{eligible_pairs, singles, ResiduePair, ResidueSingle};
pub use pipeline::{assemble, assemble_from_table, AssemblyConfig, Method};
pub use relation::{ScoreLookup, ScoreRelation};
pub use table::{write_feature_table, Center, FeatureRow, FeatureTable};
pub use window::{expand_pairs, expand_singles, expand_window, PairWindows};
