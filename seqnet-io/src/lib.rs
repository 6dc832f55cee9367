//! Flat-text readers for the seqnet feature assembler.
//!
//! Supported inputs:
//! - **Pairwise score files** — the output of residue-contact predictors in
//!   several fixed column layouts ([`ScoreFormat`]), reduced to a uniform
//!   `(id_1, id_2, score)` table
//! - **Pairs of interest** — 2-or-3-column residue-index pair lists used to
//!   restrict which pairs get scored
//!
//! All parsers are fatal on malformed rows (these are deterministic pipeline
//! inputs, not external services) and surface the offending file path, line
//! number, and expected column schema.

pub mod pairs;
pub mod score;
pub mod views;

pub use pairs::{parse_pairs_file, parse_pairs_str};
pub use score::{parse_score_file, parse_score_str, ScoreFormat, ScoreRecord, ScoreTable};
