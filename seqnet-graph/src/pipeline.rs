//! Orchestration entry point for feature assembly.
//!
//! [`assemble`] wires the whole flow: validate the configuration (fail
//! fast, before any file I/O), parse the score file once, build the score
//! relation once, enumerate centers, expand windows, run the selected
//! assigner, and return the feature table. Persisting the table is the
//! caller's concern ([`crate::table::write_feature_table`]).

use std::path::Path;

use log::debug;
use seqnet_core::{Result, SeparationBound, SeqnetError, Summarizable};
use seqnet_io::{parse_score_file, ScoreFormat, ScoreTable};
use seqnet_seq::ResidueSeq;

use crate::assign::{assign_bipartite, assign_cumulative, assign_unipartite, PairMode};
use crate::enumerate::{eligible_pairs, singles};
use crate::relation::ScoreRelation;
use crate::table::FeatureTable;
use crate::window::{expand_pairs, expand_singles};

/// Graph topology of one assembly invocation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Method {
    /// Same-side window combinations per central pair.
    Unipartite,
    /// Cross-side offset companions per central pair.
    Bipartite,
    /// Per-residue cumulative scores per single center.
    Cumulative,
}

/// Configuration for one assembly invocation.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AssemblyConfig {
    /// Graph topology (default: unipartite).
    pub method: Method,
    /// Window half-width W; each window spans 2W+1 positions (default: 2).
    pub window_size: usize,
    /// Strict lower separation bound, unset = unbounded (default: unset).
    pub seq_sep_inferior: Option<i64>,
    /// Strict upper separation bound, unset = unbounded (default: unset).
    pub seq_sep_superior: Option<i64>,
    /// Bipartite companion-offset topology (default: patch).
    pub pair_mode: PairMode,
    /// Patch lattice half-width L for `PairMode::Patch` (default: 2).
    pub patch_size: usize,
    /// Score-file format (default: generic).
    pub input_kind: ScoreFormat,
    /// Cumulative top-L fraction in (0, 1]; L = max(1, round(ratio · N))
    /// (default: 1.0).
    pub cumu_ratio: f64,
    /// Pass cumulative values through a sigmoid (default: false).
    pub sigmoid: bool,
}

impl Default for AssemblyConfig {
    fn default() -> Self {
        Self {
            method: Method::Unipartite,
            window_size: 2,
            seq_sep_inferior: None,
            seq_sep_superior: None,
            pair_mode: PairMode::Patch,
            patch_size: 2,
            input_kind: ScoreFormat::Generic,
            cumu_ratio: 1.0,
            sigmoid: false,
        }
    }
}

impl AssemblyConfig {
    /// Validate the configuration.
    ///
    /// # Errors
    ///
    /// Returns a `Config` error for an inverted separation bound or a
    /// cumulative ratio outside (0, 1].
    pub fn validate(&self) -> Result<()> {
        SeparationBound::new(self.seq_sep_inferior, self.seq_sep_superior)?;
        if self.method == Method::Cumulative
            && !(self.cumu_ratio > 0.0 && self.cumu_ratio <= 1.0)
        {
            return Err(SeqnetError::Config(format!(
                "cumu_ratio must be in (0, 1], got {}",
                self.cumu_ratio
            )));
        }
        Ok(())
    }

    fn bound(&self) -> Result<SeparationBound> {
        SeparationBound::new(self.seq_sep_inferior, self.seq_sep_superior)
    }
}

/// Assemble the feature table for a sequence and a score file.
///
/// The score file is parsed exactly once; all score resolution goes
/// through the relation built from that single parse.
pub fn assemble(
    seq: &ResidueSeq,
    score_path: impl AsRef<Path>,
    config: &AssemblyConfig,
) -> Result<FeatureTable> {
    config.validate()?;
    let table = parse_score_file(score_path, config.input_kind)?;
    assemble_from_table(seq, &table, config)
}

/// Assemble the feature table from an already-parsed score table.
///
/// Entry point for callers that hold the table in memory (or parse it
/// through other means); [`assemble`] delegates here after its single
/// parse.
pub fn assemble_from_table(
    seq: &ResidueSeq,
    score_table: &ScoreTable,
    config: &AssemblyConfig,
) -> Result<FeatureTable> {
    config.validate()?;
    let n = seq.len();
    let bound = config.bound()?;

    let table = match config.method {
        Method::Unipartite => {
            let pairs = eligible_pairs(seq, &bound);
            let windows = expand_pairs(&pairs, config.window_size, n);
            let relation = ScoreRelation::from_table(score_table);
            assign_unipartite(&pairs, &windows, &relation)
        }
        Method::Bipartite => {
            let pairs = eligible_pairs(seq, &bound);
            let windows = expand_pairs(&pairs, config.window_size, n);
            let relation = ScoreRelation::from_table(score_table);
            let offsets = config.pair_mode.offsets(config.patch_size as i64);
            assign_bipartite(&pairs, &windows, &offsets, n, &relation)
        }
        Method::Cumulative => {
            let centers = singles(seq);
            let windows = expand_singles(&centers, config.window_size, n);
            let l = ((config.cumu_ratio * n as f64).round() as usize).clamp(1, n.max(1));
            let cumulative = score_table.cumulative_scores(n, l);
            assign_cumulative(&centers, &windows, &cumulative, config.sigmoid)
        }
    };

    debug!("assembled {} ({:?})", table.summary(), config.method);
    Ok(table)
}
