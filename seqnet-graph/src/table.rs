//! The assembled feature table and its delimited writer.
//!
//! One row per central pair/single in enumeration order: the center's
//! identity fields and score placeholder first, then the fixed-width
//! feature vector appended by the assigner. Written as space-delimited
//! text with no header row, the column contract downstream ML consumers
//! depend on.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use seqnet_core::{Result, SeqnetError, Summarizable};

use crate::enumerate::{ResiduePair, ResidueSingle};

/// The center a feature row was generated for.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Center {
    Pair(ResiduePair),
    Single(ResidueSingle),
}

/// One output row: center metadata plus the appended feature vector.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct FeatureRow {
    pub center: Center,
    pub features: Vec<f64>,
}

/// The ordered 2D numeric table produced by one assembly invocation.
///
/// Every row of one invocation has the same feature length (a function of
/// window size and topology only).
#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct FeatureTable {
    pub rows: Vec<FeatureRow>,
}

impl FeatureTable {
    /// Number of rows.
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// Whether the table holds no rows.
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Feature-vector width shared by all rows (0 for an empty table).
    pub fn feature_width(&self) -> usize {
        self.rows.first().map_or(0, |r| r.features.len())
    }

    /// Render the table as space-delimited text, no header row.
    pub fn to_delimited(&self) -> String {
        let mut out = String::new();
        for row in &self.rows {
            let mut fields: Vec<String> = Vec::new();
            match &row.center {
                Center::Pair(p) => {
                    fields.push(p.fasta_id1.to_string());
                    fields.push(p.aa1.to_string());
                    fields.push(p.pdb_id1.to_string());
                    fields.push(p.fasta_id2.to_string());
                    fields.push(p.aa2.to_string());
                    fields.push(p.pdb_id2.to_string());
                    fields.push(p.score.to_string());
                }
                Center::Single(s) => {
                    fields.push(s.fasta_id.to_string());
                    fields.push(s.aa.to_string());
                    fields.push(s.pdb_id.to_string());
                    fields.push(s.score.to_string());
                }
            }
            for v in &row.features {
                fields.push(v.to_string());
            }
            out.push_str(&fields.join(" "));
            out.push('\n');
        }
        out
    }
}

impl Summarizable for FeatureTable {
    fn summary(&self) -> String {
        format!(
            "feature table — {} rows × {} features",
            self.rows.len(),
            self.feature_width()
        )
    }
}

/// Write a feature table as delimited text.
pub fn write_feature_table(path: impl AsRef<Path>, table: &FeatureTable) -> Result<()> {
    let path = path.as_ref();
    let file = File::create(path).map_err(|e| {
        SeqnetError::Io(std::io::Error::new(
            e.kind(),
            format!("{}: {}", path.display(), e),
        ))
    })?;
    let mut writer = BufWriter::new(file);
    writer
        .write_all(table.to_delimited().as_bytes())
        .map_err(SeqnetError::Io)?;
    writer.flush().map_err(SeqnetError::Io)?;
    Ok(())
}
