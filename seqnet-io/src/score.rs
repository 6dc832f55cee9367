//! Pairwise score-file parsing.
//!
//! Each supported predictor writes one scored residue pair per line in its
//! own fixed column layout (except CCMPred, which writes a dense N×N
//! matrix). Parsing reduces every format to the same uniform
//! `(id_1, id_2, score)` relation; the format only decides which columns
//! are read.

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use log::debug;
use seqnet_core::{Result, Scored, SeqnetError, Summarizable};

/// Known pairwise score-file formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ScoreFormat {
    /// Generic whitespace `id_1 id_2 score`.
    Generic,
    /// PSICOV: `id_1 id_2 dist_inf dist_sup score`.
    Psicov,
    /// FreeContact: `id_1 aa_1 id_2 aa_2 MI_score score`.
    FreeContact,
    /// CCMPred: dense whitespace N×N matrix, no header; the diagonal and
    /// lower triangle are ignored.
    Ccmpred,
    /// GDCA: `id_1 id_2 score`.
    Gdca,
    /// PLMC: `id_1 aa_1 id_2 aa_2 placeholder score`.
    Plmc,
    /// Mutual information: `id_1 id_2 score`.
    Mi,
}

impl ScoreFormat {
    /// The expected column schema, used in parse diagnostics.
    pub fn schema(&self) -> &'static str {
        match self {
            ScoreFormat::Generic => "id_1 id_2 score",
            ScoreFormat::Psicov => "id_1 id_2 dist_inf dist_sup score",
            ScoreFormat::FreeContact => "id_1 aa_1 id_2 aa_2 MI_score score",
            ScoreFormat::Ccmpred => "dense N×N score matrix, one row per line",
            ScoreFormat::Gdca => "id_1 id_2 score",
            ScoreFormat::Plmc => "id_1 aa_1 id_2 aa_2 placeholder score",
            ScoreFormat::Mi => "id_1 id_2 score",
        }
    }

    /// Expected column count for tabular formats (`None` for the matrix).
    fn column_count(&self) -> Option<usize> {
        match self {
            ScoreFormat::Generic | ScoreFormat::Gdca | ScoreFormat::Mi => Some(3),
            ScoreFormat::Psicov => Some(5),
            ScoreFormat::FreeContact | ScoreFormat::Plmc => Some(6),
            ScoreFormat::Ccmpred => None,
        }
    }

    /// Zero-based positions of the `(id_1, id_2, score)` columns.
    fn picks(&self) -> (usize, usize, usize) {
        match self {
            ScoreFormat::Generic | ScoreFormat::Gdca | ScoreFormat::Mi => (0, 1, 2),
            ScoreFormat::Psicov => (0, 1, 4),
            ScoreFormat::FreeContact | ScoreFormat::Plmc => (0, 2, 5),
            // Matrix parsing never consults picks.
            ScoreFormat::Ccmpred => (0, 1, 2),
        }
    }
}

/// One scored residue pair.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ScoreRecord {
    /// 1-based index of the first residue.
    pub id1: usize,
    /// 1-based index of the second residue.
    pub id2: usize,
    /// Predictor score for the pair.
    pub score: f64,
}

impl Scored for ScoreRecord {
    fn score(&self) -> f64 {
        self.score
    }
}

/// The uniform `(id_1, id_2, score)` relation parsed from a score file.
///
/// Records keep file order. Derived views (sorting, filtering, joining,
/// top-L, cumulative) live in [`crate::views`].
#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ScoreTable {
    records: Vec<ScoreRecord>,
}

impl ScoreTable {
    /// Build a table from records, keeping their order.
    pub fn new(records: Vec<ScoreRecord>) -> Self {
        Self { records }
    }

    /// The parsed records in file order.
    pub fn records(&self) -> &[ScoreRecord] {
        &self.records
    }

    /// Number of scored pairs.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Whether the table holds no records.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

impl Summarizable for ScoreTable {
    fn summary(&self) -> String {
        let max_id = self
            .records
            .iter()
            .map(|r| r.id1.max(r.id2))
            .max()
            .unwrap_or(0);
        format!("score table — {} pairs, ids up to {}", self.records.len(), max_id)
    }
}

/// Parse a score file in the given format.
pub fn parse_score_file(path: impl AsRef<Path>, format: ScoreFormat) -> Result<ScoreTable> {
    let path = path.as_ref();
    let file = File::open(path).map_err(|e| {
        SeqnetError::Io(std::io::Error::new(
            e.kind(),
            format!("{}: {}", path.display(), e),
        ))
    })?;
    let reader = BufReader::new(file);

    // Read all data lines (skip blanks and comments)
    let mut data_lines: Vec<(usize, String)> = Vec::new();
    for (line_num, line_result) in reader.lines().enumerate() {
        let line = line_result.map_err(|e| {
            SeqnetError::Io(std::io::Error::new(
                e.kind(),
                format!("{}: line {}: {}", path.display(), line_num + 1, e),
            ))
        })?;
        let trimmed = line.trim().to_string();
        if trimmed.is_empty() || trimmed.starts_with('#') {
            continue;
        }
        data_lines.push((line_num + 1, trimmed));
    }

    let table = parse_data_lines(&data_lines, format, path)?;
    debug!(
        "parsed {} as {:?}: {} scored pairs",
        path.display(),
        format,
        table.len()
    );
    Ok(table)
}

/// Parse score text from a string.
///
/// Behaves like [`parse_score_file`] but reads from an in-memory string
/// instead of a file.
pub fn parse_score_str(text: &str, format: ScoreFormat) -> Result<ScoreTable> {
    let dummy = Path::new("<string>");
    let data_lines: Vec<(usize, String)> = text
        .lines()
        .enumerate()
        .filter(|(_, line)| {
            let t = line.trim();
            !t.is_empty() && !t.starts_with('#')
        })
        .map(|(i, line)| (i + 1, line.trim().to_string()))
        .collect();
    parse_data_lines(&data_lines, format, dummy)
}

fn parse_data_lines(
    data_lines: &[(usize, String)],
    format: ScoreFormat,
    path: &Path,
) -> Result<ScoreTable> {
    let expected = match format.column_count() {
        Some(count) => count,
        None => return parse_matrix_lines(data_lines, path),
    };

    #[cfg(feature = "parallel")]
    let records: Result<Vec<ScoreRecord>> = {
        use rayon::prelude::*;
        data_lines
            .par_iter()
            .map(|(line_num, line)| parse_tabular_line(line, *line_num, path, format, expected))
            .collect()
    };
    #[cfg(not(feature = "parallel"))]
    let records: Result<Vec<ScoreRecord>> = data_lines
        .iter()
        .map(|(line_num, line)| parse_tabular_line(line, *line_num, path, format, expected))
        .collect();

    Ok(ScoreTable::new(records?))
}

/// Parse one whitespace-tabular line per the format's column layout.
fn parse_tabular_line(
    line: &str,
    line_num: usize,
    path: &Path,
    format: ScoreFormat,
    expected: usize,
) -> Result<ScoreRecord> {
    let fields: Vec<&str> = line.split_whitespace().collect();
    if fields.len() != expected {
        return Err(SeqnetError::Parse(format!(
            "{}: line {}: expected {} whitespace-separated columns ({}), found {}",
            path.display(),
            line_num,
            expected,
            format.schema(),
            fields.len()
        )));
    }

    let (c1, c2, cs) = format.picks();
    let id1 = parse_id(fields[c1], "id_1", line_num, path)?;
    let id2 = parse_id(fields[c2], "id_2", line_num, path)?;
    let score = fields[cs].parse::<f64>().map_err(|_| {
        SeqnetError::Parse(format!(
            "{}: line {}: invalid score '{}'",
            path.display(),
            line_num,
            fields[cs]
        ))
    })?;

    Ok(ScoreRecord { id1, id2, score })
}

fn parse_id(field: &str, name: &str, line_num: usize, path: &Path) -> Result<usize> {
    field.parse::<usize>().map_err(|_| {
        SeqnetError::Parse(format!(
            "{}: line {}: invalid {} '{}' (expected a 1-based residue index)",
            path.display(),
            line_num,
            name,
            field
        ))
    })
}

/// Triangularize a dense CCMPred matrix into `(i+1, j+1, m[i][j])` triples
/// for `i < j`, ascending by row then column.
fn parse_matrix_lines(data_lines: &[(usize, String)], path: &Path) -> Result<ScoreTable> {
    let n = data_lines.len();
    let mut matrix: Vec<Vec<f64>> = Vec::with_capacity(n);

    for (line_num, line) in data_lines {
        let row: Vec<f64> = line
            .split_whitespace()
            .map(|f| {
                f.parse::<f64>().map_err(|_| {
                    SeqnetError::Parse(format!(
                        "{}: line {}: invalid matrix entry '{}'",
                        path.display(),
                        line_num,
                        f
                    ))
                })
            })
            .collect::<Result<_>>()?;
        if row.len() != n {
            return Err(SeqnetError::Parse(format!(
                "{}: line {}: expected {} columns ({}), found {}",
                path.display(),
                line_num,
                n,
                ScoreFormat::Ccmpred.schema(),
                row.len()
            )));
        }
        matrix.push(row);
    }

    let mut records = Vec::with_capacity(n.saturating_sub(1) * n / 2);
    for i in 0..n {
        for j in (i + 1)..n {
            records.push(ScoreRecord {
                id1: i + 1,
                id2: j + 1,
                score: matrix[i][j],
            });
        }
    }
    Ok(ScoreTable::new(records))
}
