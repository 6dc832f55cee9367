//! Pairs-of-interest list parsing.
//!
//! A pairs-of-interest file restricts which residue pairs get scored: one
//! pair of 1-based indices per line, whitespace-separated, with an optional
//! third label column that is ignored.

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use seqnet_core::{Result, SeqnetError};

const SCHEMA: &str = "id_1 id_2 [label]";

/// Parse a pairs-of-interest file into `(id_1, id_2)` pairs in file order.
pub fn parse_pairs_file(path: impl AsRef<Path>) -> Result<Vec<(usize, usize)>> {
    let path = path.as_ref();
    let file = File::open(path).map_err(|e| {
        SeqnetError::Io(std::io::Error::new(
            e.kind(),
            format!("{}: {}", path.display(), e),
        ))
    })?;
    let reader = BufReader::new(file);

    let mut pairs = Vec::new();
    for (line_num, line_result) in reader.lines().enumerate() {
        let line = line_result.map_err(|e| {
            SeqnetError::Io(std::io::Error::new(
                e.kind(),
                format!("{}: line {}: {}", path.display(), line_num + 1, e),
            ))
        })?;
        let trimmed = line.trim();
        if trimmed.is_empty() || trimmed.starts_with('#') {
            continue;
        }
        pairs.push(parse_pairs_line(trimmed, line_num + 1, path)?);
    }
    Ok(pairs)
}

/// Parse pairs-of-interest text from a string.
pub fn parse_pairs_str(text: &str) -> Result<Vec<(usize, usize)>> {
    let dummy = Path::new("<string>");
    text.lines()
        .enumerate()
        .filter(|(_, line)| {
            let t = line.trim();
            !t.is_empty() && !t.starts_with('#')
        })
        .map(|(i, line)| parse_pairs_line(line.trim(), i + 1, dummy))
        .collect()
}

fn parse_pairs_line(line: &str, line_num: usize, path: &Path) -> Result<(usize, usize)> {
    let fields: Vec<&str> = line.split_whitespace().collect();
    if fields.len() < 2 || fields.len() > 3 {
        return Err(SeqnetError::Parse(format!(
            "{}: line {}: expected 2 or 3 whitespace-separated columns ({}), found {}",
            path.display(),
            line_num,
            SCHEMA,
            fields.len()
        )));
    }
    let id1 = fields[0].parse::<usize>().map_err(|_| {
        SeqnetError::Parse(format!(
            "{}: line {}: invalid id_1 '{}'",
            path.display(),
            line_num,
            fields[0]
        ))
    })?;
    let id2 = fields[1].parse::<usize>().map_err(|_| {
        SeqnetError::Parse(format!(
            "{}: line {}: invalid id_2 '{}'",
            path.display(),
            line_num,
            fields[1]
        ))
    })?;
    Ok((id1, id2))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn two_and_three_column_lines() {
        let pairs = parse_pairs_str("1 5\n2 8 interface\n").unwrap();
        assert_eq!(pairs, vec![(1, 5), (2, 8)]);
    }

    #[test]
    fn rejects_single_column() {
        assert!(parse_pairs_str("7\n").is_err());
    }

    #[test]
    fn rejects_extra_columns() {
        assert!(parse_pairs_str("1 2 x y\n").is_err());
    }

    #[test]
    fn file_matches_str() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "# pairs").unwrap();
        writeln!(file, "3 9").unwrap();
        file.flush().unwrap();

        assert_eq!(parse_pairs_file(file.path()).unwrap(), vec![(3, 9)]);
    }
}
