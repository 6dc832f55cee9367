//! FASTA input glue.
//!
//! The feature assembler consumes a plain sequence string; these helpers
//! reduce a FASTA file to that string.

use std::path::Path;

use needletail::parse_fastx_file;
use seqnet_core::{Result, SeqnetError};

use crate::residue::ResidueSeq;

/// Read every record of a FASTA file as `(id, sequence)` pairs.
pub fn read_fasta(path: impl AsRef<Path>) -> Result<Vec<(String, ResidueSeq)>> {
    let path = path.as_ref();
    let mut reader = parse_fastx_file(path)
        .map_err(|e| SeqnetError::Parse(format!("{}: {}", path.display(), e)))?;

    let mut records = Vec::new();
    while let Some(record) = reader.next() {
        let record =
            record.map_err(|e| SeqnetError::Parse(format!("{}: {}", path.display(), e)))?;
        let id = String::from_utf8_lossy(record.id()).into_owned();
        let seq = ResidueSeq::new(record.seq().as_ref())?;
        records.push((id, seq));
    }
    Ok(records)
}

/// Read the first record of a FASTA file as a [`ResidueSeq`].
///
/// # Errors
///
/// Returns a parse error when the file has no records.
pub fn read_fasta_first(path: impl AsRef<Path>) -> Result<ResidueSeq> {
    let path = path.as_ref();
    read_fasta(path)?
        .into_iter()
        .next()
        .map(|(_, seq)| seq)
        .ok_or_else(|| SeqnetError::Parse(format!("{}: no FASTA records", path.display())))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn reads_first_record() {
        let mut file = NamedTempFile::with_suffix(".fasta").unwrap();
        writeln!(file, ">prot1").unwrap();
        writeln!(file, "MKVLAW").unwrap();
        writeln!(file, ">prot2").unwrap();
        writeln!(file, "GGGG").unwrap();
        file.flush().unwrap();

        let seq = read_fasta_first(file.path()).unwrap();
        assert_eq!(seq.as_ref(), b"MKVLAW");
    }

    #[test]
    fn reads_all_records() {
        let mut file = NamedTempFile::with_suffix(".fasta").unwrap();
        writeln!(file, ">a").unwrap();
        writeln!(file, "MKV").unwrap();
        writeln!(file, "LAW").unwrap();
        writeln!(file, ">b").unwrap();
        writeln!(file, "GG").unwrap();
        file.flush().unwrap();

        let records = read_fasta(file.path()).unwrap();
        assert_eq!(records.len(), 2);
        assert_eq!(records[0].0, "a");
        // multi-line sequences are concatenated
        assert_eq!(records[0].1.as_ref(), b"MKVLAW");
        assert_eq!(records[1].1.as_ref(), b"GG");
    }

    #[test]
    fn missing_file_is_an_error() {
        assert!(read_fasta_first("/nonexistent/file.fasta").is_err());
    }
}
