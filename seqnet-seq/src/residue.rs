//! Validated protein sequence with 1-based residue addressing.
//!
//! [`ResidueSeq`] is a newtype over `Vec<u8>`. Construction uppercases and
//! validates every byte against the protein alphabet, so the inner data is
//! always uppercase and `as_bytes()` is zero-cost to pass to downstream
//! `&[u8]` APIs. All residue addressing is 1-based: `residue(1)` is the
//! first residue, `residue(n)` the last.

use std::collections::BTreeMap;
use std::fmt;
use std::ops::Deref;

use seqnet_core::{Sequence, SeqnetError, Summarizable};

/// Valid uppercase protein bytes: 20 standard amino acids plus `XBZJUO*`.
const PROTEIN_BYTES: &[u8] = b"ACDEFGHIKLMNPQRSTVWYXBZJUO*";

/// A validated uppercase protein sequence addressed by 1-based indices.
#[derive(Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ResidueSeq {
    data: Vec<u8>,
}

impl ResidueSeq {
    /// Create a validated sequence from raw bytes.
    ///
    /// Input is uppercased, then every byte is checked against the protein
    /// alphabet. Returns an error naming the offending byte and its
    /// position if any byte is invalid after uppercasing.
    pub fn new(bytes: impl AsRef<[u8]>) -> seqnet_core::Result<Self> {
        let data: Vec<u8> = bytes
            .as_ref()
            .iter()
            .map(|b| b.to_ascii_uppercase())
            .collect();
        for (i, &b) in data.iter().enumerate() {
            if !PROTEIN_BYTES.contains(&b) {
                return Err(SeqnetError::InvalidInput(format!(
                    "invalid protein byte '{}' (0x{:02X}) at position {}",
                    b as char, b, i
                )));
            }
        }
        Ok(Self { data })
    }

    /// The residue at 1-based index `i`, or `None` when `i` is outside
    /// `[1, len]`.
    ///
    /// This is the canonical translation between 0-based storage and the
    /// 1-based biological numbering used throughout the workspace.
    pub fn residue(&self, i: usize) -> Option<u8> {
        if i == 0 || i > self.data.len() {
            return None;
        }
        Some(self.data[i - 1])
    }

    /// The full 1-based index -> residue map: `{1: seq[0], 2: seq[1], ...}`.
    pub fn index_map(&self) -> BTreeMap<usize, char> {
        self.data
            .iter()
            .enumerate()
            .map(|(i, &b)| (i + 1, b as char))
            .collect()
    }

    /// Consume the sequence and return the inner byte vector.
    pub fn into_bytes(self) -> Vec<u8> {
        self.data
    }
}

impl Deref for ResidueSeq {
    type Target = [u8];

    fn deref(&self) -> &[u8] {
        &self.data
    }
}

impl AsRef<[u8]> for ResidueSeq {
    fn as_ref(&self) -> &[u8] {
        &self.data
    }
}

impl Sequence for ResidueSeq {
    fn as_bytes(&self) -> &[u8] {
        &self.data
    }
}

impl Summarizable for ResidueSeq {
    fn summary(&self) -> String {
        let preview_len = self.data.len().min(20);
        let preview = std::str::from_utf8(&self.data[..preview_len]).unwrap_or("???");
        if self.data.len() > 20 {
            format!("protein sequence ({} aa): {}...", self.data.len(), preview)
        } else {
            format!("protein sequence ({} aa): {}", self.data.len(), preview)
        }
    }
}

impl fmt::Debug for ResidueSeq {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = std::str::from_utf8(&self.data).unwrap_or("???");
        write!(f, "ResidueSeq(\"{s}\")")
    }
}

impl fmt::Display for ResidueSeq {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = std::str::from_utf8(&self.data).unwrap_or("???");
        f.write_str(s)
    }
}
