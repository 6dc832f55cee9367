//! Sequence-separation eligibility bounds.
//!
//! A [`SeparationBound`] restricts which residue-index differences are
//! eligible for pairing. Eligibility is strict on both sides:
//! `inferior < (j - i) < superior`. Either bound may be unset, meaning
//! unbounded on that side.

use crate::{Result, SeqnetError};

/// A pair of optional strict bounds on the sequence separation `j - i`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SeparationBound {
    inferior: Option<i64>,
    superior: Option<i64>,
}

impl SeparationBound {
    /// Create a bound from optional inferior/superior limits.
    ///
    /// # Errors
    ///
    /// Returns a `Config` error if both bounds are set and
    /// `inferior >= superior` (such a bound admits nothing).
    pub fn new(inferior: Option<i64>, superior: Option<i64>) -> Result<Self> {
        if let (Some(inf), Some(sup)) = (inferior, superior) {
            if inf >= sup {
                return Err(SeqnetError::Config(format!(
                    "separation bound inferior ({inf}) must be < superior ({sup})"
                )));
            }
        }
        Ok(Self { inferior, superior })
    }

    /// A bound that admits every separation.
    pub fn unbounded() -> Self {
        Self::default()
    }

    /// The inferior limit, if set.
    pub fn inferior(&self) -> Option<i64> {
        self.inferior
    }

    /// The superior limit, if set.
    pub fn superior(&self) -> Option<i64> {
        self.superior
    }

    /// Whether the separation `j - i` is eligible.
    ///
    /// Both comparisons are strict: a pair sitting exactly on a limit is
    /// rejected. Callers pass indices in file/enumeration order; the
    /// separation is the signed difference `j - i`.
    pub fn admits(&self, i: usize, j: usize) -> bool {
        let sep = j as i64 - i as i64;
        if let Some(inf) = self.inferior {
            if sep <= inf {
                return false;
            }
        }
        if let Some(sup) = self.superior {
            if sep >= sup {
                return false;
            }
        }
        true
    }
}
