//! Shared primitives for the seqnet residue-pair feature toolkit.
//!
//! `seqnet-core` provides the foundation that the other seqnet crates build on:
//!
//! - **Error types** — [`SeqnetError`] and [`Result`] for structured error handling
//! - **Traits** — Core abstractions like [`Sequence`], [`Scored`], [`Summarizable`]
//! - **Combinatorics** — Residue-index pair enumeration and offset lattices
//! - **Separation bounds** — The strict sequence-separation eligibility predicate

pub mod combin;
pub mod error;
pub mod separation;
pub mod traits;

pub use error::{Result, SeqnetError};
pub use separation::SeparationBound;
pub use traits::*;
