//! Inductive verification of the single-swap order.
//!
//! Walking the single-swap order over a sequence of length `k` amounts to
//! `k` rounds of permuting the first `k - 1` elements, separated by one swap
//! that moves a new element into the last position. Given the final index
//! list of length `k - 1`, a round is a single composition, so length `k`
//! can be checked in `O(k)` work per round instead of `O(k!)`. The order is
//! complete for length `k` iff every one of the `k` indexes visits the last
//! position.

use alloc::vec;
use alloc::vec::Vec;
use core::mem;

use thiserror::Error;
use tracing::{debug, trace, warn};

/// The final index list of the single-swap order over three elements.
pub const BASE_CASE: [usize; 3] = [2, 1, 0];

/// Errors reported by the verifier.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum VerifyError {
    /// Some index never reached the last position.
    #[error("only {observed} of {length} indexes reached the last position at length {length}")]
    Incomplete {
        /// The length that failed verification.
        length: usize,
        /// Number of distinct indexes seen in the last position.
        observed: usize,
    },
    /// A seed index list is not a permutation.
    #[error("index {index} is out of range or repeated in a seed of length {len}")]
    MalformedSeed {
        /// Length of the seed.
        len: usize,
        /// The offending index.
        index: usize,
    },
}

impl VerifyError {
    /// Returns the length at which verification failed.
    pub fn length(&self) -> usize {
        match *self {
            VerifyError::Incomplete { length, .. } => length,
            VerifyError::MalformedSeed { len, .. } => len,
        }
    }
}

/// Parity of the length being verified, selecting where each round's swap
/// pivots.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Parity {
    /// Round `i` swaps position `i` with the last position.
    Even,
    /// Every round swaps the first position with the last position.
    Odd,
}

impl Parity {
    /// Returns the parity of `len`.
    #[inline]
    pub const fn of(len: usize) -> Parity {
        if len & 1 == 0 {
            Parity::Even
        } else {
            Parity::Odd
        }
    }

    #[inline]
    const fn pivot(self, round: usize) -> usize {
        match self {
            Parity::Even => round,
            Parity::Odd => 0,
        }
    }
}

fn check_permutation(indices: &[usize]) -> Result<(), VerifyError> {
    let len = indices.len();
    let mut seen = vec![false; len];
    for &index in indices {
        if index >= len || mem::replace(&mut seen[index], true) {
            return Err(VerifyError::MalformedSeed { len, index });
        }
    }
    Ok(())
}

/// Verifies the single-swap order for length `previous.len() + 1`.
///
/// `previous` is the verified final index list of the shorter length. On
/// success returns the final index list of the new length.
///
/// `previous` must be a permutation of `0..previous.len()`; this is checked
/// in debug builds only.
pub fn verify(previous: &[usize]) -> Result<Vec<usize>, VerifyError> {
    debug_assert!(
        check_permutation(previous).is_ok(),
        "previous index list is not a permutation"
    );

    let length = previous.len() + 1;
    let last = length - 1;
    let parity = Parity::of(length);

    let mut current = Vec::with_capacity(length);
    current.extend_from_slice(previous);
    current.push(last);

    let mut endings = vec![false; length];
    endings[last] = true;
    let mut observed = 1;

    let mut prefix = Vec::with_capacity(last);
    for round in 0..last {
        current.swap(parity.pivot(round), last);

        let ending = current[last];
        if !mem::replace(&mut endings[ending], true) {
            observed += 1;
        }

        // Permute the prefix by the shorter length's final arrangement.
        prefix.clear();
        prefix.extend(previous.iter().map(|&i| current[i]));
        current[..last].copy_from_slice(&prefix);

        trace!(length, round, ending, "verified round");
    }

    if observed != length {
        warn!(length, observed, "single-swap order is incomplete");
        return Err(VerifyError::Incomplete { length, observed });
    }
    Ok(current)
}

/// Cursor verifying successive lengths, one per step.
///
/// Holds the last verified index list. Each successful step replaces it with
/// the list for the next length. As an [`Iterator`] it yields each verified
/// length and ends after the first failure; it never ends otherwise.
#[derive(Debug, Clone)]
pub struct Verifier {
    record: Vec<usize>,
    failed: bool,
}

impl Verifier {
    /// Creates a verifier starting from [`BASE_CASE`].
    pub fn new() -> Self {
        Verifier {
            record: BASE_CASE.to_vec(),
            failed: false,
        }
    }

    /// Creates a verifier starting from an already verified index list.
    pub fn from_seed(seed: Vec<usize>) -> Result<Self, VerifyError> {
        check_permutation(&seed)?;
        Ok(Verifier {
            record: seed,
            failed: false,
        })
    }

    /// Returns the last verified index list.
    #[inline]
    pub fn record(&self) -> &[usize] {
        &self.record
    }

    /// Consumes the verifier, returning the last verified index list.
    #[inline]
    pub fn into_record(self) -> Vec<usize> {
        self.record
    }

    /// Verifies the next length, returning it on success.
    ///
    /// The record is left untouched on failure.
    pub fn step(&mut self) -> Result<usize, VerifyError> {
        match verify(&self.record) {
            Ok(next) => {
                self.record = next;
                debug!(length = self.record.len(), "verified length");
                Ok(self.record.len())
            }
            Err(e) => {
                self.failed = true;
                Err(e)
            }
        }
    }
}

impl Default for Verifier {
    fn default() -> Self {
        Verifier::new()
    }
}

impl Iterator for Verifier {
    type Item = Result<usize, VerifyError>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.failed {
            return None;
        }
        Some(self.step())
    }
}

/// Verifies every length from the base case through `max_length`, returning
/// the final index list of `max_length`, or the first failure.
///
/// Lengths of three or less are covered by the base case.
pub fn verify_up_to(max_length: usize) -> Result<Vec<usize>, VerifyError> {
    let mut verifier = Verifier::new();
    while verifier.record().len() < max_length {
        verifier.step()?;
    }
    debug!(max_length, "single-swap order verified");
    Ok(verifier.into_record())
}
