//! Single-swap permutations driven by factorial-base counters.
//!
//! Each increment of the counter names exactly one transposition. Applying
//! them in turn walks through every permutation of a sequence, changing one
//! pair of elements per step.

use alloc::vec::Vec;
use core::{fmt, iter::FusedIterator, mem, num::NonZeroUsize};

use crate::factoradic::Factoradic;

/// A pair of distinct indexes.
///
/// An `IndexPair` is associated with a certain linear data structure,
/// in which the corresponding pair of elements may be swapped to produce
/// the next permutation within that structure.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IndexPair(usize, NonZeroUsize);

impl IndexPair {
    /// Creates an `IndexPair` from a pair of indexes.
    ///
    /// # Safety
    ///
    /// * `first` and `second` must not be equal.
    ///
    /// * `second` must not be zero.
    #[inline]
    pub unsafe fn new(first: usize, second: usize) -> IndexPair {
        // SAFETY: The caller must ensure that `second` is non-zero.
        IndexPair(first, unsafe { NonZeroUsize::new_unchecked(second) })
    }

    /// Derives the pair for a counter whose highest changed digit is at
    /// `position`.
    ///
    /// A carry into an odd position pivots on the start of the sequence,
    /// a carry into an even position pivots on the element selected by the
    /// new digit.
    #[inline]
    fn from_carry(state: &Factoradic, position: usize) -> IndexPair {
        // The changed digit was just incremented, so it is at least 1.
        let first = if position & 1 != 0 {
            0
        } else {
            state.digit(position) - 1
        };
        IndexPair(first, NonZeroUsize::MIN.saturating_add(position))
    }

    /// Returns the pair of indexes as a tuple.
    #[inline]
    pub fn get(self) -> (usize, usize) {
        (self.0, self.1.get())
    }

    /// Swaps the corresponding pair of elements in a slice.
    ///
    /// # Panics
    ///
    /// Panics if either of the indexes is out of bounds.
    #[inline]
    pub fn swap<T>(self, slice: &mut [T]) {
        let (first, second) = self.get();
        slice.swap(first, second);
    }

    /// Swaps the corresponding pair of elements in a slice,
    /// without doing bounds checking.
    ///
    /// # Safety
    ///
    /// Behavior is undefined if either of the indexes is out of bounds.
    #[inline]
    pub unsafe fn swap_unchecked<T>(self, slice: &mut [T]) {
        let (first, second) = self.get();
        let ptr = slice.as_mut_ptr();
        // SAFETY: The caller must ensure that `first` and `second` are inside `slice`.
        // The two pointers never alias since the indexes are not equal.
        unsafe {
            let pf = ptr.add(first);
            let ps = ptr.add(second);
            mem::swap(&mut *pf, &mut *ps);
        }
    }
}

impl fmt::Display for IndexPair {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.0, self.1)
    }
}

/// Increments `state` and returns the transposition that advances the
/// current permutation to the next one.
#[inline]
pub fn swap_indices(state: &mut Factoradic) -> IndexPair {
    let position = state.increment();
    IndexPair::from_carry(state, position)
}

/// Iterator over the transpositions that walk through every permutation of
/// a sequence of a given length.
///
/// Yields `len! - 1` pairs, every index less than `len`.
#[derive(Debug, Clone)]
pub struct SwapIndices {
    state: Factoradic,
    len: usize,
    exhausted: bool,
}

impl SwapIndices {
    /// Creates the iterator for sequences of length `len`.
    pub fn new(len: usize) -> Self {
        SwapIndices {
            state: Factoradic::new(),
            len,
            exhausted: false,
        }
    }

    /// Returns the length of the sequences being permuted.
    #[inline]
    pub fn seq_len(&self) -> usize {
        self.len
    }

    /// Returns the current counter state.
    #[inline]
    pub fn state(&self) -> &Factoradic {
        &self.state
    }
}

impl Iterator for SwapIndices {
    type Item = IndexPair;

    fn next(&mut self) -> Option<IndexPair> {
        if self.exhausted {
            return None;
        }
        let pair = swap_indices(&mut self.state);
        if self.state.len() >= self.len {
            self.exhausted = true;
            return None;
        }
        Some(pair)
    }
}

impl FusedIterator for SwapIndices {}

/// Creates a cursor over every permutation of `items` in single-swap order.
#[inline]
pub fn single_swap_permutation<T>(items: Vec<T>) -> SwapPerm<T> {
    SwapPerm::new(items)
}

/// Cursor that permutes an owned sequence in place, one swap per step.
///
/// The first call to [`SwapPerm::next`] yields the items in their original
/// order.
#[derive(Debug, Clone)]
pub struct SwapPerm<T> {
    items: Vec<T>,
    indices: SwapIndices,
    started: bool,
}

impl<T> SwapPerm<T> {
    /// Creates a cursor over `items`.
    pub fn new(items: Vec<T>) -> Self {
        let indices = SwapIndices::new(items.len());
        SwapPerm {
            items,
            indices,
            started: false,
        }
    }

    /// Advances to the next permutation and borrows it, or returns `None`
    /// once all permutations have been visited.
    #[allow(clippy::should_implement_trait)]
    pub fn next(&mut self) -> Option<&[T]> {
        if !self.started {
            self.started = true;
            return Some(&self.items);
        }
        let pair = self.indices.next()?;
        pair.swap(&mut self.items);
        Some(&self.items)
    }

    /// Consumes the cursor, returning the items in their current order.
    #[inline]
    pub fn into_inner(self) -> Vec<T> {
        self.items
    }
}

/// Returns the index list reached after walking every permutation of a
/// sequence of length `len` in single-swap order.
///
/// This takes `len!` steps.
pub fn final_indices(len: usize) -> Vec<usize> {
    let mut indices: Vec<usize> = (0..len).collect();
    for pair in SwapIndices::new(len) {
        pair.swap(&mut indices);
    }
    indices
}
