//! Lexicographic permutations decoded from factorial-base counters.

use alloc::vec::Vec;
use core::iter::FusedIterator;

use crate::factoradic::{to_factorial_base, Factoradic};

/// Decodes the permutation of `source` indexed by `state`.
///
/// Digits are consumed from the most significant position down, each one
/// removing the element at that offset from what remains of the source.
/// Positions beyond the end of `state` read as zero, so any state of up to
/// `source.len() - 1` digits decodes to the permutation of the same index.
///
/// # Panics
///
/// Panics if `state` has `source.len()` digits or more.
pub fn decode<T: Clone>(source: &[T], state: &Factoradic) -> Vec<T> {
    let n = source.len();
    assert!(
        state.len() < n.max(1),
        "a state of {} digits cannot index a sequence of length {}",
        state.len(),
        n
    );

    let mut remaining = source.to_vec();
    let mut out = Vec::with_capacity(n);
    for position in (0..n.saturating_sub(1)).rev() {
        out.push(remaining.remove(state.digit(position)));
    }
    out.append(&mut remaining);
    out
}

/// Returns the `index`-th permutation of `source` in lexicographic order
/// of positions.
///
/// # Panics
///
/// Panics if `index` is not less than `source.len()!`.
pub fn permutation_at<T: Clone>(source: &[T], index: u64) -> Vec<T> {
    let state = to_factorial_base(index);
    assert!(
        state.len() < source.len().max(1),
        "permutation index {} is out of range for length {}",
        index,
        source.len()
    );
    decode(source, &state)
}

/// Creates a cursor over every permutation of `source`.
#[inline]
pub fn lexicographic_permutation<T: Clone>(source: &[T]) -> LexPerm<'_, T> {
    LexPerm::new(source)
}

/// Cursor over the permutations of a sequence in lexicographic order of
/// positions.
///
/// The first item is `source` itself, followed by the other `n! - 1`
/// permutations. Use `.skip(1)` when the caller has already emitted the
/// original order.
#[derive(Debug, Clone)]
pub struct LexPerm<'a, T> {
    source: &'a [T],
    state: Factoradic,
    exhausted: bool,
}

impl<'a, T> LexPerm<'a, T> {
    /// Creates a cursor positioned at the original order.
    pub fn new(source: &'a [T]) -> Self {
        LexPerm {
            source,
            state: Factoradic::zeroed(source.len().saturating_sub(1)),
            exhausted: false,
        }
    }

    /// Returns the counter state of the next permutation.
    #[inline]
    pub fn state(&self) -> &Factoradic {
        &self.state
    }
}

impl<T: Clone> Iterator for LexPerm<'_, T> {
    type Item = Vec<T>;

    fn next(&mut self) -> Option<Vec<T>> {
        if self.exhausted {
            return None;
        }
        let perm = decode(self.source, &self.state);
        self.state.increment();
        // The counter gains a digit exactly when it wraps past `n! - 1`.
        self.exhausted = self.state.len() >= self.source.len();
        Some(perm)
    }
}

impl<T: Clone> FusedIterator for LexPerm<'_, T> {}

#[cfg(test)]
mod tests {
    use super::*;

    fn chars(s: &str) -> Vec<char> {
        s.chars().collect()
    }

    fn strings(perms: impl Iterator<Item = Vec<char>>) -> Vec<String> {
        perms.map(|p| p.into_iter().collect()).collect()
    }

    #[test]
    fn abc_in_order() {
        let source = chars("abc");
        assert_eq!(
            strings(lexicographic_permutation(&source)),
            ["abc", "acb", "bac", "bca", "cab", "cba"]
        );
    }

    #[test]
    fn skip_first_matches_implicit_baseline() {
        let source = chars("abc");
        assert_eq!(
            strings(lexicographic_permutation(&source).skip(1)),
            ["acb", "bac", "bca", "cab", "cba"]
        );
    }

    #[test]
    fn tiny_sources() {
        let empty: [u8; 0] = [];
        assert_eq!(LexPerm::new(&empty).collect::<Vec<_>>(), [Vec::<u8>::new()]);
        assert_eq!(LexPerm::new(&[7]).collect::<Vec<_>>(), [vec![7]]);
        assert_eq!(
            LexPerm::new(&[1, 2]).collect::<Vec<_>>(),
            [vec![1, 2], vec![2, 1]]
        );
    }

    #[test]
    fn fused_after_exhaustion() {
        let mut perms = LexPerm::new(&[1, 2]);
        assert!(perms.by_ref().nth(1).is_some());
        assert_eq!(perms.next(), None);
        assert_eq!(perms.next(), None);
    }

    #[test]
    fn short_state_reads_as_zero_padded() {
        let source = chars("abcd");
        let short = to_factorial_base(1);
        let padded = Factoradic::from_digits(vec![1, 0, 0]).unwrap();
        assert_eq!(decode(&source, &short), decode(&source, &padded));
        assert_eq!(decode(&source, &short), chars("abdc"));
    }

    #[test]
    fn permutation_at_matches_cursor() {
        let source = [10, 20, 30, 40];
        for (index, perm) in LexPerm::new(&source).enumerate() {
            assert_eq!(permutation_at(&source, index as u64), perm);
        }
    }

    #[test]
    #[should_panic]
    fn permutation_at_rejects_large_index() {
        permutation_at(&[1, 2, 3], 6);
    }

    #[test]
    #[should_panic]
    fn decode_rejects_oversized_state() {
        decode(&[1, 2, 3], &to_factorial_base(6));
    }

    #[test]
    fn decode_leaves_source_untouched() {
        let source = chars("abcde");
        let copy = source.clone();
        for index in [0, 17, 63, 119] {
            decode(&source, &to_factorial_base(index));
            assert_eq!(source, copy);
        }
    }
}
