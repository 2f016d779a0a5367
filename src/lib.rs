//! # factperm
//!
//! Permutation enumeration driven by [factorial-base numbers](https://en.wikipedia.org/wiki/Factorial_number_system).
//!
//! This crate provides a factorial-base counter, two ways of turning its
//! states into permutations, and a verifier proving that the single-swap
//! order is complete for large lengths:
//!
//! * [`factoradic`]: the counter, with conversions to and from `u64`.
//! * [`lex`]: permutations decoded in lexicographic order of positions.
//! * [`swap`]: permutations produced by one transposition per step.
//! * [`verify`]: inductive verification of the single-swap order.
//!
//! ## Examples
//!
//! The following example permutes the array in place and prints all possible permutations:
//!
//! ```
//! use factperm::Permute;
//! let mut arr = [1, 2, 3];
//! arr.permute(|perm| println!("{:?}", perm));
//! ```
//!
//! Permutations can also be decoded directly from their index:
//!
//! ```
//! use factperm::lex::{lexicographic_permutation, permutation_at};
//!
//! let perms: Vec<_> = lexicographic_permutation(&['a', 'b', 'c']).collect();
//! assert_eq!(perms[3], ['b', 'c', 'a']);
//! assert_eq!(permutation_at(&['a', 'b', 'c'], 3), ['b', 'c', 'a']);
//! ```

#![cfg_attr(not(test), no_std)]
#![warn(missing_docs, rust_2018_idioms)]

extern crate alloc;

pub mod factoradic;
pub mod lex;
pub mod swap;
pub mod verify;

pub use factoradic::{from_factorial_base, increment, to_factorial_base, Factoradic};
pub use swap::{swap_indices, IndexPair, SwapIndices};
pub use verify::{verify, verify_up_to, VerifyError};

/// Trait for permuting arrays and slices in single-swap order.
pub trait Permute: internal::Sealed {
    /// Walks through all possible permutations in place.
    ///
    /// The first permutation visited is the current order. Consecutive
    /// permutations differ by exactly one transposition.
    fn permute(&mut self, f: impl FnMut(&Self));
}

impl<T, const N: usize> Permute for [T; N] {
    #[inline]
    fn permute(&mut self, mut f: impl FnMut(&[T; N])) {
        let mut indices = SwapIndices::new(N);
        loop {
            f(self);
            if let Some(p) = indices.next() {
                // SAFETY: `SwapIndices::new(N)` only yields indexes less than `N`.
                unsafe { p.swap_unchecked(self) }
            } else {
                break;
            }
        }
    }
}

impl<T> Permute for [T] {
    #[inline]
    fn permute(&mut self, mut f: impl FnMut(&[T])) {
        let mut indices = SwapIndices::new(self.len());
        loop {
            f(self);
            if let Some(p) = indices.next() {
                // SAFETY: `SwapIndices` is created with the length of `self`.
                unsafe { p.swap_unchecked(self) }
            } else {
                break;
            }
        }
    }
}

mod internal {
    pub trait Sealed {}

    impl<T> Sealed for [T] {}
    impl<T, const N: usize> Sealed for [T; N] {}
}
