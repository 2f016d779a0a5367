//! Factorial-base numbers.
//!
//! A [`Factoradic`] stores its digits least significant first. The digit at
//! position `i` ranges over `0..=i + 1` and contributes `digit * (i + 1)!`
//! to the value, so position `i` has radix `i + 2`.

use alloc::vec;
use alloc::vec::Vec;
use core::fmt;

use thiserror::Error;

/// Errors produced when building or evaluating a [`Factoradic`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FactoradicError {
    /// A digit exceeds the bound of its position.
    #[error("digit {digit} at position {position} exceeds its radix bound")]
    DigitOutOfRange {
        /// Position of the offending digit.
        position: usize,
        /// The offending digit.
        digit: usize,
    },
    /// The value does not fit a `u64`.
    #[error("factorial base number of {len} digits overflows u64")]
    Overflow {
        /// Number of digits.
        len: usize,
    },
}

/// A natural number in the factorial number system.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct Factoradic {
    digits: Vec<usize>,
}

impl Factoradic {
    /// The largest digit count whose every value fits a `u64`.
    ///
    /// A number of 19 digits is at most `20! - 1`, while `21! - 1` does not fit.
    /// Sequences of up to 20 elements can therefore be fully indexed.
    pub const MAX_EXACT_LEN: usize = 19;

    /// Creates an empty `Factoradic`, representing zero.
    #[inline]
    pub const fn new() -> Self {
        Factoradic { digits: Vec::new() }
    }

    /// Creates a `Factoradic` of `len` zero digits.
    ///
    /// This is the initial counter state for enumerating a sequence of
    /// length `len + 1`.
    pub fn zeroed(len: usize) -> Self {
        Factoradic {
            digits: vec![0; len],
        }
    }

    /// Creates a `Factoradic` from digits, least significant first.
    pub fn from_digits(digits: Vec<usize>) -> Result<Self, FactoradicError> {
        if let Some((position, &digit)) = digits
            .iter()
            .enumerate()
            .find(|&(i, &digit)| digit > i + 1)
        {
            return Err(FactoradicError::DigitOutOfRange { position, digit });
        }
        Ok(Factoradic { digits })
    }

    /// Returns the digits, least significant first.
    #[inline]
    pub fn digits(&self) -> &[usize] {
        &self.digits
    }

    /// Returns the digit at `position`, or zero past the end.
    #[inline]
    pub fn digit(&self, position: usize) -> usize {
        self.digits.get(position).copied().unwrap_or(0)
    }

    /// Sets the digit at `position`.
    ///
    /// # Panics
    ///
    /// Panics if `position` is out of bounds.
    pub fn set_digit(&mut self, position: usize, digit: usize) -> Result<(), FactoradicError> {
        if digit > position + 1 {
            return Err(FactoradicError::DigitOutOfRange { position, digit });
        }
        self.digits[position] = digit;
        Ok(())
    }

    /// Returns the number of digits.
    #[inline]
    pub fn len(&self) -> usize {
        self.digits.len()
    }

    /// Returns `true` if there are no digits.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.digits.is_empty()
    }

    /// Adds one in place, returning the highest position that changed.
    ///
    /// Digits that overflow their radix are reset to zero and carried. When
    /// every digit carries, a new most significant digit `1` is appended.
    pub fn increment(&mut self) -> usize {
        for (i, digit) in self.digits.iter_mut().enumerate() {
            debug_assert!(
                *digit <= i + 1,
                "digit {} at position {} exceeds its radix bound",
                digit,
                i
            );
            if *digit <= i {
                *digit += 1;
                return i;
            }
            *digit = 0;
        }
        self.digits.push(1);
        self.digits.len() - 1
    }

    /// Returns the value, wrapping or panicking on overflow like ordinary
    /// integer arithmetic. See [`Factoradic::checked_value`].
    #[inline]
    pub fn value(&self) -> u64 {
        from_factorial_base(self)
    }

    /// Returns the value, or an error if it does not fit a `u64`.
    pub fn checked_value(&self) -> Result<u64, FactoradicError> {
        let overflow = FactoradicError::Overflow { len: self.len() };
        let mut radix = self.len() as u64 + 1;
        self.digits.iter().rev().try_fold(0u64, |acc, &digit| {
            let acc = acc
                .checked_mul(radix)
                .and_then(|acc| acc.checked_add(digit as u64))
                .ok_or_else(|| overflow.clone())?;
            radix -= 1;
            Ok(acc)
        })
    }
}

impl From<u64> for Factoradic {
    #[inline]
    fn from(value: u64) -> Self {
        to_factorial_base(value)
    }
}

impl TryFrom<&Factoradic> for u64 {
    type Error = FactoradicError;

    #[inline]
    fn try_from(number: &Factoradic) -> Result<u64, FactoradicError> {
        number.checked_value()
    }
}

impl fmt::Display for Factoradic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut digits = self.digits.iter().rev();
        match digits.next() {
            None => f.write_str("0"),
            Some(first) => {
                write!(f, "{}", first)?;
                digits.try_for_each(|digit| write!(f, ":{}", digit))
            }
        }
    }
}

/// Converts an integer into its minimal factorial-base representation.
///
/// Zero becomes the empty number.
pub fn to_factorial_base(mut value: u64) -> Factoradic {
    let mut digits = Vec::new();
    let mut radix = 2;
    while value != 0 {
        digits.push((value % radix) as usize);
        value /= radix;
        radix += 1;
    }
    Factoradic { digits }
}

/// Evaluates a factorial-base number with Horner's rule.
///
/// The result must fit a `u64`; this always holds for numbers of at most
/// [`Factoradic::MAX_EXACT_LEN`] digits.
pub fn from_factorial_base(number: &Factoradic) -> u64 {
    let mut radix = number.len() as u64 + 1;
    number.digits.iter().rev().fold(0, |acc, &digit| {
        let acc = acc * radix + digit as u64;
        radix -= 1;
        acc
    })
}

/// Adds one to `number` in place, returning the highest position that changed.
#[inline]
pub fn increment(number: &mut Factoradic) -> usize {
    number.increment()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_is_empty() {
        assert!(to_factorial_base(0).is_empty());
        assert_eq!(from_factorial_base(&Factoradic::new()), 0);
    }

    #[test]
    fn known_encodings() {
        assert_eq!(to_factorial_base(1).digits(), &[1]);
        assert_eq!(to_factorial_base(2).digits(), &[0, 1]);
        assert_eq!(to_factorial_base(5).digits(), &[1, 2]);
        assert_eq!(to_factorial_base(6).digits(), &[0, 0, 1]);
        // 463 = 3*5! + 4*4! + 1*3! + 0*2! + 1*1!
        assert_eq!(to_factorial_base(463).digits(), &[1, 0, 1, 4, 3]);
    }

    #[test]
    fn round_trip() {
        for value in 0..=50_000 {
            assert_eq!(from_factorial_base(&to_factorial_base(value)), value);
        }
        assert_eq!(from_factorial_base(&to_factorial_base(u64::MAX)), u64::MAX);
    }

    #[test]
    fn increment_adds_one() {
        let mut number = Factoradic::new();
        for value in 1..=5_040 {
            number.increment();
            assert_eq!(number.value(), value);
            assert_eq!(number, to_factorial_base(value));
            for (i, &digit) in number.digits().iter().enumerate() {
                assert!(digit <= i + 1);
            }
        }
    }

    #[test]
    fn increment_reports_highest_change() {
        let mut number = Factoradic::zeroed(2);
        assert_eq!(number.increment(), 0);
        assert_eq!(number.digits(), &[1, 0]);
        assert_eq!(number.increment(), 1);
        assert_eq!(number.digits(), &[0, 1]);

        let mut number = to_factorial_base(5);
        assert_eq!(number.increment(), 2);
        assert_eq!(number.digits(), &[0, 0, 1]);
    }

    #[test]
    fn rejects_out_of_range_digits() {
        assert_eq!(
            Factoradic::from_digits(vec![1, 3]),
            Err(FactoradicError::DigitOutOfRange {
                position: 1,
                digit: 3
            })
        );
        let mut number = Factoradic::from_digits(vec![1, 2]).unwrap();
        assert!(number.set_digit(0, 2).is_err());
        number.set_digit(1, 0).unwrap();
        assert_eq!(number.value(), 1);
    }

    #[test]
    fn checked_value_detects_overflow() {
        let max = Factoradic::from_digits((1..=Factoradic::MAX_EXACT_LEN + 1).collect()).unwrap();
        assert_eq!(max.checked_value(), Err(FactoradicError::Overflow { len: 20 }));

        let fits =
            Factoradic::from_digits((1..=Factoradic::MAX_EXACT_LEN).collect()).unwrap();
        // 20! - 1
        assert_eq!(u64::try_from(&fits), Ok(2_432_902_008_176_639_999));
    }

    #[test]
    fn display() {
        assert_eq!(Factoradic::new().to_string(), "0");
        assert_eq!(to_factorial_base(463).to_string(), "3:4:1:0:1");
    }
}
