//! Machine-word modular arithmetic.
//!
//! This module provides arithmetic on `u64` residues modulo a runtime
//! modulus, the word-sized counterpart to reducing an `Integer`.

use rand::Rng;
use std::fmt;

/// A machine-word modulus `n > 0`.
///
/// Residues handled by this type are always kept in `[0, n)`.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct WordModulus {
    n: u64,
}

impl WordModulus {
    /// Creates a new modulus.
    ///
    /// Returns `None` if `n` is zero.
    #[must_use]
    pub const fn new(n: u64) -> Option<Self> {
        if n == 0 {
            None
        } else {
            Some(Self { n })
        }
    }

    /// Returns the modulus.
    #[must_use]
    pub const fn value(self) -> u64 {
        self.n
    }

    /// Reduces an arbitrary word into `[0, n)`.
    #[must_use]
    pub const fn reduce(self, a: u64) -> u64 {
        a % self.n
    }

    /// Returns `1 mod n`.
    #[must_use]
    pub const fn one(self) -> u64 {
        if self.n == 1 {
            0
        } else {
            1
        }
    }

    /// Reduces a signed value into `[0, n)`.
    #[must_use]
    pub fn from_signed(self, value: i64) -> u64 {
        let r = i128::from(value).rem_euclid(i128::from(self.n));
        // r is in [0, n) and n fits a u64
        r as u64
    }

    /// Computes `(a + b) mod n` for reduced operands.
    #[must_use]
    pub const fn add(self, a: u64, b: u64) -> u64 {
        let (sum, carry) = a.overflowing_add(b);
        if carry || sum >= self.n {
            sum.wrapping_sub(self.n)
        } else {
            sum
        }
    }

    /// Computes `(a - b) mod n` for reduced operands.
    #[must_use]
    pub const fn sub(self, a: u64, b: u64) -> u64 {
        if a >= b {
            a - b
        } else {
            self.n - (b - a)
        }
    }

    /// Computes `-a mod n` for a reduced operand.
    #[must_use]
    pub const fn neg(self, a: u64) -> u64 {
        if a == 0 {
            0
        } else {
            self.n - a
        }
    }

    /// Computes `(a * b) mod n`.
    #[must_use]
    pub const fn mul(self, a: u64, b: u64) -> u64 {
        // Use u128 to avoid overflow
        ((a as u128 * b as u128) % self.n as u128) as u64
    }

    /// Computes `a^exp mod n` using binary exponentiation.
    #[must_use]
    pub fn pow(self, a: u64, mut exp: u64) -> u64 {
        let mut base = a;
        let mut result = self.one();

        while exp > 0 {
            if exp & 1 == 1 {
                result = self.mul(result, base);
            }
            base = self.mul(base, base);
            exp >>= 1;
        }

        result
    }

    /// Draws a uniform residue.
    pub fn random<R: Rng + ?Sized>(self, rng: &mut R) -> u64 {
        rng.gen_range(0..self.n)
    }
}

impl fmt::Debug for WordModulus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "WordModulus({})", self.n)
    }
}

impl fmt::Display for WordModulus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.n)
    }
}

/// Common word-sized primes.
pub mod primes {
    /// 2^23 * 7 * 17 + 1 = 998244353
    pub const P998244353: u64 = 998_244_353;

    /// Largest prime below 2^64.
    pub const P_MAX_WORD: u64 = 18_446_744_073_709_551_557;
}
