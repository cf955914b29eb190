//! Arbitrary precision integers with an inline fast path.
//!
//! Values that fit in an `i64` are stored inline and never touch the
//! allocator. Anything larger lives in a `dashu::IBig`. The representation
//! is canonical: a value in `i64` range is never stored as `Large`.

use dashu::base::{BitTest, Signed as DashuSigned};
use dashu::integer::IBig;
use num_traits::{One, Zero};
use rand::Rng;
use std::cmp::Ordering;
use std::fmt;
use std::ops::{Add, Mul, Neg, Sub};

/// An arbitrary precision integer.
///
/// Arithmetic first tries native `i64` arithmetic and only falls back to
/// the heap-backed `IBig` when an operand is already large or the native
/// operation overflows.
#[derive(Clone, PartialEq, Eq, Hash)]
pub enum Integer {
    /// A value that fits in a machine word.
    Small(i64),
    /// A heap-allocated value outside the `i64` range.
    Large(IBig),
}

impl Integer {
    /// Creates a new integer from an i64.
    #[must_use]
    pub const fn new(value: i64) -> Self {
        Self::Small(value)
    }

    /// Creates an integer from an `IBig`, demoting it if it fits inline.
    #[must_use]
    pub fn from_big(value: IBig) -> Self {
        // i64::MIN has a 64-bit magnitude, so 64 is still a candidate.
        if value.bit_len() <= 64 {
            if let Ok(small) = i64::try_from(value.clone()) {
                return Self::Small(small);
            }
        }
        Self::Large(value)
    }

    fn from_i128(value: i128) -> Self {
        match i64::try_from(value) {
            Ok(small) => Self::Small(small),
            Err(_) => Self::Large(IBig::from(value)),
        }
    }

    /// Creates an integer from a string in the given base.
    ///
    /// # Errors
    ///
    /// Returns an error if the string is not a valid integer.
    pub fn from_str_radix(s: &str, radix: u32) -> Result<Self, dashu::base::error::ParseError> {
        IBig::from_str_radix(s, radix).map(Self::from_big)
    }

    /// Returns true if the value is stored inline.
    #[must_use]
    pub const fn is_small(&self) -> bool {
        matches!(self, Self::Small(_))
    }

    /// Attempts to convert to an i64.
    ///
    /// Returns `None` if the value doesn't fit in an i64.
    #[must_use]
    pub const fn to_i64(&self) -> Option<i64> {
        match self {
            Self::Small(v) => Some(*v),
            Self::Large(_) => None,
        }
    }

    /// Returns the value as an `IBig`.
    #[must_use]
    pub fn to_big(&self) -> IBig {
        match self {
            Self::Small(v) => IBig::from(*v),
            Self::Large(b) => b.clone(),
        }
    }

    /// Returns true if this integer is negative.
    #[must_use]
    pub fn is_negative(&self) -> bool {
        match self {
            Self::Small(v) => *v < 0,
            Self::Large(b) => DashuSigned::is_negative(b),
        }
    }

    /// Returns the number of bits of the magnitude.
    #[must_use]
    pub fn bit_len(&self) -> usize {
        match self {
            Self::Small(v) => (u64::BITS - v.unsigned_abs().leading_zeros()) as usize,
            Self::Large(b) => b.bit_len(),
        }
    }

    fn with_big<T>(&self, f: impl FnOnce(&IBig) -> T) -> T {
        match self {
            Self::Small(v) => f(&IBig::from(*v)),
            Self::Large(b) => f(b),
        }
    }

    /// Makes `self` equal to `src`.
    ///
    /// An inline source drops any heap value held by `self`. A heap source
    /// reuses the existing allocation of `self` when there is one.
    pub fn assign(&mut self, src: &Integer) {
        match (&mut *self, src) {
            (Self::Large(dst), Self::Large(b)) => dst.clone_from(b),
            (_, Self::Large(b)) => *self = Self::Large(b.clone()),
            (_, &Self::Small(v)) => *self = Self::Small(v),
        }
    }

    /// Sets `self = x + y`.
    pub fn add_into(&mut self, x: &Integer, y: &Integer) {
        *self = match (x, y) {
            (&Self::Small(a), &Self::Small(b)) => match a.checked_add(b) {
                Some(sum) => Self::Small(sum),
                None => Self::Large(IBig::from(i128::from(a) + i128::from(b))),
            },
            _ => Self::from_big(x.with_big(|a| y.with_big(|b| a + b))),
        };
    }

    /// Sets `self = self + y`.
    pub fn add_assign(&mut self, y: &Integer) {
        match (&mut *self, y) {
            (Self::Small(a), &Self::Small(b)) => match a.checked_add(b) {
                Some(sum) => *a = sum,
                None => {
                    let a = i128::from(*a);
                    *self = Self::Large(IBig::from(a + i128::from(b)));
                }
            },
            (Self::Large(a), _) => {
                match y {
                    Self::Small(b) => *a += IBig::from(*b),
                    Self::Large(b) => *a += b,
                }
                self.demote();
            }
            (&mut Self::Small(a), Self::Large(b)) => *self = Self::from_big(IBig::from(a) + b),
        }
    }

    /// Sets `self = x - y`.
    pub fn sub_into(&mut self, x: &Integer, y: &Integer) {
        *self = match (x, y) {
            (&Self::Small(a), &Self::Small(b)) => match a.checked_sub(b) {
                Some(diff) => Self::Small(diff),
                None => Self::Large(IBig::from(i128::from(a) - i128::from(b))),
            },
            _ => Self::from_big(x.with_big(|a| y.with_big(|b| a - b))),
        };
    }

    /// Sets `self = self - y`.
    pub fn sub_assign(&mut self, y: &Integer) {
        match (&mut *self, y) {
            (Self::Small(a), &Self::Small(b)) => match a.checked_sub(b) {
                Some(diff) => *a = diff,
                None => {
                    let a = i128::from(*a);
                    *self = Self::Large(IBig::from(a - i128::from(b)));
                }
            },
            (Self::Large(a), _) => {
                match y {
                    Self::Small(b) => *a -= IBig::from(*b),
                    Self::Large(b) => *a -= b,
                }
                self.demote();
            }
            (&mut Self::Small(a), Self::Large(b)) => *self = Self::from_big(IBig::from(a) - b),
        }
    }

    /// Sets `self = x * y`.
    pub fn mul_into(&mut self, x: &Integer, y: &Integer) {
        *self = match (x, y) {
            (&Self::Small(a), &Self::Small(b)) => match a.checked_mul(b) {
                Some(prod) => Self::Small(prod),
                None => Self::from_i128(i128::from(a) * i128::from(b)),
            },
            _ => Self::from_big(x.with_big(|a| y.with_big(|b| a * b))),
        };
    }

    /// Sets `self = self * y`.
    pub fn mul_assign(&mut self, y: &Integer) {
        if let (&Self::Small(a), &Self::Small(b)) = (&*self, y) {
            *self = match a.checked_mul(b) {
                Some(prod) => Self::Small(prod),
                None => Self::from_i128(i128::from(a) * i128::from(b)),
            };
            return;
        }
        let prod = self.with_big(|a| y.with_big(|b| a * b));
        *self = Self::from_big(prod);
    }

    /// Negates `self` in place.
    pub fn neg_assign(&mut self) {
        *self = match &*self {
            &Self::Small(v) => match v.checked_neg() {
                Some(n) => Self::Small(n),
                None => Self::Large(-IBig::from(v)),
            },
            Self::Large(b) => Self::from_big(-b),
        };
    }

    /// Computes self^exp.
    #[must_use]
    pub fn pow(&self, exp: u32) -> Self {
        if let Self::Small(v) = self {
            if let Some(p) = v.checked_pow(exp) {
                return Self::Small(p);
            }
        }
        Self::from_big(self.with_big(|b| b.pow(exp as usize)))
    }

    /// Returns the least non-negative residue of `self` modulo `m`.
    ///
    /// # Panics
    ///
    /// Panics if `m` is zero.
    #[must_use]
    pub fn rem_euclid(&self, m: &Integer) -> Self {
        if let (Self::Small(a), Self::Small(b)) = (self, m) {
            // checked: i64::MIN.rem_euclid(-1) overflows
            if let Some(r) = a.checked_rem_euclid(*b) {
                return Self::Small(r);
            }
        }
        let r = self.with_big(|a| {
            m.with_big(|b| {
                let r = a % b;
                if DashuSigned::is_negative(&r) {
                    if DashuSigned::is_negative(b) {
                        r - b
                    } else {
                        r + b
                    }
                } else {
                    r
                }
            })
        });
        Self::from_big(r)
    }

    /// Moves a large value back inline if it now fits.
    fn demote(&mut self) {
        if let Self::Large(b) = self {
            if b.bit_len() <= 64 {
                if let Ok(small) = i64::try_from(b.clone()) {
                    *self = Self::Small(small);
                }
            }
        }
    }

    /// Generates a random integer whose magnitude has at most `bits` bits.
    ///
    /// The bit length itself is drawn uniformly, so small values come up as
    /// often as values close to the bound. Values on the inline boundary are
    /// produced now and then to exercise promotion.
    pub fn random_bits<R: Rng + ?Sized>(rng: &mut R, bits: u32) -> Self {
        if bits >= 63 && rng.gen_ratio(1, 16) {
            return if rng.gen() { Self::Small(i64::MAX) } else { Self::Small(i64::MIN) };
        }

        let b = rng.gen_range(0..=bits);
        let negative: bool = rng.gen();

        if b < 64 {
            let magnitude = if b == 0 { 0 } else { rng.gen::<u64>() >> (64 - b) };
            let value = i128::from(magnitude);
            return Self::from_i128(if negative { -value } else { value });
        }

        let words = b.div_ceil(64);
        let mut acc = IBig::ZERO;
        for _ in 0..words {
            acc = (acc << 64) + IBig::from(rng.gen::<u64>());
        }
        acc = acc >> (words * 64 - b) as usize;
        Self::from_big(if negative { -acc } else { acc })
    }
}

impl Default for Integer {
    fn default() -> Self {
        Self::Small(0)
    }
}

impl Zero for Integer {
    fn zero() -> Self {
        Self::Small(0)
    }

    fn is_zero(&self) -> bool {
        // canonical form: a large value is never zero
        matches!(self, Self::Small(0))
    }
}

impl One for Integer {
    fn one() -> Self {
        Self::Small(1)
    }

    fn is_one(&self) -> bool {
        matches!(self, Self::Small(1))
    }
}

impl PartialOrd for Integer {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Integer {
    fn cmp(&self, other: &Self) -> Ordering {
        match (self, other) {
            (Self::Small(a), Self::Small(b)) => a.cmp(b),
            (Self::Large(a), Self::Large(b)) => a.cmp(b),
            (Self::Small(_), Self::Large(b)) => {
                if DashuSigned::is_negative(b) {
                    Ordering::Greater
                } else {
                    Ordering::Less
                }
            }
            (Self::Large(a), Self::Small(_)) => {
                if DashuSigned::is_negative(a) {
                    Ordering::Less
                } else {
                    Ordering::Greater
                }
            }
        }
    }
}

impl fmt::Debug for Integer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Small(v) => write!(f, "Integer({v})"),
            Self::Large(b) => write!(f, "Integer({b}, large)"),
        }
    }
}

impl fmt::Display for Integer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Small(v) => write!(f, "{v}"),
            Self::Large(b) => write!(f, "{b}"),
        }
    }
}

// Arithmetic operations
impl Add for Integer {
    type Output = Self;

    fn add(mut self, rhs: Self) -> Self::Output {
        Integer::add_assign(&mut self, &rhs);
        self
    }
}

impl Add<&Integer> for Integer {
    type Output = Self;

    fn add(mut self, rhs: &Integer) -> Self::Output {
        Integer::add_assign(&mut self, rhs);
        self
    }
}

impl Add for &Integer {
    type Output = Integer;

    fn add(self, rhs: Self) -> Self::Output {
        let mut out = Integer::zero();
        out.add_into(self, rhs);
        out
    }
}

impl Sub for Integer {
    type Output = Self;

    fn sub(mut self, rhs: Self) -> Self::Output {
        Integer::sub_assign(&mut self, &rhs);
        self
    }
}

impl Sub<&Integer> for Integer {
    type Output = Self;

    fn sub(mut self, rhs: &Integer) -> Self::Output {
        Integer::sub_assign(&mut self, rhs);
        self
    }
}

impl Sub for &Integer {
    type Output = Integer;

    fn sub(self, rhs: Self) -> Self::Output {
        let mut out = Integer::zero();
        out.sub_into(self, rhs);
        out
    }
}

impl Mul for Integer {
    type Output = Self;

    fn mul(mut self, rhs: Self) -> Self::Output {
        Integer::mul_assign(&mut self, &rhs);
        self
    }
}

impl Mul<&Integer> for Integer {
    type Output = Self;

    fn mul(mut self, rhs: &Integer) -> Self::Output {
        Integer::mul_assign(&mut self, rhs);
        self
    }
}

impl Mul for &Integer {
    type Output = Integer;

    fn mul(self, rhs: Self) -> Self::Output {
        let mut out = Integer::zero();
        out.mul_into(self, rhs);
        out
    }
}

impl Neg for Integer {
    type Output = Self;

    fn neg(mut self) -> Self::Output {
        self.neg_assign();
        self
    }
}

impl Neg for &Integer {
    type Output = Integer;

    fn neg(self) -> Self::Output {
        let mut out = self.clone();
        out.neg_assign();
        out
    }
}

impl From<i64> for Integer {
    fn from(value: i64) -> Self {
        Self::new(value)
    }
}

impl From<i32> for Integer {
    fn from(value: i32) -> Self {
        Self::new(i64::from(value))
    }
}

impl From<u64> for Integer {
    fn from(value: u64) -> Self {
        match i64::try_from(value) {
            Ok(small) => Self::Small(small),
            Err(_) => Self::Large(IBig::from(value)),
        }
    }
}

impl From<IBig> for Integer {
    fn from(value: IBig) -> Self {
        Self::from_big(value)
    }
}

impl From<Integer> for IBig {
    fn from(value: Integer) -> Self {
        match value {
            Integer::Small(v) => IBig::from(v),
            Integer::Large(b) => b,
        }
    }
}
