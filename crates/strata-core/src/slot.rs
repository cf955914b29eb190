//! Element storage.
//!
//! Elements are stored as runs of typed slots. A slot is the unit of flat
//! element storage: leaf values sit in a slot directly, and a polynomial
//! occupies a single slot holding its header.

use strata_integers::Integer;

/// One cell of flat element storage.
#[derive(Clone, Debug)]
pub enum Slot {
    /// An arbitrary precision integer.
    Int(Integer),
    /// A machine word.
    Word(u64),
    /// A polynomial header.
    Poly(Poly),
}

impl Slot {
    /// Returns the integer held by this slot.
    ///
    /// # Panics
    ///
    /// Panics if the slot does not hold an integer.
    #[must_use]
    pub fn as_int(&self) -> &Integer {
        match self {
            Slot::Int(x) => x,
            other => panic!("expected an integer slot, found {other:?}"),
        }
    }

    /// Returns the integer held by this slot, mutably.
    ///
    /// # Panics
    ///
    /// Panics if the slot does not hold an integer.
    pub fn as_int_mut(&mut self) -> &mut Integer {
        match self {
            Slot::Int(x) => x,
            other => panic!("expected an integer slot, found {other:?}"),
        }
    }

    /// Returns the word held by this slot.
    ///
    /// # Panics
    ///
    /// Panics if the slot does not hold a word.
    #[must_use]
    pub fn as_word(&self) -> u64 {
        match self {
            Slot::Word(x) => *x,
            other => panic!("expected a word slot, found {other:?}"),
        }
    }

    /// Returns the word held by this slot, mutably.
    ///
    /// # Panics
    ///
    /// Panics if the slot does not hold a word.
    pub fn as_word_mut(&mut self) -> &mut u64 {
        match self {
            Slot::Word(x) => x,
            other => panic!("expected a word slot, found {other:?}"),
        }
    }

    /// Returns the polynomial held by this slot.
    ///
    /// # Panics
    ///
    /// Panics if the slot does not hold a polynomial.
    #[must_use]
    pub fn as_poly(&self) -> &Poly {
        match self {
            Slot::Poly(p) => p,
            other => panic!("expected a polynomial slot, found {other:?}"),
        }
    }

    /// Returns the polynomial held by this slot, mutably.
    ///
    /// # Panics
    ///
    /// Panics if the slot does not hold a polynomial.
    pub fn as_poly_mut(&mut self) -> &mut Poly {
        match self {
            Slot::Poly(p) => p,
            other => panic!("expected a polynomial slot, found {other:?}"),
        }
    }
}

impl Default for Slot {
    fn default() -> Self {
        Slot::Int(Integer::default())
    }
}

/// The header of a polynomial element.
///
/// Coefficients are stored flat, `stride` slots per coefficient, where the
/// stride is the element size of the coefficient ring. Every allocated
/// coefficient, including those past `length`, holds a valid element; the
/// ones past `length` are kept equal to zero.
#[derive(Clone, Debug, Default)]
pub struct Poly {
    /// Flat coefficient storage, `capacity * stride` slots.
    coeffs: Vec<Slot>,
    /// Number of significant coefficients.
    length: usize,
}

impl Poly {
    /// Creates the empty (zero) polynomial without allocating.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            coeffs: Vec::new(),
            length: 0,
        }
    }

    /// Returns the number of significant coefficients.
    #[must_use]
    pub const fn len(&self) -> usize {
        self.length
    }

    /// Returns true if there are no significant coefficients.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.length == 0
    }

    /// Returns the number of allocated coefficients for the given stride.
    #[must_use]
    pub fn capacity(&self, stride: usize) -> usize {
        self.coeffs.len() / stride
    }

    /// Returns the full coefficient storage, including the zero tail.
    #[must_use]
    pub fn storage(&self) -> &[Slot] {
        &self.coeffs
    }

    /// Returns the full coefficient storage mutably.
    pub fn storage_mut(&mut self) -> &mut [Slot] {
        &mut self.coeffs
    }

    /// Returns the slots of the significant coefficients.
    #[must_use]
    pub fn significant(&self, stride: usize) -> &[Slot] {
        &self.coeffs[..self.length * stride]
    }

    /// Returns coefficient `i` as a slot run.
    ///
    /// # Panics
    ///
    /// Panics if `i` is not below the capacity.
    #[must_use]
    pub fn coeff(&self, i: usize, stride: usize) -> &[Slot] {
        &self.coeffs[i * stride..(i + 1) * stride]
    }

    /// Returns coefficient `i` as a mutable slot run.
    ///
    /// # Panics
    ///
    /// Panics if `i` is not below the capacity.
    pub fn coeff_mut(&mut self, i: usize, stride: usize) -> &mut [Slot] {
        &mut self.coeffs[i * stride..(i + 1) * stride]
    }

    /// Grows the storage by `extra` coefficients, each a copy of `zero`.
    ///
    /// Existing coefficients are preserved.
    pub fn extend_storage(&mut self, extra: usize, zero: &[Slot]) {
        self.coeffs.reserve_exact(extra * zero.len());
        for _ in 0..extra {
            self.coeffs.extend_from_slice(zero);
        }
    }

    /// Overwrites the length.
    ///
    /// The caller is responsible for the zero tail and for normalisation.
    ///
    /// # Panics
    ///
    /// Panics in debug builds if `length` exceeds the allocated storage
    /// for a stride of one.
    pub fn set_len_raw(&mut self, length: usize) {
        debug_assert!(length <= self.coeffs.len());
        self.length = length;
    }
}
