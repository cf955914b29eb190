//! Generic vectors.
//!
//! A vector of `len` elements over a ring is a run of `len * size` slots.
//! These primitives apply an element operation coefficient by coefficient
//! and are what polynomial arithmetic reduces to. They never normalise;
//! callers guarantee every slice holds at least `len` elements.
//!
//! Integer rings skip the per-element dispatch and work on the slots
//! directly.

use strata_core::{RingKind, Slot};

use crate::ring::Ring;

fn is_plain_integer(ring: &Ring<'_>) -> bool {
    ring.kind() == RingKind::PlainInteger
}

/// Allocates a zero vector of `len` elements.
#[must_use]
pub fn init(ring: &Ring<'_>, len: usize) -> Vec<Slot> {
    let zero = ring.new_elem();
    let mut out = Vec::with_capacity(len * ring.size());
    for _ in 0..len {
        out.extend_from_slice(&zero);
    }
    out
}

/// Sets the first `len` elements of `res` to zero.
pub fn zero(ring: &Ring<'_>, res: &mut [Slot], len: usize) {
    let s = ring.size();
    for r in res.chunks_exact_mut(s).take(len) {
        ring.zero(r);
    }
}

/// Sets `res[i] = a[i]` for `i < len`.
pub fn set(ring: &Ring<'_>, res: &mut [Slot], a: &[Slot], len: usize) {
    if is_plain_integer(ring) {
        for (r, x) in res[..len].iter_mut().zip(&a[..len]) {
            r.as_int_mut().assign(x.as_int());
        }
        return;
    }
    let s = ring.size();
    for (r, x) in res.chunks_exact_mut(s).zip(a.chunks_exact(s)).take(len) {
        ring.set(r, x);
    }
}

/// Sets `res[i] = -a[i]` for `i < len`.
pub fn neg(ring: &Ring<'_>, res: &mut [Slot], a: &[Slot], len: usize) {
    let s = ring.size();
    for (r, x) in res.chunks_exact_mut(s).zip(a.chunks_exact(s)).take(len) {
        ring.neg(r, x);
    }
}

/// Negates the first `len` elements of `res` in place.
pub fn neg_assign(ring: &Ring<'_>, res: &mut [Slot], len: usize) {
    let s = ring.size();
    for r in res.chunks_exact_mut(s).take(len) {
        ring.neg_assign(r);
    }
}

/// Sets `res[i] = a[i] + b[i]` for `i < len`.
pub fn add(ring: &Ring<'_>, res: &mut [Slot], a: &[Slot], b: &[Slot], len: usize) {
    if is_plain_integer(ring) {
        for ((r, x), y) in res[..len].iter_mut().zip(&a[..len]).zip(&b[..len]) {
            r.as_int_mut().add_into(x.as_int(), y.as_int());
        }
        return;
    }
    let s = ring.size();
    for ((r, x), y) in res
        .chunks_exact_mut(s)
        .zip(a.chunks_exact(s))
        .zip(b.chunks_exact(s))
        .take(len)
    {
        ring.add(r, x, y);
    }
}

/// Sets `res[i] += b[i]` for `i < len`.
pub fn add_assign(ring: &Ring<'_>, res: &mut [Slot], b: &[Slot], len: usize) {
    if is_plain_integer(ring) {
        for (r, y) in res[..len].iter_mut().zip(&b[..len]) {
            r.as_int_mut().add_assign(y.as_int());
        }
        return;
    }
    let s = ring.size();
    for (r, y) in res.chunks_exact_mut(s).zip(b.chunks_exact(s)).take(len) {
        ring.add_assign(r, y);
    }
}

/// Sets `res[i] = a[i] - b[i]` for `i < len`.
pub fn sub(ring: &Ring<'_>, res: &mut [Slot], a: &[Slot], b: &[Slot], len: usize) {
    if is_plain_integer(ring) {
        for ((r, x), y) in res[..len].iter_mut().zip(&a[..len]).zip(&b[..len]) {
            r.as_int_mut().sub_into(x.as_int(), y.as_int());
        }
        return;
    }
    let s = ring.size();
    for ((r, x), y) in res
        .chunks_exact_mut(s)
        .zip(a.chunks_exact(s))
        .zip(b.chunks_exact(s))
        .take(len)
    {
        ring.sub(r, x, y);
    }
}

/// Sets `res[i] -= b[i]` for `i < len`.
pub fn sub_assign(ring: &Ring<'_>, res: &mut [Slot], b: &[Slot], len: usize) {
    if is_plain_integer(ring) {
        for (r, y) in res[..len].iter_mut().zip(&b[..len]) {
            r.as_int_mut().sub_assign(y.as_int());
        }
        return;
    }
    let s = ring.size();
    for (r, y) in res.chunks_exact_mut(s).zip(b.chunks_exact(s)).take(len) {
        ring.sub_assign(r, y);
    }
}

/// Sets `res[i] = a[i] - res[i]` for `i < len`.
pub fn sub_from(ring: &Ring<'_>, res: &mut [Slot], a: &[Slot], len: usize) {
    let s = ring.size();
    for (r, x) in res.chunks_exact_mut(s).zip(a.chunks_exact(s)).take(len) {
        ring.sub_from(r, x);
    }
}

/// Returns true if the first `len` elements of `a` and `b` agree.
#[must_use]
pub fn equal(ring: &Ring<'_>, a: &[Slot], b: &[Slot], len: usize) -> bool {
    let s = ring.size();
    a.chunks_exact(s)
        .zip(b.chunks_exact(s))
        .take(len)
        .all(|(x, y)| ring.equal(x, y))
}

/// Returns true if the first `len` elements of `a` are zero.
#[must_use]
pub fn is_zero(ring: &Ring<'_>, a: &[Slot], len: usize) -> bool {
    let s = ring.size();
    a.chunks_exact(s).take(len).all(|x| ring.is_zero(x))
}
