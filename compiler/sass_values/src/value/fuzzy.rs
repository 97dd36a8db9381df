//! Fuzzy float comparison at Sass output precision.
//!
//! Two numbers that print identically at precision 10 are the same
//! number. Equality and hashing both go through [`round`], so values that
//! compare equal always hash equally.

/// Number of decimal digits that are significant for comparison.
pub const PRECISION: usize = 10;

/// Differences below this are treated as noise.
pub const EPSILON: f64 = 1e-11;

const INVERSE_EPSILON: f64 = 1e11;

/// 2^53: above this a scaled value has no fractional part left to round.
const MAX_EXACT: f64 = 9_007_199_254_740_992.0;

/// Snap `x` onto the epsilon grid.
///
/// `-0.0` snaps to `0.0` and every NaN snaps to the same canonical NaN,
/// so the result can be compared and hashed bit-for-bit. Magnitudes whose
/// spacing is already coarser than the grid are left as they are.
pub fn round(x: f64) -> f64 {
    if x.is_nan() {
        return f64::NAN;
    }
    let scaled = x * INVERSE_EPSILON;
    let snapped = if scaled.is_finite() && scaled.abs() < MAX_EXACT {
        scaled.round() / INVERSE_EPSILON
    } else {
        x
    };
    if snapped == 0.0 {
        0.0
    } else {
        snapped
    }
}

/// Whether `a` and `b` are equal at comparison precision.
pub fn equals(a: f64, b: f64) -> bool {
    round(a).to_bits() == round(b).to_bits()
}

/// Bit pattern used when hashing a float.
pub fn hash_bits(x: f64) -> u64 {
    round(x).to_bits()
}

/// Whether `x` is an integer at comparison precision.
pub fn is_int(x: f64) -> bool {
    equals(x, x.round())
}

/// Clamp `x` into `[lo, hi]`. NaN clamps to `lo`.
pub fn clamp(x: f64, lo: f64, hi: f64) -> f64 {
    if x.is_nan() || x < lo {
        lo
    } else if x > hi {
        hi
    } else {
        x
    }
}

/// Modulo that always lands in `[0, modulus)`.
pub fn absmod(x: f64, modulus: f64) -> f64 {
    let r = x % modulus;
    if r < 0.0 {
        r + modulus
    } else {
        r
    }
}
