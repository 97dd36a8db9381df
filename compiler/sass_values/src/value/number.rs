//! Numbers with units.

use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};

use sass_ir::Span;

use super::fuzzy;
use super::hash_cache::HashCache;
use super::units::Units;
use crate::errors::{incompatible_units, EvalError};
use crate::serialize::format_number;

/// A number and its units.
///
/// The authored units are kept as written so the number prints the way
/// it was authored. Comparison and hashing work on a normalized copy,
/// which makes `1in` and `96px` equal.
#[derive(Clone, Debug)]
pub struct Number {
    value: f64,
    units: Units,
    zero: bool,
    delayed: bool,
    span: Span,
    hash: HashCache,
}

impl Number {
    /// Number with a compound unit string such as `px` or `px*em/s`.
    pub fn new(span: Span, value: f64, unit: &str) -> Self {
        Number::with_units(span, value, Units::parse(unit))
    }

    pub fn unitless(span: Span, value: f64) -> Self {
        Number::with_units(span, value, Units::new())
    }

    pub fn with_units(span: Span, value: f64, units: Units) -> Self {
        Number {
            value,
            units,
            zero: true,
            delayed: false,
            span,
            hash: HashCache::new(),
        }
    }

    #[inline]
    pub fn value(&self) -> f64 {
        self.value
    }

    #[inline]
    pub fn units(&self) -> &Units {
        &self.units
    }

    #[inline]
    pub fn span(&self) -> Span {
        self.span
    }

    /// Whether a leading zero is printed for magnitudes below one.
    #[inline]
    pub fn zero(&self) -> bool {
        self.zero
    }

    #[inline]
    pub fn is_delayed(&self) -> bool {
        self.delayed
    }

    pub fn is_unitless(&self) -> bool {
        self.units.is_unitless()
    }

    pub fn unit_string(&self) -> String {
        self.units.unit_string()
    }

    pub fn set_zero(&mut self, zero: bool) {
        self.zero = zero;
    }

    pub fn set_delayed(&mut self, delayed: bool) {
        self.delayed = delayed;
    }

    pub fn set_value(&mut self, value: f64) {
        self.value = value;
        self.hash.invalidate();
    }

    /// Cancel numerator/denominator pairs, folding the factor into the value.
    pub fn reduce(&mut self) {
        let factor = self.units.reduce();
        self.value *= factor;
        self.hash.invalidate();
    }

    /// Convert to canonical units in place.
    pub fn normalize(&mut self) {
        let factor = self.units.normalize();
        self.value *= factor;
        self.hash.invalidate();
    }

    /// Normalized copy; the receiver keeps its authored units.
    #[must_use]
    pub fn normalized(&self) -> Number {
        let mut copy = Number::with_units(self.span, self.value, self.units.clone());
        copy.normalize();
        copy
    }

    /// The value expressed in `units`, if the dimensions match.
    pub fn value_in(&self, units: &Units) -> Option<f64> {
        self.units
            .conversion_factor_to(units)
            .map(|factor| self.value * factor)
    }

    /// Evaluator equality (`==`).
    ///
    /// A unitless number never equals a number with units. Numbers whose
    /// units measure different dimensions cannot be compared at all.
    pub fn try_eq(&self, other: &Number) -> Result<bool, EvalError> {
        if self.is_unitless() != other.is_unitless() {
            return Ok(false);
        }
        match other.value_in(&self.units) {
            Some(value) => Ok(fuzzy::equals(self.value, value)),
            None => Err(self.incompatible(other)),
        }
    }

    /// Evaluator ordering (`<`, `<=`, `>`, `>=`).
    ///
    /// A unitless operand is compared by raw value against any units.
    pub fn try_cmp(&self, other: &Number) -> Result<Ordering, EvalError> {
        let rhs = if self.is_unitless() || other.is_unitless() {
            other.value
        } else {
            other
                .value_in(&self.units)
                .ok_or_else(|| self.incompatible(other))?
        };
        if fuzzy::equals(self.value, rhs) {
            return Ok(Ordering::Equal);
        }
        Ok(self.value.total_cmp(&rhs))
    }

    fn incompatible(&self, other: &Number) -> EvalError {
        incompatible_units(&self.unit_string(), &other.unit_string()).with_span(other.span)
    }

    /// Structural hash shared by equal numbers.
    pub fn hash_code(&self) -> u64 {
        self.hash.get_or_compute(|h| {
            let canonical = self.normalized();
            canonical.units.hash(h);
            fuzzy::hash_bits(canonical.value).hash(h);
        })
    }
}

impl PartialEq for Number {
    fn eq(&self, other: &Self) -> bool {
        let lhs = self.normalized();
        let rhs = other.normalized();
        lhs.units == rhs.units && fuzzy::equals(lhs.value, rhs.value)
    }
}

impl Eq for Number {}

impl Hash for Number {
    fn hash<H: Hasher>(&self, state: &mut H) {
        state.write_u64(self.hash_code());
    }
}

impl fmt::Display for Number {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&format_number(self.value, fuzzy::PRECISION, self.zero))?;
        f.write_str(&self.unit_string())
    }
}
