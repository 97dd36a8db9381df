//! Unit algebra for numbers.
//!
//! A number's units are two ordered lists, numerators and denominators
//! (`px*em/s`). Units of the same class (length, angle, time, frequency,
//! resolution) convert into each other through a fixed factor relative to
//! the class's canonical unit. Every other unit is incommensurable and
//! converts only to itself.

use smallvec::SmallVec;
use std::f64::consts::PI;
use std::fmt;

/// The dimension a unit measures.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum UnitClass {
    Length,
    Angle,
    Time,
    Frequency,
    Resolution,
    /// Unit with no known conversions (`em`, `%`, custom identifiers).
    Incommensurable,
}

impl UnitClass {
    /// The unit every other unit of this class normalizes to.
    pub fn canonical_unit(self) -> Option<Unit> {
        match self {
            UnitClass::Length => Some(Unit::Px),
            UnitClass::Angle => Some(Unit::Deg),
            UnitClass::Time => Some(Unit::S),
            UnitClass::Frequency => Some(Unit::Hz),
            UnitClass::Resolution => Some(Unit::Dppx),
            UnitClass::Incommensurable => None,
        }
    }
}

/// A single unit.
///
/// The derived ordering is only used to make normalized unit lists
/// order-independent; it has no meaning beyond that.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Unit {
    // Length
    In,
    Cm,
    Pc,
    Mm,
    Pt,
    Px,
    Q,
    // Angle
    Deg,
    Grad,
    Rad,
    Turn,
    // Time
    S,
    Ms,
    // Frequency
    Hz,
    KHz,
    // Resolution
    Dpi,
    Dpcm,
    Dppx,
    /// Any other unit, kept by name.
    Other(Box<str>),
}

impl Unit {
    /// Look up a unit by its CSS name. Names are case-sensitive.
    pub fn from_name(name: &str) -> Unit {
        match name {
            "in" => Unit::In,
            "cm" => Unit::Cm,
            "pc" => Unit::Pc,
            "mm" => Unit::Mm,
            "pt" => Unit::Pt,
            "px" => Unit::Px,
            "q" => Unit::Q,
            "deg" => Unit::Deg,
            "grad" => Unit::Grad,
            "rad" => Unit::Rad,
            "turn" => Unit::Turn,
            "s" => Unit::S,
            "ms" => Unit::Ms,
            "Hz" => Unit::Hz,
            "kHz" => Unit::KHz,
            "dpi" => Unit::Dpi,
            "dpcm" => Unit::Dpcm,
            "dppx" => Unit::Dppx,
            other => Unit::Other(other.into()),
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            Unit::In => "in",
            Unit::Cm => "cm",
            Unit::Pc => "pc",
            Unit::Mm => "mm",
            Unit::Pt => "pt",
            Unit::Px => "px",
            Unit::Q => "q",
            Unit::Deg => "deg",
            Unit::Grad => "grad",
            Unit::Rad => "rad",
            Unit::Turn => "turn",
            Unit::S => "s",
            Unit::Ms => "ms",
            Unit::Hz => "Hz",
            Unit::KHz => "kHz",
            Unit::Dpi => "dpi",
            Unit::Dpcm => "dpcm",
            Unit::Dppx => "dppx",
            Unit::Other(name) => name,
        }
    }

    pub fn class(&self) -> UnitClass {
        match self {
            Unit::In | Unit::Cm | Unit::Pc | Unit::Mm | Unit::Pt | Unit::Px | Unit::Q => {
                UnitClass::Length
            }
            Unit::Deg | Unit::Grad | Unit::Rad | Unit::Turn => UnitClass::Angle,
            Unit::S | Unit::Ms => UnitClass::Time,
            Unit::Hz | Unit::KHz => UnitClass::Frequency,
            Unit::Dpi | Unit::Dpcm | Unit::Dppx => UnitClass::Resolution,
            Unit::Other(_) => UnitClass::Incommensurable,
        }
    }

    /// How many canonical units one of this unit is worth.
    pub fn factor(&self) -> f64 {
        match self {
            Unit::In => 96.0,
            Unit::Cm => 96.0 / 2.54,
            Unit::Mm => 96.0 / 25.4,
            Unit::Q => 96.0 / 101.6,
            Unit::Pt => 4.0 / 3.0,
            Unit::Pc => 16.0,
            Unit::Grad => 0.9,
            Unit::Rad => 180.0 / PI,
            Unit::Turn => 360.0,
            Unit::Ms => 0.001,
            Unit::KHz => 1000.0,
            Unit::Dpi => 1.0 / 96.0,
            Unit::Dpcm => 2.54 / 96.0,
            Unit::Px
            | Unit::Deg
            | Unit::S
            | Unit::Hz
            | Unit::Dppx
            | Unit::Other(_) => 1.0,
        }
    }

    /// Factor converting a quantity in `self` into `other`, if the two
    /// measure the same thing.
    pub fn conversion_factor(&self, other: &Unit) -> Option<f64> {
        if self == other {
            return Some(1.0);
        }
        let class = self.class();
        if class == UnitClass::Incommensurable || class != other.class() {
            return None;
        }
        Some(self.factor() / other.factor())
    }
}

impl fmt::Display for Unit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

pub type UnitList = SmallVec<[Unit; 1]>;

/// Numerator and denominator units of a number.
///
/// Derived equality is structural and order-sensitive. Compare the
/// results of [`Units::canonical`] for dimensional equality.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct Units {
    pub numerators: UnitList,
    pub denominators: UnitList,
}

impl Units {
    pub fn new() -> Self {
        Units::default()
    }

    /// Units consisting of one numerator.
    pub fn single(unit: Unit) -> Self {
        let mut numerators = UnitList::new();
        numerators.push(unit);
        Units {
            numerators,
            denominators: UnitList::new(),
        }
    }

    /// Parse a compound unit string such as `px*em/s`.
    ///
    /// Everything after the first `/` is a denominator. Empty segments
    /// are skipped.
    pub fn parse(text: &str) -> Self {
        let mut units = Units::new();
        let (numerators, denominators) = match text.split_once('/') {
            Some((num, den)) => (num, den),
            None => (text, ""),
        };
        for name in numerators.split(['*', '/']).filter(|n| !n.is_empty()) {
            units.numerators.push(Unit::from_name(name));
        }
        for name in denominators.split(['*', '/']).filter(|n| !n.is_empty()) {
            units.denominators.push(Unit::from_name(name));
        }
        units
    }

    pub fn is_unitless(&self) -> bool {
        self.numerators.is_empty() && self.denominators.is_empty()
    }

    /// Whether the units are exactly the single numerator `unit`.
    pub fn is_single(&self, unit: &Unit) -> bool {
        self.denominators.is_empty() && self.numerators.len() == 1 && &self.numerators[0] == unit
    }

    /// Whether the units can be written in plain CSS.
    pub fn is_valid_css_unit(&self) -> bool {
        self.numerators.len() <= 1 && self.denominators.is_empty()
    }

    /// Render as `num1*num2/den1*den2`. Unitless renders as "".
    pub fn unit_string(&self) -> String {
        let mut out = String::new();
        for (i, unit) in self.numerators.iter().enumerate() {
            if i > 0 {
                out.push('*');
            }
            out.push_str(unit.as_str());
        }
        if !self.denominators.is_empty() {
            out.push('/');
        }
        for (i, unit) in self.denominators.iter().enumerate() {
            if i > 0 {
                out.push('*');
            }
            out.push_str(unit.as_str());
        }
        out
    }

    /// Units of a product.
    #[must_use]
    pub fn mul(&self, other: &Units) -> Units {
        let mut out = self.clone();
        out.numerators.extend(other.numerators.iter().cloned());
        out.denominators.extend(other.denominators.iter().cloned());
        out
    }

    /// Units of a quotient.
    #[must_use]
    pub fn div(&self, other: &Units) -> Units {
        let mut out = self.clone();
        out.numerators.extend(other.denominators.iter().cloned());
        out.denominators.extend(other.numerators.iter().cloned());
        out
    }

    /// Cancel numerator/denominator pairs.
    ///
    /// Identical units cancel first, then units of the same class. The
    /// returned factor must be multiplied into the owning value. Units
    /// that do not cancel keep their order. Running it twice is a no-op.
    pub fn reduce(&mut self) -> f64 {
        let mut factor = 1.0;
        if self.numerators.is_empty() || self.denominators.is_empty() {
            return factor;
        }

        // Identical pairs.
        let mut i = 0;
        while i < self.numerators.len() {
            if let Some(j) = self.denominators.iter().position(|d| *d == self.numerators[i]) {
                self.numerators.remove(i);
                self.denominators.remove(j);
            } else {
                i += 1;
            }
        }

        // Convertible pairs.
        let mut i = 0;
        while i < self.numerators.len() {
            let found = self.denominators.iter().enumerate().find_map(|(j, d)| {
                self.numerators[i]
                    .conversion_factor(d)
                    .map(|f| (j, f))
            });
            if let Some((j, f)) = found {
                factor *= f;
                self.numerators.remove(i);
                self.denominators.remove(j);
            } else {
                i += 1;
            }
        }
        factor
    }

    /// Convert every known unit to its class's canonical unit, reduce,
    /// and sort.
    ///
    /// After normalization two unit lists describing the same dimension
    /// are structurally equal. Returns the factor for the owning value.
    pub fn normalize(&mut self) -> f64 {
        let mut factor = 1.0;
        for unit in &mut self.numerators {
            if let Some(canonical) = unit.class().canonical_unit() {
                factor *= unit.factor();
                *unit = canonical;
            }
        }
        for unit in &mut self.denominators {
            if let Some(canonical) = unit.class().canonical_unit() {
                factor /= unit.factor();
                *unit = canonical;
            }
        }
        factor *= self.reduce();
        self.numerators.sort();
        self.denominators.sort();
        tracing::trace!(units = %self, factor, "normalized units");
        factor
    }

    /// Normalized copy of the units, factor discarded.
    #[must_use]
    pub fn canonical(&self) -> Units {
        let mut units = self.clone();
        units.normalize();
        units
    }

    /// Whether a quantity in these units can be expressed in `other`.
    pub fn is_compatible_with(&self, other: &Units) -> bool {
        self.canonical() == other.canonical()
    }

    /// Factor converting a quantity in these units into `other`.
    ///
    /// `None` when the dimensions differ.
    pub fn conversion_factor_to(&self, other: &Units) -> Option<f64> {
        let mut from = self.clone();
        let mut to = other.clone();
        let from_factor = from.normalize();
        let to_factor = to.normalize();
        (from == to).then(|| from_factor / to_factor)
    }
}

impl fmt::Display for Units {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.unit_string())
    }
}

#[cfg(test)]
mod tests;
