use super::*;
use pretty_assertions::assert_eq;

fn assert_close(actual: f64, expected: f64) {
    assert!(
        (actual - expected).abs() < 1e-9,
        "expected {expected}, got {actual}"
    );
}

// Parsing and rendering

#[test]
fn parse_compound_units() {
    let units = Units::parse("px*em/s");
    assert_eq!(units.numerators.as_slice(), &[Unit::Px, Unit::from_name("em")]);
    assert_eq!(units.denominators.as_slice(), &[Unit::S]);
    assert_eq!(units.unit_string(), "px*em/s");
}

#[test]
fn parse_denominator_only() {
    let units = Units::parse("/s");
    assert!(units.numerators.is_empty());
    assert_eq!(units.unit_string(), "/s");
}

#[test]
fn parse_everything_after_slash_is_denominator() {
    let units = Units::parse("px/s*ms");
    assert_eq!(units.denominators.as_slice(), &[Unit::S, Unit::Ms]);
}

#[test]
fn parse_empty_is_unitless() {
    assert!(Units::parse("").is_unitless());
    assert_eq!(Units::parse("").unit_string(), "");
}

#[test]
fn unit_names_are_case_sensitive() {
    assert_eq!(Unit::from_name("kHz"), Unit::KHz);
    assert_eq!(Unit::from_name("PX"), Unit::Other("PX".into()));
    assert_eq!(Unit::from_name("%").class(), UnitClass::Incommensurable);
}

#[test]
fn valid_css_unit() {
    assert!(Units::parse("px").is_valid_css_unit());
    assert!(Units::new().is_valid_css_unit());
    assert!(!Units::parse("px*px").is_valid_css_unit());
    assert!(!Units::parse("px/s").is_valid_css_unit());
}

// Conversion factors

#[test]
fn length_factors() {
    assert_close(Unit::In.conversion_factor(&Unit::Px).unwrap_or(0.0), 96.0);
    assert_close(Unit::In.conversion_factor(&Unit::Cm).unwrap_or(0.0), 2.54);
    assert_close(Unit::Pc.conversion_factor(&Unit::Pt).unwrap_or(0.0), 12.0);
    assert_close(Unit::Cm.conversion_factor(&Unit::Q).unwrap_or(0.0), 40.0);
}

#[test]
fn other_class_factors() {
    assert_close(Unit::Turn.conversion_factor(&Unit::Grad).unwrap_or(0.0), 400.0);
    assert_close(Unit::Rad.conversion_factor(&Unit::Deg).unwrap_or(0.0), 180.0 / PI);
    assert_close(Unit::S.conversion_factor(&Unit::Ms).unwrap_or(0.0), 1000.0);
    assert_close(Unit::KHz.conversion_factor(&Unit::Hz).unwrap_or(0.0), 1000.0);
    assert_close(Unit::Dppx.conversion_factor(&Unit::Dpi).unwrap_or(0.0), 96.0);
}

#[test]
fn incompatible_classes_do_not_convert() {
    assert_eq!(Unit::Px.conversion_factor(&Unit::Deg), None);
    assert_eq!(Unit::from_name("em").conversion_factor(&Unit::Px), None);
    assert_eq!(
        Unit::from_name("em").conversion_factor(&Unit::from_name("em")),
        Some(1.0)
    );
}

// Reduction

#[test]
fn reduce_cancels_identical_units() {
    let mut units = Units::parse("px*px/px");
    assert_close(units.reduce(), 1.0);
    assert_eq!(units.unit_string(), "px");
}

#[test]
fn reduce_cancels_convertible_units() {
    let mut units = Units::parse("in/px");
    assert_close(units.reduce(), 96.0);
    assert!(units.is_unitless());
}

#[test]
fn reduce_keeps_unrelated_units_in_order() {
    let mut units = Units::parse("px*em/s");
    assert_close(units.reduce(), 1.0);
    assert_eq!(units.unit_string(), "px*em/s");
}

#[test]
fn reduce_is_idempotent() {
    let mut units = Units::parse("in*em/px*s");
    let first = units.reduce();
    let snapshot = units.clone();
    assert_close(first, 96.0);
    assert_close(units.reduce(), 1.0);
    assert_eq!(units, snapshot);
    assert_eq!(units.unit_string(), "em/s");
}

// Normalization

#[test]
fn normalize_converts_to_canonical() {
    let mut units = Units::parse("in");
    assert_close(units.normalize(), 96.0);
    assert_eq!(units, Units::single(Unit::Px));

    let mut units = Units::parse("ms");
    assert_close(units.normalize(), 0.001);
    assert_eq!(units, Units::single(Unit::S));
}

#[test]
fn normalize_handles_denominators() {
    let mut units = Units::parse("px/ms");
    assert_close(units.normalize(), 1000.0);
    assert_eq!(units.unit_string(), "px/s");
}

#[test]
fn normalize_is_order_independent() {
    assert_eq!(
        Units::parse("em*px").canonical(),
        Units::parse("in*em").canonical()
    );
}

#[test]
fn compatibility() {
    assert!(Units::parse("in").is_compatible_with(&Units::parse("cm")));
    assert!(!Units::parse("px").is_compatible_with(&Units::parse("deg")));
    assert!(!Units::parse("px").is_compatible_with(&Units::new()));
}

#[test]
fn conversion_factor_between_compound_units() {
    let from = Units::parse("in/s");
    let to = Units::parse("px/ms");
    assert_close(from.conversion_factor_to(&to).unwrap_or(0.0), 0.096);
    assert_eq!(Units::parse("px").conversion_factor_to(&Units::parse("s")), None);
}
