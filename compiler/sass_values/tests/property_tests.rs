//! Property-based tests for the value model.
//!
//! Checks the invariants that make values usable as map keys and keep
//! authored forms intact:
//! 1. Equal values hash equally, across units and color representations
//! 2. RGBA -> HSLA -> RGBA reproduces the channels
//! 3. Normalization does not change what a number denotes
//! 4. Structurally equal keys find each other in a map

#![allow(clippy::unwrap_used, clippy::expect_used, reason = "Tests can panic")]
#![allow(
    clippy::doc_markdown,
    clippy::uninlined_format_args,
    reason = "Proptest macros generate code with these patterns"
)]

use proptest::prelude::*;
use sass_ir::Span;
use sass_values::{codec, Color, ColorRgba, ListValue, MapValue, Number, Separator, Value};

// -- Strategies --

/// Integer-valued magnitudes keep unit conversions exact.
fn magnitude_strategy() -> impl Strategy<Value = f64> {
    (-100_000i32..100_000).prop_map(f64::from)
}

/// A unit and how many pixels (or canonical units) one of it is worth.
fn length_unit_strategy() -> impl Strategy<Value = (&'static str, f64)> {
    prop_oneof![
        Just(("px", 1.0)),
        Just(("in", 96.0)),
        Just(("pc", 16.0)),
    ]
}

fn channel_strategy() -> impl Strategy<Value = f64> {
    (0u8..=255).prop_map(f64::from)
}

fn alpha_strategy() -> impl Strategy<Value = f64> {
    (0u8..=100).prop_map(|a| f64::from(a) / 100.0)
}

fn rgba_strategy() -> impl Strategy<Value = ColorRgba> {
    (channel_strategy(), channel_strategy(), channel_strategy(), alpha_strategy())
        .prop_map(|(r, g, b, a)| ColorRgba::new(Span::DUMMY, r, g, b, a))
}

fn scalar_strategy() -> impl Strategy<Value = Value> {
    prop_oneof![
        magnitude_strategy().prop_map(|v| Value::unitless(Span::DUMMY, v)),
        magnitude_strategy().prop_map(|v| Value::number(Span::DUMMY, v, "px")),
        "[a-z]{1,6}".prop_map(|s| Value::string(Span::DUMMY, s)),
        any::<bool>().prop_map(|b| Value::bool(Span::DUMMY, b)),
        Just(Value::null(Span::DUMMY)),
    ]
}

fn list_strategy() -> impl Strategy<Value = Value> {
    (
        prop::collection::vec(scalar_strategy(), 0..5),
        any::<bool>(),
        any::<bool>(),
    )
        .prop_map(|(items, comma, bracketed)| {
            let separator = if comma {
                Separator::Comma
            } else {
                Separator::Space
            };
            Value::list(
                ListValue::new(Span::DUMMY, separator, items)
                    .with_bracketed(bracketed),
            )
        })
}

// -- Property Tests --

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 256,
        ..ProptestConfig::default()
    })]

    /// The same length written in two units compares and hashes equal.
    #[test]
    fn prop_convertible_numbers_hash_equally(
        value in magnitude_strategy(),
        (unit, factor) in length_unit_strategy(),
    ) {
        let authored = Number::new(Span::DUMMY, value, unit);
        let pixels = Number::new(Span::DUMMY, value * factor, "px");
        prop_assert_eq!(&authored, &pixels);
        prop_assert_eq!(authored.hash_code(), pixels.hash_code());
    }

    /// Normalizing keeps a number equal to itself and leaves the
    /// original's units alone.
    #[test]
    fn prop_normalization_preserves_quantity(
        value in magnitude_strategy(),
        (unit, _factor) in length_unit_strategy(),
    ) {
        let number = Number::new(Span::DUMMY, value, unit);
        let normalized = number.normalized();
        prop_assert_eq!(&number, &normalized);
        prop_assert_eq!(number.unit_string(), unit);
        prop_assert_eq!(normalized.unit_string(), "px");
        let mut twice = normalized.clone();
        twice.normalize();
        prop_assert_eq!(twice.value(), normalized.value());
    }

    /// Converting to HSLA and back reproduces the channels.
    #[test]
    fn prop_hsla_round_trip(color in rgba_strategy()) {
        let back = color.to_hsla_copy().to_rgba_copy();
        prop_assert!((back.r() - color.r()).abs() < 1e-6);
        prop_assert!((back.g() - color.g()).abs() < 1e-6);
        prop_assert!((back.b() - color.b()).abs() < 1e-6);
        prop_assert!((back.a() - color.a()).abs() < 1e-12);
    }

    /// An RGBA color equals and hashes like its HSLA form.
    #[test]
    fn prop_color_representations_hash_equally(color in rgba_strategy()) {
        let hsla = color.to_hsla_copy();
        let rgb = Value::color(Color::Rgba(color));
        let hsl = Value::color(Color::Hsla(hsla));
        prop_assert_eq!(&rgb, &hsl);
        prop_assert_eq!(rgb.hash_code(), hsl.hash_code());
    }

    /// Equal values always hash equally; lists are compared structurally.
    #[test]
    fn prop_equal_lists_hash_equally(list in list_strategy()) {
        let rebuilt = list.as_list().map(|l| {
            Value::list(
                ListValue::new(Span::new(1, 2), l.separator(), l.items().to_vec())
                    .with_bracketed(l.is_bracketed()),
            )
        });
        let rebuilt = rebuilt.expect("list strategy builds lists");
        prop_assert_eq!(&list, &rebuilt);
        prop_assert_eq!(list.hash_code(), rebuilt.hash_code());
    }

    /// A separately built key finds the stored entry.
    #[test]
    fn prop_map_lookup_by_structure(
        keys in prop::collection::vec(list_strategy(), 1..6),
    ) {
        let mut map = MapValue::new(Span::DUMMY);
        for (i, key) in keys.iter().enumerate() {
            map.insert(key.clone(), Value::unitless(Span::DUMMY, i as f64));
        }
        for key in &keys {
            let probe = Value::list(
                key.as_list()
                    .map(|l| {
                        ListValue::new(Span::new(9, 9), l.separator(), l.items().to_vec())
                            .with_bracketed(l.is_bracketed())
                    })
                    .expect("list strategy builds lists"),
            );
            prop_assert!(map.get(&probe).is_some());
        }
        let keys_in_order: Vec<&Value> = map.keys().collect();
        prop_assert!(keys_in_order.len() <= keys.len());
    }

    /// Quoting then unquoting gives back the text.
    #[test]
    fn prop_quote_unquote_round_trip(text in "[a-zA-Z0-9 '\"\\\\-]{0,12}") {
        let quoted = codec::quote(&text, None);
        let (unquoted, mark) = codec::unquote(&quoted, codec::UnquoteOptions::default());
        prop_assert!(mark.is_some());
        prop_assert_eq!(unquoted, text);
    }
}
