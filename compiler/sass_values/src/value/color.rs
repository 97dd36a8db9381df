//! Colors in RGBA and HSLA form.
//!
//! A color remembers the form it was authored in. The other form is
//! derived on first request and cached next to the original, so a color
//! built with `hsl()` prints and reports HSL channels exactly as
//! authored while still comparing equal to the RGB color it denotes.

use std::hash::{Hash, Hasher};
use std::sync::OnceLock;

use sass_ir::Span;

use super::fuzzy;
use super::hash_cache::HashCache;
use rustc_hash::FxHasher;

/// Color with red, green, blue channels in `[0, 255]` and alpha in `[0, 1]`.
#[derive(Clone, Debug)]
pub struct ColorRgba {
    r: f64,
    g: f64,
    b: f64,
    a: f64,
    disp: String,
    span: Span,
    hsla: OnceLock<Box<ColorHsla>>,
    hash: HashCache,
}

/// Color with hue in `[0, 360)`, saturation and lightness in `[0, 1]`,
/// and alpha in `[0, 1]`.
#[derive(Clone, Debug)]
pub struct ColorHsla {
    h: f64,
    s: f64,
    l: f64,
    a: f64,
    disp: String,
    span: Span,
    rgba: OnceLock<Box<ColorRgba>>,
    hash: HashCache,
}

/// A color in either representation.
#[derive(Clone, Debug)]
pub enum Color {
    Rgba(ColorRgba),
    Hsla(ColorHsla),
}

// RGBA

impl ColorRgba {
    /// Channels are clamped into range.
    pub fn new(span: Span, r: f64, g: f64, b: f64, a: f64) -> Self {
        ColorRgba {
            r: fuzzy::clamp(r, 0.0, 255.0),
            g: fuzzy::clamp(g, 0.0, 255.0),
            b: fuzzy::clamp(b, 0.0, 255.0),
            a: fuzzy::clamp(a, 0.0, 1.0),
            disp: String::new(),
            span,
            hsla: OnceLock::new(),
            hash: HashCache::new(),
        }
    }

    /// Attach the authored spelling (`red`, `#FFF`) used for output.
    #[must_use]
    pub fn with_disp(mut self, disp: impl Into<String>) -> Self {
        self.disp = disp.into();
        self
    }

    pub fn r(&self) -> f64 {
        self.r
    }

    pub fn g(&self) -> f64 {
        self.g
    }

    pub fn b(&self) -> f64 {
        self.b
    }

    pub fn a(&self) -> f64 {
        self.a
    }

    pub fn disp(&self) -> &str {
        &self.disp
    }

    pub fn span(&self) -> Span {
        self.span
    }

    pub fn set_alpha(&mut self, a: f64) {
        self.a = fuzzy::clamp(a, 0.0, 1.0);
        self.disp.clear();
        self.hsla = OnceLock::new();
        self.hash.invalidate();
    }

    pub fn set_disp(&mut self, disp: impl Into<String>) {
        self.disp = disp.into();
    }

    /// Derived HSLA form, computed once.
    pub fn hsla(&self) -> &ColorHsla {
        self.hsla.get_or_init(|| {
            tracing::trace!(r = self.r, g = self.g, b = self.b, "deriving hsla");
            Box::new(self.to_hsla_copy())
        })
    }

    /// Fresh HSLA instance with the same span and display string.
    pub fn to_hsla_copy(&self) -> ColorHsla {
        let r = self.r / 255.0;
        let g = self.g / 255.0;
        let b = self.b / 255.0;
        let max = r.max(g).max(b);
        let min = r.min(g).min(b);
        let delta = max - min;
        let l = (max + min) / 2.0;

        let (h, s) = if fuzzy::equals(max, min) {
            (0.0, 0.0)
        } else {
            let s = if l < 0.5 {
                delta / (max + min)
            } else {
                delta / (2.0 - max - min)
            };
            let h = if r == max {
                (g - b) / delta + if g < b { 6.0 } else { 0.0 }
            } else if g == max {
                (b - r) / delta + 2.0
            } else {
                (r - g) / delta + 4.0
            };
            (h, s)
        };

        ColorHsla::new(self.span, h * 60.0, s, l, self.a).with_disp(self.disp.clone())
    }

    /// Channels rounded the way they are printed.
    pub fn rounded_channels(&self) -> [u8; 3] {
        [self.r, self.g, self.b].map(|c| c.round() as u8)
    }

    /// Whether the color can be written as `#rgb`.
    pub fn is_color_doublet(&self) -> bool {
        is_color_doublet(self.r.round(), self.g.round(), self.b.round())
    }

    fn feed_hash(&self, h: &mut FxHasher) {
        for channel in [self.r, self.g, self.b, self.a] {
            fuzzy::hash_bits(channel).hash(h);
        }
    }

    fn same_channels(&self, other: &ColorRgba) -> bool {
        fuzzy::equals(self.r, other.r)
            && fuzzy::equals(self.g, other.g)
            && fuzzy::equals(self.b, other.b)
            && fuzzy::equals(self.a, other.a)
    }

    pub fn hash_code(&self) -> u64 {
        self.hash.get_or_compute(|h| self.feed_hash(h))
    }
}

// HSLA

impl ColorHsla {
    /// Hue wraps around the circle; the other channels are clamped.
    pub fn new(span: Span, h: f64, s: f64, l: f64, a: f64) -> Self {
        ColorHsla {
            h: fuzzy::absmod(h, 360.0),
            s: fuzzy::clamp(s, 0.0, 1.0),
            l: fuzzy::clamp(l, 0.0, 1.0),
            a: fuzzy::clamp(a, 0.0, 1.0),
            disp: String::new(),
            span,
            rgba: OnceLock::new(),
            hash: HashCache::new(),
        }
    }

    #[must_use]
    pub fn with_disp(mut self, disp: impl Into<String>) -> Self {
        self.disp = disp.into();
        self
    }

    pub fn h(&self) -> f64 {
        self.h
    }

    pub fn s(&self) -> f64 {
        self.s
    }

    pub fn l(&self) -> f64 {
        self.l
    }

    pub fn a(&self) -> f64 {
        self.a
    }

    pub fn disp(&self) -> &str {
        &self.disp
    }

    pub fn span(&self) -> Span {
        self.span
    }

    pub fn set_alpha(&mut self, a: f64) {
        self.a = fuzzy::clamp(a, 0.0, 1.0);
        self.disp.clear();
        self.rgba = OnceLock::new();
        self.hash.invalidate();
    }

    pub fn set_disp(&mut self, disp: impl Into<String>) {
        self.disp = disp.into();
    }

    /// Derived RGBA form, computed once.
    pub fn rgba(&self) -> &ColorRgba {
        self.rgba.get_or_init(|| {
            tracing::trace!(h = self.h, s = self.s, l = self.l, "deriving rgba");
            Box::new(self.to_rgba_copy())
        })
    }

    /// Fresh RGBA instance with the same span and display string.
    pub fn to_rgba_copy(&self) -> ColorRgba {
        let h = self.h / 360.0;
        let s = self.s;
        let l = self.l;
        let m2 = if l <= 0.5 {
            l * (s + 1.0)
        } else {
            (l + s) - (l * s)
        };
        let m1 = l * 2.0 - m2;
        let r = hue_to_rgb(m1, m2, h + 1.0 / 3.0) * 255.0;
        let g = hue_to_rgb(m1, m2, h) * 255.0;
        let b = hue_to_rgb(m1, m2, h - 1.0 / 3.0) * 255.0;
        ColorRgba::new(self.span, r, g, b, self.a).with_disp(self.disp.clone())
    }

    pub fn hash_code(&self) -> u64 {
        self.hash.get_or_compute(|h| self.rgba().feed_hash(h))
    }
}

fn hue_to_rgb(m1: f64, m2: f64, h: f64) -> f64 {
    let h = fuzzy::absmod(h, 1.0);
    if h * 6.0 < 1.0 {
        m1 + (m2 - m1) * h * 6.0
    } else if h * 2.0 < 1.0 {
        m2
    } else if h * 3.0 < 2.0 {
        m1 + (m2 - m1) * (2.0 / 3.0 - h) * 6.0
    } else {
        m1
    }
}

/// Whether a channel value has identical hex digits (`0x00`, `0x11`, … `0xff`).
pub fn is_hex_doublet(n: f64) -> bool {
    (0.0..=255.0).contains(&n) && n.fract() == 0.0 && (n as u32) % 17 == 0
}

/// Whether all three channels are hex doublets.
pub fn is_color_doublet(r: f64, g: f64, b: f64) -> bool {
    is_hex_doublet(r) && is_hex_doublet(g) && is_hex_doublet(b)
}

// Either representation

impl Color {
    /// The color as RGBA: itself, or its cached derived form.
    pub fn to_rgba(&self) -> &ColorRgba {
        match self {
            Color::Rgba(rgba) => rgba,
            Color::Hsla(hsla) => hsla.rgba(),
        }
    }

    /// The color as HSLA: itself, or its cached derived form.
    pub fn to_hsla(&self) -> &ColorHsla {
        match self {
            Color::Rgba(rgba) => rgba.hsla(),
            Color::Hsla(hsla) => hsla,
        }
    }

    pub fn to_rgba_copy(&self) -> ColorRgba {
        match self {
            Color::Rgba(rgba) => {
                ColorRgba::new(rgba.span, rgba.r, rgba.g, rgba.b, rgba.a)
                    .with_disp(rgba.disp.clone())
            }
            Color::Hsla(hsla) => hsla.to_rgba_copy(),
        }
    }

    pub fn to_hsla_copy(&self) -> ColorHsla {
        match self {
            Color::Rgba(rgba) => rgba.to_hsla_copy(),
            Color::Hsla(hsla) => {
                ColorHsla::new(hsla.span, hsla.h, hsla.s, hsla.l, hsla.a)
                    .with_disp(hsla.disp.clone())
            }
        }
    }

    pub fn alpha(&self) -> f64 {
        match self {
            Color::Rgba(rgba) => rgba.a,
            Color::Hsla(hsla) => hsla.a,
        }
    }

    pub fn disp(&self) -> &str {
        match self {
            Color::Rgba(rgba) => &rgba.disp,
            Color::Hsla(hsla) => &hsla.disp,
        }
    }

    pub fn span(&self) -> Span {
        match self {
            Color::Rgba(rgba) => rgba.span,
            Color::Hsla(hsla) => hsla.span,
        }
    }

    pub fn set_alpha(&mut self, a: f64) {
        match self {
            Color::Rgba(rgba) => rgba.set_alpha(a),
            Color::Hsla(hsla) => hsla.set_alpha(a),
        }
    }

    pub fn set_disp(&mut self, disp: impl Into<String>) {
        match self {
            Color::Rgba(rgba) => rgba.set_disp(disp),
            Color::Hsla(hsla) => hsla.set_disp(disp),
        }
    }

    /// Hash of the canonical RGBA channels.
    pub fn hash_code(&self) -> u64 {
        match self {
            Color::Rgba(rgba) => rgba.hash_code(),
            Color::Hsla(hsla) => hsla.hash_code(),
        }
    }
}

impl From<ColorRgba> for Color {
    fn from(rgba: ColorRgba) -> Self {
        Color::Rgba(rgba)
    }
}

impl From<ColorHsla> for Color {
    fn from(hsla: ColorHsla) -> Self {
        Color::Hsla(hsla)
    }
}

impl PartialEq for ColorRgba {
    fn eq(&self, other: &Self) -> bool {
        self.same_channels(other)
    }
}

impl PartialEq for ColorHsla {
    fn eq(&self, other: &Self) -> bool {
        self.rgba().same_channels(other.rgba())
    }
}

impl PartialEq for Color {
    fn eq(&self, other: &Self) -> bool {
        self.to_rgba().same_channels(other.to_rgba())
    }
}

impl Eq for Color {}

impl Hash for Color {
    fn hash<H: Hasher>(&self, state: &mut H) {
        state.write_u64(self.hash_code());
    }
}
