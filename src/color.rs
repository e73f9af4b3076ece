//! Color model: normalized RGBA colors, HSV conversion, harmony rules,
//! preset palettes and gradient interpolation.

use palette::{FromColor, Hsv, Srgb};
use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::random::uniform;

// ============================================================================
// Color
// ============================================================================

/// An RGBA color with channels normalized to `[0, 1]`.
///
/// Every constructor and arithmetic helper clamps its result, so a `Color`
/// never carries out-of-range channels.
///
/// # Serialization
///
/// Colors serialize as a fixed four-element array `[r, g, b, a]`. The
/// three-element form `[r, g, b]` is also accepted on input (alpha = 1).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "Vec<f32>", into = "[f32; 4]")]
pub struct Color {
    pub r: f32,
    pub g: f32,
    pub b: f32,
    pub a: f32,
}

impl Color {
    pub const WHITE: Self = Self::rgb_const(1.0, 1.0, 1.0);
    pub const BLACK: Self = Self::rgb_const(0.0, 0.0, 0.0);
    /// Neutral mid gray.
    pub const GRAY: Self = Self::rgb_const(0.5, 0.5, 0.5);

    const fn rgb_const(r: f32, g: f32, b: f32) -> Self {
        Self { r, g, b, a: 1.0 }
    }

    /// Creates a color from RGBA components, clamping each to `[0, 1]`.
    pub fn rgba(r: f32, g: f32, b: f32, a: f32) -> Self {
        Self {
            r: clamp_unit(r),
            g: clamp_unit(g),
            b: clamp_unit(b),
            a: clamp_unit(a),
        }
    }

    /// Creates an opaque color from RGB components.
    pub fn rgb(r: f32, g: f32, b: f32) -> Self {
        Self::rgba(r, g, b, 1.0)
    }

    /// Creates a gray with the given intensity.
    pub fn gray(level: f32) -> Self {
        Self::rgb(level, level, level)
    }

    /// Multiplies the RGB channels by `factor`, clamping the result.
    ///
    /// Alpha is left untouched.
    pub fn adjust_brightness(self, factor: f32) -> Self {
        Self::rgba(self.r * factor, self.g * factor, self.b * factor, self.a)
    }

    /// Returns the same color with its alpha channel replaced.
    pub fn with_alpha(self, alpha: f32) -> Self {
        Self::rgba(self.r, self.g, self.b, alpha)
    }

    /// Linear per-channel interpolation; `t = 0` is `self`, `t = 1` is `other`.
    pub fn lerp(self, other: Self, t: f32) -> Self {
        let mix = |a: f32, b: f32| a + (b - a) * t;
        Self::rgba(
            mix(self.r, other.r),
            mix(self.g, other.g),
            mix(self.b, other.b),
            mix(self.a, other.a),
        )
    }

    /// Returns the channels as an array.
    pub fn to_array(self) -> [f32; 4] {
        [self.r, self.g, self.b, self.a]
    }

    /// Returns the hue of this color in `[0, 1)`.
    pub fn hue(self) -> f32 {
        let hsv: Hsv = Hsv::from_color(Srgb::new(self.r, self.g, self.b));
        hsv.hue.into_positive_degrees() / 360.0
    }
}

impl Default for Color {
    fn default() -> Self {
        Self::BLACK
    }
}

impl From<Color> for [f32; 4] {
    fn from(color: Color) -> Self {
        color.to_array()
    }
}

impl TryFrom<Vec<f32>> for Color {
    type Error = String;

    fn try_from(channels: Vec<f32>) -> Result<Self, Self::Error> {
        match channels.as_slice() {
            [r, g, b] => Ok(Self::rgb(*r, *g, *b)),
            [r, g, b, a] => Ok(Self::rgba(*r, *g, *b, *a)),
            other => Err(format!(
                "expected a color with 3 or 4 channels, found {}",
                other.len()
            )),
        }
    }
}

fn clamp_unit(v: f32) -> f32 {
    if v.is_nan() { 0.0 } else { v.clamp(0.0, 1.0) }
}

// ============================================================================
// HSV Conversion
// ============================================================================

/// Converts an HSV triple to an opaque RGB color.
///
/// `h` is a fraction of a full turn and wraps, so `1.25` is the same hue as
/// `0.25`. `s` and `v` are expected in `[0, 1]`.
pub fn hsv_to_rgb(h: f32, s: f32, v: f32) -> Color {
    let hsv: Hsv = Hsv::new(h.rem_euclid(1.0) * 360.0, s, v);
    let rgb: Srgb = Srgb::from_color(hsv);
    Color::rgb(rgb.red, rgb.green, rgb.blue)
}

// ============================================================================
// Harmony Rules
// ============================================================================

/// A hue-offset rule producing a related set of hues from one base hue.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Harmony {
    Complementary,
    Triadic,
    Analogous,
    SplitComplementary,
    Tetradic,
    Monochromatic,
}

impl Harmony {
    pub const ALL: [Harmony; 6] = [
        Harmony::Complementary,
        Harmony::Triadic,
        Harmony::Analogous,
        Harmony::SplitComplementary,
        Harmony::Tetradic,
        Harmony::Monochromatic,
    ];

    /// Looks up a rule by name; unknown names fall back to [`Harmony::Triadic`].
    pub fn from_name(name: &str) -> Self {
        match name {
            "complementary" => Self::Complementary,
            "triadic" => Self::Triadic,
            "analogous" => Self::Analogous,
            "split_complementary" => Self::SplitComplementary,
            "tetradic" => Self::Tetradic,
            "monochromatic" => Self::Monochromatic,
            _ => Self::Triadic,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Self::Complementary => "complementary",
            Self::Triadic => "triadic",
            Self::Analogous => "analogous",
            Self::SplitComplementary => "split_complementary",
            Self::Tetradic => "tetradic",
            Self::Monochromatic => "monochromatic",
        }
    }

    /// Offsets added to the base hue to obtain the additional hues.
    ///
    /// Monochromatic repeats the base hue once; the perturbation applied by
    /// [`generate_harmonious`] then makes it a lighter or darker sibling.
    pub fn offsets(self) -> &'static [f32] {
        match self {
            Self::Complementary => &[0.5],
            Self::Triadic => &[1.0 / 3.0, 2.0 / 3.0],
            Self::Analogous => &[1.0 / 12.0, -1.0 / 12.0],
            Self::SplitComplementary => &[5.0 / 12.0, 7.0 / 12.0],
            Self::Tetradic => &[0.25, 0.5, 0.75],
            Self::Monochromatic => &[0.0],
        }
    }

    /// Returns the base hue followed by every offset hue, wrapped into `[0, 1)`.
    pub fn hues(self, base_hue: f32) -> Vec<f32> {
        std::iter::once(base_hue.rem_euclid(1.0))
            .chain(self.offsets().iter().map(|o| (base_hue + o).rem_euclid(1.0)))
            .collect()
    }
}

/// Saturation/value targets for [`generate_harmonious`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HarmonyOptions {
    pub saturation: f32,
    pub value: f32,
}

impl Default for HarmonyOptions {
    fn default() -> Self {
        Self {
            saturation: 0.7,
            value: 0.85,
        }
    }
}

/// Generates a palette following `rule`, base hue first.
///
/// When `base_hue` is `None` it is drawn from `rng`. Each hue's saturation
/// and value are perturbed independently by up to ±0.1 before conversion.
pub fn generate_harmonious<R: Rng + ?Sized>(
    base_hue: Option<f32>,
    rule: Harmony,
    options: HarmonyOptions,
    rng: &mut R,
) -> Vec<Color> {
    let base_hue = base_hue.unwrap_or_else(|| uniform(rng, 0.0, 1.0));

    rule.hues(base_hue)
        .into_iter()
        .map(|h| {
            let s = options.saturation + uniform(rng, -0.1, 0.1);
            let v = options.value + uniform(rng, -0.1, 0.1);
            hsv_to_rgb(h, s.clamp(0.0, 1.0), v.clamp(0.0, 1.0))
        })
        .collect()
}

// ============================================================================
// Preset Palettes
// ============================================================================

/// A fixed, named four-color palette.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Preset {
    Sunset,
    Ocean,
    Forest,
    Neon,
    Pastel,
    Corporate,
    Retro,
    DarkElegance,
}

impl Preset {
    pub const ALL: [Preset; 8] = [
        Preset::Sunset,
        Preset::Ocean,
        Preset::Forest,
        Preset::Neon,
        Preset::Pastel,
        Preset::Corporate,
        Preset::Retro,
        Preset::DarkElegance,
    ];

    /// Looks up a preset by name; unknown names fall back to [`Preset::Corporate`].
    pub fn from_name(name: &str) -> Self {
        match name {
            "sunset" => Self::Sunset,
            "ocean" => Self::Ocean,
            "forest" => Self::Forest,
            "neon" => Self::Neon,
            "pastel" => Self::Pastel,
            "corporate" => Self::Corporate,
            "retro" => Self::Retro,
            "dark_elegance" => Self::DarkElegance,
            _ => Self::Corporate,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Self::Sunset => "sunset",
            Self::Ocean => "ocean",
            Self::Forest => "forest",
            Self::Neon => "neon",
            Self::Pastel => "pastel",
            Self::Corporate => "corporate",
            Self::Retro => "retro",
            Self::DarkElegance => "dark_elegance",
        }
    }

    pub fn colors(self) -> Vec<Color> {
        let table: [(f32, f32, f32); 4] = match self {
            Self::Sunset => [(0.98, 0.4, 0.2), (0.95, 0.6, 0.1), (0.85, 0.2, 0.3), (0.4, 0.1, 0.3)],
            Self::Ocean => [(0.0, 0.3, 0.6), (0.1, 0.5, 0.8), (0.2, 0.7, 0.9), (0.0, 0.2, 0.4)],
            Self::Forest => [(0.1, 0.4, 0.1), (0.2, 0.6, 0.2), (0.4, 0.7, 0.3), (0.05, 0.3, 0.05)],
            Self::Neon => [(1.0, 0.0, 0.5), (0.0, 1.0, 0.8), (0.5, 0.0, 1.0), (1.0, 1.0, 0.0)],
            Self::Pastel => [(0.9, 0.7, 0.7), (0.7, 0.9, 0.7), (0.7, 0.7, 0.9), (0.9, 0.9, 0.7)],
            Self::Corporate => [(0.1, 0.2, 0.5), (0.2, 0.4, 0.7), (0.8, 0.8, 0.85), (0.95, 0.95, 0.95)],
            Self::Retro => [(0.9, 0.5, 0.2), (0.7, 0.3, 0.3), (0.3, 0.5, 0.5), (0.9, 0.8, 0.6)],
            Self::DarkElegance => [(0.1, 0.1, 0.15), (0.8, 0.7, 0.4), (0.3, 0.25, 0.3), (0.6, 0.5, 0.3)],
        };
        table.iter().map(|&(r, g, b)| Color::rgb(r, g, b)).collect()
    }
}

/// Returns the palette for `name`, or the corporate palette when unknown.
pub fn get_preset(name: &str) -> Vec<Color> {
    Preset::from_name(name).colors()
}

// ============================================================================
// Gradients
// ============================================================================

/// Interpolates `steps` colors from `from` to `to`, both endpoints included.
pub fn gradient_colors(from: Color, to: Color, steps: usize) -> Vec<Color> {
    match steps {
        0 => Vec::new(),
        1 => vec![from],
        _ => (0..steps)
            .map(|i| from.lerp(to, i as f32 / (steps - 1) as f32))
            .collect(),
    }
}

// ============================================================================
// Tests
// ============================================================================
