//! Visual effects built from stacked translucent primitives.
//!
//! Gradients are approximated by drawing many bands or discs of
//! interpolated color, largest or first-most first, so later primitives sit
//! on top.

use std::f32::consts::{FRAC_PI_2, TAU};

use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::canvas::{Canvas, Point, Style, pt};
use crate::color::Color;
use crate::geometry::shape::polar;
use crate::random::{choose, uniform};

pub const GRADIENT_CIRCLE_STEPS: usize = 30;
pub const GRADIENT_BACKGROUND_STEPS: usize = 50;
pub const RADIAL_GRADIENT_STEPS: usize = 40;
pub const GLOW_STEPS: usize = 15;

// ============================================================================
// Gradients
// ============================================================================

/// Concentric discs fading from `outer` at the rim to `inner` at the center.
pub fn gradient_circle(
    canvas: &mut Canvas,
    center: Point,
    max_radius: f32,
    outer: Color,
    inner: Color,
    steps: usize,
) {
    for (radius, color) in falloff(max_radius, outer, inner, steps) {
        canvas.circle(center, radius, &Style::fill(color));
    }
}

/// Full-canvas radial gradient; same band layout as [`gradient_circle`].
pub fn radial_gradient(
    canvas: &mut Canvas,
    center: Point,
    max_radius: f32,
    outer: Color,
    inner: Color,
    steps: usize,
) {
    gradient_circle(canvas, center, max_radius, outer, inner, steps);
}

/// `(radius, color)` for `i = steps..=1`, outermost first.
fn falloff(max_radius: f32, outer: Color, inner: Color, steps: usize) -> impl Iterator<Item = (f32, Color)> {
    (1..=steps).rev().map(move |i| {
        let t = i as f32 / steps as f32;
        (max_radius * t, outer.lerp(inner, 1.0 - t))
    })
}

/// Axis of a [`gradient_background`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum GradientDirection {
    #[default]
    Vertical,
    Horizontal,
    Diagonal,
}

impl GradientDirection {
    pub const ALL: [GradientDirection; 3] = [
        GradientDirection::Vertical,
        GradientDirection::Horizontal,
        GradientDirection::Diagonal,
    ];

    /// Unknown names fall back to [`GradientDirection::Vertical`].
    pub fn from_name(name: &str) -> Self {
        match name {
            "horizontal" => Self::Horizontal,
            "diagonal" => Self::Diagonal,
            _ => Self::Vertical,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Self::Vertical => "vertical",
            Self::Horizontal => "horizontal",
            Self::Diagonal => "diagonal",
        }
    }
}

impl From<String> for GradientDirection {
    fn from(name: String) -> Self {
        Self::from_name(&name)
    }
}

impl From<GradientDirection> for String {
    fn from(direction: GradientDirection) -> Self {
        direction.name().to_string()
    }
}

/// Covers the canvas with `steps` bands going from `from` to `to`.
///
/// Bands overlap by one pixel so no seams show between them. Diagonal bands
/// run from the top-left to the bottom-right corner.
pub fn gradient_background(
    canvas: &mut Canvas,
    from: Color,
    to: Color,
    direction: GradientDirection,
    steps: usize,
) {
    let (w, h) = canvas.size();
    let diagonal = w.hypot(h);
    // unit vector along the sweep and the band rotation for the diagonal case
    let (ux, uy) = (w / diagonal, h / diagonal);
    let band_angle = h.atan2(w) + FRAC_PI_2;

    for i in 0..steps {
        let t = i as f32 / steps as f32;
        let style = Style::fill(from.lerp(to, t));
        match direction {
            GradientDirection::Vertical => {
                let band = h / steps as f32 + 1.0;
                let y = h * t;
                canvas.rectangle(pt(w / 2.0, y + band / 2.0), w + 2.0, band, 0.0, &style);
            }
            GradientDirection::Horizontal => {
                let band = w / steps as f32 + 1.0;
                let x = w * t;
                canvas.rectangle(pt(x + band / 2.0, h / 2.0), band, h + 2.0, 0.0, &style);
            }
            GradientDirection::Diagonal => {
                let band = diagonal / steps as f32 + 1.0;
                let along = diagonal * t + band / 2.0;
                let center = pt(ux * along, uy * along);
                canvas.rectangle(center, diagonal * 2.0, band, band_angle, &style);
            }
        }
    }
}

// ============================================================================
// Glow / particles / flare
// ============================================================================

/// Soft halo: discs growing past `radius` by up to `3·intensity` pixels while
/// fading out.
pub fn glow(canvas: &mut Canvas, center: Point, radius: f32, color: Color, intensity: f32, steps: usize) {
    for i in (1..=steps).rev() {
        let t = i as f32 / steps as f32;
        let r = radius + intensity * (1.0 - t) * 3.0;
        canvas.circle(center, r, &Style::fill(color.with_alpha(0.3 * t)));
    }
}

/// Scatters `count` small translucent dots around `center`.
///
/// Each particle draws, in order: angle, distance in `[10, max_radius]`,
/// radius in `[1, 4]`, a palette color and an alpha in `[0.3, 1]`.
pub fn particle_burst<R: Rng + ?Sized>(
    canvas: &mut Canvas,
    center: Point,
    count: usize,
    max_radius: f32,
    colors: &[Color],
    rng: &mut R,
) {
    for _ in 0..count {
        let angle = uniform(rng, 0.0, TAU);
        let distance = uniform(rng, 10.0, max_radius);
        let radius = uniform(rng, 1.0, 4.0);
        let color = choose(rng, colors).copied().unwrap_or(Color::WHITE);
        let alpha = uniform(rng, 0.3, 1.0);
        canvas.circle(polar(center, distance, angle), radius, &Style::fill(color.with_alpha(alpha)));
    }
}

/// Five stacked translucent discs plus a twelve-spoke starburst.
pub fn lens_flare(canvas: &mut Canvas, center: Point, size: f32, color: Color) {
    for i in (1..=5).rev() {
        let i = i as f32;
        let style = Style::fill(color.with_alpha(0.1 * i / 5.0));
        canvas.circle(center, size * i / 3.0, &style);
    }
    let spoke = color.with_alpha(0.15);
    for step in 0..12 {
        let tip = polar(center, size * 1.5, (step as f32 * 30.0).to_radians());
        canvas.line(center, tip, spoke, 1.0);
    }
}

/// Soft drop shadow for an arbitrary drawing.
///
/// Calls `draw` `blur_steps` times with a growing offset and a shadow color
/// whose alpha rises from zero as the spread shrinks.
pub fn shadow<F>(canvas: &mut Canvas, offset: (f32, f32), blur_steps: usize, shadow_color: Color, mut draw: F)
where
    F: FnMut(&mut Canvas, (f32, f32), Color),
{
    for i in (1..=blur_steps).rev() {
        let alpha = 0.1 * (blur_steps - i) as f32 / blur_steps as f32;
        let spread = 0.5 * i as f32;
        draw(
            canvas,
            (offset.0 + spread, offset.1 + spread),
            shadow_color.with_alpha(alpha),
        );
    }
}

// ============================================================================
// Effect
// ============================================================================

/// A named effect toggled from a config's `effects` list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Effect {
    GradientBg,
    RadialGradient,
    Glow,
    Particles,
    LensFlare,
    Shadow,
    #[default]
    None,
}

impl Effect {
    pub const ALL: [Effect; 7] = [
        Effect::GradientBg,
        Effect::RadialGradient,
        Effect::Glow,
        Effect::Particles,
        Effect::LensFlare,
        Effect::Shadow,
        Effect::None,
    ];

    /// Unknown names fall back to [`Effect::None`].
    pub fn from_name(name: &str) -> Self {
        match name {
            "gradient_bg" => Self::GradientBg,
            "radial_gradient" => Self::RadialGradient,
            "glow" => Self::Glow,
            "particles" => Self::Particles,
            "lens_flare" => Self::LensFlare,
            "shadow" => Self::Shadow,
            _ => Self::None,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Self::GradientBg => "gradient_bg",
            Self::RadialGradient => "radial_gradient",
            Self::Glow => "glow",
            Self::Particles => "particles",
            Self::LensFlare => "lens_flare",
            Self::Shadow => "shadow",
            Self::None => "none",
        }
    }
}

impl From<String> for Effect {
    fn from(name: String) -> Self {
        Self::from_name(&name)
    }
}

impl From<Effect> for String {
    fn from(effect: Effect) -> Self {
        effect.name().to_string()
    }
}
