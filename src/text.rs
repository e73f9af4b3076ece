//! Text layout: plain, shadowed, outlined, curved and multi-line runs.
//!
//! Each function lays out one or more [`TextRun`]s and hands them to
//! [`Canvas::text`] in painter's order, so later runs cover earlier ones.

use std::f32::consts::FRAC_PI_2;

use serde::{Deserialize, Serialize};

use crate::canvas::{Canvas, Point, TextRun, pt};
use crate::color::Color;

/// Offset of the drop shadow drawn by [`TextEffect::Shadow`].
pub const DEFAULT_SHADOW_OFFSET: (f32, f32) = (3.0, 3.0);

/// Outline thickness drawn by [`TextEffect::Outline`].
pub const DEFAULT_OUTLINE_WIDTH: u32 = 2;

/// Line pitch of [`render_multiline`], as a multiple of the font size.
pub const DEFAULT_LINE_SPACING: f32 = 1.4;

/// Horizontal advance per character used by curved text, as a fraction of
/// the font size.
const CHAR_ADVANCE: f32 = 0.6;

const COMPASS: [(f32, f32); 8] = [
    (-1.0, -1.0),
    (-1.0, 1.0),
    (1.0, -1.0),
    (1.0, 1.0),
    (-1.0, 0.0),
    (1.0, 0.0),
    (0.0, -1.0),
    (0.0, 1.0),
];

pub fn render_text(canvas: &mut Canvas, run: &TextRun) {
    canvas.text(run);
}

/// Draws a copy of `run` shifted by `offset` in `shadow_color`, then the run.
pub fn render_with_shadow(canvas: &mut Canvas, run: &TextRun, shadow_color: Color, offset: (f32, f32)) {
    for run in shadow_runs(run, shadow_color, offset) {
        canvas.text(&run);
    }
}

/// Stamps the run in `outline_color` at every compass offset up to
/// `outline_width` pixels away, then draws the run on top.
pub fn render_with_outline(canvas: &mut Canvas, run: &TextRun, outline_color: Color, outline_width: u32) {
    for run in outline_runs(run, outline_color, outline_width) {
        canvas.text(&run);
    }
}

/// Places `text` one character at a time along a circle of `radius`.
///
/// The string spans `len·size·0.6/radius` radians centered on `start_angle`;
/// each glyph is rotated to stand tangent to the circle.
#[allow(clippy::too_many_arguments)]
pub fn render_curved(
    canvas: &mut Canvas,
    text: &str,
    center: Point,
    radius: f32,
    start_angle: f32,
    font_size: f32,
    font_family: &str,
    fill: Color,
) {
    for run in curved_runs(text, center, radius, start_angle, font_size, font_family, fill) {
        canvas.text(&run);
    }
}

/// Draws `lines` top to bottom, each centered on `start.x`.
pub fn render_multiline<S: AsRef<str>>(
    canvas: &mut Canvas,
    lines: &[S],
    start: Point,
    font_size: f32,
    font_family: &str,
    fill: Color,
    line_spacing: f32,
) {
    for run in multiline_runs(lines, start, font_size, font_family, fill, line_spacing) {
        canvas.text(&run);
    }
}

fn shadow_runs(run: &TextRun, shadow_color: Color, (dx, dy): (f32, f32)) -> [TextRun; 2] {
    let shadow = run.stamped(pt(run.anchor.x + dx, run.anchor.y + dy), shadow_color);
    [shadow, run.clone()]
}

fn outline_runs(run: &TextRun, outline_color: Color, outline_width: u32) -> Vec<TextRun> {
    let mut runs = Vec::with_capacity(COMPASS.len() * outline_width as usize + 1);
    for (dx, dy) in COMPASS {
        for mult in 1..=outline_width {
            let m = mult as f32;
            let anchor = pt(run.anchor.x + dx * m, run.anchor.y + dy * m);
            runs.push(run.stamped(anchor, outline_color));
        }
    }
    runs.push(run.clone());
    runs
}

fn curved_runs(
    text: &str,
    center: Point,
    radius: f32,
    start_angle: f32,
    font_size: f32,
    font_family: &str,
    fill: Color,
) -> Vec<TextRun> {
    if radius == 0.0 {
        return Vec::new();
    }
    let step = font_size * CHAR_ADVANCE / radius;
    let total = text.chars().count() as f32 * step;
    let first = start_angle - total / 2.0;
    text.chars()
        .enumerate()
        .map(|(i, ch)| {
            let angle = first + i as f32 * step;
            let anchor = pt(center.x + radius * angle.cos(), center.y + radius * angle.sin());
            TextRun::new(ch, anchor, font_size, font_family, fill).rotated(angle + FRAC_PI_2)
        })
        .collect()
}

fn multiline_runs<S: AsRef<str>>(
    lines: &[S],
    start: Point,
    font_size: f32,
    font_family: &str,
    fill: Color,
    line_spacing: f32,
) -> Vec<TextRun> {
    lines
        .iter()
        .enumerate()
        .map(|(i, line)| {
            let y = start.y + i as f32 * font_size * line_spacing;
            TextRun::new(line.as_ref(), pt(start.x, y), font_size, font_family, fill)
        })
        .collect()
}

// ============================================================================
// TextEffect
// ============================================================================

/// Decoration applied to config-driven text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum TextEffect {
    #[default]
    None,
    Shadow,
    Outline,
}

impl TextEffect {
    pub const ALL: [TextEffect; 3] = [TextEffect::None, TextEffect::Shadow, TextEffect::Outline];

    /// Unknown names fall back to [`TextEffect::None`].
    pub fn from_name(name: &str) -> Self {
        match name {
            "shadow" => Self::Shadow,
            "outline" => Self::Outline,
            _ => Self::None,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Self::None => "none",
            Self::Shadow => "shadow",
            Self::Outline => "outline",
        }
    }

    /// Draws `run` with this decoration using black and the default offsets.
    pub fn render(self, canvas: &mut Canvas, run: &TextRun) {
        match self {
            Self::None => render_text(canvas, run),
            Self::Shadow => render_with_shadow(canvas, run, Color::BLACK, DEFAULT_SHADOW_OFFSET),
            Self::Outline => render_with_outline(canvas, run, Color::BLACK, DEFAULT_OUTLINE_WIDTH),
        }
    }
}

impl From<String> for TextEffect {
    fn from(name: String) -> Self {
        Self::from_name(&name)
    }
}

impl From<TextEffect> for String {
    fn from(effect: TextEffect) -> Self {
        effect.name().to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f32 = 1e-4;

    fn run() -> TextRun {
        TextRun::new("HELLO", pt(50.0, 40.0), 20.0, "Arial", Color::WHITE)
    }

    #[test]
    fn shadow_is_drawn_first_and_offset() {
        let [shadow, main] = shadow_runs(&run(), Color::BLACK, (3.0, 3.0));
        assert_eq!(shadow.anchor, pt(53.0, 43.0));
        assert_eq!(shadow.fill, Color::BLACK);
        assert_eq!(main, run());
    }

    #[test]
    fn outline_stamps_every_compass_offset_then_main() {
        let runs = outline_runs(&run(), Color::BLACK, 2);
        assert_eq!(runs.len(), 17);
        assert_eq!(runs.last(), Some(&run()));
        assert!(runs[..16].iter().all(|r| r.fill == Color::BLACK));
        assert!(runs.iter().any(|r| r.anchor == pt(48.0, 38.0)));
        assert!(runs.iter().any(|r| r.anchor == pt(50.0, 42.0)));
        assert_eq!(outline_runs(&run(), Color::BLACK, 0).len(), 1);
    }

    #[test]
    fn curved_text_is_centered_on_start_angle() {
        let runs = curved_runs("ABC", pt(0.0, 0.0), 100.0, 0.0, 10.0, "Arial", Color::WHITE);
        assert_eq!(runs.len(), 3);
        let step = 10.0 * 0.6 / 100.0;
        let first = -1.5 * step;
        for (i, r) in runs.iter().enumerate() {
            let angle = first + i as f32 * step;
            assert!((r.anchor.x - 100.0 * angle.cos()).abs() < EPS);
            assert!((r.anchor.y - 100.0 * angle.sin()).abs() < EPS);
            assert!((r.angle - (angle + FRAC_PI_2)).abs() < EPS);
            assert_eq!(r.text.chars().count(), 1);
        }
        assert!(curved_runs("ABC", pt(0.0, 0.0), 0.0, 0.0, 10.0, "Arial", Color::WHITE).is_empty());
    }

    #[test]
    fn multiline_uses_line_pitch() {
        let runs = multiline_runs(&["one", "two", "three"], pt(10.0, 20.0), 10.0, "Arial", Color::WHITE, 1.4);
        let ys: Vec<f32> = runs.iter().map(|r| r.anchor.y).collect();
        assert!((ys[0] - 20.0).abs() < EPS);
        assert!((ys[1] - 34.0).abs() < EPS);
        assert!((ys[2] - 48.0).abs() < EPS);
        assert!(runs.iter().all(|r| r.anchor.x == 10.0));
    }

    #[test]
    fn text_effect_names() {
        for effect in TextEffect::ALL {
            assert_eq!(TextEffect::from_name(effect.name()), effect);
        }
        assert_eq!(TextEffect::from_name("sparkle"), TextEffect::None);
        let parsed: TextEffect = serde_json::from_str("\"outline\"").unwrap();
        assert_eq!(parsed, TextEffect::Outline);
    }

    #[test]
    fn every_text_effect_draws_pixels() {
        if crate::canvas::font_database().is_empty() {
            return;
        }
        for effect in TextEffect::ALL {
            let mut canvas = Canvas::new(100, 80, Color::BLACK).unwrap();
            let before = canvas.data().to_vec();
            effect.render(&mut canvas, &run());
            assert_ne!(canvas.data(), before.as_slice(), "{} drew nothing", effect.name());
        }
    }

    #[test]
    fn rendering_never_panics_without_fonts() {
        let mut canvas = Canvas::new(64, 32, Color::BLACK).unwrap();
        for effect in TextEffect::ALL {
            effect.render(&mut canvas, &run());
        }
        render_curved(&mut canvas, "RING", pt(32.0, 16.0), 12.0, 0.0, 8.0, "Arial", Color::WHITE);
        render_multiline(&mut canvas, &["a", "b"], pt(32.0, 4.0), 8.0, "Arial", Color::WHITE, DEFAULT_LINE_SPACING);
    }
}
