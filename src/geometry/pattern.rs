//! Tiling background patterns.
//!
//! Each generator covers the whole canvas plus one spacing unit of margin so
//! that tiles never stop short of the right or bottom edge.

use std::f32::consts::TAU;

use serde::{Deserialize, Serialize};

use super::shape::polygon;
use crate::canvas::{Canvas, Point, Shape, Style, pt};
use crate::color::Color;

/// Circle at every grid intersection.
pub fn dots(canvas: &mut Canvas, color: Color, spacing: f32, radius: f32) {
    let (w, h) = canvas.size();
    let style = Style::fill(color);
    for x in steps(0.0, w + spacing, spacing) {
        for y in steps(0.0, h + spacing, spacing) {
            canvas.circle(pt(x, y), radius, &style);
        }
    }
}

/// Parallel strokes at `angle_degrees`, each twice the canvas' longer side.
pub fn lines(canvas: &mut Canvas, color: Color, spacing: f32, stroke_width: f32, angle_degrees: f32) {
    let (w, h) = canvas.size();
    let rad = angle_degrees.to_radians();
    let length = w.max(h) * 2.0;
    for offset in steps(-length, length, spacing) {
        let from = pt(offset, 0.0);
        let to = pt(offset + length * rad.cos(), length * rad.sin());
        canvas.line(from, to, color, stroke_width);
    }
}

/// Orthogonal full-height and full-width strokes.
pub fn grid(canvas: &mut Canvas, color: Color, spacing: f32, stroke_width: f32) {
    let (w, h) = canvas.size();
    for x in steps(0.0, w + spacing, spacing) {
        canvas.line(pt(x, 0.0), pt(x, h), color, stroke_width);
    }
    for y in steps(0.0, h + spacing, spacing) {
        canvas.line(pt(0.0, y), pt(w, y), color, stroke_width);
    }
}

/// `count` stroked circles with radii `max_radius·i/count`.
pub fn concentric(
    canvas: &mut Canvas,
    center: Point,
    max_radius: f32,
    color: Color,
    count: usize,
    stroke_width: f32,
) {
    let style = Style::stroke(color, stroke_width);
    for i in 1..=count {
        let r = max_radius * i as f32 / count as f32;
        canvas.circle(center, r, &style);
    }
}

/// Hexagon lattice; odd columns are pushed down by half a hex height.
pub fn hexagons(canvas: &mut Canvas, color: Color, size: f32, stroke_width: f32) {
    let (w, h) = canvas.size();
    let hex_height = size * 3f32.sqrt();
    let rows = (h / hex_height) as i32 + 1;
    let cols = (w / (size * 1.5)) as i32 + 1;
    for row in -1..=rows {
        for col in -1..=cols {
            let cx = col as f32 * size * 1.5;
            let cy = row as f32 * hex_height + col.rem_euclid(2) as f32 * hex_height / 2.0;
            let hex = polygon(pt(cx, cy), 6, size, 0.0).stroked(color, stroke_width);
            canvas.draw_shape(&hex);
        }
    }
}

/// One sine polyline per 20 px band, sampled every 5 px.
pub fn waves(canvas: &mut Canvas, color: Color, amplitude: f32, frequency: f32, stroke_width: f32) {
    let (w, h) = canvas.size();
    for y_offset in steps(0.0, h + 40.0, 20.0) {
        let points: Vec<Point> = steps(0.0, w + 5.0, 5.0)
            .map(|x| pt(x, y_offset + amplitude * (frequency * x * TAU).sin()))
            .collect();
        if points.len() > 1 {
            canvas.draw_shape(&Shape::open(points).stroked(color, stroke_width));
        }
    }
}

/// Values `start, start + step, …` strictly below `end`.
fn steps(start: f32, end: f32, step: f32) -> impl Iterator<Item = f32> {
    let count = if step > 0.0 && end > start {
        ((end - start) / step).ceil() as usize
    } else {
        0
    };
    (0..count).map(move |i| start + i as f32 * step)
}

// ============================================================================
// Pattern
// ============================================================================

/// A background texture selectable from a config.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Pattern {
    Dots,
    Lines,
    Grid,
    Concentric,
    Hexagon,
    Wave,
    #[default]
    None,
}

impl Pattern {
    pub const ALL: [Pattern; 7] = [
        Pattern::Dots,
        Pattern::Lines,
        Pattern::Grid,
        Pattern::Concentric,
        Pattern::Hexagon,
        Pattern::Wave,
        Pattern::None,
    ];

    /// Unknown names fall back to [`Pattern::None`].
    pub fn from_name(name: &str) -> Self {
        match name {
            "dots" => Self::Dots,
            "lines" => Self::Lines,
            "grid" => Self::Grid,
            "concentric" => Self::Concentric,
            "hexagon" => Self::Hexagon,
            "wave" => Self::Wave,
            _ => Self::None,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Self::Dots => "dots",
            Self::Lines => "lines",
            Self::Grid => "grid",
            Self::Concentric => "concentric",
            Self::Hexagon => "hexagon",
            Self::Wave => "wave",
            Self::None => "none",
        }
    }

    /// Draws this pattern with the logo pipeline's tile parameters.
    pub fn draw(self, canvas: &mut Canvas, color: Color) {
        match self {
            Self::Dots => dots(canvas, color, 25.0, 2.0),
            Self::Lines => lines(canvas, color, 20.0, 1.0, 45.0),
            Self::Grid => grid(canvas, color, 30.0, 0.5),
            Self::Concentric => {
                let (w, h) = canvas.size();
                let center = canvas.center();
                concentric(canvas, center, w.max(h) * 0.6, color, 10, 1.0);
            }
            Self::Hexagon => hexagons(canvas, color, 25.0, 0.5),
            Self::Wave => waves(canvas, color, 10.0, 0.05, 1.0),
            Self::None => {}
        }
    }
}

impl From<String> for Pattern {
    fn from(name: String) -> Self {
        Self::from_name(&name)
    }
}

impl From<Pattern> for String {
    fn from(pattern: Pattern) -> Self {
        pattern.name().to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn blank(w: u32, h: u32) -> Canvas {
        Canvas::new(w, h, Color::BLACK).unwrap()
    }

    fn lit_pixels(canvas: &Canvas) -> usize {
        canvas
            .to_image()
            .pixels()
            .filter(|p| p.0 != [0, 0, 0, 255])
            .count()
    }

    #[test]
    fn steps_are_half_open() {
        let v: Vec<f32> = steps(0.0, 100.0, 25.0).collect();
        assert_eq!(v, vec![0.0, 25.0, 50.0, 75.0]);
        let v: Vec<f32> = steps(0.0, 101.0, 25.0).collect();
        assert_eq!(v.last(), Some(&100.0));
        assert_eq!(steps(0.0, 10.0, 0.0).count(), 0);
    }

    #[test]
    fn wave_samples_cover_width() {
        // 100 px wide: x = 0, 5, ..., 100
        assert_eq!(steps(0.0, 105.0, 5.0).count(), 21);
        // bands at y = 0, 20, ..., 120 for 100 px height
        assert_eq!(steps(0.0, 140.0, 20.0).count(), 7);
    }

    #[test]
    fn dots_hit_grid_intersections() {
        let mut canvas = blank(60, 60);
        dots(&mut canvas, Color::WHITE, 25.0, 2.0);
        let img = canvas.to_image();
        assert_ne!(img.get_pixel(25, 25).0, [0, 0, 0, 255]);
        assert_eq!(img.get_pixel(12, 12).0, [0, 0, 0, 255]);
    }

    #[test]
    fn every_pattern_but_none_draws() {
        for pattern in Pattern::ALL {
            let mut canvas = blank(80, 80);
            pattern.draw(&mut canvas, Color::WHITE);
            let lit = lit_pixels(&canvas);
            if pattern == Pattern::None {
                assert_eq!(lit, 0);
            } else {
                assert!(lit > 0, "{} drew nothing", pattern.name());
            }
        }
    }

    #[test]
    fn concentric_rings_reach_max_radius() {
        let mut canvas = blank(100, 100);
        concentric(&mut canvas, pt(50.0, 50.0), 40.0, Color::WHITE, 4, 2.0);
        let img = canvas.to_image();
        assert_ne!(img.get_pixel(90, 50).0, [0, 0, 0, 255]);
        assert_ne!(img.get_pixel(60, 50).0, [0, 0, 0, 255]);
        assert_eq!(img.get_pixel(50, 50).0, [0, 0, 0, 255]);
    }

    #[test]
    fn pattern_names_round_trip_and_fallback() {
        for pattern in Pattern::ALL {
            assert_eq!(Pattern::from_name(pattern.name()), pattern);
        }
        assert_eq!(Pattern::from_name("plaid"), Pattern::None);
        let parsed: Pattern = serde_json::from_str("\"zigzag\"").unwrap();
        assert_eq!(parsed, Pattern::None);
        assert_eq!(serde_json::to_string(&Pattern::Hexagon).unwrap(), "\"hexagon\"");
    }
}
