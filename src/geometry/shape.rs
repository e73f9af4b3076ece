//! Parametric shape factory.
//!
//! Every function returns absolute canvas coordinates around `center`.
//! Inputs are not validated; negative radii or zero sides produce degenerate
//! shapes that the canvas silently skips.

use std::f32::consts::{FRAC_PI_2, PI, TAU};

use crate::canvas::{Circle, Point, Shape, Style, pt};
use crate::color::Color;

/// Regular polygon with vertex `i` at angle `2πi/sides + rotation`.
pub fn polygon(center: Point, sides: usize, radius: f32, rotation: f32) -> Shape {
    let points = (0..sides)
        .map(|i| {
            let angle = TAU * i as f32 / sides as f32 + rotation;
            polar(center, radius, angle)
        })
        .collect();
    Shape::closed(points)
}

/// Star with `points` tips, alternating outer and inner radii.
///
/// The first tip points straight up when `rotation` is zero.
pub fn star(center: Point, points: usize, outer: f32, inner: f32, rotation: f32) -> Shape {
    let vertices = (0..points * 2)
        .map(|i| {
            let angle = PI * i as f32 / points as f32 + rotation - FRAC_PI_2;
            let r = if i % 2 == 0 { outer } else { inner };
            polar(center, r, angle)
        })
        .collect();
    Shape::closed(vertices)
}

/// Ring (donut) as circles: an optional filled outer disc, then outer and
/// inner stroke circles when a stroke is given.
pub fn ring(
    center: Point,
    outer: f32,
    inner: f32,
    fill: Option<Color>,
    stroke: Option<(Color, f32)>,
) -> Vec<Circle> {
    let mut circles = Vec::with_capacity(3);
    if let Some(fill) = fill {
        circles.push(Circle {
            center,
            radius: outer,
            style: Style::fill(fill),
        });
    }
    if let Some((color, width)) = stroke {
        for radius in [outer, inner] {
            circles.push(Circle {
                center,
                radius,
                style: Style::stroke(color, width),
            });
        }
    }
    circles
}

/// Archimedean spiral sampled `100·turns` times; radius grows linearly from
/// zero towards `max_radius`.
///
/// Returns `None` when fewer than two samples would be produced.
pub fn spiral(center: Point, max_radius: f32, turns: f32) -> Option<Shape> {
    let steps = (turns * 100.0).max(0.0) as usize;
    if steps < 2 {
        return None;
    }
    let points = (0..steps)
        .map(|i| {
            let t = i as f32 / steps as f32;
            polar(center, max_radius * t, turns * TAU * t)
        })
        .collect();
    Some(Shape::open(points))
}

/// Diamond whose width is 60% of its height.
pub fn diamond(center: Point, size: f32) -> Shape {
    offsets(
        center,
        &[(0.0, -size), (size * 0.6, 0.0), (0.0, size), (-size * 0.6, 0.0)],
    )
}

/// Plus sign with arms reaching `size` from the center.
pub fn cross(center: Point, size: f32, thickness: f32) -> Shape {
    let half = thickness / 2.0;
    offsets(
        center,
        &[
            (-half, -size),
            (half, -size),
            (half, -half),
            (size, -half),
            (size, half),
            (half, half),
            (half, size),
            (-half, size),
            (-half, half),
            (-size, half),
            (-size, -half),
            (-half, -half),
        ],
    )
}

/// Direction an [`arrow`] points in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ArrowDirection {
    #[default]
    Right,
    Up,
}

impl ArrowDirection {
    /// Unknown names fall back to [`ArrowDirection::Right`].
    pub fn from_name(name: &str) -> Self {
        match name {
            "up" => Self::Up,
            _ => Self::Right,
        }
    }
}

/// Block arrow with a shaft and a triangular head.
pub fn arrow(center: Point, size: f32, direction: ArrowDirection) -> Shape {
    let s = size;
    match direction {
        ArrowDirection::Right => offsets(
            center,
            &[
                (-s, -s * 0.3),
                (s * 0.3, -s * 0.3),
                (s * 0.3, -s * 0.6),
                (s, 0.0),
                (s * 0.3, s * 0.6),
                (s * 0.3, s * 0.3),
                (-s, s * 0.3),
            ],
        ),
        ArrowDirection::Up => offsets(
            center,
            &[
                (-s * 0.3, s),
                (-s * 0.3, -s * 0.3),
                (-s * 0.6, -s * 0.3),
                (0.0, -s),
                (s * 0.6, -s * 0.3),
                (s * 0.3, -s * 0.3),
                (s * 0.3, s),
            ],
        ),
    }
}

/// Axis-aligned rectangle. The corner radius is accepted for API parity but
/// corners are drawn square.
pub fn rounded_rectangle(center: Point, width: f32, height: f32, _corner_radius: f32) -> Shape {
    let (hw, hh) = (width / 2.0, height / 2.0);
    offsets(center, &[(-hw, -hh), (hw, -hh), (hw, hh), (-hw, hh)])
}

/// Heraldic shield outline: pointed top, straight sides, pointed bottom.
pub fn shield(center: Point, size: f32) -> Shape {
    offsets(
        center,
        &[
            (0.0, -size),
            (size * 0.8, -size * 0.5),
            (size * 0.8, size * 0.3),
            (0.0, size),
            (-size * 0.8, size * 0.3),
            (-size * 0.8, -size * 0.5),
        ],
    )
}

/// Point at `radius` and `angle` (radians) from `center`.
pub fn polar(center: Point, radius: f32, angle: f32) -> Point {
    pt(center.x + radius * angle.cos(), center.y + radius * angle.sin())
}

fn offsets(center: Point, table: &[(f32, f32)]) -> Shape {
    Shape::closed(
        table
            .iter()
            .map(|&(dx, dy)| pt(center.x + dx, center.y + dy))
            .collect(),
    )
}
