//! Named logo compositions.
//!
//! Every template is centered on the canvas and sized from
//! `m = min(width, height)`, so the same config renders proportionally at
//! any resolution. Colors are read from fixed palette slots:
//!
//! | slot | role      | fallback             |
//! |------|-----------|----------------------|
//! | 0    | primary   | `(0.2, 0.4, 0.8)`    |
//! | 1    | secondary | white                |
//! | 2    | accent    | white                |

use std::f32::consts::{FRAC_PI_2, TAU};

use serde::{Deserialize, Serialize};

use crate::canvas::{Canvas, Style, TextRun, pt};
use crate::color::Color;
use crate::geometry::shape::{polar, polygon, shield, star};

const PRIMARY_FALLBACK: Color = Color {
    r: 0.2,
    g: 0.4,
    b: 0.8,
    a: 1.0,
};

/// One of the built-in compositions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Template {
    #[default]
    MinimalCircle,
    ShieldBadge,
    GeometricAbstract,
    Monogram,
    TechHexagon,
    CircularBadge,
}

impl Template {
    pub const ALL: [Template; 6] = [
        Template::MinimalCircle,
        Template::ShieldBadge,
        Template::GeometricAbstract,
        Template::Monogram,
        Template::TechHexagon,
        Template::CircularBadge,
    ];

    /// Unknown names fall back to [`Template::MinimalCircle`].
    pub fn from_name(name: &str) -> Self {
        match name {
            "shield_badge" => Self::ShieldBadge,
            "geometric_abstract" => Self::GeometricAbstract,
            "monogram" => Self::Monogram,
            "tech_hexagon" => Self::TechHexagon,
            "circular_badge" => Self::CircularBadge,
            _ => Self::MinimalCircle,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Self::MinimalCircle => "minimal_circle",
            Self::ShieldBadge => "shield_badge",
            Self::GeometricAbstract => "geometric_abstract",
            Self::Monogram => "monogram",
            Self::TechHexagon => "tech_hexagon",
            Self::CircularBadge => "circular_badge",
        }
    }

    /// Paints this template onto `canvas`.
    pub fn draw(self, canvas: &mut Canvas, colors: &[Color], text: &str, font_family: &str) {
        let layout = Layout {
            colors,
            text,
            font_family,
        };
        match self {
            Self::MinimalCircle => layout.minimal_circle(canvas),
            Self::ShieldBadge => layout.shield_badge(canvas),
            Self::GeometricAbstract => layout.geometric_abstract(canvas),
            Self::Monogram => layout.monogram(canvas),
            Self::TechHexagon => layout.tech_hexagon(canvas),
            Self::CircularBadge => layout.circular_badge(canvas),
        }
    }
}

impl From<String> for Template {
    fn from(name: String) -> Self {
        Self::from_name(&name)
    }
}

impl From<Template> for String {
    fn from(template: Template) -> Self {
        template.name().to_string()
    }
}

// ============================================================================
// Layouts
// ============================================================================

struct Layout<'a> {
    colors: &'a [Color],
    text: &'a str,
    font_family: &'a str,
}

impl Layout<'_> {
    fn slot(&self, index: usize, fallback: Color) -> Color {
        self.colors.get(index).copied().unwrap_or(fallback)
    }

    fn primary(&self) -> Color {
        self.slot(0, PRIMARY_FALLBACK)
    }

    fn secondary(&self) -> Color {
        self.slot(1, Color::WHITE)
    }

    fn accent(&self) -> Color {
        self.slot(2, Color::WHITE)
    }

    fn label(&self, canvas: &mut Canvas, text: &str, y: f32, size: f32, fill: Color) {
        let run = TextRun::new(text, pt(canvas.center().x, y), size, self.font_family, fill).bold();
        canvas.text(&run);
    }

    fn minimal_circle(&self, canvas: &mut Canvas) {
        let c = canvas.center();
        let radius = canvas.min_side() * 0.3;
        canvas.circle(c, radius, &Style::fill(self.primary()));
        canvas.circle(c, radius * 0.7, &Style::fill(self.secondary()));
        self.label(canvas, self.text, c.y, radius * 0.5, self.accent());
    }

    fn shield_badge(&self, canvas: &mut Canvas) {
        let c = canvas.center();
        let size = canvas.min_side() * 0.35;
        let outline = shield(c, size).styled(Style::fill(self.primary()).with_stroke(self.secondary(), 3.0));
        canvas.draw_shape(&outline);
        self.label(canvas, self.text, c.y, size * 0.35, self.accent());
    }

    fn geometric_abstract(&self, canvas: &mut Canvas) {
        let c = canvas.center();
        let size = canvas.min_side() * 0.25;
        let fallback = [self.primary()];
        let palette = if self.colors.is_empty() {
            &fallback[..]
        } else {
            self.colors
        };
        for i in 0..3 {
            let at = polar(c, size * 0.3, i as f32 * TAU / 3.0);
            let color = palette[i % palette.len()].with_alpha(0.7);
            canvas.circle(at, size * 0.5, &Style::fill(color));
        }
        if !self.text.is_empty() {
            self.label(canvas, self.text, c.y + size * 0.9, size * 0.4, self.primary());
        }
    }

    fn monogram(&self, canvas: &mut Canvas) {
        let c = canvas.center();
        let size = canvas.min_side() * 0.35;
        let diamond = polygon(c, 4, size, -FRAC_PI_2);
        canvas.draw_shape(&diamond.clone().filled(self.primary()));
        canvas.draw_shape(&diamond.stroked(self.secondary(), 2.0));
        let initials: String = self.text.chars().take(2).collect();
        self.label(canvas, &initials, c.y, size * 0.7, self.accent());
    }

    fn tech_hexagon(&self, canvas: &mut Canvas) {
        let c = canvas.center();
        let size = canvas.min_side() * 0.32;
        let rotation = (-30f32).to_radians();
        let outer = polygon(c, 6, size, rotation);
        let inner = polygon(c, 6, size * 0.7, rotation);
        let secondary = self.secondary();

        canvas.draw_shape(&outer.clone().filled(self.primary()));
        canvas.draw_shape(&inner.clone().stroked(secondary, 2.0));
        for (from, to) in inner.points.iter().zip(&outer.points).take(6) {
            canvas.line(*from, *to, secondary, 1.0);
        }
        self.label(canvas, self.text, c.y, size * 0.35, self.accent());
    }

    fn circular_badge(&self, canvas: &mut Canvas) {
        let c = canvas.center();
        let radius = canvas.min_side() * 0.35;
        let accent = self.accent();

        canvas.circle(c, radius, &Style::fill(self.primary()));
        canvas.circle(c, radius * 0.85, &Style::stroke(self.secondary(), 2.0));
        canvas.circle(c, radius * 0.75, &Style::fill(self.slot(1, Color::gray(0.2))));
        for i in 0..12 {
            let at = polar(c, radius * 0.8, (30.0 * i as f32).to_radians());
            canvas.circle(at, 3.0, &Style::fill(accent));
        }
        canvas.draw_shape(&star(c, 5, radius * 0.3, radius * 0.15, 0.0).filled(accent));
        self.label(canvas, self.text, c.y + radius * 0.55, radius * 0.2, self.primary());
    }
}
