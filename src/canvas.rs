//! Raster drawing surface.
//!
//! A [`Canvas`] wraps a tiny-skia pixmap filled with a background color and
//! exposes the small set of primitives the rest of the crate draws with:
//! polylines ([`Shape`]), circles, rotated rectangles, line segments and text
//! runs. Text is rasterized through resvg by rendering a one-element SVG
//! document directly onto the pixmap.

use std::path::Path;
use std::sync::{Arc, OnceLock};

use image::{Rgba, RgbaImage};
use resvg::tiny_skia::{self, FillRule, Paint, PathBuilder, Pixmap, Rect, Stroke, Transform};
use resvg::usvg::{self, Options, Tree};

use crate::color::Color;
use crate::error::{LogoError, Result};

/// A 2D point in canvas pixel coordinates.
pub type Point = tiny_skia::Point;

/// Shorthand for [`Point::from_xy`].
pub fn pt(x: f32, y: f32) -> Point {
    Point::from_xy(x, y)
}

// ============================================================================
// Style
// ============================================================================

/// Fill and stroke settings for a primitive.
///
/// A primitive with neither fill nor stroke draws nothing. A stroke with a
/// non-positive width is skipped.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Style {
    pub fill: Option<Color>,
    pub stroke: Option<Color>,
    pub stroke_width: f32,
}

impl Style {
    /// A fill-only style.
    pub fn fill(color: Color) -> Self {
        Self {
            fill: Some(color),
            ..Self::default()
        }
    }

    /// A stroke-only style.
    pub fn stroke(color: Color, width: f32) -> Self {
        Self {
            stroke: Some(color),
            stroke_width: width,
            ..Self::default()
        }
    }

    /// Adds a stroke to this style.
    pub fn with_stroke(mut self, color: Color, width: f32) -> Self {
        self.stroke = Some(color);
        self.stroke_width = width;
        self
    }
}

// ============================================================================
// Shape / Circle / TextRun
// ============================================================================

/// An ordered point sequence with a style.
///
/// Closed shapes repeat their first point at the end of `points`.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Shape {
    pub points: Vec<Point>,
    pub style: Style,
    pub closed: bool,
}

impl Shape {
    /// Creates a closed shape, appending the first point again.
    pub fn closed(mut points: Vec<Point>) -> Self {
        if let Some(&first) = points.first() {
            points.push(first);
        }
        Self {
            points,
            style: Style::default(),
            closed: true,
        }
    }

    /// Creates an open polyline.
    pub fn open(points: Vec<Point>) -> Self {
        Self {
            points,
            style: Style::default(),
            closed: false,
        }
    }

    /// Sets the fill color.
    pub fn filled(mut self, color: Color) -> Self {
        self.style.fill = Some(color);
        self
    }

    /// Sets the stroke color and width.
    pub fn stroked(mut self, color: Color, width: f32) -> Self {
        self.style.stroke = Some(color);
        self.style.stroke_width = width;
        self
    }

    /// Replaces the whole style.
    pub fn styled(mut self, style: Style) -> Self {
        self.style = style;
        self
    }

    /// Returns a copy translated by `(dx, dy)`.
    pub fn translated(&self, dx: f32, dy: f32) -> Self {
        Self {
            points: self.points.iter().map(|p| pt(p.x + dx, p.y + dy)).collect(),
            style: self.style,
            closed: self.closed,
        }
    }
}

/// A circle primitive.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Circle {
    pub center: Point,
    pub radius: f32,
    pub style: Style,
}

/// A single run of text centered on `anchor`.
#[derive(Debug, Clone, PartialEq)]
pub struct TextRun {
    pub text: String,
    pub anchor: Point,
    pub font_size: f32,
    pub font_family: String,
    pub fill: Color,
    /// Rotation around the anchor, in radians.
    pub angle: f32,
    pub bold: bool,
}

impl TextRun {
    /// Creates an upright, regular-weight run.
    pub fn new(
        text: impl Into<String>,
        anchor: Point,
        font_size: f32,
        font_family: impl Into<String>,
        fill: Color,
    ) -> Self {
        Self {
            text: text.into(),
            anchor,
            font_size,
            font_family: font_family.into(),
            fill,
            angle: 0.0,
            bold: false,
        }
    }

    pub fn bold(mut self) -> Self {
        self.bold = true;
        self
    }

    pub fn rotated(mut self, angle: f32) -> Self {
        self.angle = angle;
        self
    }

    /// Returns a copy moved to `anchor` and painted with `fill`.
    pub fn stamped(&self, anchor: Point, fill: Color) -> Self {
        Self {
            anchor,
            fill,
            ..self.clone()
        }
    }
}

// ============================================================================
// Canvas
// ============================================================================

/// A mutable raster target of fixed size.
///
/// Owned by a single render call; never shared between concurrent renders.
pub struct Canvas {
    pixmap: Pixmap,
    background: Color,
}

impl Canvas {
    /// Allocates a canvas filled with `background`.
    pub fn new(width: u32, height: u32, background: Color) -> Result<Self> {
        let mut pixmap =
            Pixmap::new(width, height).ok_or(LogoError::InvalidCanvasSize { width, height })?;
        pixmap.fill(to_skia(background));
        Ok(Self { pixmap, background })
    }

    pub fn width(&self) -> u32 {
        self.pixmap.width()
    }

    pub fn height(&self) -> u32 {
        self.pixmap.height()
    }

    /// Width and height as floats, for geometry.
    pub fn size(&self) -> (f32, f32) {
        (self.width() as f32, self.height() as f32)
    }

    /// `min(width, height)`, the reference length for scale-free layouts.
    pub fn min_side(&self) -> f32 {
        self.width().min(self.height()) as f32
    }

    /// Center of the canvas.
    pub fn center(&self) -> Point {
        let (w, h) = self.size();
        pt(w / 2.0, h / 2.0)
    }

    pub fn background(&self) -> Color {
        self.background
    }

    /// Raw premultiplied RGBA bytes.
    pub fn data(&self) -> &[u8] {
        self.pixmap.data()
    }

    /// Draws a polyline or polygon.
    pub fn draw_shape(&mut self, shape: &Shape) {
        let Some((first, rest)) = shape.points.split_first() else {
            return;
        };
        let mut pb = PathBuilder::new();
        pb.move_to(first.x, first.y);
        for p in rest {
            pb.line_to(p.x, p.y);
        }
        if shape.closed {
            pb.close();
        }
        if let Some(path) = pb.finish() {
            self.paint_path(&path, &shape.style, Transform::identity());
        }
    }

    /// Draws a circle.
    pub fn draw_circle(&mut self, circle: &Circle) {
        self.circle(circle.center, circle.radius, &circle.style);
    }

    /// Draws a circle; non-positive radii are skipped.
    pub fn circle(&mut self, center: Point, radius: f32, style: &Style) {
        if let Some(path) = PathBuilder::from_circle(center.x, center.y, radius) {
            self.paint_path(&path, style, Transform::identity());
        }
    }

    /// Draws a `width`×`height` rectangle centered on `center`, rotated by
    /// `angle` radians around its center.
    pub fn rectangle(&mut self, center: Point, width: f32, height: f32, angle: f32, style: &Style) {
        let Some(rect) =
            Rect::from_xywh(center.x - width / 2.0, center.y - height / 2.0, width, height)
        else {
            return;
        };
        let path = PathBuilder::from_rect(rect);
        let transform = Transform::from_rotate_at(angle.to_degrees(), center.x, center.y);
        self.paint_path(&path, style, transform);
    }

    /// Strokes a straight segment.
    pub fn line(&mut self, from: Point, to: Point, color: Color, width: f32) {
        self.draw_shape(&Shape::open(vec![from, to]).stroked(color, width));
    }

    /// Draws a text run centered on its anchor.
    ///
    /// An uninstalled family falls back to a generic family and then to any
    /// loaded face. Runs that still cannot be shaped (no fonts at all) leave
    /// the canvas untouched.
    pub fn text(&mut self, run: &TextRun) {
        if run.text.is_empty() || run.font_size <= 0.0 {
            return;
        }
        let svg = text_svg(run, self.width(), self.height());
        let options = Options {
            fontdb: font_database(),
            font_resolver: font_resolver(),
            ..Options::default()
        };
        match Tree::from_str(&svg, &options) {
            Ok(tree) if !tree.root().has_children() => {
                tracing::warn!(text = %run.text, family = %run.font_family, "no font could shape text run");
            }
            Ok(tree) => resvg::render(&tree, Transform::identity(), &mut self.pixmap.as_mut()),
            Err(err) => tracing::warn!(text = %run.text, %err, "skipping text run"),
        }
    }

    /// Converts the canvas into an unpremultiplied RGBA image.
    pub fn to_image(&self) -> RgbaImage {
        pixmap_to_rgba_image(&self.pixmap)
    }

    /// Writes the canvas to `path`; the format follows the file extension.
    pub fn save(&self, path: impl AsRef<Path>) -> Result<()> {
        let path = path.as_ref();
        self.to_image().save(path).map_err(|err| match err {
            image::ImageError::IoError(source) => LogoError::io(path, source),
            other => other.into(),
        })?;
        tracing::info!(path = %path.display(), "saved logo");
        Ok(())
    }

    fn paint_path(&mut self, path: &tiny_skia::Path, style: &Style, transform: Transform) {
        if let Some(fill) = style.fill {
            let paint = paint_for(fill);
            self.pixmap
                .fill_path(path, &paint, FillRule::Winding, transform, None);
        }
        if let Some(stroke) = style.stroke.filter(|_| style.stroke_width > 0.0) {
            let paint = paint_for(stroke);
            let stroke_style = Stroke {
                width: style.stroke_width,
                ..Stroke::default()
            };
            self.pixmap
                .stroke_path(path, &paint, &stroke_style, transform, None);
        }
    }
}

impl std::fmt::Debug for Canvas {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Canvas")
            .field("width", &self.width())
            .field("height", &self.height())
            .field("background", &self.background)
            .finish()
    }
}

// ============================================================================
// Helpers
// ============================================================================

fn to_skia(color: Color) -> tiny_skia::Color {
    tiny_skia::Color::from_rgba(color.r, color.g, color.b, color.a)
        .unwrap_or(tiny_skia::Color::BLACK)
}

fn paint_for(color: Color) -> Paint<'static> {
    let mut paint = Paint::default();
    paint.set_color(to_skia(color));
    paint.anti_alias = true;
    paint
}

/// System font database, loaded once per process.
pub(crate) fn font_database() -> Arc<usvg::fontdb::Database> {
    static FONTS: OnceLock<Arc<usvg::fontdb::Database>> = OnceLock::new();
    FONTS
        .get_or_init(|| {
            let mut db = usvg::fontdb::Database::new();
            db.load_system_fonts();
            tracing::debug!(faces = db.len(), "loaded system fonts");
            Arc::new(db)
        })
        .clone()
}

/// Font selection that never gives up while any face is loaded.
///
/// Tries the requested families, then the generic sans-serif, serif and
/// monospace families, then the first face in the database.
fn font_resolver() -> usvg::FontResolver<'static> {
    use usvg::fontdb;

    usvg::FontResolver {
        select_font: Box::new(|font, db| {
            let mut families: Vec<fontdb::Family<'_>> = font
                .families()
                .iter()
                .map(|family| match family {
                    usvg::FontFamily::Serif => fontdb::Family::Serif,
                    usvg::FontFamily::SansSerif => fontdb::Family::SansSerif,
                    usvg::FontFamily::Cursive => fontdb::Family::Cursive,
                    usvg::FontFamily::Fantasy => fontdb::Family::Fantasy,
                    usvg::FontFamily::Monospace => fontdb::Family::Monospace,
                    usvg::FontFamily::Named(name) => fontdb::Family::Name(name),
                })
                .collect();
            families.extend([fontdb::Family::SansSerif, fontdb::Family::Serif, fontdb::Family::Monospace]);

            let stretch = match font.stretch() {
                usvg::FontStretch::UltraCondensed => fontdb::Stretch::UltraCondensed,
                usvg::FontStretch::ExtraCondensed => fontdb::Stretch::ExtraCondensed,
                usvg::FontStretch::Condensed => fontdb::Stretch::Condensed,
                usvg::FontStretch::SemiCondensed => fontdb::Stretch::SemiCondensed,
                usvg::FontStretch::Normal => fontdb::Stretch::Normal,
                usvg::FontStretch::SemiExpanded => fontdb::Stretch::SemiExpanded,
                usvg::FontStretch::Expanded => fontdb::Stretch::Expanded,
                usvg::FontStretch::ExtraExpanded => fontdb::Stretch::ExtraExpanded,
                usvg::FontStretch::UltraExpanded => fontdb::Stretch::UltraExpanded,
            };
            let style = match font.style() {
                usvg::FontStyle::Normal => fontdb::Style::Normal,
                usvg::FontStyle::Italic => fontdb::Style::Italic,
                usvg::FontStyle::Oblique => fontdb::Style::Oblique,
            };

            let query = fontdb::Query {
                families: &families,
                weight: fontdb::Weight(font.weight()),
                stretch,
                style,
            };
            db.query(&query).or_else(|| db.faces().next().map(|face| face.id))
        }),
        select_fallback: usvg::FontResolver::default_fallback_selector(),
    }
}

/// Builds a canvas-sized SVG document holding a single centered `<text>`.
fn text_svg(run: &TextRun, width: u32, height: u32) -> String {
    let fill = run.fill;
    let hex = format!(
        "#{:02x}{:02x}{:02x}",
        to_byte(fill.r),
        to_byte(fill.g),
        to_byte(fill.b)
    );
    format!(
        concat!(
            r#"<svg xmlns="http://www.w3.org/2000/svg" width="{w}" height="{h}" viewBox="0 0 {w} {h}">"#,
            r#"<text x="{x}" y="{y}" font-family="{family}" font-size="{size}" font-weight="{weight}" "#,
            r#"fill="{fill}" fill-opacity="{alpha}" text-anchor="middle" dominant-baseline="central" "#,
            r#"transform="rotate({deg} {x} {y})">{text}</text></svg>"#
        ),
        w = width,
        h = height,
        x = run.anchor.x,
        y = run.anchor.y,
        family = escape_xml(&run.font_family),
        size = run.font_size,
        weight = if run.bold { "bold" } else { "normal" },
        fill = hex,
        alpha = fill.a,
        deg = run.angle.to_degrees(),
        text = escape_xml(&run.text),
    )
}

fn to_byte(v: f32) -> u8 {
    (v * 255.0).round().clamp(0.0, 255.0) as u8
}

fn escape_xml(input: &str) -> String {
    input
        .replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&apos;")
}

/// Converts a tiny_skia Pixmap to an image::RgbaImage.
fn pixmap_to_rgba_image(pixmap: &Pixmap) -> RgbaImage {
    let mut img = RgbaImage::new(pixmap.width(), pixmap.height());
    for (pixel, src) in img.pixels_mut().zip(pixmap.pixels()) {
        let c = src.demultiply();
        *pixel = Rgba([c.red(), c.green(), c.blue(), c.alpha()]);
    }
    img
}

// ============================================================================
// Tests
// ============================================================================
