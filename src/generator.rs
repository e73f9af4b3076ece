//! Logo rendering pipeline.
//!
//! [`LogoGenerator`] turns a [`LogoConfig`] into a painted [`Canvas`] by
//! running a fixed sequence of stages. It also synthesizes random configs
//! and writes batches of PNG files.

use std::f32::consts::{FRAC_PI_2, PI, TAU};
use std::fs;
use std::path::{Path, PathBuf};

use rand::rngs::StdRng;
use rand::{Rng, RngCore, SeedableRng};

use crate::canvas::{Canvas, Style, TextRun, pt};
use crate::color::{Color, Harmony, HarmonyOptions, Preset, generate_harmonious};
use crate::config::LogoConfig;
use crate::effects::{self, Effect, GradientDirection};
use crate::error::{LogoError, Result};
use crate::geometry::Pattern;
use crate::geometry::pattern::hexagons;
use crate::geometry::shape::{diamond, polar, polygon, star};
use crate::layer::Compositor;
use crate::random::{choose, coin, pick, sample, uniform};
use crate::template::Template;
use crate::text::{self, TextEffect};

/// Square sizes written by [`LogoGenerator::generate_size_variants`] when the
/// caller has no preference.
pub const DEFAULT_SIZES: [(u32, u32); 5] = [(64, 64), (128, 128), (256, 256), (512, 512), (1024, 1024)];

/// Font families a random config picks from.
pub const FONT_FAMILIES: [&str; 4] = ["Arial", "Helvetica", "Georgia", "Verdana"];

const LENS_FLARE_COLOR: Color = Color {
    r: 1.0,
    g: 1.0,
    b: 0.8,
    a: 1.0,
};

// ============================================================================
// Logo
// ============================================================================

/// A rendered logo together with the config that produced it.
#[derive(Debug)]
pub struct Logo {
    pub canvas: Canvas,
    pub config: LogoConfig,
}

impl Logo {
    /// Writes the image to `path` as PNG.
    pub fn save(&self, path: impl AsRef<Path>) -> Result<()> {
        self.canvas.save(path)
    }
}

// ============================================================================
// LogoGenerator
// ============================================================================

/// Renders configs at a fixed canvas size.
///
/// The generator holds no state besides its size; every method takes the
/// config and the random source explicitly, so one value can be shared
/// freely and a given `(config, seed)` pair always yields the same pixels.
///
/// # Pipeline
///
/// 1. **Background** - linear (`gradient_bg`) or radial (`radial_gradient`)
///    gradient from the first to the last palette color
/// 2. **Pattern** - faint tiling texture in a darkened primary color
/// 3. **Pre-effects** - `glow` behind the emblem
/// 4. **Template** - the emblem itself
/// 5. **Extra shapes** - small ornaments scattered around the emblem
/// 6. **Subtitle** - optional line of text below the emblem
/// 7. **Post-effects** - `particles` and `lens_flare` on top
///
/// # Example
///
/// ```
/// use logoforge::{LogoConfig, LogoGenerator, Template};
///
/// let generator = LogoGenerator::new(128, 128);
/// let config = LogoConfig::new().with_template(Template::Monogram);
/// let canvas = generator.render_seeded(&config, 42).unwrap();
/// assert_eq!((canvas.width(), canvas.height()), (128, 128));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LogoGenerator {
    pub width: u32,
    pub height: u32,
}

impl Default for LogoGenerator {
    fn default() -> Self {
        Self::new(500, 500)
    }
}

impl LogoGenerator {
    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    /// Runs every pipeline stage for `config` on a fresh canvas.
    #[tracing::instrument(
        skip_all,
        fields(width = self.width, height = self.height, template = config.template.name())
    )]
    pub fn render<R: Rng + ?Sized>(&self, config: &LogoConfig, rng: &mut R) -> Result<Canvas> {
        let mut canvas = Canvas::new(self.width, self.height, config.background_color)?;
        self.apply_background(&mut canvas, config);
        self.apply_pattern(&mut canvas, config);
        self.apply_pre_effects(&mut canvas, config);
        self.apply_template(&mut canvas, config);
        self.apply_extra_shapes(&mut canvas, config, rng);
        self.apply_subtitle(&mut canvas, config);
        self.apply_post_effects(&mut canvas, config, rng);
        Ok(canvas)
    }

    /// Renders with a [`StdRng`] seeded from `seed`.
    pub fn render_seeded(&self, config: &LogoConfig, seed: u64) -> Result<Canvas> {
        let mut rng = StdRng::seed_from_u64(seed);
        self.render(config, &mut rng)
    }

    /// Renders `config`, or a freshly synthesized one when `None`.
    pub fn generate<R: Rng + ?Sized>(&self, config: Option<&LogoConfig>, rng: &mut R) -> Result<Logo> {
        let config = match config {
            Some(config) => config.clone(),
            None => random_config(rng),
        };
        let canvas = self.render(&config, rng)?;
        Ok(Logo { canvas, config })
    }

    /// Writes `count` random logos to `dir` as `{prefix}_001.png`, ...
    #[tracing::instrument(skip_all, fields(count = count, dir = %dir.display()))]
    pub fn batch_generate<R: Rng + ?Sized>(
        &self,
        count: usize,
        dir: &Path,
        prefix: &str,
        rng: &mut R,
    ) -> Result<Vec<PathBuf>> {
        ensure_dir(dir)?;
        let mut written = Vec::with_capacity(count);
        for i in 1..=count {
            let logo = self.generate(None, rng)?;
            let path = dir.join(format!("{prefix}_{i:03}.png"));
            logo.save(&path)?;
            written.push(path);
        }
        tracing::info!(count, "generated batch");
        Ok(written)
    }

    /// Writes `count` near-copies of `base` to `dir` as `variation_001.png`, ...
    ///
    /// Each variation jitters every palette color by up to ±0.1 per RGB
    /// channel and re-rolls the pattern and the extra-shapes toggle.
    #[tracing::instrument(skip_all, fields(count = count, dir = %dir.display()))]
    pub fn generate_variations<R: Rng + ?Sized>(
        &self,
        base: &LogoConfig,
        count: usize,
        dir: &Path,
        rng: &mut R,
    ) -> Result<Vec<PathBuf>> {
        ensure_dir(dir)?;
        let mut written = Vec::with_capacity(count);
        for i in 1..=count {
            let config = vary(base, rng);
            let canvas = self.render(&config, rng)?;
            let path = dir.join(format!("variation_{i:03}.png"));
            canvas.save(&path)?;
            written.push(path);
        }
        tracing::info!(count, "generated variations");
        Ok(written)
    }

    /// Renders `config` once per `(width, height)` into `dir` as
    /// `logo_{w}x{h}.png`. Uses [`DEFAULT_SIZES`] when `sizes` is `None`.
    #[tracing::instrument(skip_all, fields(dir = %dir.display()))]
    pub fn generate_size_variants<R: Rng + ?Sized>(
        config: &LogoConfig,
        sizes: Option<&[(u32, u32)]>,
        dir: &Path,
        rng: &mut R,
    ) -> Result<Vec<PathBuf>> {
        let sizes = sizes.unwrap_or(&DEFAULT_SIZES);
        ensure_dir(dir)?;
        let mut written = Vec::with_capacity(sizes.len());
        for &(width, height) in sizes {
            let canvas = LogoGenerator::new(width, height).render(config, rng)?;
            let path = dir.join(format!("logo_{width}x{height}.png"));
            canvas.save(&path)?;
            written.push(path);
        }
        tracing::info!(count = written.len(), "generated size variants");
        Ok(written)
    }

    // ------------------------------------------------------------------------
    // Stages
    // ------------------------------------------------------------------------

    fn apply_background(&self, canvas: &mut Canvas, config: &LogoConfig) {
        let [first, .., last] = config.colors[..] else {
            return;
        };
        if config.has_effect(Effect::GradientBg) {
            tracing::debug!(direction = config.gradient_direction.name(), "gradient background");
            effects::gradient_background(
                canvas,
                first,
                last,
                config.gradient_direction,
                effects::GRADIENT_BACKGROUND_STEPS,
            );
        } else if config.has_effect(Effect::RadialGradient) {
            tracing::debug!("radial background");
            let radius = self.width.max(self.height) as f32 * 0.8;
            let center = canvas.center();
            effects::radial_gradient(canvas, center, radius, first, last, effects::RADIAL_GRADIENT_STEPS);
        }
    }

    fn apply_pattern(&self, canvas: &mut Canvas, config: &LogoConfig) {
        if config.pattern == Pattern::None {
            return;
        }
        tracing::debug!(pattern = config.pattern.name(), "pattern");
        let base = config.colors.first().copied().unwrap_or(Color::GRAY);
        let color = base.adjust_brightness(0.5).with_alpha(0.15);
        config.pattern.draw(canvas, color);
    }

    fn apply_pre_effects(&self, canvas: &mut Canvas, config: &LogoConfig) {
        if config.has_effect(Effect::Glow) {
            tracing::debug!("glow");
            let color = config.colors.first().copied().unwrap_or(Color::WHITE);
            let center = canvas.center();
            effects::glow(canvas, center, 30.0, color, 8.0, effects::GLOW_STEPS);
        }
    }

    fn apply_template(&self, canvas: &mut Canvas, config: &LogoConfig) {
        tracing::debug!(template = config.template.name(), "template");
        config
            .template
            .draw(canvas, &config.colors, &config.text, &config.font_family);
    }

    fn apply_extra_shapes<R: Rng + ?Sized>(&self, canvas: &mut Canvas, config: &LogoConfig, rng: &mut R) {
        if !config.extra_shapes {
            return;
        }
        let m = canvas.min_side();
        let center = canvas.center();
        let count = rng.gen_range(3..=8);
        tracing::debug!(count, "extra shapes");

        for _ in 0..count {
            let angle = uniform(rng, 0.0, TAU);
            let distance = uniform(rng, m * 0.35, m * 0.45);
            let at = polar(center, distance, angle);
            let color = choose(rng, &config.colors).copied().unwrap_or(Color::GRAY);
            let fill = color.with_alpha(uniform(rng, 0.3, 0.7));
            let ornament = pick(rng, &Ornament::ALL);
            let size = uniform(rng, 3.0, 10.0);

            match ornament {
                Ornament::Circle => canvas.circle(at, size, &Style::fill(fill)),
                Ornament::Square => {
                    let rotation = uniform(rng, 0.0, PI);
                    canvas.rectangle(at, size * 2.0, size * 2.0, rotation, &Style::fill(fill));
                }
                Ornament::Diamond => canvas.draw_shape(&diamond(at, size).filled(fill)),
                Ornament::Triangle => {
                    canvas.draw_shape(&polygon(at, 3, size, -FRAC_PI_2).filled(fill));
                }
            }
        }
    }

    fn apply_subtitle(&self, canvas: &mut Canvas, config: &LogoConfig) {
        if config.subtitle.is_empty() {
            return;
        }
        tracing::debug!(effect = config.text_effect.name(), "subtitle");
        let (w, h) = canvas.size();
        let fill = config.colors.last().copied().unwrap_or(Color::WHITE);
        let run = TextRun::new(
            config.subtitle.as_str(),
            pt(w / 2.0, h * 0.82),
            config.font_size * 0.5,
            config.font_family.as_str(),
            fill,
        );
        config.text_effect.render(canvas, &run);
    }

    fn apply_post_effects<R: Rng + ?Sized>(&self, canvas: &mut Canvas, config: &LogoConfig, rng: &mut R) {
        let center = canvas.center();
        if config.has_effect(Effect::Particles) {
            tracing::debug!("particles");
            let reach = canvas.min_side() * 0.45;
            effects::particle_burst(canvas, center, 40, reach, &config.colors, rng);
        }
        if config.has_effect(Effect::LensFlare) {
            tracing::debug!("lens flare");
            let (w, h) = canvas.size();
            let x = center.x + uniform(rng, -w * 0.2, w * 0.2);
            let y = center.y + uniform(rng, -h * 0.2, h * 0.2);
            effects::lens_flare(canvas, pt(x, y), 30.0, LENS_FLARE_COLOR);
        }
    }
}

/// Decorative element kinds of the extra-shapes stage.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Ornament {
    Circle,
    Square,
    Diamond,
    Triangle,
}

impl Ornament {
    const ALL: [Ornament; 4] = [
        Ornament::Circle,
        Ornament::Square,
        Ornament::Diamond,
        Ornament::Triangle,
    ];
}

// ============================================================================
// Config synthesis
// ============================================================================

/// Builds a random but coherent config: a harmonious palette, a dark
/// background derived from it and random template, pattern and effects.
pub fn random_config<R: Rng + ?Sized>(rng: &mut R) -> LogoConfig {
    let harmony = pick(rng, &Harmony::ALL);
    let colors = generate_harmonious(None, harmony, HarmonyOptions::default(), rng);
    let background = colors
        .first()
        .copied()
        .unwrap_or(Color::GRAY)
        .adjust_brightness(0.3);
    let template = pick(rng, &Template::ALL);
    let pattern = pick(rng, &Pattern::ALL);
    let effect_count = rng.gen_range(0..=3);
    let effects = sample(rng, &Effect::ALL, effect_count);

    LogoConfig {
        background_color: background,
        colors,
        template,
        pattern,
        effects,
        text: "LOGO".to_string(),
        subtitle: String::new(),
        font_family: pick(rng, &FONT_FAMILIES).to_string(),
        font_size: 36.0,
        text_effect: pick(rng, &TextEffect::ALL),
        extra_shapes: coin(rng),
        gradient_direction: pick(rng, &GradientDirection::ALL),
    }
}

/// Copy of `base` with jittered colors, a random pattern and a random
/// extra-shapes toggle.
fn vary<R: Rng + ?Sized>(base: &LogoConfig, rng: &mut R) -> LogoConfig {
    let mut config = base.clone();
    for color in &mut config.colors {
        let r = color.r + uniform(rng, -0.1, 0.1);
        let g = color.g + uniform(rng, -0.1, 0.1);
        let b = color.b + uniform(rng, -0.1, 0.1);
        *color = Color::rgba(r, g, b, color.a);
    }
    config.extra_shapes = coin(rng);
    config.pattern = pick(rng, &Pattern::ALL);
    config
}

fn ensure_dir(dir: &Path) -> Result<()> {
    fs::create_dir_all(dir).map_err(|err| LogoError::io(dir, err))
}

// ============================================================================
// Catalog demos
// ============================================================================

/// Renders every template with a triadic palette into `dir/{template}.png`.
pub fn demo_templates<R: Rng + ?Sized>(dir: &Path, rng: &mut R) -> Result<Vec<PathBuf>> {
    let generator = LogoGenerator::default();
    ensure_dir(dir)?;
    let mut written = Vec::with_capacity(Template::ALL.len());
    for template in Template::ALL {
        let colors = generate_harmonious(None, Harmony::Triadic, HarmonyOptions::default(), rng);
        let background = colors
            .first()
            .copied()
            .unwrap_or(Color::GRAY)
            .adjust_brightness(0.25);
        let config = LogoConfig::new()
            .with_background(background)
            .with_colors(colors)
            .with_template(template)
            .with_effects([Effect::GradientBg])
            .with_text("DEMO")
            .with_subtitle(title_case(template.name()))
            .with_text_effect(TextEffect::Shadow);
        let path = dir.join(format!("{}.png", template.name()));
        generator.render(&config, rng)?.save(&path)?;
        written.push(path);
    }
    Ok(written)
}

/// Renders every pattern behind a corporate-palette minimal circle into
/// `dir/{pattern}.png`.
pub fn demo_patterns(dir: &Path) -> Result<Vec<PathBuf>> {
    let generator = LogoGenerator::default();
    // nothing in these configs draws from the rng
    let mut rng = StdRng::seed_from_u64(0);
    ensure_dir(dir)?;
    let mut written = Vec::with_capacity(Pattern::ALL.len());
    for pattern in Pattern::ALL {
        let config = LogoConfig::new()
            .with_background(Color::rgb(0.95, 0.95, 0.97))
            .with_colors(Preset::Corporate.colors())
            .with_pattern(pattern)
            .with_text("PAT")
            .with_subtitle(title_case(pattern.name()));
        let path = dir.join(format!("{}.png", pattern.name()));
        generator.render(&config, &mut rng)?.save(&path)?;
        written.push(path);
    }
    Ok(written)
}

/// Renders a tech hexagon per preset palette into `dir/{preset}.png`.
pub fn demo_palettes<R: Rng + ?Sized>(dir: &Path, rng: &mut R) -> Result<Vec<PathBuf>> {
    let generator = LogoGenerator::default();
    ensure_dir(dir)?;
    let mut written = Vec::with_capacity(Preset::ALL.len());
    for preset in Preset::ALL {
        let colors = preset.colors();
        let background = colors
            .first()
            .copied()
            .unwrap_or(Color::GRAY)
            .adjust_brightness(0.3);
        let config = LogoConfig::new()
            .with_background(background)
            .with_colors(colors)
            .with_template(Template::TechHexagon)
            .with_effects([Effect::GradientBg, Effect::Particles])
            .with_text(preset.name().chars().take(4).collect::<String>().to_uppercase())
            .with_subtitle(title_case(preset.name()))
            .with_text_effect(TextEffect::Shadow)
            .with_extra_shapes(true);
        let path = dir.join(format!("{}.png", preset.name()));
        generator.render(&config, rng)?.save(&path)?;
        written.push(path);
    }
    Ok(written)
}

/// Five-layer showcase built on a [`Compositor`]: diagonal gradient, hexagon
/// texture, stacked discs under a star, a shadowed caption and a particle
/// burst, all from one triadic palette.
pub fn demo_composition<R: Rng + ?Sized>(rng: &mut R) -> Result<Canvas> {
    let colors = generate_harmonious(None, Harmony::Triadic, HarmonyOptions::default(), rng);
    let slot = |i: usize| colors.get(i).copied().unwrap_or(Color::WHITE);
    let (primary, secondary, accent) = (slot(0), slot(1), slot(2));
    // particles replay from their own seed so the layer stays a plain `Fn`
    let particle_seed = rng.next_u64();
    let palette = colors.clone();

    let mut compositor = Compositor::new(500, 500);
    compositor
        .add_layer(0, move |canvas| {
            effects::gradient_background(
                canvas,
                primary.adjust_brightness(0.3),
                primary.adjust_brightness(0.6),
                GradientDirection::Diagonal,
                effects::GRADIENT_BACKGROUND_STEPS,
            );
        })
        .add_layer(1, move |canvas| hexagons(canvas, secondary.with_alpha(0.1), 30.0, 0.5))
        .add_layer(2, move |canvas| {
            let c = canvas.center();
            canvas.circle(c, 80.0, &Style::fill(primary));
            canvas.circle(c, 60.0, &Style::fill(secondary));
            canvas.draw_shape(&star(c, 6, 40.0, 20.0, 0.0).filled(accent));
        })
        .add_layer(3, |canvas| {
            let (w, h) = canvas.size();
            let run = TextRun::new("COMPOSED", pt(w / 2.0, h * 0.7), 28.0, "Arial", Color::WHITE);
            text::render_with_shadow(canvas, &run, Color::BLACK, text::DEFAULT_SHADOW_OFFSET);
        })
        .add_layer(4, move |canvas| {
            let mut rng = StdRng::seed_from_u64(particle_seed);
            let c = canvas.center();
            effects::particle_burst(canvas, c, 50, 150.0, &palette, &mut rng);
        });
    compositor.compose(Color::rgb(0.1, 0.1, 0.15))
}

/// `"dark_elegance"` -> `"Dark Elegance"`.
fn title_case(name: &str) -> String {
    name.split('_')
        .filter(|word| !word.is_empty())
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().chain(chars).collect::<String>(),
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn plain() -> LogoConfig {
        LogoConfig::new().with_text("")
    }

    fn pixel(canvas: &Canvas, x: u32, y: u32) -> [u8; 4] {
        canvas.to_image().get_pixel(x, y).0
    }

    #[test]
    fn default_generator_is_500_square() {
        assert_eq!(LogoGenerator::default(), LogoGenerator::new(500, 500));
    }

    #[test]
    fn default_config_paints_background_and_emblem() {
        let canvas = LogoGenerator::new(100, 100).render_seeded(&plain(), 1).unwrap();
        // background corner, primary ring, secondary inner disc
        assert_eq!(pixel(&canvas, 0, 0), [26, 26, 38, 255]);
        assert_eq!(pixel(&canvas, 75, 50), [51, 102, 204, 255]);
        assert_eq!(pixel(&canvas, 50, 50), [255, 255, 255, 255]);
    }

    #[test]
    fn zero_sized_generator_fails() {
        let err = LogoGenerator::new(0, 0).render_seeded(&plain(), 1).unwrap_err();
        assert!(matches!(err, LogoError::InvalidCanvasSize { .. }));
    }

    #[test]
    fn gradient_background_spans_first_to_last_color() {
        let config = plain()
            .with_colors([Color::BLACK, Color::GRAY, Color::WHITE])
            .with_effects([Effect::GradientBg]);
        let canvas = LogoGenerator::new(100, 100).render_seeded(&config, 1).unwrap();
        assert!(pixel(&canvas, 0, 1)[0] < 20);
        assert!(pixel(&canvas, 0, 98)[0] > 230);
    }

    #[test]
    fn radial_background_needs_two_colors() {
        let single = plain()
            .with_colors([Color::WHITE])
            .with_effects([Effect::RadialGradient]);
        let canvas = LogoGenerator::new(60, 60).render_seeded(&single, 1).unwrap();
        assert_eq!(pixel(&canvas, 0, 0), [26, 26, 38, 255]);

        let pair = single.with_colors([Color::WHITE, Color::BLACK]);
        let canvas = LogoGenerator::new(60, 60).render_seeded(&pair, 1).unwrap();
        // corner lies inside the 0.8·max radius, near the rim color
        assert!(pixel(&canvas, 0, 0)[0] > 150);
    }

    #[test]
    fn gradient_wins_over_radial() {
        let config = plain()
            .with_colors([Color::BLACK, Color::WHITE])
            .with_effects([Effect::RadialGradient, Effect::GradientBg])
            .with_gradient_direction(GradientDirection::Horizontal);
        let canvas = LogoGenerator::new(100, 100).render_seeded(&config, 1).unwrap();
        assert!(pixel(&canvas, 1, 0)[0] < 20);
        assert!(pixel(&canvas, 98, 0)[0] > 230);
        assert!(pixel(&canvas, 1, 99)[0] < 20);
    }

    #[test]
    fn same_seed_same_pixels() {
        let config = LogoConfig::new()
            .with_effects([Effect::Particles, Effect::LensFlare, Effect::Glow])
            .with_pattern(Pattern::Hexagon)
            .with_extra_shapes(true);
        let generator = LogoGenerator::new(120, 120);
        let a = generator.render_seeded(&config, 77).unwrap();
        let b = generator.render_seeded(&config, 77).unwrap();
        assert_eq!(a.data(), b.data());
    }

    #[test]
    fn stochastic_stages_depend_on_seed() {
        let config = plain().with_effects([Effect::Particles]).with_extra_shapes(true);
        let generator = LogoGenerator::new(120, 120);
        let a = generator.render_seeded(&config, 1).unwrap();
        let b = generator.render_seeded(&config, 2).unwrap();
        assert_ne!(a.data(), b.data());
    }

    #[test]
    fn shadow_effect_is_accepted_but_inert() {
        let generator = LogoGenerator::new(80, 80);
        let with = generator
            .render_seeded(&plain().with_effects([Effect::Shadow, Effect::None]), 3)
            .unwrap();
        let without = generator.render_seeded(&plain(), 3).unwrap();
        assert_eq!(with.data(), without.data());
    }

    #[test]
    fn extra_shapes_stay_in_the_ring_band() {
        let config = plain()
            .with_colors([Color::WHITE])
            .with_template(Template::GeometricAbstract)
            .with_extra_shapes(true);
        let bare = plain().with_colors([Color::WHITE]).with_template(Template::GeometricAbstract);
        let generator = LogoGenerator::new(200, 200);
        for seed in 0..5 {
            let with = generator.render_seeded(&config, seed).unwrap().to_image();
            let without = generator.render_seeded(&bare, seed).unwrap().to_image();
            let mut changed = 0;
            for (x, y, p) in with.enumerate_pixels() {
                if p != without.get_pixel(x, y) {
                    changed += 1;
                    let d = ((x as f32 + 0.5 - 100.0).powi(2) + (y as f32 + 0.5 - 100.0).powi(2)).sqrt();
                    // 0.35m..0.45m plus the largest ornament reach (square half-diagonal ≈ 14.2)
                    assert!((70.0 - 16.0..=90.0 + 16.0).contains(&d), "pixel at distance {d}");
                }
            }
            assert!(changed > 0);
        }
    }

    #[test]
    fn generate_returns_the_config_it_used() {
        let generator = LogoGenerator::new(64, 64);
        let mut rng = StdRng::seed_from_u64(9);
        let given = LogoConfig::new().with_text("X");
        let logo = generator.generate(Some(&given), &mut rng).unwrap();
        assert_eq!(logo.config, given);

        let logo = generator.generate(None, &mut rng).unwrap();
        assert_eq!(logo.config.text, "LOGO");
        assert_eq!((logo.canvas.width(), logo.canvas.height()), (64, 64));
    }

    #[test]
    fn random_config_is_well_formed() {
        let mut rng = StdRng::seed_from_u64(4);
        for _ in 0..50 {
            let config = random_config(&mut rng);
            assert!(!config.colors.is_empty());
            assert_eq!(config.background_color, config.colors[0].adjust_brightness(0.3));
            assert!(config.effects.len() <= 3);
            let mut unique = config.effects.clone();
            unique.sort_by_key(|e| e.name());
            unique.dedup();
            assert_eq!(unique.len(), config.effects.len());
            assert!(FONT_FAMILIES.contains(&config.font_family.as_str()));
            assert_eq!(config.text, "LOGO");
            assert!(config.subtitle.is_empty());
            assert_eq!(config.font_size, 36.0);
        }
    }

    #[test]
    fn random_config_is_seed_deterministic() {
        let a = random_config(&mut StdRng::seed_from_u64(12));
        let b = random_config(&mut StdRng::seed_from_u64(12));
        assert_eq!(a, b);
    }

    #[test]
    fn variations_only_jitter_rgb() {
        let base = LogoConfig::new().with_colors([Color::rgba(0.5, 0.5, 0.5, 0.4), Color::WHITE]);
        let mut rng = StdRng::seed_from_u64(8);
        for _ in 0..20 {
            let varied = vary(&base, &mut rng);
            for (before, after) in base.colors.iter().zip(&varied.colors) {
                assert!((after.r - before.r).abs() <= 0.1 + 1e-6);
                assert!((after.g - before.g).abs() <= 0.1 + 1e-6);
                assert!((after.b - before.b).abs() <= 0.1 + 1e-6);
                assert_eq!(after.a, before.a);
            }
            assert!(varied.colors[1].r <= 1.0);
            assert_eq!(varied.template, base.template);
            assert_eq!(varied.text, base.text);
        }
    }

    #[test]
    fn composition_demo_is_seed_deterministic() {
        let a = demo_composition(&mut StdRng::seed_from_u64(21)).unwrap();
        let b = demo_composition(&mut StdRng::seed_from_u64(21)).unwrap();
        assert_eq!((a.width(), a.height()), (500, 500));
        assert_eq!(a.data(), b.data());
    }

    #[test]
    fn title_case_names() {
        assert_eq!(title_case("dark_elegance"), "Dark Elegance");
        assert_eq!(title_case("dots"), "Dots");
        assert_eq!(title_case(""), "");
    }
}
