//! logoforge: procedural logo generator
//!
//! This crate composes color harmonies, parametric shapes, tiling patterns,
//! text and translucent effects into logo-style raster images. A
//! [`LogoConfig`] describes one design; a [`LogoGenerator`] renders it onto a
//! [`Canvas`] through a fixed seven-stage pipeline.
//!
//! # Example
//!
//! ```
//! use logoforge::{Effect, LogoConfig, LogoGenerator, Pattern, Template, get_preset};
//!
//! let config = LogoConfig::new()
//!     .with_colors(get_preset("ocean"))
//!     .with_template(Template::CircularBadge)
//!     .with_pattern(Pattern::Dots)
//!     .with_effects([Effect::RadialGradient, Effect::Particles])
//!     .with_text("WAVE");
//!
//! // Same config and seed always give the same pixels
//! let generator = LogoGenerator::new(256, 256);
//! let a = generator.render_seeded(&config, 7).unwrap();
//! let b = generator.render_seeded(&config, 7).unwrap();
//! assert_eq!(a.data(), b.data());
//! ```
//!
//! # Random Designs
//!
//! Every stochastic operation takes the random source explicitly:
//!
//! ```
//! use logoforge::{LogoGenerator, random_config};
//! use rand::SeedableRng;
//! use rand::rngs::StdRng;
//!
//! let mut rng = StdRng::seed_from_u64(1);
//! let config = random_config(&mut rng);
//! let logo = LogoGenerator::new(128, 128).generate(Some(&config), &mut rng).unwrap();
//! assert_eq!(logo.config, config);
//! ```
//!
//! # Custom Composition
//!
//! For designs outside the fixed pipeline, stack drawing callbacks on a
//! [`Compositor`]; see the [`layer`] module.

pub mod canvas;
pub mod color;
pub mod config;
pub mod effects;
pub mod error;
pub mod generator;
pub mod geometry;
pub mod layer;
pub mod random;
pub mod template;
pub mod text;

pub use canvas::{Canvas, Circle, Point, Shape, Style, TextRun};
pub use color::{Color, Harmony, HarmonyOptions, Preset, generate_harmonious, get_preset, hsv_to_rgb};
pub use config::LogoConfig;
pub use effects::{Effect, GradientDirection};
pub use error::{LogoError, Result};
pub use generator::{DEFAULT_SIZES, Logo, LogoGenerator, random_config};
pub use geometry::{ArrowDirection, Pattern};
pub use layer::{Compositor, Layer};
pub use template::Template;
pub use text::TextEffect;
