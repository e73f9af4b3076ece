//! Serializable logo configuration.
//!
//! A [`LogoConfig`] captures every input of one render in a JSON-friendly
//! form so designs can be saved, shared and re-rendered later.
//!
//! # Example
//!
//! ```
//! use logoforge::{Effect, LogoConfig, Template};
//!
//! let config = LogoConfig::new()
//!     .with_template(Template::TechHexagon)
//!     .with_effects([Effect::Glow, Effect::Particles])
//!     .with_text("ACME");
//!
//! let json = config.to_json().unwrap();
//! let restored = LogoConfig::from_json(&json).unwrap();
//! assert_eq!(restored, config);
//! ```

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::color::Color;
use crate::effects::{Effect, GradientDirection};
use crate::error::{LogoError, Result};
use crate::geometry::Pattern;
use crate::template::Template;
use crate::text::TextEffect;

/// Everything a render needs besides the canvas size and the random source.
///
/// Absent keys take their defaults, unknown keys are ignored and unknown
/// enum names decode to each enum's fallback variant.
///
/// # JSON Format
///
/// ```json
/// {
///   "backgroundColor": [0.1, 0.1, 0.15, 1.0],
///   "colors": [[0.2, 0.4, 0.8, 1.0], [1.0, 1.0, 1.0, 1.0]],
///   "template": "minimal_circle",
///   "pattern": "dots",
///   "effects": ["glow"],
///   "text": "LOGO",
///   "subtitle": "",
///   "fontFamily": "Arial",
///   "fontSize": 36.0,
///   "textEffect": "none",
///   "extraShapes": false,
///   "gradientDirection": "vertical"
/// }
/// ```
///
/// The snake_case keys written by older tools (`bg_color`, `fontfamily`,
/// `text_effect`, ...) are accepted as aliases.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct LogoConfig {
    #[serde(alias = "bg_color")]
    pub background_color: Color,

    /// Palette slots: primary, secondary, accent, then any extras.
    pub colors: Vec<Color>,

    pub template: Template,

    pub pattern: Pattern,

    /// Enabled effects. Order does not matter; each stage checks membership.
    pub effects: Vec<Effect>,

    /// Main text drawn by the template.
    pub text: String,

    /// Optional line below the emblem. Empty means none.
    pub subtitle: String,

    #[serde(alias = "fontfamily")]
    pub font_family: String,

    /// Base font size; the subtitle is drawn at half of it.
    #[serde(alias = "fontsize")]
    pub font_size: f32,

    #[serde(alias = "text_effect")]
    pub text_effect: TextEffect,

    /// Scatter small decorative shapes around the emblem.
    #[serde(alias = "extra_shapes")]
    pub extra_shapes: bool,

    #[serde(alias = "gradient_direction")]
    pub gradient_direction: GradientDirection,
}

impl Default for LogoConfig {
    fn default() -> Self {
        Self {
            background_color: Color::rgb(0.1, 0.1, 0.15),
            colors: vec![Color::rgb(0.2, 0.4, 0.8), Color::WHITE, Color::WHITE],
            template: Template::default(),
            pattern: Pattern::default(),
            effects: Vec::new(),
            text: "LOGO".to_string(),
            subtitle: String::new(),
            font_family: "Arial".to_string(),
            font_size: 36.0,
            text_effect: TextEffect::default(),
            extra_shapes: false,
            gradient_direction: GradientDirection::default(),
        }
    }
}

impl LogoConfig {
    /// Creates a config with every field at its default.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_background(mut self, color: Color) -> Self {
        self.background_color = color;
        self
    }

    pub fn with_colors(mut self, colors: impl Into<Vec<Color>>) -> Self {
        self.colors = colors.into();
        self
    }

    pub fn with_template(mut self, template: Template) -> Self {
        self.template = template;
        self
    }

    pub fn with_pattern(mut self, pattern: Pattern) -> Self {
        self.pattern = pattern;
        self
    }

    pub fn with_effects(mut self, effects: impl IntoIterator<Item = Effect>) -> Self {
        self.effects = effects.into_iter().collect();
        self
    }

    pub fn with_text(mut self, text: impl Into<String>) -> Self {
        self.text = text.into();
        self
    }

    pub fn with_subtitle(mut self, subtitle: impl Into<String>) -> Self {
        self.subtitle = subtitle.into();
        self
    }

    pub fn with_text_effect(mut self, effect: TextEffect) -> Self {
        self.text_effect = effect;
        self
    }

    pub fn with_extra_shapes(mut self, enabled: bool) -> Self {
        self.extra_shapes = enabled;
        self
    }

    pub fn with_gradient_direction(mut self, direction: GradientDirection) -> Self {
        self.gradient_direction = direction;
        self
    }

    /// Returns `true` if `effect` is listed in [`effects`](Self::effects).
    pub fn has_effect(&self, effect: Effect) -> bool {
        self.effects.contains(&effect)
    }

    /// Serializes the config to a JSON string.
    pub fn to_json(&self) -> std::result::Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }

    /// Serializes the config to a pretty-printed JSON string.
    pub fn to_json_pretty(&self) -> std::result::Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }

    /// Deserializes a config from a JSON string.
    pub fn from_json(json: &str) -> std::result::Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    /// Writes the config as pretty-printed JSON.
    pub fn save(&self, path: impl AsRef<Path>) -> Result<()> {
        let path = path.as_ref();
        let json = self.to_json_pretty()?;
        fs::write(path, json).map_err(|err| LogoError::io(path, err))?;
        tracing::info!(path = %path.display(), "saved config");
        Ok(())
    }

    /// Reads a config written by [`save`](Self::save) or by hand.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let json = fs::read_to_string(path).map_err(|err| LogoError::io(path, err))?;
        let config = Self::from_json(&json)?;
        tracing::debug!(path = %path.display(), template = config.template.name(), "loaded config");
        Ok(config)
    }
}

// ============================================================================
// Tests
// ============================================================================
