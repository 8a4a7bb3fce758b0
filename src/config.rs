//! Badge template configuration.
//!
//! Every field defaults to the canonical quality-gate badge, so `BadgeConfig::default()` is the
//! normal way to build a service. JSON files only need to name the fields they override.

use std::path::{Path, PathBuf};

use anyhow::Context as _;
use serde::{Deserialize, Serialize};

use crate::foundation::{
    color::Rgba8,
    error::{BadgeError, BadgeResult},
};

/// Largest accepted canvas height, label width or margin, in pixels.
pub const MAX_DIMENSION_PX: u32 = 4096;

/// Largest accepted font size, in pixels.
pub const MAX_FONT_SIZE_PX: f32 = 256.0;

/// Default generator comment embedded in every document.
pub const DEFAULT_GENERATOR_COMMENT: &str = "Generated by gatebadge SVG badge generator";

/// Geometry, colors, text and font of the badge template.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct BadgeConfig {
    /// Text of the left-hand label block.
    pub label_text: String,
    /// Width of the label block in pixels.
    pub label_width: u32,
    /// Height of the whole canvas in pixels.
    pub canvas_height: u32,
    /// Left inset of text inside each block; also the right padding of the status block.
    pub x_margin: u32,
    /// Diameter of the rounded outer corners.
    pub corner_diameter: u32,
    /// Label block background.
    pub label_color: Rgba8,
    /// Drop shadow color drawn under both text layers.
    pub shadow_color: Rgba8,
    /// Foreground text color.
    pub text_color: Rgba8,
    /// Baseline of the label shadow text.
    pub label_shadow_baseline: u32,
    /// Baseline of the label text.
    pub label_text_baseline: u32,
    /// Baseline of the status shadow text.
    pub status_shadow_baseline: u32,
    /// Baseline of the status text.
    pub status_text_baseline: u32,
    /// XML comment identifying the generator.
    pub generator_comment: String,
    /// Font used for both text blocks.
    pub font: FontConfig,
}

impl Default for BadgeConfig {
    fn default() -> Self {
        Self {
            label_text: "quality gate".to_owned(),
            label_width: 75,
            canvas_height: 20,
            x_margin: 4,
            corner_diameter: 6,
            label_color: Rgba8::LABEL_GRAY,
            shadow_color: Rgba8::SHADOW,
            text_color: Rgba8::WHITE,
            label_shadow_baseline: 14,
            label_text_baseline: 14,
            status_shadow_baseline: 15,
            status_text_baseline: 14,
            generator_comment: DEFAULT_GENERATOR_COMMENT.to_owned(),
            font: FontConfig::default(),
        }
    }
}

impl BadgeConfig {
    /// Load a JSON configuration file and validate it.
    pub fn from_path(path: impl AsRef<Path>) -> BadgeResult<Self> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("read badge config '{}'", path.display()))?;
        let cfg: Self = serde_json::from_str(&text)
            .with_context(|| format!("parse badge config '{}'", path.display()))?;
        cfg.validate()?;
        Ok(cfg)
    }

    /// Reject templates that cannot produce a well-formed badge.
    pub fn validate(&self) -> BadgeResult<()> {
        if self.label_text.trim().is_empty() {
            return Err(BadgeError::validation("label_text must be non-empty"));
        }
        if self.label_width == 0 || self.canvas_height == 0 {
            return Err(BadgeError::validation(
                "label_width and canvas_height must be > 0",
            ));
        }
        if [self.label_width, self.canvas_height, self.x_margin]
            .iter()
            .any(|&v| v > MAX_DIMENSION_PX)
        {
            return Err(BadgeError::validation(format!(
                "label_width, canvas_height and x_margin must be <= {MAX_DIMENSION_PX}"
            )));
        }
        if self.x_margin >= self.label_width {
            return Err(BadgeError::validation(
                "x_margin must be smaller than label_width",
            ));
        }
        if self.corner_diameter > self.label_width || self.corner_diameter > self.canvas_height {
            return Err(BadgeError::validation(
                "corner_diameter must fit inside the label block",
            ));
        }
        let baselines = [
            self.label_shadow_baseline,
            self.label_text_baseline,
            self.status_shadow_baseline,
            self.status_text_baseline,
        ];
        if baselines.iter().any(|&b| b > self.canvas_height) {
            return Err(BadgeError::validation(
                "text baselines must lie within the canvas",
            ));
        }
        if self.generator_comment.contains("--") {
            return Err(BadgeError::validation(
                "generator_comment must not contain \"--\"",
            ));
        }
        self.font.validate()
    }
}

/// Font preference list and lookup locations.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct FontConfig {
    /// Family names tried in order; the first one found wins.
    pub families: Vec<String>,
    /// Font size in pixels.
    pub size_px: f32,
    /// Extra directories scanned for `.ttf`, `.otf` and `.ttc` files.
    pub font_dirs: Vec<PathBuf>,
    /// Whether to consult the platform font directories.
    pub load_system_fonts: bool,
}

impl Default for FontConfig {
    fn default() -> Self {
        Self {
            families: [
                "Verdana",
                "DejaVu Sans",
                "Bitstream Vera Sans",
                "Geneva",
                "Liberation Sans",
                "Arial",
            ]
            .into_iter()
            .map(str::to_owned)
            .collect(),
            size_px: 11.0,
            font_dirs: Vec::new(),
            load_system_fonts: true,
        }
    }
}

impl FontConfig {
    /// Configuration that never touches the filesystem and always measures with built-in metrics.
    pub fn builtin() -> Self {
        Self {
            families: Vec::new(),
            load_system_fonts: false,
            ..Self::default()
        }
    }

    /// Reject non-finite, non-positive or oversized font sizes.
    pub fn validate(&self) -> BadgeResult<()> {
        if !self.size_px.is_finite() || self.size_px <= 0.0 {
            return Err(BadgeError::validation(
                "font size_px must be finite and > 0",
            ));
        }
        if self.size_px > MAX_FONT_SIZE_PX {
            return Err(BadgeError::validation(format!(
                "font size_px must be <= {MAX_FONT_SIZE_PX}"
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
#[path = "../tests/unit/config.rs"]
mod tests;
