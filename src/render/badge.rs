use std::io;

use crate::{
    config::BadgeConfig,
    foundation::{
        color::Rgba8,
        core::{Canvas, Point, Rect, RoundedRect},
    },
    render::svg,
    status::catalog::{BadgeStatus, StatusCatalog},
    text::font::ResolvedFont,
};

/// A single paint operation, in canvas pixel coordinates.
#[derive(Clone, Debug, PartialEq)]
pub enum DrawOp {
    /// Fill a rectangle with rounded corners.
    FillRoundedRect {
        /// Shape to fill.
        shape: RoundedRect,
        /// Fill color.
        color: Rgba8,
    },
    /// Fill a sharp-cornered rectangle.
    FillRect {
        /// Shape to fill.
        rect: Rect,
        /// Fill color.
        color: Rgba8,
    },
    /// Draw one left-aligned line of text.
    Text {
        /// Text content.
        text: String,
        /// Left end of the baseline.
        origin: Point,
        /// Fill color.
        color: Rgba8,
    },
}

/// Badge drawing: a fixed canvas plus paint operations in z-order (first op is painted first).
#[derive(Clone, Debug, PartialEq)]
pub struct BadgeDocument {
    /// Canvas size in pixels.
    pub canvas: Canvas,
    /// CSS `font-family` value applied to all text.
    pub font_family: String,
    /// Font size in pixels.
    pub font_size_px: f32,
    /// Generator comment emitted at the top of the document.
    pub comment: String,
    /// Paint operations.
    pub ops: Vec<DrawOp>,
}

impl BadgeDocument {
    /// Serialize as an SVG document.
    pub fn write_svg(&self, out: &mut dyn io::Write) -> io::Result<()> {
        svg::write_document(self, out)
    }

    /// Serialize as an SVG document into a fresh buffer.
    pub fn to_svg_bytes(&self) -> io::Result<Vec<u8>> {
        let mut out = Vec::new();
        self.write_svg(&mut out)?;
        Ok(out)
    }
}

/// Stateless drawing routine for two-block badges.
#[derive(Clone, Debug)]
pub struct BadgeRenderer {
    config: BadgeConfig,
    font_family: String,
    catalog: StatusCatalog,
}

impl BadgeRenderer {
    /// Renderer drawing with `config` geometry, `font` and the widths of `catalog`.
    pub fn new(config: BadgeConfig, font: &ResolvedFont, catalog: StatusCatalog) -> Self {
        Self {
            config,
            font_family: font.css_font_family(),
            catalog,
        }
    }

    /// Template configuration.
    pub fn config(&self) -> &BadgeConfig {
        &self.config
    }

    /// Status widths used for the second block.
    pub fn catalog(&self) -> &StatusCatalog {
        &self.catalog
    }

    /// Draw the badge for `status` with the configured label.
    pub fn render_status(&self, status: BadgeStatus) -> BadgeDocument {
        self.render(
            &self.config.label_text,
            self.config.label_color,
            status.display_text(),
            status.display_background_color(),
            self.catalog.display_width(status),
        )
    }

    /// Draw a label block and a status block of `status_width` pixels side by side.
    pub fn render(
        &self,
        label_text: &str,
        label_color: Rgba8,
        status_text: &str,
        status_color: Rgba8,
        status_width: u32,
    ) -> BadgeDocument {
        let cfg = &self.config;
        let label_w = f64::from(cfg.label_width);
        let status_w = f64::from(status_width);
        let height = f64::from(cfg.canvas_height);
        let diameter = f64::from(cfg.corner_diameter);
        let margin = f64::from(cfg.x_margin);

        let mut ops = Vec::with_capacity(8);

        // Label: rounded on the left, squared where it meets the status block.
        ops.push(DrawOp::FillRoundedRect {
            shape: RoundedRect::new(0.0, 0.0, label_w, height, diameter / 2.0),
            color: label_color,
        });
        ops.push(DrawOp::FillRect {
            rect: Rect::new(label_w - diameter, 0.0, label_w, height),
            color: label_color,
        });
        ops.push(DrawOp::Text {
            text: label_text.to_owned(),
            origin: Point::new(margin, f64::from(cfg.label_shadow_baseline)),
            color: cfg.shadow_color,
        });
        ops.push(DrawOp::Text {
            text: label_text.to_owned(),
            origin: Point::new(margin, f64::from(cfg.label_text_baseline)),
            color: cfg.text_color,
        });

        // Status: mirrored, rounded on the right.
        ops.push(DrawOp::FillRoundedRect {
            shape: RoundedRect::new(label_w, 0.0, label_w + status_w, height, diameter / 2.0),
            color: status_color,
        });
        ops.push(DrawOp::FillRect {
            rect: Rect::new(label_w, 0.0, label_w + diameter.min(status_w), height),
            color: status_color,
        });
        ops.push(DrawOp::Text {
            text: status_text.to_owned(),
            origin: Point::new(label_w + margin, f64::from(cfg.status_shadow_baseline)),
            color: cfg.shadow_color,
        });
        ops.push(DrawOp::Text {
            text: status_text.to_owned(),
            origin: Point::new(label_w + margin, f64::from(cfg.status_text_baseline)),
            color: cfg.text_color,
        });

        BadgeDocument {
            canvas: Canvas {
                width: cfg.label_width.saturating_add(status_width),
                height: cfg.canvas_height,
            },
            font_family: self.font_family.clone(),
            font_size_px: cfg.font.size_px,
            comment: cfg.generator_comment.clone(),
            ops,
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/render/badge.rs"]
mod tests;
