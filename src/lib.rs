//! gatebadge renders quality-gate statuses as small two-block SVG badges and caches them.
//!
//! # Pipeline overview
//!
//! 1. **Resolve**: pick the badge font once from a preference list (built-in metrics otherwise).
//! 2. **Measure**: compute each status block width (`StatusCatalog`).
//! 3. **Render**: draw label and status blocks into a `BadgeDocument` and serialize it as SVG.
//! 4. **Cache**: keep one immutable document per status and hand out fresh `BadgeStream`s.
//!
//! The only entry point for request handlers is [`ImageService`]:
//!
//! ```no_run
//! use std::io::Read as _;
//! use gatebadge::{BadgeConfig, BadgeStatus, ImageService};
//!
//! # fn main() -> gatebadge::BadgeResult<()> {
//! let service = ImageService::new(BadgeConfig::default())?;
//! let mut svg = String::new();
//! service.image_for(BadgeStatus::Ok)?.read_to_string(&mut svg).ok();
//! assert!(svg.contains("passing"));
//! # Ok(())
//! # }
//! ```
#![forbid(unsafe_code)]
#![deny(missing_docs)]

mod cache;
mod foundation;
mod render;
mod status;
mod text;

/// Badge template configuration.
pub mod config;
mod service;

pub use cache::store::{BadgeCache, BadgeSource, BadgeStream};
pub use config::{
    BadgeConfig, DEFAULT_GENERATOR_COMMENT, FontConfig, MAX_DIMENSION_PX, MAX_FONT_SIZE_PX,
};
pub use foundation::color::Rgba8;
pub use foundation::core::{Canvas, Point, Rect, RoundedRect};
pub use foundation::error::{BadgeError, BadgeResult};
pub use render::badge::{BadgeDocument, BadgeRenderer, DrawOp};
pub use render::svg::{CONTENT_TYPE, write_document};
pub use service::ImageService;
pub use status::catalog::{BadgeStatus, StatusCatalog, StatusStyle};
pub use text::font::{GENERIC_FAMILY, ResolvedFont, resolve_font};
pub use text::metrics::TextMeasurer;
