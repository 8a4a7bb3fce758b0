use std::sync::Arc;

use crate::{
    cache::store::{BadgeCache, BadgeSource, BadgeStream},
    config::BadgeConfig,
    foundation::error::BadgeResult,
    render::badge::BadgeRenderer,
    status::catalog::{BadgeStatus, StatusCatalog},
    text::{
        font::{ResolvedFont, resolve_font},
        metrics::TextMeasurer,
    },
};

/// Entry point for badge requests.
///
/// Owns the resolved font, the status catalog and the cache. Cheap to share behind an [`Arc`];
/// all methods take `&self`.
#[derive(Debug)]
pub struct ImageService {
    font: ResolvedFont,
    catalog: StatusCatalog,
    cache: BadgeCache,
}

impl ImageService {
    /// Media type of every document returned by the service.
    pub const CONTENT_TYPE: &'static str = crate::render::svg::CONTENT_TYPE;

    /// Validate `config`, resolve the font and build an empty cache.
    ///
    /// A missing font is not an error: the service logs it and measures text with built-in
    /// metrics.
    pub fn new(config: BadgeConfig) -> BadgeResult<Self> {
        config.validate()?;

        let (font, mut measurer) = match resolve_font(&config.font)
            .and_then(|font| TextMeasurer::new(&font, config.font.size_px).map(|m| (font, m)))
        {
            Ok(found) => found,
            Err(err) => {
                tracing::warn!(error = %err, "no usable badge font, using built-in metrics");
                (
                    ResolvedFont::builtin(),
                    TextMeasurer::builtin(config.font.size_px)?,
                )
            }
        };
        let catalog = StatusCatalog::new(&mut measurer, config.x_margin);
        let renderer = BadgeRenderer::new(config, &font, catalog.clone());

        tracing::info!(font = font.family(), "badge image service ready");
        Ok(Self {
            font,
            catalog,
            cache: BadgeCache::new(Arc::new(renderer)),
        })
    }

    /// Service serving badges from a custom `source`, with widths taken from `catalog`.
    pub fn with_source(
        font: ResolvedFont,
        catalog: StatusCatalog,
        source: Arc<dyn BadgeSource>,
    ) -> Self {
        Self {
            font,
            catalog,
            cache: BadgeCache::new(source),
        }
    }

    /// SVG document for `status`; errors from the cache are returned unchanged.
    pub fn image_for(&self, status: BadgeStatus) -> BadgeResult<BadgeStream> {
        self.cache.get(status)
    }

    /// Parse a status name, then behave like [`ImageService::image_for`].
    ///
    /// Unknown names fail before the cache is consulted.
    pub fn image_for_name(&self, name: &str) -> BadgeResult<BadgeStream> {
        let status: BadgeStatus = name.parse()?;
        self.image_for(status)
    }

    /// Display widths in effect for this service.
    pub fn catalog(&self) -> &StatusCatalog {
        &self.catalog
    }

    /// Font the badges are drawn with.
    pub fn font(&self) -> &ResolvedFont {
        &self.font
    }

    /// Underlying cache, for inspection.
    pub fn cache(&self) -> &BadgeCache {
        &self.cache
    }
}
