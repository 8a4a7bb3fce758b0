use std::{path::Path, sync::Arc};

use crate::{
    config::FontConfig,
    foundation::error::{BadgeError, BadgeResult},
};

/// Generic CSS family used when no preferred font can be found.
pub const GENERIC_FAMILY: &str = "sans-serif";

/// Font picked for badge text, resolved once per service.
#[derive(Clone)]
pub struct ResolvedFont {
    family: String,
    font_bytes: Option<Arc<Vec<u8>>>,
}

impl std::fmt::Debug for ResolvedFont {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ResolvedFont")
            .field("family", &self.family)
            .field(
                "font_bytes_len",
                &self.font_bytes.as_ref().map(|b| b.len()),
            )
            .finish()
    }
}

impl ResolvedFont {
    /// Generic family with built-in metrics and no font data.
    pub fn builtin() -> Self {
        Self {
            family: GENERIC_FAMILY.to_owned(),
            font_bytes: None,
        }
    }

    /// Font family name as matched in the font database.
    pub fn family(&self) -> &str {
        &self.family
    }

    /// Raw font file bytes, absent for the built-in fallback.
    pub fn font_bytes(&self) -> Option<&[u8]> {
        self.font_bytes.as_deref().map(Vec::as_slice)
    }

    /// Whether this is the built-in fallback.
    pub fn is_builtin(&self) -> bool {
        self.font_bytes.is_none()
    }

    /// Value for a CSS `font-family` declaration, always ending in the generic family.
    pub fn css_font_family(&self) -> String {
        if self.is_builtin() {
            GENERIC_FAMILY.to_owned()
        } else {
            format!("'{}', {GENERIC_FAMILY}", self.family.replace('\'', ""))
        }
    }
}

/// Resolve the first available family of `cfg.families`.
///
/// Looks in system fonts (when enabled) and in every `.ttf`/`.otf`/`.ttc` file of
/// `cfg.font_dirs`. Returns [`BadgeError::Font`] when nothing matches; callers are expected to
/// fall back to [`ResolvedFont::builtin`].
pub fn resolve_font(cfg: &FontConfig) -> BadgeResult<ResolvedFont> {
    let mut db = usvg::fontdb::Database::new();
    if cfg.load_system_fonts {
        db.load_system_fonts();
    }
    for dir in &cfg.font_dirs {
        load_fonts_from_dir(&mut db, dir);
    }

    if db.is_empty() {
        return Err(BadgeError::font("font database is empty"));
    }

    for family in &cfg.families {
        let families = [usvg::fontdb::Family::Name(family.as_str())];
        let query = usvg::fontdb::Query {
            families: &families,
            ..Default::default()
        };
        let Some(id) = db.query(&query) else {
            tracing::debug!(family = %family, "font family not available");
            continue;
        };
        let Some(bytes) = db.with_face_data(id, |data, _index| data.to_vec()) else {
            continue;
        };
        return Ok(ResolvedFont {
            family: family.clone(),
            font_bytes: Some(Arc::new(bytes)),
        });
    }

    Err(BadgeError::font(format!(
        "none of the preferred families is available: {:?}",
        cfg.families
    )))
}

fn load_fonts_from_dir(db: &mut usvg::fontdb::Database, dir: &Path) {
    let Ok(rd) = std::fs::read_dir(dir) else {
        tracing::debug!(dir = %dir.display(), "font dir not readable");
        return;
    };

    for entry in rd.flatten() {
        let path = entry.path();
        if !path.is_file() {
            continue;
        }
        let Some(ext) = path.extension().and_then(|s| s.to_str()) else {
            continue;
        };
        let ext = ext.to_ascii_lowercase();
        if ext != "ttf" && ext != "otf" && ext != "ttc" {
            continue;
        }
        if let Err(err) = db.load_font_file(&path) {
            tracing::debug!(path = %path.display(), error = %err, "skipping unreadable font file");
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/text/font.rs"]
mod tests;
