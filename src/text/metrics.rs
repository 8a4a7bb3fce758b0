use std::borrow::Cow;

use crate::{
    foundation::error::{BadgeError, BadgeResult},
    text::font::ResolvedFont,
};

/// Font size, in pixels, of the built-in advance table.
const BUILTIN_SIZE_PX: f32 = 11.0;

/// Measures the horizontal advance of a single line of badge text.
///
/// Uses Parley shaping when the resolved font carries font data, and a built-in sans-serif advance
/// table otherwise. Results are deterministic for a given font and size.
pub struct TextMeasurer {
    size_px: f32,
    shaper: Option<ParleyShaper>,
}

impl std::fmt::Debug for TextMeasurer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TextMeasurer")
            .field("size_px", &self.size_px)
            .field(
                "family",
                &self.shaper.as_ref().map(|s| s.family_name.as_str()),
            )
            .finish()
    }
}

impl TextMeasurer {
    /// Measurer over `font` at `size_px`.
    pub fn new(font: &ResolvedFont, size_px: f32) -> BadgeResult<Self> {
        if !size_px.is_finite() || size_px <= 0.0 {
            return Err(BadgeError::validation(
                "font size_px must be finite and > 0",
            ));
        }
        let shaper = match font.font_bytes() {
            Some(bytes) => Some(ParleyShaper::new(bytes, font.family())?),
            None => None,
        };
        Ok(Self { size_px, shaper })
    }

    /// Measurer that always uses the built-in advance table.
    pub fn builtin(size_px: f32) -> BadgeResult<Self> {
        Self::new(&ResolvedFont::builtin(), size_px)
    }

    /// Whether measurements come from the built-in advance table.
    pub fn is_builtin(&self) -> bool {
        self.shaper.is_none()
    }

    /// Font size in pixels.
    pub fn size_px(&self) -> f32 {
        self.size_px
    }

    /// Advance width of `text` in pixels.
    pub fn measure(&mut self, text: &str) -> f32 {
        match self.shaper.as_mut() {
            Some(shaper) => shaper.advance(text, self.size_px),
            None => builtin_advance(text, self.size_px),
        }
    }
}

struct ParleyShaper {
    font_ctx: parley::FontContext,
    layout_ctx: parley::LayoutContext<()>,
    family_name: String,
}

impl ParleyShaper {
    /// Register `font_bytes` and pick the face family named `family`.
    ///
    /// Collections register several families; measuring with any other one would let the width
    /// drift from the font the document declares.
    fn new(font_bytes: &[u8], family: &str) -> BadgeResult<Self> {
        let mut font_ctx = parley::FontContext::default();
        let families = font_ctx
            .collection
            .register_fonts(parley::fontique::Blob::from(font_bytes.to_vec()), None);
        if families.is_empty() {
            return Err(BadgeError::font("no font families registered from font bytes"));
        }
        let mut family_name = None;
        for (id, _) in &families {
            if let Some(name) = font_ctx.collection.family_name(*id)
                && name.eq_ignore_ascii_case(family)
            {
                family_name = Some(name.to_string());
                break;
            }
        }
        let family_name = family_name.ok_or_else(|| {
            BadgeError::font(format!("font bytes do not contain family '{family}'"))
        })?;

        Ok(Self {
            font_ctx,
            layout_ctx: parley::LayoutContext::new(),
            family_name,
        })
    }

    fn advance(&mut self, text: &str, size_px: f32) -> f32 {
        let mut builder = self
            .layout_ctx
            .ranged_builder(&mut self.font_ctx, text, 1.0, true);
        builder.push_default(parley::style::StyleProperty::FontStack(
            parley::style::FontStack::Source(Cow::Owned(self.family_name.clone())),
        ));
        builder.push_default(parley::style::StyleProperty::FontSize(size_px));

        let mut layout: parley::Layout<()> = builder.build(text);
        layout.break_all_lines(None);
        layout.width()
    }
}

/// Sum of per-glyph advances from a Verdana-like table, scaled from 11px.
fn builtin_advance(text: &str, size_px: f32) -> f32 {
    let at_11: f32 = text.chars().map(builtin_char_advance).sum();
    at_11 * size_px / BUILTIN_SIZE_PX
}

fn builtin_char_advance(ch: char) -> f32 {
    match ch {
        'a' => 6.65,
        'b' | 'd' | 'g' | 'p' | 'q' => 6.80,
        'c' | 's' => 5.72,
        'e' => 6.54,
        'f' => 3.78,
        'h' | 'n' | 'u' => 6.91,
        'i' | 'l' => 3.02,
        'j' => 3.77,
        'k' | 'v' | 'x' | 'y' => 6.45,
        'm' => 10.60,
        'o' => 6.67,
        'r' => 4.66,
        't' => 4.25,
        'w' => 8.91,
        'z' => 5.57,
        ' ' => 3.87,
        'I' => 4.62,
        'J' => 5.01,
        'M' | 'W' => 10.00,
        'A'..='Z' => 7.52,
        '0'..='9' => 7.00,
        '.' | ',' | ':' | ';' | '\'' | '!' | '|' => 3.91,
        '-' | '(' | ')' | '[' | ']' => 4.99,
        _ => 7.00,
    }
}

#[cfg(test)]
#[path = "../../tests/unit/text/metrics.rs"]
mod tests;
