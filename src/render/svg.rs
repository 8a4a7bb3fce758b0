//! SVG serialization of [`BadgeDocument`]s.
//!
//! Output is UTF-8, starts with an XML declaration and the generator comment, and styles every
//! shape through inline CSS so the document renders the same without external stylesheets.

use std::io::{self, Write};

use crate::{
    foundation::color::Rgba8,
    render::badge::{BadgeDocument, DrawOp},
};

/// Media type of the serialized documents.
pub const CONTENT_TYPE: &str = "image/svg+xml";

const SVG_NAMESPACE_URI: &str = "http://www.w3.org/2000/svg";

/// Write `doc` as a standalone SVG document.
pub fn write_document(doc: &BadgeDocument, out: &mut dyn Write) -> io::Result<()> {
    let width = doc.canvas.width;
    let height = doc.canvas.height;

    writeln!(out, r#"<?xml version="1.0" encoding="UTF-8"?>"#)?;
    writeln!(out, "<!--{}-->", doc.comment.replace("--", "- -"))?;
    writeln!(
        out,
        r#"<svg xmlns="{SVG_NAMESPACE_URI}" width="{width}" height="{height}" viewBox="0 0 {width} {height}">"#
    )?;
    writeln!(
        out,
        r#"<g style="font-family:{};font-size:{}px;">"#,
        escape_attr(&doc.font_family),
        fmt_num(f64::from(doc.font_size_px)),
    )?;

    for op in &doc.ops {
        match op {
            DrawOp::FillRoundedRect { shape, color } => {
                let r = shape.rect();
                let radius = shape.radii().top_left;
                writeln!(
                    out,
                    r#"<rect x="{}" y="{}" width="{}" height="{}" rx="{}" ry="{}" style="{}"/>"#,
                    fmt_num(r.x0),
                    fmt_num(r.y0),
                    fmt_num(r.width()),
                    fmt_num(r.height()),
                    fmt_num(radius),
                    fmt_num(radius),
                    fill_style(*color),
                )?;
            }
            DrawOp::FillRect { rect, color } => {
                writeln!(
                    out,
                    r#"<rect x="{}" y="{}" width="{}" height="{}" style="{}"/>"#,
                    fmt_num(rect.x0),
                    fmt_num(rect.y0),
                    fmt_num(rect.width()),
                    fmt_num(rect.height()),
                    fill_style(*color),
                )?;
            }
            DrawOp::Text {
                text,
                origin,
                color,
            } => {
                writeln!(
                    out,
                    r#"<text x="{}" y="{}" style="{}">{}</text>"#,
                    fmt_num(origin.x),
                    fmt_num(origin.y),
                    fill_style(*color),
                    escape_text(text),
                )?;
            }
        }
    }

    writeln!(out, "</g>")?;
    writeln!(out, "</svg>")?;
    out.flush()
}

fn fill_style(color: Rgba8) -> String {
    if color.is_opaque() {
        format!("fill:{};stroke:none;", color.css_rgb())
    } else {
        format!(
            "fill:{};fill-opacity:{};stroke:none;",
            color.css_rgb(),
            fmt_num(f64::from(color.alpha_f32()))
        )
    }
}

/// Integers print without a fraction; everything else is rounded to three decimals.
fn fmt_num(v: f64) -> String {
    if v.fract() == 0.0 {
        return format!("{}", v as i64);
    }
    let s = format!("{v:.3}");
    s.trim_end_matches('0').trim_end_matches('.').to_owned()
}

fn escape_text(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for ch in s.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            _ => out.push(ch),
        }
    }
    out
}

fn escape_attr(s: &str) -> String {
    escape_text(s).replace('"', "&quot;")
}

#[cfg(test)]
#[path = "../../tests/unit/render/svg.rs"]
mod tests;
