//! Badge drawing and SVG serialization.

pub(crate) mod badge;
pub(crate) mod svg;
