//! Font resolution and text measurement.

pub(crate) mod font;
pub(crate) mod metrics;
