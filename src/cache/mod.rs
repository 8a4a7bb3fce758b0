//! Process-lifetime badge cache.

pub(crate) mod store;
