//! Helpers shared by the configuration layer.

pub(crate) mod bits;
