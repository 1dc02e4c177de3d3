//! HTTP handler functions, grouped by resource.

pub mod categories;
pub mod phrases;
