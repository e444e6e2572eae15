//! Shared helpers for rendering and output.

pub mod date;
pub mod minify;
