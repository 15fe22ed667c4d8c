//! Core data model for deqora: the module matrix handed over by a QR
//! encoder, the style applied when rendering it, and builders for the
//! structured payloads a code can carry.
//!
//! This crate draws nothing. Rasterization and frames live in
//! `deqora_render`, file output in `deqora_export`.

pub mod content;
mod matrix;
mod style;

pub use matrix::{Module, ModuleMatrix};
pub use style::{Ecl, FrameKind, PatternKind, Rgb, StyleError, StyleSpec};
